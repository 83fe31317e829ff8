//! Exhaustive-search team balancing.
//!
//! This module turns a [`Roster`](crate::model::Roster) into the two most
//! evenly matched teams it can form.
//!
//! # Overview
//!
//! For every category of `n` players, team A takes `floor(n / 2)` of them and
//! team B the rest. Every combination of those per-category choices is a
//! candidate. Each candidate is:
//!
//! 1. Size corrected: if the teams' headcounts differ by more than one, their
//!    wings are swapped. Nothing else is ever swapped.
//! 2. Scored: the absolute difference of the teams' strengths, where a team's
//!    strength is the sum of its four per-category average strengths.
//! 3. Kept if it scores strictly lower than everything before it.
//!
//! ```text
//! score = | Σ avg(A[category]) - Σ avg(B[category]) |
//! ```
//!
//! There is no pruning. The search visits the full cross product, so its
//! cost is `Π C(n_i, n_i / 2)` candidates.
//!
//! # Example
//!
//! ```
//! use team_balancer::balance::{BalanceConfig, ExecutionMode, TeamBalancer};
//! use team_balancer::model::RosterGenerator;
//!
//! let roster = RosterGenerator::new().with_seed(3).generate();
//! let config = BalanceConfig::default().with_mode(ExecutionMode::Pipelined);
//! let result = TeamBalancer::new(config).unwrap().balance(&roster).unwrap();
//!
//! println!("Best score {:.3} after {} candidates", result.score, result.stats.candidates);
//! ```

pub mod balancer;
pub mod candidates;
pub mod config;
pub mod search;

pub use balancer::{balance, BalanceError, BalanceResult, TeamBalancer};
pub use candidates::{search_space, Candidates};
pub use config::{BalanceConfig, BalanceStats, ConfigError, ExecutionMode, DEFAULT_CHANNEL_CAPACITY};
pub use search::{evaluate, select_best, BestCandidate, BestSoFar, Evaluated};
