//! # Team Balancer
//!
//! Splits a roster of players, grouped into positional categories, into the
//! two most evenly matched teams by brute force.
//!
//! ## Features
//!
//! - **Lazy enumeration**: every half-sized combination of each category,
//!   in lexicographic order, without materializing the search space
//! - **Exhaustive search**: every cross-category candidate is scored; the
//!   first with the lowest score wins
//! - **Execution modes**: inline, producer/consumer over a bounded channel,
//!   or rayon-parallel, all with identical results
//! - **JSON I/O**: rosters, configuration and results via serde
//!
//! ## Quick Start
//!
//! ```
//! use team_balancer::{balance, RosterGenerator};
//!
//! let roster = RosterGenerator::new().with_seed(42).generate();
//! let result = balance(&roster).unwrap();
//! assert!(result.pair.covers(&roster));
//! ```
//!
//! ## Modules
//!
//! - [`combinatorics`]: combination enumeration and splitting
//! - [`model`]: players, rosters and teams
//! - [`balance`]: the search itself
//!
//! ## Architecture
//!
//! ```text
//!   Roster ──► Candidates ──► evaluate ──► BestSoFar ──► BalanceResult
//!              (4 nested      (wing swap,  (min score,
//!               Combinations)  score)       first wins)
//! ```

#![warn(missing_docs)]

/// Combination enumeration.
pub mod combinatorics;

/// Players, rosters and teams.
pub mod model;

/// Exhaustive team balancing.
pub mod balance;

// Re-export commonly used types at crate root for convenience
pub use balance::{balance, BalanceConfig, BalanceError, BalanceResult, BalanceStats, ExecutionMode, TeamBalancer};
pub use combinatorics::{CombinationError, Combinations};
pub use model::{Category, Player, Roster, RosterError, RosterGenerator, Team, TeamPair};
