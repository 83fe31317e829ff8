//! Exhaustive team balancer.
//!
//! [`TeamBalancer`] walks every candidate of a roster (see
//! [`Candidates`](super::candidates::Candidates)), corrects team sizes, scores
//! each pair and keeps the best-balanced one. The execution mode in
//! [`BalanceConfig`] only changes how that work is scheduled.

use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

use crate::balance::candidates::{half, inner_search_space, search_space, Candidates};
use crate::balance::config::{BalanceConfig, BalanceStats, ConfigError, ExecutionMode};
use crate::balance::search::BestSoFar;
use crate::combinatorics::{CombinationError, Combinations};
use crate::model::{Category, Roster, RosterError, TeamPair};

/// Errors that stop a balancing run.
#[derive(Debug, Clone, PartialEq)]
pub enum BalanceError {
    /// The roster fails [`Roster::validate`].
    InvalidRoster(RosterError),
    /// The balancer configuration is invalid.
    Config(ConfigError),
    /// A category could not be enumerated.
    Combination(CombinationError),
    /// The search finished without scoring a single candidate.
    NoCandidate,
    /// A worker thread or thread pool failed.
    Worker(String),
}

impl std::fmt::Display for BalanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRoster(e) => write!(f, "Invalid roster: {}", e),
            Self::Config(e) => write!(f, "Invalid configuration: {}", e),
            Self::Combination(e) => write!(f, "Enumeration failed: {}", e),
            Self::NoCandidate => write!(f, "No valid balance found"),
            Self::Worker(e) => write!(f, "Worker failed: {}", e),
        }
    }
}

impl std::error::Error for BalanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRoster(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Combination(e) => Some(e),
            Self::NoCandidate | Self::Worker(_) => None,
        }
    }
}

impl From<RosterError> for BalanceError {
    fn from(e: RosterError) -> Self {
        Self::InvalidRoster(e)
    }
}

impl From<ConfigError> for BalanceError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<CombinationError> for BalanceError {
    fn from(e: CombinationError) -> Self {
        Self::Combination(e)
    }
}

/// Outcome of a balancing run.
#[derive(Debug, Clone)]
pub struct BalanceResult {
    /// The best-balanced pair, wing swap applied if it was needed.
    pub pair: TeamPair,
    /// Its balance score.
    pub score: f64,
    /// Position of the winning candidate in enumeration order.
    pub ordinal: u64,
    /// Counters and timing for the run.
    pub stats: BalanceStats,
}

/// Splits a roster into the two most evenly matched teams.
///
/// # Example
/// ```
/// use team_balancer::balance::{BalanceConfig, TeamBalancer};
/// use team_balancer::model::RosterGenerator;
///
/// let roster = RosterGenerator::new().with_seed(5).generate();
/// let balancer = TeamBalancer::new(BalanceConfig::default()).unwrap();
/// let result = balancer.balance(&roster).unwrap();
/// assert!(result.pair.covers(&roster));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TeamBalancer {
    config: BalanceConfig,
}

impl TeamBalancer {
    /// Create a balancer, rejecting invalid configuration.
    pub fn new(config: BalanceConfig) -> Result<Self, BalanceError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The balancer's configuration.
    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    /// Find the best-balanced split of `roster`.
    ///
    /// The roster is validated first. Among equally balanced splits the one
    /// enumerated first is returned, in every execution mode.
    pub fn balance(&self, roster: &Roster) -> Result<BalanceResult, BalanceError> {
        self.balance_with_callback(roster, 0, |_| {})
    }

    /// Find the best-balanced split, reporting progress.
    ///
    /// `callback` runs every `interval` scored candidates (never when
    /// `interval` is 0). In parallel mode the workers do not report, and the
    /// callback runs once with the merged stats when all of them are done.
    pub fn balance_with_callback<F>(
        &self,
        roster: &Roster,
        interval: u64,
        mut callback: F,
    ) -> Result<BalanceResult, BalanceError>
    where
        F: FnMut(&BalanceStats),
    {
        roster.validate()?;

        info!(
            players = roster.len(),
            candidates = ?search_space(roster),
            mode = ?self.config.mode,
            "balancing roster"
        );

        let start_time = Instant::now();

        let mut best = match self.config.mode {
            ExecutionMode::Parallel => {
                let mut best = self.run_parallel(roster)?;
                if interval > 0 {
                    let stats = best.stats_mut();
                    stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
                    stats.update_rate();
                    callback(best.stats());
                }
                best
            }
            mode => {
                let mut report = |best: &mut BestSoFar| {
                    if interval > 0 && best.stats().candidates % interval == 0 {
                        let stats = best.stats_mut();
                        stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
                        stats.update_rate();
                        callback(best.stats());
                    }
                };
                if mode == ExecutionMode::Pipelined {
                    self.run_pipelined(roster, &mut report)?
                } else {
                    self.run_sequential(roster, &mut report)?
                }
            }
        };

        let stats = best.stats_mut();
        stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        stats.update_rate();

        let (winner, stats) = best.finish();
        let winner = winner.ok_or(BalanceError::NoCandidate)?;

        info!(
            score = winner.score,
            ordinal = winner.ordinal,
            candidates = stats.candidates,
            size_swaps = stats.size_swaps,
            elapsed = stats.elapsed_seconds,
            "balancing complete"
        );

        Ok(BalanceResult {
            pair: winner.pair,
            score: winner.score,
            ordinal: winner.ordinal,
            stats,
        })
    }

    /// Enumerate and score inline.
    fn run_sequential<R>(&self, roster: &Roster, report: &mut R) -> Result<BestSoFar, BalanceError>
    where
        R: FnMut(&mut BestSoFar),
    {
        let mut best = BestSoFar::new(0);
        for pair in Candidates::new(roster)? {
            best.push(pair);
            report(&mut best);
        }
        Ok(best)
    }

    /// One producer thread feeds candidates through a bounded FIFO channel;
    /// the calling thread scores them in arrival order.
    fn run_pipelined<R>(&self, roster: &Roster, report: &mut R) -> Result<BestSoFar, BalanceError>
    where
        R: FnMut(&mut BestSoFar),
    {
        let candidates = Candidates::new(roster)?;
        let (tx, rx) = mpsc::sync_channel::<TeamPair>(self.config.channel_capacity);

        thread::scope(|scope| {
            let producer = scope.spawn(move || {
                for pair in candidates {
                    if tx.send(pair).is_err() {
                        break;
                    }
                }
            });

            let mut best = BestSoFar::new(0);
            for pair in rx {
                best.push(pair);
                report(&mut best);
            }

            producer
                .join()
                .map_err(|_| BalanceError::Worker("candidate producer panicked".to_string()))?;
            Ok(best)
        })
    }

    /// Search each combination of the outermost category on its own rayon
    /// task, then absorb the partial results in enumeration order.
    fn run_parallel(&self, roster: &Roster) -> Result<BestSoFar, BalanceError> {
        let outer = roster.category(Category::SEARCH_ORDER[0]).len();
        let outer_combinations: Vec<Vec<usize>> = Combinations::new(outer, half(outer))?.collect();
        let stride = inner_search_space(roster).unwrap_or(u64::MAX);

        let search = || -> Result<Vec<BestSoFar>, CombinationError> {
            outer_combinations
                .par_iter()
                .enumerate()
                .map(|(i, combination)| -> Result<BestSoFar, CombinationError> {
                    let mut best = BestSoFar::new((i as u64).saturating_mul(stride));
                    for pair in Candidates::with_pinned_outer(roster, combination.clone())? {
                        best.push(pair);
                    }
                    Ok(best)
                })
                .collect()
        };

        let partials = match self.config.num_threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| BalanceError::Worker(e.to_string()))?
                .install(search)?,
            None => search()?,
        };

        let mut best = BestSoFar::new(0);
        for partial in partials {
            best.absorb(partial);
        }
        Ok(best)
    }
}

/// Balance `roster` with the default configuration.
pub fn balance(roster: &Roster) -> Result<BalanceResult, BalanceError> {
    TeamBalancer::default().balance(roster)
}
