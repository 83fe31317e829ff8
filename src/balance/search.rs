//! Scoring candidates and reducing them to the best-balanced one.
//!
//! The reduction is a plain fold: it sees candidates in enumeration order and
//! keeps the first one with the lowest score. Later candidates only replace it
//! when they score strictly lower.

use tracing::debug;

use crate::balance::config::BalanceStats;
use crate::model::TeamPair;

/// A candidate after size correction, with its balance score.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluated {
    /// The pair as scored, wings swapped if that was needed.
    pub pair: TeamPair,
    /// Absolute strength difference between the teams.
    pub score: f64,
    /// Whether the wings were swapped.
    pub swapped: bool,
}

/// Apply the wing swap size correction to `pair`, then score it.
pub fn evaluate(mut pair: TeamPair) -> Evaluated {
    let swapped = pair.balance_sizes();
    let score = pair.score();
    Evaluated {
        pair,
        score,
        swapped,
    }
}

/// The best candidate found so far.
#[derive(Debug, Clone, PartialEq)]
pub struct BestCandidate {
    /// The winning pair, size correction applied.
    pub pair: TeamPair,
    /// Its balance score.
    pub score: f64,
    /// Zero-based position of the candidate in enumeration order.
    pub ordinal: u64,
}

/// Running state of the min-score reduction.
#[derive(Debug, Clone, Default)]
pub struct BestSoFar {
    best: Option<BestCandidate>,
    stats: BalanceStats,
    next_ordinal: u64,
}

impl BestSoFar {
    /// Start a reduction whose first candidate has ordinal `first_ordinal`.
    pub fn new(first_ordinal: u64) -> Self {
        Self {
            next_ordinal: first_ordinal,
            ..Default::default()
        }
    }

    /// Score the next candidate in enumeration order.
    pub fn push(&mut self, pair: TeamPair) {
        let evaluated = evaluate(pair);
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;

        self.stats.candidates += 1;
        if evaluated.swapped {
            self.stats.size_swaps += 1;
        }

        if self.improves_on(evaluated.score) {
            debug!(score = evaluated.score, ordinal, "new best split");
            self.stats.improvements += 1;
            self.stats.best_score = Some(evaluated.score);
            self.best = Some(BestCandidate {
                pair: evaluated.pair,
                score: evaluated.score,
                ordinal,
            });
        }
    }

    /// Fold in a reduction over candidates that come after all of ours.
    ///
    /// Its best only wins if strictly better, so absorbing the pieces of a
    /// split-up enumeration in order gives the same answer as one pass.
    pub fn absorb(&mut self, later: BestSoFar) {
        self.stats.merge(&later.stats);
        self.next_ordinal = self.next_ordinal.max(later.next_ordinal);

        if let Some(candidate) = later.best {
            if self.improves_on(candidate.score) {
                self.best = Some(candidate);
            }
        }
    }

    fn improves_on(&self, score: f64) -> bool {
        self.best.as_ref().map_or(true, |best| score < best.score)
    }

    /// The best candidate so far, if any.
    pub fn best(&self) -> Option<&BestCandidate> {
        self.best.as_ref()
    }

    /// Counters collected so far.
    pub fn stats(&self) -> &BalanceStats {
        &self.stats
    }

    /// Mutable access to the counters, for timing updates.
    pub fn stats_mut(&mut self) -> &mut BalanceStats {
        &mut self.stats
    }

    /// Finish the reduction.
    pub fn finish(self) -> (Option<BestCandidate>, BalanceStats) {
        (self.best, self.stats)
    }
}

/// Reduce `candidates` to the first one with the lowest score.
///
/// Returns `None` when there are no candidates.
pub fn select_best<I>(candidates: I) -> Option<BestCandidate>
where
    I: IntoIterator<Item = TeamPair>,
{
    candidates
        .into_iter()
        .fold(BestSoFar::new(0), |mut best, pair| {
            best.push(pair);
            best
        })
        .finish()
        .0
}
