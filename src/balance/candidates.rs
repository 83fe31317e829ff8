//! Lazy enumeration of every candidate team pair.
//!
//! Each category is enumerated independently, choosing `floor(n / 2)` of its
//! `n` players for team A. The four enumerations are nested in
//! [`Category::SEARCH_ORDER`], outermost first, like an odometer: the
//! innermost category advances on every step and resets whenever an outer
//! one moves. Nothing beyond the current combination of each category is
//! held in memory.

use crate::combinatorics::{binomial, split_by_combination, CombinationError, Combinations};
use crate::model::{Category, Roster, Team, TeamPair};

/// Number of categories nested in the search.
const AXES: usize = Category::SEARCH_ORDER.len();

/// The choices available for one category.
#[derive(Debug, Clone)]
enum Axis {
    /// Every half-sized combination, kept unstarted so it can be restarted.
    Enumerate(Combinations),
    /// A single fixed combination.
    Pinned(Vec<usize>),
}

impl Axis {
    fn start(&self) -> AxisIter {
        match self {
            Axis::Enumerate(combinations) => AxisIter::Enumerate(combinations.clone()),
            Axis::Pinned(combination) => AxisIter::Pinned(Some(combination.clone()).into_iter()),
        }
    }
}

#[derive(Debug, Clone)]
enum AxisIter {
    Enumerate(Combinations),
    Pinned(std::option::IntoIter<Vec<usize>>),
}

impl Iterator for AxisIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            AxisIter::Enumerate(combinations) => combinations.next(),
            AxisIter::Pinned(once) => once.next(),
        }
    }
}

/// Size of team A's share of a category with `n` players.
pub fn half(n: usize) -> usize {
    n / 2
}

/// Total number of candidates [`Candidates::new`] yields for `roster`.
///
/// Returns `None` if the count overflows a `u64`.
pub fn search_space(roster: &Roster) -> Option<u64> {
    Category::SEARCH_ORDER.iter().try_fold(1u64, |total, &category| {
        let n = roster.category(category).len();
        total.checked_mul(binomial(n, half(n))?)
    })
}

/// Number of candidates per combination of the outermost category.
pub fn inner_search_space(roster: &Roster) -> Option<u64> {
    Category::SEARCH_ORDER[1..].iter().try_fold(1u64, |total, &category| {
        let n = roster.category(category).len();
        total.checked_mul(binomial(n, half(n))?)
    })
}

/// Iterator over every candidate [`TeamPair`] of a roster.
///
/// Team A receives the selected players of each category, team B the
/// complements, each in the same category slot and in roster order. Every
/// yielded pair is a fresh value with no size correction applied.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    roster: &'a Roster,
    axes: [Axis; AXES],
    iters: [AxisIter; AXES],
    current: [Vec<usize>; AXES],
    started: bool,
    exhausted: bool,
}

impl<'a> Candidates<'a> {
    /// Enumerate every candidate of `roster`.
    pub fn new(roster: &'a Roster) -> Result<Self, CombinationError> {
        Self::build(roster, None)
    }

    /// Enumerate only the candidates whose outermost category uses `outer`.
    ///
    /// Fails if `outer` is not a valid half-sized combination of that category.
    pub fn with_pinned_outer(roster: &'a Roster, outer: Vec<usize>) -> Result<Self, CombinationError> {
        let n = roster.category(Category::SEARCH_ORDER[0]).len();
        let valid = outer.len() == half(n)
            && outer.windows(2).all(|w| w[0] < w[1])
            && outer.last().map_or(true, |&last| last < n);
        if !valid {
            return Err(CombinationError::InvalidCombination { n, indices: outer });
        }
        Self::build(roster, Some(outer))
    }

    fn build(roster: &'a Roster, pinned_outer: Option<Vec<usize>>) -> Result<Self, CombinationError> {
        let axis = |slot: usize| -> Result<Axis, CombinationError> {
            let n = roster.category(Category::SEARCH_ORDER[slot]).len();
            match (slot, &pinned_outer) {
                (0, Some(outer)) => Ok(Axis::Pinned(outer.clone())),
                _ => Ok(Axis::Enumerate(Combinations::new(n, half(n))?)),
            }
        };

        let axes = [axis(0)?, axis(1)?, axis(2)?, axis(3)?];
        let iters = [axes[0].start(), axes[1].start(), axes[2].start(), axes[3].start()];

        Ok(Self {
            roster,
            axes,
            iters,
            current: Default::default(),
            started: false,
            exhausted: false,
        })
    }

    /// Move to the next tuple of combinations, odometer style.
    fn advance(&mut self) -> bool {
        if !self.started {
            self.started = true;
            for slot in 0..AXES {
                match self.iters[slot].next() {
                    Some(combination) => self.current[slot] = combination,
                    None => return false,
                }
            }
            return true;
        }

        for slot in (0..AXES).rev() {
            if let Some(combination) = self.iters[slot].next() {
                self.current[slot] = combination;

                // Restart every inner axis from its first combination.
                for inner in slot + 1..AXES {
                    self.iters[inner] = self.axes[inner].start();
                    match self.iters[inner].next() {
                        Some(combination) => self.current[inner] = combination,
                        None => return false,
                    }
                }
                return true;
            }
        }
        false
    }

    fn assemble(&self) -> TeamPair {
        let mut team_a = Team::default();
        let mut team_b = Team::default();

        for (slot, &category) in Category::SEARCH_ORDER.iter().enumerate() {
            let (selected, complement) =
                split_by_combination(self.roster.category(category), &self.current[slot]);
            *team_a.players_mut(category) = selected;
            *team_b.players_mut(category) = complement;
        }

        TeamPair::new(team_a, team_b)
    }
}

impl Iterator for Candidates<'_> {
    type Item = TeamPair;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.advance() {
            self.exhausted = true;
            return None;
        }
        Some(self.assemble())
    }
}

impl std::iter::FusedIterator for Candidates<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Player, RosterGenerator};
    use rustc_hash::FxHashSet;

    fn players(ids: std::ops::RangeInclusive<u32>) -> Vec<Player> {
        ids.map(|id| Player::new(id, id as f64)).collect()
    }

    fn roster() -> Roster {
        Roster::new(players(3..=4), players(1..=2), players(5..=9), players(10..=13))
    }

    #[test]
    fn test_search_space() {
        let roster = roster();
        // centers C(2,1) * goalies C(2,1) * wings C(5,2) * forwards C(4,2)
        assert_eq!(search_space(&roster), Some(2 * 2 * 10 * 6));
        assert_eq!(inner_search_space(&roster), Some(2 * 10 * 6));
        assert_eq!(Candidates::new(&roster).unwrap().count(), 240);
    }

    #[test]
    fn test_first_candidate_takes_leading_players() {
        let roster = roster();
        let first = Candidates::new(&roster).unwrap().next().unwrap();

        assert_eq!(first.team_a.centers, players(1..=1));
        assert_eq!(first.team_a.goalies, players(3..=3));
        assert_eq!(first.team_a.wings, players(5..=6));
        assert_eq!(first.team_a.forwards, players(10..=11));

        assert_eq!(first.team_b.centers, players(2..=2));
        assert_eq!(first.team_b.goalies, players(4..=4));
        assert_eq!(first.team_b.wings, players(7..=9));
        assert_eq!(first.team_b.forwards, players(12..=13));
    }

    #[test]
    fn test_innermost_category_advances_first() {
        let roster = roster();
        let mut candidates = Candidates::new(&roster).unwrap();
        candidates.next();
        let second = candidates.next().unwrap();

        assert_eq!(second.team_a.centers, players(1..=1));
        assert_eq!(second.team_a.goalies, players(3..=3));
        assert_eq!(second.team_a.wings, players(5..=6));
        assert_eq!(
            second.team_a.forwards,
            vec![Player::new(10, 10.0), Player::new(12, 12.0)]
        );

        // After all forwards and wings choices, goalies move on.
        let after_inner = Candidates::new(&roster).unwrap().nth(60).unwrap();
        assert_eq!(after_inner.team_a.centers, players(1..=1));
        assert_eq!(after_inner.team_a.goalies, players(4..=4));
        assert_eq!(after_inner.team_a.wings, players(5..=6));
        assert_eq!(after_inner.team_a.forwards, players(10..=11));
    }

    #[test]
    fn test_every_candidate_partitions_the_roster() {
        let roster = RosterGenerator::new()
            .with_size(Category::Wings, 5)
            .with_size(Category::Forwards, 4)
            .with_seed(3)
            .generate();

        let mut distinct: FxHashSet<Vec<u32>> = FxHashSet::default();
        for pair in Candidates::new(&roster).unwrap() {
            assert!(pair.covers(&roster));
            for category in Category::SEARCH_ORDER {
                let n = roster.category(category).len();
                assert_eq!(pair.team_a.players(category).len(), half(n));
                assert_eq!(pair.team_b.players(category).len(), n - half(n));
            }
            distinct.insert(pair.team_a.iter().map(|p| p.id).collect());
        }
        assert_eq!(distinct.len() as u64, search_space(&roster).unwrap());
    }

    #[test]
    fn test_pinned_outer_is_a_contiguous_slice() {
        let roster = roster();
        let all: Vec<TeamPair> = Candidates::new(&roster).unwrap().collect();

        let pinned: Vec<TeamPair> = Candidates::with_pinned_outer(&roster, vec![1])
            .unwrap()
            .collect();
        assert_eq!(pinned.len(), 120);
        assert_eq!(pinned[..], all[120..]);
    }

    #[test]
    fn test_pinned_outer_rejects_bad_combination() {
        let roster = roster();
        assert!(Candidates::with_pinned_outer(&roster, vec![0, 1]).is_err());
        assert!(Candidates::with_pinned_outer(&roster, vec![2]).is_err());
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let roster = roster();
        let mut candidates = Candidates::new(&roster).unwrap();
        assert_eq!(candidates.by_ref().count(), 240);
        assert!(candidates.next().is_none());
    }
}
