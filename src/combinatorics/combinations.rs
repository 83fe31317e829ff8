//! Lazy lexicographic enumeration of index combinations.

use std::iter::FusedIterator;

/// Errors raised when an enumeration is requested with invalid arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinationError {
    /// More indices were requested than the set contains.
    ChooseExceedsSize {
        /// Size of the set.
        n: usize,
        /// Requested subset size.
        k: usize,
    },
    /// A supplied combination is not a strictly increasing, half-sized
    /// selection of indices below `n`.
    InvalidCombination {
        /// Size of the set.
        n: usize,
        /// The rejected indices.
        indices: Vec<usize>,
    },
}

impl std::fmt::Display for CombinationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombinationError::ChooseExceedsSize { n, k } => {
                write!(f, "Cannot choose {} indices out of {}", k, n)
            }
            CombinationError::InvalidCombination { n, indices } => {
                write!(f, "{:?} is not a valid combination of {} indices", indices, n)
            }
        }
    }
}

impl std::error::Error for CombinationError {}

/// Number of `k`-element subsets of an `n`-element set.
///
/// Returns `None` if `k > n` or the computation overflows a `u64`.
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return None;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;

    // C(n, i) = C(n, i - 1) * (n - i + 1) / i stays integral at every step.
    let mut count: u64 = 1;
    for i in 1..=k {
        count = count.checked_mul(n - i + 1)? / i;
    }
    Some(count)
}

/// Iterator over every strictly increasing sequence of `k` indices from `0..n`.
///
/// Combinations come out in lexicographic order, so `[0, 1, 2]` precedes
/// `[0, 1, 3]`. Each call to [`Combinations::new`] with the same arguments
/// reproduces the same sequence.
///
/// # Example
/// ```
/// use team_balancer::combinatorics::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(4, 2).unwrap().collect();
/// assert_eq!(all[0], vec![0, 1]);
/// assert_eq!(all.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    /// The combination returned by the next call to `next`, if any.
    indices: Option<Vec<usize>>,
    /// Combinations left to yield, when the total fits in a `u64`.
    remaining: Option<u64>,
}

impl Combinations {
    /// Start enumerating the `k`-subsets of `0..n`.
    ///
    /// Fails with [`CombinationError::ChooseExceedsSize`] when `k > n`.
    pub fn new(n: usize, k: usize) -> Result<Self, CombinationError> {
        if k > n {
            return Err(CombinationError::ChooseExceedsSize { n, k });
        }

        Ok(Self {
            n,
            indices: Some((0..k).collect()),
            remaining: binomial(n, k),
        })
    }

    /// Move `current` to its lexicographic successor.
    ///
    /// Returns `false` once `current` is the last combination.
    fn advance(n: usize, current: &mut [usize]) -> bool {
        let k = current.len();

        // Rightmost position that can still move right.
        let pivot = match (0..k).rev().find(|&i| current[i] < n - k + i) {
            Some(i) => i,
            None => return false,
        };

        current[pivot] += 1;
        for j in pivot + 1..k {
            current[j] = current[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.indices.take()?;

        let mut successor = current.clone();
        if Self::advance(self.n, &mut successor) {
            self.indices = Some(successor);
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.indices.is_none() {
            return (0, Some(0));
        }
        match self.remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(r) => (r, Some(r)),
            None => (1, None),
        }
    }
}

impl FusedIterator for Combinations {}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn collect(n: usize, k: usize) -> Vec<Vec<usize>> {
        Combinations::new(n, k).unwrap().collect()
    }

    #[test]
    fn test_four_choose_two_order() {
        assert_eq!(
            collect(4, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_choose_zero_yields_single_empty() {
        assert_eq!(collect(5, 0), vec![Vec::<usize>::new()]);
        assert_eq!(collect(0, 0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_choose_all_yields_identity() {
        assert_eq!(collect(5, 5), vec![vec![0, 1, 2, 3, 4]]);
        assert_eq!(collect(1, 1), vec![vec![0]]);
    }

    #[test]
    fn test_rejects_k_greater_than_n() {
        let err = Combinations::new(3, 4).unwrap_err();
        assert_eq!(err, CombinationError::ChooseExceedsSize { n: 3, k: 4 });
        assert!(err.to_string().contains("4"));
    }

    #[test]
    fn test_completeness_and_ordering() {
        for n in 0..=9 {
            for k in 0..=n {
                let all = collect(n, k);
                assert_eq!(all.len() as u64, binomial(n, k).unwrap(), "C({}, {})", n, k);

                let unique: FxHashSet<&Vec<usize>> = all.iter().collect();
                assert_eq!(unique.len(), all.len());

                for combo in &all {
                    assert_eq!(combo.len(), k);
                    assert!(combo.windows(2).all(|w| w[0] < w[1]));
                    assert!(combo.iter().all(|&i| i < n));
                }

                // Lexicographic, strictly ascending.
                assert!(all.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_deterministic_reinvocation() {
        assert_eq!(collect(7, 3), collect(7, 3));
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let mut combos = Combinations::new(5, 2).unwrap();
        assert_eq!(combos.size_hint(), (10, Some(10)));
        combos.next();
        combos.next();
        assert_eq!(combos.size_hint(), (8, Some(8)));
        let rest: Vec<_> = combos.by_ref().collect();
        assert_eq!(rest.len(), 8);
        assert_eq!(combos.size_hint(), (0, Some(0)));
        assert!(combos.next().is_none());
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(7, 3), Some(35));
        assert_eq!(binomial(10, 5), Some(252));
        assert_eq!(binomial(52, 5), Some(2_598_960));
        assert_eq!(binomial(3, 4), None);
        assert_eq!(binomial(200, 100), None);
    }
}
