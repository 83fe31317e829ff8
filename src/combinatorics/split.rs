//! Splitting a sequence by a combination of its indices.

/// Split `items` into the entries at `combination` and everything else.
///
/// `combination` must be strictly increasing, as produced by
/// [`Combinations`](super::Combinations). Both halves keep the relative order
/// the entries had in `items`.
pub fn split_by_combination<T: Clone>(items: &[T], combination: &[usize]) -> (Vec<T>, Vec<T>) {
    let mut selected = Vec::with_capacity(combination.len());
    let mut complement = Vec::with_capacity(items.len().saturating_sub(combination.len()));

    let mut picks = combination.iter().peekable();
    for (i, item) in items.iter().enumerate() {
        if picks.next_if(|&&pick| pick == i).is_some() {
            selected.push(item.clone());
        } else {
            complement.push(item.clone());
        }
    }

    (selected, complement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinatorics::Combinations;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_split_preserves_order() {
        let items = ['a', 'b', 'c', 'd', 'e'];
        let (selected, complement) = split_by_combination(&items, &[1, 3]);
        assert_eq!(selected, vec!['b', 'd']);
        assert_eq!(complement, vec!['a', 'c', 'e']);
    }

    #[test]
    fn test_split_empty_combination() {
        let items = [10, 20, 30];
        let (selected, complement) = split_by_combination(&items, &[]);
        assert!(selected.is_empty());
        assert_eq!(complement, vec![10, 20, 30]);
    }

    #[test]
    fn test_split_partitions_every_half_choice() {
        for n in 0..=8 {
            let items: Vec<usize> = (0..n).collect();
            let k = n / 2;

            for combo in Combinations::new(n, k).unwrap() {
                let (selected, complement) = split_by_combination(&items, &combo);
                assert_eq!(selected.len(), k);
                assert_eq!(complement.len(), n - k);
                assert_eq!(selected, combo);

                let mut seen: FxHashSet<usize> = FxHashSet::default();
                for i in selected.iter().chain(complement.iter()) {
                    assert!(seen.insert(*i), "index {} appears twice", i);
                }
                assert_eq!(seen.len(), n);
            }
        }
    }
}
