//! Insertion orders that control the shape of an unbalanced tree
//!
//! Inserting keys in ascending order into a [`BSTree`](crate::BSTree) produces a tree of height
//! `n`. Inserting the same keys in [`balanced_order`] produces a tree of height
//! `ceil(log2(n + 1))`, the smallest possible.

use std::iter::FusedIterator;
use std::ops::Range;

/// Returns the keys of `sorted` rearranged so that inserting them one at a time into an empty
/// unbalanced tree builds a tree of minimal height
///
/// The middle key comes first, followed by the balanced order of everything left of it, followed
/// by the balanced order of everything right of it. Spans with an even number of keys use the
/// lower of their two middle keys.
///
/// `sorted` must already be in ascending order. Unsorted input is not detected: the output is
/// still a permutation of the input but the resulting tree will not be balanced.
///
/// # Examples
///
/// ```
/// use unbalanced_bst::balanced_order;
///
/// assert_eq!(balanced_order(&[1, 2, 3, 4, 5, 6, 7]), &[4, 2, 1, 3, 6, 5, 7]);
/// assert_eq!(balanced_order(&[1, 2, 3, 4]), &[2, 1, 3, 4]);
/// assert_eq!(balanced_order::<i32>(&[]), &[]);
/// ```
pub fn balanced_order<T: Clone>(sorted: &[T]) -> Vec<T> {
    BalancedOrder::new(sorted).cloned().collect()
}

/// Lazily yields the keys of a sorted slice in [`balanced_order`]
///
/// Spans still waiting to be visited are kept on an explicit stack, so the iterator holds at most
/// `O(log n)` of them at a time.
#[derive(Debug, Clone)]
pub struct BalancedOrder<'a, T> {
    sorted: &'a [T],
    spans: Vec<Range<usize>>,
    remaining: usize,
}

impl<'a, T> BalancedOrder<'a, T> {
    pub fn new(sorted: &'a [T]) -> Self {
        let spans = if sorted.is_empty() {
            Vec::new()
        } else {
            vec![0..sorted.len()]
        };

        Self {
            sorted,
            spans,
            remaining: sorted.len(),
        }
    }
}

impl<'a, T> Iterator for BalancedOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.spans.pop()?;
        let mid = span.start + (span.len() - 1) / 2;

        // Right half is pushed first so that the whole left half is emitted before it
        if mid + 1 < span.end {
            self.spans.push(mid + 1..span.end);
        }
        if span.start < mid {
            self.spans.push(span.start..mid);
        }

        self.remaining -= 1;
        Some(&self.sorted[mid])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for BalancedOrder<'a, T> {}

impl<'a, T> FusedIterator for BalancedOrder<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::prelude::*;

    use crate::BSTree;

    #[test]
    fn seven_keys() {
        assert_eq!(balanced_order(&[1, 2, 3, 4, 5, 6, 7]), &[4, 2, 1, 3, 6, 5, 7]);
    }

    #[test]
    fn even_spans_pick_lower_middle() {
        assert_eq!(balanced_order(&[1, 2]), &[1, 2]);
        assert_eq!(balanced_order(&[10, 20, 30, 40, 50, 60]), &[30, 10, 20, 50, 40, 60]);
    }

    #[test]
    fn small_inputs() {
        assert_eq!(balanced_order::<u8>(&[]), &[]);
        assert_eq!(balanced_order(&["only"]), &["only"]);

        let mut iter = BalancedOrder::<u8>::new(&[]);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn output_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(1729);
        for len in 0..200 {
            let mut keys: Vec<u32> = (0..len).map(|_| rng.gen_range(0..50)).collect();
            keys.sort_unstable();

            let order = balanced_order(&keys);
            assert_eq!(order.len(), keys.len());

            let mut sorted_again = order.clone();
            sorted_again.sort_unstable();
            assert_eq!(sorted_again, keys);
        }
    }

    #[test]
    fn exact_size() {
        let keys: Vec<_> = (0..10).collect();
        let mut iter = BalancedOrder::new(&keys);
        assert_eq!(iter.len(), 10);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 8);
        assert_eq!(iter.count(), 8);
    }

    #[test]
    fn builds_minimal_height_tree() {
        for n in 1..=300usize {
            let keys: Vec<_> = (0..n).collect();
            let tree: BSTree<_> = BalancedOrder::new(&keys).copied().collect();

            let minimal = (usize::BITS - n.leading_zeros()) as usize;
            assert_eq!(tree.height(), minimal, "n = {}", n);
        }
    }

    #[test]
    fn unsorted_input_degrades_without_panicking() {
        let keys = [5, 1, 4, 2, 3];
        let order = balanced_order(&keys);

        let mut sorted_again = order.clone();
        sorted_again.sort_unstable();
        assert_eq!(sorted_again, &[1, 2, 3, 4, 5]);
    }
}
