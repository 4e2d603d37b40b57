//! Measures how insertion order affects the unbalanced tree
//!
//! For each size, the same random keys are inserted into and then deleted from three containers:
//! a [`BSTree`] fed the keys in random order, a [`BSTree`] fed the keys in balanced order, and a
//! [`BTreeSet`] as the reference.

pub mod keys;
pub mod measure;
pub mod plot;
pub mod report;

use std::collections::BTreeSet;
use std::time::Duration;

use rand::Rng;
use unbalanced_bst::{BSTree, balanced_order};

pub use measure::{Operation, measure};

/// The sizes measured when none are given
pub const DEFAULT_SIZES: &[usize] = &[10, 25, 50, 100, 250, 500, 1000, 2500, 5000, 10000];

/// The measurements taken for one size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub size: usize,
    pub random_insert: Duration,
    pub balanced_insert: Duration,
    pub reference_insert: Duration,
    pub random_delete: Duration,
    pub balanced_delete: Duration,
    pub reference_delete: Duration,
    /// Height of the random order tree once every key was inserted
    pub random_height: usize,
    /// Height of the balanced order tree once every key was inserted
    pub balanced_height: usize,
}

/// Runs the experiment once per size, in the order given
pub fn run_experiment<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> anyhow::Result<Vec<Row>> {
    sizes.iter().map(|&size| run_size(size, &mut *rng)).collect()
}

fn run_size<R: Rng + ?Sized>(size: usize, rng: &mut R) -> anyhow::Result<Row> {
    let keys = keys::random_keys(size, rng)?;

    let mut sorted = keys.clone();
    sorted.sort_unstable();
    let balanced = balanced_order(&sorted);

    let mut random_tree = BSTree::new();
    let mut balanced_tree = BSTree::new();
    let mut reference = BTreeSet::new();

    let random_insert = measure(Operation::Insert, &mut random_tree, &keys);
    let balanced_insert = measure(Operation::Insert, &mut balanced_tree, &balanced);
    let reference_insert = measure(Operation::Insert, &mut reference, &keys);

    let random_height = random_tree.height();
    let balanced_height = balanced_tree.height();
    log::debug!("n = {}: random order height {}, balanced order height {}",
        size, random_height, balanced_height);

    let random_delete = measure(Operation::Delete, &mut random_tree, &keys);
    let balanced_delete = measure(Operation::Delete, &mut balanced_tree, &balanced);
    let reference_delete = measure(Operation::Delete, &mut reference, &keys);

    debug_assert!(random_tree.is_empty() && balanced_tree.is_empty() && reference.is_empty());

    Ok(Row {
        size,
        random_insert,
        balanced_insert,
        reference_insert,
        random_delete,
        balanced_delete,
        reference_delete,
        random_height,
        balanced_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn one_row_per_size() {
        let mut rng = StdRng::seed_from_u64(2024);
        let sizes = [10, 100, 1000];
        let rows = run_experiment(&sizes, &mut rng).unwrap();

        assert_eq!(rows.len(), sizes.len());
        for (row, &size) in rows.iter().zip(sizes.iter()) {
            assert_eq!(row.size, size);

            // Balanced order always reaches the minimal height, random order can't beat it
            let minimal = (usize::BITS - size.leading_zeros()) as usize;
            assert_eq!(row.balanced_height, minimal);
            assert!(row.random_height >= minimal);
            assert!(row.random_height <= size);
        }
    }

    #[test]
    fn empty_size() {
        let rows = run_experiment(&[0], &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(rows[0].random_height, 0);
        assert_eq!(rows[0].balanced_height, 0);
    }

    #[test]
    fn oversized_run_fails() {
        let result = run_experiment(&[10, 2_000_000], &mut StdRng::seed_from_u64(1));
        assert!(result.is_err());
    }
}
