//! An unbalanced binary search tree and the tools needed to study how its shape depends on the
//! order keys are inserted in.
//!
//! The tree never rebalances. Feeding it sorted keys produces a degenerate, list-like tree while
//! feeding it the [`balanced_order`] of the same keys produces a tree of minimal height.

#![allow(clippy::upper_case_acronyms)]

pub mod container;
pub mod order;
pub mod tree;

pub use container::OrderedContainer;
pub use order::{balanced_order, BalancedOrder};
pub use tree::BSTree;

/// Builds a [`BSTree`] by inserting each key in the order given
#[macro_export(local_inner_macros)]
macro_rules! bstree {
    // trailing comma case
    ($($key:expr,)+) => (bstree!($($key),+));

    ($($key:expr),*) => {
        {
            let mut _tree = $crate::BSTree::new();
            $(
                _tree.insert($key);
            )*
            _tree
        }
    };
}
