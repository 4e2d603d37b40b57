//! A common interface over the ordered containers being compared
//!
//! Code that times or exercises containers should depend only on [`OrderedContainer`], so the
//! unbalanced tree and the reference set can be swapped without checking which one is in use.

use std::collections::BTreeSet;

use crate::BSTree;

/// An ordered collection of keys supporting insertion and removal by key
pub trait OrderedContainer<T>: Default {
    /// A short, stable name used to label measurements
    const NAME: &'static str;

    /// Returns the number of keys currently stored
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `key` to the container
    fn insert(&mut self, key: T);

    /// Removes one occurrence of `key`. Removing a key that isn't present does nothing.
    fn delete(&mut self, key: &T);
}

impl<T: Ord> OrderedContainer<T> for BSTree<T> {
    const NAME: &'static str = "BSTree";

    fn len(&self) -> usize {
        BSTree::len(self)
    }

    fn insert(&mut self, key: T) {
        BSTree::insert(self, key)
    }

    fn delete(&mut self, key: &T) {
        BSTree::delete(self, key);
    }
}

/// The reference set. Unlike [`BSTree`], inserting a key that is already present has no effect.
impl<T: Ord> OrderedContainer<T> for BTreeSet<T> {
    const NAME: &'static str = "BTreeSet";

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn insert(&mut self, key: T) {
        BTreeSet::insert(self, key);
    }

    fn delete(&mut self, key: &T) {
        BTreeSet::remove(self, key);
    }
}
