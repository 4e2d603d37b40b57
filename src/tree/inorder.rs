use std::iter::FusedIterator;

use super::Node;

/// Ascending traversal of the keys in a tree
///
/// Cloning the iterator gives an independent cursor at the same position.
#[derive(Debug, Clone)]
pub struct IterInorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, T> IterInorder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(current_node) = current {
            self.stack.push(current_node);
            current = current_node.left();
        }
    }
}

impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;

        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for IterInorder<'a, T> {}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}
