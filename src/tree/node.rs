use std::fmt;

#[cfg(test)]
use static_assertions::const_assert_eq;

/// An owning link to a subtree. `None` is an empty subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

// `Box` is never null, so an absent child costs nothing beyond the pointer itself
#[cfg(test)]
const_assert_eq!(std::mem::size_of::<Link<u64>>(), std::mem::size_of::<usize>());

/// A single node of a [`BSTree`](super::BSTree)
///
/// Each node exclusively owns its children. There are no parent links.
pub struct Node<T> {
    pub(crate) key: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only one level deep so that printing a degenerate tree can't exhaust the stack
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<T> Node<T> {
    pub(crate) fn new(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node
    pub fn key(&self) -> &T {
        &self.key
    }

    /// The subtree of keys strictly less than this node's key
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The subtree of keys greater than or equal to this node's key
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
