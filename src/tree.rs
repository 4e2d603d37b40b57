mod node;
mod preorder;
mod inorder;

pub use node::*;
pub use preorder::*;
pub use inorder::*;

use std::fmt;
use std::mem;
use std::cmp::Ordering;
use std::borrow::Borrow;
use std::iter::FromIterator;

/// An unbalanced binary search tree (BST)
///
/// BST properties: For each node with key `k`:
/// - The key of each node in the left subtree is strictly less than `k`
/// - The key of each node in the right subtree is greater than or equal to `k`
///
/// Duplicate keys are allowed. Inserting a key that is already present adds another node to the
/// right of the existing one.
///
/// The tree is never rebalanced, so its shape is entirely determined by the order keys are
/// inserted in. Sorted insertion produces a tree of height `n`. Inserting the
/// [`balanced_order`](crate::balanced_order) of the keys produces a tree of minimal height.
///
/// Every operation walks the tree iteratively, so even a fully degenerate tree can be built,
/// searched, cloned and dropped without exhausting the call stack.
pub struct BSTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BSTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T> Drop for BSTree<T> {
    fn drop(&mut self) {
        self.drop_nodes();
    }
}

impl<T: Ord + Clone> Clone for BSTree<T> {
    fn clone(&self) -> Self {
        // Preorder always visits a parent before its children, so re-inserting in that order
        // reproduces the same shape
        self.iter_preorder().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for BSTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(IterInorder::new(self.root.as_deref(), self.len))
            .finish()
    }
}

impl<T: Ord + PartialEq> PartialEq for BSTree<T> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees holding the same keys can be shaped very differently depending on insertion
        // order. In-order traversal yields the keys sorted regardless of shape, so compare that.

        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<T: Ord + Eq> Eq for BSTree<T> {}

impl<T: Ord> BSTree<T> {
    /// Creates an empty `BSTree`
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BSTree;
    /// let mut tree: BSTree<&str> = BSTree::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys in the tree (i.e. the number of nodes), counting duplicates
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, or 0 if the tree
    /// is empty
    ///
    /// Time complexity: `O(n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BSTree;
    ///
    /// let sorted: BSTree<_> = (1..=5).collect();
    /// assert_eq!(sorted.height(), 5);
    ///
    /// let balanced: BSTree<_> = vec![4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    /// assert_eq!(balanced.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level.iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }

        height
    }

    /// Returns `true` if the tree contains at least one node with the given key.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns a reference to the first key on the search path that is equal to the given one,
    /// or `None` if no such key exists in the tree
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// tree.insert(String::from("abc"));
    /// assert_eq!(tree.get("abc").map(String::as_str), Some("abc"));
    /// assert_eq!(tree.get("def"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(node.key().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node.key()),
            }
        }

        None
    }

    /// Inserts a key into the binary search tree
    ///
    /// Exactly one new leaf node is created per call. Keys equal to an existing key are placed in
    /// that key's right subtree. No rebalancing is performed.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// # assert!(tree.is_empty());
    /// tree.insert(37);
    /// tree.insert(37);
    /// assert_eq!(tree.len(), 2);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.right().map(|node| *node.key()), Some(37));
    /// ```
    pub fn insert(&mut self, key: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }

        // Nothing existing was touched on the way down, so the tree is only modified here
        *link = Some(Box::new(Node::new(key)));
        self.len += 1;
    }

    /// Removes one node with the given key. Returns whether a node was removed.
    ///
    /// Deleting a key that isn't in the tree leaves the tree unchanged.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// tree.insert(String::from("abc"));
    /// assert!(tree.delete("abc"));
    /// assert!(!tree.delete("def"));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes one node with the given key and returns the key that was stored in it, or `None`
    /// if no node matched.
    ///
    /// The first matching node on the search path is the one removed:
    /// - A leaf is simply detached
    /// - A node with one child is replaced by that child
    /// - A node with two children keeps its place in the tree and takes the key of its in-order
    ///   successor (the leftmost node of its right subtree). The successor, which never has a left
    ///   child, is then detached in its place.
    ///
    /// Always promoting from the right subtree means that long runs of deletions skew the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BSTree;
    ///
    /// let mut tree: BSTree<_> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.take(&2), Some(2));
    /// assert_eq!(tree.take(&2), None);
    ///
    /// // 3 was the successor of 2 and took its place
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(3));
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let link = find_link(&mut self.root, key)?;

        let node = link.as_deref_mut()?;
        let removed = if node.left.is_some() && node.right.is_some() {
            let successor = take_leftmost(&mut node.right)?;
            mem::replace(&mut node.key, successor)
        } else {
            let Node {key, left, right} = *link.take()?;
            *link = left.or(right);
            key
        };

        self.len -= 1;
        Some(removed)
    }

    /// Removes every node from the tree
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// tree.insert("abc");
    /// assert!(!tree.is_empty());
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.drop_nodes();
        self.len = 0;
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<T> {
        IterPreorder::new(self.root())
    }

    /// Performs an in-order traversal of the tree, yielding the keys in ascending order
    ///
    /// The traversal is lazy. Calling this method again starts a new traversal from the smallest
    /// key.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BSTree;
    ///
    /// let tree: BSTree<_> = vec![3, 1, 2, 1].into_iter().collect();
    /// let keys: Vec<_> = tree.iter_inorder().copied().collect();
    /// assert_eq!(keys, &[1, 1, 2, 3]);
    /// ```
    pub fn iter_inorder(&self) -> IterInorder<T> {
        IterInorder::new(self.root(), self.len)
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant for inspecting the shape of the tree. Which key ends up at
    /// the root depends entirely on insertion order. For a guaranteed ordering, use
    /// [`iter_inorder`](Self::iter_inorder).
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> BSTree<T> {
    /// Releases every node without recursing through the tree
    fn drop_nodes(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Returns the link that owns the first node on the search path for `key`, or `None` if the
/// search reaches an empty link
fn find_link<'a, T, Q>(mut link: &'a mut Link<T>, key: &Q) -> Option<&'a mut Link<T>>
    where T: Borrow<Q>,
          Q: Ord + ?Sized,
{
    loop {
        let node = link.as_deref()?;
        link = match key.cmp(node.key.borrow()) {
            Ordering::Less => &mut link.as_mut()?.left,
            Ordering::Greater => &mut link.as_mut()?.right,
            Ordering::Equal => return Some(link),
        };
    }
}

/// Detaches the leftmost node of the given subtree, splicing its right child into its place, and
/// returns its key
fn take_leftmost<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    // No left child, so at most one child to splice in
    let Node {key, right, ..} = *link.take()?;
    *link = right;
    Some(key)
}

impl<'a, T: Ord> IntoIterator for &'a BSTree<T> {
    type Item = &'a T;
    type IntoIter = IterInorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_inorder()
    }
}

impl<T: Ord> Extend<T> for BSTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: Ord> FromIterator<T> for BSTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
