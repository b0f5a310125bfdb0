//! A capped, unbalanced BST. Each node owns its children through a `Box` and the tree never
//! rotates, so its shape is decided purely by the order of inserts and deletes.
//!
//! # Examples
//!
//! ```
//! use capped_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Keys are unique so a second insert is refused.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.delete(&1));
//! assert!(!tree.contains(&1));
//! assert!(tree.is_empty());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::InsertError;
use crate::node::{self, Link, Node};

/// How many keys a [`Tree`] built with [`Tree::new`] accepts.
pub const DEFAULT_CAPACITY: usize = 100;

/// An unbalanced Binary Search Tree of unique keys with a fixed capacity. This can be used for
/// inserting, finding, deleting and walking keys in ascending order.
pub struct Tree<K> {
    root: Link<K>,
    size: usize,
    capacity: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        node::release(&mut self.root);
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone + Ord,
{
    /// Inserting keys in pre-order into an empty tree rebuilds exactly the same shape.
    fn clone(&self) -> Self {
        let mut tree = Self::with_capacity(self.capacity);
        let mut pending: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            tree.insert(node.key.clone());
            pending.extend(node.right.as_deref());
            pending.extend(node.left.as_deref());
        }
        tree
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.size)
            .field("capacity", &self.capacity)
            .field("keys", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree` holding at most [`DEFAULT_CAPACITY`] keys.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Generates a new, empty `Tree` holding at most `capacity` keys.
    ///
    /// A capacity of zero gives a tree that is both empty and full.
    ///
    /// # Examples
    ///
    /// ```
    /// use capped_bst::Tree;
    ///
    /// let mut tree = Tree::with_capacity(1);
    /// assert!(tree.insert(1));
    /// assert!(tree.is_full());
    /// assert!(!tree.insert(2));
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: None,
            size: 0,
            capacity,
        }
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether the tree has reached its capacity. Inserts are refused while this is true.
    pub fn is_full(&self) -> bool {
        self.size == self.capacity
    }

    /// Number of keys currently in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Maximum number of keys the tree accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of levels in the tree, 0 when empty. Since the tree never rebalances, inserting
    /// keys in ascending order gives a height equal to [`len`][Self::len].
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Adds `key` to the tree. Returns `false` and leaves the tree untouched if the tree is full
    /// or already contains an equal key.
    ///
    /// # Examples
    ///
    /// ```
    /// use capped_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        match self.try_insert(key) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("insert refused at size {}: {}", self.size, err);
                false
            }
        }
    }

    /// Adds `key` to the tree, reporting why it was refused otherwise. A full tree is reported
    /// before a duplicate key.
    ///
    /// # Examples
    ///
    /// ```
    /// use capped_bst::{InsertError, Tree};
    ///
    /// let mut tree = Tree::with_capacity(1);
    ///
    /// assert_eq!(tree.try_insert(1), Ok(()));
    /// assert_eq!(tree.try_insert(1), Err(InsertError::Full { capacity: 1 }));
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.try_insert(1), Err(InsertError::Duplicate));
    /// ```
    pub fn try_insert(&mut self, key: K) -> Result<(), InsertError>
    where
        K: Ord,
    {
        if self.is_full() {
            return Err(InsertError::Full {
                capacity: self.capacity,
            });
        }

        let slot = node::seek_link(&mut self.root, &key);
        if slot.is_some() {
            return Err(InsertError::Duplicate);
        }
        *slot = Some(Node::new_boxed(key));
        self.size += 1;

        log::trace!("inserted key, size is now {}", self.size);
        Ok(())
    }

    /// Whether the tree contains a key equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use capped_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        node::find(&self.root, key).is_some()
    }

    /// Removes the key equal to `key` from the tree. Returns `false` if there was none.
    ///
    /// When the removed node has two children its left child takes its place and its right
    /// subtree is attached below its in-order predecessor. No rebalancing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use capped_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let link = node::seek_link(&mut self.root, key);
        match node::splice(link) {
            Some(_) => {
                self.size -= 1;
                log::trace!("deleted key, size is now {}", self.size);
                true
            }
            None => {
                log::debug!("delete missed at size {}", self.size);
                false
            }
        }
    }

    /// Calls `visitor` once for every key, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use capped_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 3, 1] {
    ///     tree.insert(key);
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.traverse(|key| seen.push(*key));
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    pub fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&K),
    {
        self.iter().for_each(visitor);
    }

    /// An iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.size)
    }

    /// Removes every key, leaving an empty tree with the same capacity.
    pub fn clear(&mut self) {
        let released = node::release(&mut self.root);
        self.size = 0;
        log::trace!("cleared {} keys", released);
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over the keys of a [`Tree`], created by [`Tree::iter`].
///
/// The walk keeps its own stack of the nodes whose left subtree is being visited, so it never
/// recurses.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: &'a Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
