//! This crate exposes a capped, unbalanced Binary Search Tree of unique keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`Tree`] here does no balancing,
//! so the height depends only on the order keys were inserted and deleted in:
//! random order gives `O(lg N)` on average while sorted input degrades the tree
//! into a chain of height `N`. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Capacity
//!
//! Every [`Tree`] has a capacity ([`DEFAULT_CAPACITY`] unless built with
//! [`Tree::with_capacity`]). Inserting into a full tree is refused the same way
//! inserting a duplicate key is, see [`InsertError`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
mod node;
pub mod tree;


pub use error::InsertError;
pub use tree::{Iter, Tree, DEFAULT_CAPACITY};
