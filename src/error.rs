//! Reasons an insert into a [`Tree`][crate::Tree] can be refused.

use thiserror::Error;

/// Why [`Tree::try_insert`][crate::Tree::try_insert] did not add a key.
///
/// Both variants are recoverable: the tree is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    /// The tree already holds as many keys as its capacity allows.
    #[error("tree is full (capacity {capacity})")]
    Full {
        /// The capacity the tree was built with.
        capacity: usize,
    },
    /// A key comparing equal to the new one is already stored.
    #[error("key is already present in the tree")]
    Duplicate,
}
