//! The cells a [`Tree`][crate::Tree] is built from, plus the link-walking helpers every tree
//! operation is expressed with.
//!
//! All walks here are loops rather than recursion so that a chain-shaped tree (e.g. one built
//! from ascending keys) can't exhaust the call stack.

use std::cmp::Ordering;

/// An owning, possibly empty, edge to a subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

/// Finds the node holding `key` in the subtree behind `link`.
pub(crate) fn find<'a, K>(mut link: &'a Link<K>, key: &K) -> Option<&'a Node<K>>
where
    K: Ord,
{
    while let Some(node) = link {
        link = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Equal => return Some(node),
            Ordering::Greater => &node.right,
        };
    }
    None
}

/// Walks down from `link` and returns the link that either holds the node with `key` or is the
/// empty slot where a node with `key` belongs.
///
/// This is the "parent link" the tree rewrites: for the root it is the tree's own root link,
/// otherwise it is the `left` or `right` field of the parent.
pub(crate) fn seek_link<'a, K>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K>
where
    K: Ord,
{
    loop {
        // The comparison is done under a short shared borrow so that the `Equal` and empty cases
        // can hand back `link` itself.
        let ordering = match link.as_deref() {
            Some(node) => key.cmp(&node.key),
            None => return link,
        };
        if ordering == Ordering::Equal {
            return link;
        }
        if let Some(node) = link {
            link = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }
}

/// Follows right edges from `link` until it reaches an empty one.
///
/// Called with a node's `right` link this yields the right slot of the largest key in that
/// node's subtree, which is always empty.
pub(crate) fn rightmost_empty_link<K>(mut link: &mut Link<K>) -> &mut Link<K> {
    while let Some(node) = link {
        link = &mut node.right;
    }
    link
}

/// Unlinks the node held by `link` and returns its key, or `None` if `link` is empty.
///
/// The single link is rewritten as follows:
///
/// 1. No left child: `link` takes the right child (which may be empty).
/// 2. No right child: `link` takes the left child.
/// 3. Both children: the right subtree is hung off the in-order predecessor (the rightmost node
///    of the left subtree) and `link` takes the left child.
///
/// # Diagram
///
/// Case 3 when removing `t`, where `p` is the predecessor:
///
/// ```text
///      link               link
///       |                  |
///       t                  l
///     /   \              /   \
///    l     r    ->      a     p
///   / \                        \
///  a   p                        r
/// ```
pub(crate) fn splice<K>(link: &mut Link<K>) -> Option<K>
where
    K: Ord,
{
    let mut target = link.take()?;
    *link = match (target.left.take(), target.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (Some(mut left), Some(right)) => {
            if cfg!(debug_assertions) {
                assert!(left.key < right.key);
            }
            *rightmost_empty_link(&mut left.right) = Some(right);
            Some(left)
        }
    };
    Some(target.key)
}

/// Drops every node behind `link` without recursing, leaving `link` empty. Returns how many
/// nodes were released.
pub(crate) fn release<K>(link: &mut Link<K>) -> usize {
    let mut released = 0;
    let mut pending: Vec<Box<Node<K>>> = link.take().into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
        // `node` has no children left so dropping it here is shallow.
        released += 1;
    }
    released
}

/// Number of levels in the subtree behind `link`. An empty link has height 0.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    let mut tallest = 0;
    let mut pending: Vec<(&Node<K>, usize)> = link.as_deref().map(|n| (n, 1)).into_iter().collect();
    while let Some((node, depth)) = pending.pop() {
        tallest = tallest.max(depth);
        pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
        pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
    }
    tallest
}
