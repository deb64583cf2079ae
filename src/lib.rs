//! An ordered set backed by a red-black tree.
//!
//! Balancing follows the linux kernel's red-black trees, but nodes live in an
//! arena and refer to each other by index: children are the only ownership
//! edges and the parent link is a plain index used to walk back up during
//! fixups.
mod alloc;
mod iter;
mod node;
mod print;
mod root;
mod tree;
mod validate;

pub use iter::{IntoIter, Iter, Order};
pub use validate::InvariantError;

use crate::alloc::Arena;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red = 0,
    Black = 1,
}

/// Index of a node slot in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// A possibly absent child or parent. Absent links count as black.
pub(crate) type Link = Option<NodeId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline(always)]
    pub(crate) fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    // Non-owning; only used to walk upwards.
    pub(crate) parent: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

/// A red-black tree holding distinct, totally ordered keys.
///
/// Inserting a key that is already present is rejected and leaves the tree
/// untouched. Removing a key that is absent is a no-op.
///
/// # Examples
///
/// ```
/// use rougeset::RbTree;
///
/// let mut tree = RbTree::new();
/// for k in [5, 6, 4, 3, 1, 8, 9] {
///     tree.insert(k);
/// }
/// assert_eq!(tree.in_order(), [&1, &3, &4, &5, &6, &8, &9]);
/// assert!(tree.remove(&4));
/// assert!(!tree.contains(&4));
/// ```
#[derive(Clone)]
pub struct RbTree<K> {
    arena: Arena<K>,
    root: Link,
}
