mod node;
mod set;

use std::iter;

pub use node::Iter;
pub use set::IntoIter;

use crate::{NodeId, RbTree};

/// The order in which [`RbTree::traverse`] visits keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Key, then left subtree, then right subtree.
    Pre,
    /// Left subtree, key, right subtree: ascending order.
    In,
    /// Left subtree, right subtree, then key.
    Post,
}

impl<K> RbTree<K> {
    /// Calls `f` on every key in the given order. Walks parent links, so no
    /// auxiliary stack is allocated.
    pub fn traverse<F>(&self, order: Order, mut f: F)
    where
        F: FnMut(&K),
    {
        match order {
            Order::Pre => self.pre_order_nodes().for_each(|n| f(&self.arena[n].key)),
            Order::In => self.iter().for_each(f),
            Order::Post => self.post_order_nodes().for_each(|n| f(&self.arena[n].key)),
        }
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        self.iter().collect()
    }

    pub fn pre_order(&self) -> Vec<&K> {
        self.pre_order_nodes().map(|n| &self.arena[n].key).collect()
    }

    pub fn post_order(&self) -> Vec<&K> {
        self.post_order_nodes().map(|n| &self.arena[n].key).collect()
    }

    pub(crate) fn pre_order_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self.root, |&n| self.arena.next_preorder(n))
    }

    pub(crate) fn post_order_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        let first = self.root.map(|n| self.arena.left_deepest(n));
        iter::successors(first, |&n| self.arena.next_postorder(n))
    }
}
