use std::{
    mem,
    ops::{Index, IndexMut},
};

use log::debug;

use crate::{Node, NodeId};

#[derive(Debug, Clone)]
enum Slot<K> {
    Occupied(Node<K>),
    // Next vacant slot in the free list.
    Vacant(Option<usize>),
}

/// Owns every node of a tree. Freed slots are chained into a free list and
/// handed out again before the backing vector grows.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K> {
    slots: Vec<Slot<K>>,
    free: Option<usize>,
    len: usize,
}

impl<K> Arena<K> {
    pub(crate) const fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free: None,
            len: 0,
        }
    }

    #[inline(always)]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeId {
        self.len += 1;
        match self.free {
            Some(index) => {
                let slot = mem::replace(&mut self.slots[index], Slot::Occupied(node));
                self.free = match slot {
                    Slot::Vacant(next) => next,
                    Slot::Occupied(_) => panic!("free list points at live slot {index}"),
                };
                debug!("reusing node slot {index}");
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of its slot. The id must not be used afterwards.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<K> {
        let slot = mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free));
        match slot {
            Slot::Occupied(node) => {
                self.free = Some(id.0);
                self.len -= 1;
                debug!("freed node slot {}", id.0);
                node
            }
            Slot::Vacant(_) => panic!("double free of node slot {}", id.0),
        }
    }

    pub(crate) fn swap_keys(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.slots.split_at_mut(hi);
        match (&mut head[lo], &mut tail[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => mem::swap(&mut x.key, &mut y.key),
            _ => panic!("swapping keys of a vacant slot ({lo}, {hi})"),
        }
    }

    /// Consumes the arena, leaving `None` where a slot was vacant so that
    /// keys stay addressable by their old ids.
    pub(crate) fn into_keys(self) -> Vec<Option<K>> {
        self.slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Occupied(node) => Some(node.key),
                Slot::Vacant(_) => None,
            })
            .collect()
    }
}

impl<K> Index<NodeId> for Arena<K> {
    type Output = Node<K>;

    #[inline(always)]
    fn index(&self, id: NodeId) -> &Node<K> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("dangling node id {}", id.0),
        }
    }
}

impl<K> IndexMut<NodeId> for Arena<K> {
    #[inline(always)]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("dangling node id {}", id.0),
        }
    }
}
