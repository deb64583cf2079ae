use crate::{Color, Direction, Link, Node, NodeId, alloc::Arena};

impl<K> Node<K> {
    /// A fresh node is red and detached from any children.
    pub(crate) fn new(key: K, parent: Link) -> Self {
        Node {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline(always)]
    pub(crate) fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline(always)]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline(always)]
    pub(crate) fn child(&self, direction: Direction) -> Link {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    #[inline(always)]
    pub(crate) fn set_child(&mut self, direction: Direction, child: Link) {
        match direction {
            Direction::Left => self.left = child,
            Direction::Right => self.right = child,
        }
    }
}

// Link helpers. An absent link is black, and setters on an absent link do
// nothing; this keeps the fixups free of ad hoc null checks.
impl<K> Arena<K> {
    #[inline(always)]
    pub(crate) fn color(&self, link: Link) -> Color {
        link.map_or(Color::Black, |n| self[n].color)
    }

    #[inline(always)]
    pub(crate) fn is_black(&self, link: Link) -> bool {
        self.color(link) == Color::Black
    }

    #[inline(always)]
    pub(crate) fn is_red(&self, link: Link) -> bool {
        self.color(link) == Color::Red
    }

    #[inline(always)]
    pub(crate) fn set_color(&mut self, link: Link, color: Color) {
        if let Some(n) = link {
            self[n].color = color;
        }
    }

    #[inline(always)]
    pub(crate) fn set_parent(&mut self, link: Link, parent: Link) {
        if let Some(n) = link {
            self[n].parent = parent;
        }
    }

    /// Which side of `parent` the node `child` hangs from.
    #[inline]
    pub(crate) fn side_of(&self, parent: NodeId, child: NodeId) -> Direction {
        if self[parent].left == Some(child) {
            Direction::Left
        } else {
            debug_assert_eq!(
                self[parent].right,
                Some(child),
                "{child:?} is not a child of {parent:?}"
            );
            Direction::Right
        }
    }

    pub(crate) fn leftmost(&self, mut node: NodeId) -> NodeId {
        while let Some(left) = self[node].left {
            node = left;
        }
        node
    }

    pub(crate) fn rightmost(&self, mut node: NodeId) -> NodeId {
        while let Some(right) = self[node].right {
            node = right;
        }
        node
    }

    /// In-order successor.
    pub(crate) fn next(&self, node: NodeId) -> Link {
        // If we have a right-hand child, go down and then left as far as we
        // can.
        if let Some(right) = self[node].right {
            return Some(self.leftmost(right));
        }
        // No right-hand children. Everything down and left is smaller than
        // us, so any 'next' node must be in the general direction of our
        // parent: go up until we come from a left-hand child.
        let mut node = node;
        while let Some(parent) = self[node].parent {
            if self[parent].left == Some(node) {
                return Some(parent);
            }
            node = parent;
        }
        None
    }

    /// In-order predecessor.
    pub(crate) fn prev(&self, node: NodeId) -> Link {
        if let Some(left) = self[node].left {
            return Some(self.rightmost(left));
        }
        let mut node = node;
        while let Some(parent) = self[node].parent {
            if self[parent].right == Some(node) {
                return Some(parent);
            }
            node = parent;
        }
        None
    }

    /// The first node visited by a post-order walk of the subtree.
    pub(crate) fn left_deepest(&self, mut node: NodeId) -> NodeId {
        while let Some(next) = self[node].left.or(self[node].right) {
            node = next;
        }
        node
    }

    pub(crate) fn next_postorder(&self, node: NodeId) -> Link {
        let parent = self[node].parent?;
        if self[parent].left == Some(node) {
            if let Some(right) = self[parent].right {
                // We are the parent's left node: go to the parent's right
                // node, then all the way down.
                return Some(self.left_deepest(right));
            }
        }
        // We've already seen the parent's children.
        Some(parent)
    }

    pub(crate) fn next_preorder(&self, node: NodeId) -> Link {
        if let Some(child) = self[node].left.or(self[node].right) {
            return Some(child);
        }
        // Climb until some ancestor has a right subtree we have not entered.
        let mut node = node;
        while let Some(parent) = self[node].parent {
            if self[parent].left == Some(node) {
                if let Some(right) = self[parent].right {
                    return Some(right);
                }
            }
            node = parent;
        }
        None
    }
}
