use log::{debug, trace};

use crate::{Color, Direction, Link, NodeId, RbTree};

/*
 * red-black trees properties:
 *
 *  1) A node is either red or black
 *  2) The root is black
 *  3) All leaves (absent links) are black
 *  4) Both children of every red node are black
 *  5) Every simple path from root to leaves contains the same number
 *     of black nodes.
 *
 *  4 and 5 give the O(log n) guarantee, since 4 implies you cannot have two
 *  consecutive red nodes in a path and every red node is therefore followed by
 *  a black. So if B is the number of black nodes on every simple path (as per
 *  5), then the longest possible path due to 4 is 2B.
 */

// Structural primitives.
impl<K> RbTree<K> {
    /// Rotates `node` down towards `direction`; its child on the opposite
    /// side takes its place.
    ///
    /// ```text
    ///   left rotate at x            right rotate at x
    ///
    ///     x             y              x           y
    ///    / \           / \            / \         / \
    ///   a   y   -->   x   c          y   c  -->  a   x
    ///      / \       / \            / \             / \
    ///     b   c     a   b          a   b           b   c
    /// ```
    pub(crate) fn rotate(&mut self, node: NodeId, direction: Direction) {
        let Some(pivot) = self.arena[node].child(direction.opposite()) else {
            panic!("rotating {node:?} {direction:?} without a child to lift");
        };
        trace!("rotate {direction:?} at {node:?}");

        let inner = self.arena[pivot].child(direction);
        self.arena[node].set_child(direction.opposite(), inner);
        self.arena.set_parent(inner, Some(node));

        let parent = self.arena[node].parent;
        self.arena[pivot].parent = parent;
        self.change_child(node, Some(pivot), parent);

        self.arena[pivot].set_child(direction, Some(node));
        self.arena[node].parent = Some(pivot);
    }

    /// Points whichever link of `parent` held `old` at `new`, or the root
    /// when `parent` is absent. Does not touch `new`'s parent link.
    fn change_child(&mut self, old: NodeId, new: Link, parent: Link) {
        match parent {
            Some(parent) => {
                let parent = &mut self.arena[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    assert_eq!(parent.right, Some(old), "{old:?} is not a child of its parent");
                    parent.right = new;
                }
            }
            None => self.root = new,
        }
    }
}

// Rebalancing.
impl<K> RbTree<K> {
    /// Restores property 4 after `node` was linked in as a red leaf.
    pub(crate) fn insert_color(&mut self, mut node: NodeId) {
        loop {
            /*
             * Loop invariant: node is red.
             */
            let Some(parent) = self.arena[node].parent else {
                /*
                 * The inserted node is root. Either this is the
                 * first node, or we recursed at Case 1 below and
                 * are no longer violating 4).
                 */
                break;
            };

            /*
             * If there is a black parent, we are done.
             * Otherwise, take some corrective action as,
             * per 4), we don't want a red root or two
             * consecutive red nodes.
             */
            if self.arena[parent].is_black() {
                break;
            }

            let Some(gparent) = self.arena[parent].parent else {
                // A red root; painting it black below is enough.
                break;
            };

            let side = self.arena.side_of(gparent, parent);
            let uncle = self.arena[gparent].child(side.opposite());

            if self.arena.is_red(uncle) {
                /*
                 * Case 1 - node's uncle is red (color flips).
                 *
                 *       G            g
                 *      / \          / \
                 *     p   u  -->   P   U
                 *    /            /
                 *   n            n
                 *
                 * However, since g's parent might be red, and
                 * 4) does not allow this, we need to recurse
                 * at g.
                 */
                trace!("insert case 1 at {node:?}");
                self.arena.set_color(uncle, Color::Black);
                self.arena[parent].color = Color::Black;
                self.arena[gparent].color = Color::Red;
                node = gparent;
                continue;
            }

            let mut parent = parent;
            if self.arena.side_of(parent, node) != side {
                /*
                 * Case 2 - node's uncle is black and node is
                 * the inner grandchild (rotate at parent).
                 *
                 *      G             G
                 *     / \           / \
                 *    p   U  -->    n   U
                 *     \           /
                 *      n         p
                 *
                 * This still leaves us in violation of 4), the
                 * continuation into Case 3 will fix that.
                 */
                trace!("insert case 2 at {node:?}");
                self.rotate(parent, side);
                parent = node;
            }

            /*
             * Case 3 - node's uncle is black and node is
             * the outer grandchild (rotate at gparent).
             *
             *        G           P
             *       / \         / \
             *      p   U  -->  n   g
             *     /                 \
             *    n                   U
             */
            trace!("insert case 3 at {parent:?}");
            self.rotate(gparent, side.opposite());
            self.arena[parent].color = Color::Black;
            self.arena[gparent].color = Color::Red;
            break;
        }

        let root = self.root;
        self.arena.set_color(root, Color::Black);
    }

    /// Unlinks `node` from the tree, rebalances and hands back its key.
    ///
    /// A node with two children is not unlinked itself: it trades keys with
    /// its in-order successor and the successor's slot is removed instead.
    pub(crate) fn erase(&mut self, node: NodeId) -> K {
        let victim = match (self.arena[node].left, self.arena[node].right) {
            (Some(_), Some(right)) => {
                /*
                 * The successor is leftmost under node's right subtree and
                 * has no left child.
                 *
                 *    (n)          (s)
                 *    / \          / \
                 *  (x) (y)  ->  (x) (y)
                 *      /            /
                 *    (s)          (c)
                 *      \
                 *      (c)
                 */
                let successor = self.arena.leftmost(right);
                debug!("erase {node:?} through successor {successor:?}");
                self.arena.swap_keys(node, successor);
                successor
            }
            _ => node,
        };

        let child = self.arena[victim].left.or(self.arena[victim].right);
        let parent = self.arena[victim].parent;
        self.arena.set_parent(child, parent);
        self.change_child(victim, child, parent);

        if self.arena[victim].is_black() {
            self.erase_color(child, parent);
        }
        self.arena.free(victim).key
    }

    /// Pushes up or resolves the missing black left behind at `node`, a
    /// possibly absent child of `parent`.
    fn erase_color(&mut self, mut node: Link, mut parent: Link) {
        /*
         * Loop invariants:
         * - node is black (or absent)
         * - node is not the root (parent is not absent)
         * - All leaf paths going through parent and node have a
         *   black node count that is 1 lower than other leaf paths.
         */
        while node != self.root && self.arena.is_black(node) {
            let Some(p) = parent else {
                break;
            };
            let side = if self.arena[p].left == node {
                Direction::Left
            } else {
                Direction::Right
            };
            let far = side.opposite();

            let mut sibling = self.sibling(p, side);
            if self.arena[sibling].is_red() {
                /*
                 * Case 1 - rotate at parent
                 *
                 *     P               S
                 *    / \             / \
                 *   N   s    -->    p   Sr
                 *      / \         / \
                 *     Sl  Sr      N   Sl
                 */
                trace!("erase case 1 at {p:?}");
                self.arena[sibling].color = Color::Black;
                self.arena[p].color = Color::Red;
                self.rotate(p, side);
                sibling = self.sibling(p, side);
            }

            let near_child = self.arena[sibling].child(side);
            let far_child = self.arena[sibling].child(far);

            if self.arena.is_black(near_child) && self.arena.is_black(far_child) {
                /*
                 * Case 2 - sibling color flip
                 * (p could be either color here)
                 *
                 *    (p)           (p)
                 *    / \           / \
                 *   N   S    -->  N   s
                 *      / \           / \
                 *     Sl  Sr        Sl  Sr
                 *
                 * This leaves us violating 5) which
                 * can be fixed by flipping p to black
                 * if it was red, or by recursing at p.
                 * p is red when coming from Case 1.
                 */
                trace!("erase case 2 at {p:?}");
                self.arena[sibling].color = Color::Red;
                if self.arena[p].is_red() {
                    self.arena[p].color = Color::Black;
                    return;
                }
                node = Some(p);
                parent = self.arena[p].parent;
                continue;
            }

            if self.arena.is_black(far_child) {
                /*
                 * Case 3 - rotate at sibling
                 * (p could be either color here)
                 *
                 *   (p)           (p)
                 *   / \           / \
                 *  N   S    -->  N   sl
                 *     / \             \
                 *    sl  Sr            S
                 *                       \
                 *                        Sr
                 */
                trace!("erase case 3 at {sibling:?}");
                self.arena.set_color(near_child, Color::Black);
                self.arena[sibling].color = Color::Red;
                self.rotate(sibling, far);
                sibling = self.sibling(p, side);
            }

            /*
             * Case 4 - rotate at parent + color flips
             * (p and sl could be either color here.
             *  After rotation, p becomes black, s acquires
             *  p's color, and sl keeps its color)
             *
             *      (p)             (s)
             *      / \             / \
             *     N   S     -->   P   Sr
             *        / \         / \
             *      (sl) sr      N  (sl)
             */
            trace!("erase case 4 at {p:?}");
            self.arena[sibling].color = self.arena[p].color;
            self.arena[p].color = Color::Black;
            let far_child = self.arena[sibling].child(far);
            self.arena.set_color(far_child, Color::Black);
            self.rotate(p, side);
            node = self.root;
            break;
        }

        self.arena.set_color(node, Color::Black);
    }

    /// The sibling of the `side` child of `parent`. Under a black-height
    /// deficit on `side` it always exists.
    fn sibling(&self, parent: NodeId, side: Direction) -> NodeId {
        match self.arena[parent].child(side.opposite()) {
            Some(sibling) => sibling,
            None => panic!("black-height deficit under {parent:?} without a sibling"),
        }
    }
}
