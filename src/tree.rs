use std::{borrow::Borrow, cmp::Ordering::*};

use crate::{Color, Direction, Link, Node, RbTree, alloc::Arena};

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RbTree<K> {
    pub const fn new() -> Self {
        RbTree {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Creates an empty tree with room for `capacity` keys before the node
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        RbTree {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn len(&self) -> usize {
        self.arena.len()
    }

    /// The key stored at the root.
    pub fn root(&self) -> Option<&K> {
        self.root.map(|n| &self.arena[n].key)
    }

    /// The smallest key.
    pub fn first(&self) -> Option<&K> {
        self.root.map(|n| &self.arena[self.arena.leftmost(n)].key)
    }

    /// The largest key.
    pub fn last(&self) -> Option<&K> {
        self.root.map(|n| &self.arena[self.arena.rightmost(n)].key)
    }

    pub fn pop_first(&mut self) -> Option<K> {
        let first = self.arena.leftmost(self.root?);
        Some(self.erase(first))
    }

    pub fn pop_last(&mut self) -> Option<K> {
        let last = self.arena.rightmost(self.root?);
        Some(self.erase(last))
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.arena[node];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }
}

impl<K: Ord> RbTree<K> {
    pub(crate) fn find<Q>(&self, key: &Q) -> Link
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root;
        while let Some(candidate) = node {
            let candidate = &self.arena[candidate];
            match key.cmp(candidate.key.borrow()) {
                Equal => break,
                Greater => node = candidate.right,
                Less => node = candidate.left,
            }
        }
        node
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|n| &self.arena[n].key)
    }

    /// Adds `key` to the tree. Returns `false`, leaving the tree untouched,
    /// when an equal key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        let mut parent = None;
        let mut link = self.root;
        let mut direction = Direction::Left;
        while let Some(candidate) = link {
            direction = match key.cmp(&self.arena[candidate].key) {
                Equal => return false,
                Greater => Direction::Right,
                Less => Direction::Left,
            };
            parent = link;
            link = self.arena[candidate].child(direction);
        }

        let node = self.arena.alloc(Node::new(key, parent));
        match parent {
            Some(parent) => {
                self.arena[parent].set_child(direction, Some(node));
                self.insert_color(node);
            }
            None => {
                self.arena[node].color = Color::Black;
                self.root = Some(node);
            }
        }
        true
    }

    /// Removes `key` from the tree. Returns whether it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes and returns the key equal to `key`, if any.
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.find(key)?;
        Some(self.erase(node))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;
    use rand::{SeedableRng, seq::SliceRandom};
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeSet;

    #[test]
    fn tree_ctor_works() {
        let tree = RbTree::<usize>::new();
        assert_eq!(None, tree.first());
        assert_eq!(None, tree.root());
        assert_eq!(0, tree.len());
        assert_eq!(0, tree.height());
        assert!(tree.is_empty());
        assert!(!tree.contains(&42));
    }

    #[test]
    fn empty_tree_operations_report_absence() {
        let mut tree = RbTree::<usize>::with_capacity(16);
        assert!(!tree.remove(&42));
        assert_eq!(None, tree.take(&42));
        assert_eq!(None, tree.pop_first());
        assert_eq!(None, tree.pop_last());
        assert!(tree.in_order().is_empty());
        assert!(tree.pre_order().is_empty());
        assert!(tree.post_order().is_empty());
        assert_eq!(Ok(0), tree.validate());
    }

    #[test]
    fn contains_many() {
        let mut tree = RbTree::new();
        assert!(tree.insert(42));
        assert_eq!(1, tree.len());
        assert!(tree.insert(0));
        assert_eq!(2, tree.len());
        assert!(tree.insert(100));
        assert_eq!(3, tree.len());

        assert!(tree.contains(&42));
        assert!(tree.contains(&0));
        assert!(tree.contains(&100));
        assert!(!tree.contains(&1));
        assert!(!tree.contains(&1000));
    }

    #[test]
    fn first_and_last() {
        let mut tree = RbTree::new();
        assert_eq!(None, tree.first());
        assert_eq!(None, tree.last());

        tree.insert(42);
        assert_eq!(Some(&42), tree.first());
        assert_eq!(Some(&42), tree.last());

        tree.insert(0);
        tree.insert(100);
        assert_eq!(Some(&0), tree.first());
        assert_eq!(Some(&100), tree.last());
    }

    #[test]
    fn insert_same_key_is_rejected() {
        let mut tree = RbTree::new();
        assert!(tree.insert(42));
        let before = tree.pre_order().into_iter().copied().collect::<Vec<_>>();
        assert!(!tree.insert(42));
        assert_eq!(1, tree.len());
        assert_eq!(before, tree.pre_order().into_iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn borrowed_lookups() {
        let mut tree = RbTree::new();
        tree.insert("forty two".to_string());
        tree.insert("zero".to_string());
        assert!(tree.contains("zero"));
        assert_eq!(Some(&"forty two".to_string()), tree.get("forty two"));
        assert_eq!(Some("zero".to_string()), tree.take("zero"));
        assert!(!tree.contains("zero"));
    }

    #[test]
    fn pop_first_and_last() {
        let mut tree: RbTree<usize> = [42, 0, 100].into_iter().collect();
        assert_eq!(Some(0), tree.pop_first());
        assert_eq!(2, tree.len());
        assert!(!tree.contains(&0));
        assert_eq!(Some(100), tree.pop_last());
        assert_eq!(Some(42), tree.pop_first());
        assert_eq!(None, tree.pop_last());
        assert!(tree.is_empty());
    }

    #[test]
    fn clear_empties_and_allows_reuse() {
        let mut tree: RbTree<usize> = (0..32).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(None, tree.root());
        tree.insert(7);
        assert_eq!(vec![&7], tree.in_order());
    }

    #[test]
    fn known_insertion_shape() {
        let mut tree = RbTree::new();
        for k in [5, 6, 4, 3, 1, 8, 9] {
            tree.insert(k);
            assert!(tree.validate().is_ok());
        }
        assert_eq!(vec![&1, &3, &4, &5, &6, &8, &9], tree.in_order());
        assert_eq!(vec![&5, &3, &1, &4, &8, &6, &9], tree.pre_order());
        assert_eq!(vec![&1, &4, &3, &6, &9, &8, &5], tree.post_order());
        assert_eq!(Ok(2), tree.validate());
    }

    #[test]
    fn ascending_one_to_ten_then_remove_seven() {
        let mut tree: RbTree<i32> = (1..=10).collect();
        assert_eq!(Some(&4), tree.root());
        assert_eq!(Color::Black, tree.arena[tree.root.unwrap()].color);
        assert_eq!(5, tree.height());
        assert_eq!(vec![&4, &2, &1, &3, &6, &5, &8, &7, &9, &10], tree.pre_order());
        assert_eq!(Ok(3), tree.validate());

        assert!(tree.remove(&7));
        assert_eq!(Ok(3), tree.validate());
        assert_eq!(vec![&1, &2, &3, &4, &5, &6, &8, &9, &10], tree.in_order());
        assert_eq!(vec![&4, &2, &1, &3, &6, &5, &9, &8, &10], tree.pre_order());
    }

    #[test]
    fn removing_absent_key_changes_nothing() {
        let mut tree: RbTree<i32> = [5, 6, 4, 3, 1, 8, 9].into_iter().collect();
        let pre = tree.pre_order().into_iter().copied().collect::<Vec<_>>();
        let post = tree.post_order().into_iter().copied().collect::<Vec<_>>();
        assert!(!tree.remove(&7));
        assert!(!tree.remove(&100));
        assert_eq!(7, tree.len());
        assert_eq!(pre, tree.pre_order().into_iter().copied().collect::<Vec<_>>());
        assert_eq!(post, tree.post_order().into_iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn remove_random_permutation_one_by_one() {
        const N: u32 = 500;
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        let mut keys: Vec<u32> = (0..N).collect();
        keys.shuffle(&mut rng);
        let mut tree: RbTree<u32> = keys.iter().copied().collect();
        assert!(tree.validate().is_ok());

        keys.shuffle(&mut rng);
        let mut model: BTreeSet<u32> = keys.iter().copied().collect();
        for k in keys {
            assert!(tree.remove(&k));
            model.remove(&k);
            assert!(!tree.contains(&k));
            assert!(tree.validate().is_ok());
            assert!(model.iter().all(|m| tree.contains(m)));
            assert!(tree.iter().eq(model.iter()));
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn freed_slots_are_recycled() {
        let mut tree: RbTree<u32> = (0..64).collect();
        for k in 0..32 {
            tree.remove(&k);
        }
        for k in 100..132 {
            tree.insert(k);
        }
        assert_eq!(64, tree.len());
        assert!(tree.validate().is_ok());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8),
        Remove(u8),
    }

    impl Arbitrary for Op {
        fn arbitrary(g: &mut Gen) -> Self {
            if bool::arbitrary(g) {
                Op::Insert(u8::arbitrary(g))
            } else {
                Op::Remove(u8::arbitrary(g))
            }
        }
    }

    fn height_within_bound(tree: &RbTree<impl Ord>) -> bool {
        tree.height() as f64 <= 2.0 * ((tree.len() + 1) as f64).log2()
    }

    #[quickcheck]
    fn insertions_keep_invariants(keys: Vec<u16>) -> bool {
        let mut tree = RbTree::new();
        let mut model = BTreeSet::new();
        for k in keys {
            if tree.insert(k) != model.insert(k) {
                return false;
            }
            if tree.validate().is_err() || !height_within_bound(&tree) {
                return false;
            }
        }
        tree.iter().eq(model.iter())
    }

    #[quickcheck]
    fn interleaved_operations_match_model(ops: Vec<Op>) -> bool {
        let mut tree = RbTree::new();
        let mut model = BTreeSet::new();
        for op in ops {
            let agree = match op {
                Op::Insert(k) => tree.insert(k) == model.insert(k),
                Op::Remove(k) => tree.remove(&k) == model.remove(&k),
            };
            if !agree || tree.validate().is_err() || tree.len() != model.len() {
                return false;
            }
            if !height_within_bound(&tree) {
                return false;
            }
        }
        (0..=u8::MAX).all(|k| tree.contains(&k) == model.contains(&k))
    }
}
