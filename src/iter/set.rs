use std::{iter::FusedIterator, vec};

use crate::RbTree;

/// An owning iterator over the keys of an [`RbTree`], in ascending order.
pub struct IntoIter<K>(vec::IntoIter<K>);

impl<K> IntoIterator for RbTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> IntoIter<K> {
        let order: Vec<_> = self
            .root
            .map(|n| self.arena.leftmost(n))
            .into_iter()
            .flat_map(|first| std::iter::successors(Some(first), |&n| self.arena.next(n)))
            .collect();
        let mut keys = self.arena.into_keys();
        IntoIter(
            order
                .into_iter()
                .filter_map(|n| keys[n.0].take())
                .collect::<Vec<_>>()
                .into_iter(),
        )
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K> DoubleEndedIterator for IntoIter<K> {
    fn next_back(&mut self) -> Option<K> {
        self.0.next_back()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K> FusedIterator for IntoIter<K> {}

impl<K: Ord> FromIterator<K> for RbTree<K> {
    /// Builds a tree from the keys of `iter`; repeated keys are kept once.
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> RbTree<K> {
        let iter = iter.into_iter();
        let mut tree = RbTree::with_capacity(iter.size_hint().0);
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RbTree<K> {
    #[inline]
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        iter.into_iter().for_each(move |k| {
            self.insert(k);
        });
    }
}

impl<'a, K: Ord + Copy + 'a> Extend<&'a K> for RbTree<K> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<K: PartialEq> PartialEq for RbTree<K> {
    /// Two trees are equal when they hold the same keys, whatever their
    /// shape.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq> Eq for RbTree<K> {}
