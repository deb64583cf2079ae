use std::iter::FusedIterator;

use crate::{Link, RbTree, alloc::Arena};

/// An iterator over the keys of an [`RbTree`], in ascending order.
///
/// It steps between nodes through parent links and can be consumed from
/// both ends.
pub struct Iter<'a, K> {
    arena: &'a Arena<K>,
    front: Link,
    back: Link,
    len: usize,
}

impl<K> RbTree<K> {
    /// Gets an iterator over the keys, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rougeset::RbTree;
    ///
    /// let tree: RbTree<_> = [3, 1, 2].into_iter().collect();
    /// let keys: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            arena: &self.arena,
            front: self.root.map(|n| self.arena.leftmost(n)),
            back: self.root.map(|n| self.arena.rightmost(n)),
            len: self.len(),
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        if self.len == 0 {
            return None;
        }
        let current = self.front?;
        self.len -= 1;
        self.front = self.arena.next(current);
        Some(&self.arena[current].key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<&'a K> {
        self.next_back()
    }

    fn min(mut self) -> Option<&'a K>
    where
        &'a K: Ord,
    {
        self.next()
    }

    fn max(mut self) -> Option<&'a K>
    where
        &'a K: Ord,
    {
        self.next_back()
    }
}

impl<'a, K> DoubleEndedIterator for Iter<'a, K> {
    fn next_back(&mut self) -> Option<&'a K> {
        if self.len == 0 {
            return None;
        }
        let current = self.back?;
        self.len -= 1;
        self.back = self.arena.prev(current);
        Some(&self.arena[current].key)
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, K> IntoIterator for &'a RbTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}
