use thiserror::Error;

use crate::{Link, RbTree};

/// A broken red-black or search-tree property, as reported by
/// [`RbTree::validate`]. Depths count from the root at 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("root is red")]
    RedRoot,
    #[error("root has a parent")]
    RootHasParent,
    #[error("child of the node at depth {depth} does not point back to it")]
    BrokenParentLink { depth: usize },
    #[error("red node at depth {depth} has a red child")]
    RedRed { depth: usize },
    #[error("black-height mismatch at depth {depth}: left {left}, right {right}")]
    BlackHeight {
        depth: usize,
        left: usize,
        right: usize,
    },
    #[error("keys out of order at in-order position {position}")]
    Unordered { position: usize },
    #[error("tree counts {expected} keys but links reach {found}")]
    Length { expected: usize, found: usize },
}

impl<K: Ord> RbTree<K> {
    /// Checks every red-black and ordering property of the tree, along with
    /// the consistency of parent links.
    ///
    /// Returns the black-height of the root: the number of black nodes on
    /// any path from the root down to an absent child (0 when empty).
    pub fn validate(&self) -> Result<usize, InvariantError> {
        let Some(root) = self.root else {
            return match self.len() {
                0 => Ok(0),
                expected => Err(InvariantError::Length { expected, found: 0 }),
            };
        };
        if self.arena[root].parent.is_some() {
            return Err(InvariantError::RootHasParent);
        }
        if self.arena[root].is_red() {
            return Err(InvariantError::RedRoot);
        }

        let black_height = self.black_height(self.root, 0)?;

        let mut found = 0;
        let mut previous = None;
        for (position, key) in self.iter().enumerate() {
            if previous.is_some_and(|previous| previous >= key) {
                return Err(InvariantError::Unordered { position });
            }
            previous = Some(key);
            found += 1;
        }
        if found != self.len() {
            return Err(InvariantError::Length {
                expected: self.len(),
                found,
            });
        }
        Ok(black_height)
    }

    fn black_height(&self, link: Link, depth: usize) -> Result<usize, InvariantError> {
        let Some(id) = link else {
            return Ok(0);
        };
        let node = &self.arena[id];
        for child in [node.left, node.right].into_iter().flatten() {
            if self.arena[child].parent != Some(id) {
                return Err(InvariantError::BrokenParentLink { depth });
            }
            if node.is_red() && self.arena[child].is_red() {
                return Err(InvariantError::RedRed { depth });
            }
        }

        let left = self.black_height(node.left, depth + 1)?;
        let right = self.black_height(node.right, depth + 1)?;
        if left != right {
            return Err(InvariantError::BlackHeight { depth, left, right });
        }
        Ok(left + usize::from(node.is_black()))
    }
}
