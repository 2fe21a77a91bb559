//! Quick-union: a forest of parent links with unconditional root linking.

use crate::error::UnionFindError;

use super::{UnionFind, check_element, identity};

/// Union-find that links the root of `left` under the root of `right`.
///
/// Trees may degenerate into chains, so both operations are linear in the
/// worst case.
#[derive(Clone, Debug)]
pub struct QuickUnion {
    parent: Vec<usize>,
    count: usize,
}

impl QuickUnion {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: identity(len),
            count: len,
        }
    }

    /// Returns the parent link of every element.
    #[must_use]
    pub fn parents(&self) -> &[usize] {
        &self.parent
    }
}

impl UnionFind for QuickUnion {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, element: usize) -> Result<usize, UnionFindError> {
        check_element(element, self.len())?;
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        Ok(root)
    }

    fn union(&mut self, left: usize, right: usize) -> Result<bool, UnionFindError> {
        check_element(right, self.len())?;
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        self.parent[left_root] = right_root;
        self.count -= 1;
        Ok(true)
    }
}
