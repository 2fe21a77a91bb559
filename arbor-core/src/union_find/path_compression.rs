//! Weighted quick-union with full path compression.
//!
//! `find` walks to the root once, then walks the same path a second time
//! repointing every visited node directly at the root. Combined with
//! union-by-size this gives amortised inverse-Ackermann cost per operation,
//! which the MST algorithms rely on.

use crate::error::UnionFindError;

use super::{UnionFind, check_element, identity, weighted::larger_first};

/// Union-find with union-by-size and two-pass path compression.
#[derive(Clone, Debug)]
pub struct WeightedQuickUnionPathCompression {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl WeightedQuickUnionPathCompression {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: identity(len),
            size: vec![1; len],
            count: len,
        }
    }

    /// Returns the parent link of every element.
    #[must_use]
    pub fn parents(&self) -> &[usize] {
        &self.parent
    }

    /// Returns the number of elements in `element`'s component.
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfRange`] when `element >= len()`.
    pub fn size_of(&mut self, element: usize) -> Result<usize, UnionFindError> {
        let root = self.find(element)?;
        Ok(self.size[root])
    }

    /// Returns the root of every element, compressing every path on the way.
    #[must_use]
    pub fn components(&mut self) -> Vec<usize> {
        (0..self.parent.len())
            .map(|element| self.root_of(element))
            .collect()
    }

    fn root_of(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }
}

impl UnionFind for WeightedQuickUnionPathCompression {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, element: usize) -> Result<usize, UnionFindError> {
        check_element(element, self.len())?;
        Ok(self.root_of(element))
    }

    fn union(&mut self, left: usize, right: usize) -> Result<bool, UnionFindError> {
        check_element(right, self.len())?;
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let (parent, child) = larger_first(&self.size, left_root, right_root);
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.count -= 1;
        Ok(true)
    }
}
