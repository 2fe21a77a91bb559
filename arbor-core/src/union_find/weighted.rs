//! Weighted quick-union: the smaller tree always hangs under the larger.

use crate::error::UnionFindError;

use super::{UnionFind, check_element, identity};

/// Union-find that links by size, keeping every tree `O(log n)` tall.
#[derive(Clone, Debug)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl WeightedQuickUnion {
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
}

impl UnionFind for WeightedQuickUnion {
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

        let (parent, child) = larger_first(&self.size, left_root, right_root);
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.count -= 1;
        Ok(true)
    }
}

/// Orders two roots as `(parent, child)` by tree size.
///
/// On equal sizes `left_root` stays the parent.
pub(super) fn larger_first(size: &[usize], left_root: usize, right_root: usize) -> (usize, usize) {
    if size[left_root] < size[right_root] {
        (right_root, left_root)
    } else {
        (left_root, right_root)
    }
}
