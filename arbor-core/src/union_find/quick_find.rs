//! Quick-find: every element stores its component id directly.

use crate::error::UnionFindError;

use super::{UnionFind, check_element, identity};

/// Union-find with constant-time `find` and linear-time `union`.
#[derive(Clone, Debug)]
pub struct QuickFind {
    ids: Vec<usize>,
    count: usize,
}

impl QuickFind {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            ids: identity(len),
            count: len,
        }
    }

    /// Returns the component id stored for every element.
    #[must_use]
    pub fn parents(&self) -> &[usize] {
        &self.ids
    }
}

impl UnionFind for QuickFind {
    fn len(&self) -> usize {
        self.ids.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, element: usize) -> Result<usize, UnionFindError> {
        self.ids
            .get(element)
            .copied()
            .ok_or(UnionFindError::OutOfRange {
                element,
                len: self.ids.len(),
            })
    }

    fn union(&mut self, left: usize, right: usize) -> Result<bool, UnionFindError> {
        check_element(right, self.len())?;
        let from = self.find(left)?;
        let to = self.find(right)?;
        if from == to {
            return Ok(false);
        }

        for id in self.ids.iter_mut().filter(|id| **id == from) {
            *id = to;
        }
        self.count -= 1;
        Ok(true)
    }
}
