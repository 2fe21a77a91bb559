//! Disjoint-set (union-find) structures.
//!
//! Four realisations share the [`UnionFind`] contract and differ only in how
//! `find` and `union` trade off against each other:
//!
//! | Variant | `find` | `union` |
//! |---|---|---|
//! | [`QuickFind`] | O(1) | O(n) |
//! | [`QuickUnion`] | O(tree height) | O(tree height) |
//! | [`WeightedQuickUnion`] | O(log n) | O(log n) |
//! | [`WeightedQuickUnionPathCompression`] | amortised inverse Ackermann | amortised inverse Ackermann |
//!
//! The MST algorithms use [`WeightedQuickUnionPathCompression`] directly.

mod path_compression;
mod quick_find;
mod quick_union;
mod weighted;

pub use self::{
    path_compression::WeightedQuickUnionPathCompression, quick_find::QuickFind,
    quick_union::QuickUnion, weighted::WeightedQuickUnion,
};

use crate::error::UnionFindError;

/// Dynamic connectivity over the elements `0..len`.
///
/// Every element starts in its own component. A failed call never merges
/// components or changes [`UnionFind::count`].
///
/// # Examples
/// ```
/// use arbor_core::{UnionFind, WeightedQuickUnionPathCompression};
///
/// let mut sets = WeightedQuickUnionPathCompression::new(10);
/// sets.union(4, 3)?;
/// sets.union(3, 8)?;
/// assert!(sets.connected(4, 8)?);
/// assert!(!sets.connected(1, 2)?);
/// assert_eq!(sets.count(), 8);
/// # Ok::<(), arbor_core::UnionFindError>(())
/// ```
pub trait UnionFind {
    /// Returns the number of elements tracked.
    fn len(&self) -> usize;

    /// Returns `true` when no elements are tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of components.
    fn count(&self) -> usize;

    /// Returns the representative of `element`'s component.
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfRange`] when `element >= len()`.
    fn find(&mut self, element: usize) -> Result<usize, UnionFindError>;

    /// Merges the components of `left` and `right`.
    ///
    /// Returns `true` when two distinct components were merged and `false`
    /// when both elements already shared a component.
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfRange`] when either element is out of
    /// range.
    fn union(&mut self, left: usize, right: usize) -> Result<bool, UnionFindError>;

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfRange`] when either element is out of
    /// range.
    fn connected(&mut self, left: usize, right: usize) -> Result<bool, UnionFindError> {
        check_element(right, self.len())?;
        Ok(self.find(left)? == self.find(right)?)
    }
}

pub(crate) fn check_element(element: usize, len: usize) -> Result<(), UnionFindError> {
    if element < len {
        Ok(())
    } else {
        Err(UnionFindError::OutOfRange { element, len })
    }
}

fn identity(len: usize) -> Vec<usize> {
    (0..len).collect()
}
