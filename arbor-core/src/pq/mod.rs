//! Indexed minimum priority queue.
//!
//! Callers address entries by a *slot* in `[0, capacity)` rather than by heap
//! position, which lets Prim's algorithm lower the priority of a vertex that
//! is already queued. Two tables move in lockstep:
//!
//! - `heap`: entries holding a slot and its priority, in binary min-heap
//!   order;
//! - `position`: slot to heap position, `None` for absent slots.
//!
//! Every mutation keeps `position[heap[i].slot] == Some(i)` for all
//! `i < len()`. A priority lives only in its heap entry, so a present slot
//! always has one.

use std::cmp::Ordering;

use crate::error::QueueError;

/// A totally ordered priority value.
///
/// Integers order naturally. Floats order by [`f64::total_cmp`] /
/// [`f32::total_cmp`], so NaN never breaks heap order.
pub trait Priority {
    /// Compares two priorities; `Less` means `self` is extracted first.
    fn priority_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_priority_for_ord {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Priority for $ty {
                fn priority_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )+
    };
}

impl_priority_for_ord!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Priority for f32 {
    fn priority_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Priority for f64 {
    fn priority_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Binary-heap priority queue keyed by external slot ids.
///
/// All tables are allocated once at construction and never grow.
///
/// # Examples
/// ```
/// use arbor_core::IndexedMinPq;
///
/// let mut queue = IndexedMinPq::new(4)?;
/// queue.insert(0, 0.43)?;
/// queue.insert(2, 0.11)?;
/// queue.insert(1, 0.36)?;
/// queue.insert(3, 0.25)?;
/// assert_eq!(queue.peek_min()?, 2);
/// assert_eq!(queue.extract_min()?, 2);
/// queue.change(0, 0.08)?;
/// assert_eq!(queue.peek_min()?, 0);
/// # Ok::<(), arbor_core::QueueError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IndexedMinPq<T> {
    heap: Vec<Entry<T>>,
    position: Vec<Option<usize>>,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    slot: usize,
    priority: T,
}

impl<T: Priority> IndexedMinPq<T> {
    /// Creates an empty queue over the slots `0..capacity`.
    ///
    /// # Errors
    /// Returns [`QueueError::ZeroCapacity`] when `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }
        Ok(Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
        })
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    /// Returns the number of present slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` when no slot is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` when `slot` currently holds a priority.
    ///
    /// # Errors
    /// Returns [`QueueError::SlotOutOfRange`] when `slot >= capacity()`.
    pub fn contains(&self, slot: usize) -> Result<bool, QueueError> {
        self.check_slot(slot)?;
        Ok(self.position[slot].is_some())
    }

    /// Returns the priority held by `slot`, or `None` when the slot is absent
    /// or out of range.
    #[must_use]
    pub fn priority(&self, slot: usize) -> Option<&T> {
        let at = self.position.get(slot).copied().flatten()?;
        self.heap.get(at).map(|entry| &entry.priority)
    }

    /// Adds `slot` with `value`.
    ///
    /// # Errors
    /// Returns [`QueueError::SlotOutOfRange`] for an out-of-range slot,
    /// [`QueueError::Full`] when every slot is present and
    /// [`QueueError::SlotOccupied`] when `slot` is already present.
    pub fn insert(&mut self, slot: usize, value: T) -> Result<(), QueueError> {
        self.check_slot(slot)?;
        if self.heap.len() == self.capacity() {
            return Err(QueueError::Full {
                capacity: self.capacity(),
            });
        }
        if self.position[slot].is_some() {
            return Err(QueueError::SlotOccupied { slot });
        }

        let at = self.heap.len();
        self.heap.push(Entry {
            slot,
            priority: value,
        });
        self.position[slot] = Some(at);
        self.sift_up(at);
        Ok(())
    }

    /// Replaces the priority of a present `slot` and restores heap order in
    /// whichever direction the new value requires.
    ///
    /// # Errors
    /// Returns [`QueueError::SlotOutOfRange`] for an out-of-range slot and
    /// [`QueueError::SlotVacant`] when `slot` is absent.
    pub fn change(&mut self, slot: usize, value: T) -> Result<(), QueueError> {
        let at = self.position_of(slot)?;
        self.heap[at].priority = value;
        let at = self.sift_up(at);
        self.sift_down(at);
        Ok(())
    }

    /// Returns the slot with the smallest priority.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] when no slot is present.
    pub fn peek_min(&self) -> Result<usize, QueueError> {
        self.heap
            .first()
            .map(|entry| entry.slot)
            .ok_or(QueueError::Empty)
    }

    /// Returns the smallest priority.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] when no slot is present.
    pub fn min_priority(&self) -> Result<&T, QueueError> {
        self.heap
            .first()
            .map(|entry| &entry.priority)
            .ok_or(QueueError::Empty)
    }

    /// Removes and returns the slot with the smallest priority.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] when no slot is present.
    pub fn extract_min(&mut self) -> Result<usize, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.detach(0).slot)
    }

    /// Removes `slot` from the queue and returns its priority.
    ///
    /// # Errors
    /// Returns [`QueueError::SlotOutOfRange`] for an out-of-range slot and
    /// [`QueueError::SlotVacant`] when `slot` is absent.
    pub fn remove(&mut self, slot: usize) -> Result<T, QueueError> {
        let at = self.position_of(slot)?;
        Ok(self.detach(at).priority)
    }

    /// Unlinks the entry at heap position `at`, which must be below `len()`,
    /// and restores heap order around the entry moved into its place.
    fn detach(&mut self, at: usize) -> Entry<T> {
        let entry = self.heap.swap_remove(at);
        self.position[entry.slot] = None;
        if let Some(moved) = self.heap.get(at).map(|moved| moved.slot) {
            self.position[moved] = Some(at);
            let at = self.sift_down(at);
            self.sift_up(at);
        }
        entry
    }

    fn check_slot(&self, slot: usize) -> Result<(), QueueError> {
        if slot < self.capacity() {
            Ok(())
        } else {
            Err(QueueError::SlotOutOfRange {
                slot,
                capacity: self.capacity(),
            })
        }
    }

    fn position_of(&self, slot: usize) -> Result<usize, QueueError> {
        self.check_slot(slot)?;
        self.position[slot].ok_or(QueueError::SlotVacant { slot })
    }

    /// Returns `true` when the entry at heap position `left` must sit above
    /// the entry at heap position `right`.
    fn less(&self, left: usize, right: usize) -> bool {
        self.heap[left]
            .priority
            .priority_cmp(&self.heap[right].priority)
            == Ordering::Less
    }

    fn swap(&mut self, left: usize, right: usize) {
        self.heap.swap(left, right);
        self.position[self.heap[left].slot] = Some(left);
        self.position[self.heap[right].slot] = Some(right);
    }

    /// Moves the entry at `at` towards the root and returns its final
    /// position.
    fn sift_up(&mut self, mut at: usize) -> usize {
        while at > 0 {
            let parent = (at - 1) / 2;
            if !self.less(at, parent) {
                break;
            }
            self.swap(at, parent);
            at = parent;
        }
        at
    }

    /// Moves the entry at `at` towards the leaves and returns its final
    /// position.
    fn sift_down(&mut self, mut at: usize) -> usize {
        let len = self.heap.len();
        loop {
            let left = 2 * at + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(smaller, at) {
                break;
            }
            self.swap(at, smaller);
            at = smaller;
        }
        at
    }
}
