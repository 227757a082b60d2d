//! Row descriptors.
//!
//! A [`RowSpan`] locates one row inside the shared backing store by offset.
//! Offsets stay valid across store growth; only relocation and compaction
//! rewrite them.

use std::fmt;
use std::ops::Range;

/// Location and extent of one row within the backing store.
///
/// Invariant: `size <= capacity` and `begin + capacity` never exceeds the
/// store length. The occupied ranges of two live rows never overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowSpan {
    pub(crate) begin: usize,
    pub(crate) size: usize,
    pub(crate) capacity: usize,
}

impl RowSpan {
    /// A span of `size` live slots with no spare capacity.
    pub(crate) fn new(begin: usize, size: usize) -> Self {
        Self {
            begin,
            size,
            capacity: size,
        }
    }

    /// Offset of the first slot.
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// One past the last live slot.
    pub fn end(&self) -> usize {
        self.begin + self.size
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the row holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of slots reserved for this row.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Store range holding live elements.
    pub fn live(&self) -> Range<usize> {
        self.begin..self.end()
    }

    /// Store range reserved for this row, live or not.
    pub fn occupied(&self) -> Range<usize> {
        self.begin..self.begin + self.capacity
    }

    /// Whether the live range ends exactly at the end of a store of
    /// length `store_len`, which lets the row grow by plain appends.
    pub fn is_tail_resident(&self, store_len: usize) -> bool {
        self.end() == store_len
    }

    /// Move the row to `begin` and set its live length, keeping capacity
    /// at least as large as the new length.
    pub(crate) fn retarget(&mut self, begin: usize, size: usize) {
        self.begin = begin;
        self.size = size;
        self.capacity = self.capacity.max(size);
    }
}

impl fmt::Display for RowSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RowSpan(begin={}, size={}, capacity={})",
            self.begin, self.size, self.capacity
        )
    }
}
