//! The shared backing store and its relocation primitives.
//!
//! [`BackingStore`] is one contiguous `Vec<T>` holding the slots of every
//! row. It only grows, except when compacted or cleared. Slots that no live
//! row reaches are slack: they keep whatever value was last left in them
//! (`T::default()` once an element has been moved out or released).
//!
//! The move primitives copy a run of slots to a new offset inside the same
//! store. Direction matters when source and destination overlap:
//! [`move_desc`](BackingStore::move_desc) copies the highest slot first and
//! is safe for rightward moves, [`move_asc`](BackingStore::move_asc) copies
//! the lowest slot first and is safe for leftward moves.

use std::mem;
use std::ops::Range;

/// Contiguous element storage shared by all rows of a [`Vec2d`](crate::Vec2d).
#[derive(Clone, Debug, Default)]
pub struct BackingStore<T> {
    slots: Vec<T>,
}

impl<T> BackingStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create an empty store with room for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Number of slots, live and slack.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the store has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in offset order, including slack.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub(crate) fn slice(&self, range: Range<usize>) -> &[T] {
        &self.slots[range]
    }

    pub(crate) fn slice_mut(&mut self, range: Range<usize>) -> &mut [T] {
        &mut self.slots[range]
    }

    pub(crate) fn slot_mut(&mut self, offset: usize) -> &mut T {
        &mut self.slots[offset]
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }

    /// Append one slot holding `value`. Returns its offset.
    pub(crate) fn push(&mut self, value: T) -> usize {
        let offset = self.slots.len();
        self.slots.push(value);
        offset
    }

    /// Append every value of `values`. Returns the offset of the first one.
    pub(crate) fn extend<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let offset = self.slots.len();
        self.slots.extend(values);
        offset
    }

    /// Drop every slot.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    /// Swap in a freshly built slot vector, returning the old one.
    pub(crate) fn replace(&mut self, slots: Vec<T>) -> Vec<T> {
        mem::replace(&mut self.slots, slots)
    }
}

impl<T: Clone> BackingStore<T> {
    /// Append clones of the slots in `range` at the tail. Returns the offset
    /// of the first copy. Safe when `range` is itself inside this store.
    pub(crate) fn append_copy_of(&mut self, range: Range<usize>) -> usize {
        let offset = self.slots.len();
        self.slots.extend_from_within(range);
        offset
    }
}

impl<T: Default> BackingStore<T> {
    /// Append `count` default slots. Returns the offset of the first.
    pub(crate) fn append(&mut self, count: usize) -> usize {
        let offset = self.slots.len();
        self.slots.resize_with(offset + count, T::default);
        offset
    }

    /// Move `len` slots starting at `src` to start at `dst`, highest first.
    ///
    /// Use when `dst >= src`. Vacated source slots hold `T::default()`.
    pub(crate) fn move_desc(&mut self, src: usize, len: usize, dst: usize) {
        debug_assert!(dst >= src || src + len <= dst || dst + len <= src);
        if len == 0 || src == dst {
            return;
        }
        for i in (0..len).rev() {
            self.slots[dst + i] = mem::take(&mut self.slots[src + i]);
        }
    }

    /// Move `len` slots starting at `src` to start at `dst`, lowest first.
    ///
    /// Use when `dst <= src`. Vacated source slots hold `T::default()`.
    pub(crate) fn move_asc(&mut self, src: usize, len: usize, dst: usize) {
        debug_assert!(dst <= src || src + len <= dst || dst + len <= src);
        if len == 0 || src == dst {
            return;
        }
        for i in 0..len {
            self.slots[dst + i] = mem::take(&mut self.slots[src + i]);
        }
    }

    /// Drop the elements in `range` now, leaving default values behind.
    pub(crate) fn release(&mut self, range: Range<usize>) {
        for slot in &mut self.slots[range] {
            drop(mem::take(slot));
        }
    }

    /// Move the element at `offset` out, leaving a default value behind.
    pub(crate) fn take(&mut self, offset: usize) -> T {
        mem::take(&mut self.slots[offset])
    }
}
