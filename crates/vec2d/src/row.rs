//! Views of a single row.
//!
//! A row has no storage of its own. [`Row`] and [`RowMut`] borrow the owning
//! [`Vec2d`] together with a row index and resolve every access through the
//! container's backing store. Both can only be obtained from `Vec2d`
//! accessors such as [`Vec2d::row`] and [`Vec2d::row_mut`].
//!
//! Both views dereference to the row's live slice, so slice methods
//! (`len`, `get`, `first`, `last`, `iter`, ...) are available directly.

use std::fmt;
use std::ops::{Deref, DerefMut, Range};

use crate::error::Vec2dError;
use crate::grid::Vec2d;
use crate::relocate;
use crate::span::RowSpan;

/// Shared view of one row of a [`Vec2d`].
pub struct Row<'a, T> {
    grid: &'a Vec2d<T>,
    index: usize,
}

impl<'a, T> Row<'a, T> {
    pub(crate) fn new(grid: &'a Vec2d<T>, index: usize) -> Self {
        Self { grid, index }
    }

    /// Position of this row in the row list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// This row's descriptor.
    pub fn span(&self) -> RowSpan {
        self.grid.rows[self.index]
    }

    /// Number of slots reserved for this row.
    pub fn capacity(&self) -> usize {
        self.span().capacity()
    }

    /// Live elements, borrowed for the lifetime of the container borrow.
    pub fn as_slice(&self) -> &'a [T] {
        self.grid.live(self.index)
    }

    /// Element at `index`, or [`Vec2dError::OutOfRange`].
    pub fn at(&self, index: usize) -> Result<&'a T, Vec2dError> {
        let live = self.as_slice();
        live.get(index).ok_or(Vec2dError::OutOfRange {
            op: "at",
            index,
            len: live.len(),
        })
    }
}

impl<T> Clone for Row<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Row<'_, T> {}

impl<T> Deref for Row<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T> IntoIterator for Row<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Row<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Mutable view of one row of a [`Vec2d`].
///
/// Growth operations may relocate the row to the store tail. Offsets taken
/// from [`RowSpan`]s before such a call are stale afterwards; row indices
/// stay valid.
pub struct RowMut<'a, T> {
    grid: &'a mut Vec2d<T>,
    index: usize,
}

impl<'a, T> RowMut<'a, T> {
    pub(crate) fn new(grid: &'a mut Vec2d<T>, index: usize) -> Self {
        Self { grid, index }
    }

    /// Position of this row in the row list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// This row's descriptor.
    pub fn span(&self) -> RowSpan {
        self.grid.rows[self.index]
    }

    /// Number of slots reserved for this row.
    pub fn capacity(&self) -> usize {
        self.span().capacity()
    }

    /// Live elements.
    pub fn as_slice(&self) -> &[T] {
        self.grid.live(self.index)
    }

    /// Live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.grid.live_mut(self.index)
    }

    /// Reborrow as a shared view.
    pub fn as_row(&self) -> Row<'_, T> {
        Row::new(self.grid, self.index)
    }

    /// Element at `index`, or [`Vec2dError::OutOfRange`].
    pub fn at(&self, index: usize) -> Result<&T, Vec2dError> {
        let len = self.span().len();
        self.as_slice().get(index).ok_or(Vec2dError::OutOfRange {
            op: "at",
            index,
            len,
        })
    }

    /// Mutable element at `index`, or [`Vec2dError::OutOfRange`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Vec2dError> {
        let len = self.span().len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Vec2dError::OutOfRange {
                op: "at",
                index,
                len,
            })
    }

    /// Drop spare capacity. The trailing reserved slots become slack.
    pub fn shrink_to_fit(&mut self) {
        let span = &mut self.grid.rows[self.index];
        span.capacity = span.size;
    }
}

impl<T: Default> RowMut<'_, T> {
    /// Ensure the row can hold `capacity` elements in total.
    ///
    /// Unlike [`Vec::reserve`], the argument is the target capacity, not an
    /// additional count. No-op when the row already has that much room.
    pub fn reserve(&mut self, capacity: usize) {
        let (store, span) = self.grid.parts_mut(self.index);
        relocate::reserve(store, span, capacity);
    }

    /// Release every element, keeping capacity.
    pub fn clear(&mut self) {
        let (store, span) = self.grid.parts_mut(self.index);
        relocate::clear(store, span);
    }

    /// Append `value`.
    pub fn push(&mut self, value: T) {
        let (store, span) = self.grid.parts_mut(self.index);
        relocate::push(store, span, value);
    }

    /// Remove and return the last element. Capacity is unchanged.
    pub fn pop(&mut self) -> Option<T> {
        let (store, span) = self.grid.parts_mut(self.index);
        relocate::pop(store, span)
    }

    /// Insert `value` before position `pos`. Returns `pos`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<usize, Vec2dError> {
        self.insert_many(pos, [value])
    }

    /// Insert `values` before position `pos`, in order. Returns `pos`, which
    /// then holds the first inserted element.
    ///
    /// `values` is not consumed when `pos` is out of range.
    pub fn insert_many<I>(&mut self, pos: usize, values: I) -> Result<usize, Vec2dError>
    where
        I: IntoIterator<Item = T>,
    {
        let (store, span) = self.grid.parts_mut(self.index);
        relocate::insert(store, span, pos, values)
    }

    /// Remove and return the element at `pos`, shifting later elements left.
    pub fn remove(&mut self, pos: usize) -> Result<T, Vec2dError> {
        let (store, span) = self.grid.parts_mut(self.index);
        relocate::remove(store, span, pos)
    }

    /// Release the elements in `range` and close the gap. Capacity is
    /// unchanged. Returns the position now holding the first element after
    /// the erased run.
    pub fn erase(&mut self, range: Range<usize>) -> Result<usize, Vec2dError> {
        let (store, span) = self.grid.parts_mut(self.index);
        relocate::erase(store, span, range)
    }

    /// Resize to `len`, filling new slots with values returned by `fill`.
    pub fn resize_with<F>(&mut self, len: usize, fill: F)
    where
        F: FnMut() -> T,
    {
        let (store, span) = self.grid.parts_mut(self.index);
        relocate::resize_with(store, span, len, fill);
    }

    /// Resize to `len`, filling new slots with `T::default()`.
    pub fn resize_default(&mut self, len: usize) {
        self.resize_with(len, T::default);
    }
}

impl<T: Default + Clone> RowMut<'_, T> {
    /// Resize to `len`, filling new slots with clones of `value`.
    pub fn resize(&mut self, len: usize, value: T) {
        self.resize_with(len, || value.clone());
    }

    /// Append clones of `values`.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        self.extend(values.iter().cloned());
    }
}

impl<T> Deref for RowMut<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for RowMut<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Default> Extend<T> for RowMut<'_, T> {
    /// Appends all of `values` with at most one relocation.
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let (store, span) = self.grid.parts_mut(self.index);
        relocate::append(store, span, values);
    }
}

impl<T: fmt::Debug> fmt::Debug for RowMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
