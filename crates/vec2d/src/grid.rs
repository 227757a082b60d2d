//! The row-list container.
//!
//! [`Vec2d`] owns one [`BackingStore`] and an ordered list of [`RowSpan`]s.
//! Row order is what callers see; where each row physically sits in the
//! store is independent of it and changes under relocation and compaction.
//!
//! Rows are addressed by index. [`Row`] and [`RowMut`] pair a borrow of the
//! container with a row index, so cloning or moving a `Vec2d` never leaves a
//! row pointing at the wrong store.

use std::fmt;
use std::ops::{Index, IndexMut, Range};

use smallvec::SmallVec;

use crate::config::Vec2dConfig;
use crate::error::Vec2dError;
use crate::relocate;
use crate::row::{Row, RowMut};
use crate::span::RowSpan;
use crate::store::BackingStore;

/// A growable sequence of growable rows backed by one contiguous store.
#[derive(Clone)]
pub struct Vec2d<T> {
    pub(crate) rows: Vec<RowSpan>,
    pub(crate) store: BackingStore<T>,
}

impl<T> Vec2d<T> {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            store: BackingStore::new(),
        }
    }

    /// Create an empty container with allocations sized from `config`.
    pub fn with_config(config: &Vec2dConfig) -> Self {
        Self {
            rows: Vec::with_capacity(config.row_capacity),
            store: BackingStore::with_capacity(config.store_capacity),
        }
    }

    /// Create `rows` empty rows.
    ///
    /// Fails with [`Vec2dError::InvalidArgument`] when `rows` is zero.
    pub fn with_rows(rows: usize) -> Result<Self, Vec2dError> {
        if rows == 0 {
            return Err(Vec2dError::InvalidArgument { rows, cols: None });
        }
        let mut grid = Self::with_config(&Vec2dConfig::new().with_row_capacity(rows));
        grid.rows.resize(rows, RowSpan::default());
        Ok(grid)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Allocated capacity of the row list.
    pub fn row_list_capacity(&self) -> usize {
        self.rows.capacity()
    }

    /// Reserve room for at least `additional` more rows in the row list.
    pub fn reserve_rows(&mut self, additional: usize) {
        self.rows.reserve(additional);
    }

    /// Total live elements across all rows.
    pub fn element_count(&self) -> usize {
        self.rows.iter().map(RowSpan::len).sum()
    }

    /// The shared backing store, slack included.
    pub fn store(&self) -> &BackingStore<T> {
        &self.store
    }

    /// Row descriptors in row order.
    pub fn spans(&self) -> &[RowSpan] {
        &self.rows
    }

    /// Shared view of row `index`.
    pub fn row(&self, index: usize) -> Option<Row<'_, T>> {
        (index < self.rows.len()).then(|| Row::new(self, index))
    }

    /// Mutable view of row `index`.
    pub fn row_mut(&mut self, index: usize) -> Option<RowMut<'_, T>> {
        (index < self.rows.len()).then(move || RowMut::new(self, index))
    }

    /// Shared view of row `index`, or [`Vec2dError::OutOfRange`].
    pub fn at(&self, index: usize) -> Result<Row<'_, T>, Vec2dError> {
        let len = self.rows.len();
        self.row(index).ok_or(Vec2dError::OutOfRange {
            op: "at",
            index,
            len,
        })
    }

    /// Mutable view of row `index`, or [`Vec2dError::OutOfRange`].
    pub fn at_mut(&mut self, index: usize) -> Result<RowMut<'_, T>, Vec2dError> {
        let len = self.rows.len();
        self.row_mut(index).ok_or(Vec2dError::OutOfRange {
            op: "at",
            index,
            len,
        })
    }

    /// First row.
    pub fn first_row(&self) -> Option<Row<'_, T>> {
        self.row(0)
    }

    /// First row, mutably.
    pub fn first_row_mut(&mut self) -> Option<RowMut<'_, T>> {
        self.row_mut(0)
    }

    /// Last row.
    pub fn last_row(&self) -> Option<Row<'_, T>> {
        self.rows.len().checked_sub(1).and_then(|i| self.row(i))
    }

    /// Last row, mutably.
    pub fn last_row_mut(&mut self) -> Option<RowMut<'_, T>> {
        let last = self.rows.len().checked_sub(1)?;
        self.row_mut(last)
    }

    /// Iterate over rows in row order.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = Row<'_, T>> + ExactSizeIterator {
        (0..self.rows.len()).map(move |index| Row::new(self, index))
    }

    /// Live elements of row `index`.
    pub(crate) fn live(&self, index: usize) -> &[T] {
        self.store.slice(self.rows[index].live())
    }

    pub(crate) fn live_mut(&mut self, index: usize) -> &mut [T] {
        let range = self.rows[index].live();
        self.store.slice_mut(range)
    }

    /// Split into the store and one row's span for row-level mutation.
    pub(crate) fn parts_mut(&mut self, index: usize) -> (&mut BackingStore<T>, &mut RowSpan) {
        (&mut self.store, &mut self.rows[index])
    }

    /// Append a row holding `values` at the store tail.
    pub fn push_row<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let begin = self.store.extend(values);
        self.rows.push(RowSpan::new(begin, self.store.len() - begin));
    }

    /// Insert a row holding `values` before row `pos`. Returns `pos`.
    pub fn insert_row<I>(&mut self, pos: usize, values: I) -> Result<usize, Vec2dError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_insert_pos(pos)?;
        let begin = self.store.extend(values);
        let span = RowSpan::new(begin, self.store.len() - begin);
        self.rows.insert(pos, span);
        Ok(pos)
    }

    /// Drop every element and row.
    pub fn clear(&mut self) {
        self.store.clear();
        self.rows.clear();
    }

    fn check_insert_pos(&self, pos: usize) -> Result<(), Vec2dError> {
        if pos > self.rows.len() {
            return Err(Vec2dError::OutOfRange {
                op: "insert_row",
                index: pos,
                len: self.rows.len(),
            });
        }
        Ok(())
    }
}

impl<T: Default> Vec2d<T> {
    /// Create `rows` rows of `cols` default elements each.
    ///
    /// Fails with [`Vec2dError::InvalidArgument`] when either count is zero.
    pub fn with_shape(rows: usize, cols: usize) -> Result<Self, Vec2dError> {
        if rows == 0 || cols == 0 {
            return Err(Vec2dError::InvalidArgument {
                rows,
                cols: Some(cols),
            });
        }
        let mut grid = Self::with_config(&Vec2dConfig::for_shape(rows, cols));
        for _ in 0..rows {
            let begin = grid.store.append(cols);
            grid.rows.push(RowSpan::new(begin, cols));
        }
        Ok(grid)
    }

    /// Release the rows in `range` and remove them. Their store slots become
    /// slack until [`compact`](Vec2d::compact). Returns `range.start`.
    pub fn erase_rows(&mut self, range: Range<usize>) -> Result<usize, Vec2dError> {
        check_range("erase_rows", &range, self.rows.len())?;
        if range.is_empty() {
            return Ok(range.end);
        }
        for span in &mut self.rows[range.clone()] {
            relocate::clear(&mut self.store, span);
        }
        self.rows.drain(range.clone());
        Ok(range.start)
    }

    /// Release row `pos` and remove it. Returns `pos`.
    pub fn erase_row(&mut self, pos: usize) -> Result<usize, Vec2dError> {
        if pos >= self.rows.len() {
            return Err(Vec2dError::OutOfRange {
                op: "erase_row",
                index: pos,
                len: self.rows.len(),
            });
        }
        self.erase_rows(pos..pos + 1)
    }

    /// Remove the last row, moving its elements out.
    pub fn pop_row(&mut self) -> Option<Vec<T>> {
        let span = self.rows.pop()?;
        Some(span.live().map(|offset| self.store.take(offset)).collect())
    }

    /// Resize the row list to `len` rows, adding empty rows at the end.
    pub fn resize_rows(&mut self, len: usize) {
        if self.truncate_rows(len) {
            return;
        }
        let span = RowSpan::new(self.store.len(), 0);
        self.rows.resize(len, span);
    }

    /// Release and drop rows past `len`. Returns whether the list was at
    /// least `len` rows long.
    fn truncate_rows(&mut self, len: usize) -> bool {
        if len > self.rows.len() {
            return false;
        }
        for span in &mut self.rows[len..] {
            relocate::clear(&mut self.store, span);
        }
        self.rows.truncate(len);
        true
    }
}

impl<T: Default + Clone> Vec2d<T> {
    /// Resize the row list to `len` rows. Each added row gets its own store
    /// region holding a copy of `template`.
    pub fn resize_rows_with(&mut self, len: usize, template: &[T]) {
        if self.truncate_rows(len) {
            return;
        }
        let added = len - self.rows.len();
        self.rows.reserve(added);
        self.store.reserve(added.saturating_mul(template.len()));
        for _ in 0..added {
            let begin = self.store.extend(template.iter().cloned());
            self.rows.push(RowSpan::new(begin, template.len()));
        }
    }
}

impl<T: Clone> Vec2d<T> {
    /// Insert a copy of row `source` before row `pos`. Returns `pos`.
    ///
    /// The copy always gets a fresh store region, including when `source`
    /// is in this container.
    pub fn insert_row_copy(&mut self, pos: usize, source: usize) -> Result<usize, Vec2dError> {
        self.check_insert_pos(pos)?;
        if source >= self.rows.len() {
            return Err(Vec2dError::OutOfRange {
                op: "insert_row_copy",
                index: source,
                len: self.rows.len(),
            });
        }
        self.insert_rows_copy(pos, source..source + 1)
    }

    /// Insert copies of rows `sources` of this container before row `pos`,
    /// keeping their order. Returns `pos`.
    pub fn insert_rows_copy(&mut self, pos: usize, sources: Range<usize>) -> Result<usize, Vec2dError> {
        self.check_insert_pos(pos)?;
        check_range("insert_rows_copy", &sources, self.rows.len())?;
        let spans: SmallVec<[RowSpan; 8]> = self.rows[sources].iter().copied().collect();
        for span in spans.iter().rev() {
            let begin = self.store.append_copy_of(span.live());
            self.rows.insert(pos, RowSpan::new(begin, span.len()));
        }
        Ok(pos)
    }

    /// Insert copies of rows `sources` of `other` before row `pos`, keeping
    /// their order. Returns `pos`.
    pub fn insert_rows_from(
        &mut self,
        pos: usize,
        other: &Vec2d<T>,
        sources: Range<usize>,
    ) -> Result<usize, Vec2dError> {
        self.check_insert_pos(pos)?;
        check_range("insert_rows_from", &sources, other.rows.len())?;
        for index in sources.rev() {
            let begin = self.store.extend(other.live(index).iter().cloned());
            self.rows.insert(pos, RowSpan::new(begin, other.rows[index].len()));
        }
        Ok(pos)
    }
}

/// Check that `range` lies within `0..=len` and is not reversed.
fn check_range(op: &'static str, range: &Range<usize>, len: usize) -> Result<(), Vec2dError> {
    for index in [range.start, range.end] {
        if index > len {
            return Err(Vec2dError::OutOfRange { op, index, len });
        }
    }
    if range.start > range.end {
        return Err(Vec2dError::InvalidRange {
            first: range.start,
            last: range.end,
        });
    }
    Ok(())
}

impl<T> Default for Vec2d<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vec2d<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.rows.len()).map(|i| self.live(i)))
            .finish()
    }
}

/// Equality compares row contents in row order. Physical layout, capacity
/// and slack are ignored.
impl<T: PartialEq> PartialEq for Vec2d<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows.len() == other.rows.len()
            && (0..self.rows.len()).all(|i| self.live(i) == other.live(i))
    }
}

impl<T: Eq> Eq for Vec2d<T> {}

impl<T> Index<usize> for Vec2d<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &[T] {
        self.live(index)
    }
}

impl<T> IndexMut<usize> for Vec2d<T> {
    fn index_mut(&mut self, index: usize) -> &mut [T] {
        self.live_mut(index)
    }
}

impl<T, R> Extend<R> for Vec2d<T>
where
    R: IntoIterator<Item = T>,
{
    fn extend<I: IntoIterator<Item = R>>(&mut self, rows: I) {
        for row in rows {
            self.push_row(row);
        }
    }
}

impl<T, R> FromIterator<R> for Vec2d<T>
where
    R: IntoIterator<Item = T>,
{
    fn from_iter<I: IntoIterator<Item = R>>(rows: I) -> Self {
        let mut grid = Self::new();
        grid.extend(rows);
        grid
    }
}
