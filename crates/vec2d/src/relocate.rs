//! Row growth and shift algorithms.
//!
//! Each function here mutates one row: the slots it owns in the
//! [`BackingStore`] and its [`RowSpan`]. A row that runs out of capacity is
//! either extended in place, when it is tail-resident, or copied to a fresh
//! region appended at the store tail. The region it leaves behind becomes
//! slack until the next compaction.
//!
//! Every function validates its arguments before touching the store.

use std::ops::Range;

use smallvec::SmallVec;

use crate::error::Vec2dError;
use crate::span::RowSpan;
use crate::store::BackingStore;

/// Inserted values are staged before any slot moves, so the insert length is
/// exact and a panicking iterator cannot leave the row half-shifted.
pub(crate) type Staged<T> = SmallVec<[T; 8]>;

fn relocated(span: &RowSpan, new_begin: usize, new_capacity: usize) {
    tracing::trace!(
        target: "vec2d::relocate",
        from = span.begin,
        to = new_begin,
        size = span.size,
        capacity = new_capacity,
        "relocated row to store tail"
    );
}

fn write_values<T>(store: &mut BackingStore<T>, at: usize, values: Staged<T>) {
    let len = values.len();
    for (slot, value) in store.slice_mut(at..at + len).iter_mut().zip(values) {
        *slot = value;
    }
}

/// Grow the row's capacity to at least `capacity`.
pub(crate) fn reserve<T: Default>(store: &mut BackingStore<T>, span: &mut RowSpan, capacity: usize) {
    if capacity <= span.capacity {
        return;
    }
    if span.is_tail_resident(store.len()) {
        store.append(capacity - span.size);
    } else {
        let new_begin = store.append(capacity);
        store.move_desc(span.begin, span.capacity, new_begin);
        relocated(span, new_begin, capacity);
        span.begin = new_begin;
    }
    span.capacity = capacity;
}

/// Insert `values` before row position `pos`. Returns `pos`.
pub(crate) fn insert<T, I>(
    store: &mut BackingStore<T>,
    span: &mut RowSpan,
    pos: usize,
    values: I,
) -> Result<usize, Vec2dError>
where
    T: Default,
    I: IntoIterator<Item = T>,
{
    if pos > span.size {
        return Err(Vec2dError::OutOfRange {
            op: "insert",
            index: pos,
            len: span.size,
        });
    }
    insert_staged(store, span, pos, values.into_iter().collect());
    Ok(pos)
}

/// Append `values` after the last live element with at most one relocation.
pub(crate) fn append<T, I>(store: &mut BackingStore<T>, span: &mut RowSpan, values: I)
where
    T: Default,
    I: IntoIterator<Item = T>,
{
    let end = span.size;
    insert_staged(store, span, end, values.into_iter().collect());
}

/// Shift the suffix at `pos` right and write `staged` into the gap.
/// `pos` must be at most `span.size`.
fn insert_staged<T: Default>(
    store: &mut BackingStore<T>,
    span: &mut RowSpan,
    pos: usize,
    staged: Staged<T>,
) {
    let len = staged.len();
    if len == 0 {
        return;
    }

    let (begin, size) = (span.begin, span.size);
    let suffix = size - pos;

    if size + len <= span.capacity {
        store.move_desc(begin + pos, suffix, begin + pos + len);
        write_values(store, begin + pos, staged);
        span.size += len;
    } else if !span.is_tail_resident(store.len()) {
        let new_begin = store.append(size + len);
        store.move_desc(begin, pos, new_begin);
        write_values(store, new_begin + pos, staged);
        store.move_desc(begin + pos, suffix, new_begin + pos + len);
        relocated(span, new_begin, size + len);
        *span = RowSpan::new(new_begin, size + len);
    } else {
        store.append(len);
        store.move_desc(begin + pos, suffix, begin + pos + len);
        write_values(store, begin + pos, staged);
        span.retarget(begin, size + len);
    }
}

/// Append one value, relocating the row if it is full.
pub(crate) fn push<T: Default>(store: &mut BackingStore<T>, span: &mut RowSpan, value: T) {
    if span.size < span.capacity {
        *store.slot_mut(span.end()) = value;
        span.size += 1;
    } else if span.is_tail_resident(store.len()) {
        store.push(value);
        span.retarget(span.begin, span.size + 1);
    } else {
        let size = span.size;
        let new_begin = store.append(size + 1);
        store.move_desc(span.begin, size, new_begin);
        *store.slot_mut(new_begin + size) = value;
        relocated(span, new_begin, size + 1);
        *span = RowSpan::new(new_begin, size + 1);
    }
}

/// Remove and return the last element, keeping capacity.
pub(crate) fn pop<T: Default>(store: &mut BackingStore<T>, span: &mut RowSpan) -> Option<T> {
    if span.size == 0 {
        return None;
    }
    span.size -= 1;
    Some(store.take(span.end()))
}

/// Release the elements in `range` and close the gap. Returns the position
/// that now holds the first element after the erased run.
pub(crate) fn erase<T: Default>(
    store: &mut BackingStore<T>,
    span: &mut RowSpan,
    range: Range<usize>,
) -> Result<usize, Vec2dError> {
    let Range { start, end } = range;
    for index in [start, end] {
        if index > span.size {
            return Err(Vec2dError::OutOfRange {
                op: "erase",
                index,
                len: span.size,
            });
        }
    }
    if start > end {
        return Err(Vec2dError::InvalidRange {
            first: start,
            last: end,
        });
    }
    if start == end {
        return Ok(end);
    }

    let begin = span.begin;
    store.release(begin + start..begin + end);
    store.move_asc(begin + end, span.size - end, begin + start);
    span.size -= end - start;
    Ok(start)
}

/// Remove and return the element at `pos`.
pub(crate) fn remove<T: Default>(
    store: &mut BackingStore<T>,
    span: &mut RowSpan,
    pos: usize,
) -> Result<T, Vec2dError> {
    if pos >= span.size {
        return Err(Vec2dError::OutOfRange {
            op: "remove",
            index: pos,
            len: span.size,
        });
    }
    let begin = span.begin;
    let value = store.take(begin + pos);
    store.move_asc(begin + pos + 1, span.size - pos - 1, begin + pos);
    span.size -= 1;
    Ok(value)
}

/// Release every live element, keeping capacity.
pub(crate) fn clear<T: Default>(store: &mut BackingStore<T>, span: &mut RowSpan) {
    if span.size == 0 {
        return;
    }
    store.release(span.live());
    span.size = 0;
}

/// Resize to `len` elements, filling new slots from `fill`.
pub(crate) fn resize_with<T, F>(
    store: &mut BackingStore<T>,
    span: &mut RowSpan,
    len: usize,
    mut fill: F,
) where
    T: Default,
    F: FnMut() -> T,
{
    let size = span.size;
    if len <= size {
        store.release(span.begin + len..span.end());
        span.size = len;
        return;
    }
    if len <= span.capacity {
        store
            .slice_mut(span.end()..span.begin + len)
            .fill_with(&mut fill);
        span.size = len;
        return;
    }

    let new_begin = store.append(len);
    store.move_desc(span.begin, size, new_begin);
    store
        .slice_mut(new_begin + size..new_begin + len)
        .fill_with(&mut fill);
    relocated(span, new_begin, len);
    *span = RowSpan::new(new_begin, len);
}
