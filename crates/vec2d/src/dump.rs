//! Diagnostic views of the physical layout.
//!
//! [`LayoutDump`] renders the row list and the raw backing store for
//! debugging. Its text format is not stable.

use std::fmt;

use crate::grid::Vec2d;

/// Slot accounting for a [`Vec2d`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutStats {
    /// Number of rows.
    pub rows: usize,
    /// Live elements across all rows.
    pub live: usize,
    /// Slots reserved by rows, live or spare.
    pub reserved: usize,
    /// Total backing-store slots.
    pub store_len: usize,
}

impl LayoutStats {
    /// Slots no row can reach until the next compaction.
    pub fn slack(&self) -> usize {
        self.store_len - self.reserved
    }

    /// Reserved but unused slots, reachable only by their own row.
    pub fn spare(&self) -> usize {
        self.reserved - self.live
    }
}

impl fmt::Display for LayoutStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows {}, live {}, spare {}, slack {}, store {}",
            self.rows,
            self.live,
            self.spare(),
            self.slack(),
            self.store_len
        )
    }
}

/// Display adapter printing every row with its span, then the raw store.
pub struct LayoutDump<'a, T> {
    grid: &'a Vec2d<T>,
}

impl<T: fmt::Debug> fmt::Display for LayoutDump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.grid;
        writeln!(f, "vec2d:")?;
        writeln!(f, "rows: {}", grid.len())?;
        writeln!(f, "elements: {}", grid.element_count())?;
        for row in grid.rows() {
            let span = row.span();
            writeln!(
                f,
                "row[{}]: {:?} size:{} capacity:{} begin:{}",
                row.index(),
                row.as_slice(),
                span.len(),
                span.capacity(),
                span.begin()
            )?;
        }
        write!(f, "store: {:?}", grid.store().as_slice())
    }
}

impl<T> Vec2d<T> {
    /// Slot accounting for the current layout.
    pub fn layout_stats(&self) -> LayoutStats {
        LayoutStats {
            rows: self.rows.len(),
            live: self.element_count(),
            reserved: self.rows.iter().map(|s| s.capacity()).sum(),
            store_len: self.store.len(),
        }
    }

    /// Printable dump of rows, spans and the raw backing store.
    pub fn dump(&self) -> LayoutDump<'_, T> {
        LayoutDump { grid: self }
    }
}
