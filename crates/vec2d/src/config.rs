//! Construction-time sizing hints.

/// Pre-allocation hints for a [`Vec2d`](crate::Vec2d).
///
/// Both values only size the underlying allocations up front. They never
/// change where rows are placed or what capacity a row reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vec2dConfig {
    /// Number of row descriptors to reserve in the row list.
    ///
    /// Default: 0.
    pub row_capacity: usize,

    /// Number of element slots to reserve in the backing store.
    ///
    /// Default: 0.
    pub store_capacity: usize,
}

impl Vec2dConfig {
    /// Default row-list reservation.
    pub const DEFAULT_ROW_CAPACITY: usize = 0;

    /// Default backing-store reservation.
    pub const DEFAULT_STORE_CAPACITY: usize = 0;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            row_capacity: Self::DEFAULT_ROW_CAPACITY,
            store_capacity: Self::DEFAULT_STORE_CAPACITY,
        }
    }

    /// Config sized for `rows` rows of roughly `cols` elements each.
    pub fn for_shape(rows: usize, cols: usize) -> Self {
        Self {
            row_capacity: rows,
            store_capacity: rows.saturating_mul(cols),
        }
    }

    /// Set the row-list reservation.
    pub fn with_row_capacity(mut self, rows: usize) -> Self {
        self.row_capacity = rows;
        self
    }

    /// Set the backing-store reservation.
    pub fn with_store_capacity(mut self, slots: usize) -> Self {
        self.store_capacity = slots;
        self
    }
}

impl Default for Vec2dConfig {
    fn default() -> Self {
        Self::new()
    }
}
