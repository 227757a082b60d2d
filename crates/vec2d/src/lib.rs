//! A two-level growable sequence whose rows share one contiguous store.
//!
//! `Vec<Vec<T>>` gives every row its own heap allocation. [`Vec2d`] instead
//! keeps all elements in a single [`BackingStore`] and describes each row as
//! a [`RowSpan`] into it, while still letting every row grow and shrink like
//! a `Vec`.
//!
//! # Architecture
//!
//! ```text
//! Vec2d<T>
//! ├── Vec<RowSpan>        row list, caller-visible order
//! │   └── RowSpan         { begin, size, capacity } offsets into the store
//! └── BackingStore<T>     one Vec<T>: live rows, spare capacity, slack
//! ```
//!
//! Row-level operations (`relocate`) grow a row in place when it ends at the
//! store tail, and otherwise copy it to a fresh region appended at the tail.
//! The region left behind becomes slack. [`Vec2d::compact`] rebuilds the
//! store in row order and reclaims all of it.
//!
//! Rows are reached through [`Row`] / [`RowMut`] views that pair a borrow of
//! the container with a row index. They cannot be constructed any other way.
//!
//! # Element lifetime
//!
//! Erased, popped and cleared elements are dropped (or moved to the caller)
//! inside the call. Slots they leave behind hold `T::default()`, which is
//! why mutating operations require `T: Default`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod compact;
pub mod config;
pub mod dump;
pub mod error;
pub mod grid;
mod relocate;
pub mod row;
pub mod span;
pub mod store;

pub use config::Vec2dConfig;
pub use dump::{LayoutDump, LayoutStats};
pub use error::Vec2dError;
pub use grid::Vec2d;
pub use row::{Row, RowMut};
pub use span::RowSpan;
pub use store::BackingStore;
