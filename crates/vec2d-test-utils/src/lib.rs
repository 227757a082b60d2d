//! Test utilities for vec2d development.
//!
//! - [`model`]: a `Vec<Vec<i64>>` reference model, the [`Op`] vocabulary
//!   and a seeded [`OpGenerator`] for differential testing.
//! - [`layout`]: structural invariant checks on a [`vec2d::Vec2d`] layout.
//! - [`tracked`]: an element type that counts its own live instances.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod layout;
pub mod model;
pub mod tracked;

pub use layout::check_layout;
pub use model::{apply, apply_grid, Model, Op, OpGenerator};
pub use tracked::{LiveCounter, Tracked};
