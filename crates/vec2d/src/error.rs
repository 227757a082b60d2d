//! Error types for row and row-list operations.

use std::error::Error;
use std::fmt;

/// Errors reported by fallible [`Vec2d`](crate::Vec2d) and row operations.
///
/// Every check runs before the structure is touched, so an `Err` always
/// means nothing was modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Vec2dError {
    /// A zero row or column count was passed to a sized constructor.
    InvalidArgument {
        /// Requested row count.
        rows: usize,
        /// Requested column count, if the constructor takes one.
        cols: Option<usize>,
    },
    /// A position outside the valid range for the operation.
    OutOfRange {
        /// Name of the operation that rejected the position.
        op: &'static str,
        /// The offending position.
        index: usize,
        /// Length of the row or row list at the time of the call.
        len: usize,
    },
    /// A range whose start lies after its end.
    InvalidRange {
        /// Range start.
        first: usize,
        /// Range end.
        last: usize,
    },
}

impl fmt::Display for Vec2dError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                rows,
                cols: Some(cols),
            } => {
                write!(f, "invalid shape: rows {rows} or cols {cols} cannot be zero")
            }
            Self::InvalidArgument { rows, cols: None } => {
                write!(f, "invalid shape: rows {rows} cannot be zero")
            }
            Self::OutOfRange { op, index, len } => {
                write!(f, "{op}: position {index} is out of range for length {len}")
            }
            Self::InvalidRange { first, last } => {
                write!(f, "invalid range: start {first} is after end {last}")
            }
        }
    }
}

impl Error for Vec2dError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_operation_and_bounds() {
        let err = Vec2dError::OutOfRange {
            op: "insert",
            index: 2,
            len: 1,
        };
        assert_eq!(
            err.to_string(),
            "insert: position 2 is out of range for length 1"
        );
    }

    #[test]
    fn display_shape_without_cols() {
        let err = Vec2dError::InvalidArgument {
            rows: 0,
            cols: None,
        };
        assert_eq!(err.to_string(), "invalid shape: rows 0 cannot be zero");
    }
}
