//! Workload profiles for vec2d benchmarks and examples.
//!
//! - [`uniform_grid`] / [`uniform_nested`]: same shape in both layouts.
//! - [`recorded_ops`]: a replayable mixed operation stream.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vec2d::Vec2d;
use vec2d_test_utils::model::{apply, apply_grid, Model, Op, OpGenerator};

/// `rows` rows of `cols` sequential values in a [`Vec2d`].
pub fn uniform_grid(rows: usize, cols: usize) -> Vec2d<i64> {
    (0..rows)
        .map(|r| (0..cols).map(move |c| (r * cols + c) as i64))
        .collect()
}

/// The same values as [`uniform_grid`] in a nested `Vec`.
pub fn uniform_nested(rows: usize, cols: usize) -> Vec<Vec<i64>> {
    (0..rows)
        .map(|r| (0..cols).map(|c| (r * cols + c) as i64).collect())
        .collect()
}

/// Record `count` operations from a seeded generator, keeping only those
/// that succeed so the stream replays cleanly on a fresh container.
pub fn recorded_ops(seed: u64, count: usize) -> Vec<Op> {
    let mut generator = OpGenerator::new(seed);
    let mut grid = Vec2d::new();
    let mut model = Model::new();
    let mut ops = Vec::with_capacity(count);
    while ops.len() < count {
        let op = generator.next_op(&model);
        if apply(&op, &mut grid, &mut model).is_ok() {
            ops.push(op);
        }
    }
    ops
}

/// Replay `ops` on a fresh container.
///
/// # Panics
///
/// Panics if an operation fails, which cannot happen for a stream from
/// [`recorded_ops`].
pub fn replay(ops: &[Op]) -> Vec2d<i64> {
    let mut grid = Vec2d::new();
    for op in ops {
        apply_grid(op, &mut grid).expect("recorded op replays");
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_profiles_agree() {
        let grid = uniform_grid(4, 3);
        let nested = uniform_nested(4, 3);
        for (i, row) in nested.iter().enumerate() {
            assert_eq!(&grid[i], row.as_slice());
        }
        assert_eq!(grid.layout_stats().slack(), 0);
    }

    #[test]
    fn recorded_stream_replays() {
        let ops = recorded_ops(3, 200);
        assert_eq!(ops.len(), 200);
        let a = replay(&ops);
        let b = replay(&ops);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "recorded op replays")]
    fn replay_rejects_failing_op() {
        let ops = vec![
            Op::PushRow(vec![1]),
            Op::InsertRow {
                pos: 3,
                values: vec![2],
            },
        ];
        replay(&ops);
    }
}
