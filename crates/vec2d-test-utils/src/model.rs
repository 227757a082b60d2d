//! Differential testing against `Vec<Vec<i64>>`.
//!
//! [`OpGenerator`] draws a deterministic stream of row and row-list
//! operations from a seeded ChaCha8 RNG. [`apply`] runs one operation on
//! both a [`Vec2d`] and the [`Model`] and checks that they agree on success
//! or failure. A small share of generated operations use invalid positions
//! on purpose.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vec2d::{Vec2d, Vec2dError};

/// Reference model: one independently allocated `Vec` per row.
pub type Model = Vec<Vec<i64>>;

/// One operation on either the row list or a single row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    PushRow(Vec<i64>),
    InsertRow { pos: usize, values: Vec<i64> },
    InsertRowCopy { pos: usize, source: usize },
    InsertRowsCopy { pos: usize, start: usize, end: usize },
    EraseRows { start: usize, end: usize },
    PopRow,
    ResizeRows { len: usize },
    ResizeRowsWith { len: usize, template: Vec<i64> },
    Compact,
    Push { row: usize, value: i64 },
    Pop { row: usize },
    Insert { row: usize, pos: usize, values: Vec<i64> },
    Erase { row: usize, start: usize, end: usize },
    Remove { row: usize, pos: usize },
    Reserve { row: usize, capacity: usize },
    Resize { row: usize, len: usize, value: i64 },
    ShrinkToFit { row: usize },
    ClearRow { row: usize },
}

/// Seeded generator of [`Op`]s that are mostly valid for the current model.
pub struct OpGenerator {
    rng: ChaCha8Rng,
    next_value: i64,
}

impl OpGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_value: 1,
        }
    }

    fn values(&mut self, max_len: usize) -> Vec<i64> {
        let len = self.rng.random_range(0..=max_len);
        (0..len)
            .map(|_| {
                self.next_value += 1;
                self.next_value
            })
            .collect()
    }

    /// A position in `0..=len`, occasionally one past it.
    fn position(&mut self, len: usize) -> usize {
        if self.rng.random_bool(0.05) {
            len + 1
        } else {
            self.rng.random_range(0..=len)
        }
    }

    /// Draw the next operation for a container currently equal to `model`.
    pub fn next_op(&mut self, model: &Model) -> Op {
        let rows = model.len();
        if rows == 0 {
            return Op::PushRow(self.values(4));
        }
        let row = self.rng.random_range(0..rows);
        let size = model[row].len();
        match self.rng.random_range(0..18u32) {
            0 => Op::PushRow(self.values(4)),
            1 => Op::InsertRow {
                pos: self.position(rows),
                values: self.values(3),
            },
            2 => Op::InsertRowCopy {
                pos: self.position(rows),
                source: self.rng.random_range(0..rows),
            },
            3 => {
                let start = self.rng.random_range(0..=rows);
                let end = self.rng.random_range(start..=rows);
                Op::InsertRowsCopy {
                    pos: self.position(rows),
                    start,
                    end,
                }
            }
            4 => {
                let start = self.position(rows);
                let end = self.rng.random_range(start.min(rows)..=rows);
                Op::EraseRows { start, end }
            }
            5 => Op::PopRow,
            6 => Op::ResizeRows {
                len: self.rng.random_range(0..=rows + 2),
            },
            7 => Op::ResizeRowsWith {
                len: self.rng.random_range(0..=rows + 2),
                template: self.values(3),
            },
            8 => Op::Compact,
            9 | 10 => {
                self.next_value += 1;
                Op::Push {
                    row,
                    value: self.next_value,
                }
            }
            11 => Op::Pop { row },
            12 => Op::Insert {
                row,
                pos: self.position(size),
                values: self.values(4),
            },
            13 => {
                let start = self.position(size);
                let end = self.rng.random_range(start.min(size)..=size);
                Op::Erase { row, start, end }
            }
            14 => Op::Remove {
                row,
                pos: self.rng.random_range(0..=size),
            },
            15 => Op::Reserve {
                row,
                capacity: self.rng.random_range(0..=size + 6),
            },
            16 => {
                self.next_value += 1;
                Op::Resize {
                    row,
                    len: self.rng.random_range(0..=size + 4),
                    value: self.next_value,
                }
            }
            _ => {
                if self.rng.random_bool(0.5) {
                    Op::ShrinkToFit { row }
                } else {
                    Op::ClearRow { row }
                }
            }
        }
    }
}

fn model_range_ok(start: usize, end: usize, len: usize) -> bool {
    start <= len && end <= len && start <= end
}

/// Apply `op` to both `grid` and `model`.
///
/// Returns the grid's result. Panics if the grid and the model disagree on
/// whether the operation is valid; the model is only mutated when the grid
/// call succeeded.
pub fn apply(op: &Op, grid: &mut Vec2d<i64>, model: &mut Model) -> Result<(), Vec2dError> {
    let result = apply_grid(op, grid);
    let valid = model_valid(op, model);
    assert_eq!(
        result.is_ok(),
        valid,
        "grid and model disagree on {op:?}: grid returned {result:?}"
    );
    if valid {
        apply_model(op, model);
    }
    result
}

/// Apply `op` to `grid` alone.
pub fn apply_grid(op: &Op, grid: &mut Vec2d<i64>) -> Result<(), Vec2dError> {
    match op {
        Op::PushRow(values) => grid.push_row(values.iter().copied()),
        Op::InsertRow { pos, values } => {
            grid.insert_row(*pos, values.iter().copied())?;
        }
        Op::InsertRowCopy { pos, source } => {
            grid.insert_row_copy(*pos, *source)?;
        }
        Op::InsertRowsCopy { pos, start, end } => {
            grid.insert_rows_copy(*pos, *start..*end)?;
        }
        Op::EraseRows { start, end } => {
            grid.erase_rows(*start..*end)?;
        }
        Op::PopRow => {
            grid.pop_row();
        }
        Op::ResizeRows { len } => grid.resize_rows(*len),
        Op::ResizeRowsWith { len, template } => grid.resize_rows_with(*len, template),
        Op::Compact => grid.compact(),
        Op::Push { row, value } => grid.at_mut(*row)?.push(*value),
        Op::Pop { row } => {
            grid.at_mut(*row)?.pop();
        }
        Op::Insert { row, pos, values } => {
            grid.at_mut(*row)?.insert_many(*pos, values.iter().copied())?;
        }
        Op::Erase { row, start, end } => {
            grid.at_mut(*row)?.erase(*start..*end)?;
        }
        Op::Remove { row, pos } => {
            grid.at_mut(*row)?.remove(*pos)?;
        }
        Op::Reserve { row, capacity } => grid.at_mut(*row)?.reserve(*capacity),
        Op::Resize { row, len, value } => grid.at_mut(*row)?.resize(*len, *value),
        Op::ShrinkToFit { row } => grid.at_mut(*row)?.shrink_to_fit(),
        Op::ClearRow { row } => grid.at_mut(*row)?.clear(),
    }
    Ok(())
}

fn model_valid(op: &Op, model: &Model) -> bool {
    let rows = model.len();
    let row_len = |row: usize| model.get(row).map(Vec::len);
    match op {
        Op::PushRow(_)
        | Op::PopRow
        | Op::ResizeRows { .. }
        | Op::ResizeRowsWith { .. }
        | Op::Compact => true,
        Op::InsertRow { pos, .. } => *pos <= rows,
        Op::InsertRowCopy { pos, source } => *pos <= rows && *source < rows,
        Op::InsertRowsCopy { pos, start, end } => {
            *pos <= rows && model_range_ok(*start, *end, rows)
        }
        Op::EraseRows { start, end } => model_range_ok(*start, *end, rows),
        Op::Push { row, .. }
        | Op::Pop { row }
        | Op::Reserve { row, .. }
        | Op::Resize { row, .. }
        | Op::ShrinkToFit { row }
        | Op::ClearRow { row } => *row < rows,
        Op::Insert { row, pos, .. } => row_len(*row).is_some_and(|len| *pos <= len),
        Op::Erase { row, start, end } => {
            row_len(*row).is_some_and(|len| model_range_ok(*start, *end, len))
        }
        Op::Remove { row, pos } => row_len(*row).is_some_and(|len| *pos < len),
    }
}

fn apply_model(op: &Op, model: &mut Model) {
    match op {
        Op::PushRow(values) => model.push(values.clone()),
        Op::InsertRow { pos, values } => model.insert(*pos, values.clone()),
        Op::InsertRowCopy { pos, source } => {
            let copy = model[*source].clone();
            model.insert(*pos, copy);
        }
        Op::InsertRowsCopy { pos, start, end } => {
            let copies: Vec<_> = model[*start..*end].to_vec();
            model.splice(*pos..*pos, copies);
        }
        Op::EraseRows { start, end } => {
            model.drain(*start..*end);
        }
        Op::PopRow => {
            model.pop();
        }
        Op::ResizeRows { len } => model.resize(*len, Vec::new()),
        Op::ResizeRowsWith { len, template } => model.resize(*len, template.clone()),
        Op::Compact | Op::ShrinkToFit { .. } | Op::Reserve { .. } => {}
        Op::Push { row, value } => model[*row].push(*value),
        Op::Pop { row } => {
            model[*row].pop();
        }
        Op::Insert { row, pos, values } => {
            model[*row].splice(*pos..*pos, values.iter().copied());
        }
        Op::Erase { row, start, end } => {
            model[*row].drain(*start..*end);
        }
        Op::Remove { row, pos } => {
            model[*row].remove(*pos);
        }
        Op::Resize { row, len, value } => model[*row].resize(*len, *value),
        Op::ClearRow { row } => model[*row].clear(),
    }
}

/// Assert that `grid` holds exactly the rows of `model`.
pub fn assert_matches(grid: &Vec2d<i64>, model: &Model) {
    assert_eq!(grid.len(), model.len(), "row count differs");
    for (i, expected) in model.iter().enumerate() {
        assert_eq!(&grid[i], expected.as_slice(), "row {i} differs");
    }
}

/// Build a grid and a matching model from the same rows.
pub fn seeded_pair(rows: &[&[i64]]) -> (Vec2d<i64>, Model) {
    let grid = rows.iter().map(|r| r.iter().copied()).collect();
    let model = rows.iter().map(|r| r.to_vec()).collect();
    (grid, model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_deterministic() {
        let model: Model = vec![vec![1, 2], vec![3]];
        let mut a = OpGenerator::new(7);
        let mut b = OpGenerator::new(7);
        for _ in 0..32 {
            assert_eq!(a.next_op(&model), b.next_op(&model));
        }
    }

    #[test]
    fn empty_model_always_pushes_a_row() {
        let mut generator = OpGenerator::new(1);
        assert!(matches!(generator.next_op(&Vec::new()), Op::PushRow(_)));
    }

    #[test]
    fn apply_keeps_grid_and_model_in_step() {
        let (mut grid, mut model) = seeded_pair(&[&[1, 2, 3], &[4]]);
        apply(&Op::Push { row: 1, value: 5 }, &mut grid, &mut model).unwrap();
        apply(
            &Op::Insert {
                row: 0,
                pos: 9,
                values: vec![0],
            },
            &mut grid,
            &mut model,
        )
        .unwrap_err();
        assert_matches(&grid, &model);
    }
}
