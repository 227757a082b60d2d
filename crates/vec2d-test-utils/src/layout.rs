//! Layout invariant checks.

use vec2d::{RowSpan, Vec2d};

/// Verify the structural invariants of `grid`'s physical layout:
///
/// - every row has `len <= capacity`;
/// - every occupied range lies inside the backing store;
/// - no two rows' occupied ranges overlap.
///
/// Returns a description of the first violation found.
pub fn check_layout<T>(grid: &Vec2d<T>) -> Result<(), String> {
    let store_len = grid.store().len();
    for (i, span) in grid.spans().iter().enumerate() {
        if span.len() > span.capacity() {
            return Err(format!("row {i}: {span} has size above capacity"));
        }
        if span.occupied().end > store_len {
            return Err(format!("row {i}: {span} runs past store length {store_len}"));
        }
    }

    let mut occupied: Vec<(usize, RowSpan)> = grid
        .spans()
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, span)| span.capacity() > 0)
        .collect();
    occupied.sort_by_key(|(_, span)| span.begin());
    for pair in occupied.windows(2) {
        let (a, left) = pair[0];
        let (b, right) = pair[1];
        if left.occupied().end > right.begin() {
            return Err(format!("rows {a} and {b} overlap: {left} vs {right}"));
        }
    }

    let stats = grid.layout_stats();
    if stats.reserved > stats.store_len {
        return Err(format!("reserved slots exceed store: {stats}"));
    }
    Ok(())
}

/// Panic with a readable message if `grid` violates a layout invariant.
pub fn assert_layout<T>(grid: &Vec2d<T>) {
    if let Err(reason) = check_layout(grid) {
        panic!("layout invariant violated: {reason}");
    }
}
