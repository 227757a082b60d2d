//! Integration tests: documented row and row-list behaviour.

use vec2d::{Vec2d, Vec2dError};
use vec2d_test_utils::layout::assert_layout;

#[test]
fn push_row_then_push_into_it() {
    let mut grid = Vec2d::new();
    grid.push_row([21, 21, 21]);
    assert_eq!(grid.len(), 1);
    assert_eq!(&grid[0], &[21, 21, 21]);

    grid.row_mut(0).unwrap().push(-1);
    assert_eq!(&grid[0], &[21, 21, 21, -1]);
    assert_eq!(grid.row(0).unwrap().len(), 4);
    assert_layout(&grid);
}

#[test]
fn insert_past_size_is_out_of_range() {
    let mut grid = Vec2d::new();
    grid.push_row([1]);
    let err = grid.row_mut(0).unwrap().insert(2, 99).unwrap_err();
    assert!(matches!(err, Vec2dError::OutOfRange { index: 2, len: 1, .. }));
    assert_eq!(&grid[0], &[1]);
    assert_eq!(grid.store().len(), 1);
}

#[test]
fn full_row_push_relocates_and_keeps_contents() {
    let mut grid = Vec2d::new();
    grid.push_row(['a', 'b']);
    grid.push_row(['z']);
    assert_eq!(grid.row(0).unwrap().capacity(), 2);

    grid.row_mut(0).unwrap().push('c');
    let row = grid.row(0).unwrap();
    assert_eq!(row.as_slice(), &['a', 'b', 'c']);
    assert_eq!(row.len(), 3);
    assert!(row.capacity() >= 3);
    assert_eq!(&grid[1], &['z']);
    assert_layout(&grid);
}

#[test]
fn erase_first_row_then_compact() {
    let mut grid = Vec2d::new();
    grid.push_row([1, 2, 3]);
    grid.push_row([4, 5]);
    grid.erase_row(0).unwrap();
    grid.compact();

    assert_eq!(grid.len(), 1);
    assert_eq!(&grid[0], &[4, 5]);
    assert_eq!(grid.row(0).unwrap().capacity(), 2);
    assert_layout(&grid);
}

#[test]
fn reserve_within_capacity_changes_nothing() {
    let mut grid = Vec2d::new();
    grid.push_row([1, 2, 3]);
    grid.push_row([4]);
    let before = grid.clone();
    let spans = grid.spans().to_vec();

    grid.row_mut(0).unwrap().reserve(2);
    grid.row_mut(0).unwrap().reserve(3);

    assert_eq!(grid, before);
    assert_eq!(grid.spans(), spans.as_slice());
}

#[test]
fn empty_erase_is_noop_everywhere() {
    let mut grid = Vec2d::new();
    grid.push_row([1, 2, 3]);
    for first in 0..=3 {
        let at = grid.row_mut(0).unwrap().erase(first..first).unwrap();
        assert_eq!(at, first);
        assert_eq!(&grid[0], &[1, 2, 3]);
    }
}

#[test]
fn erase_keeps_freed_capacity_for_the_row() {
    let mut grid = Vec2d::new();
    grid.push_row([1, 2, 3, 4]);
    grid.push_row([9]);
    grid.row_mut(0).unwrap().erase(0..2).unwrap();
    let store_len = grid.store().len();

    grid.row_mut(0).unwrap().extend_from_slice(&[5, 6]);
    assert_eq!(&grid[0], &[3, 4, 5, 6]);
    assert_eq!(grid.store().len(), store_len);
}

#[test]
fn tail_resident_growth_does_not_leave_slack() {
    let mut grid = Vec2d::new();
    grid.push_row([1]);
    grid.push_row([2]);
    for v in 3..10 {
        grid.row_mut(1).unwrap().push(v);
    }
    assert_eq!(grid.layout_stats().slack(), 0);
    assert_eq!(grid.spans()[1].begin(), 1);
}

#[test]
fn interior_growth_leaves_slack_until_compact() {
    let mut grid = Vec2d::new();
    grid.push_row([1, 2]);
    grid.push_row([3]);
    grid.row_mut(0).unwrap().insert_many(1, [7, 8]).unwrap();
    assert_eq!(&grid[0], &[1, 7, 8, 2]);
    assert_eq!(grid.layout_stats().slack(), 2);

    grid.compact();
    assert_eq!(grid.layout_stats().slack(), 0);
    assert_eq!(grid.store().as_slice(), &[1, 7, 8, 2, 3]);
}

#[test]
fn resize_rows_with_then_grow_each_row_independently() {
    let mut grid: Vec2d<u8> = Vec2d::with_rows(1).unwrap();
    grid.resize_rows_with(3, &[1, 1]);
    grid.row_mut(1).unwrap().push(2);
    grid.row_mut(2).unwrap().resize(4, 3);
    grid.row_mut(0).unwrap().push(0);

    let rows: Vec<Vec<u8>> = grid.rows().map(|r| r.to_vec()).collect();
    assert_eq!(rows, vec![vec![0], vec![1, 1, 2], vec![1, 1, 3, 3]]);
    assert_layout(&grid);
}

#[test]
fn constructors_validate_dimensions() {
    assert!(matches!(
        Vec2d::<f64>::with_rows(0),
        Err(Vec2dError::InvalidArgument { rows: 0, .. })
    ));
    assert!(matches!(
        Vec2d::<f64>::with_shape(2, 0),
        Err(Vec2dError::InvalidArgument { cols: Some(0), .. })
    ));
    let grid = Vec2d::<f64>::with_shape(3, 2).unwrap();
    assert_eq!(grid.len(), 3);
    assert!(grid.rows().all(|r| r.as_slice() == &[0.0, 0.0]));
}

#[test]
fn clear_resets_store_and_rows() {
    let mut grid: Vec2d<i32> = [vec![1, 2], vec![3]].into_iter().collect();
    grid.clear();
    assert!(grid.is_empty());
    assert!(grid.store().is_empty());
    grid.push_row([4]);
    assert_eq!(grid.spans()[0].begin(), 0);
}

#[test]
fn row_list_front_back_and_iteration() {
    let grid: Vec2d<i32> = [vec![1], vec![2, 3], vec![4]].into_iter().collect();
    assert_eq!(grid.first_row().unwrap().as_slice(), &[1]);
    assert_eq!(grid.last_row().unwrap().as_slice(), &[4]);
    let lens: Vec<usize> = grid.rows().rev().map(|r| r.len()).collect();
    assert_eq!(lens, vec![1, 2, 1]);
    let total: i32 = grid.rows().flatten().sum();
    assert_eq!(total, 10);
}
