//! Integration test: elements are dropped synchronously by every operation
//! that removes them, and relocation never duplicates or leaks them.

use vec2d::Vec2d;
use vec2d_test_utils::tracked::{LiveCounter, Tracked};

fn tracked_grid(counter: &LiveCounter, rows: &[&[i64]]) -> Vec2d<Tracked> {
    rows.iter()
        .map(|r| r.iter().map(|&v| counter.make(v)).collect::<Vec<_>>())
        .collect()
}

fn values(grid: &Vec2d<Tracked>, row: usize) -> Vec<i64> {
    grid[row].iter().map(Tracked::value).collect()
}

#[test]
fn erase_drops_erased_elements() {
    let counter = LiveCounter::new();
    let mut grid = tracked_grid(&counter, &[&[1, 2, 3, 4]]);
    grid.row_mut(0).unwrap().erase(1..3).unwrap();
    assert_eq!(counter.live(), 2);
    assert_eq!(values(&grid, 0), vec![1, 4]);
}

#[test]
fn clear_and_pop_release() {
    let counter = LiveCounter::new();
    let mut grid = tracked_grid(&counter, &[&[1, 2], &[3, 4, 5]]);
    grid.row_mut(1).unwrap().clear();
    assert_eq!(counter.live(), 2);

    let popped = grid.row_mut(0).unwrap().pop().unwrap();
    assert_eq!(popped.value(), 2);
    assert_eq!(counter.live(), 2);
    drop(popped);
    assert_eq!(counter.live(), 1);
}

#[test]
fn truncating_resize_releases() {
    let counter = LiveCounter::new();
    let mut grid = tracked_grid(&counter, &[&[1, 2, 3]]);
    grid.row_mut(0).unwrap().resize_default(1);
    assert_eq!(counter.live(), 1);
    assert_eq!(grid.row(0).unwrap().capacity(), 3);
}

#[test]
fn relocation_moves_without_cloning() {
    let counter = LiveCounter::new();
    let mut grid = tracked_grid(&counter, &[&[1, 2], &[3]]);
    grid.row_mut(0).unwrap().push(counter.make(9));
    grid.row_mut(0).unwrap().reserve(10);
    grid.row_mut(0)
        .unwrap()
        .insert_many(0, [counter.make(7), counter.make(8)])
        .unwrap();
    assert_eq!(counter.live(), 6);
    assert_eq!(values(&grid, 0), vec![7, 8, 1, 2, 9]);
    assert_eq!(
        grid.store().as_slice().iter().filter(|t| t.is_tracked()).count(),
        6
    );
}

#[test]
fn row_list_removal_releases() {
    let counter = LiveCounter::new();
    let mut grid = tracked_grid(&counter, &[&[1], &[2, 3], &[4, 5, 6], &[7]]);
    grid.erase_rows(1..3).unwrap();
    assert_eq!(counter.live(), 2);
    grid.resize_rows(1);
    assert_eq!(counter.live(), 1);
    assert_eq!(grid.pop_row().map(|r| r.len()), Some(1));
    assert_eq!(counter.live(), 0);
}

#[test]
fn compact_and_clear_release() {
    let counter = LiveCounter::new();
    let mut grid = tracked_grid(&counter, &[&[1, 2], &[3]]);
    grid.insert_row_copy(0, 0).unwrap();
    assert_eq!(counter.live(), 5);
    grid.row_mut(1).unwrap().push(counter.make(4));
    grid.compact();
    assert_eq!(counter.live(), 6);
    assert_eq!(grid.store().len(), 6);
    grid.clear();
    assert_eq!(counter.live(), 0);
}

#[test]
fn dropping_container_releases_everything() {
    let counter = LiveCounter::new();
    let grid = tracked_grid(&counter, &[&[1, 2], &[3]]);
    let copy = grid.clone();
    assert_eq!(counter.live(), 6);
    drop(grid);
    assert_eq!(counter.live(), 3);
    drop(copy);
    assert_eq!(counter.live(), 0);
}
