//! Walk through row and row-list operations, printing the physical layout.
//!
//! Demonstrates: building rows, growing interior and tail rows, inserting
//! and erasing inside rows, copying rows between containers, and compacting
//! away the slack all of that leaves behind.

use vec2d::{Vec2d, Vec2dError};

fn main() -> Result<(), Vec2dError> {
    println!("=== vec2d layout walkthrough ===\n");

    // --- Container built row by row ---
    let mut v0: Vec2d<f64> = Vec2d::new();
    for base in 21..=25 {
        let b = f64::from(base);
        v0.push_row([b, b, b]);
    }
    for r in 0..3 {
        v0.at_mut(r)?.push(-1.0);
    }
    v0.at_mut(3)?.resize_default(6);
    println!("{}\n", v0.dump());

    // --- Container with pre-sized empty rows ---
    let mut v: Vec2d<f64> = Vec2d::with_rows(5)?;
    v.at_mut(0)?.push(1.0);
    v.push_row([7.0, 8.0, 9.0]);
    v.at_mut(2)?.push(4.0);
    v.push_row(vec![10.0, 11.0, 12.0]);
    v.at_mut(2)?.push(5.0);
    v.at_mut(2)?.push(6.0);
    v.at_mut(0)?.push(2.0);
    v.push_row([13.0, 14.0]);
    v.at_mut(0)?.push(3.0);

    v.at_mut(0)?.reserve(4);
    v.at_mut(0)?.push(4.0);
    v.at_mut(2)?.reserve(4);

    v.at_mut(2)?.insert(2, 99.0)?;
    v.at_mut(2)?.insert(2, 98.0)?;
    v.at_mut(0)?.insert(2, 99.0)?;

    v.at_mut(2)?.reserve(8);
    v.at_mut(2)?.insert_many(2, [95.0, 96.0, 97.0])?;

    let end = v.at(1)?.len();
    v.at_mut(1)?.insert(end, 93.0)?;
    let end = v.at(0)?.len();
    v.at_mut(0)?.insert_many(end, [97.0, 98.0])?;
    let end = v.at(0)?.len();
    v.at_mut(0)?.insert(end, 99.0)?;

    v.at_mut(0)?.remove(2)?;
    v.at_mut(2)?.erase(0..2)?;
    v.at_mut(6)?.clear();

    // --- Row-list operations, copying rows out of v0 ---
    v.insert_rows_from(1, &v0, 1..2)?;
    v.insert_rows_from(2, &v0, 2..4)?;
    v.pop_row();

    let template = v0.at(1)?.to_vec();
    v.resize_rows_with(12, &template);

    v.erase_rows(1..4)?;
    let last = v.len() - 5;
    v.erase_row(last)?;

    println!("before compact: {}", v.layout_stats());
    v.compact();
    println!("after compact:  {}\n", v.layout_stats());
    println!("{}", v.dump());

    Ok(())
}
