//! Compaction: rebuild the backing store without slack.

use crate::grid::Vec2d;
use crate::span::RowSpan;

impl<T: Default> Vec2d<T> {
    /// Rebuild the backing store so it holds exactly the live elements of
    /// every row, packed in row order.
    ///
    /// Row contents and order are unchanged. Afterwards each row's capacity
    /// equals its length and the store length equals
    /// [`element_count`](Vec2d::element_count). Any previously read span
    /// offsets are stale.
    pub fn compact(&mut self) {
        let before = self.store.len();
        let mut packed = Vec::with_capacity(self.element_count());
        for span in &mut self.rows {
            let begin = packed.len();
            packed.extend(span.live().map(|offset| self.store.take(offset)));
            *span = RowSpan::new(begin, span.size);
        }
        let after = packed.len();
        drop(self.store.replace(packed));
        tracing::debug!(
            target: "vec2d::compact",
            rows = self.rows.len(),
            before,
            after,
            reclaimed = before - after,
            "compacted backing store"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_after_erase_reclaims_slack() {
        let mut grid = Vec2d::new();
        grid.push_row([1, 2, 3]);
        grid.push_row([4, 5]);
        grid.erase_row(0).unwrap();
        grid.compact();
        assert_eq!(grid.len(), 1);
        assert_eq!(&grid[0], &[4, 5]);
        assert_eq!(grid.row(0).unwrap().capacity(), 2);
        assert_eq!(grid.store().len(), 2);
    }

    #[test]
    fn compact_packs_in_row_order() {
        let mut grid = Vec2d::new();
        grid.push_row([1]);
        grid.push_row([2, 3]);
        grid.insert_row(0, [9]).unwrap();
        grid.row_mut(1).unwrap().push(10);
        grid.compact();
        assert_eq!(grid.store().as_slice(), &[9, 1, 10, 2, 3]);
        let begins: Vec<_> = grid.spans().iter().map(|s| s.begin()).collect();
        assert_eq!(begins, vec![0, 1, 3]);
    }

    #[test]
    fn compact_places_empty_rows_inside_new_store() {
        let mut grid = Vec2d::new();
        grid.push_row([1, 2]);
        grid.push_row(Vec::new());
        grid.push_row([3]);
        grid.row_mut(0).unwrap().reserve(8);
        grid.compact();
        let spans = grid.spans();
        assert_eq!(spans[1].begin(), 2);
        assert_eq!(spans[1].capacity(), 0);
        assert!(spans.iter().all(|s| s.begin() + s.capacity() <= grid.store().len()));
    }

    #[test]
    fn compact_empty_grid() {
        let mut grid: Vec2d<i32> = Vec2d::new();
        grid.compact();
        assert!(grid.is_empty());
        assert!(grid.store().is_empty());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn compact_preserves_rows_and_fits_capacity(
                rows in proptest::collection::vec(
                    proptest::collection::vec(0i32..100, 0..6),
                    0..8,
                ),
                growth in proptest::collection::vec((0usize..8, 0usize..12), 0..8),
            ) {
                let mut grid: Vec2d<i32> = rows.iter().cloned().collect();
                if !rows.is_empty() {
                    for &(row, cap) in &growth {
                        grid.row_mut(row % rows.len()).unwrap().reserve(cap);
                    }
                }
                let before = grid.clone();
                grid.compact();
                prop_assert_eq!(&grid, &before);
                prop_assert_eq!(grid.store().len(), grid.element_count());
                for span in grid.spans() {
                    prop_assert_eq!(span.capacity(), span.len());
                }
            }
        }
    }
}
