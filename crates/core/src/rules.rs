//! Rules module - the standard Life rule (B3/S23)
//!
//! - A live cell with fewer than two live neighbours dies (underpopulation)
//! - A live cell with two or three live neighbours survives
//! - A live cell with more than three live neighbours dies (overpopulation)
//! - A dead cell with exactly three live neighbours becomes alive (reproduction)
//!
//! [`step`] never mutates its input: every neighbour count in one generation
//! is read from the previous grid.

use crate::grid::Grid;

/// Offsets of the eight surrounding cells, as (row, col) deltas.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live cells around `(r, c)`.
///
/// Border and out-of-range subjects return 0. For logical subjects the
/// neighbours may be border cells, which always read as dead.
pub fn neighbor_count(grid: &Grid, r: usize, c: usize) -> u8 {
    if !grid.in_bounds(r, c) {
        return 0;
    }

    let mut n = 0u8;
    for &(dr, dc) in NEIGHBOURS.iter() {
        // Logical subjects are >= 1, so the padded neighbour never underflows.
        let nr = r.wrapping_add_signed(dr);
        let nc = c.wrapping_add_signed(dc);
        if grid.cell(nr, nc) {
            n += 1;
        }
    }
    n
}

/// Next state of a single cell.
#[inline(always)]
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    matches!((alive, neighbours), (true, 2) | (true, 3) | (false, 3))
}

/// Compute the next generation into a fresh grid of the same dimensions.
pub fn step(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let mut next = Grid::new(rows, cols);
    for r in 1..=rows {
        for c in 1..=cols {
            if next_state(grid.cell(r, c), neighbor_count(grid, r, c)) {
                next.set(r, c, true);
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_state_table() {
        for n in 0..=8u8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {}", n);
            assert_eq!(next_state(false, n), n == 3, "dead with {}", n);
        }
    }

    #[test]
    fn test_corner_counts_only_inner_neighbours() {
        let grid = Grid::with_live_cells(3, 3, &[(1, 2), (2, 1), (2, 2)]);
        assert_eq!(neighbor_count(&grid, 1, 1), 3);
        assert_eq!(neighbor_count(&grid, 3, 3), 1);
    }
}
