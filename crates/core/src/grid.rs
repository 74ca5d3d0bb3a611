//! Grid module - the padded cell field
//!
//! The grid stores `rows x cols` logical cells surrounded by a one-cell-wide
//! border of permanently dead cells. Storage is a flat row-major vector of
//! `(rows + 2) * (cols + 2)` booleans.
//!
//! Coordinates: `(row, col)`, 1-based. Logical cells live in
//! `1..=rows x 1..=cols`; index `0` and `rows + 1` / `cols + 1` are the border.

use std::fmt::Write as _;

use tui_life_types::{MAX_COLS, MAX_ROWS};

/// A Game of Life field with a dead border.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * stride + col), border included
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid with `rows x cols` logical cells.
    ///
    /// Rows are clamped to `1..=MAX_ROWS` and columns to `1..=MAX_COLS`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.clamp(1, MAX_ROWS);
        let cols = cols.clamp(1, MAX_COLS);
        Self {
            rows,
            cols,
            cells: vec![false; (rows + 2) * (cols + 2)],
        }
    }

    /// Create a grid with the given logical cells alive.
    ///
    /// Coordinates outside the logical field are ignored.
    pub fn with_live_cells(rows: usize, cols: usize, live: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &(r, c) in live {
            if grid.in_bounds(r, c) && !grid.is_alive(r, c) {
                grid.toggle(r, c);
            }
        }
        grid
    }

    /// Get `(rows, cols)` of the logical field.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Stored row width, border included.
    #[inline(always)]
    fn stride(&self) -> usize {
        self.cols + 2
    }

    /// Flat index of a padded coordinate (border included).
    #[inline(always)]
    fn index(&self, r: usize, c: usize) -> Option<usize> {
        if r > self.rows + 1 || c > self.cols + 1 {
            return None;
        }
        Some(r * self.stride() + c)
    }

    /// Check whether `(r, c)` addresses a logical (non-border) cell.
    pub fn in_bounds(&self, r: usize, c: usize) -> bool {
        (1..=self.rows).contains(&r) && (1..=self.cols).contains(&c)
    }

    /// Read a cell. Border and out-of-range coordinates read as dead.
    pub fn is_alive(&self, r: usize, c: usize) -> bool {
        if !self.in_bounds(r, c) {
            return false;
        }
        self.cell(r, c)
    }

    /// Read a padded-coordinate cell without the logical bounds check.
    ///
    /// Anything beyond the stored border reads as dead.
    #[inline(always)]
    pub(crate) fn cell(&self, r: usize, c: usize) -> bool {
        self.index(r, c).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Write a logical cell. Border writes are dropped.
    pub(crate) fn set(&mut self, r: usize, c: usize, alive: bool) {
        if !self.in_bounds(r, c) {
            return;
        }
        if let Some(i) = self.index(r, c) {
            self.cells[i] = alive;
        }
    }

    /// Flip a logical cell.
    ///
    /// Returns false (and leaves the grid untouched) for border or
    /// out-of-range coordinates.
    pub fn toggle(&mut self, r: usize, c: usize) -> bool {
        if !self.in_bounds(r, c) {
            return false;
        }
        let alive = self.cell(r, c);
        self.set(r, c, !alive);
        true
    }

    /// Number of live logical cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Check that every border cell is dead.
    pub fn border_is_dead(&self) -> bool {
        let last_r = self.rows + 1;
        let last_c = self.cols + 1;
        (0..=last_c).all(|c| !self.cell(0, c) && !self.cell(last_r, c))
            && (0..=last_r).all(|r| !self.cell(r, 0) && !self.cell(r, last_c))
    }

    /// Iterate live logical cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..=self.rows).flat_map(move |r| {
            (1..=self.cols).filter_map(move |c| self.cell(r, c).then_some((r, c)))
        })
    }

    /// Dump the whole padded grid as rows of ` 1` / ` 0` tokens.
    pub fn debug_dump(&self) -> String {
        let mut out = String::with_capacity((self.rows + 2) * (self.stride() * 2 + 1));
        for r in 0..self.rows + 2 {
            for c in 0..self.stride() {
                let _ = write!(out, " {}", u8::from(self.cell(r, c)));
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(tui_life_types::DEFAULT_ROWS, tui_life_types::DEFAULT_COLS)
    }
}
