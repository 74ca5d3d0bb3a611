//! Rule engine tests

use tui_life::core::{neighbor_count, step, Grid};

/// Deterministic pseudo-random soup.
fn soup(rows: usize, cols: usize, seed: u32) -> Grid {
    let mut state = seed.max(1);
    let mut grid = Grid::new(rows, cols);
    for r in 1..=rows {
        for c in 1..=cols {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            if state >> 31 == 1 {
                grid.toggle(r, c);
            }
        }
    }
    grid
}

fn live(grid: &Grid) -> Vec<(usize, usize)> {
    grid.live_cells().collect()
}

#[test]
fn test_blinker_oscillates_with_period_two() {
    let horizontal = Grid::with_live_cells(5, 5, &[(2, 2), (2, 3), (2, 4)]);

    let vertical = step(&horizontal);
    assert_eq!(live(&vertical), vec![(1, 3), (2, 3), (3, 3)]);

    let back = step(&vertical);
    assert_eq!(back, horizontal);
}

#[test]
fn test_empty_grid_stays_empty() {
    for &(rows, cols) in &[(1, 1), (3, 7), (31, 40)] {
        let mut grid = Grid::new(rows, cols);
        for _ in 0..5 {
            grid = step(&grid);
            assert_eq!(grid.population(), 0);
        }
    }
}

#[test]
fn test_lonely_cell_dies() {
    let grid = Grid::with_live_cells(5, 5, &[(3, 3)]);
    let next = step(&grid);
    assert_eq!(next.population(), 0);
}

#[test]
fn test_block_is_still_life() {
    let block = Grid::with_live_cells(4, 4, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
    assert_eq!(step(&block), block);
}

#[test]
fn test_block_in_corner_is_still_life() {
    // The border must read as dead, not wrap around.
    let block = Grid::with_live_cells(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
    assert_eq!(step(&block), block);
}

#[test]
fn test_survival_and_death_by_neighbour_count() {
    // Centre cell (3, 3) alive, with n neighbours filled in a fixed order.
    let ring = [(2, 2), (2, 3), (2, 4), (3, 2), (3, 4), (4, 2), (4, 3), (4, 4)];
    for n in 0..=8 {
        let mut cells = vec![(3, 3)];
        cells.extend_from_slice(&ring[..n]);
        let grid = Grid::with_live_cells(5, 5, &cells);
        assert_eq!(neighbor_count(&grid, 3, 3) as usize, n);

        let next = step(&grid);
        assert_eq!(
            next.is_alive(3, 3),
            n == 2 || n == 3,
            "live cell with {} neighbours",
            n
        );
    }
}

#[test]
fn test_birth_only_with_exactly_three() {
    let ring = [(2, 2), (2, 3), (2, 4), (3, 2), (3, 4), (4, 2), (4, 3), (4, 4)];
    for n in 0..=8 {
        let grid = Grid::with_live_cells(5, 5, &ring[..n]);
        let next = step(&grid);
        assert_eq!(next.is_alive(3, 3), n == 3, "dead cell with {} neighbours", n);
    }
}

#[test]
fn test_neighbor_count_of_border_is_zero() {
    let full = Grid::with_live_cells(2, 2, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
    assert_eq!(neighbor_count(&full, 0, 0), 0);
    assert_eq!(neighbor_count(&full, 0, 1), 0);
    assert_eq!(neighbor_count(&full, 3, 3), 0);
    assert_eq!(neighbor_count(&full, 1, 1), 3);
}

#[test]
fn test_step_preserves_dimensions_and_border() {
    for seed in 1..20 {
        let grid = soup(9, 13, seed);
        assert!(grid.border_is_dead());
        let next = step(&grid);
        assert_eq!(next.dimensions(), grid.dimensions());
        assert!(next.border_is_dead());
    }
}

#[test]
fn test_step_does_not_mutate_input() {
    let grid = soup(10, 10, 7);
    let copy = grid.clone();
    let _ = step(&grid);
    assert_eq!(grid, copy);
}

#[test]
fn test_glider_translates_after_four_generations() {
    let glider = Grid::with_live_cells(8, 8, &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
    let mut grid = glider.clone();
    for _ in 0..4 {
        grid = step(&grid);
    }
    let shifted: Vec<_> = live(&glider).iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(live(&grid), shifted);
}
