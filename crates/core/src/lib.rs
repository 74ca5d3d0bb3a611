//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the cell field and the Life rule. It has **zero
//! dependencies** on UI or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed grid always produces the same history
//! - **Testable**: small grids can be built and stepped directly in tests
//! - **Portable**: the renderer and the session loop are layered on top
//!
//! # Module Structure
//!
//! - [`grid`]: padded boolean field with 1-based logical coordinates
//! - [`rules`]: neighbour counting and generation stepping
//!
//! # Example
//!
//! ```
//! use tui_life_core::{step, Grid};
//!
//! // Horizontal blinker in the middle of a 5x5 field
//! let grid = Grid::with_live_cells(5, 5, &[(3, 2), (3, 3), (3, 4)]);
//!
//! let next = step(&grid);
//! assert!(next.is_alive(2, 3));
//! assert!(next.is_alive(4, 3));
//! assert!(!next.is_alive(3, 2));
//!
//! // Period 2
//! assert_eq!(step(&next), grid);
//! ```

pub mod grid;
pub mod rules;

pub use tui_life_types as types;

// Re-export commonly used items for convenience
pub use grid::Grid;
pub use rules::{neighbor_count, next_state, step};
