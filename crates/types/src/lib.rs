//! Core types module - shared constants and configuration
//!
//! This module defines the parameters and small enums used throughout the
//! application. Everything here is plain data with no external dependencies,
//! so it can be used by the rule engine, the renderer and the session loop
//! alike.
//!
//! # Grid Dimensions
//!
//! The playing field defaults to 31 rows by 40 columns. The stored grid is
//! padded with one permanently dead row/column on every side, so a 31x40
//! field occupies 33x42 cells.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 2 | Generations per second in the running phase |
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use tui_life_types::{LifeConfig, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let config = LifeConfig::default();
//! assert_eq!(config.rows, DEFAULT_ROWS);
//! assert_eq!(config.cols, DEFAULT_COLS);
//! assert_eq!(config.frame_interval(), Duration::from_millis(500));
//! ```

use std::time::Duration;

/// Default number of logical rows (31)
pub const DEFAULT_ROWS: usize = 31;

/// Default number of logical columns (40)
pub const DEFAULT_COLS: usize = 40;

/// Largest accepted row count: the editing frame (`rows + 3` lines) must fit in `u16`.
pub const MAX_ROWS: usize = u16::MAX as usize - 3;

/// Largest accepted column count: the editing frame (`3 + 3 * cols` columns) must fit in `u16`.
pub const MAX_COLS: usize = (u16::MAX as usize - 3) / 3;

/// Default simulation rate in generations per second (2)
pub const DEFAULT_FPS: u32 = 2;

/// Glyph used for both halves of a live cell.
pub const LIVE_GLYPH: char = '▇';

/// Text shown before each editing-phase read.
pub const EDIT_PROMPT: &str = "Toggle cells [row col] | 'start' | 'quit': ";

/// Status line shown after an unrecognised single-token command.
pub const INVALID_COMMAND: &str = "Invalid command";

/// Simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    pub fps: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            fps: DEFAULT_FPS,
        }
    }
}

impl LifeConfig {
    /// Rows are clamped to `1..=MAX_ROWS`, columns to `1..=MAX_COLS`, fps to at least 1.
    pub fn new(rows: usize, cols: usize, fps: u32) -> Self {
        Self {
            rows: rows.clamp(1, MAX_ROWS),
            cols: cols.clamp(1, MAX_COLS),
            fps: fps.max(1),
        }
    }

    /// Create from environment variables (`LIFE_ROWS`, `LIFE_COLS`, `LIFE_FPS`).
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let rows = env::var("LIFE_ROWS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_ROWS);

        let cols = env::var("LIFE_COLS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_COLS);

        let fps = env::var("LIFE_FPS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_FPS);

        Self::new(rows, cols, fps)
    }

    /// Time between generations in the running phase.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

/// Session phase.
///
/// `Editing` is the initial state; `Running` is entered by `start` and never
/// left. `quit` ends the process from `Editing` and has no phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Editing,
    Running,
}

impl Phase {
    pub fn is_running(self) -> bool {
        matches!(self, Phase::Running)
    }
}
