//! Terminal Game of Life runner (default binary).
//!
//! Seed the field by toggling cells, then `start` to watch it evolve.
//! Grid size and rate come from `LIFE_ROWS`, `LIFE_COLS` and `LIFE_FPS`;
//! logging goes to stderr and is controlled by `RUST_LOG`.

use std::io;

use anyhow::Result;

use tui_life::engine::{EditOutcome, Session, ThreadPacer};
use tui_life::term::TerminalRenderer;
use tui_life::types::LifeConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = LifeConfig::from_env();
    let mut session = Session::new(
        config,
        TerminalRenderer::new(),
        io::stdin().lock(),
        ThreadPacer,
    );

    match session.edit()? {
        EditOutcome::Quit => Ok(()),
        EditOutcome::Start => session.run(),
    }
}
