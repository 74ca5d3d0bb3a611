//! Session engine: ties the grid, the input parser and the renderer into
//! the editing phase and the running phase.
//!
//! The session is generic over its console, its line source and its pacer,
//! so the whole loop can be driven from tests with an in-memory console, a
//! byte-slice input and a pacer that does not sleep.

pub mod session;

pub use tui_life_core as core;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;

pub use session::{EditOutcome, Pacer, Session, ThreadPacer};
