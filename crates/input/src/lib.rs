//! Editing-phase input module.
//!
//! This module is independent of any terminal library. It turns one line of
//! console text into a [`Command`], or into an [`InputError`] for input the
//! session treats as fatal.

pub mod command;
pub mod error;

pub use tui_life_types as types;

pub use command::{parse_command, tokenize, Command};
pub use error::InputError;
