//! Terminal rendering module.
//!
//! A small rendering layer for the Life field. The field is painted into a
//! framebuffer by a pure view, then flushed to a [`Console`] backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing testable without a real terminal
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_clear_into, encode_frame_into, Console, TerminalRenderer};
pub use view::{LifeView, ViewMode};
