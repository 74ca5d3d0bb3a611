//! LifeView: maps a `core::Grid` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Two layouts:
//!
//! - **Editing**: zero-based two-digit column headers across the top, a
//!   two-digit row header at the start of each row, every cell followed by a
//!   `│` separator, then a blank line and, when one is set, a status line.
//! - **Running**: the field inside a box border, no headers.

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, LIVE_GLYPH};

const VLINE: char = '│';
const HLINE: char = '─';

/// Which layout to paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Editing,
    Running,
}

impl From<Phase> for ViewMode {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Editing => ViewMode::Editing,
            Phase::Running => ViewMode::Running,
        }
    }
}

/// Terminal renderer for the Life field.
pub struct LifeView {
    /// Cell width in terminal columns.
    cell_w: u16,
    live: CellStyle,
    frame: CellStyle,
    label: CellStyle,
}

impl Default for LifeView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            live: CellStyle {
                fg: Some(Rgb::new(100, 220, 120)),
                bold: true,
                dim: false,
            },
            frame: CellStyle::PLAIN,
            label: CellStyle {
                dim: true,
                ..CellStyle::PLAIN
            },
        }
    }
}

impl LifeView {
    /// A view with no colors or attributes.
    pub fn plain() -> Self {
        Self {
            cell_w: 2,
            live: CellStyle::PLAIN,
            frame: CellStyle::PLAIN,
            label: CellStyle::PLAIN,
        }
    }

    /// Frame dimensions `(width, height)` for a grid in the given mode.
    ///
    /// The editing frame has a header line, the rows and a blank line, plus
    /// a status line when `has_status`. Sizes saturate at `u16::MAX`.
    pub fn frame_size(&self, grid: &Grid, mode: ViewMode, has_status: bool) -> (u16, u16) {
        let (rows, cols) = grid.dimensions();
        let rows = u16::try_from(rows).unwrap_or(u16::MAX);
        let cols = u16::try_from(cols).unwrap_or(u16::MAX);
        match mode {
            // "NN│" row header, then cell + separator per column.
            ViewMode::Editing => (
                cols.saturating_mul(self.cell_w + 1).saturating_add(3),
                rows.saturating_add(2 + u16::from(has_status)),
            ),
            ViewMode::Running => (
                cols.saturating_mul(self.cell_w).saturating_add(2),
                rows.saturating_add(2),
            ),
        }
    }

    /// Render into an existing framebuffer, resizing it to fit.
    ///
    /// `status` is only drawn in editing mode, on the line below the grid.
    pub fn render_into(
        &self,
        grid: &Grid,
        mode: ViewMode,
        status: Option<&str>,
        fb: &mut FrameBuffer,
    ) {
        let status = match mode {
            ViewMode::Editing => status,
            ViewMode::Running => None,
        };
        let (w, h) = self.frame_size(grid, mode, status.is_some());
        fb.resize(w, h);
        fb.clear();

        match mode {
            ViewMode::Editing => self.draw_editing(grid, status, fb),
            ViewMode::Running => self.draw_running(grid, fb),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid, mode: ViewMode, status: Option<&str>) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(grid, mode, status, &mut fb);
        fb
    }

    fn draw_editing(&self, grid: &Grid, status: Option<&str>, fb: &mut FrameBuffer) {
        let (rows, cols) = grid.dimensions();
        let pitch = self.cell_w + 1;

        for c in 0..cols {
            let x = 3 + c as u16 * pitch;
            fb.put_two_digits(x, 0, c, self.label);
            fb.put_char(x + self.cell_w, 0, VLINE, self.frame);
        }

        for r in 0..rows {
            let y = 1 + r as u16;
            fb.put_two_digits(0, y, r, self.label);
            fb.put_char(2, y, VLINE, self.frame);
            for c in 0..cols {
                let x = 3 + c as u16 * pitch;
                self.draw_cell(fb, x, y, grid.is_alive(r + 1, c + 1));
                fb.put_char(x + self.cell_w, y, VLINE, self.frame);
            }
        }

        if let Some(text) = status {
            fb.put_str(0, rows as u16 + 2, text, CellStyle::PLAIN);
        }
    }

    fn draw_running(&self, grid: &Grid, fb: &mut FrameBuffer) {
        let (rows, cols) = grid.dimensions();
        let (w, h) = (fb.width(), fb.height());
        self.draw_border(fb, w, h);

        for r in 0..rows {
            for c in 0..cols {
                let x = 1 + c as u16 * self.cell_w;
                let y = 1 + r as u16;
                self.draw_cell(fb, x, y, grid.is_alive(r + 1, c + 1));
            }
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, x: u16, y: u16, alive: bool) {
        if !alive {
            return;
        }
        for dx in 0..self.cell_w {
            fb.put_char(x + dx, y, LIVE_GLYPH, self.live);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(0, 0, '┌', self.frame);
        fb.put_char(w - 1, 0, '┐', self.frame);
        fb.put_char(0, h - 1, '└', self.frame);
        fb.put_char(w - 1, h - 1, '┘', self.frame);

        for dx in 1..w - 1 {
            fb.put_char(dx, 0, HLINE, self.frame);
            fb.put_char(dx, h - 1, HLINE, self.frame);
        }
        for dy in 1..h - 1 {
            fb.put_char(0, dy, VLINE, self.frame);
            fb.put_char(w - 1, dy, VLINE, self.frame);
        }
    }
}
