//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full redraw: clear the screen, home the cursor, then
//! print each row. The editing phase reads cooked-mode lines from stdin, so
//! the renderer never enters raw mode or the alternate screen.

use std::io::{self, Write};

use anyhow::Result;
use log::warn;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal,
    tty::IsTty,
    QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// The output capability the session loop draws through.
pub trait Console {
    /// Clear the display and draw a full frame.
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;

    /// Print `text` without a trailing newline and flush.
    fn prompt(&mut self, text: &str) -> Result<()>;
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    styled: bool,
}

impl TerminalRenderer {
    /// Render to stdout, with styles only when stdout is a terminal.
    pub fn new() -> Self {
        let stdout = io::stdout();
        let styled = stdout.is_tty();
        Self::with_writer(stdout).with_styles(styled)
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(16 * 1024),
            styled: true,
        }
    }

    pub fn with_styles(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Best-effort screen clear. Failures are logged, never returned.
    fn clear_screen(&mut self) {
        self.buf.clear();
        let res = encode_clear_into(&mut self.buf).and_then(|_| self.flush_buf());
        if let Err(e) = res {
            warn!("failed to clear screen: {e:#}");
        }
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Console for TerminalRenderer<W> {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.clear_screen();
        self.buf.clear();
        encode_frame_into(fb, self.styled, &mut self.buf)?;
        self.flush_buf()
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }
}

/// Encode the clear-and-home sequence into `out`.
pub fn encode_clear_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    Ok(())
}

/// Encode a full frame into `out`, one line per framebuffer row.
///
/// Trailing blank cells of each row are skipped. With `styled`, style
/// changes are emitted where the style differs from the previous cell;
/// without it the output is plain text.
pub fn encode_frame_into(fb: &FrameBuffer, styled: bool, out: &mut Vec<u8>) -> Result<()> {
    for y in 0..fb.height() {
        let mut current_style = CellStyle::PLAIN;
        for cell in fb.row_trimmed(y) {
            if styled && cell.style != current_style {
                apply_style_into(out, cell.style)?;
                current_style = cell.style;
            }
            out.queue(Print(cell.ch))?;
        }
        if current_style != CellStyle::PLAIN {
            reset_style_into(out)?;
        }
        out.queue(Print('\n'))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    reset_style_into(out)?;
    if let Some(fg) = style.fg {
        out.queue(SetForegroundColor(rgb_to_color(fg)))?;
    }
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn reset_style_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
