//! Character-cell output device abstraction
//!
//! Widgets never touch the terminal directly; they write through an
//! [`OutputDevice`]. [`BufferDevice`] adapts a ratatui [`Buffer`] (a frame
//! buffer or a test buffer) to that contract.

use ratatui::{buffer::Buffer, style::{Color, Style}};
use std::ops::{Deref, DerefMut};
use unicode_width::UnicodeWidthStr;

use super::error::{HudError, HudResult};

/// Cursor-addressed text output with a mutable color pair
pub trait OutputDevice {
    fn set_cursor_position(&mut self, x: u16, y: u16);

    /// Write at the cursor using the current colors, advancing the cursor
    fn write(&mut self, text: &str) -> HudResult<()>;

    fn write_at(&mut self, x: u16, y: u16, text: &str) -> HudResult<()> {
        self.set_cursor_position(x, y);
        self.write(text)
    }

    /// Write with a temporary foreground; the previous one is always restored
    fn write_colored_at(&mut self, x: u16, y: u16, text: &str, color: Color) -> HudResult<()> {
        let mut guard = ColorGuard::new(self, color);
        guard.write_at(x, y, text)
    }

    /// Whether Unicode block and symbol glyphs can be displayed
    fn supports_extended_glyphs(&self) -> bool;

    fn foreground(&self) -> Color;
    fn set_foreground(&mut self, color: Color);
    fn background(&self) -> Color;
    fn set_background(&mut self, color: Color);
}

/// Scoped foreground change, restored when the guard drops
///
/// Dereferences to the device so writes go through the guard while it lives.
pub struct ColorGuard<'a, D: OutputDevice + ?Sized> {
    device: &'a mut D,
    previous: Color,
}

impl<'a, D: OutputDevice + ?Sized> ColorGuard<'a, D> {
    pub fn new(device: &'a mut D, color: Color) -> Self {
        let previous = device.foreground();
        device.set_foreground(color);
        Self { device, previous }
    }
}

impl<D: OutputDevice + ?Sized> Deref for ColorGuard<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.device
    }
}

impl<D: OutputDevice + ?Sized> DerefMut for ColorGuard<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        self.device
    }
}

impl<D: OutputDevice + ?Sized> Drop for ColorGuard<'_, D> {
    fn drop(&mut self) {
        self.device.set_foreground(self.previous);
    }
}

/// [`OutputDevice`] backed by a ratatui buffer
pub struct BufferDevice<'a> {
    buf: &'a mut Buffer,
    cursor: (u16, u16),
    fg: Color,
    bg: Color,
    extended_glyphs: bool,
}

impl<'a> BufferDevice<'a> {
    pub fn new(buf: &'a mut Buffer, extended_glyphs: bool) -> Self {
        let origin = (buf.area.x, buf.area.y);
        Self {
            buf,
            cursor: origin,
            fg: Color::Reset,
            bg: Color::Reset,
            extended_glyphs,
        }
    }

    pub fn set_extended_glyphs(&mut self, extended: bool) {
        self.extended_glyphs = extended;
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }
}

impl OutputDevice for BufferDevice<'_> {
    fn set_cursor_position(&mut self, x: u16, y: u16) {
        self.cursor = (x, y);
    }

    fn write(&mut self, text: &str) -> HudResult<()> {
        let (x, y) = self.cursor;
        let area = self.buf.area;
        if x < area.left() || x >= area.right() || y < area.top() || y >= area.bottom() {
            return Err(HudError::OutOfBounds { x, y });
        }

        let max_width = usize::from(area.right() - x);
        let style = Style::default().fg(self.fg).bg(self.bg);
        let (end_x, _) = self.buf.set_stringn(x, y, text, max_width, style);
        tracing::trace!("DEVICE: wrote {} cols at ({}, {})", text.width().min(max_width), x, y);
        self.cursor = (end_x, y);
        Ok(())
    }

    fn supports_extended_glyphs(&self) -> bool {
        self.extended_glyphs
    }

    fn foreground(&self) -> Color {
        self.fg
    }

    fn set_foreground(&mut self, color: Color) {
        self.fg = color;
    }

    fn background(&self) -> Color {
        self.bg
    }

    fn set_background(&mut self, color: Color) {
        self.bg = color;
    }
}
