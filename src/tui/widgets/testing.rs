/// Testing utilities for widget rendering
///
/// This module provides helper functions and a recording device for testing
/// widgets in isolation.

use ratatui::style::Color;
use std::sync::Arc;

use crate::config::{BarConfig, DisplayConfig, ThresholdProvider};
use crate::tui::device::OutputDevice;
use crate::tui::error::{HudError, HudResult};

/// Create a test DisplayConfig with unicode glyphs
pub fn test_config() -> DisplayConfig {
    DisplayConfig {
        use_unicode: true,
        selection_fg: Color::Black,
        selection_bg: Color::Rgb(255, 200, 0), // Gold
        record_fg: Color::Yellow,
    }
}

/// Create a test DisplayConfig with ASCII glyphs
pub fn test_config_ascii() -> DisplayConfig {
    DisplayConfig {
        use_unicode: false,
        ..test_config()
    }
}

/// Default threshold provider shared by widgets under test
pub fn test_bars() -> Arc<dyn ThresholdProvider> {
    Arc::new(BarConfig::default())
}

/// One recorded write
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedWrite {
    pub x: u16,
    pub y: u16,
    pub text: String,
    pub fg: Color,
}

/// Output device that records every write instead of drawing
#[derive(Debug)]
pub struct RecordingDevice {
    pub writes: Vec<RecordedWrite>,
    pub extended_glyphs: bool,
    /// When set, every write fails after the cursor has moved
    pub fail_writes: bool,
    cursor: (u16, u16),
    fg: Color,
    bg: Color,
}

impl RecordingDevice {
    pub fn new(extended_glyphs: bool) -> Self {
        Self {
            writes: Vec::new(),
            extended_glyphs,
            fail_writes: false,
            cursor: (0, 0),
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::new(true)
        }
    }

    /// Texts written at row `y`, in write order
    pub fn texts_at_row(&self, y: u16) -> Vec<&str> {
        self.writes
            .iter()
            .filter(|w| w.y == y)
            .map(|w| w.text.as_str())
            .collect()
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }
}

impl OutputDevice for RecordingDevice {
    fn set_cursor_position(&mut self, x: u16, y: u16) {
        self.cursor = (x, y);
    }

    fn write(&mut self, text: &str) -> HudResult<()> {
        if self.fail_writes {
            return Err(HudError::Io(std::io::Error::other("simulated write failure")));
        }
        let (x, y) = self.cursor;
        self.writes.push(RecordedWrite {
            x,
            y,
            text: text.to_string(),
            fg: self.fg,
        });
        self.cursor = (x + text.chars().count() as u16, y);
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
