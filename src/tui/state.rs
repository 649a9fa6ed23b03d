/// Widget state owned by stateful HUD widgets
///
/// State is plain data; transitions live in `reducers` (popup) or in small
/// consuming methods (personal best) so they can be tested without a device.
use ratatui::layout::Rect;
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

use crate::layout_constants::{POPUP_MAX_DISPLAY, POPUP_MIN_WIDTH, POPUP_WIDTH_PADDING};

/// Completion popup state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopupState {
    pub suggestions: Vec<String>,
    /// Always `< suggestions.len()` while visible
    pub selected_index: usize,
    pub visible: bool,
    pub anchor: (u16, u16),
    /// Cells covered by the last draw; blanked before the next draw or on hide
    pub drawn: Option<Rect>,
}

impl PopupState {
    /// `max(20, longest suggestion + 4)`
    pub fn display_width(&self) -> usize {
        let longest = self.suggestions.iter().map(|s| s.width()).max().unwrap_or(0);
        (longest + POPUP_WIDTH_PADDING).max(POPUP_MIN_WIDTH)
    }

    /// Indices of the suggestions currently on screen
    ///
    /// At most 10 entries, centered on the selection and never running past
    /// either end of the list.
    pub fn window(&self) -> Range<usize> {
        let count = self.suggestions.len();
        let shown = count.min(POPUP_MAX_DISPLAY);
        let start = self
            .selected_index
            .saturating_sub(POPUP_MAX_DISPLAY / 2)
            .min(count - shown);
        start..start + shown
    }

    /// Screen rectangle the visible window occupies
    pub fn window_rect(&self) -> Rect {
        let (x, y) = self.anchor;
        Rect {
            x,
            y,
            width: u16::try_from(self.display_width()).unwrap_or(u16::MAX),
            height: self.window().len() as u16,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.suggestions.get(self.selected_index).map(String::as_str)
    }
}

/// One-shot "new record" flag of the personal-best highlight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersonalBestState {
    pub new_record: bool,
}

impl PersonalBestState {
    /// Raise the flag when `current` beats `previous`; ties and drops leave it as is
    pub fn compared(self, current: i64, previous: i64) -> Self {
        Self {
            new_record: self.new_record || current > previous,
        }
    }

    pub fn with_flag(self, new_record: bool) -> Self {
        Self { new_record }
    }

    /// Take the flag for a draw, returning it and the cleared state
    pub fn consume(self) -> (bool, Self) {
        (self.new_record, Self { new_record: false })
    }
}
