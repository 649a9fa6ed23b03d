use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Box-drawing characters for panel borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─",
            vertical: "│",
            top_left: "╭",
            top_right: "╮",
            bottom_left: "╰",
            bottom_right: "╯",
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-",
            vertical: "|",
            top_left: "+",
            top_right: "+",
            bottom_left: "+",
            bottom_right: "+",
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Marker glyphs shared by the combat widgets
#[derive(Debug, Clone, PartialEq)]
pub struct HudGlyphs {
    pub turn_marker: &'static str,
    pub player: &'static str,
    pub enemy: &'static str,
    pub action_ready: &'static str,
    pub action_used: &'static str,
    pub bonus_action: &'static str,
    pub selector: &'static str,
    pub scroll_up: &'static str,
    pub scroll_down: &'static str,
    pub record: &'static str,
}

impl HudGlyphs {
    pub fn unicode() -> Self {
        Self {
            turn_marker: "►",
            player: "☺",
            enemy: "☠",
            action_ready: "●",
            action_used: "○",
            bonus_action: "◆",
            selector: "›",
            scroll_up: "▲",
            scroll_down: "▼",
            record: "★",
        }
    }

    pub fn ascii() -> Self {
        Self {
            turn_marker: ">",
            player: "@",
            enemy: "E",
            action_ready: "*",
            action_used: "o",
            bonus_action: "+",
            selector: ">",
            scroll_up: "^",
            scroll_down: "v",
            record: "*",
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Truncate `text` so its display width does not exceed `max_width`
///
/// Wide characters that would straddle the limit are dropped rather than split.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// Left padding that centers `text` inside `width` columns (0 if it does not fit)
pub fn center_offset(text: &str, width: usize) -> usize {
    width.saturating_sub(text.width()) / 2
}

/// Pad `text` with spaces on the right up to `width` display columns
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - current))
}
