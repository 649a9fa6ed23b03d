//! Shared layout constants used across the HUD widgets.
//!
//! This module centralizes common layout values to ensure consistency
//! and make it easier to adjust layouts globally.

/// Narrowest bar the renderer accepts (and the floor for reserved-column styles)
pub const MIN_BAR_WIDTH: usize = 3;

/// Below this many glyph columns a labeled bar shows numbers only
pub const MIN_LABELED_BAR_WIDTH: usize = 5;

/// Width of the HP/MP bars in the combatant list
pub const COMBATANT_BAR_WIDTH: usize = 20;

/// Status effects shown per combatant; the rest are dropped
pub const MAX_STATUS_EFFECTS: usize = 3;

/// Separator between turn-info segments
pub const TURN_INFO_SEPARATOR: &str = "  |  ";

/// Rows shown by the completion popup before it scrolls
pub const POPUP_MAX_DISPLAY: usize = 10;

/// Minimum completion popup width
pub const POPUP_MIN_WIDTH: usize = 20;

/// Columns added to the longest suggestion for selector and margins
pub const POPUP_WIDTH_PADDING: usize = 4;
