use phf::phf_map;
use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use unicode_width::UnicodeWidthStr;
use std::path::PathBuf;
use xdg::BaseDirectories;

use crate::tui::types::BarType;

/// Color used whenever no threshold or alias applies
pub const NEUTRAL_COLOR: Color = Color::White;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub display: DisplayConfig,
    pub bars: BarConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub record_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            display: DisplayConfig::default(),
            bars: BarConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            selection_fg: Color::Black,
            selection_bg: Color::Rgb(255, 165, 0), // Orange
            record_fg: Color::Yellow,
        }
    }
}

/// Supplies color thresholds and bar glyphs to the bar renderer
pub trait ThresholdProvider {
    /// Threshold table for a bar kind
    fn thresholds(&self, bar_type: BarType) -> &ThresholdTable;

    /// Glyphs used to draw bars
    fn character_set(&self) -> &BarCharacterSet;
}

/// A single color band: fill percentages up to `percent` use `color`
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub percent: u8,
    #[serde(deserialize_with = "deserialize_color")]
    pub color: Color,
}

impl Threshold {
    pub const fn new(percent: u8, color: Color) -> Self {
        Self { percent, color }
    }
}

/// Color bands for one bar kind, kept sorted ascending by percent
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(try_from = "Vec<Threshold>")]
pub struct ThresholdTable {
    entries: Vec<Threshold>,
}

impl ThresholdTable {
    /// Build a table; entries are stably sorted so equal percents keep their order
    pub fn new(mut entries: Vec<Threshold>) -> Self {
        entries.sort_by_key(|t| t.percent);
        Self { entries }
    }

    pub fn entries(&self) -> &[Threshold] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick the color for an integer fill percentage
    ///
    /// The first band whose upper bound is at or above `percent` wins. Values
    /// past the last band use the highest band; an empty table is neutral.
    pub fn color_for(&self, percent: i64) -> Color {
        self.entries
            .iter()
            .find(|t| i64::from(t.percent) >= percent)
            .or_else(|| self.entries.last())
            .map(|t| t.color)
            .unwrap_or(NEUTRAL_COLOR)
    }
}

impl TryFrom<Vec<Threshold>> for ThresholdTable {
    type Error = String;

    fn try_from(entries: Vec<Threshold>) -> Result<Self, Self::Error> {
        if let Some(bad) = entries.iter().find(|t| t.percent > 100) {
            return Err(format!("threshold percent {} is above 100", bad.percent));
        }
        Ok(ThresholdTable::new(entries))
    }
}

/// Per-kind threshold tables
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BarThresholds {
    pub health: ThresholdTable,
    pub mana: ThresholdTable,
    pub experience: ThresholdTable,
    pub stamina: ThresholdTable,
    pub custom: ThresholdTable,
}

impl Default for BarThresholds {
    fn default() -> Self {
        BarThresholds {
            health: ThresholdTable::new(vec![
                Threshold::new(25, Color::Red),
                Threshold::new(50, Color::Yellow),
                Threshold::new(100, Color::Green),
            ]),
            mana: ThresholdTable::new(vec![
                Threshold::new(25, Color::Magenta),
                Threshold::new(100, Color::Blue),
            ]),
            experience: ThresholdTable::new(vec![Threshold::new(100, Color::Yellow)]),
            stamina: ThresholdTable::new(vec![
                Threshold::new(25, Color::Red),
                Threshold::new(60, Color::Yellow),
                Threshold::new(100, Color::Green),
            ]),
            custom: ThresholdTable::default(),
        }
    }
}

/// Filled/empty glyphs plus their ASCII fallbacks
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BarCharacterSet {
    pub filled: String,
    pub empty: String,
    pub filled_ascii: String,
    pub empty_ascii: String,
}

impl Default for BarCharacterSet {
    fn default() -> Self {
        BarCharacterSet {
            filled: "█".to_string(),
            empty: "░".to_string(),
            filled_ascii: "#".to_string(),
            empty_ascii: "-".to_string(),
        }
    }
}

impl BarCharacterSet {
    /// Glyph pair for the device capability: extended glyphs or ASCII
    pub fn glyphs(&self, extended: bool) -> (&str, &str) {
        if extended {
            (&self.filled, &self.empty)
        } else {
            (&self.filled_ascii, &self.empty_ascii)
        }
    }

    /// Replace glyphs that do not occupy exactly one cell, and ASCII
    /// fallbacks that are not a single printable ASCII character
    pub fn sanitized(mut self) -> Self {
        let defaults = BarCharacterSet::default();
        if self.filled.width() != 1 {
            tracing::warn!("CONFIG: invalid filled {:?}, using {:?}", self.filled, defaults.filled);
            self.filled = defaults.filled;
        }
        if self.empty.width() != 1 {
            tracing::warn!("CONFIG: invalid empty {:?}, using {:?}", self.empty, defaults.empty);
            self.empty = defaults.empty;
        }
        if !is_single_printable_ascii(&self.filled_ascii) {
            tracing::warn!(
                "CONFIG: invalid filled_ascii {:?}, using {:?}",
                self.filled_ascii,
                defaults.filled_ascii
            );
            self.filled_ascii = defaults.filled_ascii;
        }
        if !is_single_printable_ascii(&self.empty_ascii) {
            tracing::warn!(
                "CONFIG: invalid empty_ascii {:?}, using {:?}",
                self.empty_ascii,
                defaults.empty_ascii
            );
            self.empty_ascii = defaults.empty_ascii;
        }
        self
    }
}

fn is_single_printable_ascii(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_graphic() || c == ' ')
}

/// Threshold configuration for all bars
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BarConfig {
    pub glyphs: BarCharacterSet,
    pub thresholds: BarThresholds,
}

impl ThresholdProvider for BarConfig {
    fn thresholds(&self, bar_type: BarType) -> &ThresholdTable {
        match bar_type {
            BarType::Health => &self.thresholds.health,
            BarType::Mana => &self.thresholds.mana,
            BarType::Experience => &self.thresholds.experience,
            BarType::Stamina => &self.thresholds.stamina,
            BarType::Custom => &self.thresholds.custom,
        }
    }

    fn character_set(&self) -> &BarCharacterSet {
        &self.glyphs
    }
}

static NAMED_COLORS: phf::Map<&'static str, Color> = phf_map! {
    "black" => Color::Black,
    "red" => Color::Red,
    "darkred" => Color::Red,
    "green" => Color::Green,
    "yellow" => Color::Yellow,
    "blue" => Color::Blue,
    "magenta" => Color::Magenta,
    "cyan" => Color::Cyan,
    "gray" => Color::Gray,
    "grey" => Color::Gray,
    "darkgray" => Color::DarkGray,
    "darkgrey" => Color::DarkGray,
    "lightred" => Color::LightRed,
    "lightgreen" => Color::LightGreen,
    "lightyellow" => Color::LightYellow,
    "lightblue" => Color::LightBlue,
    "lightmagenta" => Color::LightMagenta,
    "lightcyan" => Color::LightCyan,
    "white" => Color::White,
    "orange" => Color::Rgb(255, 165, 0),
};

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "darkred", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    if let Some(color) = NAMED_COLORS.get(s.as_str()) {
        return Some(*color);
    }

    if let Some(hex) = s.strip_prefix('#') {
        let expanded: String = match hex.len() {
            6 => hex.to_string(),
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            _ => return None,
        };
        let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }

    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() == 3 {
        let r = parts[0].trim().parse::<u8>().ok()?;
        let g = parts[1].trim().parse::<u8>().ok()?;
        let b = parts[2].trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    None
}

impl Config {
    /// Apply load-time fixups that cannot be expressed in serde attributes
    pub fn sanitized(mut self) -> Self {
        self.bars.glyphs = self.bars.glyphs.sanitized();
        self
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("CONFIG: failed to read {}: {}", config_path.display(), e);
            return Config::default();
        }
    };

    from_toml(&content)
}

/// Parse config text, falling back to defaults when it is invalid
pub fn from_toml(content: &str) -> Config {
    match toml::from_str::<Config>(content) {
        Ok(config) => config.sanitized(),
        Err(e) => {
            tracing::warn!("CONFIG: invalid config, using defaults: {}", e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("darkred"), Some(Color::Red));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("CYAN"), Some(Color::Cyan));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#GGGGGG"), None);
        assert_eq!(parse_color("#1234"), None);
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("256,0,0"), None);
        assert_eq!(parse_color("invalid"), None);
    }

    #[test]
    fn test_threshold_table_sorts_ascending() {
        let table = ThresholdTable::new(vec![
            Threshold::new(100, Color::Green),
            Threshold::new(25, Color::Red),
            Threshold::new(50, Color::Yellow),
        ]);
        let percents: Vec<u8> = table.entries().iter().map(|t| t.percent).collect();
        assert_eq!(percents, vec![25, 50, 100]);
    }

    #[test]
    fn test_threshold_table_color_for_bands() {
        let table = BarThresholds::default().health;
        assert_eq!(table.color_for(0), Color::Red);
        assert_eq!(table.color_for(25), Color::Red);
        assert_eq!(table.color_for(26), Color::Yellow);
        assert_eq!(table.color_for(50), Color::Yellow);
        assert_eq!(table.color_for(99), Color::Green);
        assert_eq!(table.color_for(100), Color::Green);
    }

    #[test]
    fn test_threshold_table_above_all_bands_uses_highest() {
        let table = ThresholdTable::new(vec![
            Threshold::new(10, Color::Red),
            Threshold::new(40, Color::Blue),
        ]);
        assert_eq!(table.color_for(90), Color::Blue);
    }

    #[test]
    fn test_threshold_table_empty_is_neutral() {
        assert_eq!(ThresholdTable::default().color_for(50), NEUTRAL_COLOR);
    }

    #[test]
    fn test_character_set_glyph_selection() {
        let set = BarCharacterSet::default();
        assert_eq!(set.glyphs(true), ("█", "░"));
        assert_eq!(set.glyphs(false), ("#", "-"));
    }

    #[test]
    fn test_character_set_sanitizes_bad_fallbacks() {
        let set = BarCharacterSet {
            filled: String::new(),
            empty: "<>".to_string(),
            filled_ascii: "█".to_string(),
            empty_ascii: "--".to_string(),
        }
        .sanitized();
        assert_eq!(set.filled, "█");
        assert_eq!(set.empty, "░");
        assert_eq!(set.filled_ascii, "#");
        assert_eq!(set.empty_ascii, "-");
    }

    #[test]
    fn test_character_set_keeps_single_cell_glyphs() {
        let set = BarCharacterSet {
            filled: "▓".to_string(),
            empty: "·".to_string(),
            ..Default::default()
        }
        .sanitized();
        assert_eq!(set.glyphs(true), ("▓", "·"));
    }

    #[test]
    fn test_config_from_toml_thresholds_and_glyphs() {
        let toml_str = r##"
log_level = "debug"

[display]
use_unicode = false
selection_bg = "#00FFFF"

[bars.glyphs]
filled_ascii = "="
empty_ascii = "."

[bars.thresholds]
health = [
    { percent = 100, color = "green" },
    { percent = 30, color = "red" },
]
        "##;

        let config = from_toml(toml_str);
        assert_eq!(config.log_level, "debug");
        assert!(!config.display.use_unicode);
        assert_eq!(config.display.selection_bg, Color::Rgb(0, 255, 255));
        assert_eq!(config.bars.glyphs.glyphs(false), ("=", "."));
        assert_eq!(config.bars.thresholds.health.color_for(20), Color::Red);
        assert_eq!(config.bars.thresholds.health.color_for(31), Color::Green);
        // Untouched tables keep their defaults
        assert_eq!(config.bars.thresholds.mana, BarThresholds::default().mana);
    }

    #[test]
    fn test_config_from_toml_rejects_percent_over_100() {
        let toml_str = r#"
[bars.thresholds]
health = [{ percent = 150, color = "green" }]
        "#;

        let config = from_toml(toml_str);
        assert_eq!(config.bars, BarConfig::default());
    }

    #[test]
    fn test_provider_covers_every_bar_type() {
        let config = BarConfig::default();
        for bar_type in [BarType::Health, BarType::Mana, BarType::Experience, BarType::Stamina] {
            assert!(!config.thresholds(bar_type).is_empty());
        }
        assert!(config.thresholds(BarType::Custom).is_empty());
    }
}
