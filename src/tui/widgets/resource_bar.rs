/// ResourceBar - maps free-form resource names onto bar kinds
///
/// Names like "mana" or "RAGE" resolve case-insensitively through a fixed
/// alias table. Custom resources carry a fixed color instead of thresholds.
use phf::phf_map;
use ratatui::style::Color;

use crate::config::NEUTRAL_COLOR;
use crate::tui::device::OutputDevice;
use crate::tui::error::HudResult;
use crate::tui::types::{BarStyle, BarType};
use crate::tui::widgets::HealthBar;

static RESOURCE_ALIASES: phf::Map<&'static str, BarType> = phf_map! {
    "health" => BarType::Health,
    "hp" => BarType::Health,
    "mana" => BarType::Mana,
    "mp" => BarType::Mana,
    "experience" => BarType::Experience,
    "xp" => BarType::Experience,
    "stamina" => BarType::Stamina,
    "energy" => BarType::Stamina,
    "rage" => BarType::Custom,
    "focus" => BarType::Custom,
};

static CUSTOM_COLORS: phf::Map<&'static str, Color> = phf_map! {
    "rage" => Color::Red,
    "focus" => Color::Cyan,
};

/// Resolve a resource name to its bar kind, ignoring case
pub fn resource_kind(resource_name: &str) -> Option<BarType> {
    RESOURCE_ALIASES
        .get(resource_name.to_lowercase().as_str())
        .copied()
}

/// Renders named resources through a [`HealthBar`]
#[derive(Clone)]
pub struct ResourceBar {
    bar: HealthBar,
}

impl ResourceBar {
    pub fn new(bar: HealthBar) -> Self {
        Self { bar }
    }

    /// Render a resource bar; the name only matters for coloring
    pub fn render<D: OutputDevice + ?Sized>(
        &self,
        device: &D,
        _resource_name: &str,
        current: i64,
        max: i64,
        width: usize,
        style: BarStyle,
    ) -> HudResult<String> {
        self.bar.render(device, current, max, width, style)
    }

    /// Display color for a named resource at the given fill level
    pub fn color(&self, resource_name: &str, current: i64, max: i64) -> Color {
        match resource_kind(resource_name) {
            Some(BarType::Custom) => CUSTOM_COLORS
                .get(resource_name.to_lowercase().as_str())
                .copied()
                .unwrap_or(NEUTRAL_COLOR),
            Some(bar_type) => self.bar.threshold_color(current, max, bar_type),
            None => {
                tracing::debug!("RESOURCE: unknown resource '{}', using neutral color", resource_name);
                NEUTRAL_COLOR
            }
        }
    }
}
