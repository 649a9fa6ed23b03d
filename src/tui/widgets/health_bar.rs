/// HealthBar - proportional glyph bars with threshold coloring
///
/// Turns `(current, max, width, style)` into a bar string and `(current, max,
/// kind)` into a display color. Glyphs follow the device's extended-glyph
/// capability on every call, so toggling it takes effect on the next render.
use ratatui::style::Color;
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

use crate::config::{ThresholdProvider, NEUTRAL_COLOR};
use crate::layout_constants::{MIN_BAR_WIDTH, MIN_LABELED_BAR_WIDTH};
use crate::tui::device::{ColorGuard, OutputDevice};
use crate::tui::error::{HudError, HudResult};
use crate::tui::types::{BarStyle, BarType};

/// Renders bars using glyphs and thresholds from a [`ThresholdProvider`]
#[derive(Clone)]
pub struct HealthBar {
    provider: Arc<dyn ThresholdProvider>,
}

impl HealthBar {
    pub fn new(provider: Arc<dyn ThresholdProvider>) -> Self {
        Self { provider }
    }

    /// Render a bar as text
    ///
    /// `current` above `max` renders as full. Fails with
    /// [`HudError::InvalidArgument`] for negative `current`, `max < 1`, or
    /// `width < 3`.
    pub fn render<D: OutputDevice + ?Sized>(
        &self,
        device: &D,
        current: i64,
        max: i64,
        width: usize,
        style: BarStyle,
    ) -> HudResult<String> {
        validate_values(current, max)?;
        if width < MIN_BAR_WIDTH {
            return Err(HudError::invalid("width", width as i64, "must be at least 3"));
        }

        let current = current.min(max);
        let (filled, empty) = self
            .provider
            .character_set()
            .glyphs(device.supports_extended_glyphs());

        let text = match style {
            BarStyle::Standard => glyph_run(current, max, width, filled, empty),
            BarStyle::Detailed => {
                let inner = width.saturating_sub(2).max(MIN_BAR_WIDTH);
                format!("[{}] {}/{}", glyph_run(current, max, inner, filled, empty), current, max)
            }
            BarStyle::Compact => {
                let value = current.to_string();
                let inner = width.saturating_sub(value.len()).max(MIN_BAR_WIDTH);
                format!("{}{}", glyph_run(current, max, inner, filled, empty), value)
            }
            BarStyle::Numeric => format!("{}/{}", current, max),
        };

        tracing::trace!("BAR: {:?} {}/{} width={} -> {:?}", style, current, max, width, text);
        Ok(text)
    }

    /// Color for a bar's fill level from its kind's threshold table
    pub fn threshold_color(&self, current: i64, max: i64, bar_type: BarType) -> Color {
        if max <= 0 {
            return NEUTRAL_COLOR;
        }
        let percent = (current as f64 / max as f64 * 100.0).floor() as i64;
        let color = self.provider.thresholds(bar_type).color_for(percent);
        tracing::trace!("BAR: {:?} at {}% -> {:?}", bar_type, percent, color);
        color
    }

    /// Render `"{label}: {bar} {current}/{max}"` within `total_width` columns
    ///
    /// When fewer than 5 columns remain for the bar, the glyphs are dropped
    /// and only `"{label}: {current}/{max}"` is returned.
    pub fn render_labeled<D: OutputDevice + ?Sized>(
        &self,
        device: &D,
        label: &str,
        current: i64,
        max: i64,
        total_width: usize,
    ) -> HudResult<String> {
        validate_values(current, max)?;
        let current = current.min(max);

        let label_part = format!("{}: ", label);
        let value_part = format!(" {}/{}", current, max);
        let bar_width = total_width as i64 - label_part.width() as i64 - value_part.width() as i64;

        if bar_width < MIN_LABELED_BAR_WIDTH as i64 {
            tracing::debug!("BAR: '{}' has {} columns for glyphs, showing numbers only", label, bar_width);
            return Ok(format!("{}{}/{}", label_part, current, max));
        }

        let bar = self.render(device, current, max, bar_width as usize, BarStyle::Standard)?;
        Ok(format!("{}{}{}", label_part, bar, value_part))
    }

    /// Draw a bar at `(x, y)` in its threshold color
    ///
    /// The device foreground is restored before returning, including when the
    /// write fails. Argument errors are reported before anything is touched.
    #[allow(clippy::too_many_arguments)]
    pub fn render_colored<D: OutputDevice + ?Sized>(
        &self,
        device: &mut D,
        x: u16,
        y: u16,
        current: i64,
        max: i64,
        width: usize,
        style: BarStyle,
        bar_type: BarType,
    ) -> HudResult<()> {
        let text = self.render(&*device, current, max, width, style)?;
        let color = self.threshold_color(current, max, bar_type);

        device.set_cursor_position(x, y);
        let mut guard = ColorGuard::new(device, color);
        guard.write(&text)
    }
}

fn validate_values(current: i64, max: i64) -> HudResult<()> {
    if current < 0 {
        return Err(HudError::invalid("current", current, "must be non-negative"));
    }
    if max < 1 {
        return Err(HudError::invalid("max", max, "must be at least 1"));
    }
    Ok(())
}

/// `floor(current / max * width)` filled glyphs followed by empty ones
fn glyph_run(current: i64, max: i64, width: usize, filled: &str, empty: &str) -> String {
    let ratio = current as f64 / max as f64;
    let filled_count = ((ratio * width as f64).floor() as usize).min(width);
    format!("{}{}", filled.repeat(filled_count), empty.repeat(width - filled_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::{test_bars, RecordingDevice};

    fn bar() -> HealthBar {
        HealthBar::new(test_bars())
    }

    fn count(text: &str, glyph: char) -> usize {
        text.chars().filter(|c| *c == glyph).count()
    }

    #[test]
    fn test_standard_width_and_fill_for_all_values() {
        let device = RecordingDevice::new(true);
        for width in [3usize, 10, 17, 40] {
            for current in 0..=30 {
                let text = bar().render(&device, current, 30, width, BarStyle::Standard).unwrap();
                let expected_filled = (current as f64 / 30.0 * width as f64).floor() as usize;
                assert_eq!(text.chars().count(), width);
                assert_eq!(count(&text, '█'), expected_filled, "current={} width={}", current, width);
            }
        }
    }

    #[test]
    fn test_standard_empty_and_full() {
        let device = RecordingDevice::new(true);
        assert_eq!(bar().render(&device, 0, 50, 8, BarStyle::Standard).unwrap(), "░░░░░░░░");
        assert_eq!(bar().render(&device, 50, 50, 8, BarStyle::Standard).unwrap(), "████████");
    }

    #[test]
    fn test_over_max_clamps_to_full() {
        let device = RecordingDevice::new(true);
        for style in [BarStyle::Standard, BarStyle::Detailed, BarStyle::Compact, BarStyle::Numeric] {
            let over = bar().render(&device, 250, 100, 12, style).unwrap();
            let full = bar().render(&device, 100, 100, 12, style).unwrap();
            assert_eq!(over, full, "{:?}", style);
        }
    }

    #[test]
    fn test_configured_glyphs_of_wrong_width_fall_back() {
        let config = crate::config::from_toml(
            r#"
[bars.glyphs]
filled = ""
empty = "<>"
"#,
        );
        let bar = HealthBar::new(std::sync::Arc::new(config.bars));
        let device = RecordingDevice::new(true);
        let text = bar.render(&device, 5, 10, 10, BarStyle::Standard).unwrap();
        assert_eq!(text, "█████░░░░░");
    }

    #[test]
    fn test_compact_example() {
        let device = RecordingDevice::new(true);
        let text = bar().render(&device, 3, 10, 10, BarStyle::Compact).unwrap();
        assert_eq!(text, "██░░░░░░░3");
    }

    #[test]
    fn test_compact_inner_width_floor() {
        let device = RecordingDevice::new(false);
        let text = bar().render(&device, 1000, 1000, 4, BarStyle::Compact).unwrap();
        assert_eq!(text, "###1000");
    }

    #[test]
    fn test_detailed_brackets_and_suffix() {
        let device = RecordingDevice::new(false);
        let text = bar().render(&device, 5, 10, 12, BarStyle::Detailed).unwrap();
        assert_eq!(text, "[#####-----] 5/10");
    }

    #[test]
    fn test_numeric_ignores_width() {
        let device = RecordingDevice::new(true);
        assert_eq!(bar().render(&device, 7, 9, 3, BarStyle::Numeric).unwrap(), "7/9");
        assert_eq!(bar().render(&device, 7, 9, 60, BarStyle::Numeric).unwrap(), "7/9");
    }

    #[test]
    fn test_glyphs_follow_device_capability_each_call() {
        let mut device = RecordingDevice::new(true);
        assert_eq!(bar().render(&device, 1, 2, 4, BarStyle::Standard).unwrap(), "██░░");
        device.extended_glyphs = false;
        assert_eq!(bar().render(&device, 1, 2, 4, BarStyle::Standard).unwrap(), "##--");
    }

    #[test]
    fn test_precondition_violations() {
        let device = RecordingDevice::new(true);
        let cases = [(-1, 10, 10, "current"), (5, 0, 10, "max"), (5, 10, 2, "width")];
        for (current, max, width, field) in cases {
            match bar().render(&device, current, max, width, BarStyle::Standard) {
                Err(HudError::InvalidArgument { name, .. }) => assert_eq!(name, field),
                other => panic!("expected InvalidArgument for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_threshold_color_bands() {
        let bar = bar();
        assert_eq!(bar.threshold_color(10, 100, BarType::Health), Color::Red);
        assert_eq!(bar.threshold_color(40, 100, BarType::Health), Color::Yellow);
        assert_eq!(bar.threshold_color(90, 100, BarType::Health), Color::Green);
        assert_eq!(bar.threshold_color(90, 100, BarType::Mana), Color::Blue);
    }

    #[test]
    fn test_threshold_color_zero_max_is_neutral() {
        assert_eq!(bar().threshold_color(10, 0, BarType::Health), NEUTRAL_COLOR);
        assert_eq!(bar().threshold_color(10, -4, BarType::Mana), NEUTRAL_COLOR);
    }

    #[test]
    fn test_threshold_color_empty_table_is_neutral() {
        assert_eq!(bar().threshold_color(10, 100, BarType::Custom), NEUTRAL_COLOR);
    }

    #[test]
    fn test_threshold_color_monotonic() {
        let bar = bar();
        let table = crate::config::BarConfig::default().thresholds.health;
        let band = |color: Color| {
            table
                .entries()
                .iter()
                .find(|t| t.color == color)
                .map(|t| t.percent)
                .unwrap()
        };
        let mut last = 0;
        for current in 0..=120 {
            let percent = band(bar.threshold_color(current, 120, BarType::Health));
            assert!(percent >= last, "band dropped at current={}", current);
            last = percent;
        }
    }

    #[test]
    fn test_render_labeled_degrades() {
        let device = RecordingDevice::new(true);
        let text = bar().render_labeled(&device, "HP", 50, 100, 10).unwrap();
        assert_eq!(text, "HP: 50/100");
    }

    #[test]
    fn test_render_labeled_with_bar() {
        let device = RecordingDevice::new(false);
        let text = bar().render_labeled(&device, "HP", 50, 100, 30).unwrap();
        assert_eq!(text, "HP: #########---------- 50/100");
        assert_eq!(text.len(), 30);
    }

    #[test]
    fn test_render_labeled_rejects_negative() {
        let device = RecordingDevice::new(true);
        assert!(bar().render_labeled(&device, "HP", -1, 100, 30).is_err());
    }

    #[test]
    fn test_render_colored_writes_in_threshold_color_and_restores() {
        let mut device = RecordingDevice::new(false);
        device.set_foreground(Color::Gray);
        bar()
            .render_colored(&mut device, 2, 3, 10, 100, 10, BarStyle::Standard, BarType::Health)
            .unwrap();

        assert_eq!(device.writes.len(), 1);
        let write = &device.writes[0];
        assert_eq!((write.x, write.y), (2, 3));
        assert_eq!(write.text, "#---------");
        assert_eq!(write.fg, Color::Red);
        assert_eq!(device.foreground(), Color::Gray);
    }

    #[test]
    fn test_render_colored_restores_color_when_write_fails() {
        let mut device = RecordingDevice::failing();
        device.set_foreground(Color::Gray);
        let result =
            bar().render_colored(&mut device, 0, 0, 10, 100, 10, BarStyle::Standard, BarType::Health);

        assert!(matches!(result, Err(HudError::Io(_))));
        assert_eq!(device.foreground(), Color::Gray);
    }

    #[test]
    fn test_render_colored_invalid_args_touch_nothing() {
        let mut device = RecordingDevice::new(true);
        let result =
            bar().render_colored(&mut device, 4, 4, -5, 100, 10, BarStyle::Standard, BarType::Health);

        assert!(result.is_err());
        assert!(device.writes.is_empty());
        assert_eq!(device.cursor(), (0, 0));
        assert_eq!(device.foreground(), Color::Reset);
    }
}
