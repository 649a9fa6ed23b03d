/// Border and title drawing for bordered panels
use crate::formatting::{truncate_to_width, BoxChars};
use crate::tui::device::OutputDevice;
use crate::tui::error::HudResult;
use crate::tui::types::Panel;

/// Draw the border and title of a bordered panel
///
/// Borderless panels and panels too small to hold a border are left alone.
pub fn render_frame(device: &mut dyn OutputDevice, panel: &Panel) -> HudResult<()> {
    let area = panel.area;
    if !panel.has_border || area.width < 2 || area.height < 2 {
        return Ok(());
    }

    let chars = BoxChars::from_use_unicode(device.supports_extended_glyphs());
    let inner = usize::from(area.width - 2);

    let title = panel
        .title
        .as_deref()
        .map(|t| truncate_to_width(&format!(" {} ", t), inner))
        .unwrap_or_default();
    let title_width = unicode_width::UnicodeWidthStr::width(title.as_str());
    let top = format!(
        "{}{}{}{}",
        chars.top_left,
        title,
        chars.horizontal.repeat(inner - title_width),
        chars.top_right
    );
    device.write_at(area.x, area.y, &top)?;

    for y in area.y + 1..area.bottom() - 1 {
        device.write_at(area.x, y, chars.vertical)?;
        device.write_at(area.right() - 1, y, chars.vertical)?;
    }

    let bottom = format!(
        "{}{}{}",
        chars.bottom_left,
        chars.horizontal.repeat(inner),
        chars.bottom_right
    );
    device.write_at(area.x, area.bottom() - 1, &bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::device::BufferDevice;
    use crate::tui::testing::assert_buffer;
    use crate::tui::types::PanelPosition;
    use ratatui::{buffer::Buffer, layout::Rect};

    #[test]
    fn test_frame_with_title() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 4));
        let panel = Panel::new(Rect::new(0, 0, 12, 4), PanelPosition::Sidebar, true).with_title("Foes");
        render_frame(&mut BufferDevice::new(&mut buf, true), &panel).unwrap();

        assert_buffer(
            &buf,
            &[
                "╭ Foes ────╮",
                "│          │",
                "│          │",
                "╰──────────╯",
            ],
        );
    }

    #[test]
    fn test_frame_ascii_long_title_truncated() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 3));
        let panel = Panel::new(Rect::new(0, 0, 8, 3), PanelPosition::Sidebar, true)
            .with_title("Combatants");
        render_frame(&mut BufferDevice::new(&mut buf, false), &panel).unwrap();

        assert_buffer(&buf, &["+ Comba+", "|      |", "+------+"]);
    }

    #[test]
    fn test_borderless_panel_draws_nothing() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 2));
        let panel = Panel::new(Rect::new(0, 0, 6, 2), PanelPosition::Footer, false);
        render_frame(&mut BufferDevice::new(&mut buf, true), &panel).unwrap();

        assert_buffer(&buf, &["", ""]);
    }
}
