/// TurnInfoBar - one-line summary of the current combat turn
use crate::formatting::{center_offset, truncate_to_width, HudGlyphs};
use crate::layout_constants::TURN_INFO_SEPARATOR;
use crate::tui::device::OutputDevice;
use crate::tui::error::HudResult;
use crate::tui::types::Panel;
use crate::tui::widgets::{render_frame, PanelWidget};

/// Turn economy of the acting entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnState {
    pub round: u32,
    pub actor_name: String,
    pub is_player_turn: bool,
    pub action_available: bool,
    pub movement_remaining: u32,
    pub movement_max: u32,
    /// Whether the actor can take bonus actions at all
    pub has_bonus_action: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TurnInfoBar;

impl TurnInfoBar {
    pub fn new() -> Self {
        Self
    }

    /// The joined turn summary line
    pub fn text(&self, extended_glyphs: bool, state: &TurnState) -> String {
        let glyphs = HudGlyphs::from_use_unicode(extended_glyphs);

        let mut parts = vec![format!("Round {}", state.round)];
        parts.push(if state.is_player_turn {
            "YOUR TURN".to_string()
        } else {
            format!("{}'S TURN", state.actor_name.to_uppercase())
        });
        parts.push(if state.action_available {
            format!("{} Action", glyphs.action_ready)
        } else {
            format!("{} Action used", glyphs.action_used)
        });
        parts.push(format!("Move {}/{}", state.movement_remaining, state.movement_max));
        if state.has_bonus_action {
            parts.push(glyphs.bonus_action.to_string());
        }

        parts.join(TURN_INFO_SEPARATOR)
    }
}

impl PanelWidget for TurnInfoBar {
    type Data = TurnState;

    fn lines(&self, device: &dyn OutputDevice, state: &TurnState) -> HudResult<Vec<String>> {
        Ok(vec![self.text(device.supports_extended_glyphs(), state)])
    }

    /// Centered on the first content row, truncated when wider than the panel
    fn render_to_panel(
        &self,
        device: &mut dyn OutputDevice,
        panel: &Panel,
        state: &TurnState,
    ) -> HudResult<()> {
        render_frame(device, panel)?;

        let content = panel.content_area();
        if content.width == 0 || content.height == 0 {
            return Ok(());
        }

        let width = usize::from(content.width);
        let line = self.text(device.supports_extended_glyphs(), state);
        let padding = center_offset(&line, width);
        let visible = truncate_to_width(&line, width - padding);

        tracing::trace!("TURN: round {} '{}' padding={}", state.round, visible, padding);
        device.write_at(content.x + padding as u16, content.y, &visible)
    }
}
