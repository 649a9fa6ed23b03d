/// HUD widgets
///
/// Widgets turn game numbers into text and write it through an
/// [`OutputDevice`]. Composite widgets implement [`PanelWidget`] so they can
/// be placed into a [`Panel`] with uniform clipping.

#[cfg(test)]
pub mod testing;

pub mod health_bar;
pub use health_bar::HealthBar;

pub mod resource_bar;
pub use resource_bar::{resource_kind, ResourceBar};

pub mod panel_frame;
pub use panel_frame::render_frame;

pub mod combatant_list;
pub use combatant_list::{Combatant, CombatantListPanel};

pub mod turn_info;
pub use turn_info::{TurnInfoBar, TurnState};

pub mod completion_popup;
pub use completion_popup::CompletionPopup;

pub mod personal_best;
pub use personal_best::{PersonalBestHighlight, ScoreEntry};

use crate::formatting::truncate_to_width;
use crate::tui::device::OutputDevice;
use crate::tui::error::HudResult;
use crate::tui::types::Panel;

/// Core trait for widgets that fill a panel with lines of text
pub trait PanelWidget {
    /// Game data the widget renders
    type Data: ?Sized;

    /// Produce the widget's lines, unclipped
    fn lines(&self, device: &dyn OutputDevice, data: &Self::Data) -> HudResult<Vec<String>>;

    /// Draw into a panel's content area
    ///
    /// Lines wider than the content area are cut and lines past its height are
    /// dropped. Bordered panels get their frame drawn first.
    fn render_to_panel(
        &self,
        device: &mut dyn OutputDevice,
        panel: &Panel,
        data: &Self::Data,
    ) -> HudResult<()> {
        let lines = self.lines(&*device, data)?;
        render_frame(device, panel)?;

        let content = panel.content_area();
        if content.width == 0 {
            return Ok(());
        }
        let width = usize::from(content.width);

        for (row, line) in lines.iter().take(usize::from(content.height)).enumerate() {
            device.write_at(content.x, content.y + row as u16, &truncate_to_width(line, width))?;
        }
        if lines.len() > usize::from(content.height) {
            tracing::trace!("PANEL: dropped {} lines in {:?}", lines.len() - usize::from(content.height), panel.position);
        }
        Ok(())
    }
}
