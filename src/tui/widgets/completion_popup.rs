/// CompletionPopup - scrollable suggestion list under the input line
///
/// Holds a [`PopupState`] and turns the [`Effect`]s returned by
/// [`reduce_popup`] into device writes. The previously drawn window is
/// tracked so hiding or reshowing blanks exactly the cells that were used.
use ratatui::layout::Rect;

use crate::config::DisplayConfig;
use crate::formatting::{pad_to_width, truncate_to_width, HudGlyphs};
use crate::tui::action::{Effect, PopupAction};
use crate::tui::device::OutputDevice;
use crate::tui::error::HudResult;
use crate::tui::reducers::reduce_popup;
use crate::tui::state::PopupState;

pub struct CompletionPopup {
    state: PopupState,
    config: DisplayConfig,
}

impl CompletionPopup {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            state: PopupState::default(),
            config,
        }
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected_index
    }

    /// The highlighted suggestion, if any
    pub fn get_selected(&self) -> Option<&str> {
        self.state.selected()
    }

    /// Show suggestions below `(x, y)`; fewer than two leaves the popup hidden
    pub fn show(
        &mut self,
        device: &mut dyn OutputDevice,
        suggestions: Vec<String>,
        x: u16,
        y: u16,
    ) -> HudResult<()> {
        self.dispatch(device, PopupAction::Show { suggestions, anchor: (x, y) })
    }

    pub fn select_next(&mut self, device: &mut dyn OutputDevice) -> HudResult<()> {
        self.dispatch(device, PopupAction::SelectNext)
    }

    pub fn select_previous(&mut self, device: &mut dyn OutputDevice) -> HudResult<()> {
        self.dispatch(device, PopupAction::SelectPrevious)
    }

    pub fn hide(&mut self, device: &mut dyn OutputDevice) -> HudResult<()> {
        self.dispatch(device, PopupAction::Hide)
    }

    /// Reduce an action and perform the drawing it asks for
    pub fn dispatch(&mut self, device: &mut dyn OutputDevice, action: PopupAction) -> HudResult<()> {
        let (state, effect) = reduce_popup(&self.state, action);
        self.state = state;

        match effect {
            Effect::None => Ok(()),
            Effect::Clear(rect) => blank(device, rect),
            Effect::Redraw { stale } => {
                if let Some(rect) = stale {
                    blank(device, rect)?;
                }
                self.draw(device)
            }
        }
    }

    /// Draw the visible window at the anchor
    pub fn draw(&mut self, device: &mut dyn OutputDevice) -> HudResult<()> {
        if !self.state.visible {
            return Ok(());
        }

        let rect = self.state.window_rect();
        // Recorded before writing so a partial draw is still blanked later
        self.state.drawn = Some(rect);

        let glyphs = HudGlyphs::from_use_unicode(device.supports_extended_glyphs());
        let width = usize::from(rect.width);
        let window = self.state.window();
        let last_row = window.len().saturating_sub(1);

        for (row, index) in window.clone().enumerate() {
            let y = rect.y + row as u16;
            let is_selected = index == self.state.selected_index;
            let marker = if is_selected { glyphs.selector } else { " " };
            let text = format!(" {} {}", marker, self.state.suggestions[index]);
            let line = pad_to_width(&truncate_to_width(&text, width), width);

            if is_selected {
                let previous_bg = device.background();
                device.set_background(self.config.selection_bg);
                let result = device.write_colored_at(rect.x, y, &line, self.config.selection_fg);
                device.set_background(previous_bg);
                result?;
            } else {
                device.write_at(rect.x, y, &line)?;
            }

            let right = rect.x + rect.width - 1;
            if row == 0 && window.start > 0 {
                device.write_at(right, y, glyphs.scroll_up)?;
            }
            if row == last_row && window.end < self.state.suggestions.len() {
                device.write_at(right, y, glyphs.scroll_down)?;
            }
        }

        tracing::trace!(
            "POPUP: drew rows {:?} of {} at {:?}",
            window,
            self.state.suggestions.len(),
            rect
        );
        Ok(())
    }
}

fn blank(device: &mut dyn OutputDevice, rect: Rect) -> HudResult<()> {
    let spaces = " ".repeat(usize::from(rect.width));
    for y in rect.top()..rect.bottom() {
        device.write_at(rect.x, y, &spaces)?;
    }
    Ok(())
}
