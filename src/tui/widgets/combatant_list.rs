/// CombatantListPanel - initiative order with HP/MP bars and status effects
///
/// Each combatant renders as a header line, an HP bar, an MP bar when the
/// combatant has mana, and up to three bracketed status effects. A legend
/// closes the list.
use crate::formatting::HudGlyphs;
use crate::layout_constants::{COMBATANT_BAR_WIDTH, MAX_STATUS_EFFECTS};
use crate::tui::device::OutputDevice;
use crate::tui::error::HudResult;
use crate::tui::types::BarStyle;
use crate::tui::widgets::{HealthBar, PanelWidget};

/// Snapshot of one combat participant, supplied by the game state
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    pub name: String,
    pub current_hp: i64,
    pub max_hp: i64,
    pub current_mp: i64,
    pub max_mp: i64,
    pub is_player: bool,
    pub is_current_turn: bool,
    pub status_effects: Vec<String>,
}

impl Combatant {
    pub fn new(name: impl Into<String>, current_hp: i64, max_hp: i64) -> Self {
        Self {
            name: name.into(),
            current_hp,
            max_hp,
            current_mp: 0,
            max_mp: 0,
            is_player: false,
            is_current_turn: false,
            status_effects: Vec::new(),
        }
    }

    pub fn with_mana(mut self, current_mp: i64, max_mp: i64) -> Self {
        self.current_mp = current_mp;
        self.max_mp = max_mp;
        self
    }

    pub fn player(mut self) -> Self {
        self.is_player = true;
        self
    }

    pub fn acting(mut self) -> Self {
        self.is_current_turn = true;
        self
    }

    pub fn with_effects<I, S>(mut self, effects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.status_effects = effects.into_iter().map(Into::into).collect();
        self
    }
}

/// Widget listing combatants in turn order
#[derive(Clone)]
pub struct CombatantListPanel {
    bar: HealthBar,
}

impl CombatantListPanel {
    pub fn new(bar: HealthBar) -> Self {
        Self { bar }
    }

    fn combatant_lines(
        &self,
        device: &dyn OutputDevice,
        glyphs: &HudGlyphs,
        combatant: &Combatant,
        lines: &mut Vec<String>,
    ) -> HudResult<()> {
        let marker = if combatant.is_current_turn { glyphs.turn_marker } else { " " };
        let role = if combatant.is_player { glyphs.player } else { glyphs.enemy };
        lines.push(format!("{} {} {}", marker, role, combatant.name));

        let hp = self.bar.render(
            device,
            combatant.current_hp,
            combatant.max_hp,
            COMBATANT_BAR_WIDTH,
            BarStyle::Compact,
        )?;
        lines.push(format!("    HP {}", hp));

        if combatant.max_mp > 0 {
            let mp = self.bar.render(
                device,
                combatant.current_mp,
                combatant.max_mp,
                COMBATANT_BAR_WIDTH,
                BarStyle::Compact,
            )?;
            lines.push(format!("    MP {}", mp));
        }

        if !combatant.status_effects.is_empty() {
            let effects: Vec<String> = combatant
                .status_effects
                .iter()
                .take(MAX_STATUS_EFFECTS)
                .map(|effect| format!("[{}]", effect))
                .collect();
            lines.push(format!("    {}", effects.join(" ")));
        }

        Ok(())
    }
}

impl PanelWidget for CombatantListPanel {
    type Data = [Combatant];

    fn lines(&self, device: &dyn OutputDevice, combatants: &[Combatant]) -> HudResult<Vec<String>> {
        let glyphs = HudGlyphs::from_use_unicode(device.supports_extended_glyphs());
        let mut lines = Vec::with_capacity(combatants.len() * 4 + 1);

        for combatant in combatants {
            self.combatant_lines(device, &glyphs, combatant, &mut lines)?;
        }

        lines.push(format!(
            "{} Turn  {} Player  {} Enemy",
            glyphs.turn_marker, glyphs.player, glyphs.enemy
        ));

        tracing::debug!("COMBATANTS: {} combatants -> {} lines", combatants.len(), lines.len());
        Ok(lines)
    }
}
