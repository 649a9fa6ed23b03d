/// PersonalBestHighlight - best leaderboard entry with a one-shot record banner
use crate::config::DisplayConfig;
use crate::formatting::HudGlyphs;
use crate::tui::device::OutputDevice;
use crate::tui::error::HudResult;
use crate::tui::state::PersonalBestState;

/// Leaderboard entry as supplied by the game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i64,
    pub rank: Option<u32>,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
            rank: None,
        }
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }
}

pub struct PersonalBestHighlight {
    state: PersonalBestState,
    config: DisplayConfig,
}

impl PersonalBestHighlight {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            state: PersonalBestState::default(),
            config,
        }
    }

    pub fn has_new_record(&self) -> bool {
        self.state.new_record
    }

    pub fn show_new_record(&mut self) {
        self.state = self.state.with_flag(true);
    }

    pub fn clear_new_record(&mut self) {
        self.state = self.state.with_flag(false);
    }

    /// Flag a new record when `current` outscores `previous`
    pub fn compare_to_entry(&mut self, current: &ScoreEntry, previous: &ScoreEntry) {
        self.state = self.state.compared(current.score, previous.score);
        tracing::debug!(
            "RECORD: {} vs {} -> new_record={}",
            current.score,
            previous.score,
            self.state.new_record
        );
    }

    /// Draw the best entry at `(x, y)` and, once, the record banner below it
    ///
    /// Returns the number of rows drawn.
    pub fn render_personal_best(
        &mut self,
        device: &mut dyn OutputDevice,
        x: u16,
        y: u16,
        entry: &ScoreEntry,
    ) -> HudResult<u16> {
        let glyphs = HudGlyphs::from_use_unicode(device.supports_extended_glyphs());

        let mut line = format!("{} Personal Best: {} by {}", glyphs.record, entry.score, entry.name);
        if let Some(rank) = entry.rank {
            line.push_str(&format!(" (#{})", rank));
        }
        device.write_at(x, y, &line)?;

        if !self.state.new_record {
            return Ok(1);
        }

        let banner = format!("{} NEW RECORD! {}", glyphs.record, glyphs.record);
        device.write_colored_at(x, y + 1, &banner, self.config.record_fg)?;
        let (_, cleared) = self.state.consume();
        self.state = cleared;
        Ok(2)
    }
}
