/// Interactive HUD demonstration
///
/// Draws a combat screen with the HUD widgets into the terminal:
/// - Combatant list in a bordered sidebar
/// - Resource bars colored by threshold
/// - Personal best with a new-record banner
/// - Command input with a completion popup
/// - Turn summary in the footer
use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, buffer::Buffer, layout::Rect, Terminal};

use crate::config::{Config, DisplayConfig};
use crate::layout_constants::POPUP_MAX_DISPLAY;
use crate::tui::widgets::{
    Combatant, CombatantListPanel, CompletionPopup, HealthBar, PanelWidget, PersonalBestHighlight,
    ResourceBar, ScoreEntry, TurnInfoBar, TurnState,
};
use crate::tui::{BarStyle, BarType, BufferDevice, HudResult, OutputDevice, Panel, PanelPosition, PopupAction};

const SIDEBAR_WIDTH: u16 = 34;
const RESOURCE_BAR_WIDTH: usize = 20;

const COMMANDS: &[&str] = &[
    "abilities", "aim", "attack", "camp", "cast", "dash", "defend", "disengage", "dodge",
    "help", "hide", "inventory", "look", "move", "rest", "search", "use", "wait",
];

struct DemoState {
    use_unicode: bool,
    bars: HealthBar,
    resources: ResourceBar,
    combatants: Vec<Combatant>,
    turn: TurnState,
    display: DisplayConfig,
    popup: CompletionPopup,
    pending: Vec<PopupAction>,
    highlight: PersonalBestHighlight,
    best: ScoreEntry,
    score: i64,
    input: String,
}

impl DemoState {
    fn new(config: &Config) -> Self {
        let bars = HealthBar::new(Arc::new(config.bars.clone()));
        Self {
            use_unicode: config.display.use_unicode,
            resources: ResourceBar::new(bars.clone()),
            bars,
            combatants: vec![
                Combatant::new("Aria", 34, 40).with_mana(12, 30).player().acting(),
                Combatant::new("Dire Wolf", 22, 22).with_effects(["Hungry"]),
                Combatant::new("Goblin Shaman", 9, 18)
                    .with_mana(4, 10)
                    .with_effects(["Poisoned", "Slowed", "Marked", "Prone"]),
            ],
            turn: TurnState {
                round: 1,
                actor_name: "Aria".to_string(),
                is_player_turn: true,
                action_available: true,
                movement_remaining: 30,
                movement_max: 30,
                has_bonus_action: true,
            },
            display: config.display.clone(),
            popup: CompletionPopup::new(config.display.clone()),
            pending: Vec::new(),
            highlight: PersonalBestHighlight::new(config.display.clone()),
            best: ScoreEntry::new("Aria", 200).with_rank(4),
            score: 0,
            input: String::new(),
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer) -> HudResult<()> {
        let mut device = BufferDevice::new(buf, self.use_unicode);
        let body_height = area.height.saturating_sub(1);

        let sidebar = Panel::new(
            Rect::new(area.x, area.y, SIDEBAR_WIDTH.min(area.width), body_height),
            PanelPosition::Sidebar,
            true,
        )
        .with_title("Initiative");
        let main = Panel::new(
            Rect::new(
                area.x + sidebar.area.width,
                area.y,
                area.width.saturating_sub(sidebar.area.width),
                body_height,
            ),
            PanelPosition::MainContent,
            true,
        )
        .with_title("Aria");
        let footer = Panel::new(Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1), PanelPosition::Footer, false);

        CombatantListPanel::new(self.bars.clone()).render_to_panel(&mut device, &sidebar, &self.combatants)?;
        crate::tui::widgets::render_frame(&mut device, &main)?;

        let content = main.content_area();
        if content.width >= 40 && content.height >= 12 {
            self.render_main(&mut device, content)?;
        } else if !self.pending.is_empty() {
            tracing::debug!("DEMO: main area too small, dropping {} popup actions", self.pending.len());
            self.pending.clear();
        }

        TurnInfoBar::new().render_to_panel(&mut device, &footer, &self.turn)
    }

    fn render_main(&mut self, device: &mut BufferDevice<'_>, content: Rect) -> HudResult<()> {
        let player = &self.combatants[0];
        let resources = [
            ("HP", player.current_hp, player.max_hp, BarStyle::Detailed),
            ("Mana", player.current_mp, player.max_mp, BarStyle::Standard),
            ("Rage", 7, 10, BarStyle::Compact),
            ("XP", 1340, 2000, BarStyle::Numeric),
        ];
        for (row, (name, current, max, style)) in resources.into_iter().enumerate() {
            let text = self.resources.render(&*device, name, current, max, RESOURCE_BAR_WIDTH, style)?;
            let color = self.resources.color(name, current, max);
            device.write_colored_at(content.x + 1, content.y + row as u16, &format!("{:<5}{}", name, text), color)?;
        }

        let stamina = self.bars.render_labeled(&*device, "Stamina", 18, 25, usize::from(content.width) - 2)?;
        device.write_at(content.x + 1, content.y + 5, &stamina)?;
        self.bars.render_colored(device, content.x + 1, content.y + 6, 18, 25, 10, BarStyle::Standard, BarType::Stamina)?;

        self.highlight.render_personal_best(device, content.x + 1, content.y + 8, &self.best)?;

        let input_y = content.y + 10;
        device.write_at(content.x + 1, input_y, &format!("> {}_", self.input))?;

        if self.popup.is_visible() && content.union(self.popup.state().window_rect()) != content {
            tracing::debug!("DEMO: popup no longer fits the main area, closing it");
            self.popup = CompletionPopup::new(self.display.clone());
        }
        for action in std::mem::take(&mut self.pending) {
            let action = match action {
                PopupAction::Show { suggestions, .. } => {
                    let anchor = popup_anchor(content, input_y, suggestions.len());
                    PopupAction::Show { suggestions, anchor }
                }
                other => other,
            };
            self.popup.dispatch(device, action)?;
        }
        self.popup.draw(device)
    }

    fn perform(&mut self) {
        let command = self.input.trim().to_lowercase();
        self.input.clear();
        match command.as_str() {
            "attack" if self.turn.action_available => {
                if let Some(target) = self.combatants.iter_mut().skip(1).find(|c| c.current_hp > 0) {
                    target.current_hp = (target.current_hp - 6).max(0);
                }
                self.turn.action_available = false;
                self.score += 120;
            }
            "dash" => self.turn.movement_remaining = self.turn.movement_max * 2,
            "move" => self.turn.movement_remaining = self.turn.movement_remaining.saturating_sub(5),
            "wait" => self.next_round(),
            _ => tracing::debug!("DEMO: ignoring command '{}'", command),
        }

        let current = ScoreEntry::new("Aria", self.score);
        self.highlight.compare_to_entry(&current, &self.best);
        if current.score > self.best.score {
            self.best = current.with_rank(1);
        }
    }

    fn next_round(&mut self) {
        self.turn.round += 1;
        self.turn.action_available = true;
        self.turn.movement_remaining = self.turn.movement_max;
    }

    fn handle_event(&mut self, event: KeyEvent) -> bool {
        if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match event.code {
            KeyCode::Esc if self.popup.is_visible() => self.pending.push(PopupAction::Hide),
            KeyCode::Esc => return false,
            KeyCode::F(2) => self.use_unicode = !self.use_unicode,
            KeyCode::Tab => {
                let suggestions = COMMANDS
                    .iter()
                    .filter(|c| c.starts_with(self.input.as_str()))
                    .map(|c| c.to_string())
                    .collect();
                // Anchored against the main area when the action is reduced
                self.pending.push(PopupAction::Show { suggestions, anchor: (0, 0) });
            }
            KeyCode::Down if self.popup.is_visible() => self.pending.push(PopupAction::SelectNext),
            KeyCode::Up if self.popup.is_visible() => self.pending.push(PopupAction::SelectPrevious),
            KeyCode::Enter if self.popup.is_visible() => {
                if let Some(selected) = self.popup.get_selected() {
                    self.input = selected.to_string();
                }
                self.pending.push(PopupAction::Hide);
            }
            KeyCode::Enter => self.perform(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                if self.popup.is_visible() {
                    self.pending.push(PopupAction::Hide);
                }
            }
            _ => {}
        }
        true
    }
}

/// Popup position below the input line, or above it when the main area
/// has no room underneath
fn popup_anchor(content: Rect, input_y: u16, count: usize) -> (u16, u16) {
    let height = count.min(POPUP_MAX_DISPLAY) as u16;
    let x = content.x + 3;
    let below = input_y + 1;
    if below + height <= content.bottom() {
        (x, below)
    } else {
        (x, input_y.saturating_sub(height).max(content.y))
    }
}

/// Run the HUD demonstration
pub fn run(config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = DemoState::new(config);
    let result = event_loop(&mut terminal, &mut state);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, state: &mut DemoState) -> Result<()> {
    loop {
        let mut rendered: HudResult<()> = Ok(());
        terminal.draw(|f| {
            let area = f.area();
            rendered = state.render(area, f.buffer_mut());
        })?;
        rendered?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if !state.handle_event(key) {
                    return Ok(());
                }
            }
        }
    }
}
