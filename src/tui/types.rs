/// Core type definitions shared by the HUD widgets
///
/// Bar styles and kinds are closed sets: adding a variant means updating every
/// `match` that renders or colors a bar.
use ratatui::layout::Rect;

/// Visual layout of a proportional bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarStyle {
    /// Glyph run only
    #[default]
    Standard,
    /// `[glyphs] current/max`
    Detailed,
    /// Glyph run followed by the bare current value
    Compact,
    /// `current/max` text, no glyphs
    Numeric,
}

/// Semantic kind of a bar, used only to choose its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarType {
    Health,
    Mana,
    Experience,
    Stamina,
    Custom,
}

/// Logical screen region a panel occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelPosition {
    MainContent,
    Sidebar,
    Footer,
    Input,
    Popup,
}

/// A rectangular screen region with an optional border and title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub area: Rect,
    pub position: PanelPosition,
    pub title: Option<String>,
    pub has_border: bool,
}

impl Panel {
    pub fn new(area: Rect, position: PanelPosition, has_border: bool) -> Self {
        Self {
            area,
            position,
            title: None,
            has_border,
        }
    }

    /// Zero-size, borderless panel marking "nothing allocated here"
    pub fn empty(position: PanelPosition) -> Self {
        Self::new(Rect::default(), position, false)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Interior rectangle after removing the border, if any
    pub fn content_area(&self) -> Rect {
        if !self.has_border {
            return self.area;
        }
        Rect {
            x: self.area.x.saturating_add(1),
            y: self.area.y.saturating_add(1),
            width: self.area.width.saturating_sub(2),
            height: self.area.height.saturating_sub(2),
        }
    }

    pub fn inner_width(&self) -> u16 {
        self.content_area().width
    }

    pub fn inner_height(&self) -> u16 {
        self.content_area().height
    }

    /// Whether a point falls inside the content area (borders excluded)
    pub fn contains_point(&self, x: u16, y: u16) -> bool {
        let content = self.content_area();
        x >= content.x && x < content.right() && y >= content.y && y < content.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.area.width == 0 || self.area.height == 0
    }
}
