use ratatui::layout::Rect;

/// Completion popup actions
///
/// All popup state changes go through [`crate::tui::reducers::reduce_popup`].
#[derive(Debug, Clone, PartialEq)]
pub enum PopupAction {
    /// Replace the suggestion set and show it below `anchor`
    Show { suggestions: Vec<String>, anchor: (u16, u16) },
    SelectNext,
    SelectPrevious,
    Hide,
}

/// Drawing work requested by a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Draw the popup window, blanking `stale` first if a previous window was drawn
    Redraw { stale: Option<Rect> },
    /// Blank exactly these cells
    Clear(Rect),
}
