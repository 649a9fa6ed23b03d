use tracing::{debug, trace};

use crate::tui::action::{Effect, PopupAction};
use crate::tui::state::PopupState;

/// Apply a popup action, returning the next state and the drawing it needs
pub fn reduce_popup(state: &PopupState, action: PopupAction) -> (PopupState, Effect) {
    match action {
        PopupAction::Show { suggestions, anchor } => show(state, suggestions, anchor),
        PopupAction::SelectNext => step_selection(state, 1),
        PopupAction::SelectPrevious => step_selection(state, -1),
        PopupAction::Hide => hide(state),
    }
}

fn show(state: &PopupState, suggestions: Vec<String>, anchor: (u16, u16)) -> (PopupState, Effect) {
    if suggestions.len() < 2 {
        trace!("POPUP: ignoring show with {} suggestion(s)", suggestions.len());
        return (state.clone(), Effect::None);
    }

    debug!("POPUP: showing {} suggestions at {:?}", suggestions.len(), anchor);
    let new_state = PopupState {
        suggestions,
        selected_index: 0,
        visible: true,
        anchor,
        drawn: state.drawn,
    };
    (new_state, Effect::Redraw { stale: state.drawn })
}

fn step_selection(state: &PopupState, delta: isize) -> (PopupState, Effect) {
    let count = state.suggestions.len();
    if !state.visible || count == 0 {
        return (state.clone(), Effect::None);
    }

    let mut new_state = state.clone();
    new_state.selected_index = (state.selected_index as isize + delta).rem_euclid(count as isize) as usize;
    trace!("POPUP: selection {} -> {}", state.selected_index, new_state.selected_index);
    (new_state, Effect::Redraw { stale: None })
}

fn hide(state: &PopupState) -> (PopupState, Effect) {
    debug!("POPUP: hiding (visible={})", state.visible);
    let effect = match state.drawn {
        Some(rect) => Effect::Clear(rect),
        None => Effect::None,
    };
    (PopupState::default(), effect)
}
