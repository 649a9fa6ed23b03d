//! Terminal HUD widgets for combat and leaderboard screens
//!
//! Numbers come in from game state, pass through the bar renderer and
//! composite panels, and leave as text written to an [`OutputDevice`].

pub mod action;
pub mod device;
pub mod error;
pub mod reducers;
pub mod state;
pub mod types;
pub mod widgets;

#[cfg(test)]
pub mod testing;


pub use action::{Effect, PopupAction};
pub use device::{BufferDevice, ColorGuard, OutputDevice};
pub use error::{HudError, HudResult};
pub use reducers::reduce_popup;
pub use state::{PersonalBestState, PopupState};
pub use types::{BarStyle, BarType, Panel, PanelPosition};
