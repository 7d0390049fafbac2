//! Application State: zentrale Datenhaltung der Annotations-Session.

mod app_state;
mod selection;
mod ui;
mod view;

pub use app_state::AppState;
pub use selection::SelectionState;
pub use ui::{PopupPlacement, PopupState, UiState};
pub use view::ViewState;
