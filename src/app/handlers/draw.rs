//! Handler für die Zeichen-Session.

use crate::app::tools::{RowBinding, SessionError};
use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Bindet das Werkzeug an eine Zeile.
pub fn arm_row(state: &mut AppState, binding: RowBinding) {
    use_cases::drawing::arm_row(state, binding);
}

/// Hängt das Werkzeug ab.
pub fn disarm_row(state: &mut AppState) {
    use_cases::drawing::disarm_row(state);
}

pub fn begin_stroke(state: &mut AppState, lonlat: DVec2) -> Result<(), SessionError> {
    use_cases::drawing::begin_stroke(state, lonlat)
}

pub fn extend_stroke(state: &mut AppState, lonlat: DVec2) -> Result<(), SessionError> {
    use_cases::drawing::extend_stroke(state, lonlat)
}

pub fn finish_stroke(state: &mut AppState) -> Result<(), SessionError> {
    use_cases::drawing::finish_stroke(state)
}

/// Stellt den Session-Batch für den Persistenz-Kollaborator bereit.
pub fn finish_session(state: &mut AppState) {
    use_cases::drawing::finish_session(state);
}
