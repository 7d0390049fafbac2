//! Handler für Touch-Punkte und die Pinch-Warnung.

use crate::app::tools::SessionError;
use crate::app::use_cases;
use crate::app::AppState;
use std::time::Instant;

pub fn register(state: &mut AppState, id: u64) -> Result<(), SessionError> {
    use_cases::touch::register_touch(state, id)
}

pub fn release(state: &mut AppState, id: u64) -> Result<(), SessionError> {
    use_cases::touch::release_touch(state, id)
}

/// Blendet die Warnung aus, falls ihre Anzeigedauer abgelaufen ist.
pub fn expire_warning(state: &mut AppState, now: Instant) {
    use_cases::touch::expire_warning(state, now);
}

pub fn dismiss_warning(state: &mut AppState) {
    use_cases::touch::dismiss_warning(state);
}
