//! Handler für Katalog-Ereignisse (Sichtbarkeit, Zeilen-Löschung).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::RowId;
use crate::render::StyleCache;

/// Setzt die Sichtbarkeit einer Zeile.
pub fn set_row_visibility(state: &mut AppState, row_id: RowId, visible: bool) {
    use_cases::visibility::set_row_visibility(state, row_id, visible);
}

/// Verarbeitet die Löschung einer Katalog-Zeile.
pub fn cascade_row_deletion(state: &mut AppState, cache: &mut StyleCache, row_id: RowId) {
    use_cases::row_cascade::cascade_row_deletion(state, cache, row_id);
}
