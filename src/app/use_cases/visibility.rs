//! Sichtbarkeits-Synchronisierung zwischen Katalog-Checkboxen und Feature-Store.

use super::selection;
use crate::app::AppState;
use crate::core::RowId;

/// Setzt die Sichtbarkeit einer Zeile und gleicht die gerenderte Teilmenge ab.
///
/// Shapes verlassen dabei nie die vollständige Liste. Wird das selektierte
/// Shape ausgeblendet, wird die Selektion aufgehoben.
pub fn set_row_visibility(state: &mut AppState, row_id: RowId, visible: bool) {
    let previous = state.visibility.set(row_id, visible);

    if visible {
        let added = state.store.show_row(row_id);
        if !added.is_empty() {
            log::debug!("Zeile {}: {} Shapes eingeblendet", row_id, added.len());
        }
    } else {
        let removed = state.store.hide_row(row_id);
        if !removed.is_empty() {
            log::debug!("Zeile {}: {} Shapes ausgeblendet", row_id, removed.len());
        }
        if state
            .selection
            .selected
            .is_some_and(|selected| removed.contains(&selected))
        {
            selection::clear_selection(state);
        }
    }

    if previous != visible {
        log::info!(
            "Zeile {} {}",
            row_id,
            if visible { "eingeblendet" } else { "ausgeblendet" }
        );
    }
}

/// Nach dem Abhängen des Werkzeugs: Zeilen ohne Shapes hinterlassen keine Spur.
pub fn hide_if_empty(state: &mut AppState, row_id: RowId) {
    if state.store.shape_count(row_id) == 0 {
        set_row_visibility(state, row_id, false);
    }
}
