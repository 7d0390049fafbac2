//! Kaskade beim Löschen einer Katalog-Zeile.

use super::{drawing, popup, shape_lifecycle};
use crate::app::AppState;
use crate::core::RowId;
use crate::render::StyleCache;

/// Entfernt eine Katalog-Zeile samt Werkzeug-Bindung, Shapes, Selektion und Sichtbarkeit.
///
/// Ein laufender Strich der Zeile wird ohne Shape verworfen. Ein offener,
/// ungespeicherter Popup-Entwurf eines betroffenen Shapes geht verloren.
pub fn cascade_row_deletion(state: &mut AppState, cache: &mut StyleCache, row_id: RowId) {
    if state.armed_row_id() == Some(row_id) {
        state.session.cancel_stroke();
        drawing::disarm_row(state);
    }

    let removed = shape_lifecycle::discard_row(state, cache, row_id);
    if state
        .ui
        .popup
        .as_ref()
        .is_some_and(|p| !state.store.contains(p.shape_id))
    {
        popup::close(state);
    }

    state.visibility.forget(row_id);
    state.catalog.remove(row_id);
    log::info!("Zeile {} gelöscht ({} Shapes verworfen)", row_id, removed);
}
