//! Handler für Selektion und Bearbeitungs-Popup.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ShapeId;
use glam::DVec2;

/// Selektiert das oberste Shape am Klickpunkt.
pub fn select_at(state: &mut AppState, lonlat: DVec2) {
    use_cases::selection::select_at(state, lonlat);
}

pub fn select_shape(state: &mut AppState, shape_id: ShapeId) {
    use_cases::selection::select_shape(state, shape_id);
}

/// Hebt die Selektion auf (Popup wird ohne Speichern geschlossen).
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

pub fn set_popup_density(state: &mut AppState, value: i64) {
    use_cases::popup::set_draft_density(state, value);
}

pub fn set_popup_description(state: &mut AppState, text: &str) {
    use_cases::popup::set_draft_description(state, text);
}

/// Übernimmt den Popup-Entwurf auf das Shape.
pub fn save_popup(state: &mut AppState) {
    use_cases::popup::save(state);
}
