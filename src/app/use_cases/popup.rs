//! Bearbeitungs-Popup des selektierten Shapes.
//!
//! Es gibt genau einen Popup-Slot. Der Entwurf wird nur durch `save`
//! auf das Shape übertragen.

use super::selection;
use crate::app::state::{PopupPlacement, PopupState};
use crate::app::AppState;
use crate::core::shape::{clamp_density, truncate_description};
use crate::core::{geo, MapView, ShapeId};
use glam::DVec2;

/// Wählt Anker-Vertex und Lage: über dem obersten Vertex, wenn oberhalb
/// genug Platz für das Popup ist, sonst unter dem untersten Vertex.
pub fn placement_for(
    ring: &[DVec2],
    view: &MapView,
    popup_height_px: f32,
) -> Option<(DVec2, PopupPlacement)> {
    let top = geo::top_vertex(ring)?;
    if view.lonlat_to_screen(top).y - popup_height_px > 0.0 {
        return Some((top, PopupPlacement::Above));
    }
    geo::bottom_vertex(ring).map(|bottom| (bottom, PopupPlacement::Below))
}

/// Skalierung des Popups abhängig vom Zoom.
pub fn popup_scale(zoom: f64) -> f32 {
    (zoom / 10.0).clamp(0.8, 1.5) as f32
}

/// Öffnet ein neues Popup für `shape_id` (ersetzt ein offenes).
pub fn open(state: &mut AppState, shape_id: ShapeId) {
    let Some(shape) = state.store.get(shape_id) else {
        close(state);
        return;
    };
    let Some((anchor, placement)) = placement_for(
        shape.geometry(),
        &state.view.map,
        state.options.popup_height_px,
    ) else {
        close(state);
        return;
    };

    state.ui.popup_instances += 1;
    state.ui.popup = Some(PopupState {
        shape_id,
        instance: state.ui.popup_instances,
        anchor,
        placement,
        draft_density: shape.density(),
        draft_description: shape.description().to_string(),
    });
}

/// Schließt das Popup ohne Übernahme.
pub fn close(state: &mut AppState) {
    state.ui.popup = None;
}

/// Setzt die Entwurfs-Dichte (begrenzt auf 1–100).
pub fn set_draft_density(state: &mut AppState, value: i64) {
    if let Some(popup) = state.ui.popup.as_mut() {
        popup.draft_density = clamp_density(value);
    }
}

/// Setzt die Entwurfs-Beschreibung (gekürzt auf die maximale Länge).
pub fn set_draft_description(state: &mut AppState, text: &str) {
    let max_chars = state.options.description_max_chars;
    if let Some(popup) = state.ui.popup.as_mut() {
        popup.draft_description = truncate_description(text, max_chars);
    }
}

/// Überträgt den Entwurf auf das Shape und hebt die Selektion auf.
///
/// Existiert das Shape nicht mehr, wird nur geschlossen.
pub fn save(state: &mut AppState) {
    let Some(popup) = state.ui.popup.take() else {
        return;
    };

    match state.store.get_mut(popup.shape_id) {
        Some(shape) => {
            shape.apply_edit(popup.draft_density, popup.draft_description);
            log::info!(
                "Shape {} gespeichert (Dichte {})",
                popup.shape_id,
                shape.density()
            );
            state.notify("Successfully saved density/description");
        }
        None => log::debug!("Speichern ignoriert: Shape {} entfernt", popup.shape_id),
    }

    selection::clear_selection(state);
}
