//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::state::ViewState;
use crate::app::AppState;
use crate::core::{Extent, ShapeId};
use glam::Vec2;

/// Setzt die Kamera auf die Startposition aus den Optionen zurück.
pub fn reset_view(state: &mut AppState) {
    let viewport_size = state.view.map.viewport_size;
    let show_labels = state.view.show_labels;
    state.view = ViewState::new(&state.options);
    state.view.map.viewport_size = viewport_size;
    state.view.show_labels = show_labels;
}

/// Passt die Kamera auf die ganze Welt an ("Home").
pub fn fit_world(state: &mut AppState) {
    state.view.map.fit_extent(
        &Extent::WORLD,
        state.options.fit_padding_px,
        state.options.zoom_max,
    );
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.map.zoom_by(state.options.zoom_step);
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.map.zoom_by(-state.options.zoom_step);
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    state.view.map.pan_pixels(delta);
}

/// Zoomt so, dass der Punkt unter `focus` stabil bleibt.
pub fn zoom_towards(state: &mut AppState, delta: f64, focus: Vec2) {
    state.view.map.zoom_towards(delta, focus);
}

/// Passt die Kamera auf die Ausdehnung eines Shapes an.
///
/// Keine Operation, wenn das Shape nicht (mehr) existiert.
pub fn fit_to_shape(state: &mut AppState, shape_id: ShapeId) {
    let Some(extent) = state
        .store
        .get(shape_id)
        .and_then(|shape| Extent::from_points(shape.geometry()))
    else {
        log::debug!("Fit auf Shape {} ignoriert: nicht vorhanden", shape_id);
        return;
    };

    state.view.map.fit_extent(
        &extent,
        state.options.fit_padding_px,
        state.options.fit_max_zoom,
    );
}

/// Schaltet die Labels an den Shapes um.
pub fn toggle_labels(state: &mut AppState) {
    state.view.show_labels = !state.view.show_labels;
    log::info!("Labels: {}", if state.view.show_labels { "an" } else { "aus" });
}
