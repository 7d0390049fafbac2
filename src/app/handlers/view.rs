//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ShapeId;
use glam::Vec2;

/// Setzt die Kamera auf den Startzustand zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Passt die Kamera auf die ganze Welt an.
pub fn fit_world(state: &mut AppState) {
    use_cases::camera::fit_world(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: Vec2) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt zum Fokuspunkt (Screen-Pixel) hin.
pub fn zoom_towards(state: &mut AppState, delta: f64, focus: Vec2) {
    use_cases::camera::zoom_towards(state, delta, focus);
}

pub fn fit_to_shape(state: &mut AppState, shape_id: ShapeId) {
    use_cases::camera::fit_to_shape(state, shape_id);
}

pub fn toggle_labels(state: &mut AppState) {
    use_cases::camera::toggle_labels(state);
}
