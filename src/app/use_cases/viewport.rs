//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;
use glam::Vec2;

/// Aktualisiert die gespeicherte Viewport-Größe (negative Werte werden zu 0).
pub fn resize(state: &mut AppState, size: Vec2) {
    state.view.map.viewport_size = size.max(Vec2::ZERO);
}
