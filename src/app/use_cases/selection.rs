//! Use-Cases der Einzel-Selektion.
//!
//! Die Selektion ist unabhängig vom Zeichenmodus aktiv. Jede Selektion
//! öffnet das Bearbeitungs-Popup, jede Abwahl schließt es ohne Speichern.

use super::popup;
use crate::app::AppState;
use crate::core::ShapeId;
use glam::DVec2;

/// Selektiert ein gerendertes Shape und öffnet sein Popup.
///
/// Ein vorher offenes Popup wird ohne Übernahme verworfen.
pub fn select_shape(state: &mut AppState, shape_id: ShapeId) {
    if !state.store.is_rendered(shape_id) {
        log::debug!("Selektion ignoriert: Shape {} nicht gerendert", shape_id);
        return;
    }
    if state.selection.selected.is_some_and(|id| id != shape_id) {
        log::debug!("Vorheriges Popup verworfen");
    }
    state.selection.selected = Some(shape_id);
    popup::open(state, shape_id);
}

/// Selektiert das oberste gerenderte Shape am Punkt; leerer Klick hebt die Selektion auf.
pub fn select_at(state: &mut AppState, lonlat: DVec2) {
    match state.store.pick(lonlat) {
        Some(shape_id) => select_shape(state, shape_id),
        None => clear_selection(state),
    }
}

/// Hebt die Selektion auf und schließt das Popup (Entwurf wird verworfen).
pub fn clear_selection(state: &mut AppState) {
    state.selection.selected = None;
    popup::close(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShapeDraft;

    fn add_square(state: &mut AppState, x: f64) -> ShapeId {
        state.store.insert(
            ShapeDraft {
                row_id: 1,
                name: "Coral Reef".into(),
                color: "#FF0000".into(),
                ring: vec![
                    DVec2::new(x, 0.0),
                    DVec2::new(x + 1.0, 0.0),
                    DVec2::new(x + 1.0, 1.0),
                    DVec2::new(x, 1.0),
                ],
                area_label: "1 m²".into(),
                density: 50,
            },
            true,
        )
    }

    #[test]
    fn select_at_picks_shape_and_empty_click_clears() {
        let mut state = AppState::new();
        let uid = add_square(&mut state, 0.0);

        select_at(&mut state, DVec2::new(0.5, 0.5));
        assert_eq!(state.selection.selected, Some(uid));
        assert_eq!(state.ui.popup.as_ref().map(|p| p.shape_id), Some(uid));

        select_at(&mut state, DVec2::new(5.0, 5.0));
        assert_eq!(state.selection.count(), 0);
        assert!(state.ui.popup.is_none());
    }

    #[test]
    fn selecting_another_shape_replaces_popup() {
        let mut state = AppState::new();
        let first = add_square(&mut state, 0.0);
        let second = add_square(&mut state, 2.0);

        select_shape(&mut state, first);
        popup::set_draft_density(&mut state, 90);
        let first_instance = state.ui.popup.as_ref().map(|p| p.instance);

        select_shape(&mut state, second);

        let popup = state.ui.popup.as_ref().expect("Popup offen");
        assert_eq!(popup.shape_id, second);
        assert_ne!(Some(popup.instance), first_instance);
        assert_eq!(state.store.get(first).map(|s| s.density()), Some(50));
        assert_eq!(state.selection.count(), 1);
    }

    #[test]
    fn hidden_shape_cannot_be_selected() {
        let mut state = AppState::new();
        let uid = add_square(&mut state, 0.0);
        state.store.hide_row(1);

        select_shape(&mut state, uid);
        assert!(state.selection.selected.is_none());
    }
}
