//! Use-Cases der Zeichen-Session: Arm/Disarm, Strich-Lebenszyklus, Session-Abschluss.

use super::{shape_lifecycle, visibility};
use crate::app::tools::{LiveMeasurement, RowBinding, SessionError};
use crate::app::AppState;
use crate::core::SessionBatch;
use crate::render::format_area_m2;
use glam::DVec2;

/// Bindet ein frisches Werkzeug an eine Zeile und blendet sie ein.
///
/// War vorher eine andere Zeile gebunden, gilt für sie die Disarm-Regel.
pub fn arm_row(state: &mut AppState, binding: RowBinding) {
    let row_id = binding.row_id;
    let previous = state.session.arm(binding);

    if let Some(previous) = previous {
        if previous.cancelled_stroke {
            log::debug!("Laufender Strich für Zeile {} verworfen", previous.binding.row_id);
        }
        if previous.binding.row_id != row_id {
            visibility::hide_if_empty(state, previous.binding.row_id);
        }
    }

    visibility::set_row_visibility(state, row_id, true);
    log::info!("Zeichnen für Zeile {} aktiviert", row_id);
}

/// Hängt das Werkzeug ab; eine Zeile ohne Shapes wird wieder ausgeblendet.
pub fn disarm_row(state: &mut AppState) {
    let Some(detached) = state.session.disarm() else {
        return;
    };
    if detached.cancelled_stroke {
        log::debug!("Laufender Strich für Zeile {} verworfen", detached.binding.row_id);
    }
    visibility::hide_if_empty(state, detached.binding.row_id);
    log::info!("Zeichnen für Zeile {} beendet", detached.binding.row_id);
}

pub fn begin_stroke(state: &mut AppState, lonlat: DVec2) -> Result<(), SessionError> {
    state.session.begin_stroke(lonlat)?;
    log::trace!("Strich beginnt bei {:?}", lonlat);
    Ok(())
}

/// Hängt einen Punkt an und aktualisiert die Live-Flächenmessung am Zeiger.
pub fn extend_stroke(state: &mut AppState, lonlat: DVec2) -> Result<(), SessionError> {
    let area = state.session.extend_stroke(lonlat)?.area_m2();
    let text = format_area_m2(area, &state.options.number_format());
    log::trace!("Live-Messung: {}", text);
    state.session.set_measurement(LiveMeasurement {
        anchor: lonlat,
        text,
    });
    Ok(())
}

/// Schließt den Strich ab und legt ggf. ein Shape an.
pub fn finish_stroke(state: &mut AppState) -> Result<(), SessionError> {
    let (binding, ring) = state.session.finish_stroke()?;
    shape_lifecycle::create_from_stroke(state, binding, ring);
    Ok(())
}

/// Schließt die Session ab: Zeichnen beenden, Batch für die Persistenz
/// bereitstellen und alle Zeilen mit Shapes ausblenden.
///
/// Das Leeren des Stores übernimmt der Persistenz-Kollaborator nach dem Speichern.
pub fn finish_session(state: &mut AppState) {
    if state.store.is_empty() {
        state.notify("No drawings to save.");
        return;
    }

    disarm_row(state);
    let batch = SessionBatch::from_shapes(state.store.shapes());
    for row_id in state.store.rows_with_shapes() {
        visibility::set_row_visibility(state, row_id, false);
    }

    log::info!("Session abgeschlossen: {} Shapes bereitgestellt", batch.len());
    state.notify(format!("{} drawing(s) ready to save", batch.len()));
    state.ui.finished_batch = Some(batch);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(row_id: u64) -> RowBinding {
        RowBinding {
            row_id,
            color: "#3366FF".into(),
            name: format!("Zeile {row_id}"),
        }
    }

    fn draw_triangle(state: &mut AppState) {
        begin_stroke(state, DVec2::new(-26.0, 60.0)).expect("Armed");
        extend_stroke(state, DVec2::new(-25.9, 60.0)).expect("Stroking");
        extend_stroke(state, DVec2::new(-25.95, 60.05)).expect("Stroking");
        finish_stroke(state).expect("Stroking");
    }

    #[test]
    fn arm_shows_row_and_switch_hides_empty_previous() {
        let mut state = AppState::new();

        arm_row(&mut state, binding(1));
        assert!(state.visibility.is_visible(1));

        arm_row(&mut state, binding(2));
        assert!(!state.visibility.is_visible(1));
        assert!(state.visibility.is_visible(2));
        assert_eq!(state.armed_row_id(), Some(2));
    }

    #[test]
    fn disarm_keeps_row_with_shapes_visible() {
        let mut state = AppState::new();
        arm_row(&mut state, binding(1));
        draw_triangle(&mut state);

        disarm_row(&mut state);

        assert!(state.visibility.is_visible(1));
        assert_eq!(state.store.rendered_count(1), 1);
        assert!(state.armed_row_id().is_none());
    }

    #[test]
    fn extend_updates_live_measurement() {
        let mut state = AppState::new();
        arm_row(&mut state, binding(1));
        begin_stroke(&mut state, DVec2::new(-26.0, 60.0)).expect("Armed");
        extend_stroke(&mut state, DVec2::new(-25.9, 60.0)).expect("Stroking");
        extend_stroke(&mut state, DVec2::new(-25.95, 60.05)).expect("Stroking");

        let measurement = state.session.measurement().expect("Messung vorhanden");
        assert!(measurement.text.ends_with("km²"));
        assert_eq!(measurement.anchor, DVec2::new(-25.95, 60.05));

        finish_stroke(&mut state).expect("Stroking");
        assert!(state.session.measurement().is_none());
    }

    #[test]
    fn stroke_without_arm_is_rejected() {
        let mut state = AppState::new();
        assert!(begin_stroke(&mut state, DVec2::ZERO).is_err());
        assert!(finish_stroke(&mut state).is_err());
    }

    #[test]
    fn finish_session_parks_batch_and_hides_rows() {
        let mut state = AppState::new();
        arm_row(&mut state, binding(1));
        draw_triangle(&mut state);

        finish_session(&mut state);

        let batch = state.take_finished_batch().expect("Batch bereitgestellt");
        assert_eq!(batch.len(), 1);
        assert!(!state.visibility.is_visible(1));
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.store.rendered_count(1), 0);
        assert!(state.armed_row_id().is_none());
    }

    #[test]
    fn finish_empty_session_only_notifies() {
        let mut state = AppState::new();

        finish_session(&mut state);

        assert!(state.take_finished_batch().is_none());
        assert_eq!(
            state.take_notifications(),
            vec!["No drawings to save.".to_string()]
        );
    }
}
