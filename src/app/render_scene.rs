//! Builder für Render-Szenen aus dem AppState.

use crate::app::use_cases::popup::popup_scale;
use crate::app::AppState;
use crate::render::{Rgba, StyleCache, StyleParams};
use crate::shared::{
    MeasurementView, PopupView, RenderScene, ShapeRenderItem, SketchPreview,
};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Styles kommen aus dem Cache; unveränderte Shapes behalten ihren
/// Descriptor über Frames hinweg.
pub fn build(state: &AppState, cache: &mut StyleCache) -> RenderScene {
    let map = &state.view.map;
    let zoom_level = map.zoom_level();

    let shapes = state
        .store
        .rendered_shapes()
        .map(|shape| {
            let selected = state.selection.is_selected(shape.uid());
            let params = StyleParams {
                zoom_level,
                show_labels: state.view.show_labels,
                is_selected: selected,
            };
            ShapeRenderItem {
                uid: shape.uid(),
                row_id: shape.row_id(),
                geometry: shape.geometry().clone(),
                style: cache.get_or_compute(shape, &params),
                selected,
            }
        })
        .collect();

    let sketch = match (state.session.sketch(), state.session.binding()) {
        (Some(sketch), Some(binding)) => Some(SketchPreview {
            points: sketch.points().to_vec(),
            color: Rgba::parse_hex(&binding.color).unwrap_or(Rgba::BLACK),
        }),
        _ => None,
    };

    let measurement = state
        .session
        .measurement()
        .map(|measurement| MeasurementView {
            anchor: measurement.anchor,
            text: measurement.text.clone(),
        });

    let popup = state.ui.popup.as_ref().and_then(|popup| {
        let shape = state.store.get(popup.shape_id)?;
        Some(PopupView {
            shape_id: popup.shape_id,
            instance: popup.instance,
            name: shape.name().to_string(),
            title: format!(
                "Drawing {} ({})",
                shape.drawing_number(),
                shape.area_label()
            ),
            color: Rgba::parse_hex(shape.color()).unwrap_or(Rgba::BLACK),
            draft_density: popup.draft_density,
            draft_description: popup.draft_description.clone(),
            description_max_chars: state.options.description_max_chars,
            anchor: popup.anchor,
            placement: popup.placement,
            offset_px: state.options.popup_offset_px,
            scale: popup_scale(zoom_level),
        })
    });

    RenderScene {
        view: map.clone(),
        shapes,
        sketch,
        measurement,
        popup,
        pinch_warning: state.touch.is_warning_visible(),
        armed_row: state.armed_row_id(),
        tool_attached: state.session.is_tool_attached(),
        show_labels: state.view.show_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::tools::RowBinding;
    use crate::app::use_cases::drawing;
    use crate::app::AppState;
    use crate::render::StyleCache;
    use glam::DVec2;
    use std::sync::Arc;

    fn state_with_triangle() -> AppState {
        let mut state = AppState::new();
        drawing::arm_row(
            &mut state,
            RowBinding {
                row_id: 1,
                color: "#FF0000".into(),
                name: "Coral Reef".into(),
            },
        );
        drawing::begin_stroke(&mut state, DVec2::new(-26.0, 60.0)).expect("Armed");
        drawing::extend_stroke(&mut state, DVec2::new(-25.9, 60.0)).expect("Stroking");
        drawing::extend_stroke(&mut state, DVec2::new(-25.95, 60.05)).expect("Stroking");
        drawing::finish_stroke(&mut state).expect("Stroking");
        state
    }

    #[test]
    fn build_reuses_cached_styles_between_frames() {
        let state = state_with_triangle();
        let mut cache = StyleCache::default();

        let first = build(&state, &mut cache);
        let second = build(&state, &mut cache);

        assert_eq!(first.shapes.len(), 1);
        assert!(Arc::ptr_eq(&first.shapes[0].style, &second.shapes[0].style));
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn build_exposes_popup_title_for_new_shape() {
        let state = state_with_triangle();
        let mut cache = StyleCache::default();

        let scene = build(&state, &mut cache);

        let popup = scene.popup.expect("Popup offen");
        assert!(popup.title.starts_with("Drawing 1 ("));
        assert_eq!(popup.draft_density, 50);
        assert!(scene.shapes[0].selected);
        assert!(scene.tool_attached);
    }

    #[test]
    fn hidden_rows_are_not_in_scene() {
        let mut state = state_with_triangle();
        let mut cache = StyleCache::default();
        crate::app::use_cases::visibility::set_row_visibility(&mut state, 1, false);

        let scene = build(&state, &mut cache);

        assert!(!scene.has_shapes());
        assert!(scene.popup.is_none());
    }
}
