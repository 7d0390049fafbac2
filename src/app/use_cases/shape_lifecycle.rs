//! Erzeugen und Zerstören von Shapes.

use super::{selection, visibility};
use crate::app::tools::RowBinding;
use crate::app::AppState;
use crate::core::shape::clamp_density;
use crate::core::{geo, RowId, ShapeDraft, ShapeId};
use crate::render::{format_area, StyleCache};
use glam::DVec2;

/// Erzeugt aus einem abgeschlossenen Strich ein neues Shape und selektiert es.
///
/// Degenerierte Ringe (weniger als drei verschiedene Punkte) werden
/// stillschweigend verworfen.
pub fn create_from_stroke(
    state: &mut AppState,
    binding: RowBinding,
    ring: Vec<DVec2>,
) -> Option<ShapeId> {
    if geo::is_degenerate_ring(&ring) {
        log::debug!(
            "Strich für Zeile {} verworfen: degenerierter Ring ({} Punkte)",
            binding.row_id,
            ring.len()
        );
        return None;
    }

    let area_label = format_area(&ring, &state.options.number_format());
    let row_id = binding.row_id;
    // Zeile ist nach dem Zeichnen immer eingeblendet
    visibility::set_row_visibility(state, row_id, true);
    let uid = state.store.insert(
        ShapeDraft {
            row_id,
            name: binding.name,
            color: binding.color,
            ring,
            area_label,
            density: clamp_density(i64::from(state.options.default_density)),
        },
        true,
    );

    log::info!(
        "Shape {} für Zeile {} erstellt (Nr. {})",
        uid,
        row_id,
        state.store.get(uid).map_or(0, |s| s.drawing_number())
    );
    selection::select_shape(state, uid);
    Some(uid)
}

/// Löscht ein Shape, nummeriert die Geschwister neu und benachrichtigt.
///
/// Keine Operation, wenn das Shape nicht mehr existiert.
pub fn delete_shape(state: &mut AppState, cache: &mut StyleCache, shape_id: ShapeId) -> bool {
    let Some(removed) = state.store.remove(shape_id) else {
        log::debug!("Löschen ignoriert: Shape {} nicht vorhanden", shape_id);
        return false;
    };

    if state.selection.is_selected(shape_id) {
        selection::clear_selection(state);
    }
    cache.evict_shape(shape_id);

    log::info!(
        "Shape {} gelöscht (Zeile {}, verbleibend {})",
        shape_id,
        removed.row_id(),
        state.store.shape_count(removed.row_id())
    );
    state.notify("Drawing deleted");
    true
}

/// Entfernt alle Shapes einer Zeile aus Store, Selektion und Cache.
/// Gibt die Anzahl entfernter Shapes zurück.
pub(crate) fn discard_row(state: &mut AppState, cache: &mut StyleCache, row_id: RowId) -> usize {
    let removed = state.store.remove_row(row_id);
    if state
        .selection
        .selected
        .is_some_and(|selected| removed.iter().any(|s| s.uid() == selected))
    {
        selection::clear_selection(state);
    }
    for shape in &removed {
        cache.evict_shape(shape.uid());
    }
    removed.len()
}

/// Löscht alle Shapes einer Zeile.
pub fn clear_row(state: &mut AppState, cache: &mut StyleCache, row_id: RowId) {
    let count = discard_row(state, cache, row_id);
    if count == 0 {
        return;
    }
    log::info!("Zeile {}: {} Shapes gelöscht", row_id, count);
    state.notify(format!("{} drawing(s) cleared", count));
}

/// Löscht alle Shapes der Session.
pub fn clear_all(state: &mut AppState, cache: &mut StyleCache) {
    let removed = state.store.clear();
    selection::clear_selection(state);
    cache.reset(
        state.options.style_cache_capacity,
        state.options.label_metrics(),
    );
    if removed.is_empty() {
        return;
    }
    log::info!("Alle Shapes gelöscht ({})", removed.len());
    state.notify(format!("{} drawing(s) cleared", removed.len()));
}
