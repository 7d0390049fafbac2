//! Handler für das Löschen von Shapes.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{RowId, ShapeId};
use crate::render::StyleCache;

pub fn delete(state: &mut AppState, cache: &mut StyleCache, shape_id: ShapeId) {
    use_cases::shape_lifecycle::delete_shape(state, cache, shape_id);
}

pub fn clear_row(state: &mut AppState, cache: &mut StyleCache, row_id: RowId) {
    use_cases::shape_lifecycle::clear_row(state, cache, row_id);
}

pub fn clear_all(state: &mut AppState, cache: &mut StyleCache) {
    use_cases::shape_lifecycle::clear_all(state, cache);
}
