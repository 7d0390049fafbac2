//! Feature-Store: alle in der Session gezeichneten Shapes plus die gerenderte Teilmenge.
//!
//! Die vollständige Liste behält Shapes auch dann, wenn ihre Zeile ausgeblendet ist.
//! Sichtbarkeit wirkt ausschließlich auf `rendered`.

use super::geo;
use super::shape::{RowId, Shape, ShapeDraft, ShapeId, ShapeSummary};
use chrono::{DateTime, TimeDelta, Utc};
use glam::DVec2;
use indexmap::IndexSet;

/// Kanonische, veränderbare Sammlung der gezeichneten Shapes.
#[derive(Debug)]
pub struct FeatureStore {
    /// Alle Shapes in Erstellungsreihenfolge
    shapes: Vec<Shape>,
    /// Aktuell gerenderte Shapes (Zeichenreihenfolge folgt `shapes`)
    rendered: IndexSet<ShapeId>,
    next_uid: ShapeId,
    last_timestamp: Option<DateTime<Utc>>,
}

impl Default for FeatureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            rendered: IndexSet::new(),
            next_uid: 1,
            last_timestamp: None,
        }
    }

    /// Legt ein neues Shape an und vergibt Identität, Zeitstempel und laufende Nummer.
    ///
    /// `visible` gibt an, ob die Zeile aktuell eingeblendet ist.
    pub fn insert(&mut self, draft: ShapeDraft, visible: bool) -> ShapeId {
        let uid = self.next_uid;
        self.next_uid += 1;

        let drawing_number = self.shape_count(draft.row_id) as u32 + 1;
        let timestamp = self.next_timestamp();
        self.shapes
            .push(Shape::new(uid, draft, timestamp, drawing_number));
        if visible {
            self.rendered.insert(uid);
        }
        uid
    }

    /// Zeitstempel streng monoton innerhalb der Session.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_timestamp {
            Some(last) if now <= last => last + TimeDelta::milliseconds(1),
            _ => now,
        };
        self.last_timestamp = Some(stamp);
        stamp
    }

    pub fn get(&self, uid: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.uid() == uid)
    }

    pub(crate) fn get_mut(&mut self, uid: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.uid() == uid)
    }

    pub fn contains(&self, uid: ShapeId) -> bool {
        self.get(uid).is_some()
    }

    /// Alle Shapes in Erstellungsreihenfolge.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Alle Shapes einer Zeile.
    pub fn shapes_for_row(&self, row_id: RowId) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |s| s.row_id() == row_id)
    }

    /// Anzahl der Shapes einer Zeile (Badge im Katalog).
    pub fn shape_count(&self, row_id: RowId) -> usize {
        self.shapes_for_row(row_id).count()
    }

    /// Zeilen mit mindestens einem Shape, in Reihenfolge des ersten Auftretens.
    pub fn rows_with_shapes(&self) -> Vec<RowId> {
        let rows: IndexSet<RowId> = self.shapes.iter().map(Shape::row_id).collect();
        rows.into_iter().collect()
    }

    /// Read-only Zusammenfassungen einer Zeile, sortiert nach laufender Nummer.
    pub fn summaries(&self, row_id: RowId) -> Vec<ShapeSummary> {
        let mut summaries: Vec<ShapeSummary> =
            self.shapes_for_row(row_id).map(Shape::summary).collect();
        summaries.sort_by_key(|s| s.drawing_number);
        summaries
    }

    /// Entfernt ein Shape und nummeriert die Geschwister neu.
    pub fn remove(&mut self, uid: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.uid() == uid)?;
        let removed = self.shapes.remove(index);
        self.rendered.swap_remove(&uid);
        self.renumber_row(removed.row_id());
        Some(removed)
    }

    /// Entfernt alle Shapes einer Zeile.
    pub fn remove_row(&mut self, row_id: RowId) -> Vec<Shape> {
        let (removed, kept): (Vec<Shape>, Vec<Shape>) = std::mem::take(&mut self.shapes)
            .into_iter()
            .partition(|s| s.row_id() == row_id);
        self.shapes = kept;
        for shape in &removed {
            self.rendered.swap_remove(&shape.uid());
        }
        removed
    }

    /// Entfernt alle Shapes. Gibt die entfernten Shapes zurück.
    pub fn clear(&mut self) -> Vec<Shape> {
        self.rendered.clear();
        std::mem::take(&mut self.shapes)
    }

    /// Vergibt die laufenden Nummern einer Zeile neu als lückenlose Folge 1..=N
    /// (sortiert nach Erstellungszeitpunkt).
    pub fn renumber_row(&mut self, row_id: RowId) {
        let mut siblings: Vec<&mut Shape> = self
            .shapes
            .iter_mut()
            .filter(|s| s.row_id() == row_id)
            .collect();
        siblings.sort_by_key(|s| (s.timestamp(), s.uid()));
        for (index, shape) in siblings.into_iter().enumerate() {
            shape.set_drawing_number(index as u32 + 1);
        }
    }

    // ── Gerenderte Teilmenge ────────────────────────────────────────

    pub fn is_rendered(&self, uid: ShapeId) -> bool {
        self.rendered.contains(&uid)
    }

    /// Gerenderte Shapes in Zeichenreihenfolge.
    pub fn rendered_shapes(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| self.rendered.contains(&s.uid()))
    }

    /// Anzahl der gerenderten Shapes einer Zeile.
    pub fn rendered_count(&self, row_id: RowId) -> usize {
        self.rendered_shapes()
            .filter(|s| s.row_id() == row_id)
            .count()
    }

    /// Nimmt alle Shapes einer Zeile in die gerenderte Teilmenge auf.
    /// Bereits vorhandene werden übersprungen. Gibt die neu aufgenommenen IDs zurück.
    pub fn show_row(&mut self, row_id: RowId) -> Vec<ShapeId> {
        let mut added = Vec::new();
        for shape in self.shapes.iter().filter(|s| s.row_id() == row_id) {
            if self.rendered.insert(shape.uid()) {
                added.push(shape.uid());
            }
        }
        added
    }

    /// Entfernt alle Shapes einer Zeile aus der gerenderten Teilmenge.
    /// Gibt die entfernten IDs zurück.
    pub fn hide_row(&mut self, row_id: RowId) -> Vec<ShapeId> {
        let removed: Vec<ShapeId> = self
            .shapes_for_row(row_id)
            .map(Shape::uid)
            .filter(|uid| self.rendered.contains(uid))
            .collect();
        for uid in &removed {
            self.rendered.swap_remove(uid);
        }
        removed
    }

    /// Oberstes gerendertes Shape, das den Punkt enthält (zuletzt gezeichnet gewinnt).
    pub fn pick(&self, lonlat: DVec2) -> Option<ShapeId> {
        self.rendered_shapes()
            .rev()
            .find(|s| geo::point_in_ring(lonlat, s.geometry()))
            .map(Shape::uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn triangle_draft(row_id: RowId, offset: f64) -> ShapeDraft {
        ShapeDraft {
            row_id,
            name: format!("Zeile {row_id}"),
            color: "#FF0000".into(),
            ring: vec![
                DVec2::new(offset, 0.0),
                DVec2::new(offset + 1.0, 0.0),
                DVec2::new(offset + 0.5, 1.0),
            ],
            area_label: "1 m²".into(),
            density: 50,
        }
    }

    fn numbers(store: &FeatureStore, row_id: RowId) -> Vec<u32> {
        let mut n: Vec<u32> = store
            .shapes_for_row(row_id)
            .map(Shape::drawing_number)
            .collect();
        n.sort_unstable();
        n
    }

    #[test]
    fn test_insert_assigns_sequential_numbers_per_row() {
        let mut store = FeatureStore::new();
        store.insert(triangle_draft(1, 0.0), true);
        store.insert(triangle_draft(2, 0.0), true);
        store.insert(triangle_draft(1, 2.0), true);

        assert_eq!(numbers(&store, 1), vec![1, 2]);
        assert_eq!(numbers(&store, 2), vec![1]);
        assert_eq!(store.shape_count(1), 2);
    }

    #[test]
    fn test_timestamps_are_strictly_increasing() {
        let mut store = FeatureStore::new();
        for i in 0..10 {
            store.insert(triangle_draft(1, i as f64), true);
        }
        let stamps: Vec<_> = store.shapes().iter().map(Shape::timestamp).collect();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_remove_renumbers_siblings() {
        let mut store = FeatureStore::new();
        let first = store.insert(triangle_draft(1, 0.0), true);
        let second = store.insert(triangle_draft(1, 2.0), true);

        store.remove(first).expect("Shape vorhanden");

        assert_eq!(store.get(second).map(Shape::drawing_number), Some(1));
        assert!(!store.is_rendered(first));
    }

    #[test]
    fn test_hide_and_show_row_keep_full_list() {
        let mut store = FeatureStore::new();
        let a = store.insert(triangle_draft(1, 0.0), true);
        let b = store.insert(triangle_draft(2, 0.0), true);
        let c = store.insert(triangle_draft(1, 2.0), true);

        assert_eq!(store.hide_row(1), vec![a, c]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.rendered_count(1), 0);

        assert_eq!(store.show_row(1), vec![a, c]);
        assert!(store.show_row(1).is_empty(), "show_row ist idempotent");
        let order: Vec<ShapeId> = store.rendered_shapes().map(Shape::uid).collect();
        assert_eq!(order, vec![a, b, c]);
    }

    #[test]
    fn test_render_order_follows_creation_after_repeated_toggles() {
        let mut store = FeatureStore::new();
        let ids: Vec<ShapeId> = (0..6)
            .map(|i| store.insert(triangle_draft(i % 3 + 1, 0.0), true))
            .collect();

        store.hide_row(2);
        store.hide_row(1);
        store.show_row(2);
        store.hide_row(3);
        store.show_row(3);
        store.show_row(1);

        let order: Vec<ShapeId> = store.rendered_shapes().map(Shape::uid).collect();
        assert_eq!(order, ids);
        // Alle Dreiecke liegen übereinander: zuletzt gezeichnetes liegt oben
        assert_eq!(store.pick(DVec2::new(0.5, 0.3)), ids.last().copied());
    }

    #[test]
    fn test_pick_prefers_topmost_rendered_shape() {
        let mut store = FeatureStore::new();
        let lower = store.insert(triangle_draft(1, 0.0), true);
        let upper = store.insert(triangle_draft(2, 0.0), true);
        let inside = DVec2::new(0.5, 0.3);

        assert_eq!(store.pick(inside), Some(upper));
        store.hide_row(2);
        assert_eq!(store.pick(inside), Some(lower));
        assert_eq!(store.pick(DVec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_remove_row_and_clear() {
        let mut store = FeatureStore::new();
        store.insert(triangle_draft(1, 0.0), true);
        store.insert(triangle_draft(2, 0.0), true);
        store.insert(triangle_draft(1, 2.0), true);

        assert_eq!(store.remove_row(1).len(), 2);
        assert_eq!(store.rows_with_shapes(), vec![2]);
        assert_eq!(store.clear().len(), 1);
        assert!(store.is_empty());
        assert_eq!(store.rendered_shapes().count(), 0);
    }

    proptest! {
        #[test]
        fn prop_drawing_numbers_stay_contiguous(
            ops in proptest::collection::vec((any::<bool>(), 0usize..16), 1..60)
        ) {
            let mut store = FeatureStore::new();
            for (create, pick) in ops {
                let ids: Vec<ShapeId> = store.shapes_for_row(7).map(Shape::uid).collect();
                if create || ids.is_empty() {
                    store.insert(triangle_draft(7, pick as f64), true);
                } else {
                    store.remove(ids[pick % ids.len()]);
                }
                let expected: Vec<u32> = (1..=store.shape_count(7) as u32).collect();
                prop_assert_eq!(numbers(&store, 7), expected);
            }
        }
    }
}
