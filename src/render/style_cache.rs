//! Begrenzter LRU-Cache für berechnete Styles.
//!
//! Gleiche Eingaben liefern denselben `Arc` zurück, solange der Eintrag
//! nicht verdrängt wurde. Einträge gelöschter Shapes werden explizit entfernt.

use super::style::{compute_style, LabelMetrics, StyleDescriptor, StyleParams};
use crate::core::{Shape, ShapeId};
use indexmap::IndexMap;
use std::sync::Arc;

/// Zusammengesetzter Cache-Schlüssel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleKey {
    pub shape_id: ShapeId,
    pub zoom_bucket: i32,
    pub show_labels: bool,
    pub is_selected: bool,
    pub drawing_number: u32,
    pub area_label: String,
}

impl StyleKey {
    pub fn new(shape: &Shape, params: &StyleParams) -> Self {
        Self {
            shape_id: shape.uid(),
            zoom_bucket: params.zoom_bucket(),
            show_labels: params.show_labels,
            is_selected: params.is_selected,
            drawing_number: shape.drawing_number(),
            area_label: shape.area_label().to_string(),
        }
    }
}

/// Style-Cache einer Session (Reihenfolge in der Map = LRU-Reihenfolge, ältester zuerst).
#[derive(Debug)]
pub struct StyleCache {
    entries: IndexMap<StyleKey, Arc<StyleDescriptor>>,
    capacity: usize,
    metrics: LabelMetrics,
    hits: u64,
    misses: u64,
}

impl StyleCache {
    /// Erstellt einen leeren Cache (Kapazität mindestens 1).
    pub fn new(capacity: usize, metrics: LabelMetrics) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: IndexMap::with_capacity(capacity.min(4096)),
            capacity,
            metrics,
            hits: 0,
            misses: 0,
        }
    }

    /// Liefert den Style aus dem Cache oder berechnet und speichert ihn.
    pub fn get_or_compute(&mut self, shape: &Shape, params: &StyleParams) -> Arc<StyleDescriptor> {
        let key = StyleKey::new(shape, params);

        if let Some(index) = self.entries.get_index_of(&key) {
            self.hits += 1;
            let newest = self.entries.len() - 1;
            self.entries.move_index(index, newest);
            if let Some((_, style)) = self.entries.get_index(newest) {
                return style.clone();
            }
        }

        self.misses += 1;
        let style = Arc::new(compute_style(shape, params, &self.metrics));
        while self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(key, style.clone());
        style
    }

    /// Entfernt alle Einträge eines Shapes. Gibt die Anzahl zurück.
    pub fn evict_shape(&mut self, shape_id: ShapeId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.shape_id != shape_id);
        before - self.entries.len()
    }

    /// Leert den Cache samt Statistik und übernimmt neue Label-Metriken.
    pub fn reset(&mut self, capacity: usize, metrics: LabelMetrics) {
        self.entries.clear();
        self.capacity = capacity.max(1);
        self.metrics = metrics;
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl Default for StyleCache {
    fn default() -> Self {
        Self::new(
            crate::shared::options::STYLE_CACHE_CAPACITY,
            LabelMetrics::default(),
        )
    }
}
