//! Sichtbarkeits-Map: Zeilen-ID → eingeblendet/ausgeblendet.

use super::shape::RowId;
use std::collections::HashMap;

/// Show/Hide-Zustand pro Katalog-Zeile (Checkbox in der Liste).
///
/// Nicht eingetragene Zeilen gelten als ausgeblendet.
#[derive(Debug, Clone, Default)]
pub struct VisibilityMap {
    rows: HashMap<RowId, bool>,
}

impl VisibilityMap {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    pub fn is_visible(&self, row_id: RowId) -> bool {
        self.rows.get(&row_id).copied().unwrap_or(false)
    }

    /// Setzt den Zustand und gibt den vorherigen zurück.
    pub fn set(&mut self, row_id: RowId, visible: bool) -> bool {
        self.rows.insert(row_id, visible).unwrap_or(false)
    }

    /// Vergisst eine Zeile (z.B. nach Löschen im Katalog).
    pub fn forget(&mut self, row_id: RowId) {
        self.rows.remove(&row_id);
    }

    /// Alle aktuell eingeblendeten Zeilen.
    pub fn visible_rows(&self) -> impl Iterator<Item = RowId> + '_ {
        self.rows
            .iter()
            .filter_map(|(id, visible)| visible.then_some(*id))
    }
}
