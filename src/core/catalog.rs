//! Katalog-Zeilen (Ökosystem-Features und Aktivitäten) als externer Kollaborator.
//!
//! Der Katalog ist während einer Zeichen-Session read-only; Farbe und Name
//! werden beim Erstellen eines Shapes in dieses kopiert.

use super::shape::RowId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Kategorie einer Katalog-Zeile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowCategory {
    /// Ökosystem-Feature (z.B. Korallenriff, Seegraswiese)
    Feature,
    /// Aktivität bzw. Einwirkung (z.B. Fischerei, Tourismus)
    Activity,
}

impl RowCategory {
    /// Anzeigename für die Katalog-Liste.
    pub fn label(&self) -> &'static str {
        match self {
            RowCategory::Feature => "Features",
            RowCategory::Activity => "Activities",
        }
    }
}

/// Eine Zeile des Katalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub id: RowId,
    pub name: String,
    /// Hex-Farbe `#RRGGBB`
    pub color: String,
    pub category: RowCategory,
}

/// Geordnete Sammlung der Katalog-Zeilen.
#[derive(Debug, Clone, Default)]
pub struct RowCatalog {
    rows: IndexMap<RowId, CatalogRow>,
}

impl RowCatalog {
    pub fn new() -> Self {
        Self {
            rows: IndexMap::new(),
        }
    }

    /// Baut einen Katalog aus einer Zeilenliste (spätere Duplikate überschreiben frühere).
    pub fn from_rows(rows: impl IntoIterator<Item = CatalogRow>) -> Self {
        Self {
            rows: rows.into_iter().map(|row| (row.id, row)).collect(),
        }
    }

    /// Parst einen Katalog aus einem JSON-Array von Zeilen.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let rows: Vec<CatalogRow> = serde_json::from_str(json)?;
        Ok(Self::from_rows(rows))
    }

    /// Lädt `catalog.json`; bei Fehler `None` (Aufrufer wählt den Fallback).
    pub fn load_from_file(path: &std::path::Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match Self::from_json(&content) {
            Ok(catalog) => {
                log::info!(
                    "Katalog geladen aus: {} ({} Zeilen)",
                    path.display(),
                    catalog.len()
                );
                Some(catalog)
            }
            Err(e) => {
                log::warn!("Katalog-Datei fehlerhaft ({}): {:#}", path.display(), e);
                None
            }
        }
    }

    pub fn get(&self, id: RowId) -> Option<&CatalogRow> {
        self.rows.get(&id)
    }

    /// Entfernt eine Zeile (Reihenfolge der übrigen bleibt erhalten).
    pub fn remove(&mut self, id: RowId) -> Option<CatalogRow> {
        self.rows.shift_remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogRow> {
        self.rows.values()
    }

    /// Zeilen einer Kategorie in Katalog-Reihenfolge.
    pub fn by_category(&self, category: RowCategory) -> impl Iterator<Item = &CatalogRow> {
        self.rows.values().filter(move |r| r.category == category)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
