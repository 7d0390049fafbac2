//! Shape-Datensatz: eine Freihand-Polygon-Annotation zu einer Katalog-Zeile.

use chrono::{DateTime, Utc};
use glam::DVec2;
use serde::Serialize;
use std::sync::Arc;

/// ID einer Katalog-Zeile (Fremdschlüssel in den externen Katalog).
pub type RowId = u64;
/// Session-eindeutige Identität eines Shapes.
pub type ShapeId = u64;

/// Kleinster erlaubter Dichte-Wert.
pub const DENSITY_MIN: u8 = 1;
/// Größter erlaubter Dichte-Wert.
pub const DENSITY_MAX: u8 = 100;

/// Begrenzt einen Dichte-Wert auf 1..=100.
pub fn clamp_density(value: i64) -> u8 {
    value.clamp(DENSITY_MIN as i64, DENSITY_MAX as i64) as u8
}

/// Kürzt eine Beschreibung auf `max_chars` Zeichen (Unicode-Skalare, nicht Bytes).
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Eingabe für das Anlegen eines Shapes aus einem abgeschlossenen Strich.
#[derive(Debug, Clone)]
pub struct ShapeDraft {
    pub row_id: RowId,
    pub name: String,
    pub color: String,
    pub ring: Vec<DVec2>,
    pub area_label: String,
    pub density: u8,
}

/// Eine gezeichnete Annotation mit Metadaten.
///
/// Geometrie, Farbe, Name und Zeile sind nach der Erstellung unveränderlich;
/// Dichte und Beschreibung ändern sich nur über den Edit-Controller,
/// die laufende Nummer nur über die Neu-Nummerierung im Feature-Store.
#[derive(Debug, Clone)]
pub struct Shape {
    uid: ShapeId,
    row_id: RowId,
    geometry: Arc<[DVec2]>,
    color: String,
    name: String,
    timestamp: DateTime<Utc>,
    drawing_number: u32,
    density: u8,
    description: String,
    area_label: String,
}

impl Shape {
    pub(crate) fn new(
        uid: ShapeId,
        draft: ShapeDraft,
        timestamp: DateTime<Utc>,
        drawing_number: u32,
    ) -> Self {
        Self {
            uid,
            row_id: draft.row_id,
            geometry: draft.ring.into(),
            color: draft.color,
            name: draft.name,
            timestamp,
            drawing_number,
            density: draft.density,
            description: String::new(),
            area_label: draft.area_label,
        }
    }

    pub fn uid(&self) -> ShapeId {
        self.uid
    }

    pub fn row_id(&self) -> RowId {
        self.row_id
    }

    /// Ring in Lon/Lat (Arc für O(1)-Clone in die RenderScene).
    pub fn geometry(&self) -> &Arc<[DVec2]> {
        &self.geometry
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn drawing_number(&self) -> u32 {
        self.drawing_number
    }

    pub fn density(&self) -> u8 {
        self.density
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn area_label(&self) -> &str {
        &self.area_label
    }

    pub(crate) fn set_drawing_number(&mut self, number: u32) {
        self.drawing_number = number;
    }

    /// Übernimmt die im Popup bestätigten Metadaten.
    pub(crate) fn apply_edit(&mut self, density: u8, description: String) {
        self.density = density.clamp(DENSITY_MIN, DENSITY_MAX);
        self.description = description;
    }

    /// Read-only Zusammenfassung für die "Zur Zeichnung springen"-Liste.
    pub fn summary(&self) -> ShapeSummary {
        ShapeSummary {
            uid: self.uid,
            row_id: self.row_id,
            drawing_number: self.drawing_number,
            description: self.description.clone(),
            density: self.density,
            area_label: self.area_label.clone(),
        }
    }
}

/// Schnappschuss eines Shapes für die Zeilen-Liste im Katalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeSummary {
    pub uid: ShapeId,
    pub row_id: RowId,
    pub drawing_number: u32,
    pub description: String,
    pub density: u8,
    pub area_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_density() {
        assert_eq!(clamp_density(-5), 1);
        assert_eq!(clamp_density(0), 1);
        assert_eq!(clamp_density(75), 75);
        assert_eq!(clamp_density(250), 100);
    }

    #[test]
    fn test_truncate_description_counts_chars() {
        assert_eq!(truncate_description("Korallenriff", 5), "Koral");
        assert_eq!(truncate_description("m²m²m²", 4), "m²m²");
        assert_eq!(truncate_description("kurz", 50), "kurz");
    }
}
