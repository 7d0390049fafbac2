//! Abschluss-Batch einer Zeichen-Session für den externen Persistenz-Kollaborator.

use super::shape::{RowId, Shape};
use chrono::{DateTime, SecondsFormat, Utc};
use glam::DVec2;
use serde_json::{json, Value};

/// Ein Shape im Abschluss-Batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFeature {
    pub row_id: RowId,
    pub name: String,
    pub color: String,
    pub description: String,
    pub density: u8,
    pub drawing_number: u32,
    pub timestamp: DateTime<Utc>,
    /// Offener Ring in Lon/Lat
    pub ring: Vec<DVec2>,
}

impl BatchFeature {
    fn from_shape(shape: &Shape) -> Self {
        Self {
            row_id: shape.row_id(),
            name: shape.name().to_string(),
            color: shape.color().to_string(),
            description: shape.description().to_string(),
            density: shape.density(),
            drawing_number: shape.drawing_number(),
            timestamp: shape.timestamp(),
            ring: shape.geometry().to_vec(),
        }
    }

    /// GeoJSON-Polygon mit geschlossenem Ring.
    fn geometry_json(&self) -> Value {
        let mut coords: Vec<[f64; 2]> = self.ring.iter().map(|p| [p.x, p.y]).collect();
        if let (Some(first), Some(last)) = (coords.first().copied(), coords.last().copied()) {
            if first != last {
                coords.push(first);
            }
        }
        json!({ "type": "Polygon", "coordinates": [coords] })
    }

    fn to_geojson(&self) -> Value {
        json!({
            "type": "Feature",
            "geometry": self.geometry_json(),
            "properties": {
                "id": self.row_id,
                "name": self.name,
                "color": self.color,
                "description": self.description,
                "density": self.density,
                "drawingNumber": self.drawing_number,
                "timestamp": self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            }
        })
    }
}

/// Alle Shapes zum Zeitpunkt von "Finish session".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionBatch {
    pub features: Vec<BatchFeature>,
}

impl SessionBatch {
    /// Schnappschuss in Erstellungsreihenfolge.
    pub fn from_shapes<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Self {
        Self {
            features: shapes.into_iter().map(BatchFeature::from_shape).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// GeoJSON `FeatureCollection`.
    pub fn to_geojson(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": self.features.iter().map(BatchFeature::to_geojson).collect::<Vec<_>>(),
        })
    }

    /// GeoJSON als formatierter Text.
    pub fn to_geojson_string(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_geojson())?)
    }
}
