//! Render-Szene als expliziter Übergabevertrag zwischen App und UI-Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.
//! Alle Positionen sind Lon/Lat; die Umrechnung erfolgt über `view`.

use crate::core::{MapView, RowId, ShapeId};
use crate::render::{Rgba, StyleDescriptor};
use glam::DVec2;
use std::sync::Arc;

/// Lage des Popups relativ zum Anker-Vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupPlacement {
    /// Popup über dem obersten Vertex, Pfeil zeigt nach unten
    Above,
    /// Popup unter dem untersten Vertex, Pfeil zeigt nach oben
    Below,
}

/// Ein gerendertes Shape mit gecachtem Style.
#[derive(Debug, Clone)]
pub struct ShapeRenderItem {
    pub uid: ShapeId,
    pub row_id: RowId,
    pub geometry: Arc<[DVec2]>,
    pub style: Arc<StyleDescriptor>,
    pub selected: bool,
}

/// Vorschau des laufenden Strichs.
#[derive(Debug, Clone)]
pub struct SketchPreview {
    pub points: Vec<DVec2>,
    pub color: Rgba,
}

/// Live-Flächenanzeige am Zeiger.
#[derive(Debug, Clone)]
pub struct MeasurementView {
    pub anchor: DVec2,
    pub text: String,
}

/// Read-only Daten des Bearbeitungs-Popups.
#[derive(Debug, Clone)]
pub struct PopupView {
    pub shape_id: ShapeId,
    /// Neue Instanz = neues egui-Fenster (kein Übernehmen alter Widget-Zustände)
    pub instance: u64,
    pub name: String,
    /// z.B. "Drawing 2 (1,2 km²)"
    pub title: String,
    pub color: Rgba,
    pub draft_density: u8,
    pub draft_description: String,
    pub description_max_chars: usize,
    pub anchor: DVec2,
    pub placement: PopupPlacement,
    pub offset_px: f32,
    pub scale: f32,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub view: MapView,
    /// Gerenderte Shapes in Zeichenreihenfolge (unten nach oben)
    pub shapes: Vec<ShapeRenderItem>,
    pub sketch: Option<SketchPreview>,
    pub measurement: Option<MeasurementView>,
    pub popup: Option<PopupView>,
    /// Pinch-Warnung sichtbar
    pub pinch_warning: bool,
    /// Gebundene Zeile (Hervorhebung)
    pub armed_row: Option<RowId>,
    /// Zeichenwerkzeug angehängt (Karte lässt sich dann nicht ziehen)
    pub tool_attached: bool,
    pub show_labels: bool,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt Shapes gezeichnet werden.
    pub fn has_shapes(&self) -> bool {
        !self.shapes.is_empty()
    }
}
