use crate::app::tools::RowBinding;
use crate::core::{RowId, ShapeId};
use glam::{DVec2, Vec2};
use std::time::Instant;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
///
/// Positionen sind hier bereits in Lon/Lat umgerechnet.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Zeichen-Session ───────────────────────────────────────────
    /// Frisches Werkzeug an eine Zeile binden
    ArmRow { binding: RowBinding },
    /// Werkzeug abhängen
    DisarmRow,
    /// Strich beginnen
    BeginStroke { lonlat: DVec2 },
    /// Punkt an laufenden Strich anhängen (aktualisiert Live-Messung)
    ExtendStroke { lonlat: DVec2 },
    /// Strich abschließen (erzeugt ggf. ein Shape)
    FinishStroke,

    // ── Touch ─────────────────────────────────────────────────────
    /// Touch-Punkt registrieren (ggf. Werkzeug abhängen)
    RegisterTouch { id: u64 },
    /// Touch-Punkt freigeben (ggf. Werkzeug wieder anhängen)
    ReleaseTouch { id: u64 },
    /// Pinch-Warnung nach Ablauf ausblenden
    ExpirePinchWarning { now: Instant },
    /// Pinch-Warnung schließen
    DismissPinchWarning,

    // ── Sichtbarkeit & Katalog ────────────────────────────────────
    /// Sichtbarkeit einer Zeile setzen und Feature-Store abgleichen
    SetRowVisibility { row_id: RowId, visible: bool },
    /// Zeile löschen: Disarm, Shapes verwerfen, Selektion prüfen
    CascadeRowDeletion { row_id: RowId },

    // ── Selektion & Popup ─────────────────────────────────────────
    /// Oberstes gerendertes Shape am Punkt selektieren (leer = abwählen)
    SelectAt { lonlat: DVec2 },
    /// Bestimmtes Shape selektieren
    SelectShape { shape_id: ShapeId },
    /// Selektion aufheben (schließt Popup ohne Speichern)
    ClearSelection,
    /// Entwurfs-Dichte setzen
    SetPopupDensity { value: i64 },
    /// Entwurfs-Beschreibung setzen
    SetPopupDescription { text: String },
    /// Entwurf auf das Shape übernehmen
    SavePopup,

    // ── Shapes ────────────────────────────────────────────────────
    /// Einzelnes Shape löschen
    DeleteShape { shape_id: ShapeId },
    /// Alle Shapes einer Zeile löschen
    ClearRow { row_id: RowId },
    /// Alle Shapes löschen
    ClearAll,
    /// Session abschließen
    FinishSession,

    // ── Kamera & Viewport ─────────────────────────────────────────
    /// Kamera auf ein Shape einpassen
    FitToShape { shape_id: ShapeId },
    /// Labels umschalten
    ToggleLabels,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Zoom zum Fokuspunkt (Screen)
    ZoomTowards { delta: f64, focus: Vec2 },
    /// Karte um Pixel-Delta verschieben
    PanView { delta: Vec2 },
    /// Kamera auf Startposition
    ResetView,
    /// Kamera auf die ganze Welt einpassen
    FitWorld,
    /// Viewport-Größe setzen
    SetViewportSize { size: Vec2 },
}
