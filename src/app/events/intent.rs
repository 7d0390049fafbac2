use crate::core::{RowId, ShapeId};
use glam::Vec2;
use std::time::Instant;

/// Art des Zeigers, der einen Strich beginnt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
    Touch,
}

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Screen-Positionen sind Pixel relativ zur linken oberen Ecke der Karte.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Katalog-Kollaborator ──────────────────────────────────────
    /// Zeile zum Zeichnen scharf schalten (`armRow`)
    ArmRowRequested { row_id: RowId },
    /// Zeichen-Button einer Zeile umschalten (Start/Stop)
    ToggleDrawingRequested { row_id: RowId },
    /// Zeichnen beenden (`disarmRow`)
    DisarmRequested,
    /// Checkbox einer Zeile geändert (`onVisibilityChange`)
    VisibilityChanged { row_id: RowId, visible: bool },
    /// Zeile im Katalog gelöscht (`onRowDeleted`)
    RowDeleted { row_id: RowId },

    // ── Zeiger & Touch ───────────────────────────────────────────
    /// Primärer Zeiger gedrückt
    PointerPressed { pos: Vec2, kind: PointerKind },
    /// Zeiger bewegt (jede Bewegung, keine Drosselung)
    PointerMoved { pos: Vec2 },
    /// Primärer Zeiger losgelassen
    PointerReleased { pos: Vec2 },
    /// Karte gezogen (Pan, nur ohne angehängtes Zeichenwerkzeug)
    MapDragged { delta: Vec2 },
    /// Klick ohne Drag auf die Karte (Selektion)
    MapClicked { pos: Vec2 },
    /// Touch-Punkt aufgesetzt
    TouchStarted { id: u64 },
    /// Touch-Punkt abgehoben oder abgebrochen
    TouchEnded { id: u64 },

    // ── Popup ─────────────────────────────────────────────────────
    /// Dichte-Slider verändert
    PopupDensityChanged { value: i64 },
    /// Beschreibung verändert
    PopupDescriptionChanged { text: String },
    /// "Save" im Popup
    PopupSaveRequested,
    /// "Delete" im Popup
    PopupDeleteRequested,
    /// "Close" im Popup (verwirft Änderungen)
    PopupCloseRequested,

    // ── Zeichnungs-Liste & Session ────────────────────────────────
    /// Einzelnes Shape aus der Liste löschen
    DeleteShapeRequested { shape_id: ShapeId },
    /// Alle Shapes einer Zeile löschen
    ClearRowRequested { row_id: RowId },
    /// Alle Shapes löschen
    ClearAllRequested,
    /// Session abschließen (Batch für Persistenz bereitstellen)
    FinishSessionRequested,
    /// Karte auf ein Shape einpassen und es selektieren
    JumpToShapeRequested { shape_id: ShapeId },
    /// Labels ein-/ausblenden
    ShowLabelsToggled,

    // ── Kamera & Viewport ─────────────────────────────────────────
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Mausrad: Zoom-Delta in Stufen, zum Cursor hin
    ScrollZoom { delta: f64, focus: Vec2 },
    /// Ansicht auf Startposition zurücksetzen
    ResetViewRequested,
    /// "Home": ganze Welt anzeigen
    FitWorldRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: Vec2 },

    // ── Zeit ──────────────────────────────────────────────────────
    /// Frame-Takt (Auto-Hide der Pinch-Warnung)
    FrameTick { now: Instant },
    /// Pinch-Warnung manuell geschlossen
    PinchWarningDismissed,
}
