use crate::app::tools::{DrawSession, TouchGuard};
use crate::app::CommandLog;
use crate::core::{
    FeatureStore, RowCatalog, RowId, SessionBatch, ShapeId, ShapeSummary, VisibilityMap,
};
use crate::shared::SessionOptions;

use super::{SelectionState, UiState, ViewState};

/// Hauptzustand der Annotations-Session
pub struct AppState {
    /// Alle gezeichneten Shapes plus gerenderte Teilmenge
    pub store: FeatureStore,
    /// Show/Hide pro Katalog-Zeile
    pub visibility: VisibilityMap,
    /// Read-only Katalog (externer Kollaborator)
    pub catalog: RowCatalog,
    /// Zeichen-Session (Idle/Armed/Suspended/Stroking)
    pub session: DrawSession,
    /// Mehrfinger-Erkennung
    pub touch: TouchGuard,
    /// Selection-State
    pub selection: SelectionState,
    /// UI-State (Popup, Benachrichtigungen, Abschluss-Batch)
    pub ui: UiState,
    /// View-State
    pub view: ViewState,
    /// Laufzeit-Optionen
    pub options: SessionOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            store: FeatureStore::new(),
            visibility: VisibilityMap::new(),
            catalog: RowCatalog::new(),
            session: DrawSession::new(),
            touch: TouchGuard::new(),
            selection: SelectionState::new(),
            ui: UiState::new(),
            view: ViewState::new(&options),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Aktuell scharf geschaltete Zeile (Hervorhebung in der Liste).
    pub fn armed_row_id(&self) -> Option<RowId> {
        self.session.armed_row()
    }

    /// Anzahl der Shapes einer Zeile (Badge in der Liste).
    pub fn shape_count(&self, row_id: RowId) -> usize {
        self.store.shape_count(row_id)
    }

    /// Read-only Schnappschuss der Shapes einer Zeile für "Zur Zeichnung springen".
    pub fn row_snapshot(&self, row_id: RowId) -> Vec<ShapeSummary> {
        self.store.summaries(row_id)
    }

    pub fn selected_shape_id(&self) -> Option<ShapeId> {
        self.selection.selected
    }

    /// Reiht eine Benachrichtigung ein.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.ui
            .push_notification(message, self.options.max_notifications);
    }

    /// Entnimmt alle wartenden Benachrichtigungen.
    pub fn take_notifications(&mut self) -> Vec<String> {
        self.ui.notifications.drain(..).collect()
    }

    /// Übergibt den Abschluss-Batch an den Persistenz-Kollaborator.
    pub fn take_finished_batch(&mut self) -> Option<SessionBatch> {
        self.ui.finished_batch.take()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
