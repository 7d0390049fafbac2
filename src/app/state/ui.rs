use crate::core::{SessionBatch, ShapeId};
pub use crate::shared::PopupPlacement;
use glam::DVec2;
use std::collections::VecDeque;

/// Der eine Popup-Slot: Bearbeitungsentwurf für das selektierte Shape.
///
/// Änderungen am Entwurf erreichen das Shape nur über "Save".
#[derive(Debug, Clone, PartialEq)]
pub struct PopupState {
    pub shape_id: ShapeId,
    /// Fortlaufende Instanz-Nummer (neues Popup = neue egui-Id)
    pub instance: u64,
    /// Anker-Vertex (Lon/Lat)
    pub anchor: DVec2,
    pub placement: PopupPlacement,
    pub draft_density: u8,
    pub draft_description: String,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Offenes Bearbeitungs-Popup (höchstens eins)
    pub popup: Option<PopupState>,
    /// Anzahl bisher geöffneter Popups
    pub popup_instances: u64,
    /// Wartende Benachrichtigungen (älteste zuerst)
    pub notifications: VecDeque<String>,
    /// Abschluss-Batch, bis der Persistenz-Kollaborator ihn abholt
    pub finished_batch: Option<SessionBatch>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            popup: None,
            popup_instances: 0,
            notifications: VecDeque::new(),
            finished_batch: None,
        }
    }

    /// Reiht eine Benachrichtigung ein; bei Überlauf fällt die älteste weg.
    pub fn push_notification(&mut self, message: impl Into<String>, max: usize) {
        let message = message.into();
        log::info!("Benachrichtigung: {}", message);
        while self.notifications.len() >= max.max(1) {
            self.notifications.pop_front();
        }
        self.notifications.push_back(message);
    }
}
