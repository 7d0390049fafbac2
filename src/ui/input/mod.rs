//! Karten-Input-Handling: Zeiger, Touch, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `pointer`: Drag-Start/-Ende und Klicks (Strich oder Pan)
//! - `touch`: Touch-Punkte und Pinch-Gesten
//! - `zoom`: Scroll-Zoom auf Mausposition

mod pointer;
mod touch;
mod zoom;

use super::keyboard;
use crate::app::{AppIntent, PointerKind};
use crate::shared::{RenderScene, SessionOptions};
use glam::Vec2;

/// Modus des primären Drags auf der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    /// Freihand-Strich des angehängten Werkzeugs
    Stroke,
    /// Karte verschieben
    Pan,
}

/// Bündelt die gemeinsamen Parameter für Karten-Event-Verarbeitung.
pub(crate) struct MapInputContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub scene: &'a RenderScene,
    pub options: &'a SessionOptions,
}

/// Verwaltet den Input-Zustand der Karte (Drag-Modus)
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_mode: PrimaryDragMode::None,
        }
    }

    /// Sammelt Karten-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Zeiger-, Touch-, Scroll- und
    /// Tastatur-Interaktionen auf der Karte.
    pub fn collect_map_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        scene: &RenderScene,
        options: &SessionOptions,
    ) -> Vec<AppIntent> {
        let ctx = MapInputContext {
            ui,
            response,
            scene,
            options,
        };

        let mut events = Vec::new();

        let size = response.rect.size();
        events.push(AppIntent::ViewportResized {
            size: Vec2::new(size.x, size.y),
        });

        events.extend(keyboard::collect_keyboard_intents(
            ui,
            scene.popup.is_some(),
            scene.armed_row.is_some(),
        ));

        // Touch zuerst: der Guard muss das Werkzeug abhängen, bevor ein
        // zweiter Finger als Strich-Bewegung ankommt.
        self.handle_touch(&ctx, &mut events);
        self.handle_drag_start(&ctx, &mut events);
        self.handle_drag_update(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_clicks(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine egui-Bildschirmposition in kartenlokale Pixel um.
pub(crate) fn local_pos(pointer_pos: egui::Pos2, response: &egui::Response) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    Vec2::new(local.x, local.y)
}

/// Zeigerart des aktuellen Frames (egui unterscheidet Stift und Maus nicht).
pub(crate) fn pointer_kind(ui: &egui::Ui) -> PointerKind {
    if ui.input(|i| i.any_touches()) {
        PointerKind::Touch
    } else {
        PointerKind::Mouse
    }
}
