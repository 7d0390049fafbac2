//! Drag-Start/-Ende und Klicks: Freihand-Strich bei angehängtem Werkzeug, sonst Pan.

use super::{local_pos, pointer_kind, InputState, MapInputContext, PrimaryDragMode};
use crate::app::AppIntent;

impl InputState {
    /// Erkennt Drag-Beginn und bestimmt den Drag-Modus.
    pub(crate) fn handle_drag_start(
        &mut self,
        ctx: &MapInputContext,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        if !ctx.scene.tool_attached {
            self.primary_drag_mode = PrimaryDragMode::Pan;
            return;
        }

        // press_origin() liefert die exakte Druckposition vor der Drag-Schwelle
        let press_pos = ctx
            .ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| ctx.response.interact_pointer_pos());
        if let Some(pointer_pos) = press_pos {
            events.push(AppIntent::PointerPressed {
                pos: local_pos(pointer_pos, ctx.response),
                kind: pointer_kind(ctx.ui),
            });
            self.primary_drag_mode = PrimaryDragMode::Stroke;
        }
    }

    /// Verarbeitet Bewegungen während eines aktiven Drags.
    pub(crate) fn handle_drag_update(
        &mut self,
        ctx: &MapInputContext,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.dragged_by(egui::PointerButton::Primary) {
            return;
        }

        match self.primary_drag_mode {
            PrimaryDragMode::Stroke => {
                if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                    events.push(AppIntent::PointerMoved {
                        pos: local_pos(pointer_pos, ctx.response),
                    });
                }
            }
            PrimaryDragMode::Pan => {
                let delta = ctx.response.drag_delta();
                if delta != egui::Vec2::ZERO {
                    events.push(AppIntent::MapDragged {
                        delta: glam::Vec2::new(delta.x, delta.y),
                    });
                }
            }
            PrimaryDragMode::None => {}
        }
    }

    /// Beendet den Drag; ein laufender Strich wird abgeschlossen.
    pub(crate) fn handle_drag_end(&mut self, ctx: &MapInputContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }

        if self.primary_drag_mode == PrimaryDragMode::Stroke {
            let release_pos = ctx
                .response
                .interact_pointer_pos()
                .or_else(|| ctx.ui.input(|i| i.pointer.latest_pos()));
            if let Some(pointer_pos) = release_pos {
                events.push(AppIntent::PointerReleased {
                    pos: local_pos(pointer_pos, ctx.response),
                });
            }
        }
        self.primary_drag_mode = PrimaryDragMode::None;
    }

    /// Klick ohne Drag selektiert (auch bei angehängtem Werkzeug).
    pub(crate) fn handle_clicks(&mut self, ctx: &MapInputContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
            events.push(AppIntent::MapClicked {
                pos: local_pos(pointer_pos, ctx.response),
            });
        }
        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
