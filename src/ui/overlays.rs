//! Overlays über der Karte: Zoom-Steuerung, Pinch-Warnung, Benachrichtigungen.

use crate::app::AppIntent;
use crate::shared::RenderScene;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Anzeigedauer einer Benachrichtigung.
const TOAST_DURATION: Duration = Duration::from_secs(4);
const OVERLAY_MARGIN_PX: f32 = 12.0;

/// Zoom-Buttons rechts oben auf der Karte.
pub fn render_zoom_controls(ctx: &egui::Context, map_rect: egui::Rect) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Area::new(egui::Id::new("zoom_controls"))
        .order(egui::Order::Middle)
        .fixed_pos(map_rect.right_top() + egui::vec2(-OVERLAY_MARGIN_PX, OVERLAY_MARGIN_PX))
        .pivot(egui::Align2::RIGHT_TOP)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    if ui.button("+").on_hover_text("Zoom in").clicked() {
                        events.push(AppIntent::ZoomInRequested);
                    }
                    if ui.button("−").on_hover_text("Zoom out").clicked() {
                        events.push(AppIntent::ZoomOutRequested);
                    }
                    if ui.button("⌂").on_hover_text("Whole world").clicked() {
                        events.push(AppIntent::FitWorldRequested);
                    }
                    if ui.button("⟲").on_hover_text("Reset view").clicked() {
                        events.push(AppIntent::ResetViewRequested);
                    }
                });
            });
        });

    events
}

/// Warnung bei Mehrfinger-Geste während des Zeichnens.
pub fn render_pinch_warning(
    ctx: &egui::Context,
    map_rect: egui::Rect,
    scene: &RenderScene,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !scene.pinch_warning {
        return events;
    }

    egui::Area::new(egui::Id::new("pinch_warning"))
        .order(egui::Order::Foreground)
        .fixed_pos(map_rect.center_bottom() - egui::vec2(0.0, OVERLAY_MARGIN_PX))
        .pivot(egui::Align2::CENTER_BOTTOM)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(egui::Color32::from_rgba_unmultiplied(255, 248, 225, 242))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new("⚠ Pinch-to-Zoom disabled while drawing")
                                .strong()
                                .color(egui::Color32::from_rgb(51, 51, 51)),
                        );
                        if ui.small_button("✖").clicked() {
                            events.push(AppIntent::PinchWarningDismissed);
                        }
                    });
                    ui.horizontal(|ui| {
                        if ui.small_button("+").clicked() {
                            events.push(AppIntent::ZoomInRequested);
                        }
                        if ui.small_button("−").clicked() {
                            events.push(AppIntent::ZoomOutRequested);
                        }
                        ui.label(
                            egui::RichText::new("Use the zoom controls")
                                .color(egui::Color32::from_rgb(51, 51, 51)),
                        );
                    });
                    if ui.button("Or stop drawing").clicked() {
                        events.push(AppIntent::DisarmRequested);
                    }
                });
        });

    events
}

/// Kurzlebige Benachrichtigungen (z.B. "Drawing deleted").
#[derive(Default)]
pub struct Toasts {
    items: VecDeque<(String, Instant)>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt neue Nachrichten mit Ablaufzeit ab `now`.
    pub fn push_all(&mut self, messages: impl IntoIterator<Item = String>, now: Instant) {
        for message in messages {
            self.items.push_back((message, now + TOAST_DURATION));
        }
    }

    /// Entfernt abgelaufene Nachrichten.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|(_, until)| *until > now);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Zeigt die aktiven Nachrichten rechts unten über der Karte.
    pub fn show(&self, ctx: &egui::Context, map_rect: egui::Rect) {
        if self.items.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Foreground)
            .fixed_pos(map_rect.right_bottom() - egui::vec2(OVERLAY_MARGIN_PX, OVERLAY_MARGIN_PX))
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .interactable(false)
            .show(ctx, |ui| {
                for (message, _) in &self.items {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(message);
                    });
                }
            });
    }
}
