//! Bearbeitungs-Popup am Anker-Vertex des selektierten Shapes.

use super::canvas::{to_color, to_screen};
use crate::app::AppIntent;
use crate::shared::{PopupPlacement, PopupView, RenderScene};

/// Basisbreite des Popups vor Zoom-Skalierung.
const POPUP_WIDTH_PX: f32 = 240.0;
const ARROW_HALF_WIDTH_PX: f32 = 7.0;

/// Rendert das Popup (falls offen) und gibt erzeugte Events zurück.
pub fn render_popup(ctx: &egui::Context, map_rect: egui::Rect, scene: &RenderScene) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(popup) = &scene.popup else {
        return events;
    };

    let anchor = to_screen(&scene.view, map_rect, popup.anchor);
    let (pos, pivot) = match popup.placement {
        PopupPlacement::Above => (
            anchor - egui::vec2(0.0, popup.offset_px),
            egui::Align2::CENTER_BOTTOM,
        ),
        PopupPlacement::Below => (
            anchor + egui::vec2(0.0, popup.offset_px),
            egui::Align2::CENTER_TOP,
        ),
    };

    paint_arrow(ctx, anchor, pos, popup.instance);

    // Neue Instanz = neue Id, damit kein Widget-Zustand des alten Popups überlebt
    egui::Area::new(egui::Id::new(("shape_popup", popup.instance)))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .pivot(pivot)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(POPUP_WIDTH_PX * popup.scale);
                render_popup_body(ui, popup, &mut events);
            });
        });

    events
}

fn render_popup_body(ui: &mut egui::Ui, popup: &PopupView, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter().rect_filled(swatch, 2.0, to_color(popup.color));
        ui.strong(&popup.name);
    });
    ui.label(&popup.title);
    ui.separator();

    let mut density = i64::from(popup.draft_density);
    if ui
        .add(egui::Slider::new(&mut density, 1..=100).text("Density"))
        .changed()
    {
        events.push(AppIntent::PopupDensityChanged { value: density });
    }

    let mut description = popup.draft_description.clone();
    let response = ui.add(
        egui::TextEdit::multiline(&mut description)
            .char_limit(popup.description_max_chars)
            .desired_rows(2)
            .hint_text("Description"),
    );
    ui.label(
        egui::RichText::new(format!(
            "{}/{}",
            description.chars().count(),
            popup.description_max_chars
        ))
        .small()
        .weak(),
    );
    if response.changed() {
        events.push(AppIntent::PopupDescriptionChanged { text: description });
    }

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            events.push(AppIntent::PopupSaveRequested);
        }
        if ui
            .button(egui::RichText::new("Delete").color(egui::Color32::LIGHT_RED))
            .clicked()
        {
            events.push(AppIntent::PopupDeleteRequested);
        }
        if ui.button("Close").clicked() {
            events.push(AppIntent::PopupCloseRequested);
        }
    });
}

/// Pfeil vom Popup-Rand zum Anker-Vertex.
fn paint_arrow(ctx: &egui::Context, tip: egui::Pos2, base: egui::Pos2, instance: u64) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new(("shape_popup_arrow", instance)),
    ));
    let fill = ctx.style().visuals.window_fill;
    painter.add(egui::Shape::convex_polygon(
        vec![
            base - egui::vec2(ARROW_HALF_WIDTH_PX, 0.0),
            base + egui::vec2(ARROW_HALF_WIDTH_PX, 0.0),
            tip,
        ],
        fill,
        egui::Stroke::NONE,
    ));
}
