//! Katalog-Seitenleiste: Zeilen nach Kategorie, Sichtbarkeit, Zeichnen-Toggle,
//! Zeichnungsliste und Session-Aktionen.

use super::canvas::to_color;
use crate::app::{AppIntent, AppState};
use crate::core::{CatalogRow, RowCategory};
use crate::render::Rgba;

/// Rendert die Katalog-Seitenleiste und gibt erzeugte Events zurück.
pub fn render_catalog_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("catalog_panel")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.heading("Catalog");
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .max_height(ui.available_height() - 90.0)
                .show(ui, |ui| {
                    for category in [RowCategory::Feature, RowCategory::Activity] {
                        egui::CollapsingHeader::new(category.label())
                            .default_open(true)
                            .show(ui, |ui| {
                                for row in state.catalog.by_category(category) {
                                    render_row(ui, state, row, &mut events);
                                }
                            });
                    }
                });

            ui.separator();
            render_session_actions(ui, state, &mut events);
        });

    events
}

fn render_row(ui: &mut egui::Ui, state: &AppState, row: &CatalogRow, events: &mut Vec<AppIntent>) {
    let armed = state.armed_row_id() == Some(row.id);
    let count = state.shape_count(row.id);

    ui.horizontal(|ui| {
        let mut visible = state.visibility.is_visible(row.id);
        if ui.checkbox(&mut visible, "").changed() {
            events.push(AppIntent::VisibilityChanged {
                row_id: row.id,
                visible,
            });
        }

        let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        let color = Rgba::parse_hex(&row.color).unwrap_or(Rgba::BLACK);
        ui.painter().rect_filled(swatch, 2.0, to_color(color));

        let name = egui::RichText::new(&row.name);
        ui.label(if armed { name.strong() } else { name });

        if count > 0 {
            ui.label(egui::RichText::new(format!("({})", count)).weak());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .small_button("🗑")
                .on_hover_text("Delete row")
                .clicked()
            {
                events.push(AppIntent::RowDeleted { row_id: row.id });
            }
            let label = if armed { "Stop" } else { "Draw" };
            if ui.add(egui::Button::new(label).selected(armed)).clicked() {
                events.push(AppIntent::ToggleDrawingRequested { row_id: row.id });
            }
        });
    });

    if count == 0 {
        return;
    }

    egui::CollapsingHeader::new(format!("Drawings ({})", count))
        .id_salt(("row_drawings", row.id))
        .show(ui, |ui| {
            for summary in state.row_snapshot(row.id) {
                ui.horizontal(|ui| {
                    ui.label(format!(
                        "#{} · {} · density {}",
                        summary.drawing_number, summary.area_label, summary.density
                    ))
                    .on_hover_text(if summary.description.is_empty() {
                        "No description".to_string()
                    } else {
                        summary.description.clone()
                    });
                    if ui.small_button("Jump").clicked() {
                        events.push(AppIntent::JumpToShapeRequested {
                            shape_id: summary.uid,
                        });
                    }
                    if ui.small_button("✖").on_hover_text("Delete drawing").clicked() {
                        events.push(AppIntent::DeleteShapeRequested {
                            shape_id: summary.uid,
                        });
                    }
                });
            }
            if ui.button("Clear row").clicked() {
                events.push(AppIntent::ClearRowRequested { row_id: row.id });
            }
        });
}

fn render_session_actions(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut show_labels = state.view.show_labels;
    if ui.checkbox(&mut show_labels, "Show labels").changed() {
        events.push(AppIntent::ShowLabelsToggled);
    }

    ui.horizontal(|ui| {
        if ui.button("Finish session").clicked() {
            events.push(AppIntent::FinishSessionRequested);
        }
        if ui
            .add_enabled(!state.store.is_empty(), egui::Button::new("Clear all"))
            .clicked()
        {
            events.push(AppIntent::ClearAllRequested);
        }
    });
}
