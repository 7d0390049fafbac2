//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Drawings: {} | Rendered: {}",
                state.store.len(),
                state.store.rendered_shapes().count()
            ));

            ui.separator();

            let map = &state.view.map;
            ui.label(format!(
                "Zoom: {:.2} | Center: ({:.4}, {:.4})",
                map.zoom, map.center.x, map.center.y
            ));

            ui.separator();

            // Gebundene Zeile und Phase der Zeichen-Session
            match state.session.binding() {
                Some(binding) => {
                    ui.label(format!(
                        "Drawing: {} ({})",
                        binding.name,
                        state.session.phase().name()
                    ));
                }
                None => {
                    ui.label("Drawing: off");
                }
            }

            if let Some(selected) = state.selected_shape_id() {
                ui.separator();
                ui.label(format!("Selected: {}", selected));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
