//! EcoMap Annotator.
//!
//! Freihand-Annotationen auf einer Karte: Ökosystem-Features und Aktivitäten
//! pro Katalog-Zeile zeichnen, beschreiben und als Session abschließen.

use eframe::egui;
use ecomap_annotator::core::{RowCatalog, SessionBatch};
use ecomap_annotator::{ui, AppController, AppIntent, AppState, SessionOptions};
use std::time::Instant;

/// Eingebetteter Katalog, falls keine `catalog.json` neben der Binary liegt.
const DEMO_CATALOG: &str = include_str!("../assets/demo_catalog.json");

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("EcoMap Annotator v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("EcoMap Annotator"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "EcoMap Annotator",
            options,
            Box::new(|_cc| Ok(Box::new(AnnotatorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct AnnotatorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    toasts: ui::Toasts,
}

impl AnnotatorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SessionOptions::config_path();
        let session_options = SessionOptions::load_from_file(&config_path);

        let controller = AppController::with_options(&session_options);
        let mut state = AppState::with_options(session_options);
        state.catalog = Self::load_catalog();

        Self {
            state,
            controller,
            input: ui::InputState::new(),
            toasts: ui::Toasts::new(),
        }
    }

    fn load_catalog() -> RowCatalog {
        let path = SessionOptions::sibling_of_binary("catalog.json");
        if let Some(catalog) = RowCatalog::load_from_file(&path) {
            return catalog;
        }
        match RowCatalog::from_json(DEMO_CATALOG) {
            Ok(catalog) => {
                log::info!("Demo-Katalog verwendet ({} Zeilen)", catalog.len());
                catalog
            }
            Err(e) => {
                log::error!("Demo-Katalog fehlerhaft: {:#}", e);
                RowCatalog::new()
            }
        }
    }
}

impl eframe::App for AnnotatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let mut events = vec![AppIntent::FrameTick { now }];
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events.iter().any(|e| {
            !matches!(
                e,
                AppIntent::ViewportResized { .. } | AppIntent::FrameTick { .. }
            )
        });

        self.process_events(events);
        self.persist_finished_session();

        self.toasts.push_all(self.state.take_notifications(), now);
        self.toasts.prune(now);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl AnnotatorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_catalog_panel(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |egui_ui| {
                let (rect, response) = egui_ui
                    .allocate_exact_size(egui_ui.available_size(), egui::Sense::click_and_drag());

                let scene = self.controller.build_render_scene(&self.state);

                events.extend(self.input.collect_map_events(
                    egui_ui,
                    &response,
                    &scene,
                    &self.state.options,
                ));

                ui::paint_scene(egui_ui.painter(), rect, &scene);

                events.extend(ui::render_zoom_controls(ctx, rect));
                events.extend(ui::render_popup(ctx, rect, &scene));
                events.extend(ui::render_pinch_warning(ctx, rect, &scene));
                self.toasts.show(ctx, rect);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Persistenz-Kollaborator: schreibt den Abschluss-Batch als GeoJSON
    /// neben die Binary und leert danach die Session.
    fn persist_finished_session(&mut self) {
        let Some(batch) = self.state.take_finished_batch() else {
            return;
        };

        match Self::write_batch(&batch) {
            Ok(path) => {
                log::info!("Session gespeichert: {}", path.display());
                self.state
                    .notify(format!("{} drawing(s) saved", batch.len()));
                self.process_events(vec![AppIntent::ClearAllRequested]);
            }
            Err(e) => {
                log::error!("Session konnte nicht gespeichert werden: {:#}", e);
                self.state.notify("Saving the session failed.");
            }
        }
    }

    fn write_batch(batch: &SessionBatch) -> anyhow::Result<std::path::PathBuf> {
        let file_name = format!(
            "session_{}.geojson",
            chrono::Utc::now().format("%Y%m%dT%H%M%SZ")
        );
        let path = SessionOptions::sibling_of_binary(&file_name);
        std::fs::write(&path, batch.to_geojson_string()?)?;
        Ok(path)
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.touch.is_warning_visible()
            || !self.toasts.is_empty()
        {
            ctx.request_repaint();
        }
    }
}
