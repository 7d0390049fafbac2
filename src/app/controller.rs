//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::render::StyleCache;
use crate::shared::{RenderScene, SessionOptions};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Besitzt den Style-Cache, da dieser nur für den Render-Pfad existiert
/// und beim Löschen von Shapes mitgepflegt werden muss.
#[derive(Default)]
pub struct AppController {
    style_cache: StyleCache,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Controller mit Cache-Größe und Label-Metriken aus den Optionen.
    pub fn with_options(options: &SessionOptions) -> Self {
        Self {
            style_cache: StyleCache::new(options.style_cache_capacity, options.label_metrics()),
        }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        let cache = &mut self.style_cache;
        match command {
            // === Zeichen-Session ===
            AppCommand::ArmRow { binding } => handlers::draw::arm_row(state, binding),
            AppCommand::DisarmRow => handlers::draw::disarm_row(state),
            AppCommand::BeginStroke { lonlat } => handlers::draw::begin_stroke(state, lonlat)?,
            AppCommand::ExtendStroke { lonlat } => handlers::draw::extend_stroke(state, lonlat)?,
            AppCommand::FinishStroke => handlers::draw::finish_stroke(state)?,

            // === Touch ===
            AppCommand::RegisterTouch { id } => handlers::touch::register(state, id)?,
            AppCommand::ReleaseTouch { id } => handlers::touch::release(state, id)?,
            AppCommand::ExpirePinchWarning { now } => handlers::touch::expire_warning(state, now),
            AppCommand::DismissPinchWarning => handlers::touch::dismiss_warning(state),

            // === Sichtbarkeit & Katalog ===
            AppCommand::SetRowVisibility { row_id, visible } => {
                handlers::catalog::set_row_visibility(state, row_id, visible)
            }
            AppCommand::CascadeRowDeletion { row_id } => {
                handlers::catalog::cascade_row_deletion(state, cache, row_id)
            }

            // === Selektion & Popup ===
            AppCommand::SelectAt { lonlat } => handlers::selection::select_at(state, lonlat),
            AppCommand::SelectShape { shape_id } => {
                handlers::selection::select_shape(state, shape_id)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::SetPopupDensity { value } => {
                handlers::selection::set_popup_density(state, value)
            }
            AppCommand::SetPopupDescription { text } => {
                handlers::selection::set_popup_description(state, &text)
            }
            AppCommand::SavePopup => handlers::selection::save_popup(state),

            // === Shapes ===
            AppCommand::DeleteShape { shape_id } => handlers::shapes::delete(state, cache, shape_id),
            AppCommand::ClearRow { row_id } => handlers::shapes::clear_row(state, cache, row_id),
            AppCommand::ClearAll => handlers::shapes::clear_all(state, cache),
            AppCommand::FinishSession => handlers::draw::finish_session(state),

            // === Kamera & Viewport ===
            AppCommand::FitToShape { shape_id } => handlers::view::fit_to_shape(state, shape_id),
            AppCommand::ToggleLabels => handlers::view::toggle_labels(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ZoomTowards { delta, focus } => {
                handlers::view::zoom_towards(state, delta, focus)
            }
            AppCommand::PanView { delta } => handlers::view::pan(state, delta),
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::FitWorld => handlers::view::fit_world(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&mut self, state: &AppState) -> RenderScene {
        render_scene::build(state, &mut self.style_cache)
    }

    /// Read-only Zugriff auf den Style-Cache (Statistik, Tests).
    pub fn style_cache(&self) -> &StyleCache {
        &self.style_cache
    }
}
