//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Session (Shapes, Sichtbarkeit, View, Werkzeuge).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PointerKind};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, PopupPlacement, PopupState, SelectionState, UiState, ViewState,
};
pub use tools::{DrawPhase, DrawSession, RowBinding, SessionError, TouchGuard};
