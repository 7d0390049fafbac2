//! UI-Komponenten: Katalog-Panel, Karte, Popup, Overlays, Input-Handling.

pub mod canvas;
mod catalog_panel;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Panels, Popup, Overlays).
/// Keyboard-Shortcuts und Touch-Erkennung sind in eigene Dateien extrahiert.
pub mod overlays;
pub mod popup;
pub mod status;

pub use canvas::paint_scene;
pub use catalog_panel::render_catalog_panel;
pub use input::InputState;
pub use overlays::{render_pinch_warning, render_zoom_controls, Toasts};
pub use popup::render_popup;
pub use status::render_status_bar;
