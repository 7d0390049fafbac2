//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::SessionOptions;
pub use render_scene::{
    MeasurementView, PopupPlacement, PopupView, RenderScene, ShapeRenderItem, SketchPreview,
};
