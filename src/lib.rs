//! EcoMap Annotator Library.
//! Kern der Annotations-Session als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DrawPhase, DrawSession, PointerKind,
    SessionError, TouchGuard,
};
pub use core::{
    CatalogRow, FeatureStore, MapView, RowCatalog, RowCategory, RowId, Shape, ShapeId,
    ShapeSummary, VisibilityMap,
};
pub use render::{compute_style, format_area, StyleCache, StyleDescriptor, StyleParams};
pub use shared::{RenderScene, SessionOptions};
