//! Style-Engine und Style-Cache.
//!
//! Reine Berechnung der Darstellung; gemalt wird im UI-Layer mit egui.

pub mod style;
mod style_cache;

pub use style::{
    compute_style, format_area, format_area_m2, LabelKind, LabelMetrics, LabelStyle,
    NumberFormat, Rgba, StrokeStyle, StyleDescriptor, StyleParams,
};
pub use style_cache::{StyleCache, StyleKey};
