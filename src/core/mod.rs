//! Core-Domänentypen: Shapes, Feature-Store, Sichtbarkeit, Katalog, Kartenansicht.

pub mod batch;
pub mod catalog;
pub mod feature_store;
/// Geographische Hilfsfunktionen (Fläche, Projektion, Punkt-in-Polygon)
pub mod geo;
pub mod map_view;
pub mod shape;
pub mod visibility;

pub use batch::{BatchFeature, SessionBatch};
pub use catalog::{CatalogRow, RowCatalog, RowCategory};
pub use feature_store::FeatureStore;
pub use geo::Extent;
pub use map_view::MapView;
pub use shape::{RowId, Shape, ShapeDraft, ShapeId, ShapeSummary};
pub use visibility::VisibilityMap;
