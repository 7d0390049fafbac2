//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod drawing;
pub mod popup;
pub mod row_cascade;
pub mod selection;
pub mod shape_lifecycle;
pub mod touch;
pub mod viewport;
pub mod visibility;
