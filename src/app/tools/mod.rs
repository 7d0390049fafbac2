//! Interaktions-Werkzeuge: Freihand-Zeichen-Session und Touch-Konfliktschutz.
//!
//! Die Werkzeuge halten nur ihren eigenen Zustand; die Mutation von
//! Feature-Store und Sichtbarkeit erfolgt zentral in den Use-Cases.

/// Zustandsmaschine Idle → Armed → Stroking (+ Suspended bei Pinch).
pub mod draw_session;
/// Erkennung von Mehrfinger-Gesten während des Zeichnens.
pub mod touch_guard;

pub use draw_session::{
    Detached, DrawPhase, DrawSession, LiveMeasurement, RowBinding, SessionError, Sketch,
};
pub use touch_guard::{TouchGuard, TouchReaction};
