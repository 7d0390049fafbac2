//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod catalog;
pub mod draw;
pub mod selection;
pub mod shapes;
pub mod touch;
pub mod view;
