use crate::core::ShapeId;

/// Auswahlbezogener Anwendungszustand.
///
/// Es gibt prozessweit höchstens ein selektiertes Shape.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Aktuell selektiertes Shape
    pub selected: Option<ShapeId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn is_selected(&self, shape_id: ShapeId) -> bool {
        self.selected == Some(shape_id)
    }

    /// Anzahl selektierter Shapes (0 oder 1).
    pub fn count(&self) -> usize {
        usize::from(self.selected.is_some())
    }
}
