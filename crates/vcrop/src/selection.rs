//! Element selection state (supports multi-select).

use crate::document::ElementId;

/// Ordered set of selected element ids.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Selected element ids (in order of selection)
    selected: Vec<ElementId>,
}

impl SelectionState {
    /// Add an element to the selection (no duplicates).
    pub fn select(&mut self, id: ElementId) {
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// All selected ids in selection order.
    pub fn all(&self) -> &[ElementId] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }
}
