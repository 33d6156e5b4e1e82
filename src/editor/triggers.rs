//! Set of elements that start an edit.

use crate::adapter::ElementId;

/// Trigger elements in registration order. Inserting an element twice is a
/// no-op, so each element is bound at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerSet {
    elements: Vec<ElementId>,
}

impl TriggerSet {
    /// Returns `true` if `element` was not registered before
    pub fn insert(&mut self, element: ElementId) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    pub fn contains(&self, element: &ElementId) -> bool {
        self.elements.contains(element)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementId> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn to_vec(&self) -> Vec<ElementId> {
        self.elements.clone()
    }
}
