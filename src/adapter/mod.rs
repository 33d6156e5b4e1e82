//! Toolkit adapter boundary.
//!
//! The editor core never touches a UI toolkit directly. Everything it needs
//! from the host (creating the editor node, measuring the display element,
//! reading and writing values, toggling visibility, wiring events) goes
//! through [`DomAdapter`].
//!
//! Events flow the other way as [`EditorEvent`] values: the host forwards a
//! trigger activation or an editor blur to
//! [`InlineEditor::handle_event`](crate::editor::InlineEditor::handle_event).

mod headless;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EditorClasses;
use crate::size::{Axis, ResolvedSize};

pub use headless::HeadlessAdapter;

/// Opaque reference to an element owned by the adapter (a selector, node id, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Events the adapter reports back to the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// A trigger element was activated (clicked)
    Trigger(ElementId),
    /// The editor control lost focus
    EditorBlur,
}

/// Capabilities the editor core needs from the host UI toolkit.
///
/// An adapter owns two elements: the display element (shows the value) and
/// the editor control (a text field created by [`mount`](Self::mount)).
pub trait DomAdapter {
    /// Create the wrapper and the (hidden) editor control next to the display
    /// element
    fn mount(&mut self, classes: &EditorClasses);

    fn display_element(&self) -> ElementId;

    fn editor_element(&self) -> ElementId;

    /// Current rendered size of the display element along `axis`
    fn measure(&self, axis: Axis) -> f64;

    /// Text content of the display element
    fn display_value(&self) -> String;

    fn set_display_value(&mut self, value: &str);

    /// Current value of the editor control
    fn editor_value(&self) -> String;

    fn set_editor_value(&mut self, value: &str);

    fn show_editor(&mut self);

    fn hide_editor(&mut self);

    fn focus_editor(&mut self);

    fn show_display(&mut self);

    fn hide_display(&mut self);

    /// Apply width/height and min/max bounds to the editor's presentation
    fn apply_size(&mut self, size: &ResolvedSize);

    /// Route activations of `trigger` to [`EditorEvent::Trigger`].
    ///
    /// Binding the same element twice must not make it fire twice.
    fn bind_trigger(&mut self, trigger: &ElementId);

    /// Route focus loss of the editor control to [`EditorEvent::EditorBlur`]
    fn bind_editor_blur(&mut self);
}
