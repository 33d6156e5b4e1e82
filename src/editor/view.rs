//! Read-only view of an editor, handed to validators and commit hooks.

use crate::adapter::ElementId;
use crate::config::EditorConfig;

use super::session::EditState;

/// Elements an editor works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elements {
    pub display: ElementId,
    pub editor: ElementId,
    pub triggers: Vec<ElementId>,
}

/// What callbacks can see of the editor that invoked them.
pub trait EditorView {
    fn state(&self) -> EditState;

    fn config(&self) -> &EditorConfig;

    fn elements(&self) -> Elements;

    fn display_value(&self) -> String;

    fn editor_value(&self) -> String;

    /// Snapshot of the active session, if editing
    fn snapshot(&self) -> Option<&str>;
}
