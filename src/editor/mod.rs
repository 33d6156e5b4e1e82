//! Click-to-edit lifecycle.
//!
//! [`InlineEditor`] owns a [`DomAdapter`](crate::adapter::DomAdapter), its
//! [`EditorConfig`](crate::config::EditorConfig) and at most one
//! [`EditSession`]. All transitions are synchronous:
//!
//! - `begin()`: Idle or Editing -> Editing (a second begin restarts the edit)
//! - `complete()`: Editing -> Idle, via commit or cancel depending on validation
//! - `cancel()`: Editing -> Idle, restoring the snapshot
//!
//! # Example
//!
//! ```
//! use inline_edit::adapter::{DomAdapter, HeadlessAdapter};
//! use inline_edit::config::EditorConfig;
//! use inline_edit::editor::{EditState, InlineEditor};
//!
//! let adapter = HeadlessAdapter::new("#title", "Draft").with_measured(120.0, 18.0);
//! let mut editor = InlineEditor::new(adapter, EditorConfig::default());
//!
//! editor.begin().unwrap();
//! editor.adapter_mut().set_editor_value("Final");
//! let outcome = editor.complete().unwrap();
//!
//! assert!(outcome.is_committed());
//! assert_eq!(editor.display_value(), "Final");
//! assert_eq!(editor.state(), EditState::Idle);
//! ```

mod lifecycle;
mod session;
mod triggers;
mod validation;
mod view;

pub use lifecycle::InlineEditor;
pub use session::{EditOutcome, EditSession, EditState};
pub use triggers::TriggerSet;
pub use validation::is_valid;
pub use view::{EditorView, Elements};
