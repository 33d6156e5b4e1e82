//! Inline Edit - click-to-edit widget core
//!
//! This crate provides the state machine and size resolution behind a
//! "click-to-edit" field: a display element turns into a text editor when
//! triggered and turns back when the edit completes, committing or reverting
//! the value. The host UI toolkit is reached only through
//! [`adapter::DomAdapter`].

pub mod adapter;
pub mod config;
pub mod editor;
pub mod size;
pub mod tracing;

// Re-export commonly used types
pub use adapter::{DomAdapter, EditorEvent, ElementId, HeadlessAdapter};
pub use config::EditorConfig;
pub use editor::{EditOutcome, EditState, InlineEditor};
pub use size::{resolve, ResolvedSize, SizeError, SizeSpec};
