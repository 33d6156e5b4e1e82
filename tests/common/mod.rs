//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use inline_edit::adapter::{DomAdapter, HeadlessAdapter};
use inline_edit::config::EditorConfig;
use inline_edit::editor::InlineEditor;
use inline_edit::size::Axis;

pub type TestEditor = InlineEditor<HeadlessAdapter>;

/// Commit callback arguments, in call order
pub type CommitLog = Rc<RefCell<Vec<(String, String)>>>;

/// Create an editor over a headless display element
pub fn test_editor(text: &str, width: f64, height: f64, config: EditorConfig) -> TestEditor {
    let adapter = HeadlessAdapter::new("#field", text).with_measured(width, height);
    InlineEditor::new(adapter, config)
}

/// Attach a commit hook that records every `(new, old)` pair
pub fn recording_config(config: EditorConfig) -> (EditorConfig, CommitLog) {
    let log: CommitLog = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    let config = config.with_on_commit(move |new, old, _| {
        sink.borrow_mut().push((new.to_string(), old.to_string()));
    });
    (config, log)
}

/// Simulate the user typing into the open editor
pub fn type_text(editor: &mut TestEditor, text: &str) {
    editor.adapter_mut().set_editor_value(text);
}

/// Measurement function with fixed sizes
pub fn measure(width: f64, height: f64) -> impl Fn(Axis) -> f64 {
    move |axis| match axis {
        Axis::Width => width,
        Axis::Height => height,
    }
}
