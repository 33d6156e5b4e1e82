//! Shared helpers for benchmarks

use inline_edit::adapter::HeadlessAdapter;
use inline_edit::config::EditorConfig;
use inline_edit::editor::InlineEditor;
use inline_edit::size::{Axis, SizeSpec};

/// Spec with an expression on every leaf
#[allow(dead_code)]
pub fn expression_spec() -> SizeSpec {
    SizeSpec::new("element+10", "element*1.5")
        .with_min(Axis::Width, "element/2")
        .with_min(Axis::Height, 15u32)
        .with_max(Axis::Width, "element+200")
        .with_max(Axis::Height, "element*4")
}

/// Editor over a headless element holding `text`
#[allow(dead_code)]
pub fn make_editor(text: &str) -> InlineEditor<HeadlessAdapter> {
    let adapter = HeadlessAdapter::new("#bench", text).with_measured(240.0, 18.0);
    InlineEditor::new(adapter, EditorConfig::default().with_sizes(expression_spec()))
}
