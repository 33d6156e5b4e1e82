//! In-memory adapter for hosts without a live toolkit, and for tests.

use crate::config::EditorClasses;
use crate::size::{Axis, AxisPair, ResolvedSize};

use super::{DomAdapter, EditorEvent, ElementId};

/// A [`DomAdapter`] that keeps all element state in memory.
///
/// Measurements are whatever was last set with [`set_measured`](Self::set_measured).
/// Events are produced by [`click`](Self::click) and [`blur`](Self::blur)
/// the way a toolkit would dispatch them: only for bound elements.
#[derive(Debug, Clone)]
pub struct HeadlessAdapter {
    display_id: ElementId,
    editor_id: ElementId,
    display_text: String,
    editor_text: String,
    measured: AxisPair<f64>,
    classes: Option<EditorClasses>,
    display_visible: bool,
    editor_visible: bool,
    editor_focused: bool,
    applied_size: Option<ResolvedSize>,
    triggers: Vec<ElementId>,
    blur_bound: bool,
}

impl HeadlessAdapter {
    pub fn new(display_id: impl Into<ElementId>, text: impl Into<String>) -> Self {
        let display_id = display_id.into();
        let editor_id = ElementId::new(format!("{}-editor", display_id));
        Self {
            display_id,
            editor_id,
            display_text: text.into(),
            editor_text: String::new(),
            measured: AxisPair::new(0.0, 0.0),
            classes: None,
            display_visible: true,
            editor_visible: false,
            editor_focused: false,
            applied_size: None,
            triggers: Vec::new(),
            blur_bound: false,
        }
    }

    pub fn with_measured(mut self, width: f64, height: f64) -> Self {
        self.set_measured(width, height);
        self
    }

    pub fn set_measured(&mut self, width: f64, height: f64) {
        self.measured = AxisPair::new(width, height);
    }

    /// Simulate the user activating `element`
    pub fn click(&self, element: &ElementId) -> Option<EditorEvent> {
        self.triggers
            .contains(element)
            .then(|| EditorEvent::Trigger(element.clone()))
    }

    /// Simulate focus leaving the editor. Only fires while the editor has focus.
    pub fn blur(&mut self) -> Option<EditorEvent> {
        if !self.blur_bound || !self.editor_focused {
            return None;
        }
        self.editor_focused = false;
        Some(EditorEvent::EditorBlur)
    }

    pub fn is_mounted(&self) -> bool {
        self.classes.is_some()
    }

    pub fn classes(&self) -> Option<&EditorClasses> {
        self.classes.as_ref()
    }

    pub fn is_display_visible(&self) -> bool {
        self.display_visible
    }

    pub fn is_editor_visible(&self) -> bool {
        self.editor_visible
    }

    pub fn is_editor_focused(&self) -> bool {
        self.editor_focused
    }

    /// Size applied by the most recent edit, if any
    pub fn applied_size(&self) -> Option<&ResolvedSize> {
        self.applied_size.as_ref()
    }

    pub fn bound_triggers(&self) -> &[ElementId] {
        &self.triggers
    }

    pub fn is_blur_bound(&self) -> bool {
        self.blur_bound
    }
}

impl DomAdapter for HeadlessAdapter {
    fn mount(&mut self, classes: &EditorClasses) {
        self.classes = Some(classes.clone());
        self.editor_visible = false;
    }

    fn display_element(&self) -> ElementId {
        self.display_id.clone()
    }

    fn editor_element(&self) -> ElementId {
        self.editor_id.clone()
    }

    fn measure(&self, axis: Axis) -> f64 {
        *self.measured.get(axis)
    }

    fn display_value(&self) -> String {
        self.display_text.clone()
    }

    fn set_display_value(&mut self, value: &str) {
        self.display_text = value.to_string();
    }

    fn editor_value(&self) -> String {
        self.editor_text.clone()
    }

    fn set_editor_value(&mut self, value: &str) {
        self.editor_text = value.to_string();
    }

    fn show_editor(&mut self) {
        self.editor_visible = true;
    }

    fn hide_editor(&mut self) {
        self.editor_visible = false;
        self.editor_focused = false;
    }

    fn focus_editor(&mut self) {
        if self.editor_visible {
            self.editor_focused = true;
        }
    }

    fn show_display(&mut self) {
        self.display_visible = true;
    }

    fn hide_display(&mut self) {
        self.display_visible = false;
    }

    fn apply_size(&mut self, size: &ResolvedSize) {
        self.applied_size = Some(*size);
    }

    fn bind_trigger(&mut self, trigger: &ElementId) {
        if !self.triggers.contains(trigger) {
            self.triggers.push(trigger.clone());
        }
    }

    fn bind_editor_blur(&mut self) {
        self.blur_bound = true;
    }
}
