//! InlineEditor - the click-to-edit state machine.

use crate::adapter::{DomAdapter, EditorEvent, ElementId};
use crate::config::EditorConfig;
use crate::size::{self, SizeError};
use crate::tracing::LifecycleSnapshot;

use super::session::{EditOutcome, EditSession, EditState};
use super::triggers::TriggerSet;
use super::validation;
use super::view::{EditorView, Elements};

/// A display element that turns into a text field on trigger.
///
/// `Idle` shows the display element. [`begin`](Self::begin) switches to
/// `Editing` and [`complete`](Self::complete) switches back, committing the
/// editor value if it validates and restoring the snapshot otherwise.
#[derive(Debug)]
pub struct InlineEditor<A: DomAdapter> {
    adapter: A,
    config: EditorConfig,
    triggers: TriggerSet,
    session: Option<EditSession>,
}

impl<A: DomAdapter> InlineEditor<A> {
    /// Mount the editor control and bind the trigger and blur events
    pub fn new(mut adapter: A, config: EditorConfig) -> Self {
        adapter.mount(&config.classes);

        let trigger = config
            .trigger
            .clone()
            .unwrap_or_else(|| adapter.display_element());

        let mut editor = Self {
            adapter,
            config,
            triggers: TriggerSet::default(),
            session: None,
        };
        editor.add_trigger(trigger);
        editor.adapter.bind_editor_blur();

        tracing::debug!(
            display = %editor.adapter.display_element(),
            "inline editor mounted"
        );
        editor
    }

    pub fn state(&self) -> EditState {
        if self.session.is_some() {
            EditState::Editing
        } else {
            EditState::Idle
        }
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn elements(&self) -> Elements {
        Elements {
            display: self.adapter.display_element(),
            editor: self.adapter.editor_element(),
            triggers: self.triggers.to_vec(),
        }
    }

    pub fn display_value(&self) -> String {
        self.adapter.display_value()
    }

    pub fn editor_value(&self) -> String {
        self.adapter.editor_value()
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable access to the adapter, e.g. to feed typed text into the editor
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn into_adapter(self) -> A {
        self.adapter
    }

    /// Register another element that starts an edit.
    ///
    /// Returns `false` (and binds nothing) if it is already registered.
    pub fn add_trigger(&mut self, trigger: impl Into<ElementId>) -> bool {
        let trigger = trigger.into();
        if !self.triggers.insert(trigger.clone()) {
            tracing::debug!(trigger = %trigger, "trigger already bound");
            return false;
        }
        self.adapter.bind_trigger(&trigger);
        true
    }

    /// Start an edit, replacing any edit already in progress.
    ///
    /// On a size error nothing changes: the previous state (and session, if
    /// any) is kept.
    pub fn begin(&mut self) -> Result<(), SizeError> {
        let adapter = &self.adapter;
        let size = match size::resolve(&self.config.sizes, |axis| adapter.measure(axis)) {
            Ok(size) => size,
            Err(e) => {
                tracing::warn!(error = %e, "cannot size editor, edit not started");
                return Err(e);
            }
        };

        if let Some(previous) = self.session.take() {
            tracing::debug!(snapshot = previous.snapshot(), "discarding unresolved edit");
        }

        let snapshot = self.adapter.display_value();
        self.adapter.apply_size(&size);
        self.adapter.set_editor_value(&snapshot);
        self.adapter.hide_display();
        self.adapter.show_editor();
        self.adapter.focus_editor();

        tracing::debug!(
            snapshot = %snapshot,
            width = size.width.value,
            height = size.height.value,
            "edit started"
        );
        self.session = Some(EditSession::new(snapshot, size));
        Ok(())
    }

    /// Finish the current edit: commit if the editor value is valid, cancel
    /// otherwise. Returns `None` when not editing.
    pub fn complete(&mut self) -> Option<EditOutcome> {
        if self.session.is_none() {
            tracing::debug!("complete ignored: not editing");
            return None;
        }

        let value = self.adapter.editor_value();
        let valid = self.is_valid(&value);
        let session = self.session.take()?;

        if valid {
            Some(self.commit(session, value))
        } else {
            tracing::debug!(value = %value, "editor value rejected");
            Some(self.restore(session))
        }
    }

    /// Abandon the current edit and restore the snapshot. Returns `None` when
    /// not editing.
    pub fn cancel(&mut self) -> Option<EditOutcome> {
        let session = self.session.take()?;
        Some(self.restore(session))
    }

    /// Hide the editor and show the display element. Decides nothing about
    /// which value is displayed.
    pub fn hide(&mut self) {
        self.adapter.hide_editor();
        self.adapter.show_display();
    }

    /// Whether `value` would be accepted by [`complete`](Self::complete)
    pub fn is_valid(&self, value: &str) -> bool {
        validation::is_valid(value, &self.config, self)
    }

    /// Dispatch an event reported by the adapter.
    ///
    /// Triggers that are not registered are ignored. A blur while idle does
    /// nothing.
    pub fn handle_event(&mut self, event: EditorEvent) -> Result<Option<EditOutcome>, SizeError> {
        let before =
            tracing::enabled!(tracing::Level::TRACE).then(|| LifecycleSnapshot::capture(&*self));

        let result = match event {
            EditorEvent::Trigger(trigger) => {
                if self.triggers.contains(&trigger) {
                    self.begin().map(|()| None)
                } else {
                    tracing::debug!(trigger = %trigger, "ignoring unregistered trigger");
                    Ok(None)
                }
            }
            EditorEvent::EditorBlur => Ok(self.complete()),
        };

        if let Some(before) = before {
            if let Some(diff) = before.diff(&LifecycleSnapshot::capture(&*self)) {
                tracing::trace!("{}", diff);
            }
        }

        result
    }

    fn commit(&mut self, session: EditSession, value: String) -> EditOutcome {
        self.hide();
        self.adapter.set_display_value(&value);

        let previous = session.into_snapshot();
        tracing::debug!(value = %value, previous = %previous, "edit committed");

        if let Some(hook) = &self.config.on_commit {
            hook(&value, &previous, &*self);
        }

        EditOutcome::Committed { value, previous }
    }

    fn restore(&mut self, session: EditSession) -> EditOutcome {
        self.hide();
        let restored = session.into_snapshot();
        self.adapter.set_display_value(&restored);
        tracing::debug!(restored = %restored, "edit cancelled");
        EditOutcome::Cancelled { restored }
    }
}

impl<A: DomAdapter> EditorView for InlineEditor<A> {
    fn state(&self) -> EditState {
        InlineEditor::state(self)
    }

    fn config(&self) -> &EditorConfig {
        InlineEditor::config(self)
    }

    fn elements(&self) -> Elements {
        InlineEditor::elements(self)
    }

    fn display_value(&self) -> String {
        InlineEditor::display_value(self)
    }

    fn editor_value(&self) -> String {
        InlineEditor::editor_value(self)
    }

    fn snapshot(&self) -> Option<&str> {
        self.session.as_ref().map(EditSession::snapshot)
    }
}
