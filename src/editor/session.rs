//! Edit state and the per-edit session.

use serde::Serialize;

use crate::size::ResolvedSize;

/// Whether the editor control is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditState {
    /// Display mode
    #[default]
    Idle,
    /// Editor visible with an active session
    Editing,
}

/// State of one edit, from `begin()` until it is committed or cancelled.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    snapshot: String,
    size: ResolvedSize,
}

impl EditSession {
    pub(crate) fn new(snapshot: String, size: ResolvedSize) -> Self {
        Self { snapshot, size }
    }

    /// Display value captured when the edit began
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    /// Size applied to the editor for this edit
    pub fn size(&self) -> &ResolvedSize {
        &self.size
    }

    pub(crate) fn into_snapshot(self) -> String {
        self.snapshot
    }
}

/// How a completed edit was resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EditOutcome {
    /// The editor value was accepted and written to the display element
    Committed { value: String, previous: String },
    /// The display element was restored to its snapshot
    Cancelled { restored: String },
}

impl EditOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, EditOutcome::Committed { .. })
    }

    /// Value left in the display element
    pub fn display_value(&self) -> &str {
        match self {
            EditOutcome::Committed { value, .. } => value,
            EditOutcome::Cancelled { restored } => restored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display_value() {
        let committed = EditOutcome::Committed {
            value: "new".into(),
            previous: "old".into(),
        };
        assert!(committed.is_committed());
        assert_eq!(committed.display_value(), "new");

        let cancelled = EditOutcome::Cancelled {
            restored: "old".into(),
        };
        assert!(!cancelled.is_committed());
        assert_eq!(cancelled.display_value(), "old");
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let outcome = EditOutcome::Cancelled {
            restored: "abc".into(),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"outcome":"cancelled","restored":"abc"}"#);
    }
}
