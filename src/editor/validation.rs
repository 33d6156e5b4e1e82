//! Acceptance check run when an edit completes.

use crate::config::EditorConfig;

use super::view::EditorView;

/// Decide whether `value` may be committed.
///
/// An empty value fails unless `allow_empty` is set. Otherwise the configured
/// validator has the final say; with no validator every value passes.
pub fn is_valid(value: &str, config: &EditorConfig, view: &dyn EditorView) -> bool {
    if value.is_empty() && !config.allow_empty {
        return false;
    }

    match &config.input_validator {
        Some(validator) => validator(value, view),
        None => true,
    }
}
