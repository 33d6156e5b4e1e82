//! Debug tracing infrastructure
//!
//! Provides structured logging for editor state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=inline_edit::editor=trace` - lifecycle transitions with state diffs
//! - `RUST_LOG=inline_edit::size=trace` - resolved sizes
//!
//! # Log Files
//!
//! When a log directory is given, logs are also written to
//! `<dir>/inline-edit.log` with daily rotation, at debug level.

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editor::{EditState, EditorView};

/// Initialize tracing subscriber with console and optional file logging
///
/// Console output respects RUST_LOG (default `warn`).
pub fn init(log_dir: Option<&Path>) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = log_dir.and_then(|dir| match std::fs::create_dir_all(dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(dir, "inline-edit.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of editor state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleSnapshot {
    pub state: EditState,
    pub display_value: String,
    pub editor_value: String,
    pub snapshot: Option<String>,
}

impl LifecycleSnapshot {
    pub fn capture(view: &dyn EditorView) -> Self {
        Self {
            state: view.state(),
            display_value: view.display_value(),
            editor_value: view.editor_value(),
            snapshot: view.snapshot().map(str::to_string),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LifecycleSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.state != other.state {
            changes.push(format!("state: {:?} → {:?}", self.state, other.state));
        }
        if self.display_value != other.display_value {
            changes.push(format!(
                "display: {:?} → {:?}",
                self.display_value, other.display_value
            ));
        }
        if self.editor_value != other.editor_value {
            changes.push(format!(
                "editor: {:?} → {:?}",
                self.editor_value, other.editor_value
            ));
        }
        if self.snapshot != other.snapshot {
            changes.push(format!(
                "snapshot: {:?} → {:?}",
                self.snapshot, other.snapshot
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
