//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=edlin::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/edlin/logs/edlin.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{EditMode, MarkState, TextList};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it never mixes with the document listing
/// printed on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_NAME);
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
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of editor state for diffing across an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub cursor: usize,
    pub rows: usize,
    pub mode: EditMode,
    pub marks: MarkState,
    pub results: usize,
    pub current_result: usize,
}

impl EditorSnapshot {
    pub fn from_editor(editor: &TextList) -> Self {
        Self {
            cursor: editor.cursor(),
            rows: editor.line_count(),
            mode: editor.mode(),
            marks: editor.marks().state(),
            results: editor.search().len(),
            current_result: editor.search().current_index(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &EditorSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.cursor != other.cursor {
            changes.push(format!("cursor: {} → {}", self.cursor, other.cursor));
        }
        if self.rows != other.rows {
            changes.push(format!("rows: {} → {}", self.rows, other.rows));
        }
        if self.mode != other.mode {
            changes.push(format!("mode: {:?} → {:?}", self.mode, other.mode));
        }
        if self.marks != other.marks {
            changes.push(format!("marks: {:?} → {:?}", self.marks, other.marks));
        }
        if self.results != other.results || self.current_result != other.current_result {
            changes.push(format!(
                "results: {}@{} → {}@{}",
                self.results, self.current_result, other.results, other.current_result
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
