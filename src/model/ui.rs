//! UI state - editing mode, focus and transient messages

use super::status_bar::{MessageKind, TransientMessage};
use std::time::Duration;

/// Which control surface is showing below the row list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Single-row edit field (the initial state)
    #[default]
    Edit,
    /// Search and replace fields
    Search,
}

/// Which widget receives typed input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    RowList,
    EditField,
    SearchField,
    ReplaceField,
}

/// Application-wide UI state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Transient message with auto-expiry
    pub transient_message: Option<TransientMessage>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a transient message
    pub fn notify(&mut self, text: impl Into<String>, kind: MessageKind, duration: Duration) {
        let text = text.into();
        tracing::debug!(%text, ?kind, "transient message");
        self.transient_message = Some(TransientMessage::new(text, kind, duration));
    }

    /// Drop the transient message once it has expired; returns true if it did
    pub fn expire_message(&mut self) -> bool {
        if self
            .transient_message
            .as_ref()
            .is_some_and(TransientMessage::is_expired)
        {
            self.transient_message = None;
            return true;
        }
        false
    }
}
