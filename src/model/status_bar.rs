//! Status line and transient notifications
//!
//! Transient messages replace the original pop-up "toast": a short notice that
//! expires on its own and never blocks input.

use std::time::{Duration, Instant};

use super::text_list::TextList;
use super::ui::EditMode;

/// Kind of transient message (selects the color used by the host)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Failure,
}

/// A status message that disappears after a fixed time
#[derive(Debug, Clone)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    pub kind: MessageKind,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, kind: MessageKind, duration: Duration) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: Instant::now() + duration,
        }
    }

    /// Check if this message has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// One-line summary of an editor: position, mode and search counter
pub fn status_text(editor: &TextList) -> String {
    let mode = match editor.mode() {
        EditMode::Edit => "EDIT",
        EditMode::Search => "SEARCH",
    };
    let mut text = format!(
        "Ln {}/{}  {}",
        editor.cursor() + 1,
        editor.line_count(),
        mode
    );
    if editor.mode() == EditMode::Search {
        text.push_str("  ");
        text.push_str(&editor.search().counter_label());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_message_expiry() {
        let msg = TransientMessage::new("gone", MessageKind::Info, Duration::ZERO);
        assert!(msg.is_expired());

        let msg = TransientMessage::new("stays", MessageKind::Info, Duration::from_secs(60));
        assert!(!msg.is_expired());
    }

    #[test]
    fn test_status_text_shows_mode() {
        let mut editor = TextList::new();
        editor.set_content("a\nb");
        editor.start_editing();
        assert_eq!(status_text(&editor), "Ln 1/2  EDIT");

        editor.show_search();
        assert_eq!(status_text(&editor), "Ln 1/2  SEARCH    0/0  ");
    }
}
