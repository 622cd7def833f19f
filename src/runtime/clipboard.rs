//! Clipboard access for the host
//!
//! Uses the system clipboard when one is available and keeps an in-process
//! copy as a fallback (headless sessions, CI).

/// Clipboard with an in-process fallback
#[derive(Debug, Default)]
pub struct ClipboardStore {
    /// Last text written; returned when the system clipboard is unavailable
    local: String,
    /// Never touch the system clipboard
    local_only: bool,
}

impl ClipboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that only keeps text in memory
    pub fn local_only() -> Self {
        Self {
            local: String::new(),
            local_only: true,
        }
    }

    pub fn set_text(&mut self, text: String) {
        if !self.local_only {
            match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if let Err(e) = clipboard.set_text(text.clone()) {
                        tracing::warn!("Failed to write system clipboard: {}", e);
                    }
                }
                Err(e) => tracing::debug!("System clipboard unavailable: {}", e),
            }
        }
        self.local = text;
    }

    pub fn get_text(&mut self) -> String {
        if !self.local_only {
            if let Ok(text) = arboard::Clipboard::new().and_then(|mut c| c.get_text()) {
                return text;
            }
        }
        self.local.clone()
    }
}
