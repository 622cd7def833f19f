//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The core never touches the clipboard or the filesystem directly; it asks
//! the host to do so through these.

use std::path::PathBuf;

/// Side effect requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the row list and controls
    Redraw,
    /// Put text on the clipboard
    SetClipboard(String),
    /// Read the clipboard and answer with `EditMsg::InsertRows`
    PasteFromClipboard,
    /// Load a file and answer with `AppMsg::FileLoaded`
    LoadFile { path: PathBuf },
    /// Write a file and answer with `AppMsg::SaveCompleted`
    SaveFile { path: PathBuf, content: String },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Clipboard writes leave the document as it was
            Cmd::SetClipboard(_) => false,
            // The answering message triggers its own redraw
            Cmd::PasteFromClipboard => false,
            Cmd::LoadFile { .. } => false,
            Cmd::SaveFile { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            Cmd::Quit => false,
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
