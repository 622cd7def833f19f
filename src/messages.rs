//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::model::SearchDirection;

/// Row-list and edit-field messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    /// Row picked in the list (click or arrow key)
    SelectRow(usize),
    /// Jump to the first row (Ctrl+Home)
    DocumentStart,
    /// Jump to the last row (Ctrl+End)
    DocumentEnd,
    PageUp,
    PageDown,

    // === Mark range ===
    /// Start a mark range at the cursor row (Ctrl+M)
    MarkStart,
    /// Extend the mark range to the cursor row (Ctrl+E)
    MarkEnd,

    // === Clipboard ===
    Copy,
    Cut,
    /// Ask the host for clipboard text
    Paste,
    /// Clipboard text delivered by the host; inserted before the cursor row
    InsertRows(String),

    // === Edit field ===
    /// Edit field content changed
    SetEditText(String),
    /// Apply the edit field to the cursor row (Enter / confirm)
    CommitEdit,
    /// Discard the edit field (cancel)
    CancelEdit,
}

/// Search/replace surface messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMsg {
    /// Switch from edit to search mode (Ctrl+F / Ctrl+R); ignored in search mode
    Open,
    SetQuery(String),
    SetReplacement(String),
    ToggleIgnoreCase,
    /// Run the query, or step forward if it did not change
    Submit,
    /// Step to the next or previous match
    Navigate(SearchDirection),
    /// Replace the current match
    ReplaceCurrent,
    /// Return to edit mode
    Cancel,
}

/// Tab and file-level messages
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Open an empty untitled tab
    NewTab,
    /// Ask the host to load a file into a new tab
    OpenFile(PathBuf),
    /// File content loaded by the host
    FileLoaded {
        path: PathBuf,
        result: Result<String, String>,
    },
    /// Save the active tab (to its own path when `None`)
    SaveFile(Option<PathBuf>),
    /// Save completed by the host
    SaveCompleted {
        path: PathBuf,
        result: Result<(), String>,
    },
    SelectTab(usize),
    NextTab,
    PrevTab,
    CloseTab(usize),
    /// Close the active tab
    CloseActiveTab,
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Edit(EditMsg),
    Search(SearchMsg),
    App(AppMsg),
}
