//! Command enum representing every action a shortcut can trigger
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to zero or more `Msg` values for the update loop.

use crate::messages::{AppMsg, EditMsg, Msg, SearchMsg};
use crate::model::SearchDirection;

/// All editor commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Navigation
    // ========================================================================
    /// Jump to the first row
    DocumentStart,
    /// Jump to the last existing row
    DocumentEnd,
    /// Move the cursor up by one page
    PageUp,
    /// Move the cursor down by one page
    PageDown,

    // ========================================================================
    // Mode
    // ========================================================================
    /// Open the search surface from edit mode
    OpenFindReplace,

    // ========================================================================
    // Mark range and clipboard
    // ========================================================================
    MarkStart,
    MarkEnd,
    Cut,
    Copy,
    Paste,

    // ========================================================================
    // Search
    // ========================================================================
    FindNext,
    FindPrevious,
    ReplaceCurrent,
    ToggleIgnoreCase,
    CancelSearch,

    // ========================================================================
    // Tabs and files
    // ========================================================================
    NewTab,
    CloseTab,
    NextTab,
    PrevTab,
    SaveFile,
    Quit,

    /// Special command that removes an inherited binding
    Unbound,
}

impl Command {
    /// Every bindable command, in declaration order
    pub const ALL: &'static [Command] = &[
        Command::DocumentStart,
        Command::DocumentEnd,
        Command::PageUp,
        Command::PageDown,
        Command::OpenFindReplace,
        Command::MarkStart,
        Command::MarkEnd,
        Command::Cut,
        Command::Copy,
        Command::Paste,
        Command::FindNext,
        Command::FindPrevious,
        Command::ReplaceCurrent,
        Command::ToggleIgnoreCase,
        Command::CancelSearch,
        Command::NewTab,
        Command::CloseTab,
        Command::NextTab,
        Command::PrevTab,
        Command::SaveFile,
        Command::Quit,
    ];

    /// Convert this command to the messages that implement it
    pub fn to_msgs(self) -> Vec<Msg> {
        use Command::*;

        match self {
            DocumentStart => vec![Msg::Edit(EditMsg::DocumentStart)],
            DocumentEnd => vec![Msg::Edit(EditMsg::DocumentEnd)],
            PageUp => vec![Msg::Edit(EditMsg::PageUp)],
            PageDown => vec![Msg::Edit(EditMsg::PageDown)],

            OpenFindReplace => vec![Msg::Search(SearchMsg::Open)],

            MarkStart => vec![Msg::Edit(EditMsg::MarkStart)],
            MarkEnd => vec![Msg::Edit(EditMsg::MarkEnd)],
            Cut => vec![Msg::Edit(EditMsg::Cut)],
            Copy => vec![Msg::Edit(EditMsg::Copy)],
            Paste => vec![Msg::Edit(EditMsg::Paste)],

            FindNext => vec![Msg::Search(SearchMsg::Navigate(SearchDirection::Forward))],
            FindPrevious => vec![Msg::Search(SearchMsg::Navigate(SearchDirection::Backward))],
            ReplaceCurrent => vec![Msg::Search(SearchMsg::ReplaceCurrent)],
            ToggleIgnoreCase => vec![Msg::Search(SearchMsg::ToggleIgnoreCase)],
            CancelSearch => vec![Msg::Search(SearchMsg::Cancel)],

            NewTab => vec![Msg::App(AppMsg::NewTab)],
            CloseTab => vec![Msg::App(AppMsg::CloseActiveTab)],
            NextTab => vec![Msg::App(AppMsg::NextTab)],
            PrevTab => vec![Msg::App(AppMsg::PrevTab)],
            SaveFile => vec![Msg::App(AppMsg::SaveFile(None))],
            Quit => vec![Msg::App(AppMsg::Quit)],

            Unbound => vec![],
        }
    }

    /// Name used in keymap files and by `dispatch_shortcut`
    pub fn name(self) -> &'static str {
        use Command::*;

        match self {
            DocumentStart => "DocumentStart",
            DocumentEnd => "DocumentEnd",
            PageUp => "PageUp",
            PageDown => "PageDown",
            OpenFindReplace => "OpenFindReplace",
            MarkStart => "MarkStart",
            MarkEnd => "MarkEnd",
            Cut => "Cut",
            Copy => "Copy",
            Paste => "Paste",
            FindNext => "FindNext",
            FindPrevious => "FindPrevious",
            ReplaceCurrent => "ReplaceCurrent",
            ToggleIgnoreCase => "ToggleIgnoreCase",
            CancelSearch => "CancelSearch",
            NewTab => "NewTab",
            CloseTab => "CloseTab",
            NextTab => "NextTab",
            PrevTab => "PrevTab",
            SaveFile => "SaveFile",
            Quit => "Quit",
            Unbound => "Unbound",
        }
    }

    /// Human-readable label for help listings
    pub fn display_name(self) -> &'static str {
        use Command::*;

        match self {
            DocumentStart => "Go to First Row",
            DocumentEnd => "Go to Last Row",
            PageUp => "Page Up",
            PageDown => "Page Down",
            OpenFindReplace => "Find and Replace",
            MarkStart => "Mark Start",
            MarkEnd => "Mark End",
            Cut => "Cut Rows",
            Copy => "Copy Rows",
            Paste => "Paste Rows",
            FindNext => "Next Match",
            FindPrevious => "Previous Match",
            ReplaceCurrent => "Replace Match",
            ToggleIgnoreCase => "Toggle Ignore Case",
            CancelSearch => "Close Search",
            NewTab => "New Tab",
            CloseTab => "Close Tab",
            NextTab => "Next Tab",
            PrevTab => "Previous Tab",
            SaveFile => "Save",
            Quit => "Quit",
            Unbound => "(unbound)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_produces_no_messages() {
        assert!(Command::Unbound.to_msgs().is_empty());
    }

    #[test]
    fn test_every_command_produces_messages() {
        for &command in Command::ALL {
            assert_eq!(command.to_msgs().len(), 1, "{:?}", command);
        }
    }

    #[test]
    fn test_find_commands_navigate() {
        assert!(matches!(
            Command::FindPrevious.to_msgs()[0],
            Msg::Search(SearchMsg::Navigate(SearchDirection::Backward))
        ));
    }
}
