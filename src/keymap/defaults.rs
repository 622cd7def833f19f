//! Default keybindings
//!
//! The shipped bindings live in `keymap.yaml` at the crate root and are
//! embedded at compile time. The same set is also available in code as a
//! fallback if the embedded file fails to parse.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: embedded defaults, then the user's file
///
/// The user file lives at `<config dir>/keymap.yaml`. Entries with
/// `command: Unbound` remove a default binding.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using built-in defaults",
                e
            );
            default_bindings()
        }
    };

    if let Some(user_path) = crate::config_paths::keymap_file() {
        if let Some(user_bindings) = load_user_keymap(&user_path) {
            bindings = merge_bindings(bindings, user_bindings);
        }
    }

    bindings
}

fn load_user_keymap(path: &Path) -> Option<Vec<Keybinding>> {
    if !path.exists() {
        return None;
    }
    match load_keymap_file(path) {
        Ok(user_bindings) => {
            tracing::info!(
                "Merging user keymap from {} ({} bindings)",
                path.display(),
                user_bindings.len()
            );
            Some(user_bindings)
        }
        Err(e) => {
            tracing::warn!("Failed to load user keymap from {}: {}", path.display(), e);
            None
        }
    }
}

/// Merge user bindings into base bindings
///
/// - same keystroke and conditions: the user binding replaces the base one
/// - `Unbound`: every base binding on that keystroke is removed
/// - anything else is appended
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        let existing = result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke && b.when == user_binding.when);

        match existing {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}

/// Built-in bindings, identical to the embedded `keymap.yaml`
pub fn default_bindings() -> Vec<Keybinding> {
    let ctrl = Modifiers::CTRL;
    let alt = Modifiers::ALT;
    let ctrl_shift = Modifiers::CTRL | Modifiers::SHIFT;
    let none = Modifiers::NONE;

    vec![
        // Navigation
        bind(KeyCode::Home, ctrl, Command::DocumentStart),
        bind(KeyCode::End, ctrl, Command::DocumentEnd),
        bind(KeyCode::Down, ctrl, Command::PageDown),
        bind(KeyCode::PageDown, ctrl, Command::PageDown),
        bind(KeyCode::Down, alt, Command::PageDown),
        bind(KeyCode::Up, ctrl, Command::PageUp),
        bind(KeyCode::PageUp, ctrl, Command::PageUp),
        bind(KeyCode::Up, alt, Command::PageUp),
        // Mode
        bind(KeyCode::Char('f'), ctrl, Command::OpenFindReplace),
        bind(KeyCode::Char('r'), ctrl, Command::OpenFindReplace),
        // Mark range and clipboard
        bind(KeyCode::Char('m'), ctrl, Command::MarkStart),
        bind(KeyCode::Char('e'), ctrl, Command::MarkEnd),
        bind(KeyCode::Char('x'), ctrl, Command::Cut),
        bind(KeyCode::Char('c'), ctrl, Command::Copy),
        bind(KeyCode::Char('v'), ctrl, Command::Paste),
        // Search surface
        bind(KeyCode::F(3), none, Command::FindNext),
        bind(KeyCode::F(3), Modifiers::SHIFT, Command::FindPrevious),
        bind(KeyCode::Enter, none, Command::FindNext).when(vec![
            Condition::SearchMode,
            Condition::HasResults,
        ]),
        bind(KeyCode::Char('h'), ctrl, Command::ReplaceCurrent),
        bind(KeyCode::Char('i'), ctrl_shift, Command::ToggleIgnoreCase),
        bind(KeyCode::Escape, none, Command::CancelSearch).when_single(Condition::SearchMode),
        // Tabs and files
        bind(KeyCode::Char('t'), ctrl, Command::NewTab),
        bind(KeyCode::Char('w'), ctrl, Command::CloseTab),
        bind(KeyCode::Tab, ctrl, Command::NextTab),
        bind(KeyCode::Tab, ctrl_shift, Command::PrevTab),
        bind(KeyCode::Char('s'), ctrl, Command::SaveFile),
        bind(KeyCode::Char('q'), ctrl, Command::Quit),
    ]
}
