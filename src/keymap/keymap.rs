//! Keymap: keybinding storage and lookup

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::context::KeyContext;
use super::types::Keystroke;

#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Indices into `bindings`; one keystroke may carry several conditional bindings
    lookup: HashMap<Keystroke, Vec<usize>>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.entry(binding.keystroke).or_default().push(idx);
        self.bindings.push(binding);
    }

    /// Look up a keystroke, ignoring conditional bindings
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup_with_context(keystroke, None)
    }

    /// Look up a keystroke in a context
    ///
    /// Conditional bindings whose conditions hold win over unconditional
    /// ones; among equals the first registered binding wins.
    pub fn lookup_with_context(
        &self,
        keystroke: &Keystroke,
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        let indices = self.lookup.get(keystroke)?;
        let candidates = || indices.iter().map(|&idx| &self.bindings[idx]);

        candidates()
            .find(|b| b.when.is_some() && b.applies(context))
            .or_else(|| candidates().find(|b| b.when.is_none()))
            .map(|b| b.command)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// First binding for a command
    pub fn binding_for(&self, command: Command) -> Option<&Keybinding> {
        self.bindings.iter().find(|b| b.command == command)
    }

    /// Display string for a command's first binding
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.binding_for(command).map(|b| b.keystroke.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::context::Condition;
    use crate::keymap::types::{KeyCode, Modifiers};

    #[test]
    fn test_single_binding_lookup() {
        let keymap =
            Keymap::with_bindings(vec![Keybinding::new(Keystroke::ctrl('s'), Command::SaveFile)]);

        assert_eq!(keymap.lookup(&Keystroke::ctrl('s')), Some(Command::SaveFile));
        assert_eq!(keymap.lookup(&Keystroke::ctrl('k')), None);
    }

    #[test]
    fn test_conditional_binding_wins_in_context() {
        let escape = Keystroke::key(KeyCode::Escape);
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(escape, Command::Quit),
            Keybinding::new(escape, Command::CancelSearch).when_single(Condition::SearchMode),
        ]);

        assert_eq!(keymap.lookup(&escape), Some(Command::Quit));
        assert_eq!(
            keymap.lookup_with_context(&escape, Some(&KeyContext::search())),
            Some(Command::CancelSearch)
        );
        assert_eq!(
            keymap.lookup_with_context(&escape, Some(&KeyContext::edit())),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_display_for_command() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(
            Keystroke::new(KeyCode::Home, Modifiers::CTRL),
            Command::DocumentStart,
        )]);

        assert_eq!(
            keymap.display_for(Command::DocumentStart).as_deref(),
            Some("Ctrl+Home")
        );
        assert_eq!(keymap.display_for(Command::Quit), None);
    }
}
