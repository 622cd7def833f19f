//! Keybinding: one keystroke mapped to a command

use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::Keystroke;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
    /// Conditions that must all hold for this binding to activate
    pub when: Option<Vec<Condition>>,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self {
            keystroke,
            command,
            when: None,
        }
    }

    /// Add conditions to this binding (builder pattern)
    pub fn when(mut self, conditions: Vec<Condition>) -> Self {
        self.when = Some(conditions);
        self
    }

    pub fn when_single(self, condition: Condition) -> Self {
        self.when(vec![condition])
    }

    /// Whether the binding's conditions hold in `context`
    ///
    /// Unconditional bindings always apply. Conditional ones never apply
    /// without a context.
    pub fn applies(&self, context: Option<&KeyContext>) -> bool {
        match (&self.when, context) {
            (None, _) => true,
            (Some(conditions), Some(ctx)) => Condition::evaluate_all(conditions, ctx),
            (Some(_), None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditional_binding_needs_context() {
        let binding =
            Keybinding::new(Keystroke::ctrl('m'), Command::MarkStart).when_single(Condition::EditMode);

        assert!(!binding.applies(None));
        assert!(binding.applies(Some(&KeyContext::edit())));
        assert!(!binding.applies(Some(&KeyContext::search())));
    }

    #[test]
    fn test_unconditional_binding_always_applies() {
        let binding = Keybinding::new(Keystroke::ctrl('s'), Command::SaveFile);
        assert!(binding.applies(None));
        assert!(binding.applies(Some(&KeyContext::search())));
    }
}
