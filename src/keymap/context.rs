//! Context for conditional keybindings
//!
//! Lets the same keystroke do different things on the edit and search
//! surfaces.

use serde::Deserialize;

use crate::model::{EditMode, TextList};

/// Editor state a binding condition can test
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    pub mode: EditMode,
    /// Replace and next/previous are available
    pub controls_enabled: bool,
    /// A mark start (and possibly end) is set
    pub has_marks: bool,
}

impl KeyContext {
    /// Context of the initial edit surface
    pub fn edit() -> Self {
        Self::default()
    }

    /// Context of the search surface before any query ran
    pub fn search() -> Self {
        Self {
            mode: EditMode::Search,
            ..Self::default()
        }
    }

    /// Capture the context of an editor
    pub fn from_editor(editor: &TextList) -> Self {
        Self {
            mode: editor.mode(),
            controls_enabled: editor.controls_enabled(),
            has_marks: editor.marks().start().is_some(),
        }
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    EditMode,
    SearchMode,
    /// Search produced results that can still be navigated
    HasResults,
    HasMarks,
    NoMarks,
}

impl Condition {
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::EditMode => ctx.mode == EditMode::Edit,
            Condition::SearchMode => ctx.mode == EditMode::Search,
            Condition::HasResults => ctx.controls_enabled,
            Condition::HasMarks => ctx.has_marks,
            Condition::NoMarks => !ctx.has_marks,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_conditions() {
        assert!(Condition::EditMode.evaluate(&KeyContext::edit()));
        assert!(!Condition::SearchMode.evaluate(&KeyContext::edit()));
        assert!(Condition::SearchMode.evaluate(&KeyContext::search()));
    }

    #[test]
    fn test_evaluate_all_and_logic() {
        let mut ctx = KeyContext::search();
        let conditions = [Condition::SearchMode, Condition::HasResults];
        assert!(!Condition::evaluate_all(&conditions, &ctx));

        ctx.controls_enabled = true;
        assert!(Condition::evaluate_all(&conditions, &ctx));
        assert!(Condition::evaluate_all(&[], &ctx));
    }

    #[test]
    fn test_context_from_editor() {
        let mut editor = TextList::new();
        editor.set_content("a\nb");
        editor.start_editing();
        editor.mark_start();

        let ctx = KeyContext::from_editor(&editor);
        assert_eq!(ctx.mode, EditMode::Edit);
        assert!(ctx.has_marks);
        assert!(!ctx.controls_enabled);
    }
}
