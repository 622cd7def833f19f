//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod marks;
pub mod row;
pub mod search;
pub mod session;
pub mod status_bar;
pub mod text_list;
pub mod ui;

pub use document::Document;
pub use marks::{MarkRange, MarkState};
pub use row::{Cell, Row, TextStyle};
pub use search::{MatchEntry, MatchResult, Navigation, SearchDirection, SearchState};
pub use session::{Session, Tab};
pub use status_bar::{status_text, MessageKind, TransientMessage};
pub use text_list::{QueryOutcome, SubmitOutcome, TextList};
pub use ui::{EditMode, Focus, UiState};

use crate::config::EditorConfig;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Open tabs
    pub session: Session,
    /// UI state (transient messages)
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
}

impl AppModel {
    /// Create a model with no open tabs
    pub fn new(config: EditorConfig) -> Self {
        Self {
            session: Session::new(),
            ui: UiState::new(),
            config,
        }
    }

    /// Create a model with one tab holding `text`
    pub fn with_text(text: &str, config: EditorConfig) -> Self {
        let mut model = Self::new(config);
        let mut editor = TextList::with_style(model.text_style());
        editor.set_content(text);
        editor.set_ignore_case(model.config.ignore_case);
        editor.start_editing();
        model
            .session
            .add_tab(Tab::new(editor, session::UNTITLED, None));
        model
    }

    /// Default text style derived from the configuration
    pub fn text_style(&self) -> TextStyle {
        TextStyle::with_tab_width(self.config.tab_size)
    }

    pub fn editor(&self) -> Option<&TextList> {
        self.session.active_editor()
    }

    pub fn editor_mut(&mut self) -> Option<&mut TextList> {
        self.session.active_editor_mut()
    }
}
