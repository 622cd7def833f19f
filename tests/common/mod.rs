//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use edlin::commands::Cmd;
use edlin::config::EditorConfig;
use edlin::messages::Msg;
use edlin::model::{AppModel, MatchResult, TextList};
use edlin::update::update;

/// Editor holding `text`, in edit mode with the cursor on row 0
pub fn test_editor(text: &str) -> TextList {
    let mut editor = TextList::new();
    editor.set_content(text);
    editor.start_editing();
    editor
}

/// Editor in search mode with `query` already run from the cursor row
pub fn searched_editor(text: &str, query: &str, ignore_case: bool) -> TextList {
    let mut editor = test_editor(text);
    editor.set_ignore_case(ignore_case);
    editor.show_search();
    editor.set_search_text(query);
    editor.submit_search();
    editor
}

/// Model with a single tab holding `text`
pub fn test_model(text: &str) -> AppModel {
    AppModel::with_text(text, EditorConfig::default())
}

/// Run messages through update, collecting the returned commands
pub fn send(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) -> Vec<Cmd> {
    msgs.into_iter()
        .filter_map(|msg| update(model, msg))
        .collect()
}

/// Content of the active tab
pub fn content(model: &AppModel) -> Vec<String> {
    model.editor().expect("active tab").content()
}

/// Indices of rows carrying a whole-row mark
pub fn marked_row_ids(editor: &TextList) -> Vec<usize> {
    editor
        .document()
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| row.marked)
        .map(|(i, _)| i)
        .collect()
}

/// (row, col) of every cell highlighted by a search
pub fn highlighted_cells(editor: &TextList) -> Vec<(usize, usize)> {
    editor
        .document()
        .rows()
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.marked)
                .map(move |(c, _)| (r, c))
        })
        .collect()
}

/// Live search results of an editor, in result order
pub fn live_results(editor: &TextList) -> Vec<MatchResult> {
    editor
        .search()
        .entries()
        .iter()
        .filter_map(|entry| entry.as_live())
        .collect()
}

/// Shorthand for a match result
pub fn m(row: usize, col1: usize, col2: usize) -> MatchResult {
    MatchResult::new(row, col1, col2)
}
