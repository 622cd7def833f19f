//! TextList - the editor for one open document
//!
//! Combines the row model with the cursor row, the whole-row mark range, the
//! search results and the edit/search mode. All operations run to completion
//! synchronously; out-of-range requests are ignored.
//!
//! Structural edits (insert, delete, replace row) drop any mark range and
//! search results instead of re-anchoring them.

use super::document::Document;
use super::marks::{MarkRange, MarkState};
use super::row::TextStyle;
use super::search::{find_list_matches, MatchResult, Navigation, SearchDirection, SearchState};
use super::ui::{EditMode, Focus};

/// Outcome of running a search query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Matches were found; the cursor moved to the first one
    Found { count: usize },
    NotFound,
}

/// Outcome of submitting the search field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Query(QueryOutcome),
    Navigated(Navigation),
    /// Same query as before and no results to step through
    Ignored,
}

#[derive(Debug, Clone)]
pub struct TextList {
    document: Document,
    /// Selected row; `document.row_count()` is the virtual trailing row
    cursor: usize,
    marks: MarkRange,
    search: SearchState,
    mode: EditMode,
    focus: Focus,

    /// Row text as it was loaded into the edit field
    edit_text: String,
    /// Current edit field content
    edit_field: String,

    search_field: String,
    replace_field: String,
    /// The search field changed since the last query ran
    query_changed: bool,
    ignore_case: bool,
    /// Replace and up/down navigation are available
    controls_enabled: bool,
}

impl Default for TextList {
    fn default() -> Self {
        Self::new()
    }
}

impl TextList {
    pub fn new() -> Self {
        Self::with_style(TextStyle::default())
    }

    pub fn with_style(style: TextStyle) -> Self {
        Self {
            document: Document::with_style(style),
            cursor: 0,
            marks: MarkRange::new(),
            search: SearchState::default(),
            mode: EditMode::Edit,
            focus: Focus::RowList,
            edit_text: String::new(),
            edit_field: String::new(),
            search_field: String::new(),
            replace_field: String::new(),
            query_changed: false,
            ignore_case: false,
            controls_enabled: false,
        }
    }

    // =========================================================================
    // Host surface
    // =========================================================================

    /// Load `text` as the whole document, one row per line
    pub fn set_content(&mut self, text: &str) {
        self.document.set_content(text);
        self.invalidate();
        self.move_to_row(0);
    }

    /// Append `text` (split on `\n`) after the last row
    ///
    /// A cursor on the virtual trailing row now sits on the first appended
    /// row, so the edit field is reloaded from it.
    pub fn add_line(&mut self, text: &str) {
        let on_virtual_row = self.cursor == self.document.row_count();
        self.document.add_line(text);
        if on_virtual_row {
            self.move_to_row(self.cursor);
        }
    }

    /// All rows as strings, in order
    pub fn content(&self) -> Vec<String> {
        self.document.content()
    }

    /// Number of stored rows
    pub fn line_count(&self) -> usize {
        self.document.row_count()
    }

    /// Enter the initial edit state
    pub fn start_editing(&mut self) {
        self.show_edit();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn document(&self) -> &Document {
        &self.document
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    #[inline]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn marks(&self) -> &MarkRange {
        &self.marks
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn edit_field(&self) -> &str {
        &self.edit_field
    }

    /// Whether the edit field differs from the loaded row (confirm/cancel enabled)
    pub fn edit_changed(&self) -> bool {
        self.edit_field != self.edit_text
    }

    pub fn search_field(&self) -> &str {
        &self.search_field
    }

    pub fn replace_field(&self) -> &str {
        &self.replace_field
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn set_ignore_case(&mut self, ignore_case: bool) {
        self.ignore_case = ignore_case;
    }

    /// Flip ignore-case; a non-empty search field will be queried again on submit
    pub fn toggle_ignore_case(&mut self) -> bool {
        self.ignore_case = !self.ignore_case;
        if !self.search_field.is_empty() {
            self.query_changed = true;
        }
        self.ignore_case
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    /// Gutter label for a row, with the arrow on the current match's row
    pub fn line_number_label(&self, row_id: usize) -> String {
        let current = self.search.current().is_some_and(|m| m.row == row_id);
        self.document.line_number_label(row_id, current)
    }

    // =========================================================================
    // Mode switching
    // =========================================================================

    /// Show the edit surface and reset marks, results and the edit field
    pub fn show_edit(&mut self) {
        self.mode = EditMode::Edit;
        self.document.clear_marks(true);
        self.marks.clear();
        self.search.clear();
        self.controls_enabled = false;
        self.move_to_row(self.cursor);
        self.focus = Focus::RowList;
    }

    /// Show the search surface with empty fields and disabled controls
    pub fn show_search(&mut self) {
        self.mode = EditMode::Search;
        self.search_field.clear();
        self.replace_field.clear();
        self.query_changed = false;
        self.controls_enabled = false;
        self.search.clear();
        self.document.clear_marks(false);
        self.marks.clear();
        self.focus = Focus::SearchField;
    }

    // =========================================================================
    // Cursor movement
    // =========================================================================

    /// Move the cursor to `row_id` (clamped) and load the row into the edit field
    pub fn move_to_row(&mut self, row_id: usize) {
        self.cursor = row_id.min(self.document.row_count());
        self.edit_text = self.document.row_string(self.cursor);
        self.edit_field = self.edit_text.clone();
    }

    /// Select a row from the list (click) and give the list focus
    pub fn select_row(&mut self, row_id: usize) {
        self.move_to_row(row_id);
        self.focus = Focus::RowList;
    }

    fn last_row(&self) -> usize {
        self.document.row_count().saturating_sub(1)
    }

    pub fn document_start(&mut self) {
        self.move_to_row(0);
    }

    pub fn document_end(&mut self) {
        self.move_to_row(self.last_row());
    }

    pub fn page_down(&mut self, rows: usize) {
        let target = (self.cursor + rows).min(self.last_row());
        self.move_to_row(target);
    }

    pub fn page_up(&mut self, rows: usize) {
        self.move_to_row(self.cursor.saturating_sub(rows));
    }

    // =========================================================================
    // Structural edits
    // =========================================================================

    fn invalidate(&mut self) {
        if self.marks.state() != MarkState::Unmarked || !self.search.is_empty() {
            tracing::debug!("structural edit dropped marks and search results");
        }
        self.document.clear_marks(true);
        self.marks.clear();
        self.search.clear();
        self.controls_enabled = false;
    }

    /// Insert `text` as rows before the cursor row
    pub fn insert_rows(&mut self, text: &str) -> bool {
        if !self.document.insert_rows(self.cursor, text) {
            return false;
        }
        self.invalidate();
        self.move_to_row(self.cursor);
        true
    }

    /// Replace one row with `text` (possibly several rows)
    pub fn replace_row(&mut self, row_id: usize, text: &str) -> bool {
        if !self.document.replace_row(row_id, text) {
            return false;
        }
        self.invalidate();
        true
    }

    /// Delete one row; the cursor stays at the same index (clamped)
    pub fn delete_row(&mut self, row_id: usize) -> bool {
        if !self.document.delete_row(row_id) {
            return false;
        }
        self.invalidate();
        self.move_to_row(row_id);
        true
    }

    // =========================================================================
    // Mark range (edit mode only)
    // =========================================================================

    /// Start a new mark range at the cursor row
    pub fn mark_start(&mut self) -> bool {
        if self.mode != EditMode::Edit {
            return false;
        }
        self.marks.mark_start(&mut self.document, self.cursor)
    }

    /// Extend the mark range to the cursor row
    pub fn mark_end(&mut self) -> bool {
        if self.mode != EditMode::Edit {
            return false;
        }
        self.marks.mark_end(&mut self.document, self.cursor)
    }

    /// Text of the marked range, or of the cursor row when no range is set
    ///
    /// Empty on the virtual trailing row.
    pub fn marked_rows(&self) -> Vec<String> {
        let count = self.document.row_count();
        self.marks
            .selected_rows(self.cursor)
            .filter(|&row_id| row_id < count)
            .map(|row_id| self.document.row_string(row_id))
            .collect()
    }

    /// Remove the marked range (or the cursor row) and return its text
    pub fn delete_marked_rows(&mut self) -> Vec<String> {
        let range = self.marks.selected_rows(self.cursor);
        let start = *range.start();
        let end = (*range.end()).min(self.document.row_count().saturating_sub(1));

        let mut removed = Vec::new();
        if start < self.document.row_count() {
            for row_id in start..=end {
                removed.push(self.document.row_string(row_id));
            }
            for _ in start..=end {
                self.delete_row(start);
            }
        }

        self.document.clear_marks(false);
        self.marks.clear();
        removed
    }

    /// Clipboard text for copy; `None` outside edit mode or when no row is targeted
    pub fn copy(&self) -> Option<String> {
        if self.mode != EditMode::Edit {
            return None;
        }
        let rows = self.marked_rows();
        (!rows.is_empty()).then(|| rows.join("\n"))
    }

    /// Remove the marked rows and return them as clipboard text
    pub fn cut(&mut self) -> Option<String> {
        if self.mode != EditMode::Edit {
            return None;
        }
        let rows = self.delete_marked_rows();
        (!rows.is_empty()).then(|| rows.join("\n"))
    }

    /// Insert clipboard text before the cursor row
    pub fn paste(&mut self, text: &str) -> bool {
        if self.mode != EditMode::Edit {
            return false;
        }
        self.insert_rows(text)
    }

    // =========================================================================
    // Single-row editing
    // =========================================================================

    /// Track edit field changes
    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        self.edit_field = text.into();
        self.focus = Focus::EditField;
    }

    /// Apply the edit field to the cursor row if it changed, then return to edit mode
    pub fn commit_edit(&mut self) -> bool {
        let changed = self.edit_changed();
        if changed {
            let text = std::mem::take(&mut self.edit_field);
            self.replace_row(self.cursor, &text);
        }
        self.show_edit();
        changed
    }

    /// Discard the edit field and return to edit mode
    pub fn cancel_edit(&mut self) {
        self.show_edit();
    }

    // =========================================================================
    // Search and replace (search mode only)
    // =========================================================================

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() && text != self.search_field {
            self.query_changed = true;
        }
        self.search_field = text;
        self.focus = Focus::SearchField;
    }

    pub fn set_replace_text(&mut self, text: impl Into<String>) {
        self.replace_field = text.into();
        self.focus = Focus::ReplaceField;
    }

    /// Run a query from the cursor row
    ///
    /// On success every matched cell is highlighted, the controls are enabled
    /// and the cursor moves to the first match. On failure all marks are
    /// cleared and the controls disabled.
    pub fn query(&mut self, text: &str) -> QueryOutcome {
        let results = find_list_matches(&self.document, self.cursor, text, self.ignore_case);
        self.document.clear_marks(true);
        self.marks.clear();

        let Some(first) = results.first().copied() else {
            self.search.clear();
            self.controls_enabled = false;
            return QueryOutcome::NotFound;
        };

        for m in &results {
            self.document.mark_cells(m.row, m.col1, m.col2, true);
        }
        let count = results.len();
        self.search = SearchState::new(results);
        self.controls_enabled = true;
        self.move_to_row(first.row);
        QueryOutcome::Found { count }
    }

    /// Act on the search field: run a changed query, otherwise step forward
    pub fn submit_search(&mut self) -> SubmitOutcome {
        if self.mode != EditMode::Search {
            return SubmitOutcome::Ignored;
        }
        if self.query_changed {
            self.query_changed = false;
            let text = self.search_field.clone();
            return SubmitOutcome::Query(self.query(&text));
        }
        if self.controls_enabled {
            return SubmitOutcome::Navigated(self.next_result(SearchDirection::Forward));
        }
        SubmitOutcome::Ignored
    }

    /// Step to the next live match and move the cursor to its row
    pub fn next_result(&mut self, direction: SearchDirection) -> Navigation {
        if self.mode != EditMode::Search || !self.controls_enabled {
            return Navigation::Exhausted;
        }
        let nav = self.search.step(direction);
        match nav {
            Navigation::Moved(m) => self.move_to_row(m.row),
            Navigation::Stayed => {}
            Navigation::Exhausted => self.controls_enabled = false,
        }
        nav
    }

    /// Replace the current match with the replace field
    ///
    /// The match entry is consumed so navigation skips it. Other matches on
    /// the same row keep their original columns.
    pub fn replace_current(&mut self) -> Option<MatchResult> {
        if self.mode != EditMode::Search || !self.controls_enabled {
            return None;
        }
        let m = self.search.current()?;
        let chars: Vec<char> = self.replace_field.chars().collect();
        if !self
            .document
            .replace_cells(m.row, m.col1, m.col2, &chars, true)
        {
            return None;
        }
        self.search.consume_current();
        if self.cursor == m.row {
            self.move_to_row(m.row);
        }
        Some(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(text: &str) -> TextList {
        let mut editor = TextList::new();
        editor.set_content(text);
        editor.start_editing();
        editor
    }

    #[test]
    fn test_move_to_row_clamps_to_virtual_row() {
        let mut ed = editor("a\nb");
        ed.move_to_row(10);
        assert_eq!(ed.cursor(), 2);
        assert_eq!(ed.edit_field(), "");
    }

    #[test]
    fn test_page_movement_clamps() {
        let mut ed = editor(&"x\n".repeat(30));
        ed.page_down(10);
        assert_eq!(ed.cursor(), 10);
        ed.page_down(100);
        assert_eq!(ed.cursor(), 30);
        ed.page_up(25);
        assert_eq!(ed.cursor(), 5);
        ed.page_up(25);
        assert_eq!(ed.cursor(), 0);
    }

    #[test]
    fn test_commit_unchanged_edit_is_noop() {
        let mut ed = editor("a\nb");
        ed.select_row(1);
        assert!(!ed.edit_changed());
        assert!(!ed.commit_edit());
        assert_eq!(ed.content(), vec!["a", "b"]);
    }

    #[test]
    fn test_mark_commands_rejected_in_search_mode() {
        let mut ed = editor("a\nb");
        ed.show_search();
        assert!(!ed.mark_start());
        assert!(ed.copy().is_none());
        assert!(!ed.paste("x"));
    }
}
