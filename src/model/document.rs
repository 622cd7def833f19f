//! Document model - the ordered row sequence and its mutation engine
//!
//! Rows are addressed by position. Index `row_count()` is always valid as the
//! "virtual trailing row" (the append position) even though no row is stored
//! there. Every operation that changes the row count recomputes the
//! line-number width.

use super::row::{Row, TextStyle};

/// The text rows of one open document
#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<Row>,
    /// Default style for cells and rows without an override
    pub style: TextStyle,
    /// Digits needed to print the largest line number
    line_number_width: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_style(TextStyle::default())
    }

    /// Create an empty document with a default style
    pub fn with_style(style: TextStyle) -> Self {
        Self {
            rows: Vec::new(),
            style,
            line_number_width: 1,
        }
    }

    /// Create a document with initial text (one row per `\n`-separated line)
    pub fn with_text(text: &str) -> Self {
        let mut doc = Self::new();
        doc.set_content(text);
        doc
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of stored rows (also the index of the virtual trailing row)
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn row(&self, row_id: usize) -> Option<&Row> {
        self.rows.get(row_id)
    }

    #[inline]
    pub fn row_mut(&mut self, row_id: usize) -> Option<&mut Row> {
        self.rows.get_mut(row_id)
    }

    /// Text of a row; the virtual trailing row (or anything past it) is empty
    pub fn row_string(&self, row_id: usize) -> String {
        self.rows
            .get(row_id)
            .map(|row| row.to_string())
            .unwrap_or_default()
    }

    /// Characters of a row, optionally case-folded for search
    pub fn row_chars(&self, row_id: usize, ignore_case: bool) -> Vec<char> {
        self.rows
            .get(row_id)
            .map(|row| row.chars(ignore_case))
            .unwrap_or_default()
    }

    /// All rows as strings, in order
    pub fn content(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.to_string()).collect()
    }

    /// Iterate over row strings without collecting them
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| row.to_string())
    }

    // =========================================================================
    // Line numbers
    // =========================================================================

    /// Digits needed for the largest line number
    #[inline]
    pub fn line_number_width(&self) -> usize {
        self.line_number_width
    }

    /// Gutter label for a row (1-based)
    ///
    /// The row holding the current search match gets an arrow instead of the
    /// second trailing space.
    pub fn line_number_label(&self, row_id: usize, current_match: bool) -> String {
        let width = self.line_number_width;
        if current_match {
            format!(" {:>width$}\u{2192} ", row_id + 1)
        } else {
            format!(" {:>width$}  ", row_id + 1)
        }
    }

    fn update_line_format(&mut self) {
        self.line_number_width = digit_count(self.rows.len());
    }

    // =========================================================================
    // Mutation engine
    // =========================================================================

    /// Replace the whole document with `text`
    pub fn set_content(&mut self, text: &str) {
        self.rows = Row::split_lines(text);
        self.update_line_format();
    }

    /// Append `text` (split on `\n`) after the last row
    pub fn add_line(&mut self, text: &str) {
        self.rows.extend(Row::split_lines(text));
        self.update_line_format();
    }

    /// Insert `text` as one or more rows immediately before `row_id`
    ///
    /// Returns false (and changes nothing) when `row_id` is past the virtual
    /// trailing row.
    pub fn insert_rows(&mut self, row_id: usize, text: &str) -> bool {
        if row_id > self.rows.len() {
            tracing::debug!(row_id, rows = self.rows.len(), "insert_rows out of range");
            return false;
        }
        let new_rows = Row::split_lines(text);
        self.rows.splice(row_id..row_id, new_rows);
        self.update_line_format();
        true
    }

    /// Replace row `row_id` with `text` (which may expand into several rows)
    ///
    /// Replacing the last existing row also appends an empty row so that the
    /// document keeps a blank line to type into. Replacing the virtual
    /// trailing row appends.
    pub fn replace_row(&mut self, row_id: usize, text: &str) -> bool {
        let count = self.rows.len();
        if row_id > count {
            tracing::debug!(row_id, rows = count, "replace_row out of range");
            return false;
        }

        let new_rows = Row::split_lines(text);
        if row_id == count {
            self.rows.extend(new_rows);
        } else if row_id + 1 == count {
            self.rows.truncate(row_id);
            self.rows.extend(new_rows);
            self.rows.push(Row::default());
        } else {
            self.rows.splice(row_id..=row_id, new_rows);
        }
        self.update_line_format();
        true
    }

    /// Remove one row; the virtual trailing row cannot be deleted
    pub fn delete_row(&mut self, row_id: usize) -> bool {
        if row_id >= self.rows.len() {
            tracing::debug!(row_id, rows = self.rows.len(), "delete_row ignored");
            return false;
        }
        self.rows.remove(row_id);
        self.update_line_format();
        true
    }

    /// Splice the inclusive cell range `[col1, col2]` of one row with `chars`
    ///
    /// New cells take the row style and the given marked flag.
    pub fn replace_cells(
        &mut self,
        row_id: usize,
        col1: usize,
        col2: usize,
        chars: &[char],
        marked: bool,
    ) -> bool {
        let Some(row) = self.rows.get_mut(row_id) else {
            return false;
        };
        if col1 > col2 || col2 >= row.cells.len() {
            tracing::debug!(row_id, col1, col2, len = row.cells.len(), "replace_cells out of range");
            return false;
        }

        let style = row.style;
        let replacement = chars.iter().map(|&ch| super::row::Cell {
            ch,
            style,
            marked,
        });
        row.cells.splice(col1..=col2, replacement);
        true
    }

    /// Set the marked flag of the inclusive cell range `[col1, col2]`
    ///
    /// The range is clipped to the row; an unknown row is ignored.
    pub fn mark_cells(&mut self, row_id: usize, col1: usize, col2: usize, mark: bool) {
        if let Some(row) = self.rows.get_mut(row_id) {
            for cell in row.cells.iter_mut().take(col2 + 1).skip(col1) {
                cell.marked = mark;
            }
        }
    }

    /// Clear every whole-row mark, and the cell highlights too if `cells`
    pub fn clear_marks(&mut self, cells: bool) {
        for row in &mut self.rows {
            row.marked = false;
            if cells {
                for cell in &mut row.cells {
                    cell.marked = false;
                }
            }
        }
    }

    /// Set the whole-row mark of one row
    pub fn set_row_marked(&mut self, row_id: usize, marked: bool) {
        if let Some(row) = self.rows.get_mut(row_id) {
            row.marked = marked;
        }
    }
}

/// Number of decimal digits in `n` (at least 1)
fn digit_count(n: usize) -> usize {
    let mut digits = 1;
    let mut rest = n / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(999), 3);
        assert_eq!(digit_count(1000), 4);
    }

    #[test]
    fn test_line_number_label_tracks_row_count() {
        let mut doc = Document::with_text(&"x\n".repeat(8));
        assert_eq!(doc.row_count(), 9);
        assert_eq!(doc.line_number_label(0, false), " 1  ");

        doc.add_line("ten");
        assert_eq!(doc.line_number_width(), 2);
        assert_eq!(doc.line_number_label(0, false), "  1  ");
        assert_eq!(doc.line_number_label(9, true), " 10\u{2192} ");

        doc.delete_row(0);
        assert_eq!(doc.line_number_width(), 1);
    }

    #[test]
    fn test_replace_cells_keeps_row_style() {
        let mut doc = Document::with_text("hello");
        let style = TextStyle::with_tab_width(8);
        doc.row_mut(0).unwrap().style = Some(style);

        assert!(doc.replace_cells(0, 1, 3, &['E', 'Y'], true));
        let row = doc.row(0).unwrap();
        assert_eq!(row.to_string(), "hEYo");
        assert!(row.cells[1].marked && row.cells[2].marked);
        assert!(!row.cells[3].marked);
        assert_eq!(row.cells[1].style, Some(style));
    }

    #[test]
    fn test_replace_cells_out_of_range_is_noop() {
        let mut doc = Document::with_text("abc");
        assert!(!doc.replace_cells(0, 2, 5, &['x'], false));
        assert!(!doc.replace_cells(3, 0, 0, &['x'], false));
        assert!(!doc.replace_cells(0, 2, 1, &['x'], false));
        assert_eq!(doc.content(), vec!["abc"]);
    }

    #[test]
    fn test_mark_cells_clips_to_row() {
        let mut doc = Document::with_text("abc");
        doc.mark_cells(0, 1, 10, true);
        let row = doc.row(0).unwrap();
        assert!(!row.cells[0].marked);
        assert!(row.cells[1].marked && row.cells[2].marked);
    }
}
