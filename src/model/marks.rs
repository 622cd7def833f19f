//! Whole-row mark range for cut/copy/paste
//!
//! A range is set in two steps: `mark_start` on one row, then `mark_end` on
//! another. The end may lie above or below the start; `selected_rows`
//! always yields the ascending inclusive range.

use std::ops::RangeInclusive;

use super::document::Document;

/// The observable state of a mark range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkState {
    /// Nothing marked
    Unmarked,
    /// Only the start row is marked
    StartOnly(usize),
    /// Every row between start and end (inclusive) is marked
    Range { start: usize, end: usize },
}

/// Start/end row pair of the marked range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkRange {
    start: Option<usize>,
    end: Option<usize>,
}

impl MarkRange {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<usize> {
        self.end
    }

    pub fn state(&self) -> MarkState {
        match (self.start, self.end) {
            (Some(start), Some(end)) => MarkState::Range { start, end },
            (Some(start), None) => MarkState::StartOnly(start),
            _ => MarkState::Unmarked,
        }
    }

    /// Forget start and end (row flags are left to the caller)
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Clear all marks in `doc` and start a new range at `row_id`
    ///
    /// The virtual trailing row cannot be marked; the old marks are still
    /// cleared in that case.
    pub fn mark_start(&mut self, doc: &mut Document, row_id: usize) -> bool {
        doc.clear_marks(true);
        self.clear();
        if row_id >= doc.row_count() {
            return false;
        }

        self.start = Some(row_id);
        doc.set_row_marked(row_id, true);
        true
    }

    /// Mark every row from the start row to `row_id` inclusive
    ///
    /// Requires an active start and an existing row. Moving an existing end
    /// restarts from the start row so that rows from the previous end do not
    /// stay marked.
    pub fn mark_end(&mut self, doc: &mut Document, row_id: usize) -> bool {
        let Some(start) = self.start else {
            return false;
        };
        if row_id >= doc.row_count() {
            return false;
        }
        if self.end.is_some() {
            self.mark_start(doc, start);
        }

        self.end = Some(row_id);
        let mut current = row_id;
        while current != start {
            doc.set_row_marked(current, true);
            if current > start {
                current -= 1;
            } else {
                current += 1;
            }
        }
        true
    }

    /// The ascending inclusive range, once both ends are set
    pub fn normalized(&self) -> Option<RangeInclusive<usize>> {
        match self.state() {
            MarkState::Range { start, end } => Some(start.min(end)..=start.max(end)),
            _ => None,
        }
    }

    /// Rows targeted by cut/copy
    ///
    /// Without an end mark this is just the cursor row.
    pub fn selected_rows(&self, cursor: usize) -> RangeInclusive<usize> {
        self.normalized().unwrap_or(cursor..=cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked_rows(doc: &Document) -> Vec<usize> {
        doc.rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.marked)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_mark_start_marks_single_row() {
        let mut doc = Document::with_text("a\nb\nc");
        let mut marks = MarkRange::new();
        assert!(marks.mark_start(&mut doc, 1));
        assert_eq!(marks.state(), MarkState::StartOnly(1));
        assert_eq!(marked_rows(&doc), vec![1]);
    }

    #[test]
    fn test_mark_start_rejects_virtual_row() {
        let mut doc = Document::with_text("a\nb");
        let mut marks = MarkRange::new();
        marks.mark_start(&mut doc, 0);
        assert!(!marks.mark_start(&mut doc, 2));
        assert_eq!(marks.state(), MarkState::Unmarked);
        assert!(marked_rows(&doc).is_empty());
    }

    #[test]
    fn test_mark_end_downward_and_upward() {
        let mut doc = Document::with_text("0\n1\n2\n3\n4");
        let mut marks = MarkRange::new();

        marks.mark_start(&mut doc, 1);
        assert!(marks.mark_end(&mut doc, 3));
        assert_eq!(marked_rows(&doc), vec![1, 2, 3]);

        marks.mark_start(&mut doc, 3);
        assert!(marks.mark_end(&mut doc, 0));
        assert_eq!(marked_rows(&doc), vec![0, 1, 2, 3]);
        assert_eq!(marks.selected_rows(4), 0..=3);
    }

    #[test]
    fn test_moving_end_drops_stale_marks() {
        let mut doc = Document::with_text("0\n1\n2\n3\n4");
        let mut marks = MarkRange::new();
        marks.mark_start(&mut doc, 2);
        marks.mark_end(&mut doc, 4);
        marks.mark_end(&mut doc, 1);
        assert_eq!(marked_rows(&doc), vec![1, 2]);
        assert_eq!(marks.state(), MarkState::Range { start: 2, end: 1 });
    }

    #[test]
    fn test_mark_end_requires_start() {
        let mut doc = Document::with_text("a\nb");
        let mut marks = MarkRange::new();
        assert!(!marks.mark_end(&mut doc, 1));
        assert_eq!(marks.state(), MarkState::Unmarked);
    }

    #[test]
    fn test_mark_end_rejects_virtual_row() {
        let mut doc = Document::with_text("a\nb");
        let mut marks = MarkRange::new();
        marks.mark_start(&mut doc, 0);
        assert!(!marks.mark_end(&mut doc, 2));
        assert_eq!(marks.state(), MarkState::StartOnly(0));
    }

    #[test]
    fn test_selected_rows_defaults_to_cursor() {
        let marks = MarkRange::new();
        assert_eq!(marks.selected_rows(5), 5..=5);
    }
}
