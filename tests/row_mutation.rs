//! Tests for the row mutation engine: load, insert, replace and delete rows

mod common;

use common::{marked_row_ids, test_editor};
use edlin::model::{Document, MarkState, TextList};

// ========================================================================
// Loading and reading back
// ========================================================================

#[test]
fn test_content_round_trip() {
    for text in ["", "one", "a\nb\nc", "a\n\nb", "trailing\n", "héllo\n世界\n"] {
        let doc = Document::with_text(text);
        let expected: Vec<String> = text.split('\n').map(String::from).collect();
        assert_eq!(doc.content(), expected, "text {:?}", text);
    }
}

#[test]
fn test_add_line_appends_split_rows() {
    let mut doc = Document::new();
    assert_eq!(doc.row_count(), 0);

    doc.add_line("first");
    doc.add_line("second\nthird");
    assert_eq!(doc.content(), vec!["first", "second", "third"]);
}

#[test]
fn test_add_line_reloads_edit_field_on_virtual_row() {
    let mut ed = test_editor("a");
    ed.select_row(1);
    assert_eq!(ed.edit_field(), "");

    ed.add_line("b\nc");
    assert_eq!(ed.cursor(), 1);
    assert_eq!(ed.edit_field(), "b");
    assert!(!ed.edit_changed());
}

#[test]
fn test_add_line_keeps_pending_edit_on_real_row() {
    let mut ed = test_editor("a");
    ed.set_edit_text("typed");
    ed.add_line("b");
    assert_eq!(ed.cursor(), 0);
    assert_eq!(ed.edit_field(), "typed");
}

#[test]
fn test_set_content_resets_cursor_and_marks() {
    let mut ed = test_editor("a\nb\nc");
    ed.select_row(2);
    ed.mark_start();

    ed.set_content("x\ny");
    assert_eq!(ed.cursor(), 0);
    assert_eq!(ed.marks().state(), MarkState::Unmarked);
    assert!(marked_row_ids(&ed).is_empty());
}

// ========================================================================
// Insert
// ========================================================================

#[test]
fn test_insert_rows_before_row() {
    let mut doc = Document::with_text("a\nb");
    assert!(doc.insert_rows(1, "x\ny"));
    assert_eq!(doc.content(), vec!["a", "x", "y", "b"]);
}

#[test]
fn test_insert_rows_at_virtual_row_appends() {
    let mut doc = Document::with_text("a\nb");
    assert!(doc.insert_rows(2, "c"));
    assert_eq!(doc.content(), vec!["a", "b", "c"]);
}

#[test]
fn test_insert_rows_out_of_range_is_noop() {
    let mut doc = Document::with_text("a\nb");
    assert!(!doc.insert_rows(3, "x"));
    assert_eq!(doc.content(), vec!["a", "b"]);
}

// ========================================================================
// Replace
// ========================================================================

#[test]
fn test_replace_middle_row_expands_in_place() {
    let mut doc = Document::with_text("a\nb\nc");
    assert!(doc.replace_row(1, "x\ny"));
    assert_eq!(doc.content(), vec!["a", "x", "y", "c"]);
}

#[test]
fn test_replace_last_row_appends_empty_row() {
    let mut doc = Document::with_text("a\nb");
    assert!(doc.replace_row(1, "z"));
    assert_eq!(doc.content(), vec!["a", "z", ""]);
}

#[test]
fn test_replace_virtual_row_appends() {
    let mut doc = Document::with_text("a");
    assert!(doc.replace_row(1, "b"));
    assert_eq!(doc.content(), vec!["a", "b"]);
}

#[test]
fn test_replace_out_of_range_is_noop() {
    let mut doc = Document::with_text("a");
    assert!(!doc.replace_row(5, "b"));
    assert_eq!(doc.content(), vec!["a"]);
}

#[test]
fn test_commit_edit_replaces_cursor_row() {
    let mut ed = test_editor("a\nb\nc");
    ed.select_row(1);
    ed.set_edit_text("changed");
    assert!(ed.edit_changed());
    assert!(ed.commit_edit());
    assert_eq!(ed.content(), vec!["a", "changed", "c"]);
}

#[test]
fn test_cancel_edit_keeps_row() {
    let mut ed = test_editor("a\nb");
    ed.set_edit_text("discarded");
    ed.cancel_edit();
    assert_eq!(ed.content(), vec!["a", "b"]);
    assert_eq!(ed.edit_field(), "a");
}

// ========================================================================
// Delete
// ========================================================================

#[test]
fn test_delete_virtual_row_is_noop() {
    let mut doc = Document::with_text("a\nb");
    assert!(!doc.delete_row(2));
    assert_eq!(doc.row_count(), 2);
}

#[test]
fn test_delete_row_keeps_cursor_index_clamped() {
    let mut ed = test_editor("a\nb\nc");
    assert!(ed.delete_row(1));
    assert_eq!(ed.content(), vec!["a", "c"]);
    assert_eq!(ed.cursor(), 1);
    assert_eq!(ed.edit_field(), "c");

    assert!(ed.delete_row(1));
    assert_eq!(ed.cursor(), 1);
    assert_eq!(ed.edit_field(), "");
}

#[test]
fn test_structural_edit_drops_marks_and_results() {
    let mut ed = test_editor("a\nb\nc");
    ed.mark_start();
    ed.select_row(2);
    ed.mark_end();
    assert!(ed.insert_rows("new"));
    assert_eq!(ed.marks().state(), MarkState::Unmarked);
    assert!(marked_row_ids(&ed).is_empty());

    ed.show_search();
    ed.query("b");
    assert!(!ed.search().is_empty());
    ed.replace_row(0, "other");
    assert!(ed.search().is_empty());
    assert!(!ed.controls_enabled());
}

// ========================================================================
// Invariants
// ========================================================================

#[test]
fn test_virtual_row_tracks_row_count() {
    let mut ed = test_editor("a\nb\nc");

    let steps: [fn(&mut TextList); 5] = [
        |ed: &mut TextList| {
            ed.insert_rows("x\ny");
        },
        |ed: &mut TextList| {
            ed.delete_row(0);
        },
        |ed: &mut TextList| {
            ed.replace_row(1, "p\nq\nr");
        },
        |ed: &mut TextList| {
            ed.delete_row(100);
        },
        |ed: &mut TextList| {
            let last = ed.line_count().saturating_sub(1);
            ed.replace_row(last, "end");
        },
    ];

    for step in steps {
        step(&mut ed);
        ed.move_to_row(usize::MAX);
        assert_eq!(ed.cursor(), ed.line_count());
        assert_eq!(ed.document().row_count(), ed.content().len());
    }
}

#[test]
fn test_line_number_width_follows_row_count() {
    let mut ed = test_editor(&"x\n".repeat(98));
    assert_eq!(ed.line_count(), 99);
    assert_eq!(ed.document().line_number_width(), 2);

    ed.insert_rows("one more");
    assert_eq!(ed.document().line_number_width(), 3);
    assert_eq!(ed.line_number_label(0), "   1  ");

    ed.delete_row(0);
    assert_eq!(ed.document().line_number_width(), 2);
}
