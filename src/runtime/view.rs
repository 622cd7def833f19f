//! Plain-text rendering of the model for the console host
//!
//! Row layout: cursor indicator, mark indicator, gutter label, text. Cells
//! highlighted by a search are wrapped in `[` `]`. Tabs expand to the next
//! stop of the cell's resolved style.

use std::fmt::Write;

use edlin::model::{status_text, AppModel, TextList};

/// Rows shown above and below the cursor in the compact view
pub const CONTEXT_ROWS: usize = 5;

/// Render one row (or the virtual trailing row when `row_id == line_count`)
pub fn render_row(editor: &TextList, row_id: usize) -> String {
    let cursor = if row_id == editor.cursor() { '>' } else { ' ' };
    let row = editor.document().row(row_id);
    let mark = if row.is_some_and(|r| r.marked) { '*' } else { ' ' };

    let mut out = format!("{}{}{}", cursor, mark, editor.line_number_label(row_id));
    let Some(row) = row else {
        return out;
    };

    let document_style = editor.document().style;
    let mut in_highlight = false;
    let mut column = 0;
    for (col, cell) in row.cells.iter().enumerate() {
        let highlighted = cell.marked;
        if highlighted != in_highlight {
            out.push(if highlighted { '[' } else { ']' });
            in_highlight = highlighted;
        }
        if cell.ch == '\t' {
            let style = row.resolve_style(col, document_style).unwrap_or(document_style);
            let advance = style.tab_advance(column);
            out.extend(std::iter::repeat(' ').take(advance));
            column += advance;
        } else {
            out.push(cell.ch);
            column += 1;
        }
    }
    if in_highlight {
        out.push(']');
    }
    out
}

/// Render rows `start..end`, clamped to the rows plus the virtual row
pub fn render_rows(editor: &TextList, start: usize, end: usize) -> String {
    let last = editor.line_count();
    let mut out = String::new();
    for row_id in start..end.min(last + 1) {
        let _ = writeln!(out, "{}", render_row(editor, row_id));
    }
    out
}

/// Rows around the cursor
pub fn render_around_cursor(editor: &TextList) -> String {
    let cursor = editor.cursor();
    render_rows(
        editor,
        cursor.saturating_sub(CONTEXT_ROWS),
        cursor + CONTEXT_ROWS + 1,
    )
}

/// Tab strip, the active tab in brackets
pub fn render_tabs(model: &AppModel) -> String {
    model
        .session
        .tabs()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            if i == model.session.active_index() {
                format!("[{} {}]", i + 1, tab.title)
            } else {
                format!(" {} {} ", i + 1, tab.title)
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Status line with the transient message, if any
pub fn render_status(model: &AppModel) -> String {
    let mut out = model.editor().map(status_text).unwrap_or_default();
    if let Some(editor) = model.editor() {
        if editor.edit_changed() {
            let _ = write!(out, "  edit: {:?}", editor.edit_field());
        }
    }
    if let Some(msg) = &model.ui.transient_message {
        let _ = write!(out, "  | {}", msg.text);
    }
    out
}

/// Full screen: tabs, rows around the cursor and the status line
pub fn render_screen(model: &AppModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", render_tabs(model));
    match model.editor() {
        Some(editor) => out.push_str(&render_around_cursor(editor)),
        None => out.push_str("(no open tabs)\n"),
    }
    let _ = writeln!(out, "{}", render_status(model));
    out
}
