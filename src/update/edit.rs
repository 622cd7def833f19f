//! Row list and edit field message handlers

use crate::commands::Cmd;
use crate::messages::EditMsg;
use crate::model::{AppModel, EditMode};

/// Handle row-list, mark, clipboard and edit-field messages for the active tab
pub fn update_edit(model: &mut AppModel, msg: EditMsg) -> Option<Cmd> {
    let page_size = model.config.page_size;
    let Some(editor) = model.editor_mut() else {
        tracing::debug!(?msg, "no open tab");
        return None;
    };

    match msg {
        EditMsg::SelectRow(row_id) => editor.select_row(row_id),
        EditMsg::DocumentStart => editor.document_start(),
        EditMsg::DocumentEnd => editor.document_end(),
        EditMsg::PageUp => editor.page_up(page_size),
        EditMsg::PageDown => editor.page_down(page_size),

        EditMsg::MarkStart => {
            if !editor.mark_start() {
                tracing::debug!(row = editor.cursor(), "mark start rejected");
            }
        }
        EditMsg::MarkEnd => {
            if !editor.mark_end() {
                tracing::debug!(row = editor.cursor(), "mark end rejected");
            }
        }

        EditMsg::Copy => return editor.copy().map(Cmd::SetClipboard),
        EditMsg::Cut => {
            return editor
                .cut()
                .map(|text| Cmd::batch(vec![Cmd::SetClipboard(text), Cmd::Redraw]));
        }
        EditMsg::Paste => {
            return (editor.mode() == EditMode::Edit).then_some(Cmd::PasteFromClipboard);
        }
        EditMsg::InsertRows(text) => {
            if !editor.paste(&text) {
                return None;
            }
        }

        EditMsg::SetEditText(text) => editor.set_edit_text(text),
        EditMsg::CommitEdit => {
            let row = editor.cursor();
            if editor.commit_edit() {
                tracing::debug!(row, "row replaced from edit field");
            }
        }
        EditMsg::CancelEdit => editor.cancel_edit(),
    }

    Some(Cmd::Redraw)
}
