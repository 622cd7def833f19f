//! Search and replace message handlers

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::SearchMsg;
use crate::model::{AppModel, EditMode, MessageKind, Navigation, QueryOutcome, SubmitOutcome};

/// Handle search surface messages for the active tab
pub fn update_search(model: &mut AppModel, msg: SearchMsg) -> Option<Cmd> {
    let toast = Duration::from_millis(model.config.toast_ms * 2);
    let Some(editor) = model.editor_mut() else {
        tracing::debug!(?msg, "no open tab");
        return None;
    };

    match msg {
        SearchMsg::Open => {
            if editor.mode() != EditMode::Edit {
                return None;
            }
            editor.show_search();
        }
        SearchMsg::Cancel => {
            if editor.mode() != EditMode::Search {
                return None;
            }
            editor.show_edit();
        }

        SearchMsg::SetQuery(text) => editor.set_search_text(text),
        SearchMsg::SetReplacement(text) => editor.set_replace_text(text),
        SearchMsg::ToggleIgnoreCase => {
            let ignore_case = editor.toggle_ignore_case();
            tracing::debug!(ignore_case, "ignore case toggled");
        }

        SearchMsg::Submit => {
            let query = editor.search_field().to_string();
            match editor.submit_search() {
                SubmitOutcome::Query(QueryOutcome::Found { count }) => {
                    tracing::debug!(%query, count, "query matched");
                }
                SubmitOutcome::Query(QueryOutcome::NotFound) => {
                    tracing::debug!(%query, "query not found");
                    model
                        .ui
                        .notify(format!("<{}> Not Found", query), MessageKind::Info, toast);
                }
                SubmitOutcome::Navigated(nav) => log_navigation(nav),
                SubmitOutcome::Ignored => return None,
            }
        }
        SearchMsg::Navigate(direction) => {
            if editor.mode() != EditMode::Search || !editor.controls_enabled() {
                return None;
            }
            log_navigation(editor.next_result(direction));
        }
        SearchMsg::ReplaceCurrent => {
            let replaced = editor.replace_current()?;
            tracing::debug!(
                row = replaced.row,
                col1 = replaced.col1,
                col2 = replaced.col2,
                "match replaced"
            );
        }
    }

    Some(Cmd::Redraw)
}

fn log_navigation(nav: Navigation) {
    match nav {
        Navigation::Moved(m) => tracing::debug!(row = m.row, col = m.col1, "moved to match"),
        Navigation::Stayed => tracing::debug!("only one match left"),
        Navigation::Exhausted => tracing::debug!("no live matches left"),
    }
}
