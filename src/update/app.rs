//! App message handlers (tabs and file operations)

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, MessageKind};

/// How long file notices stay visible
const FILE_NOTICE: Duration = Duration::from_secs(3);

/// Handle tab and file messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::NewTab => {
            let style = model.text_style();
            model.session.new_tab(style);
            apply_config(model);
            Some(Cmd::Redraw)
        }

        AppMsg::OpenFile(path) => Some(Cmd::LoadFile { path }),

        AppMsg::FileLoaded { path, result } => {
            match result {
                Ok(text) => {
                    let style = model.text_style();
                    model.session.open_text(&path, &text, style);
                    apply_config(model);
                    model.config.remember_open(&path);
                    model.ui.notify(
                        format!("Loaded: {}", path.display()),
                        MessageKind::Success,
                        FILE_NOTICE,
                    );
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "load failed");
                    model
                        .ui
                        .notify(format!("Error: {}", e), MessageKind::Failure, FILE_NOTICE);
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFile(target) => {
            let index = model.session.active_index();
            let path = target.or_else(|| model.session.active_tab().and_then(|t| t.path.clone()));
            let Some(path) = path else {
                model.ui.notify(
                    "No file path - cannot save",
                    MessageKind::Failure,
                    FILE_NOTICE,
                );
                return Some(Cmd::Redraw);
            };
            let content = model.session.serialize_tab(index)?;
            Some(Cmd::SaveFile { path, content })
        }

        AppMsg::SaveCompleted { path, result } => {
            match result {
                Ok(()) => {
                    if let Some(tab) = model.session.active_tab_mut() {
                        tab.path = Some(path.clone());
                    }
                    model.config.remember_save(&path);
                    model.ui.notify(
                        format!("Saved: {}", path.display()),
                        MessageKind::Success,
                        FILE_NOTICE,
                    );
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "save failed");
                    model
                        .ui
                        .notify(format!("Error: {}", e), MessageKind::Failure, FILE_NOTICE);
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::SelectTab(index) => model.session.select_tab(index).then_some(Cmd::Redraw),
        AppMsg::NextTab => {
            model.session.cycle_tab(true);
            Some(Cmd::Redraw)
        }
        AppMsg::PrevTab => {
            model.session.cycle_tab(false);
            Some(Cmd::Redraw)
        }
        AppMsg::CloseTab(index) => model.session.close_tab(index).map(|_| Cmd::Redraw),
        AppMsg::CloseActiveTab => {
            let index = model.session.active_index();
            model.session.close_tab(index).map(|_| Cmd::Redraw)
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}

/// Apply per-tab settings from the config to the newly active tab
fn apply_config(model: &mut AppModel) {
    let ignore_case = model.config.ignore_case;
    if let Some(editor) = model.editor_mut() {
        editor.set_ignore_case(ignore_case);
    }
}
