//! Tests for tabs and file load/save

mod common;

use std::path::PathBuf;

use common::{content, send, test_model};
use edlin::commands::Cmd;
use edlin::config::EditorConfig;
use edlin::messages::{AppMsg, EditMsg, Msg};
use edlin::model::{session, AppModel, MessageKind, Session, TextStyle};
use tempfile::TempDir;

fn titles(model: &AppModel) -> Vec<String> {
    model
        .session
        .tabs()
        .iter()
        .map(|tab| tab.title.clone())
        .collect()
}

// ========================================================================
// Tabs
// ========================================================================

#[test]
fn test_new_tabs_get_unique_titles() {
    let mut model = AppModel::new(EditorConfig::default());
    send(
        &mut model,
        [
            Msg::App(AppMsg::NewTab),
            Msg::App(AppMsg::NewTab),
            Msg::App(AppMsg::NewTab),
        ],
    );
    assert_eq!(titles(&model), vec!["New", "New(1)", "New(2)"]);
    assert_eq!(model.session.active_index(), 2);
    assert_eq!(content(&model), vec![""]);
}

#[test]
fn test_tabs_hold_independent_documents() {
    let mut model = test_model("first");
    send(
        &mut model,
        [
            Msg::App(AppMsg::NewTab),
            Msg::Edit(EditMsg::SetEditText("second".into())),
            Msg::Edit(EditMsg::CommitEdit),
        ],
    );
    assert_eq!(content(&model), vec!["second", ""]);

    send(&mut model, [Msg::App(AppMsg::SelectTab(0))]);
    assert_eq!(content(&model), vec!["first"]);
}

#[test]
fn test_tab_cycling_and_selection() {
    let mut model = test_model("a");
    send(&mut model, [Msg::App(AppMsg::NewTab), Msg::App(AppMsg::NewTab)]);

    send(&mut model, [Msg::App(AppMsg::NextTab)]);
    assert_eq!(model.session.active_index(), 0);
    send(&mut model, [Msg::App(AppMsg::PrevTab)]);
    assert_eq!(model.session.active_index(), 2);

    assert!(send(&mut model, [Msg::App(AppMsg::SelectTab(9))]).is_empty());
    assert_eq!(model.session.active_index(), 2);
}

#[test]
fn test_close_active_tab_selects_neighbour() {
    let mut model = test_model("a");
    send(&mut model, [Msg::App(AppMsg::NewTab), Msg::App(AppMsg::NewTab)]);
    send(&mut model, [Msg::App(AppMsg::SelectTab(1))]);

    send(&mut model, [Msg::App(AppMsg::CloseActiveTab)]);
    assert_eq!(titles(&model), vec!["New", "New(2)"]);
    assert_eq!(model.session.active_index(), 0);

    send(
        &mut model,
        [
            Msg::App(AppMsg::CloseActiveTab),
            Msg::App(AppMsg::CloseActiveTab),
        ],
    );
    assert!(model.session.is_empty());
    assert!(model.editor().is_none());
    assert!(send(&mut model, [Msg::App(AppMsg::CloseActiveTab)]).is_empty());
    assert!(send(&mut model, [Msg::Edit(EditMsg::MarkStart)]).is_empty());
}

#[test]
fn test_new_tab_uses_configured_ignore_case() {
    let config = EditorConfig {
        ignore_case: true,
        ..EditorConfig::default()
    };
    let mut model = AppModel::new(config);
    send(&mut model, [Msg::App(AppMsg::NewTab)]);
    assert!(model.editor().unwrap().ignore_case());
}

// ========================================================================
// Files through the session
// ========================================================================

#[test]
fn test_read_text_loads_lines_into_tab() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "one\r\ntwo\n\nfour\n").unwrap();

    let text = session::read_text(&path).unwrap();
    assert_eq!(text, "one\ntwo\n\nfour\n");

    let mut session = Session::new();
    let index = session.open_text(&path, &text, TextStyle::default());
    let tab = session.tab(index).unwrap();
    assert_eq!(tab.title, "notes.txt");
    assert_eq!(tab.path.as_deref(), Some(path.as_path()));
    assert_eq!(tab.editor.content(), vec!["one", "two", "", "four"]);
}

#[test]
fn test_read_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let err = session::read_text(&dir.path().join("missing.txt")).unwrap_err();
    assert!(err.to_string().contains("Failed to open"));
}

#[test]
fn test_save_writes_one_line_per_row() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    let mut session = Session::new();
    session.new_tab(TextStyle::default());
    if let Some(editor) = session.active_editor_mut() {
        editor.set_content("alpha\nbeta");
    }
    let content = session.serialize_tab(0).unwrap();
    session::write_text(&path, &content).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "alpha\nbeta\n");

    let text = session::read_text(&path).unwrap();
    let reopened = session.open_text(&path, &text, TextStyle::default());
    assert_eq!(
        session.tab(reopened).unwrap().editor.content(),
        vec!["alpha", "beta"]
    );
    assert_eq!(session.tab(reopened).unwrap().title, "out.txt");
}

// ========================================================================
// Files through messages
// ========================================================================

#[test]
fn test_open_file_asks_host_to_load() {
    let mut model = AppModel::new(EditorConfig::default());
    let path = PathBuf::from("/tmp/doc.txt");
    assert_eq!(
        send(&mut model, [Msg::App(AppMsg::OpenFile(path.clone()))]),
        vec![Cmd::LoadFile { path }]
    );
}

#[test]
fn test_file_loaded_opens_tab_and_remembers_folder() {
    let mut model = AppModel::new(EditorConfig::default());
    let path = PathBuf::from("/data/docs/list.txt");
    send(
        &mut model,
        [Msg::App(AppMsg::FileLoaded {
            path: path.clone(),
            result: Ok("x\ny\n".to_string()),
        })],
    );

    assert_eq!(titles(&model), vec!["list.txt"]);
    assert_eq!(content(&model), vec!["x", "y"]);
    assert_eq!(model.config.open_dir, Some(PathBuf::from("/data/docs")));
    let notice = model.ui.transient_message.as_ref().unwrap();
    assert_eq!(notice.kind, MessageKind::Success);
}

#[test]
fn test_failed_load_reports_error() {
    let mut model = AppModel::new(EditorConfig::default());
    send(
        &mut model,
        [Msg::App(AppMsg::FileLoaded {
            path: PathBuf::from("nope.txt"),
            result: Err("permission denied".to_string()),
        })],
    );
    assert!(model.session.is_empty());
    let notice = model.ui.transient_message.as_ref().unwrap();
    assert_eq!(notice.kind, MessageKind::Failure);
    assert!(notice.text.contains("permission denied"));
}

#[test]
fn test_save_untitled_without_path_is_refused() {
    let mut model = test_model("a");
    send(&mut model, [Msg::App(AppMsg::SaveFile(None))]);
    let notice = model.ui.transient_message.as_ref().unwrap();
    assert_eq!(notice.text, "No file path - cannot save");
}

#[test]
fn test_save_as_then_save_uses_remembered_path() {
    let mut model = test_model("a\nb");
    let path = PathBuf::from("/tmp/saved/a.txt");

    let cmds = send(&mut model, [Msg::App(AppMsg::SaveFile(Some(path.clone())))]);
    assert_eq!(
        cmds,
        vec![Cmd::SaveFile {
            path: path.clone(),
            content: "a\nb\n".to_string(),
        }]
    );

    send(
        &mut model,
        [Msg::App(AppMsg::SaveCompleted {
            path: path.clone(),
            result: Ok(()),
        })],
    );
    assert_eq!(
        model.session.active_tab().unwrap().path.as_deref(),
        Some(path.as_path())
    );
    assert_eq!(model.config.save_dir, Some(PathBuf::from("/tmp/saved")));

    let cmds = send(&mut model, [Msg::App(AppMsg::SaveFile(None))]);
    assert!(matches!(&cmds[..], [Cmd::SaveFile { path: p, .. }] if *p == path));
}
