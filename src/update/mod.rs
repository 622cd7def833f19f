//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod edit;
mod search;

use std::str::FromStr;

use crate::commands::Cmd;
use crate::keymap::Command;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::EditorSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use edit::update_edit;
pub use search::update_search;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::Search(m) => search::update_search(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    model.ui.expire_message();
    result
}

/// Run every message of a command and combine the resulting side effects
pub fn dispatch_command(model: &mut AppModel, command: Command) -> Option<Cmd> {
    let cmds: Vec<Cmd> = command
        .to_msgs()
        .into_iter()
        .filter_map(|msg| update(model, msg))
        .collect();

    match cmds.len() {
        0 => None,
        1 => cmds.into_iter().next(),
        _ => Some(Cmd::batch(cmds)),
    }
}

/// Dispatch a command by name
///
/// Unknown names are ignored so that hosts can send shortcuts this version
/// does not know yet.
pub fn dispatch_shortcut(model: &mut AppModel, name: &str) -> Option<Cmd> {
    match Command::from_str(name) {
        Ok(command) => dispatch_command(model, command),
        Err(()) => {
            tracing::debug!(shortcut = name, "ignoring unknown shortcut");
            None
        }
    }
}

/// Update with a tracing span and a before/after diff of the active editor
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = model.editor().map(EditorSnapshot::from_editor);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    if let (Some(before), Some(editor)) = (&before, model.editor()) {
        if let Some(diff) = before.diff(&EditorSnapshot::from_editor(editor)) {
            debug!(target: "editor", %diff, "state changed");
        }
    }

    result
}

/// Display name for a message, e.g. `Edit::SelectRow(3)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::Search(m) => format!("Search::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
