//! Console application: owns the model, routes input and performs commands

use std::sync::mpsc::{self, Receiver, Sender};

use edlin::commands::Cmd;
use edlin::config::EditorConfig;
use edlin::keymap::{Command, KeyContext, Keymap, Keystroke};
use edlin::messages::{AppMsg, EditMsg, Msg, SearchMsg};
use edlin::model::{session, AppModel, EditMode};
use edlin::update::{dispatch_command, dispatch_shortcut, update};

use crate::cli::StartupConfig;

use super::clipboard::ClipboardStore;
use super::input::HostInput;
use super::view;

/// What the console should do after handling an input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Print the compact screen
    Screen,
    /// Print this text
    Text(String),
    Quit,
}

pub struct App {
    pub model: AppModel,
    keymap: Keymap,
    clipboard: ClipboardStore,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    quit: bool,
}

impl App {
    pub fn new(
        startup: StartupConfig,
        config: EditorConfig,
        keymap: Keymap,
        clipboard: ClipboardStore,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();

        let mut app = Self {
            model: AppModel::new(config),
            keymap,
            clipboard,
            msg_tx,
            msg_rx,
            quit: false,
        };

        for path in &startup.files {
            app.handle_msg(Msg::App(AppMsg::OpenFile(path.clone())));
        }
        if app.model.session.is_empty() {
            app.handle_msg(Msg::App(AppMsg::NewTab));
        }
        app.handle_msg(Msg::App(AppMsg::SelectTab(0)));

        // The flag applies to this run only; the saved config is left alone
        if startup.ignore_case {
            for editor in app.model.session.editors_mut() {
                editor.set_ignore_case(true);
            }
        }

        if let Some(row) = startup.initial_row {
            app.handle_msg(Msg::Edit(EditMsg::SelectRow(row)));
        }
        app
    }

    /// Context for conditional keybindings
    fn get_key_context(&self) -> KeyContext {
        self.model
            .editor()
            .map(KeyContext::from_editor)
            .unwrap_or_default()
    }

    /// Run a message through update and perform the resulting commands
    pub fn handle_msg(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
        self.process_async_messages();
    }

    fn handle_cmd(&mut self, cmd: Option<Cmd>) {
        if let Some(cmd) = cmd {
            self.process_cmd(cmd);
        }
        self.process_async_messages();
    }

    /// Route a keystroke through the keymap; returns false when unbound
    pub fn handle_keystroke(&mut self, keystroke: Keystroke) -> bool {
        let context = self.get_key_context();
        match self.keymap.lookup_with_context(&keystroke, Some(&context)) {
            Some(command) => {
                tracing::debug!(%keystroke, ?command, "keystroke");
                let cmd = dispatch_command(&mut self.model, command);
                self.handle_cmd(cmd);
                true
            }
            None => {
                tracing::debug!(%keystroke, "unbound keystroke");
                false
            }
        }
    }

    /// Handle one parsed console line
    pub fn handle_input(&mut self, input: HostInput) -> Output {
        match input {
            HostInput::Key(keystroke) => {
                if !self.handle_keystroke(keystroke) {
                    return Output::Text(format!("{} is not bound", keystroke));
                }
            }
            HostInput::Shortcut(name) => {
                let cmd = dispatch_shortcut(&mut self.model, &name);
                self.handle_cmd(cmd);
            }
            HostInput::Goto(n) => {
                self.handle_msg(Msg::Edit(EditMsg::SelectRow(n.saturating_sub(1))));
            }
            HostInput::Find(text) => {
                if self.mode() == Some(EditMode::Edit) {
                    self.handle_msg(Msg::Search(SearchMsg::Open));
                }
                self.handle_msg(Msg::Search(SearchMsg::SetQuery(text)));
                self.handle_msg(Msg::Search(SearchMsg::Submit));
            }
            HostInput::Replace(text) => {
                self.handle_msg(Msg::Search(SearchMsg::SetReplacement(text)));
            }
            HostInput::Open(path) => {
                let path = self.model.config.resolve_open(&path);
                self.handle_msg(Msg::App(AppMsg::OpenFile(path)));
            }
            HostInput::Save(path) => {
                let path = path.map(|p| self.model.config.resolve_save(&p));
                self.handle_msg(Msg::App(AppMsg::SaveFile(path)));
            }
            HostInput::NewTab => self.handle_msg(Msg::App(AppMsg::NewTab)),
            HostInput::Tab(n) => {
                self.handle_msg(Msg::App(AppMsg::SelectTab(n.saturating_sub(1))));
            }
            HostInput::Close => self.handle_msg(Msg::App(AppMsg::CloseActiveTab)),
            HostInput::List => {
                return Output::Text(match self.model.editor() {
                    Some(editor) => view::render_rows(editor, 0, editor.line_count() + 1),
                    None => "(no open tabs)\n".to_string(),
                });
            }
            HostInput::Help => return Output::Text(self.help_text()),
            HostInput::Quit => self.handle_msg(Msg::App(AppMsg::Quit)),
            HostInput::Text(text) => self.handle_text(text),
        }

        if self.quit {
            Output::Quit
        } else {
            Output::Screen
        }
    }

    fn mode(&self) -> Option<EditMode> {
        self.model.editor().map(|e| e.mode())
    }

    /// Typed text goes to the field of the current surface
    ///
    /// In edit mode the line replaces the cursor row. In search mode it
    /// becomes the query; an empty line submits the unchanged query, which
    /// steps to the next match.
    fn handle_text(&mut self, text: String) {
        match self.mode() {
            Some(EditMode::Edit) => {
                self.handle_msg(Msg::Edit(EditMsg::SetEditText(text)));
                self.handle_msg(Msg::Edit(EditMsg::CommitEdit));
            }
            Some(EditMode::Search) => {
                if !text.is_empty() {
                    self.handle_msg(Msg::Search(SearchMsg::SetQuery(text)));
                }
                self.handle_msg(Msg::Search(SearchMsg::Submit));
            }
            None => {}
        }
    }

    fn help_text(&self) -> String {
        let mut out = String::from("Bindings:\n");
        for &command in Command::ALL {
            let key = self.keymap.display_for(command).unwrap_or_default();
            out.push_str(&format!(
                "  {:<16} {:<22} {}\n",
                key,
                command.display_name(),
                command.name()
            ));
        }
        out.push_str(
            "Console: :key K  :cmd NAME  :goto N  :find TEXT  :replace TEXT\n\
             \x20        :open PATH  :save [PATH]  :new  :tab N  :close  :list  :quit\n\
             \x20        other lines edit the cursor row (search mode: set the query)\n",
        );
        out
    }

    /// Perform a side effect requested by update
    ///
    /// Results are sent back as messages and handled by
    /// `process_async_messages`.
    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::SetClipboard(text) => self.clipboard.set_text(text),
            Cmd::PasteFromClipboard => {
                let text = self.clipboard.get_text();
                let _ = self.msg_tx.send(Msg::Edit(EditMsg::InsertRows(text)));
            }
            Cmd::LoadFile { path } => {
                let result = session::read_text(&path).map_err(|e| format!("{:#}", e));
                let _ = self.msg_tx.send(Msg::App(AppMsg::FileLoaded { path, result }));
            }
            Cmd::SaveFile { path, content } => {
                let result = session::write_text(&path, &content).map_err(|e| format!("{:#}", e));
                let _ = self.msg_tx.send(Msg::App(AppMsg::SaveCompleted { path, result }));
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::Quit => self.quit = true,
        }
    }

    fn process_async_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
    }
}
