//! Console input parsing
//!
//! Each line typed at the prompt is one host action. Lines starting with `:`
//! are host commands; any other line is typed into the field that has focus
//! (the edit field in edit mode, the search field in search mode).

use std::path::PathBuf;

use edlin::keymap::{parse_key_string, Keystroke};

/// One action read from the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostInput {
    /// `:key ctrl+m` - a keystroke routed through the keymap
    Key(Keystroke),
    /// `:cmd MarkStart` - a named shortcut
    Shortcut(String),
    /// `:goto N` - select row N (1-indexed)
    Goto(usize),
    /// `:find text` - search for text
    Find(String),
    /// `:replace text` - set the replacement text
    Replace(String),
    /// `:open path`
    Open(PathBuf),
    /// `:save [path]`
    Save(Option<PathBuf>),
    /// `:new`
    NewTab,
    /// `:tab N` - switch to tab N (1-indexed)
    Tab(usize),
    /// `:close`
    Close,
    /// `:list` - print the whole document
    List,
    /// `:help` - print the bindings
    Help,
    /// `:quit`
    Quit,
    /// Plain text for the focused field
    Text(String),
}

impl HostInput {
    /// Parse one console line
    pub fn parse(line: &str) -> Result<HostInput, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(HostInput::Text(line.to_string()));
        };

        let (name, arg) = match rest.split_once(' ') {
            Some((name, arg)) => (name, arg),
            None => (rest, ""),
        };

        match name {
            "key" | "k" => parse_key_string(arg.trim())
                .map(HostInput::Key)
                .map_err(|e| e.to_string()),
            "cmd" | "c" => non_empty(arg, "cmd").map(|a| HostInput::Shortcut(a.trim().to_string())),
            "goto" | "g" => parse_index(arg).map(HostInput::Goto),
            "find" | "f" => Ok(HostInput::Find(arg.to_string())),
            "replace" | "r" => Ok(HostInput::Replace(arg.to_string())),
            "open" | "o" => non_empty(arg, "open").map(|a| HostInput::Open(PathBuf::from(a.trim()))),
            "save" | "w" => {
                let arg = arg.trim();
                Ok(HostInput::Save((!arg.is_empty()).then(|| PathBuf::from(arg))))
            }
            "new" => Ok(HostInput::NewTab),
            "tab" => parse_index(arg).map(HostInput::Tab),
            "close" => Ok(HostInput::Close),
            "list" | "l" => Ok(HostInput::List),
            "help" | "h" => Ok(HostInput::Help),
            "quit" | "q" => Ok(HostInput::Quit),
            _ => Err(format!("Unknown command: :{}", name)),
        }
    }
}

fn non_empty<'a>(arg: &'a str, name: &str) -> Result<&'a str, String> {
    if arg.trim().is_empty() {
        Err(format!(":{} needs an argument", name))
    } else {
        Ok(arg)
    }
}

fn parse_index(arg: &str) -> Result<usize, String> {
    arg.trim()
        .parse::<usize>()
        .map_err(|_| format!("Not a number: {}", arg.trim()))
}
