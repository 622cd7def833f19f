use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use edlin::config::EditorConfig;
use edlin::keymap::{load_default_keymap, Keymap};

mod cli;
mod runtime;

use cli::CliArgs;
use runtime::clipboard::ClipboardStore;
use runtime::input::HostInput;
use runtime::{view, App, Output};

fn main() -> Result<()> {
    edlin::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;
    let config = EditorConfig::load();
    let keymap = Keymap::with_bindings(load_default_keymap());

    let mut app = App::new(startup, config, keymap, ClipboardStore::new());
    let result = run(&mut app);

    if let Err(e) = app.model.config.save() {
        tracing::warn!("Failed to save config: {}", e);
    }
    result
}

fn run(app: &mut App) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    write!(stdout, "{}", view::render_screen(&app.model))?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        match HostInput::parse(&line) {
            Ok(input) => match app.handle_input(input) {
                Output::Screen => write!(stdout, "{}", view::render_screen(&app.model))?,
                Output::Text(text) => write!(stdout, "{}", text)?,
                Output::Quit => return Ok(()),
            },
            Err(e) => writeln!(stdout, "{}", e)?,
        }
        prompt(&mut stdout)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
