//! edlin - a tabbed, line-oriented text editor core
//!
//! The document is a list of rows; every row is a list of styled cells.
//! Edits replace, insert or delete whole rows, a mark range selects rows for
//! cut/copy/paste, and search walks the rows circularly from the cursor.
//!
//! State changes follow the Elm Architecture: input becomes a [`Msg`],
//! [`update::update`] applies it to the [`AppModel`] and returns a [`Cmd`]
//! describing any side effect for the host to perform.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use keymap::Command;
pub use messages::Msg;
pub use model::{AppModel, TextList};
