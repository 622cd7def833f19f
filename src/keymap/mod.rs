//! Configurable keyboard mapping
//!
//! Maps keystrokes to editor commands, with optional per-mode conditions and
//! user overrides loaded from YAML.
//!
//! ```text
//! host key event → Keystroke → Keymap::lookup_with_context() → Command → Vec<Msg>
//! ```
//!
//! ```ignore
//! let keymap = Keymap::with_bindings(load_default_keymap());
//! let ctx = KeyContext::from_editor(editor);
//! if let Some(command) = keymap.lookup_with_context(&parse_key_string("ctrl+m")?, Some(&ctx)) {
//!     for msg in command.to_msgs() { update(&mut model, msg); }
//! }
//! ```

mod binding;
mod command;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings,
};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
