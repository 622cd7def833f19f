//! Runtime module - console host integration
//!
//! - `app` - owns the model, routes input, performs commands
//! - `clipboard` - system clipboard with an in-process fallback
//! - `input` - console line to host action parsing
//! - `view` - plain-text rendering of rows, tabs and status

pub mod app;
pub mod clipboard;
pub mod input;
pub mod view;

pub use app::{App, Output};
