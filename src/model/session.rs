//! Session - the set of open tabs and which one is active
//!
//! Tab titles are unique within a session; a second "notes.txt" becomes
//! "notes.txt(1)". Callers address tabs by index or by title.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::row::TextStyle;
use super::text_list::TextList;

/// Title given to tabs created with "New"
pub const UNTITLED: &str = "New";

/// An open document tab
#[derive(Debug, Clone)]
pub struct Tab {
    pub editor: TextList,
    pub title: String,
    /// Where the document was loaded from or last saved to
    pub path: Option<PathBuf>,
}

impl Tab {
    pub fn new(editor: TextList, title: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self {
            editor,
            title: title.into(),
            path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    tabs: Vec<Tab>,
    active: usize,
    /// Suffix counter for duplicate titles
    next_sequence: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: 0,
            next_sequence: 1,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.get(self.active)
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        self.tabs.get_mut(self.active)
    }

    pub fn active_editor(&self) -> Option<&TextList> {
        self.active_tab().map(|tab| &tab.editor)
    }

    pub fn active_editor_mut(&mut self) -> Option<&mut TextList> {
        self.active_tab_mut().map(|tab| &mut tab.editor)
    }

    /// Editors of every open tab
    pub fn editors_mut(&mut self) -> impl Iterator<Item = &mut TextList> + '_ {
        self.tabs.iter_mut().map(|tab| &mut tab.editor)
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    /// Index of the tab with the given title
    pub fn find_by_title(&self, title: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.title == title)
    }

    // =========================================================================
    // Tab lifecycle
    // =========================================================================

    /// Append a tab, make it active and return its index
    ///
    /// A title already in use gets a `(n)` suffix.
    pub fn add_tab(&mut self, mut tab: Tab) -> usize {
        if self.find_by_title(&tab.title).is_some() {
            tab.title = format!("{}({})", tab.title, self.next_sequence);
            self.next_sequence += 1;
        }
        tracing::info!(title = %tab.title, "tab added");
        self.tabs.push(tab);
        self.active = self.tabs.len() - 1;
        self.active
    }

    /// Open an empty untitled tab
    pub fn new_tab(&mut self, style: TextStyle) -> usize {
        let mut editor = TextList::with_style(style);
        editor.set_content("");
        editor.start_editing();
        self.add_tab(Tab::new(editor, UNTITLED, None))
    }

    /// Load text read by [`read_text`] into a new tab titled with the file name
    pub fn open_text(&mut self, path: &Path, text: &str, style: TextStyle) -> usize {
        let mut editor = TextList::with_style(style);
        for line in text.lines() {
            editor.add_line(line);
        }
        editor.start_editing();
        let title = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        tracing::info!(path = %path.display(), lines = editor.line_count(), "file loaded");
        self.add_tab(Tab::new(editor, title, Some(path.to_path_buf())))
    }

    /// File contents for a tab: every line followed by `\n`
    pub fn serialize_tab(&self, index: usize) -> Option<String> {
        let tab = self.tabs.get(index)?;
        let mut out = String::new();
        for line in tab.editor.document().lines() {
            out.push_str(&line);
            out.push('\n');
        }
        Some(out)
    }

    /// Make a tab active
    pub fn select_tab(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }
        self.active = index;
        true
    }

    /// Cycle the active tab forward or backward
    pub fn cycle_tab(&mut self, forward: bool) {
        let n = self.tabs.len();
        if n == 0 {
            return;
        }
        self.active = if forward {
            (self.active + 1) % n
        } else {
            (self.active + n - 1) % n
        };
    }

    /// Close a tab and pick the next active one
    ///
    /// Closing the last tab in the list selects the new last tab; closing any
    /// other selects the tab before it.
    pub fn close_tab(&mut self, index: usize) -> Option<Tab> {
        if index >= self.tabs.len() {
            return None;
        }
        let tab = self.tabs.remove(index);
        self.active = if self.tabs.is_empty() {
            0
        } else if index == self.tabs.len() {
            self.tabs.len() - 1
        } else {
            index.saturating_sub(1)
        };
        tracing::info!(title = %tab.title, "tab closed");
        Some(tab)
    }
}

// =============================================================================
// File I/O
// =============================================================================

/// Read a file line by line, dropping `\r` line endings
pub fn read_text(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut text = String::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        text.push_str(line.trim_end_matches('\r'));
        text.push('\n');
    }
    Ok(text)
}

/// Write text produced by [`Session::serialize_tab`]
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "file saved");
    Ok(())
}
