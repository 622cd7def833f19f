//! Cell and row types - the smallest units of the text model
//!
//! A row is one line of the document. Each character (code point, not byte)
//! lives in its own cell so that search highlighting and styling can be
//! applied per character.

use serde::{Deserialize, Serialize};

/// Text style applied when a cell is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Width of a tab stop in columns
    pub tab_width: usize,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { tab_width: 4 }
    }
}

impl TextStyle {
    /// Default style with a specific tab width
    pub fn with_tab_width(tab_width: usize) -> Self {
        Self { tab_width }
    }

    /// Columns a tab at display column `col` advances to the next stop
    pub fn tab_advance(&self, col: usize) -> usize {
        let width = self.tab_width.max(1);
        width - col % width
    }
}

/// One character of a row plus display metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    /// Style override (falls back to the row style, then the document style)
    pub style: Option<TextStyle>,
    /// Cell-level highlight, used for search matches
    pub marked: bool,
}

impl Cell {
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            style: None,
            marked: false,
        }
    }
}

/// One line of the document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
    /// Style override for every cell without its own style
    pub style: Option<TextStyle>,
    /// Whole-row mark used by cut/copy/paste ranges
    pub marked: bool,
}

impl Row {
    /// Build a row with one unstyled cell per character of `text`
    pub fn from_text(text: &str) -> Self {
        Self {
            cells: text.chars().map(Cell::new).collect(),
            style: None,
            marked: false,
        }
    }

    /// Split `text` on `\n` into one row per line
    ///
    /// An empty string yields a single empty row, matching how a blank line
    /// is typed into the edit field.
    pub fn split_lines(text: &str) -> Vec<Row> {
        text.split('\n').map(Row::from_text).collect()
    }

    /// Number of cells in this row
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The characters of this row, optionally folded to lower case
    ///
    /// Folding keeps a one-to-one mapping between characters and cells so
    /// that match columns stay valid on the original row.
    pub fn chars(&self, ignore_case: bool) -> Vec<char> {
        self.cells
            .iter()
            .map(|cell| {
                if ignore_case {
                    fold_case(cell.ch)
                } else {
                    cell.ch
                }
            })
            .collect()
    }

    /// Resolve the effective style of the cell at `col`
    pub fn resolve_style(&self, col: usize, document_style: TextStyle) -> Option<TextStyle> {
        self.cells
            .get(col)
            .map(|cell| cell.style.or(self.style).unwrap_or(document_style))
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.ch)?;
        }
        Ok(())
    }
}

/// Lower-case a single character without changing the character count
#[inline]
pub fn fold_case(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}
