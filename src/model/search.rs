//! Search engine - circular multi-row substring search with match navigation
//!
//! A query scans every row once, starting at the cursor row and wrapping to
//! row 0 after the last row. Each row contributes all of its non-overlapping
//! matches, left to right. Results keep the scan order, so the first result
//! is the first match at or after the cursor.

use super::document::Document;
use super::row::fold_case;

/// One located match: a row and an inclusive column span in that row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub row: usize,
    pub col1: usize,
    pub col2: usize,
}

impl MatchResult {
    pub fn new(row: usize, col1: usize, col2: usize) -> Self {
        Self { row, col1, col2 }
    }
}

/// A result slot; replaced matches are kept as `Consumed` so indices stay stable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEntry {
    Live(MatchResult),
    Consumed,
}

impl MatchEntry {
    #[inline]
    pub fn as_live(&self) -> Option<MatchResult> {
        match self {
            MatchEntry::Live(m) => Some(*m),
            MatchEntry::Consumed => None,
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        matches!(self, MatchEntry::Live(_))
    }
}

/// Direction for stepping through results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Result of stepping to another match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The current match changed
    Moved(MatchResult),
    /// The only live match is already current
    Stayed,
    /// No live match remains
    Exhausted,
}

/// Results of the last successful query and the active one among them
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    entries: Vec<MatchEntry>,
    current: usize,
}

impl SearchState {
    pub fn new(results: Vec<MatchResult>) -> Self {
        Self {
            entries: results.into_iter().map(MatchEntry::Live).collect(),
            current: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn entries(&self) -> &[MatchEntry] {
        &self.entries
    }

    /// The current match, unless it has been replaced
    pub fn current(&self) -> Option<MatchResult> {
        self.entries.get(self.current).and_then(MatchEntry::as_live)
    }

    pub fn has_live(&self) -> bool {
        self.entries.iter().any(MatchEntry::is_live)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.current = 0;
    }

    /// Mark the current match as replaced and return it
    pub fn consume_current(&mut self) -> Option<MatchResult> {
        let entry = self.entries.get_mut(self.current)?;
        let result = entry.as_live()?;
        *entry = MatchEntry::Consumed;
        Some(result)
    }

    /// Step to the next live match in `direction`, wrapping at both ends
    pub fn step(&mut self, direction: SearchDirection) -> Navigation {
        if !self.has_live() {
            return Navigation::Exhausted;
        }

        let n = self.entries.len();
        let mut i = self.current;
        loop {
            i = match direction {
                SearchDirection::Forward => (i + 1) % n,
                SearchDirection::Backward => (i + n - 1) % n,
            };
            if i == self.current {
                return Navigation::Stayed;
            }
            if let MatchEntry::Live(m) = self.entries[i] {
                self.current = i;
                return Navigation::Moved(m);
            }
        }
    }

    /// Position label in the form `"  2/5  "`
    pub fn counter_label(&self) -> String {
        if self.entries.is_empty() {
            counter_label(0, 0)
        } else {
            counter_label(self.current + 1, self.entries.len())
        }
    }
}

/// Format a `position/total` counter with fixed-width columns
pub fn counter_label(position: usize, total: usize) -> String {
    format!("{:3}/{:<3}", position, total)
}

/// Find every match of `query` in `doc`, scanning circularly from `start_row`
pub fn find_list_matches(
    doc: &Document,
    start_row: usize,
    query: &str,
    ignore_case: bool,
) -> Vec<MatchResult> {
    let pattern: Vec<char> = if ignore_case {
        query.chars().map(fold_case).collect()
    } else {
        query.chars().collect()
    };

    let count = doc.row_count();
    if pattern.is_empty() || count == 0 {
        return Vec::new();
    }

    let mut row_id = if start_row < count { start_row } else { 0 };
    let mut results = Vec::new();
    for _ in 0..count {
        let chars = doc.row_chars(row_id, ignore_case);
        results.extend(find_row_matches(row_id, &chars, &pattern));
        row_id += 1;
        if row_id >= count {
            row_id = 0;
        }
    }
    results
}

/// Find all non-overlapping occurrences of `pattern` in one row
///
/// A mismatch restarts the comparison one column after the failed candidate
/// start; a full match resumes right after the matched span.
pub fn find_row_matches(row_id: usize, chars: &[char], pattern: &[char]) -> Vec<MatchResult> {
    let mut results = Vec::new();
    let len = pattern.len();
    if len == 0 || chars.len() < len {
        return results;
    }

    let mut start = 0;
    let mut matched = 0;
    while start + len <= chars.len() {
        if chars[start + matched] == pattern[matched] {
            matched += 1;
            if matched == len {
                results.push(MatchResult::new(row_id, start, start + len - 1));
                start += len;
                matched = 0;
            }
        } else {
            start += 1;
            matched = 0;
        }
    }
    results
}
