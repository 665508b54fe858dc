//! Raw text to an immutable sequence of trimmed, non-empty lines.

use std::ops::Index;

use super::patterns::LINE_BREAK;

/// Normalized document lines. Every line is trimmed and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentText {
    lines: Vec<String>,
}

impl DocumentText {
    /// Split raw text into lines, trimming each and dropping blank ones.
    ///
    /// Lone `\r`, form feeds and Unicode line separators end a line too.
    pub fn from_raw(raw: &str) -> Self {
        let lines = LINE_BREAK
            .split(raw)
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Lines after `index`, paired with their absolute positions.
    pub fn after(&self, index: usize) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .skip(index + 1)
            .map(|(i, l)| (i, l.as_str()))
    }
}

impl Index<usize> for DocumentText {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.lines[index]
    }
}
