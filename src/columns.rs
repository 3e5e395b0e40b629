// src/columns.rs
//! Header-based column resolution.
//!
//! Stages never index rows by hard-coded position. A column is named either
//! by its header text (`Tags`) or by spreadsheet letter with an `@` prefix
//! (`@CQ`), and is resolved once against the header row.

use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    /// Header text. Exact match first, then ASCII case-insensitive.
    Name(String),
    /// Zero-based index parsed from a column letter.
    Index(usize),
}

impl ColumnRef {
    pub fn name(s: &str) -> Self {
        ColumnRef::Name(s.to_string())
    }

    pub fn parse(text: &str) -> Result<Self> {
        let t = text.trim();
        if t.is_empty() {
            return Err(CatalogError::InvalidColumnRef(text.to_string()));
        }
        match t.strip_prefix('@') {
            Some(letters) => letter_to_index(letters)
                .map(ColumnRef::Index)
                .ok_or_else(|| CatalogError::InvalidColumnRef(text.to_string())),
            None => Ok(ColumnRef::Name(t.to_string())),
        }
    }

    pub fn find(&self, headers: &[String]) -> Option<usize> {
        match self {
            ColumnRef::Index(ix) => (*ix < headers.len()).then_some(*ix),
            ColumnRef::Name(name) => headers
                .iter()
                .position(|h| h.trim() == name.as_str())
                .or_else(|| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))),
        }
    }

    /// Resolve against `headers`, failing with `MissingColumn` naming `source_name`.
    pub fn resolve(&self, headers: &[String], source_name: &str) -> Result<usize> {
        self.find(headers).ok_or_else(|| CatalogError::MissingColumn {
            column: self.to_string(),
            source_name: source_name.to_string(),
        })
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Name(n) => f.write_str(n),
            ColumnRef::Index(ix) => write!(f, "@{}", index_to_letter(*ix)),
        }
    }
}

impl FromStr for ColumnRef {
    type Err = CatalogError;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// "A" → 0, "Z" → 25, "AA" → 26, "CQ" → 94. Case-insensitive.
pub fn letter_to_index(letters: &str) -> Option<usize> {
    if letters.is_empty() || letters.len() > 3 {
        return None;
    }
    let mut n = 0usize;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        n = n * 26 + (ch.to_ascii_uppercase() as usize - 'A' as usize + 1);
    }
    Some(n - 1)
}

/// 0 → "A", 94 → "CQ".
pub fn index_to_letter(ix: usize) -> String {
    let mut n = ix + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    out.iter().rev().collect()
}
