//! Core types for parsed tensor notation
//!
//! This module defines the data produced by a parse:
//! - [`TensorEntry`]: a named pair of raw byte payloads
//! - [`Document`]: entries in the order they appeared in the source text
//! - [`Position`]: a 1-based line/column used in diagnostics

use serde::{Deserialize, Serialize};

/// One named tensor as it appeared in the notation
///
/// `dimensions` holds the base64-decoded bytes of an `int64[]` shape and
/// `values` the decoded bytes of a `float[]` payload. Neither is interpreted
/// at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TensorEntry {
    /// Input name, captured verbatim between the quotes (escapes are kept)
    pub name: String,
    /// Decoded dimension bytes
    pub dimensions: Vec<u8>,
    /// Decoded value bytes
    pub values: Vec<u8>,
}

impl TensorEntry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, dimensions: Vec<u8>, values: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            dimensions,
            values,
        }
    }
}

/// The full result of parsing one notation string
///
/// Entries keep source order. Names are not deduplicated: a name declared
/// twice yields two entries, and the consumer decides what that means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    entries: Vec<TensorEntry>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the document holds no tensors
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in source order
    pub fn entries(&self) -> &[TensorEntry] {
        &self.entries
    }

    /// Iterate over entries in source order
    pub fn iter(&self) -> std::slice::Iter<'_, TensorEntry> {
        self.entries.iter()
    }

    /// Names in source order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// First entry with the given name
    pub fn get(&self, name: &str) -> Option<&TensorEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Append an entry
    pub fn push(&mut self, entry: TensorEntry) {
        self.entries.push(entry);
    }

    /// Consume the document, returning its entries
    pub fn into_entries(self) -> Vec<TensorEntry> {
        self.entries
    }
}

impl From<Vec<TensorEntry>> for Document {
    fn from(entries: Vec<TensorEntry>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for Document {
    type Item = TensorEntry;
    type IntoIter = std::vec::IntoIter<TensorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a TensorEntry;
    type IntoIter = std::slice::Iter<'a, TensorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A 1-based line/column location in the notation text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number, starting at 1
    pub line: usize,
    /// Column number, starting at 1
    pub column: usize,
}

impl Position {
    /// Create a position
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
