//! In-memory dictionary storage.
//!
//! # Responsibilities
//! - Hold the insertion-ordered collection of entries
//! - Case-insensitive first-match lookup
//! - Append new entries
//!
//! # Design Decisions
//! - Words are the natural key, compared lowercased; stored text keeps
//!   its original casing
//! - Lookup is a linear scan: O(n) is fine at the intended scale and
//!   keeps insertion order as the only ordering concern
//! - The store performs no uniqueness check; the dispatcher runs the
//!   duplicate check and the append under one lock

use serde::Serialize;

/// A stored word/definition pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub word: String,
    pub definition: String,
}

/// The full in-memory collection of entries for the process lifetime.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the first entry whose word matches `word` ignoring case.
    pub fn find_by_word(&self, word: &str) -> Option<&Entry> {
        let needle = word.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.word.to_lowercase() == needle)
    }

    /// Append a new entry built from the trimmed word and definition.
    ///
    /// Callers must have already verified that no entry with the same
    /// case-insensitive key exists.
    pub fn insert(&mut self, word: &str, definition: &str) -> Entry {
        let entry = Entry {
            word: word.trim().to_string(),
            definition: definition.trim().to_string(),
        };
        self.entries.push(entry.clone());
        entry
    }
}
