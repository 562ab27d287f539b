//! OS-keyed remediation suggestion tables.

use std::collections::BTreeMap;

use crate::os::CurrentOs;

/// Mapping from OS identifier to remediation text.
///
/// Remediation text may embed `<cmd>...</cmd>` spans; the presenter
/// stylizes those. `Generic` acts as the wildcard fallback. A table with
/// neither the current OS nor a `Generic` entry yields no suggestion even
/// on failure — that is legal, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions(BTreeMap<CurrentOs, String>);

impl Suggestions {
    /// Create an empty suggestion table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for the common literal-table construction.
    pub fn with(mut self, os: CurrentOs, text: impl Into<String>) -> Self {
        self.0.insert(os, text.into());
        self
    }

    /// Insert or replace the entry for an OS.
    pub fn insert(&mut self, os: CurrentOs, text: impl Into<String>) {
        self.0.insert(os, text.into());
    }

    /// Look up the exact entry for an OS (no fallback).
    pub fn get(&self, os: CurrentOs) -> Option<&str> {
        self.0.get(&os).map(String::as_str)
    }

    /// Select the most specific suggestion for an OS.
    ///
    /// Picks the entry for `os` if present, else the `Generic` entry,
    /// else `None`.
    pub fn most_specific(&self, os: CurrentOs) -> Option<&str> {
        self.get(os).or_else(|| self.get(CurrentOs::Generic))
    }

    /// Whether the table has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<CurrentOs, String>> for Suggestions {
    fn from(map: BTreeMap<CurrentOs, String>) -> Self {
        Self(map)
    }
}
