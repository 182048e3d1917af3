//! Catalog record shapes and the exclusion set.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named campus location from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Display name, required for any successful answer.
    pub title: String,

    /// Category tag, e.g. `"dorm"` or `"class"`. Open-ended; only
    /// records with both `kind` and `number` join the numeric index.
    #[serde(default)]
    pub kind: Option<String>,

    /// Building number, unique only within a kind. 1–2 digits in
    /// practice.
    #[serde(default)]
    pub number: Option<u8>,

    /// Map link. Presence is not guaranteed.
    #[serde(default)]
    pub url: Option<String>,

    /// Free-text strings that should resolve to this record.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl PlaceRecord {
    /// The `(kind, number)` key, when the record has both fields.
    #[must_use]
    pub fn kind_number(&self) -> Option<(&str, u8)> {
        match (&self.kind, self.number) {
            (Some(kind), Some(number)) => Some((kind.as_str(), number)),
            _ => None,
        }
    }
}

/// A `(kind, number)` pair explicitly marked unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExclusionEntry {
    pub kind: String,
    pub number: u8,
}

/// Configured exclusions, applied as a filter at catalog-load time and
/// consulted again before every numeric lookup, so an excluded pair
/// answers "unavailable" even when the catalog never contained it.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    pairs: HashSet<(String, u8)>,
}

impl ExclusionSet {
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = ExclusionEntry>) -> Self {
        Self {
            pairs: entries
                .into_iter()
                .map(|e| (e.kind.to_lowercase(), e.number))
                .collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, kind: &str, number: u8) -> bool {
        self.pairs.contains(&(kind.to_lowercase(), number))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
