//! The two place categories a bare building number can refer to.

use serde::{Deserialize, Serialize};

/// Category of a numbered campus building.
///
/// Catalog records carry free-form category strings so the catalog stays
/// open-ended; this enum covers the two categories the numeric-reference
/// grammar knows how to disambiguate between. [`PlaceKind::as_str`] gives
/// the canonical string used as an index key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    /// Dormitory ("дотуур байр").
    Dorm,
    /// Academic / classroom building ("хичээлийн байр").
    Class,
}

impl PlaceKind {
    /// Canonical string form, matching the `kind` field in the catalog.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dorm => "dorm",
            Self::Class => "class",
        }
    }

    /// Parse from a catalog `kind` string. Unknown kinds yield `None`.
    #[must_use]
    pub fn from_str_lowercase(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dorm" => Some(Self::Dorm),
            "class" => Some(Self::Class),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
