//! Reply-language selection.
//!
//! The resolver's branching is locale-independent; the locale only picks
//! which of two fixed message templates a given outcome renders with.
//! Detection is a cheap per-message heuristic: any Cyrillic codepoint
//! means Mongolian, a small Latin keyword set means English, anything
//! else keeps whatever locale the conversation already had.

use serde::{Deserialize, Serialize};

/// English keywords that mark a Latin-script message as English rather
/// than, say, a transliterated alias.
const ENGLISH_KEYWORDS: &[&str] = &[
    "hello", "hi", "hey", "english", "location", "locations", "list", "where", "dorm",
    "dormitory", "academic", "building", "library", "campus", "map",
];

/// Language a reply is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Mongolian Cyrillic.
    #[default]
    Mongolian,
    /// English.
    English,
}

impl Locale {
    /// Guess the locale of a raw message.
    ///
    /// Returns `None` when the text carries no signal either way, in
    /// which case the caller keeps the conversation's current locale.
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        let t = text.trim();
        if t.is_empty() {
            return None;
        }
        if t.chars().any(|ch| ('\u{0400}'..='\u{04FF}').contains(&ch)) {
            return Some(Self::Mongolian);
        }
        let lowered = t.to_lowercase();
        if ENGLISH_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            return Some(Self::English);
        }
        None
    }

    /// True for [`Locale::English`].
    #[must_use]
    pub const fn is_english(self) -> bool {
        matches!(self, Self::English)
    }
}
