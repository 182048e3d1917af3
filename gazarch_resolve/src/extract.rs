//! Reference extraction from free text.
//!
//! Two independent extractors: a keyword-containment test for the place
//! category, and an ordered chain of three surface-form patterns for the
//! building number. The chain order is a behavioral contract: exact
//! digits, then the anchored "N-р байр" form, then a loose anywhere-in-
//! text search that also tolerates the common "байар" misspelling.
//! Only 1–2 digit numbers are recognized; no 3-digit building numbers
//! exist on campus.

use once_cell::sync::Lazy;
use regex::Regex;

use gazarch_core::{PlaceKind, normalize};

#[expect(clippy::expect_used, reason = "patterns are literals, checked by tests")]
fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern must compile")
}

/// Whole text is a bare 1–2 digit number.
static NUM_ONLY: Lazy<Regex> = Lazy::new(|| re(r"^\s*(\d{1,2})\s*$"));

/// Whole text is "<digits><dash?><р?> байр", e.g. "4-р байр", "12 байр".
static NUM_BUILDING: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)^\s*(\d{1,2})\s*[-‐‑‒–—]?\s*р?\s*байр\s*$"));

/// Same shape anywhere in the text, tolerating one stray letter in the
/// building word ("байар", or a Latin "a" slipped in).
static NUM_BUILDING_LOOSE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)(\d{1,2})\s*[-‐‑‒–—]?\s*р?\s*бай[аa]?р"));

/// Keywords marking the dormitory category.
const DORM_KEYWORDS: &[&str] = &["дотуур", "dorm"];

/// Keywords marking the academic-building category.
const CLASS_KEYWORDS: &[&str] = &["хичээл", "сургуулийн", "academic"];

/// Detect the place category from keywords in the text.
///
/// Checked in fixed order, dormitory before academic; the first keyword
/// set with a hit wins even if a pathological input contains both.
#[must_use]
pub fn extract_kind(text: &str) -> Option<PlaceKind> {
    let t = normalize(text);
    if DORM_KEYWORDS.iter().any(|kw| t.contains(kw)) {
        return Some(PlaceKind::Dorm);
    }
    if CLASS_KEYWORDS.iter().any(|kw| t.contains(kw)) {
        return Some(PlaceKind::Class);
    }
    None
}

/// Extract a building number from raw text.
///
/// The three patterns run in order, first match wins. Returns `None`
/// when no surface form matches.
#[must_use]
pub fn extract_number(text: &str) -> Option<u8> {
    let t = text.trim();
    for pattern in [&NUM_ONLY, &NUM_BUILDING, &NUM_BUILDING_LOOSE] {
        if let Some(caps) = pattern.captures(t) {
            if let Some(num) = caps.get(1).and_then(|m| m.as_str().parse::<u8>().ok()) {
                return Some(num);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number() {
        assert_eq!(extract_number("4"), Some(4));
        assert_eq!(extract_number("  47  "), Some(47));
        assert_eq!(extract_number("470"), None);
        assert_eq!(extract_number("байр"), None);
    }

    #[test]
    fn anchored_building_form() {
        assert_eq!(extract_number("4-р байр"), Some(4));
        assert_eq!(extract_number("4 байр"), Some(4));
        assert_eq!(extract_number("12р байр"), Some(12));
        assert_eq!(extract_number("4–р байр"), Some(4));
        assert_eq!(extract_number("4-Р БАЙР"), Some(4));
    }

    #[test]
    fn loose_form_matches_inside_longer_text() {
        assert_eq!(extract_number("дотуур 4-р байр хаана вэ"), Some(4));
        assert_eq!(extract_number("надад 7-р байар хэрэгтэй"), Some(7));
    }

    #[test]
    fn loose_form_tolerates_misspelling() {
        assert_eq!(extract_number("4-р байар"), Some(4));
        assert_eq!(extract_number("4-р байaр"), Some(4)); // Latin "a"
    }

    #[test]
    fn no_number_in_plain_names() {
        assert_eq!(extract_number("номын сан"), None);
        assert_eq!(extract_number("library"), None);
    }

    #[test]
    fn first_pattern_wins() {
        // "8" alone must come from the exact-digits pattern, not a loose
        // scan over surrounding words.
        assert_eq!(extract_number(" 8 "), Some(8));
    }

    #[test]
    fn dorm_keywords() {
        assert_eq!(extract_kind("дотуур байр"), Some(PlaceKind::Dorm));
        assert_eq!(extract_kind("the dorm please"), Some(PlaceKind::Dorm));
        assert_eq!(extract_kind("DORMITORY"), Some(PlaceKind::Dorm));
    }

    #[test]
    fn class_keywords() {
        assert_eq!(extract_kind("хичээлийн байр"), Some(PlaceKind::Class));
        assert_eq!(extract_kind("сургуулийн байр"), Some(PlaceKind::Class));
        assert_eq!(extract_kind("academic building"), Some(PlaceKind::Class));
    }

    #[test]
    fn dorm_checked_before_class() {
        assert_eq!(
            extract_kind("дотуур хичээлийн байр"),
            Some(PlaceKind::Dorm)
        );
    }

    #[test]
    fn no_kind_in_neutral_text() {
        assert_eq!(extract_kind("4"), None);
        assert_eq!(extract_kind("номын сан"), None);
    }

    #[test]
    fn kind_and_number_are_independent() {
        let text = "дотуур 4-р байр";
        assert_eq!(extract_kind(text), Some(PlaceKind::Dorm));
        assert_eq!(extract_number(text), Some(4));
    }
}
