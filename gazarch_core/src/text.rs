//! Text normalization for alias comparison.
//!
//! Every string that enters an index or is compared against one goes
//! through [`normalize`] first, so user input and catalog aliases meet
//! on identical footing regardless of case, quoting, or spacing.

use once_cell::sync::Lazy;
use regex::Regex;

#[expect(clippy::expect_used, reason = "patterns are literals, checked by tests")]
fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern must compile")
}

static QUOTES: Lazy<Regex> = Lazy::new(|| re("[“”\"'`]"));
static PUNCT: Lazy<Regex> = Lazy::new(|| re(r"[,\.\(\)\[\]\{\}]"));
static SPACES: Lazy<Regex> = Lazy::new(|| re(r"\s+"));

/// Canonicalize free text for comparison.
///
/// Steps, in order: trim, lowercase, fold `ё` to `е`, delete quotation
/// marks, replace brackets and sentence punctuation with a space (not
/// deleted, so `"(library)"` and `"library"` still collide on the same
/// token), collapse whitespace runs, trim again.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
#[must_use]
pub fn normalize(text: &str) -> String {
    let s = text.trim().to_lowercase().replace('ё', "е");
    let s = QUOTES.replace_all(&s, "");
    let s = PUNCT.replace_all(&s, " ");
    let s = SPACES.replace_all(&s, " ");
    s.trim().to_string()
}
