//! The resolution engine: one turn in, one outcome out.

use std::sync::Arc;

use tracing::debug;

use gazarch_catalog::{CatalogIndex, ExclusionSet, PlaceRecord};
use gazarch_core::{PlaceKind, normalize};

use crate::extract::{extract_kind, extract_number};
use crate::state::PendingReference;

/// Normalized phrases that request the full catalog listing.
const LIST_PHRASES: &[&str] = &["байршлууд", "жагсаалт", "байршилууд", "locations", "list"];

/// The single result of one resolution turn.
///
/// Every variant is a first-class outcome with its own user-facing
/// message; none of them is an error and no turn can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// A catalog record matched.
    Found(&'a PlaceRecord),
    /// The `(kind, number)` pair is on the exclusion list.
    Unavailable,
    /// A numeric reference resolved to no record; suggest a name search.
    NotFoundNumber,
    /// A name matched no alias; suggest the listing command.
    NotFoundName,
    /// A bare number needs a category answer on the next turn.
    AskKind,
    /// The post-exclusion titles, in catalog order.
    Listing(Vec<&'a str>),
}

/// Resolves location queries against the catalog indices.
///
/// The indices are read-only after construction, so one resolver is
/// shared across all conversations; the per-conversation part of a turn
/// lives entirely in the caller-owned [`PendingReference`].
#[derive(Debug, Clone)]
pub struct Resolver {
    index: Arc<CatalogIndex>,
    exclusions: ExclusionSet,
}

impl Resolver {
    #[must_use]
    pub const fn new(index: Arc<CatalogIndex>, exclusions: ExclusionSet) -> Self {
        Self { index, exclusions }
    }

    #[must_use]
    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Resolve one conversation turn.
    ///
    /// Branches are tried top to bottom and the first applicable one
    /// terminates the turn:
    ///
    /// 1. a pending number consumes the turn as a category answer;
    /// 2. a listing phrase enumerates the catalog;
    /// 3. an extracted number resolves directly (with category) or parks
    ///    as pending (without);
    /// 4. alias matching, exact before substring.
    pub fn resolve_turn<'a>(&'a self, text: &str, pending: &mut PendingReference) -> Outcome<'a> {
        if let Some(number) = pending.number {
            return self.resolve_pending(text, number, pending);
        }

        let ntext = normalize(text);

        if LIST_PHRASES.contains(&ntext.as_str()) {
            debug!("listing request");
            return Outcome::Listing(self.index.titles().collect());
        }

        let kind = extract_kind(text);
        let number = extract_number(text);

        match (number, kind) {
            (Some(number), None) => {
                debug!("bare number {number}, asking for kind");
                pending.number = Some(number);
                Outcome::AskKind
            }
            (Some(number), Some(kind)) => {
                pending.last_kind = Some(kind);
                self.lookup(kind, number)
            }
            (None, _) => self.resolve_by_alias(&ntext),
        }
    }

    /// Branch 1: a number from the previous turn is waiting for its
    /// category. The reply's own kind wins; the previously resolved kind
    /// is the fallback. Neither present → re-prompt, number preserved.
    fn resolve_pending<'a>(
        &'a self,
        text: &str,
        number: u8,
        pending: &mut PendingReference,
    ) -> Outcome<'a> {
        let Some(kind) = extract_kind(text).or(pending.last_kind) else {
            debug!("clarification turn yielded no kind, re-prompting");
            return Outcome::AskKind;
        };

        pending.number = None;
        pending.last_kind = Some(kind);
        self.lookup(kind, number)
    }

    fn lookup<'a>(&'a self, kind: PlaceKind, number: u8) -> Outcome<'a> {
        if self.exclusions.contains(kind.as_str(), number) {
            debug!("({kind}, {number}) is excluded");
            return Outcome::Unavailable;
        }
        self.index
            .get_by_number(kind.as_str(), number)
            .map_or(Outcome::NotFoundNumber, Outcome::Found)
    }

    /// Branch 4: exact alias match first, then the first record whose
    /// alias is a substring of the input, in alias-insertion order.
    fn resolve_by_alias<'a>(&'a self, ntext: &str) -> Outcome<'a> {
        if let Some(record) = self.index.get_by_alias(ntext) {
            return Outcome::Found(record);
        }
        self.index
            .find_by_alias_substring(ntext)
            .map_or(Outcome::NotFoundName, Outcome::Found)
    }
}
