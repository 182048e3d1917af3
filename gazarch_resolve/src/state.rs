//! Per-conversation disambiguation state.

use serde::{Deserialize, Serialize};

use gazarch_core::PlaceKind;

/// The single piece of cross-turn memory the resolver keeps.
///
/// When a turn yields a bare building number with no category, the
/// number parks here and the very next turn is expected to answer with a
/// category. `last_kind` additionally remembers the category of the most
/// recent kind-bearing resolution, so a clarification answer like "the
/// same one" (no keyword at all, but a category already on record) can
/// still resolve.
///
/// Owned exclusively by one conversation; the surrounding orchestration
/// serializes turns, so no locking happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReference {
    /// A number awaiting its category, if any.
    pub number: Option<u8>,
    /// Category of the last successful kind-bearing resolution.
    pub last_kind: Option<PlaceKind>,
}

impl PendingReference {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            number: None,
            last_kind: None,
        }
    }

    /// True while a number is parked waiting for a category answer.
    #[must_use]
    pub const fn is_awaiting_kind(&self) -> bool {
        self.number.is_some()
    }
}
