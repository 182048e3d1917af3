//! Per-conversation session wrapper.
//!
//! A session owns the two things that survive between turns of one
//! conversation: the pending disambiguation state and the sticky reply
//! locale. The resolver itself is shared and stateless per turn, so one
//! session per conversation with at most one in-flight turn is the whole
//! concurrency story.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use gazarch_core::Locale;

use crate::engine::Resolver;
use crate::reply::render;
use crate::state::PendingReference;

/// The rendered result of one turn.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Message to show the user.
    pub message: String,
    /// 1-based turn counter within this session.
    pub turn_number: usize,
}

/// One user's ongoing location conversation.
#[derive(Debug, Clone)]
pub struct LocationSession {
    /// Session identifier
    pub id: Uuid,
    /// Current reply locale; re-detected from each message, sticky when
    /// a message carries no signal.
    pub locale: Locale,
    /// Pending disambiguation state
    pub pending: PendingReference,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    turns: usize,
}

impl LocationSession {
    /// Create a fresh session with the given default locale.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            locale,
            pending: PendingReference::new(),
            created_at: now,
            updated_at: now,
            turns: 0,
        }
    }

    /// Handle one turn: update the locale from the message, resolve it,
    /// and render the outcome.
    pub fn turn(&mut self, resolver: &Resolver, text: &str) -> Reply {
        if let Some(detected) = Locale::detect(text) {
            self.locale = detected;
        }
        let outcome = resolver.resolve_turn(text, &mut self.pending);
        let message = render(&outcome, self.locale);
        self.turns += 1;
        self.updated_at = Utc::now();
        Reply {
            message,
            turn_number: self.turns,
        }
    }

    /// Number of turns handled so far.
    #[must_use]
    pub const fn turn_count(&self) -> usize {
        self.turns
    }
}

impl Default for LocationSession {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
