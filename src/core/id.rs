//! Identifier newtypes for cards and decks.
//!
//! ## Identity rules
//!
//! - `CardId` is a freshly generated UUID v4. Card ids double as the
//!   equality and lookup key across decks and across merges, so they must be
//!   unique with overwhelming probability even when the same template is
//!   instantiated many times.
//! - `DeckId` only has to be unique within one session's lifetime, so it is
//!   a plain counter-allocated `u32`. The session owns the counter and never
//!   reuses a value, even after a deck is removed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a card instance.
///
/// Assigned when a deck is instantiated from a template, never at
/// template-authoring time. Two loads of the same template produce disjoint
/// id sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(Uuid);

impl CardId {
    /// Generate a fresh card id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn raw(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Unique identifier for a deck within one session.
///
/// Allocated by the session's monotonic counter; see
/// [`SessionState`](crate::session::SessionState).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckId(pub u32);

impl DeckId {
    /// Create a deck id from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Deck({})", self.0)
    }
}
