//! The card value type.
//!
//! A `Card` is created once, when a deck is instantiated from a template,
//! and never mutated afterward. Its id is generated internally and is the
//! only thing equality, ordering, and hashing look at: two cards with the
//! same name and data are still distinct cards.

use serde::{Deserialize, Serialize};

use super::attributes::Attributes;
use crate::core::CardId;

/// A single card in play.
///
/// ## Example
///
/// ```
/// use deckhand::cards::Card;
///
/// let a = Card::new("Ace of Spades", None);
/// let b = Card::new("Ace of Spades", None);
///
/// // Same name, distinct identity.
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    name: String,
    #[serde(default)]
    data: Attributes,
}

impl Card {
    /// Create a card with a freshly generated id.
    ///
    /// The id is never caller-supplied, so instantiating the same template
    /// twice can never collide identifiers.
    #[must_use]
    pub fn new(name: impl Into<String>, data: Option<Attributes>) -> Self {
        Self {
            id: CardId::generate(),
            name: name.into(),
            data: data.unwrap_or_default(),
        }
    }

    /// The card's unique id.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The card's display name. Not required to be unique.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque attributes carried from the template. May be empty.
    #[must_use]
    pub fn data(&self) -> &Attributes {
        &self.data
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}
