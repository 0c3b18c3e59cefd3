//! Deck: ordered cards, a discard pile, and the movement primitives.
//!
//! ## Ordering convention
//!
//! Both `cards` and `discard_pile` are stacks: index 0 is the bottom, the
//! last index is the top. `draw` pops from the top, `add_to_bottom` inserts
//! at index 0. Shuffling and template instantiation use the same convention,
//! so "top" means the same end everywhere.
//!
//! ## Edge policy
//!
//! Lookups by id return `Option` instead of raising. Every operation on an
//! empty deck succeeds as a no-op: shuffling an empty deck does nothing,
//! `draw` returns as many cards as are available.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{CardId, DeckId, DeckRng};

/// How much of the discard pile the presentation layer may show.
///
/// Stored and exposed unchanged; the engine never interprets it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscardVisibility {
    /// Discard pile is face-down.
    #[default]
    Hidden,
    /// Entire discard pile is visible.
    All,
    /// Only the top N discarded cards are visible.
    Top(usize),
}

/// A named, ordered pile of cards with a parallel discard pile.
///
/// Every card reachable through a deck is in exactly one of `cards` or
/// `discard_pile`, never both, and never twice.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    id: DeckId,
    name: String,
    cards: Vec<Card>,
    discard_pile: Vec<Card>,
    pub discard_visibility: DiscardVisibility,
}

impl Deck {
    /// Create a deck from already instantiated cards, in template order.
    #[must_use]
    pub fn new(id: DeckId, name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            id,
            name: name.into(),
            cards,
            discard_pile: Vec::new(),
            discard_visibility: DiscardVisibility::default(),
        }
    }

    /// The deck's id, unique within its session.
    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    /// The deck's display name, taken from its template.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards currently in play, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Discarded cards, bottom to top.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Number of cards in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the in-play pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Find a card in play by id. Discarded cards are not searched.
    #[must_use]
    pub fn find_card(&self, card_id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == card_id)
    }

    /// Uniformly shuffle the in-play cards. The discard pile is untouched.
    pub fn shuffle(&mut self, rng: &mut DeckRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Return the discard pile to the deck, then shuffle everything.
    ///
    /// The pre-shuffle combined order is irrelevant since a full shuffle
    /// follows.
    pub fn shuffle_discard_into_deck(&mut self, rng: &mut DeckRng) {
        self.cards.append(&mut self.discard_pile);
        self.shuffle(rng);
    }

    /// Draw up to `n` cards from the top.
    ///
    /// The drawn cards move to the discard pile in draw order (first drawn
    /// is deepest of the newly discarded). Returns the drawn cards for
    /// transient display. Drawing from an undersized or empty deck returns
    /// fewer than `n` cards, never an error.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        let mut drawn = Vec::with_capacity(take);
        for _ in 0..take {
            if let Some(card) = self.cards.pop() {
                drawn.push(card);
            }
        }
        self.discard_pile.extend(drawn.iter().cloned());
        drawn
    }

    /// Remove a card in play by id and hand it to the caller.
    ///
    /// The card does not go to the discard pile; the caller decides its
    /// destination (move operations use this). Returns `None` if the card is
    /// not in play.
    pub fn select_and_remove(&mut self, card_id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id() == card_id)?;
        Some(self.cards.remove(index))
    }

    /// Insert cards on top of the deck.
    ///
    /// Accepts any sequence of cards; pass `[card]` for a single one. Cards
    /// are stacked in iteration order, so the last card ends up topmost.
    pub fn add_to_top(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Insert cards under the deck.
    ///
    /// Iteration order is preserved, with the first card becoming the new
    /// bottom.
    pub fn add_to_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        let mut rest = std::mem::take(&mut self.cards);
        self.cards = cards.into_iter().collect();
        self.cards.append(&mut rest);
    }

    /// Append another deck's piles to this one, preserving relative order.
    ///
    /// `other.cards` lands on top of `self.cards` and `other.discard_pile`
    /// on top of `self.discard_pile`. No shuffle happens. `other` is read
    /// immutably; the caller is responsible for removing it from the session
    /// afterward.
    pub fn merge(&mut self, other: &Deck) {
        self.cards.extend(other.cards.iter().cloned());
        self.discard_pile.extend(other.discard_pile.iter().cloned());
    }
}
