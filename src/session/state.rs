//! Per-session deck state.
//!
//! One `SessionState` exists per active session. It is a plain in-memory
//! structure with no ambient dependencies: construct one directly in tests,
//! or let a [`SessionStore`](crate::session::SessionStore) round-trip it as
//! an opaque blob. Every mutation is self-contained, so a single operation
//! can always be applied to a freshly fetched state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{DeckId, DeckRng};
use crate::decks::Deck;
use crate::templates::DeckTemplate;

/// Most decks a session may hold at once.
pub const MAX_DECKS: usize = 10;

/// All deck state for one session.
///
/// Deck order is insertion order and is user-visible. `drawn_cards` keeps
/// the most recent draw per deck for transient display; each draw overwrites
/// the previous entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionState {
    decks: Vec<Deck>,
    #[serde(default)]
    drawn_cards: FxHashMap<DeckId, Vec<Card>>,
    // Monotonic, never reset, so removed deck ids are not reused.
    next_deck_id: u32,
}

impl SessionState {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decks in insertion order.
    #[must_use]
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Number of live decks.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    /// Instantiate a template into a new, shuffled deck.
    ///
    /// Each template card entry becomes one fresh `Card`; loading the same
    /// template twice never reuses an id. The new deck gets the template's
    /// name, a freshly allocated deck id, and an initial shuffle, and is
    /// appended to the session. Returns `None` when the session already
    /// holds [`MAX_DECKS`] decks.
    pub fn add_deck(&mut self, template: &DeckTemplate, rng: &mut DeckRng) -> Option<DeckId> {
        if self.decks.len() >= MAX_DECKS {
            return None;
        }

        let cards = template
            .cards
            .iter()
            .map(|spec| Card::new(&spec.name, Some(spec.data.clone())))
            .collect();

        let id = DeckId::new(self.next_deck_id);
        self.next_deck_id += 1;

        let mut deck = Deck::new(id, &template.name, cards);
        deck.shuffle(rng);
        self.decks.push(deck);
        Some(id)
    }

    /// Find a deck by id.
    #[must_use]
    pub fn find_deck(&self, deck_id: DeckId) -> Option<&Deck> {
        self.decks.iter().find(|d| d.id() == deck_id)
    }

    /// Find a deck by id for mutation.
    pub fn find_deck_mut(&mut self, deck_id: DeckId) -> Option<&mut Deck> {
        self.decks.iter_mut().find(|d| d.id() == deck_id)
    }

    /// Remove a deck and all cards reachable through it.
    ///
    /// Also prunes the deck's `drawn_cards` entry so no stale draw history
    /// outlives the deck. Returns the removed deck, or `None` if the id is
    /// unknown.
    pub fn remove_deck(&mut self, deck_id: DeckId) -> Option<Deck> {
        let index = self.decks.iter().position(|d| d.id() == deck_id)?;
        self.drawn_cards.remove(&deck_id);
        Some(self.decks.remove(index))
    }

    /// Record the most recent draw for a deck, replacing any prior entry.
    pub fn record_draw(&mut self, deck_id: DeckId, cards: Vec<Card>) {
        self.drawn_cards.insert(deck_id, cards);
    }

    /// The most recently drawn cards for a deck, if any draw happened.
    #[must_use]
    pub fn last_drawn(&self, deck_id: DeckId) -> Option<&[Card]> {
        self.drawn_cards.get(&deck_id).map(Vec::as_slice)
    }
}
