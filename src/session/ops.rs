//! Orchestration operations and the typed error surface.
//!
//! Operations that span two decks (`move_specific_card`, `move_random_card`,
//! `merge_decks`) are plain functions over a `&mut SessionState`, so they
//! can be tested against a directly constructed state. `SessionEngine` wraps
//! them - and the single-deck operations - into fetch, mutate, store cycles
//! against an injected [`SessionStore`] and [`TemplateProvider`].
//!
//! ## Error surface
//!
//! Every branch a caller might care about is a distinct `OpError` variant
//! instead of a silent no-op: not-found conditions, moving from an empty
//! deck, and the session capacity ceiling. The one deliberate degrade is the
//! draw count: drawing more cards than remain returns the available cards
//! and is never an error.

use thiserror::Error;

use super::state::{SessionState, MAX_DECKS};
use super::store::{SessionStore, StoreError};
use crate::cards::Card;
use crate::core::{CardId, DeckId, DeckRng};
use crate::templates::TemplateProvider;

/// Why an operation could not be applied.
#[derive(Debug, Error)]
pub enum OpError {
    /// The template provider knows no template by this name.
    #[error("no template named {0:?}")]
    TemplateNotFound(String),
    /// No deck with this id lives in the session.
    #[error("no {0} in this session")]
    DeckNotFound(DeckId),
    /// The card is not among the source deck's in-play cards.
    #[error("{0} is not in the source deck")]
    CardNotFound(CardId),
    /// A random move was requested from a deck with no in-play cards.
    #[error("{0} has no cards to move")]
    DeckEmpty(DeckId),
    /// The session already holds the maximum number of decks.
    #[error("session already holds {MAX_DECKS} decks")]
    CapacityExceeded,
    /// The session store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Move one card, chosen by id, from the source deck to the top of the
/// target deck.
///
/// Both decks and the card are validated before anything moves, so the card
/// ends up in exactly one deck no matter which branch is taken. Only cards
/// in play are eligible; discarded cards stay put.
pub fn move_specific_card(
    state: &mut SessionState,
    source_id: DeckId,
    target_id: DeckId,
    card_id: CardId,
) -> Result<(), OpError> {
    state
        .find_deck(target_id)
        .ok_or(OpError::DeckNotFound(target_id))?;

    let source = state
        .find_deck_mut(source_id)
        .ok_or(OpError::DeckNotFound(source_id))?;
    let card = source
        .select_and_remove(card_id)
        .ok_or(OpError::CardNotFound(card_id))?;

    // Target presence was checked before the removal.
    if let Some(target) = state.find_deck_mut(target_id) {
        target.add_to_top([card]);
    }
    Ok(())
}

/// Move one uniformly random in-play card from the source deck to the top
/// of the target deck. Returns the id of the moved card.
pub fn move_random_card(
    state: &mut SessionState,
    source_id: DeckId,
    target_id: DeckId,
    rng: &mut DeckRng,
) -> Result<CardId, OpError> {
    state
        .find_deck(target_id)
        .ok_or(OpError::DeckNotFound(target_id))?;

    let card_id = {
        let source = state
            .find_deck(source_id)
            .ok_or(OpError::DeckNotFound(source_id))?;
        if source.is_empty() {
            return Err(OpError::DeckEmpty(source_id));
        }
        source.cards()[rng.gen_index(source.len())].id()
    };

    move_specific_card(state, source_id, target_id, card_id)?;
    Ok(card_id)
}

/// Merge the second deck into the first, then remove the second deck from
/// the session.
///
/// Both piles keep their relative order and nothing is shuffled. Merging a
/// deck with itself is an explicit no-op.
pub fn merge_decks(
    state: &mut SessionState,
    keep_id: DeckId,
    other_id: DeckId,
) -> Result<(), OpError> {
    if keep_id == other_id {
        return Ok(());
    }
    state
        .find_deck(keep_id)
        .ok_or(OpError::DeckNotFound(keep_id))?;
    let absorbed = state
        .remove_deck(other_id)
        .ok_or(OpError::DeckNotFound(other_id))?;

    if let Some(keep) = state.find_deck_mut(keep_id) {
        keep.merge(&absorbed);
    }
    Ok(())
}

/// The engine a thin API layer talks to.
///
/// Owns the template provider, the session store, and the randomness
/// capability. Every operation fetches the session's state (an unknown
/// session key starts as an empty session), applies one self-contained
/// mutation, and writes the state back. Nothing spans two store round
/// trips, so callers can serialize operations per session key externally.
pub struct SessionEngine<P, S> {
    provider: P,
    store: S,
    rng: DeckRng,
}

impl<P: TemplateProvider, S: SessionStore> SessionEngine<P, S> {
    /// Create an engine with entropy-seeded randomness.
    #[must_use]
    pub fn new(provider: P, store: S) -> Self {
        Self::with_rng(provider, store, DeckRng::from_entropy())
    }

    /// Create an engine with a caller-supplied RNG (deterministic in tests).
    #[must_use]
    pub fn with_rng(provider: P, store: S, rng: DeckRng) -> Self {
        Self {
            provider,
            store,
            rng,
        }
    }

    /// Template names available for deck creation.
    #[must_use]
    pub fn template_names(&self) -> Vec<String> {
        self.provider.template_names()
    }

    /// Read back a session's state for the rendering layer.
    pub fn session(&self, key: &str) -> Result<Option<SessionState>, OpError> {
        Ok(self.store.get(key)?)
    }

    /// Terminate a session, dropping its state from the store.
    pub fn end_session(&mut self, key: &str) -> Result<(), OpError> {
        Ok(self.store.delete(key)?)
    }

    fn fetch(&self, key: &str) -> Result<SessionState, OpError> {
        Ok(self.store.get(key)?.unwrap_or_default())
    }

    /// Instantiate a named template into the session as a new shuffled deck.
    pub fn add_deck(&mut self, key: &str, template_name: &str) -> Result<DeckId, OpError> {
        let template = self
            .provider
            .load(template_name)
            .ok_or_else(|| OpError::TemplateNotFound(template_name.to_string()))?;

        let mut state = self.fetch(key)?;
        let id = state
            .add_deck(&template, &mut self.rng)
            .ok_or(OpError::CapacityExceeded)?;
        self.store.put(key, &state)?;
        Ok(id)
    }

    /// Remove a deck and all its cards from the session.
    pub fn remove_deck(&mut self, key: &str, deck_id: DeckId) -> Result<(), OpError> {
        let mut state = self.fetch(key)?;
        state
            .remove_deck(deck_id)
            .ok_or(OpError::DeckNotFound(deck_id))?;
        self.store.put(key, &state)?;
        Ok(())
    }

    /// Shuffle a deck's in-play cards.
    pub fn shuffle(&mut self, key: &str, deck_id: DeckId) -> Result<(), OpError> {
        let mut state = self.fetch(key)?;
        state
            .find_deck_mut(deck_id)
            .ok_or(OpError::DeckNotFound(deck_id))?
            .shuffle(&mut self.rng);
        self.store.put(key, &state)?;
        Ok(())
    }

    /// Return a deck's discard pile to play, then shuffle the whole deck.
    pub fn shuffle_discard_into_deck(
        &mut self,
        key: &str,
        deck_id: DeckId,
    ) -> Result<(), OpError> {
        let mut state = self.fetch(key)?;
        state
            .find_deck_mut(deck_id)
            .ok_or(OpError::DeckNotFound(deck_id))?
            .shuffle_discard_into_deck(&mut self.rng);
        self.store.put(key, &state)?;
        Ok(())
    }

    /// Draw up to `count` cards and record them as the deck's most recent
    /// draw. Returns the drawn cards, possibly fewer than requested.
    pub fn draw(&mut self, key: &str, deck_id: DeckId, count: usize) -> Result<Vec<Card>, OpError> {
        let mut state = self.fetch(key)?;
        let drawn = state
            .find_deck_mut(deck_id)
            .ok_or(OpError::DeckNotFound(deck_id))?
            .draw(count);
        state.record_draw(deck_id, drawn.clone());
        self.store.put(key, &state)?;
        Ok(drawn)
    }

    /// Move a uniformly random card between two decks.
    pub fn move_random_card(
        &mut self,
        key: &str,
        source_id: DeckId,
        target_id: DeckId,
    ) -> Result<CardId, OpError> {
        let mut state = self.fetch(key)?;
        let moved = move_random_card(&mut state, source_id, target_id, &mut self.rng)?;
        self.store.put(key, &state)?;
        Ok(moved)
    }

    /// Move a specific card between two decks.
    pub fn move_specific_card(
        &mut self,
        key: &str,
        source_id: DeckId,
        target_id: DeckId,
        card_id: CardId,
    ) -> Result<(), OpError> {
        let mut state = self.fetch(key)?;
        move_specific_card(&mut state, source_id, target_id, card_id)?;
        self.store.put(key, &state)?;
        Ok(())
    }

    /// Merge the second deck into the first and drop the second.
    pub fn merge_decks(
        &mut self,
        key: &str,
        keep_id: DeckId,
        other_id: DeckId,
    ) -> Result<(), OpError> {
        let mut state = self.fetch(key)?;
        merge_decks(&mut state, keep_id, other_id)?;
        self.store.put(key, &state)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{CardSpec, DeckTemplate};

    fn template(name: &str, cards: &[&str]) -> DeckTemplate {
        DeckTemplate::new(name, cards.iter().map(|n| CardSpec::new(*n)).collect())
    }

    fn two_deck_state(rng: &mut DeckRng) -> (SessionState, DeckId, DeckId) {
        let mut state = SessionState::new();
        let a = state
            .add_deck(&template("Alpha", &["A1", "A2", "A3"]), rng)
            .unwrap();
        let b = state.add_deck(&template("Beta", &["B1", "B2"]), rng).unwrap();
        (state, a, b)
    }

    fn all_card_ids(state: &SessionState) -> Vec<CardId> {
        let mut ids: Vec<_> = state
            .decks()
            .iter()
            .flat_map(|d| {
                d.cards()
                    .iter()
                    .chain(d.discard_pile().iter())
                    .map(Card::id)
            })
            .collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_move_specific_card_is_atomic() {
        let mut rng = DeckRng::new(42);
        let (mut state, a, b) = two_deck_state(&mut rng);
        let card_id = state.find_deck(a).unwrap().cards()[0].id();

        move_specific_card(&mut state, a, b, card_id).unwrap();

        let in_a = state.find_deck(a).unwrap().find_card(card_id).is_some();
        let in_b = state.find_deck(b).unwrap().find_card(card_id).is_some();
        assert!(!in_a);
        assert!(in_b);
        assert_eq!(state.find_deck(b).unwrap().cards().last().unwrap().id(), card_id);
    }

    #[test]
    fn test_move_specific_card_missing_target_changes_nothing() {
        let mut rng = DeckRng::new(42);
        let (mut state, a, _) = two_deck_state(&mut rng);
        let before = all_card_ids(&state);
        let card_id = state.find_deck(a).unwrap().cards()[0].id();

        let err = move_specific_card(&mut state, a, DeckId::new(99), card_id).unwrap_err();
        assert!(matches!(err, OpError::DeckNotFound(_)));
        assert_eq!(all_card_ids(&state), before);
        assert!(state.find_deck(a).unwrap().find_card(card_id).is_some());
    }

    #[test]
    fn test_move_specific_card_unknown_card() {
        let mut rng = DeckRng::new(42);
        let (mut state, a, b) = two_deck_state(&mut rng);
        let stranger = Card::new("stranger", None).id();

        let err = move_specific_card(&mut state, a, b, stranger).unwrap_err();
        assert!(matches!(err, OpError::CardNotFound(_)));
    }

    #[test]
    fn test_move_specific_card_ignores_discarded() {
        let mut rng = DeckRng::new(42);
        let (mut state, a, b) = two_deck_state(&mut rng);
        let discarded = state.find_deck_mut(a).unwrap().draw(1)[0].id();

        let err = move_specific_card(&mut state, a, b, discarded).unwrap_err();
        assert!(matches!(err, OpError::CardNotFound(_)));
    }

    #[test]
    fn test_move_random_card_conserves_cards() {
        let mut rng = DeckRng::new(42);
        let (mut state, a, b) = two_deck_state(&mut rng);
        let before = all_card_ids(&state);

        let moved = move_random_card(&mut state, a, b, &mut rng).unwrap();

        assert_eq!(all_card_ids(&state), before);
        assert_eq!(state.find_deck(a).unwrap().len(), 2);
        assert_eq!(state.find_deck(b).unwrap().len(), 3);
        assert!(state.find_deck(b).unwrap().find_card(moved).is_some());
    }

    #[test]
    fn test_move_random_card_from_empty_source() {
        let mut rng = DeckRng::new(42);
        let mut state = SessionState::new();
        let empty = state.add_deck(&template("Empty", &[]), &mut rng).unwrap();
        let full = state.add_deck(&template("Full", &["X"]), &mut rng).unwrap();

        let err = move_random_card(&mut state, empty, full, &mut rng).unwrap_err();
        assert!(matches!(err, OpError::DeckEmpty(_)));
    }

    #[test]
    fn test_merge_decks_removes_second() {
        let mut rng = DeckRng::new(42);
        let (mut state, a, b) = two_deck_state(&mut rng);
        state.find_deck_mut(b).unwrap().draw(1);
        let before = all_card_ids(&state);

        merge_decks(&mut state, a, b).unwrap();

        assert_eq!(state.deck_count(), 1);
        assert!(state.find_deck(b).is_none());
        let merged = state.find_deck(a).unwrap();
        assert_eq!(merged.len(), 4);
        assert_eq!(merged.discard_pile().len(), 1);
        assert_eq!(all_card_ids(&state), before);
    }

    #[test]
    fn test_merge_deck_with_itself_is_noop() {
        let mut rng = DeckRng::new(42);
        let (mut state, a, _) = two_deck_state(&mut rng);
        let before = all_card_ids(&state);

        merge_decks(&mut state, a, a).unwrap();

        assert_eq!(state.deck_count(), 2);
        assert_eq!(all_card_ids(&state), before);
    }

    #[test]
    fn test_merge_decks_missing_either_side() {
        let mut rng = DeckRng::new(42);
        let (mut state, a, _) = two_deck_state(&mut rng);

        assert!(matches!(
            merge_decks(&mut state, DeckId::new(99), a),
            Err(OpError::DeckNotFound(_))
        ));
        assert!(matches!(
            merge_decks(&mut state, a, DeckId::new(99)),
            Err(OpError::DeckNotFound(_))
        ));
        assert_eq!(state.deck_count(), 2);
    }
}
