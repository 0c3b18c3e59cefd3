//! # deckhand
//!
//! A session-scoped deck state engine for tabletop-style card games: a
//! shared, server-held scratchpad for which cards remain in a deck, which
//! were discarded, and the effect of shuffle / draw / move / merge
//! operations over time.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: the engine is plain data plus synchronous
//!    transformations. Templates and persistence are injected capabilities
//!    ([`TemplateProvider`], [`SessionStore`]), so a `SessionState` can be
//!    constructed directly in tests.
//!
//! 2. **Identity over content**: cards are equal iff their generated ids are
//!    equal. Two "Ace of Spades" from the same template are distinct cards.
//!
//! 3. **Injectable randomness**: every shuffle and random pick flows through
//!    [`DeckRng`], so tests fix a seed and assert exact orders.
//!
//! 4. **Single round trip**: every public operation is one fetch, mutate,
//!    store cycle against the session store. Consistency beyond
//!    last-write-wins is the caller's concern.
//!
//! ## Modules
//!
//! - `core`: card/deck identifiers and the RNG capability
//! - `cards`: the card value type and its opaque attributes
//! - `decks`: the deck with its discard pile and movement primitives
//! - `templates`: static deck definitions and the provider boundary
//! - `session`: session state, the store boundary, and orchestration

pub mod cards;
pub mod core;
pub mod decks;
pub mod session;
pub mod templates;

// Re-export commonly used types
pub use crate::core::{CardId, DeckId, DeckRng};

pub use crate::cards::{AttributeKey, AttributeValue, Attributes, Card};

pub use crate::decks::{Deck, DiscardVisibility};

pub use crate::templates::{CardSpec, DeckTemplate, StaticTemplates, TemplateProvider};

pub use crate::session::{
    merge_decks, move_random_card, move_specific_card, MemoryStore, OpError, SessionEngine,
    SessionState, SessionStore, StoreError, MAX_DECKS,
};
