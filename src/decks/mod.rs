//! Deck system: an ordered pile of cards plus its discard pile.
//!
//! The `Deck` owns every card-movement primitive that touches a single deck
//! or a pair of decks: shuffle, draw, select-and-remove, top/bottom inserts,
//! and merge. Card order is significant throughout - it represents physical
//! stacking, with the last index as the top.

pub mod deck;

pub use deck::{Deck, DiscardVisibility};
