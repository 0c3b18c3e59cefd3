//! Core engine types: identifiers and the randomness capability.
//!
//! These are the building blocks everything else leans on. Identifiers are
//! the sole equality keys in the engine; the RNG is injectable so tests can
//! fix seeds and assert exact resulting orders.

pub mod id;
pub mod rng;

pub use id::{CardId, DeckId};
pub use rng::DeckRng;
