//! Session system: per-session deck state, the store boundary, and the
//! orchestration surface.
//!
//! ## Key Types
//!
//! - `SessionState`: up to [`MAX_DECKS`](state::MAX_DECKS) live decks plus
//!   the most recent draw per deck
//! - `SessionStore`: last-write-wins key-value capability holding one state
//!   blob per session key
//! - `SessionEngine`: binds a provider, a store, and an RNG; every public
//!   operation is one fetch, mutate, store cycle

pub mod ops;
pub mod state;
pub mod store;

pub use ops::{merge_decks, move_random_card, move_specific_card, OpError, SessionEngine};
pub use state::{SessionState, MAX_DECKS};
pub use store::{MemoryStore, SessionStore, StoreError};
