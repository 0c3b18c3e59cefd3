//! Card system: the card value type and its opaque attribute map.
//!
//! ## Key Types
//!
//! - `Card`: identity-bearing value, equal iff ids are equal
//! - `AttributeKey` / `AttributeValue` / `Attributes`: free-form card data
//!   carried from templates, never interpreted by the engine

pub mod attributes;
pub mod card;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use card::Card;
