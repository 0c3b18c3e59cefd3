//! Deck templates: static deck definitions and the provider boundary.
//!
//! Template loading is an external concern. The engine only needs the
//! `TemplateProvider` capability: given a name, return an ordered list of
//! card names with optional opaque data, or nothing. `StaticTemplates` is
//! the in-memory reference implementation, with JSON loading for the
//! documented wire format.

pub mod provider;
pub mod template;

pub use provider::{StaticTemplates, TemplateProvider};
pub use template::{CardSpec, DeckTemplate};
