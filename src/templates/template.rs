//! Template data: a named deck definition with its card list.
//!
//! ## Wire format
//!
//! Templates are authored as a record with a `deck` object:
//!
//! ```json
//! {
//!   "deck": {
//!     "name": "Standard 52",
//!     "cards": [
//!       { "name": "Ace of Spades", "data": { "suit": "spades", "rank": 1 } },
//!       { "name": "Two of Spades" }
//!     ]
//!   }
//! }
//! ```
//!
//! Card entries carry no id. Ids are assigned at instantiation time by the
//! session, so the same template can be loaded into multiple decks or
//! sessions without collision.

use serde::{Deserialize, Serialize};

use crate::cards::Attributes;

/// One card entry in a template: a required name plus optional free-form
/// data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardSpec {
    pub name: String,
    #[serde(default)]
    pub data: Attributes,
}

impl CardSpec {
    /// Create a card entry with no data.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Attributes::default(),
        }
    }

    /// Create a card entry with data.
    #[must_use]
    pub fn with_data(name: impl Into<String>, data: Attributes) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// A named, static deck definition, not tied to any session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckTemplate {
    pub name: String,
    pub cards: Vec<CardSpec>,
}

impl DeckTemplate {
    /// Create a template from card entries, in order.
    #[must_use]
    pub fn new(name: impl Into<String>, cards: Vec<CardSpec>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    /// Parse the `{"deck": {...}}` wire format.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: TemplateFile = serde_json::from_str(json)?;
        Ok(file.deck)
    }
}

/// Top-level wrapper of the wire format.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct TemplateFile {
    deck: DeckTemplate,
}
