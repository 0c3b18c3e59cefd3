//! The template-provider capability.

use rustc_hash::FxHashMap;

use super::template::DeckTemplate;

/// Supplies deck templates by name.
///
/// The engine consumes this capability; where the templates actually live
/// (static files, a database, a bundle) is the implementor's business.
pub trait TemplateProvider {
    /// Names of every available template, for presentation to the user.
    fn template_names(&self) -> Vec<String>;

    /// Load a template by name, or `None` if no such template exists.
    fn load(&self, name: &str) -> Option<DeckTemplate>;
}

/// In-memory template table.
///
/// Reference `TemplateProvider` backed by a map, filled programmatically or
/// from JSON documents in the wire format.
#[derive(Clone, Debug, Default)]
pub struct StaticTemplates {
    templates: FxHashMap<String, DeckTemplate>,
}

impl StaticTemplates {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under its own name.
    ///
    /// A later insert with the same name replaces the earlier one.
    pub fn insert(&mut self, template: DeckTemplate) {
        self.templates.insert(template.name.clone(), template);
    }

    /// Parse a JSON document in the wire format and register it.
    pub fn insert_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        self.insert(DeckTemplate::from_json(json)?);
        Ok(())
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateProvider for StaticTemplates {
    fn template_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.templates.keys().cloned().collect();
        names.sort();
        names
    }

    fn load(&self, name: &str) -> Option<DeckTemplate> {
        self.templates.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::CardSpec;

    fn pair_template() -> DeckTemplate {
        DeckTemplate::new("Pair", vec![CardSpec::new("A"), CardSpec::new("B")])
    }

    #[test]
    fn test_insert_and_load() {
        let mut provider = StaticTemplates::new();
        provider.insert(pair_template());

        let loaded = provider.load("Pair").unwrap();
        assert_eq!(loaded.name, "Pair");
        assert_eq!(loaded.cards.len(), 2);

        assert!(provider.load("Missing").is_none());
    }

    #[test]
    fn test_names_are_sorted() {
        let mut provider = StaticTemplates::new();
        provider.insert(DeckTemplate::new("Zulu", vec![]));
        provider.insert(DeckTemplate::new("Alpha", vec![]));
        provider.insert(pair_template());

        assert_eq!(provider.template_names(), vec!["Alpha", "Pair", "Zulu"]);
    }

    #[test]
    fn test_insert_json() {
        let mut provider = StaticTemplates::new();
        provider
            .insert_json(r#"{"deck": {"name": "Solo", "cards": [{"name": "Only"}]}}"#)
            .unwrap();

        assert_eq!(provider.len(), 1);
        assert_eq!(provider.load("Solo").unwrap().cards[0].name, "Only");
    }

    #[test]
    fn test_reinsert_replaces() {
        let mut provider = StaticTemplates::new();
        provider.insert(pair_template());
        provider.insert(DeckTemplate::new("Pair", vec![CardSpec::new("Lone")]));

        assert_eq!(provider.len(), 1);
        assert_eq!(provider.load("Pair").unwrap().cards.len(), 1);
    }
}
