//! Deck registry.

use rustc_hash::FxHashMap;

use super::definition::DeckDefinition;
use crate::core::{CatalogError, Result};

/// Deck definitions keyed by id, iterated in registration order.
#[derive(Clone, Debug, Default)]
pub struct DeckRegistry {
    decks: FxHashMap<String, DeckDefinition>,
    order: Vec<String>,
}

impl DeckRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a deck. Fails if the id is taken.
    pub fn register(&mut self, deck: DeckDefinition) -> Result<()> {
        if self.decks.contains_key(&deck.id) {
            return Err(CatalogError::DuplicateDeck(deck.id));
        }
        self.order.push(deck.id.clone());
        self.decks.insert(deck.id.clone(), deck);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DeckDefinition> {
        self.decks.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.decks.contains_key(id)
    }

    /// Decks built from one set.
    pub fn by_set<'a>(&'a self, set: &'a str) -> impl Iterator<Item = &'a DeckDefinition> + 'a {
        self.iter().filter(move |deck| deck.set.as_str() == set)
    }

    /// Deck ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeckDefinition> {
        self.order.iter().filter_map(|id| self.decks.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
}
