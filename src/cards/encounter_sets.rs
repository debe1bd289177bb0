//! Named encounter sets within a card store.
//!
//! An encounter set is a reusable, ordered grouping of encounter cards
//! ("Spiders of Mirkwood", "Dol Guldur Orcs"). Scenarios refer to sets by
//! name. Membership is pure grouping: the same code may sit in several sets
//! and still resolves to one template in its home store.

use rustc_hash::FxHashMap;

use crate::core::{CardCode, CatalogError, Result};

/// Name → ordered member codes.
#[derive(Clone, Debug, Default)]
pub struct EncounterSetCatalog {
    sets: FxHashMap<String, Vec<CardCode>>,
    /// Set names in definition order.
    order: Vec<String>,
}

impl EncounterSetCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a set. Member order is kept exactly as given.
    ///
    /// Member validation against templates is the store's job; this only
    /// rejects a name defined twice.
    pub fn insert(&mut self, name: impl Into<String>, members: Vec<CardCode>) -> Result<()> {
        let name = name.into();
        if self.sets.contains_key(&name) {
            return Err(CatalogError::DuplicateEncounterSet(name));
        }
        self.order.push(name.clone());
        self.sets.insert(name, members);
        Ok(())
    }

    /// Member codes of a set, in order. Empty for an unknown name.
    #[must_use]
    pub fn members(&self, name: &str) -> &[CardCode] {
        self.sets.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if a set with this name is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// Set names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Names of every set containing `code`.
    pub fn sets_containing<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.order
            .iter()
            .filter(move |name| self.members(name).iter().any(|c| c.as_str() == code))
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
