//! Set registry: unified lookup across loaded card stores.
//!
//! The `SetRegistry` owns one `CardStore` per loaded expansion set and routes
//! each lookup by the code's set prefix. There is no scan over all stores:
//! a code whose set is not loaded simply resolves to nothing.

use rustc_hash::FxHashMap;

use super::definition::{CardRef, EncounterCard, PlayerCard};
use super::store::{CardStore, SetInfo};
use crate::core::{CatalogError, Result, SetId, SET_ID_WIDTH};

/// Registry of loaded card stores.
///
/// ## Example
///
/// ```
/// use lcg_catalog::cards::{CardStore, CardType, PlayerCard, SetInfo, SetRegistry};
///
/// let mut store = CardStore::new(SetInfo::new("01", "Core Set"));
/// store.register(PlayerCard::new("01073", "Gandalf", CardType::Ally)).unwrap();
///
/// let mut registry = SetRegistry::new();
/// registry.load(store).unwrap();
///
/// assert_eq!(registry.find_card("01073").unwrap().name(), "Gandalf");
/// assert!(registry.find_card("02001").is_none()); // set 02 not loaded
/// ```
#[derive(Clone, Debug, Default)]
pub struct SetRegistry {
    stores: FxHashMap<SetId, CardStore>,
    /// Set ids in load order.
    load_order: Vec<SetId>,
}

impl SetRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store. Fails if its set is already loaded.
    pub fn load(&mut self, store: CardStore) -> Result<()> {
        let id = store.set_id().clone();
        if self.stores.contains_key(&id) {
            return Err(CatalogError::DuplicateSet(id));
        }
        tracing::debug!(set = %id, cards = store.len(), "Load card store");
        self.load_order.push(id.clone());
        self.stores.insert(id, store);
        Ok(())
    }

    /// The store owning `code`, by prefix.
    fn owner(&self, code: &str) -> Option<&CardStore> {
        let prefix = code.get(..SET_ID_WIDTH)?;
        self.stores.get(prefix)
    }

    /// Find any card by code.
    #[must_use]
    pub fn find_card(&self, code: &str) -> Option<CardRef<'_>> {
        self.owner(code)?.lookup(code)
    }

    /// Find several cards, preserving input order.
    ///
    /// Codes that resolve to nothing are dropped; compare lengths to detect
    /// gaps.
    pub fn find_cards<S: AsRef<str>>(&self, codes: impl IntoIterator<Item = S>) -> Vec<CardRef<'_>> {
        codes
            .into_iter()
            .filter_map(|code| self.find_card(code.as_ref()))
            .collect()
    }

    /// Find a player card by code.
    #[must_use]
    pub fn find_player_card(&self, code: &str) -> Option<&PlayerCard> {
        self.owner(code)?.player_card(code)
    }

    /// Find an encounter-family card (quest stages included) by code.
    #[must_use]
    pub fn find_encounter_card(&self, code: &str) -> Option<&EncounterCard> {
        self.owner(code)?.encounter_card(code)
    }

    /// Find a quest stage by code.
    #[must_use]
    pub fn find_quest_card(&self, code: &str) -> Option<&EncounterCard> {
        self.owner(code)?.quest_card(code)
    }

    /// Templates of a named encounter set.
    ///
    /// Searches loaded stores in load order and returns the first store's
    /// definition. Empty for an unknown name.
    #[must_use]
    pub fn get_encounter_set(&self, name: &str) -> Vec<&EncounterCard> {
        self.stores()
            .find(|store| store.encounter_sets().contains(name))
            .map(|store| store.encounter_set(name))
            .unwrap_or_default()
    }

    /// Templates of a named encounter set in one specific set.
    #[must_use]
    pub fn encounter_set_in(&self, set: &str, name: &str) -> Vec<&EncounterCard> {
        self.stores
            .get(set)
            .map(|store| store.encounter_set(name))
            .unwrap_or_default()
    }

    /// Check if any loaded store defines an encounter set with this name.
    #[must_use]
    pub fn has_encounter_set(&self, name: &str) -> bool {
        self.stores().any(|store| store.encounter_sets().contains(name))
    }

    #[must_use]
    pub fn is_set_loaded(&self, set: &str) -> bool {
        self.stores.contains_key(set)
    }

    #[must_use]
    pub fn set_info(&self, set: &str) -> Option<&SetInfo> {
        self.stores.get(set).map(CardStore::info)
    }

    #[must_use]
    pub fn store(&self, set: &str) -> Option<&CardStore> {
        self.stores.get(set)
    }

    /// Loaded stores in load order.
    pub fn stores(&self) -> impl Iterator<Item = &CardStore> {
        self.load_order.iter().filter_map(|id| self.stores.get(id))
    }

    /// Total number of templates across all stores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.values().map(CardStore::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every template in every store.
    pub fn iter(&self) -> impl Iterator<Item = CardRef<'_>> {
        self.stores().flat_map(|store| {
            store
                .codes()
                .filter_map(move |code| store.lookup(code.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::definition::CardType;

    fn registry() -> SetRegistry {
        let mut core = CardStore::new(SetInfo::new("01", "Core Set"));
        core.register(PlayerCard::new("01001", "Aragorn", CardType::Hero)).unwrap();
        core.register_encounter_set(
            "orcs",
            vec![EncounterCard::enemy("01089", "Dol Guldur Orcs", 10, 2, 2, 0, 3)],
        )
        .unwrap();

        let mut hunt = CardStore::new(SetInfo::new("02", "The Hunt for Gollum"));
        hunt.register(PlayerCard::new("02001", "Bilbo Baggins", CardType::Hero))
            .unwrap();
        hunt.register_encounter_set(
            "orcs",
            vec![EncounterCard::enemy("02050", "Hunters from Mordor", 34, 2, 6, 3, 6)],
        )
        .unwrap();

        let mut registry = SetRegistry::new();
        registry.load(core).unwrap();
        registry.load(hunt).unwrap();
        registry
    }

    #[test]
    fn test_find_card_routes_by_prefix() {
        let registry = registry();
        assert_eq!(registry.find_card("01001").unwrap().name(), "Aragorn");
        assert_eq!(registry.find_card("02001").unwrap().name(), "Bilbo Baggins");
    }

    #[test]
    fn test_unloaded_set_resolves_to_none() {
        let registry = registry();
        assert!(registry.find_card("03001").is_none());
        assert!(registry.find_card("1").is_none());
        assert!(!registry.is_set_loaded("03"));
    }

    #[test]
    fn test_find_cards_preserves_order_and_drops_missing() {
        let registry = registry();
        let found = registry.find_cards(["02001", "09999", "01089", "01001"]);
        let codes: Vec<_> = found.iter().map(|c| c.code().as_str()).collect();
        assert_eq!(codes, vec!["02001", "01089", "01001"]);
    }

    #[test]
    fn test_typed_lookups() {
        let registry = registry();
        assert!(registry.find_player_card("01001").is_some());
        assert!(registry.find_player_card("01089").is_none());
        assert!(registry.find_encounter_card("01089").is_some());
        assert!(registry.find_quest_card("01089").is_none());
    }

    #[test]
    fn test_encounter_set_first_loaded_store_wins() {
        let registry = registry();
        let orcs = registry.get_encounter_set("orcs");
        assert_eq!(orcs.len(), 1);
        assert_eq!(orcs[0].base.code.as_str(), "01089");

        let hunt_orcs = registry.encounter_set_in("02", "orcs");
        assert_eq!(hunt_orcs[0].base.code.as_str(), "02050");

        assert!(registry.get_encounter_set("missing").is_empty());
        assert!(registry.encounter_set_in("07", "orcs").is_empty());
    }

    #[test]
    fn test_duplicate_set_rejected() {
        let mut registry = registry();
        let err = registry
            .load(CardStore::new(SetInfo::new("01", "Core Set again")))
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSet(SetId::new("01")));
    }

    #[test]
    fn test_iteration_and_counts() {
        let registry = registry();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.iter().count(), 4);
        assert_eq!(
            registry.stores().map(|s| s.info().name.as_str()).collect::<Vec<_>>(),
            vec!["Core Set", "The Hunt for Gollum"]
        );
        assert_eq!(registry.set_info("02").unwrap().name, "The Hunt for Gollum");
    }
}
