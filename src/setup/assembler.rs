//! Game-setup assembly.
//!
//! `Catalog` is the read-only bundle of everything a session needs to start:
//! loaded card stores, deck definitions, scenario definitions, and the
//! assembly policy. It is built once and shared; `build_game_setup` hands
//! out a fresh `GameSetup` per call.

use serde::{Deserialize, Serialize};

use super::validation::{validate_content, ContentIssue};
use crate::cards::{
    CardInstance, CardRef, EncounterCard, InstanceAllocator, PlayerCard, SetRegistry,
};
use crate::core::{CatalogConfig, CatalogError, Result};
use crate::data;
use crate::decks::{DeckDefinition, DeckRegistry};
use crate::scenarios::{ScenarioDefinition, ScenarioRegistry};

/// Everything needed to start one game, unshuffled.
///
/// Owns every card it holds; nothing points back into the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    pub heroes: Vec<CardInstance<PlayerCard>>,
    pub player_deck: Vec<CardInstance<PlayerCard>>,
    pub quest_deck: Vec<CardInstance<EncounterCard>>,
    pub encounter_deck: Vec<CardInstance<EncounterCard>>,
    pub setup_cards: Vec<CardInstance<EncounterCard>>,
    /// Allocator positioned after the last id handed out.
    ids: InstanceAllocator,
}

impl GameSetup {
    /// Allocator for instances the caller creates later (e.g. the held-out
    /// card), continuing after this setup's ids.
    pub fn ids_mut(&mut self) -> &mut InstanceAllocator {
        &mut self.ids
    }

    /// Total instances across every list.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.heroes.len()
            + self.player_deck.len()
            + self.quest_deck.len()
            + self.encounter_deck.len()
            + self.setup_cards.len()
    }
}

/// The card catalog and assembly entry point.
///
/// ## Example
///
/// ```
/// use lcg_catalog::Catalog;
///
/// let catalog = Catalog::core_set().unwrap();
/// let setup = catalog
///     .build_game_setup("core-starter", "passage-through-mirkwood")
///     .unwrap();
///
/// assert_eq!(setup.heroes.len(), 3);
/// assert_eq!(setup.player_deck.len(), 40);
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    sets: SetRegistry,
    decks: DeckRegistry,
    scenarios: ScenarioRegistry,
    config: CatalogConfig,
}

impl Catalog {
    /// Assemble a catalog from its parts, with the default configuration.
    pub fn new(sets: SetRegistry, decks: DeckRegistry, scenarios: ScenarioRegistry) -> Self {
        tracing::info!(
            sets = sets.stores().count(),
            cards = sets.len(),
            decks = decks.len(),
            scenarios = scenarios.len(),
            "Catalog assembled"
        );
        Self {
            sets,
            decks,
            scenarios,
            config: CatalogConfig::default(),
        }
    }

    /// Replace the assembly policy.
    #[must_use]
    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// The bundled Core Set catalog.
    pub fn core_set() -> Result<Self> {
        let mut sets = SetRegistry::new();
        sets.load(data::core_set_store()?)?;
        Ok(Self::new(sets, data::starter_decks()?, data::core_scenarios()?))
    }

    #[must_use]
    pub fn sets(&self) -> &SetRegistry {
        &self.sets
    }

    #[must_use]
    pub fn decks(&self) -> &DeckRegistry {
        &self.decks
    }

    #[must_use]
    pub fn scenarios(&self) -> &ScenarioRegistry {
        &self.scenarios
    }

    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Find any card template by code.
    #[must_use]
    pub fn find_card(&self, code: &str) -> Option<CardRef<'_>> {
        self.sets.find_card(code)
    }

    /// Find several templates, preserving order and dropping misses.
    pub fn find_cards<S: AsRef<str>>(&self, codes: impl IntoIterator<Item = S>) -> Vec<CardRef<'_>> {
        self.sets.find_cards(codes)
    }

    /// Templates of a named encounter set. Empty for an unknown name.
    #[must_use]
    pub fn get_encounter_set(&self, name: &str) -> Vec<&EncounterCard> {
        self.sets.get_encounter_set(name)
    }

    pub fn get_deck(&self, id: &str) -> Result<&DeckDefinition> {
        self.decks
            .get(id)
            .ok_or_else(|| CatalogError::DeckNotFound(id.to_string()))
    }

    pub fn get_scenario(&self, id: &str) -> Result<&ScenarioDefinition> {
        self.scenarios
            .get(id)
            .ok_or_else(|| CatalogError::ScenarioNotFound(id.to_string()))
    }

    /// The held-out card of a scenario, if it has one.
    pub fn held_out_card(&self, scenario_id: &str) -> Result<Option<&EncounterCard>> {
        Ok(self.get_scenario(scenario_id)?.held_out_card(&self.sets))
    }

    /// Build everything needed to start a game.
    ///
    /// Lists are produced in a fixed order (heroes, player deck, quest
    /// deck, encounter deck, setup cards) with instance ids allocated
    /// sequentially from 0, so the same inputs always give equal setups.
    /// Nothing is shuffled.
    ///
    /// ## Errors
    ///
    /// - `DeckNotFound` / `ScenarioNotFound` for unknown ids
    /// - `UnresolvedHero` if a hero code does not resolve
    /// - `UnknownEncounterSet` / `UnresolvedCard` under strict configuration
    pub fn build_game_setup(&self, deck_id: &str, scenario_id: &str) -> Result<GameSetup> {
        let deck = self.get_deck(deck_id)?;
        let scenario = self.get_scenario(scenario_id)?;

        let mut ids = InstanceAllocator::new();
        let heroes = deck.get_heroes(&self.sets, &mut ids)?;
        self.check_strict(deck, scenario)?;

        let player_deck = deck.build_deck(&self.sets, &mut ids);
        let quest_deck = scenario.get_quest_deck(&self.sets, &mut ids);
        let encounter_deck = scenario.build_encounter_deck(&self.sets, &mut ids);
        let setup_cards = scenario.get_setup_cards(&self.sets, &mut ids);

        tracing::debug!(
            deck = deck_id,
            scenario = scenario_id,
            player_deck = player_deck.len(),
            encounter_deck = encounter_deck.len(),
            quest_deck = quest_deck.len(),
            setup_cards = setup_cards.len(),
            "Built game setup"
        );

        Ok(GameSetup {
            heroes,
            player_deck,
            quest_deck,
            encounter_deck,
            setup_cards,
            ids,
        })
    }

    /// Build the default pairing: the Core Set starter deck against
    /// Passage Through Mirkwood.
    pub fn build_default_game_setup(&self) -> Result<GameSetup> {
        self.build_game_setup(data::DEFAULT_DECK, data::DEFAULT_SCENARIO)
    }

    fn check_strict(&self, deck: &DeckDefinition, scenario: &ScenarioDefinition) -> Result<()> {
        if self.config.strict_encounter_sets {
            if let Some(name) = scenario.unknown_encounter_sets(&self.sets).first() {
                return Err(CatalogError::UnknownEncounterSet {
                    scenario: scenario.id.clone(),
                    name: (*name).to_string(),
                });
            }
        }
        if self.config.strict_card_refs {
            if let Some(code) = deck.unresolved_codes(&self.sets).into_iter().next() {
                return Err(CatalogError::UnresolvedCard {
                    owner: format!("deck '{}'", deck.id),
                    code,
                });
            }
            if let Some(code) = scenario.unresolved_codes(&self.sets).into_iter().next() {
                return Err(CatalogError::UnresolvedCard {
                    owner: format!("scenario '{}'", scenario.id),
                    code,
                });
            }
        }
        Ok(())
    }

    /// Report every dangling reference in the loaded decks and scenarios.
    #[must_use]
    pub fn validate(&self) -> Vec<ContentIssue> {
        validate_content(&self.sets, &self.decks, &self.scenarios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardStore, CardType, SetInfo};
    use crate::decks::DeckEntry;

    fn small_catalog() -> Catalog {
        let mut store = CardStore::new(SetInfo::new("01", "Core Set"));
        store
            .register_all([
                PlayerCard::new("01001", "Aragorn", CardType::Hero),
                PlayerCard::new("01073", "Gandalf", CardType::Ally),
            ])
            .unwrap();
        store
            .register(EncounterCard::quest("01119A", "Flies and Spiders", 1, 8))
            .unwrap();
        store
            .register_encounter_set(
                "spiders",
                vec![EncounterCard::enemy("01074", "King Spider", 20, 2, 3, 1, 3).with_quantity(2)],
            )
            .unwrap();
        let mut sets = SetRegistry::new();
        sets.load(store).unwrap();

        let mut decks = DeckRegistry::new();
        decks
            .register(
                DeckDefinition::new(
                    "mini",
                    "Mini",
                    "01",
                    ["01001"],
                    [DeckEntry::new("01073", 2), DeckEntry::new("01998", 1)],
                )
                .unwrap(),
            )
            .unwrap();

        let mut scenarios = ScenarioRegistry::new();
        scenarios
            .register(
                ScenarioDefinition::new("web", "Web", "01")
                    .with_quest_stages(["01119A"])
                    .with_encounter_sets(["spiders", "bats"])
                    .with_setup_cards(["01074"]),
            )
            .unwrap();

        Catalog::new(sets, decks, scenarios)
    }

    #[test]
    fn test_lenient_build() {
        let catalog = small_catalog();
        let setup = catalog.build_game_setup("mini", "web").unwrap();

        assert_eq!(setup.heroes.len(), 1);
        assert_eq!(setup.player_deck.len(), 2); // 01998 dropped
        assert_eq!(setup.quest_deck.len(), 1);
        assert_eq!(setup.encounter_deck.len(), 2); // "bats" contributes nothing
        assert_eq!(setup.setup_cards.len(), 1);
        assert_eq!(setup.card_count(), 7);
    }

    #[test]
    fn test_ids_follow_fixed_order() {
        let catalog = small_catalog();
        let mut setup = catalog.build_game_setup("mini", "web").unwrap();

        assert_eq!(setup.heroes[0].instance_id.raw(), 0);
        assert_eq!(setup.player_deck[0].instance_id.raw(), 1);
        assert_eq!(setup.quest_deck[0].instance_id.raw(), 3);
        assert_eq!(setup.encounter_deck[0].instance_id.raw(), 4);
        assert_eq!(setup.setup_cards[0].instance_id.raw(), 6);
        assert_eq!(setup.ids_mut().alloc().raw(), 7);
    }

    #[test]
    fn test_not_found() {
        let catalog = small_catalog();
        let err = catalog.build_game_setup("missing", "web").unwrap_err();
        assert_eq!(err, CatalogError::DeckNotFound("missing".to_string()));

        let err = catalog.build_game_setup("mini", "missing").unwrap_err();
        assert_eq!(err, CatalogError::ScenarioNotFound("missing".to_string()));
    }

    #[test]
    fn test_strict_encounter_sets() {
        let catalog = small_catalog().with_config(CatalogConfig::new().strict_encounter_sets());
        let err = catalog.build_game_setup("mini", "web").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownEncounterSet {
                scenario: "web".to_string(),
                name: "bats".to_string(),
            }
        );
    }

    #[test]
    fn test_strict_card_refs() {
        let catalog = small_catalog().with_config(CatalogConfig::new().strict_card_refs());
        let err = catalog.build_game_setup("mini", "web").unwrap_err();
        assert!(matches!(err, CatalogError::UnresolvedCard { .. }));
        assert!(err.to_string().contains("01998"));
    }

    #[test]
    fn test_validate_reports_gaps() {
        let catalog = small_catalog();
        let issues = catalog.validate();
        let missing: Vec<_> = issues.iter().map(|i| i.missing_id.as_str()).collect();
        assert_eq!(missing, vec!["01998", "bats"]);
    }
}
