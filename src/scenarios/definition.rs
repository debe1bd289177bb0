//! Scenario definitions.
//!
//! A scenario names its quest chain, the encounter sets merged into its
//! encounter deck, one-off setup cards, and at most one held-out card.
//!
//! ## Held-out Card
//!
//! Some scenarios keep one encounter card out of the shuffled deck and put it
//! into play by another path (Escape from Dol Guldur holds out the Nazgûl).
//! The held-out code is filtered from the composition here so the caller
//! never sees it twice; `held_out_card` is the only way to reach it.

use serde::{Deserialize, Serialize};

use crate::cards::{expand_into, CardInstance, EncounterCard, InstanceAllocator, SetRegistry};
use crate::core::{CardCode, SetId};

/// Printed difficulty band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// A playable scenario.
///
/// ## Example
///
/// ```
/// use lcg_catalog::scenarios::{Difficulty, ScenarioDefinition};
///
/// let scenario = ScenarioDefinition::new("escape", "Escape from Dol Guldur", "01")
///     .with_number(3)
///     .with_difficulty(Difficulty::Hard)
///     .with_quest_stages(["01126A", "01127A", "01128A"])
///     .with_encounter_sets(["escape-from-dol-guldur", "spiders-of-mirkwood"])
///     .with_held_out("01102");
///
/// assert_eq!(scenario.held_out_code().unwrap().as_str(), "01102");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    pub id: String,
    pub name: String,
    pub set: SetId,
    /// Position within its set's scenario list.
    pub number: u32,
    pub difficulty: Difficulty,
    quest_codes: Vec<CardCode>,
    encounter_sets: Vec<String>,
    setup_codes: Vec<CardCode>,
    held_out: Option<CardCode>,
}

impl ScenarioDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, set: impl Into<SetId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            set: set.into(),
            number: 0,
            difficulty: Difficulty::default(),
            quest_codes: Vec::new(),
            encounter_sets: Vec::new(),
            setup_codes: Vec::new(),
            held_out: None,
        }
    }

    #[must_use]
    pub fn with_number(mut self, number: u32) -> Self {
        self.number = number;
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Quest stages in chain order. Branching stages are listed side by side.
    #[must_use]
    pub fn with_quest_stages<C: Into<CardCode>>(mut self, codes: impl IntoIterator<Item = C>) -> Self {
        self.quest_codes.extend(codes.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_encounter_sets<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.encounter_sets.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_setup_cards<C: Into<CardCode>>(mut self, codes: impl IntoIterator<Item = C>) -> Self {
        self.setup_codes.extend(codes.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_held_out(mut self, code: impl Into<CardCode>) -> Self {
        self.held_out = Some(code.into());
        self
    }

    #[must_use]
    pub fn quest_codes(&self) -> &[CardCode] {
        &self.quest_codes
    }

    #[must_use]
    pub fn encounter_set_names(&self) -> &[String] {
        &self.encounter_sets
    }

    #[must_use]
    pub fn setup_codes(&self) -> &[CardCode] {
        &self.setup_codes
    }

    #[must_use]
    pub fn held_out_code(&self) -> Option<&CardCode> {
        self.held_out.as_ref()
    }

    fn is_held_out(&self, card: &EncounterCard) -> bool {
        self.held_out.as_ref() == Some(&card.base.code)
    }

    /// Quest stages, one instance per code. Never quantity-expanded.
    pub fn get_quest_deck(
        &self,
        registry: &SetRegistry,
        ids: &mut InstanceAllocator,
    ) -> Vec<CardInstance<EncounterCard>> {
        self.quest_codes
            .iter()
            .filter_map(|code| match registry.find_quest_card(code.as_str()) {
                Some(stage) => Some(CardInstance::from_template(stage, ids.alloc())),
                None => {
                    tracing::warn!(scenario = %self.id, code = %code, "Skipping unresolved quest stage");
                    None
                }
            })
            .collect()
    }

    /// Encounter-deck composition: the configured sets concatenated in
    /// order, unexpanded, held-out card removed.
    ///
    /// Unknown set names contribute nothing. Duplicates across sets are kept.
    #[must_use]
    pub fn get_encounter_deck_cards<'a>(&self, registry: &'a SetRegistry) -> Vec<&'a EncounterCard> {
        let mut cards = Vec::new();
        for name in &self.encounter_sets {
            let members = registry.get_encounter_set(name);
            if members.is_empty() && !registry.has_encounter_set(name) {
                tracing::warn!(scenario = %self.id, set = %name, "Unknown encounter set");
            }
            cards.extend(members.into_iter().filter(|card| !self.is_held_out(card)));
        }
        cards
    }

    /// The encounter deck with every template expanded to `quantity`
    /// independent copies. Unshuffled.
    pub fn build_encounter_deck(
        &self,
        registry: &SetRegistry,
        ids: &mut InstanceAllocator,
    ) -> Vec<CardInstance<EncounterCard>> {
        let mut deck = Vec::new();
        for template in self.get_encounter_deck_cards(registry) {
            expand_into(template, template.base.copies(), ids, &mut deck);
        }
        deck
    }

    /// Setup cards, one instance per code. Never quantity-expanded.
    ///
    /// The held-out card is skipped even when listed here; it is only
    /// reachable through `held_out_card`.
    pub fn get_setup_cards(
        &self,
        registry: &SetRegistry,
        ids: &mut InstanceAllocator,
    ) -> Vec<CardInstance<EncounterCard>> {
        self.setup_codes
            .iter()
            .filter(|code| {
                let held_out = self.held_out.as_ref() == Some(*code);
                if held_out {
                    tracing::warn!(scenario = %self.id, code = %code, "Skipping held-out setup card");
                }
                !held_out
            })
            .filter_map(|code| match registry.find_encounter_card(code.as_str()) {
                Some(card) => Some(CardInstance::from_template(card, ids.alloc())),
                None => {
                    tracing::warn!(scenario = %self.id, code = %code, "Skipping unresolved setup card");
                    None
                }
            })
            .collect()
    }

    /// The held-out card template, if the scenario has one and it resolves.
    #[must_use]
    pub fn held_out_card<'a>(&self, registry: &'a SetRegistry) -> Option<&'a EncounterCard> {
        let code = self.held_out.as_ref()?;
        registry.find_encounter_card(code.as_str())
    }

    /// Configured card codes that do not resolve in their expected family.
    #[must_use]
    pub fn unresolved_codes(&self, registry: &SetRegistry) -> Vec<CardCode> {
        let quests = self
            .quest_codes
            .iter()
            .filter(|code| registry.find_quest_card(code.as_str()).is_none());
        let others = self
            .setup_codes
            .iter()
            .chain(self.held_out.iter())
            .filter(|code| registry.find_encounter_card(code.as_str()).is_none());
        quests.chain(others).cloned().collect()
    }

    /// Configured encounter-set names no loaded store defines.
    #[must_use]
    pub fn unknown_encounter_sets(&self, registry: &SetRegistry) -> Vec<&str> {
        self.encounter_sets
            .iter()
            .filter(|name| !registry.has_encounter_set(name))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardStore, CardTemplate, CardType, SetInfo};

    fn registry() -> SetRegistry {
        let mut store = CardStore::new(SetInfo::new("01", "Core Set"));
        store
            .register_all([
                EncounterCard::quest("01126A", "The Necromancer's Tower", 1, 9),
                EncounterCard::quest("01127A", "Through the Caverns", 2, 15),
            ])
            .unwrap();
        store
            .register_encounter_set(
                "escape",
                vec![
                    EncounterCard::enemy("01101", "Dungeon Jailor", 38, 2, 5, 3, 5),
                    EncounterCard::enemy("01102", "Nazgûl of Dol Guldur", 0, 5, 4, 3, 9),
                    EncounterCard::location("01105", "Endless Caverns", 1, 3).with_quantity(2),
                    EncounterCard::new("01108", "Gandalf's Map", CardType::Objective),
                ],
            )
            .unwrap();
        store
            .register_encounter_set(
                "spiders",
                vec![EncounterCard::enemy("01074", "King Spider", 20, 2, 3, 1, 3).with_quantity(2)],
            )
            .unwrap();

        let mut registry = SetRegistry::new();
        registry.load(store).unwrap();
        registry
    }

    fn escape() -> ScenarioDefinition {
        ScenarioDefinition::new("escape", "Escape", "01")
            .with_difficulty(Difficulty::Hard)
            .with_quest_stages(["01126A", "01127A"])
            .with_encounter_sets(["escape", "spiders"])
            .with_setup_cards(["01108"])
            .with_held_out("01102")
    }

    fn codes<T: CardTemplate>(cards: &[CardInstance<T>]) -> Vec<&str> {
        cards.iter().map(|c| c.code().as_str()).collect()
    }

    #[test]
    fn test_quest_deck_is_not_expanded() {
        let registry = registry();
        let mut ids = InstanceAllocator::new();
        let quests = escape().get_quest_deck(&registry, &mut ids);
        assert_eq!(codes(&quests), vec!["01126A", "01127A"]);
    }

    #[test]
    fn test_composition_excludes_held_out() {
        let registry = registry();
        let cards = escape().get_encounter_deck_cards(&registry);
        let codes: Vec<_> = cards.iter().map(|c| c.code().as_str()).collect();
        assert_eq!(codes, vec!["01101", "01105", "01108", "01074"]);
    }

    #[test]
    fn test_encounter_deck_expands_quantities() {
        let registry = registry();
        let mut ids = InstanceAllocator::new();
        let deck = escape().build_encounter_deck(&registry, &mut ids);
        assert_eq!(
            codes(&deck),
            vec!["01101", "01105", "01105", "01108", "01074", "01074"]
        );
        assert!(deck.iter().all(|c| c.code().as_str() != "01102"));
    }

    #[test]
    fn test_held_out_accessor() {
        let registry = registry();
        let nazgul = escape().held_out_card(&registry).unwrap();
        assert_eq!(nazgul.name(), "Nazgûl of Dol Guldur");

        let plain = ScenarioDefinition::new("plain", "Plain", "01");
        assert!(plain.held_out_card(&registry).is_none());
    }

    #[test]
    fn test_setup_cards_resolve_once() {
        let registry = registry();
        let mut ids = InstanceAllocator::new();
        let setup = escape().get_setup_cards(&registry, &mut ids);
        assert_eq!(codes(&setup), vec!["01108"]);
    }

    #[test]
    fn test_held_out_is_not_a_setup_card() {
        let registry = registry();
        let scenario = escape().with_setup_cards(["01102"]);
        let mut ids = InstanceAllocator::new();

        let setup = scenario.get_setup_cards(&registry, &mut ids);
        assert_eq!(codes(&setup), vec!["01108"]);
        assert_eq!(ids.allocated(), 1);
        assert!(scenario.held_out_card(&registry).is_some());
    }

    #[test]
    fn test_unknown_set_contributes_nothing() {
        let registry = registry();
        let scenario = ScenarioDefinition::new("odd", "Odd", "01")
            .with_encounter_sets(["spiders", "no-such-set", "spiders"]);

        let cards = scenario.get_encounter_deck_cards(&registry);
        assert_eq!(cards.len(), 2); // no dedup across repeated sets
        assert_eq!(scenario.unknown_encounter_sets(&registry), vec!["no-such-set"]);
    }

    #[test]
    fn test_unresolved_codes_by_family() {
        let registry = registry();
        let scenario = ScenarioDefinition::new("broken", "Broken", "01")
            .with_quest_stages(["01126A", "01101"])
            .with_setup_cards(["01126A", "01999"])
            .with_held_out("01102");

        assert_eq!(
            scenario.unresolved_codes(&registry),
            vec![CardCode::new("01101"), CardCode::new("01999")]
        );
    }
}
