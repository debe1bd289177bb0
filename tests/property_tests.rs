//! Property tests for lookup and expansion.

use proptest::prelude::*;

use lcg_catalog::cards::{CardFamily, InstanceAllocator};
use lcg_catalog::data::encounter_sets::*;
use lcg_catalog::{Catalog, DeckDefinition, DeckEntry, ScenarioDefinition};

const SET_NAMES: [&str; 7] = [
    SPIDERS_OF_MIRKWOOD,
    WILDERLANDS,
    DOL_GULDUR_ORCS,
    PASSAGE_THROUGH_MIRKWOOD,
    ESCAPE_FROM_DOL_GULDUR,
    JOURNEY_DOWN_THE_ANDUIN,
    SAURONS_REACH,
];

fn player_codes(catalog: &Catalog) -> Vec<String> {
    let mut codes: Vec<_> = catalog
        .sets()
        .store("01")
        .unwrap()
        .iter_family(CardFamily::Player)
        .map(|c| c.code().to_string())
        .collect();
    codes.sort();
    codes
}

proptest! {
    /// Lookup never panics, and a hit always carries the requested code.
    #[test]
    fn prop_find_card_is_exact(code in "\\PC{0,8}") {
        let catalog = Catalog::core_set().unwrap();
        if let Some(card) = catalog.find_card(&code) {
            prop_assert_eq!(card.code().as_str(), code.as_str());
        }
    }

    /// A deck expands to the sum of its quantities, in entry order, with
    /// sequential ids.
    #[test]
    fn prop_deck_expansion(
        picks in proptest::sample::subsequence((0usize..73).collect::<Vec<_>>(), 1..20),
        quantities in proptest::collection::vec(1u32..4, 20),
    ) {
        let catalog = Catalog::core_set().unwrap();
        let codes = player_codes(&catalog);

        let entries: Vec<_> = picks
            .iter()
            .zip(&quantities)
            .map(|(&i, &q)| DeckEntry::new(codes[i].as_str(), q))
            .collect();
        let deck = DeckDefinition::new("prop", "Prop", "01", ["01001"], entries.clone()).unwrap();

        let mut ids = InstanceAllocator::new();
        let cards = deck.build_deck(catalog.sets(), &mut ids);

        prop_assert_eq!(cards.len() as u32, deck.size());
        prop_assert_eq!(ids.allocated(), deck.size());

        let expected: Vec<_> = entries
            .iter()
            .flat_map(|e| std::iter::repeat(e.code.clone()).take(e.quantity as usize))
            .collect();
        let actual: Vec<_> = cards.iter().map(|c| c.code().clone()).collect();
        prop_assert_eq!(actual, expected);

        for (i, card) in cards.iter().enumerate() {
            prop_assert_eq!(card.instance_id.raw(), i as u32);
        }
    }

    /// Any ordered choice of encounter sets composes by concatenation.
    #[test]
    fn prop_encounter_composition(names in proptest::collection::vec(proptest::sample::select(SET_NAMES.to_vec()), 0..5)) {
        let catalog = Catalog::core_set().unwrap();
        let scenario = ScenarioDefinition::new("prop", "Prop", "01").with_encounter_sets(names.clone());

        let composed = scenario.get_encounter_deck_cards(catalog.sets());
        let expected: usize = names.iter().map(|n| catalog.get_encounter_set(n).len()).sum();
        prop_assert_eq!(composed.len(), expected);

        let deck = scenario.build_encounter_deck(catalog.sets(), &mut InstanceAllocator::new());
        let copies: u32 = composed.iter().map(|c| c.base.copies()).sum();
        prop_assert_eq!(deck.len() as u32, copies);
    }
}
