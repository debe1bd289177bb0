//! Starter decks built from the Core Set.

use super::deck_ids::{CORE_SPIRIT_LORE, CORE_STARTER};
use super::CORE_SET;
use crate::core::Result;
use crate::decks::{DeckDefinition, DeckEntry, DeckRegistry};

fn entries(list: &[(&str, u32)]) -> Vec<DeckEntry> {
    list.iter().map(|&(code, quantity)| DeckEntry::new(code, quantity)).collect()
}

/// Aragorn, Legolas and Gimli with a mixed four-sphere deck.
pub fn core_starter() -> Result<DeckDefinition> {
    DeckDefinition::new(
        CORE_STARTER,
        "Core Set Starter",
        CORE_SET,
        ["01001", "01005", "01004"],
        entries(&[
            // Leadership
            ("01026", 2), // Steward of Gondor
            ("01027", 1), // Celebrían's Stone
            ("01023", 2), // Sneak Attack
            ("01014", 2), // Faramir
            ("01016", 3), // Snowbourn Scout
            // Tactics
            ("01039", 2), // Blade of Gondolin
            ("01037", 2), // Swift Strike
            ("01034", 2), // Feint
            ("01028", 3), // Veteran Axehand
            ("01029", 3), // Gondorian Spearman
            ("01041", 2), // Dwarven Axe
            // Spirit
            ("01050", 2), // A Test of Will
            ("01048", 2), // Hasty Stroke
            ("01057", 1), // Unexpected Courage
            // Lore
            ("01063", 2), // Lore of Imladris
            ("01066", 2), // Secret Paths
            ("01069", 2), // Forest Snare
            ("01062", 2), // Gléowine
            // Neutral
            ("01073", 3), // Gandalf
        ]),
    )
}

/// Éowyn, Eleanor and Denethor: questing and card control.
pub fn core_spirit_lore() -> Result<DeckDefinition> {
    DeckDefinition::new(
        CORE_SPIRIT_LORE,
        "Core Set Spirit/Lore",
        CORE_SET,
        ["01007", "01008", "01010"],
        entries(&[
            ("01043", 3),
            ("01044", 3),
            ("01045", 2),
            ("01047", 2),
            ("01050", 2),
            ("01048", 2),
            ("01052", 2),
            ("01055", 2),
            ("01057", 1),
            ("01058", 3),
            ("01059", 2),
            ("01061", 2),
            ("01062", 2),
            ("01064", 3),
            ("01066", 2),
            ("01069", 2),
            ("01072", 2),
            ("01073", 3),
        ]),
    )
}

/// Every bundled deck, registered in order.
pub fn starter_decks() -> Result<DeckRegistry> {
    let mut decks = DeckRegistry::new();
    decks.register(core_starter()?)?;
    decks.register(core_spirit_lore()?)?;
    Ok(decks)
}
