//! Core Set (set "01") card data.

use super::encounter_sets::*;
use crate::cards::{CardStore, CardType, EncounterCard, PlayerCard, SetInfo, Sphere};
use crate::core::Result;

fn hero(code: &str, name: &str, sphere: Sphere, threat: u8, stats: [u8; 4], traits: &str) -> PlayerCard {
    let [w, a, d, h] = stats;
    PlayerCard::new(code, name, CardType::Hero)
        .with_sphere(sphere)
        .with_threat(threat)
        .with_stats(w, a, d, h)
        .with_traits(traits)
        .unique()
}

fn ally(code: &str, name: &str, sphere: Sphere, cost: u8, stats: [u8; 4]) -> PlayerCard {
    let [w, a, d, h] = stats;
    PlayerCard::new(code, name, CardType::Ally)
        .with_sphere(sphere)
        .with_cost(cost)
        .with_stats(w, a, d, h)
        .with_quantity(3)
}

fn event(code: &str, name: &str, sphere: Sphere, cost: u8) -> PlayerCard {
    PlayerCard::new(code, name, CardType::Event)
        .with_sphere(sphere)
        .with_cost(cost)
        .with_quantity(3)
}

fn attachment(code: &str, name: &str, sphere: Sphere, cost: u8) -> PlayerCard {
    PlayerCard::new(code, name, CardType::Attachment)
        .with_sphere(sphere)
        .with_cost(cost)
        .with_quantity(3)
}

fn treachery(code: &str, name: &str) -> EncounterCard {
    EncounterCard::new(code, name, CardType::Treachery)
}

fn objective(code: &str, name: &str) -> EncounterCard {
    EncounterCard::new(code, name, CardType::Objective)
}

fn player_cards() -> Vec<PlayerCard> {
    use Sphere::*;

    vec![
        hero("01001", "Aragorn", Leadership, 12, [2, 3, 2, 5], "Dúnedain. Noble. Ranger."),
        hero("01002", "Théodred", Leadership, 8, [1, 2, 1, 4], "Noble. Rohan. Warrior."),
        hero("01003", "Glóin", Leadership, 9, [2, 2, 1, 4], "Dwarf. Noble."),
        hero("01004", "Gimli", Tactics, 11, [2, 2, 2, 5], "Dwarf. Noble. Warrior."),
        hero("01005", "Legolas", Tactics, 9, [1, 3, 1, 4], "Noble. Silvan. Warrior."),
        hero("01006", "Thalin", Tactics, 9, [1, 2, 2, 4], "Dwarf. Warrior."),
        hero("01007", "Éowyn", Spirit, 9, [4, 1, 1, 3], "Noble. Rohan."),
        hero("01008", "Eleanor", Spirit, 7, [1, 1, 2, 3], "Gondor. Noble."),
        hero("01009", "Dúnhere", Spirit, 8, [1, 2, 1, 4], "Rohan. Warrior."),
        hero("01010", "Denethor", Lore, 8, [1, 1, 3, 3], "Gondor. Noble. Steward."),
        hero("01011", "Glorfindel", Lore, 12, [3, 3, 1, 5], "Noble. Noldor. Warrior."),
        hero("01012", "Beravor", Lore, 10, [2, 2, 2, 4], "Dúnedain. Ranger."),
        // Leadership
        ally("01013", "Guard of the Citadel", Leadership, 2, [1, 1, 0, 2]),
        ally("01014", "Faramir", Leadership, 4, [2, 1, 2, 3]).unique().with_quantity(2),
        ally("01015", "Son of Arnor", Leadership, 3, [0, 2, 0, 2]).with_quantity(2),
        ally("01016", "Snowbourn Scout", Leadership, 1, [0, 0, 1, 1]),
        ally("01017", "Silverlode Archer", Leadership, 3, [1, 2, 0, 1]).with_quantity(2),
        ally("01018", "Longbeard Orc Slayer", Leadership, 4, [0, 2, 1, 3]).with_quantity(2),
        ally("01019", "Brok Ironfist", Leadership, 6, [2, 2, 1, 4]).unique().with_quantity(1),
        event("01020", "Ever Vigilant", Leadership, 1).with_quantity(2),
        event("01021", "Common Cause", Leadership, 0).with_quantity(2),
        event("01022", "For Gondor!", Leadership, 2).with_quantity(2),
        event("01023", "Sneak Attack", Leadership, 1).with_quantity(2),
        event("01024", "Valiant Sacrifice", Leadership, 1).with_quantity(2),
        event("01025", "Grim Resolve", Leadership, 5).with_quantity(1),
        attachment("01026", "Steward of Gondor", Leadership, 2).unique().with_quantity(2),
        attachment("01027", "Celebrían's Stone", Leadership, 2).unique().with_quantity(1),
        // Tactics
        ally("01028", "Veteran Axehand", Tactics, 2, [0, 2, 1, 2]),
        ally("01029", "Gondorian Spearman", Tactics, 2, [0, 1, 1, 1]),
        ally("01030", "Horseback Archer", Tactics, 3, [0, 2, 1, 2]).with_quantity(2),
        ally("01031", "Beorn", Tactics, 6, [1, 3, 3, 6]).unique().with_quantity(1),
        event("01032", "Blade Mastery", Tactics, 1),
        event("01033", "Rain of Arrows", Tactics, 1).with_quantity(2),
        event("01034", "Feint", Tactics, 1).with_quantity(2),
        event("01035", "Quick Strike", Tactics, 1).with_quantity(2),
        event("01036", "Thicket of Spears", Tactics, 3).with_quantity(2),
        event("01037", "Swift Strike", Tactics, 2).with_quantity(2),
        event("01038", "Stand Together", Tactics, 0).with_quantity(1),
        attachment("01039", "Blade of Gondolin", Tactics, 1).with_quantity(2),
        attachment("01040", "Citadel Plate", Tactics, 4).with_quantity(2),
        attachment("01041", "Dwarven Axe", Tactics, 2).with_quantity(2),
        attachment("01042", "Horn of Gondor", Tactics, 1).unique().with_quantity(1),
        // Spirit
        ally("01043", "Wandering Took", Spirit, 2, [1, 1, 1, 2]),
        ally("01044", "Lórien Guide", Spirit, 3, [1, 1, 0, 2]),
        ally("01045", "Northern Tracker", Spirit, 4, [1, 2, 2, 3]).with_quantity(2),
        event("01046", "The Galadhrim's Greeting", Spirit, 3).with_quantity(2),
        event("01047", "Strength of Will", Spirit, 0).with_quantity(2),
        event("01048", "Hasty Stroke", Spirit, 1).with_quantity(2),
        event("01049", "Will of the West", Spirit, 1).with_quantity(2),
        event("01050", "A Test of Will", Spirit, 1).with_quantity(2),
        event("01052", "A Light in the Dark", Spirit, 2).with_quantity(2),
        event("01053", "Dwarven Tomb", Spirit, 1).with_quantity(1),
        event("01054", "Fortune or Fate", Spirit, 5).with_quantity(1),
        attachment("01055", "The Favor of the Lady", Spirit, 2).with_quantity(2),
        attachment("01056", "Power in the Earth", Spirit, 1).with_quantity(2),
        attachment("01057", "Unexpected Courage", Spirit, 2).with_quantity(1),
        // Lore
        ally("01058", "Daughter of the Nimrodel", Lore, 3, [1, 0, 0, 1]),
        ally("01059", "Erebor Hammersmith", Lore, 2, [1, 1, 1, 3]).with_quantity(2),
        ally("01060", "Henamarth Riversong", Lore, 1, [1, 1, 0, 1]).unique().with_quantity(1),
        ally("01061", "Miner of the Iron Hills", Lore, 2, [0, 1, 1, 2]).with_quantity(2),
        ally("01062", "Gléowine", Lore, 2, [1, 0, 0, 2]).unique().with_quantity(2),
        event("01063", "Lore of Imladris", Lore, 3),
        event("01064", "Lórien's Wealth", Lore, 3),
        event("01065", "Radagast's Cunning", Lore, 1).with_quantity(2),
        event("01066", "Secret Paths", Lore, 1).with_quantity(2),
        event("01068", "Beorn's Hospitality", Lore, 5).with_quantity(1),
        attachment("01069", "Forest Snare", Lore, 3).with_quantity(2),
        attachment("01070", "Protector of Lórien", Lore, 1),
        attachment("01071", "Dark Knowledge", Lore, 1).with_quantity(1),
        attachment("01072", "Self Preservation", Lore, 3).with_quantity(2),
        // Neutral
        ally("01073", "Gandalf", Neutral, 5, [4, 4, 4, 4]).unique().with_quantity(4),
        // X-cost events
        PlayerCard::new("01051", "Stand and Fight", CardType::Event)
            .with_sphere(Spirit)
            .with_quantity(3),
        PlayerCard::new("01067", "Gandalf's Search", CardType::Event)
            .with_sphere(Lore)
            .with_quantity(2),
    ]
}

fn quest_cards() -> Vec<EncounterCard> {
    vec![
        EncounterCard::quest("01119A", "Flies and Spiders", 1, 8),
        EncounterCard::quest("01120A", "A Fork in the Road", 2, 2),
        EncounterCard::quest("01121A", "A Chosen Path: Don't Leave the Path", 3, 0),
        EncounterCard::quest("01122A", "A Chosen Path: Beorn's Path", 3, 10),
        EncounterCard::quest("01123A", "To the River...", 1, 8),
        EncounterCard::quest("01124A", "Anduin Passage", 2, 16),
        EncounterCard::quest("01125A", "Ambush on the Shore", 3, 0),
        EncounterCard::quest("01126A", "The Necromancer's Tower", 1, 9),
        EncounterCard::quest("01127A", "Through the Caverns", 2, 15),
        EncounterCard::quest("01128A", "Out of the Dungeons", 3, 7),
    ]
}

fn spiders_of_mirkwood() -> Vec<EncounterCard> {
    vec![
        EncounterCard::enemy("01074", "King Spider", 20, 2, 3, 1, 3)
            .with_traits("Creature. Spider.")
            .with_quantity(2),
        EncounterCard::enemy("01075", "Hummerhorns", 40, 1, 2, 0, 3)
            .with_traits("Creature. Insect.")
            .with_victory(5),
        EncounterCard::enemy("01076", "Ungoliant's Spawn", 32, 3, 5, 2, 9)
            .with_traits("Creature. Spider."),
        EncounterCard::location("01077", "Great Forest Web", 2, 2)
            .with_traits("Forest.")
            .with_quantity(2),
        EncounterCard::location("01078", "Mountains of Mirkwood", 2, 3)
            .with_traits("Forest. Mountain.")
            .with_quantity(3),
        treachery("01079", "Eyes of the Forest"),
        treachery("01080", "Caught in a Web").with_quantity(2),
    ]
}

fn wilderlands() -> Vec<EncounterCard> {
    vec![
        EncounterCard::enemy("01081", "Wolf Rider", 10, 1, 2, 0, 2).with_traits("Goblin. Orc."),
        EncounterCard::enemy("01082", "Hill Troll", 30, 1, 6, 3, 9)
            .with_traits("Troll.")
            .with_victory(4),
        EncounterCard::enemy("01083", "Goblin Sniper", 48, 2, 2, 0, 2)
            .with_traits("Goblin. Orc.")
            .with_quantity(2),
        EncounterCard::enemy("01084", "Marsh Adder", 40, 3, 4, 1, 7)
            .with_traits("Creature.")
            .with_victory(3),
        EncounterCard::enemy("01085", "Wargs", 20, 2, 3, 1, 3)
            .with_traits("Creature.")
            .with_quantity(2),
        treachery("01086", "Despair").with_quantity(2),
        EncounterCard::location("01087", "The Brown Lands", 5, 1)
            .with_traits("Wasteland.")
            .with_quantity(2),
        EncounterCard::location("01088", "The East Bight", 1, 6).with_traits("Wasteland."),
    ]
}

fn dol_guldur_orcs() -> Vec<EncounterCard> {
    vec![
        EncounterCard::enemy("01089", "Dol Guldur Orcs", 10, 2, 2, 0, 3)
            .with_traits("Dol Guldur. Orc.")
            .with_quantity(3),
        EncounterCard::enemy("01090", "Chieftain Ufthak", 35, 2, 3, 3, 6)
            .with_traits("Dol Guldur. Orc.")
            .with_victory(4),
        EncounterCard::enemy("01091", "Dol Guldur Beastmaster", 35, 2, 3, 1, 5)
            .with_traits("Dol Guldur. Orc."),
        treachery("01092", "Driven by Shadow"),
        treachery("01093", "The Necromancer's Reach").with_quantity(3),
        EncounterCard::location("01094", "Necromancer's Pass", 3, 2)
            .with_traits("Stronghold. Dol Guldur.")
            .with_victory(5)
            .with_quantity(2),
        EncounterCard::location("01095", "Enchanted Stream", 2, 2)
            .with_traits("Forest.")
            .with_quantity(2),
    ]
}

fn passage_through_mirkwood() -> Vec<EncounterCard> {
    vec![
        EncounterCard::enemy("01096", "Forest Spider", 25, 2, 2, 1, 4)
            .with_traits("Creature. Spider.")
            .with_quantity(4),
        EncounterCard::enemy("01097", "East Bight Patrol", 5, 3, 3, 1, 2).with_traits("Goblin. Orc."),
        EncounterCard::enemy("01098", "Black Forest Bats", 15, 1, 1, 0, 2).with_traits("Creature."),
        EncounterCard::location("01099", "Old Forest Road", 1, 3)
            .with_traits("Forest.")
            .with_quantity(2),
        EncounterCard::location("01100", "Forest Gate", 2, 4)
            .with_traits("Forest.")
            .with_quantity(2),
    ]
}

fn escape_from_dol_guldur() -> Vec<EncounterCard> {
    vec![
        EncounterCard::enemy("01101", "Dungeon Jailor", 38, 2, 2, 3, 5)
            .with_traits("Dol Guldur. Orc.")
            .with_quantity(2),
        EncounterCard::enemy("01102", "Nazgûl of Dol Guldur", 40, 5, 4, 3, 9)
            .with_traits("Nazgûl.")
            .with_victory(5),
        EncounterCard::enemy("01103", "Cavern Guardian", 8, 2, 2, 1, 2)
            .with_traits("Undead.")
            .with_quantity(2),
        EncounterCard::enemy("01104", "Orc Guard", 34, 2, 4, 4, 4)
            .with_traits("Dol Guldur. Orc.")
            .with_quantity(3),
        EncounterCard::location("01105", "Endless Caverns", 1, 3)
            .with_traits("Dungeon.")
            .with_quantity(2),
        EncounterCard::location("01106", "Tower Gate", 2, 1)
            .with_traits("Dungeon.")
            .with_quantity(2),
        treachery("01107", "Under the Shadow").with_quantity(2),
        objective("01108", "Gandalf's Map").with_traits("Item."),
        objective("01109", "Dungeon Torch").with_traits("Item."),
        objective("01110", "Shadow Key").with_traits("Item."),
    ]
}

fn journey_down_the_anduin() -> Vec<EncounterCard> {
    vec![
        EncounterCard::enemy("01111", "Misty Mountain Goblins", 15, 2, 2, 1, 3)
            .with_traits("Goblin. Orc.")
            .with_quantity(3),
        EncounterCard::location("01112", "Banks of the Anduin", 1, 3)
            .with_traits("Riverland.")
            .with_quantity(2),
        EncounterCard::location("01113", "Gladden Fields", 3, 3)
            .with_traits("Marshland.")
            .with_quantity(3),
        treachery("01114", "Massing at Night"),
        treachery("01115", "Pursued by Shadow").with_quantity(2),
    ]
}

fn saurons_reach() -> Vec<EncounterCard> {
    vec![
        EncounterCard::enemy("01116", "Eastern Crows", 30, 1, 1, 0, 1)
            .with_traits("Creature.")
            .with_quantity(3),
        treachery("01117", "Evil Storm").with_quantity(3),
        treachery("01118", "Treacherous Fog").with_quantity(2),
    ]
}

/// Build the Core Set store: every player card, every quest stage, and the
/// seven encounter sets.
pub fn core_set_store() -> Result<CardStore> {
    let mut store = CardStore::new(SetInfo::new(super::CORE_SET, "Core Set").with_release_date("2011-04-20"));

    store.register_all(player_cards())?;
    store.register_all(quest_cards())?;

    store.register_encounter_set(SPIDERS_OF_MIRKWOOD, spiders_of_mirkwood())?;
    store.register_encounter_set(WILDERLANDS, wilderlands())?;
    store.register_encounter_set(DOL_GULDUR_ORCS, dol_guldur_orcs())?;
    store.register_encounter_set(PASSAGE_THROUGH_MIRKWOOD, passage_through_mirkwood())?;
    store.register_encounter_set(ESCAPE_FROM_DOL_GULDUR, escape_from_dol_guldur())?;
    store.register_encounter_set(JOURNEY_DOWN_THE_ANDUIN, journey_down_the_anduin())?;
    store.register_encounter_set(SAURONS_REACH, saurons_reach())?;

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardFamily, CardTemplate};

    #[test]
    fn test_core_set_loads() {
        let store = core_set_store().unwrap();
        assert_eq!(store.family_len(CardFamily::Player), 73);
        assert_eq!(store.family_len(CardFamily::Quest), 10);
        assert_eq!(store.family_len(CardFamily::Encounter), 45);
        assert_eq!(store.encounter_sets().len(), 7);
        assert_eq!(store.info().release_date.as_deref(), Some("2011-04-20"));
    }

    #[test]
    fn test_well_known_cards() {
        let store = core_set_store().unwrap();

        let steward = store.player_card("01026").unwrap();
        assert_eq!(steward.name(), "Steward of Gondor");
        assert_eq!(steward.card_type(), CardType::Attachment);

        let gandalf = store.player_card("01073").unwrap();
        assert_eq!(gandalf.sphere, Some(Sphere::Neutral));
        assert!(gandalf.unique);

        let stage = store.quest_card("01119A").unwrap();
        assert_eq!(stage.stage, Some(1));
        assert_eq!(stage.quest_points, Some(8));
    }

    #[test]
    fn test_every_encounter_card_is_grouped() {
        let store = core_set_store().unwrap();
        let grouped: usize = store
            .encounter_sets()
            .names()
            .map(|name| store.encounter_set(name).len())
            .sum();
        assert_eq!(grouped, store.family_len(CardFamily::Encounter));
    }
}
