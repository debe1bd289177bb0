//! Bundled content: the Core Set, its scenarios, and two starter decks.
//!
//! `Catalog::core_set()` is the usual entry point; the builders here are
//! public so tests and tools can assemble partial catalogs.

pub mod core_set;
pub mod decks;
pub mod scenarios;

pub use core_set::core_set_store;
pub use decks::starter_decks;
pub use scenarios::core_scenarios;

/// Set id of the Core Set.
pub const CORE_SET: &str = "01";

/// Encounter-set names defined by the Core Set.
pub mod encounter_sets {
    pub const SPIDERS_OF_MIRKWOOD: &str = "spiders-of-mirkwood";
    pub const WILDERLANDS: &str = "wilderlands";
    pub const DOL_GULDUR_ORCS: &str = "dol-guldur-orcs";
    pub const PASSAGE_THROUGH_MIRKWOOD: &str = "passage-through-mirkwood";
    pub const ESCAPE_FROM_DOL_GULDUR: &str = "escape-from-dol-guldur";
    pub const JOURNEY_DOWN_THE_ANDUIN: &str = "journey-down-the-anduin";
    pub const SAURONS_REACH: &str = "saurons-reach";
}

/// Bundled deck ids.
pub mod deck_ids {
    pub const CORE_STARTER: &str = "core-starter";
    pub const CORE_SPIRIT_LORE: &str = "core-spirit-lore";
}

/// Bundled scenario ids.
pub mod scenario_ids {
    pub const PASSAGE_THROUGH_MIRKWOOD: &str = "passage-through-mirkwood";
    pub const JOURNEY_DOWN_THE_ANDUIN: &str = "journey-down-the-anduin";
    pub const ESCAPE_FROM_DOL_GULDUR: &str = "escape-from-dol-guldur";
}

/// Deck used by `Catalog::build_default_game_setup`.
pub const DEFAULT_DECK: &str = deck_ids::CORE_STARTER;

/// Scenario used by `Catalog::build_default_game_setup`.
pub const DEFAULT_SCENARIO: &str = scenario_ids::PASSAGE_THROUGH_MIRKWOOD;
