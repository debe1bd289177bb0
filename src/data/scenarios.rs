//! The three Core Set scenarios.

use super::encounter_sets::*;
use super::scenario_ids;
use super::CORE_SET;
use crate::core::Result;
use crate::scenarios::{Difficulty, ScenarioDefinition, ScenarioRegistry};

pub fn passage_through_mirkwood() -> ScenarioDefinition {
    ScenarioDefinition::new(
        scenario_ids::PASSAGE_THROUGH_MIRKWOOD,
        "Passage Through Mirkwood",
        CORE_SET,
    )
    .with_number(1)
    .with_difficulty(Difficulty::Easy)
    // Stage 3 branches: both sides are part of the chain
    .with_quest_stages(["01119A", "01120A", "01121A", "01122A"])
    .with_encounter_sets([SPIDERS_OF_MIRKWOOD, PASSAGE_THROUGH_MIRKWOOD, DOL_GULDUR_ORCS])
    .with_setup_cards(["01096", "01099"])
}

pub fn journey_down_the_anduin() -> ScenarioDefinition {
    ScenarioDefinition::new(
        scenario_ids::JOURNEY_DOWN_THE_ANDUIN,
        "Journey Down the Anduin",
        CORE_SET,
    )
    .with_number(2)
    .with_difficulty(Difficulty::Medium)
    .with_quest_stages(["01123A", "01124A", "01125A"])
    .with_encounter_sets([JOURNEY_DOWN_THE_ANDUIN, SAURONS_REACH, DOL_GULDUR_ORCS, WILDERLANDS])
    .with_setup_cards(["01082"])
}

pub fn escape_from_dol_guldur() -> ScenarioDefinition {
    ScenarioDefinition::new(
        scenario_ids::ESCAPE_FROM_DOL_GULDUR,
        "Escape from Dol Guldur",
        CORE_SET,
    )
    .with_number(3)
    .with_difficulty(Difficulty::Hard)
    .with_quest_stages(["01126A", "01127A", "01128A"])
    .with_encounter_sets([ESCAPE_FROM_DOL_GULDUR, SPIDERS_OF_MIRKWOOD, DOL_GULDUR_ORCS])
    .with_setup_cards(["01108", "01109", "01110"])
    .with_held_out("01102")
}

/// Every bundled scenario, registered in scenario-number order.
pub fn core_scenarios() -> Result<ScenarioRegistry> {
    let mut scenarios = ScenarioRegistry::new();
    scenarios.register(passage_through_mirkwood())?;
    scenarios.register(journey_down_the_anduin())?;
    scenarios.register(escape_from_dol_guldur())?;
    Ok(scenarios)
}
