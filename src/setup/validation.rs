//! Cross-reference validation for decks and scenarios.
//!
//! Resolution at build time is lenient: a dangling code is dropped and
//! logged. `validate_content` reports every such reference up front so
//! content authors can fix them before a game is ever built. It also flags
//! a held-out card that a scenario lists again as a setup card.

use serde::Serialize;

use crate::cards::SetRegistry;
use crate::decks::DeckRegistry;
use crate::scenarios::ScenarioRegistry;

/// What is wrong with a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    /// The target does not exist in any loaded set.
    Missing,
    /// The target is the scenario's held-out card, listed again elsewhere.
    RepeatedHeldOut,
}

/// One bad reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContentIssue {
    pub kind: IssueKind,
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub target_type: &'static str,
    /// Id of the referenced target.
    pub missing_id: String,
}

impl std::fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            IssueKind::Missing => write!(
                f,
                "{} '{}' references missing {} '{}' in field '{}'",
                self.source_type, self.source_id, self.target_type, self.missing_id, self.field
            ),
            IssueKind::RepeatedHeldOut => write!(
                f,
                "{} '{}' lists held-out {} '{}' again in field '{}'",
                self.source_type, self.source_id, self.target_type, self.missing_id, self.field
            ),
        }
    }
}

macro_rules! check_ref {
    ($issues:expr, $resolved:expr, $source_type:expr, $source_id:expr, $field:expr, $target_type:expr, $ref_id:expr) => {
        if !$resolved {
            $issues.push(ContentIssue {
                kind: IssueKind::Missing,
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                target_type: $target_type,
                missing_id: $ref_id.to_string(),
            });
        }
    };
}

/// Validate every deck and scenario against the loaded sets.
/// Returns the issues found, empty if all references resolve.
pub fn validate_content(
    sets: &SetRegistry,
    decks: &DeckRegistry,
    scenarios: &ScenarioRegistry,
) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    for deck in decks.iter() {
        for code in deck.hero_codes() {
            check_ref!(
                issues,
                sets.find_player_card(code.as_str()).is_some(),
                "Deck",
                deck.id,
                "hero_codes",
                "PlayerCard",
                code
            );
        }
        for entry in deck.entries() {
            check_ref!(
                issues,
                sets.find_player_card(entry.code.as_str()).is_some(),
                "Deck",
                deck.id,
                "entries",
                "PlayerCard",
                entry.code
            );
        }
    }

    for scenario in scenarios.iter() {
        for code in scenario.quest_codes() {
            check_ref!(
                issues,
                sets.find_quest_card(code.as_str()).is_some(),
                "Scenario",
                scenario.id,
                "quest_codes",
                "QuestCard",
                code
            );
        }
        for name in scenario.encounter_set_names() {
            check_ref!(
                issues,
                sets.has_encounter_set(name),
                "Scenario",
                scenario.id,
                "encounter_sets",
                "EncounterSet",
                name
            );
        }
        for code in scenario.setup_codes() {
            check_ref!(
                issues,
                sets.find_encounter_card(code.as_str()).is_some(),
                "Scenario",
                scenario.id,
                "setup_codes",
                "EncounterCard",
                code
            );
        }
        if let Some(code) = scenario.held_out_code() {
            check_ref!(
                issues,
                sets.find_encounter_card(code.as_str()).is_some(),
                "Scenario",
                scenario.id,
                "held_out",
                "EncounterCard",
                code
            );
            if scenario.setup_codes().contains(code) {
                issues.push(ContentIssue {
                    kind: IssueKind::RepeatedHeldOut,
                    source_type: "Scenario",
                    source_id: scenario.id.clone(),
                    field: "setup_codes",
                    target_type: "EncounterCard",
                    missing_id: code.to_string(),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardStore, CardType, EncounterCard, PlayerCard, SetInfo};
    use crate::decks::{DeckDefinition, DeckEntry};
    use crate::scenarios::ScenarioDefinition;

    fn sets() -> SetRegistry {
        let mut store = CardStore::new(SetInfo::new("01", "Core Set"));
        store
            .register(PlayerCard::new("01001", "Aragorn", CardType::Hero))
            .unwrap();
        store
            .register(EncounterCard::quest("01119A", "Flies and Spiders", 1, 8))
            .unwrap();
        store
            .register_encounter_set(
                "spiders",
                vec![EncounterCard::enemy("01074", "King Spider", 20, 2, 3, 1, 3)],
            )
            .unwrap();
        let mut sets = SetRegistry::new();
        sets.load(store).unwrap();
        sets
    }

    #[test]
    fn test_clean_content_has_no_issues() {
        let sets = sets();
        let mut decks = DeckRegistry::new();
        decks
            .register(DeckDefinition::new("d", "D", "01", ["01001"], Vec::new()).unwrap())
            .unwrap();
        let mut scenarios = ScenarioRegistry::new();
        scenarios
            .register(
                ScenarioDefinition::new("s", "S", "01")
                    .with_quest_stages(["01119A"])
                    .with_encounter_sets(["spiders"]),
            )
            .unwrap();

        assert!(validate_content(&sets, &decks, &scenarios).is_empty());
    }

    #[test]
    fn test_dangling_references_reported() {
        let sets = sets();
        let mut decks = DeckRegistry::new();
        decks
            .register(
                DeckDefinition::new("d", "D", "01", ["01001"], [DeckEntry::new("01999", 1)])
                    .unwrap(),
            )
            .unwrap();
        let mut scenarios = ScenarioRegistry::new();
        scenarios
            .register(
                ScenarioDefinition::new("s", "S", "01")
                    .with_encounter_sets(["spiders", "wargs"])
                    .with_held_out("01102"),
            )
            .unwrap();

        let issues = validate_content(&sets, &decks, &scenarios);
        assert_eq!(issues.len(), 3);
        assert_eq!(
            issues[0].to_string(),
            "Deck 'd' references missing PlayerCard '01999' in field 'entries'"
        );
        assert_eq!(issues[1].missing_id, "wargs");
        assert_eq!(issues[2].field, "held_out");
        assert!(issues.iter().all(|i| i.kind == IssueKind::Missing));
    }

    #[test]
    fn test_held_out_listed_as_setup_card() {
        let sets = sets();
        let decks = DeckRegistry::new();
        let mut scenarios = ScenarioRegistry::new();
        scenarios
            .register(
                ScenarioDefinition::new("s", "S", "01")
                    .with_encounter_sets(["spiders"])
                    .with_setup_cards(["01074"])
                    .with_held_out("01074"),
            )
            .unwrap();

        let issues = validate_content(&sets, &decks, &scenarios);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::RepeatedHeldOut);
        assert_eq!(
            issues[0].to_string(),
            "Scenario 's' lists held-out EncounterCard '01074' again in field 'setup_codes'"
        );
    }
}
