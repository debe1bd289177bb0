//! Catalog error type.
//!
//! Two groups of failures:
//! - Load-time authoring mistakes (duplicate codes, invalid deck entries).
//!   These surface while the catalog is being built, never during play.
//! - Assembly failures (`DeckNotFound`, `ScenarioNotFound`, unresolved heroes,
//!   and the strict-mode variants). These abort `build_game_setup`.
//!
//! Unresolved non-hero card references are not errors by default: the entry
//! is dropped and logged.

use thiserror::Error;

use super::code::{CardCode, SetId};

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("configuration not found: unknown deck '{0}'")]
    DeckNotFound(String),

    #[error("configuration not found: unknown scenario '{0}'")]
    ScenarioNotFound(String),

    #[error("deck '{deck}' references hero {code} which is not in any loaded set")]
    UnresolvedHero { deck: String, code: CardCode },

    #[error("{owner} references card {code} which is not in any loaded set")]
    UnresolvedCard { owner: String, code: CardCode },

    #[error("scenario '{scenario}' references unknown encounter set '{name}'")]
    UnknownEncounterSet { scenario: String, name: String },

    #[error("card {0} is already registered")]
    DuplicateCode(CardCode),

    #[error("card {code} does not belong to {set}")]
    ForeignCode { code: CardCode, set: SetId },

    #[error("{0} is already loaded")]
    DuplicateSet(SetId),

    #[error("encounter set '{0}' is already defined")]
    DuplicateEncounterSet(String),

    #[error("encounter set '{name}' lists {code}, which is not an encounter card of this set")]
    UnknownSetMember { name: String, code: CardCode },

    #[error("deck '{deck}' lists {code} in more than one entry")]
    DuplicateDeckEntry { deck: String, code: CardCode },

    #[error("deck '{deck}' lists hero {code} more than once")]
    DuplicateHero { deck: String, code: CardCode },

    #[error("deck '{deck}' entry {code} has quantity 0")]
    ZeroQuantity { deck: String, code: CardCode },

    #[error("deck '{0}' is already registered")]
    DuplicateDeck(String),

    #[error("scenario '{0}' is already registered")]
    DuplicateScenario(String),
}

impl CatalogError {
    /// Check whether this is a configuration-not-found failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DeckNotFound(_) | Self::ScenarioNotFound(_))
    }

    /// The missing identifier for configuration-not-found failures.
    #[must_use]
    pub fn missing_id(&self) -> Option<&str> {
        match self {
            Self::DeckNotFound(id) | Self::ScenarioNotFound(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_identifier() {
        let err = CatalogError::DeckNotFound("nonexistent-deck".to_string());
        assert!(err.is_not_found());
        assert_eq!(err.missing_id(), Some("nonexistent-deck"));
        assert!(err.to_string().contains("nonexistent-deck"));

        let err = CatalogError::ScenarioNotFound("lost-scenario".to_string());
        assert!(err.is_not_found());
        assert!(err.to_string().contains("lost-scenario"));
    }

    #[test]
    fn test_authoring_errors_are_not_not_found() {
        let err = CatalogError::DuplicateCode(CardCode::new("01001"));
        assert!(!err.is_not_found());
        assert_eq!(err.missing_id(), None);
        assert_eq!(err.to_string(), "card 01001 is already registered");
    }
}
