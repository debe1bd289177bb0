//! Catalog configuration.
//!
//! Controls how strictly `build_game_setup` treats gaps in content:
//! - `strict_encounter_sets`: a scenario naming an encounter set that no
//!   loaded store defines fails the setup instead of contributing nothing.
//! - `strict_card_refs`: any unresolved non-hero card code fails the setup
//!   instead of being dropped from its list.
//!
//! Both default to lenient. Unresolved heroes and unknown deck/scenario ids
//! are always fatal.

use serde::{Deserialize, Serialize};

/// Assembly policy for a `Catalog`.
///
/// ```
/// use lcg_catalog::core::CatalogConfig;
///
/// let config = CatalogConfig::new().strict_encounter_sets();
/// assert!(config.strict_encounter_sets);
/// assert!(!config.strict_card_refs);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Fail on encounter-set names that resolve to nothing.
    pub strict_encounter_sets: bool,

    /// Fail on card codes that resolve to nothing.
    pub strict_card_refs: bool,
}

impl CatalogConfig {
    /// Create the default (lenient) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with every strictness flag enabled.
    ///
    /// Useful for content review, where every gap should surface.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_encounter_sets: true,
            strict_card_refs: true,
        }
    }

    /// Reject unknown encounter-set names.
    #[must_use]
    pub fn strict_encounter_sets(mut self) -> Self {
        self.strict_encounter_sets = true;
        self
    }

    /// Reject unresolved card codes.
    #[must_use]
    pub fn strict_card_refs(mut self) -> Self {
        self.strict_card_refs = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let config = CatalogConfig::default();
        assert!(!config.strict_encounter_sets);
        assert!(!config.strict_card_refs);
        assert_eq!(config, CatalogConfig::new());
    }

    #[test]
    fn test_builder() {
        let config = CatalogConfig::new().strict_card_refs();
        assert!(config.strict_card_refs);
        assert!(!config.strict_encounter_sets);

        assert_eq!(
            CatalogConfig::new().strict_card_refs().strict_encounter_sets(),
            CatalogConfig::strict()
        );
    }
}
