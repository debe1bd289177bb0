//! Per-set card store.
//!
//! A `CardStore` holds the canonical templates of one expansion set,
//! partitioned by family, plus that set's encounter-set groupings.
//! Stores are filled at startup and read-only afterwards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{Card, CardFamily, CardRef, CardTemplate, EncounterCard, PlayerCard};
use super::encounter_sets::EncounterSetCatalog;
use crate::core::{CardCode, CatalogError, Result, SetId};

/// Expansion set metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetInfo {
    pub id: SetId,
    pub name: String,
    /// Release date as printed by the publisher (YYYY-MM-DD).
    pub release_date: Option<String>,
}

impl SetInfo {
    pub fn new(id: impl Into<SetId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            release_date: None,
        }
    }

    #[must_use]
    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }
}

/// Canonical templates for one expansion set.
///
/// ## Example
///
/// ```
/// use lcg_catalog::cards::{CardStore, CardType, EncounterCard, PlayerCard, SetInfo};
///
/// let mut store = CardStore::new(SetInfo::new("01", "Core Set"));
/// store.register(PlayerCard::new("01001", "Aragorn", CardType::Hero)).unwrap();
/// store
///     .register_encounter_set(
///         "spiders-of-mirkwood",
///         vec![EncounterCard::enemy("01074", "King Spider", 20, 2, 3, 1, 3)],
///     )
///     .unwrap();
///
/// assert_eq!(store.lookup("01001").unwrap().name(), "Aragorn");
/// assert_eq!(store.encounter_set("spiders-of-mirkwood").len(), 1);
/// assert!(store.lookup("01999").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct CardStore {
    info: SetInfo,
    player: FxHashMap<CardCode, PlayerCard>,
    encounter: FxHashMap<CardCode, EncounterCard>,
    quest: FxHashMap<CardCode, EncounterCard>,
    encounter_sets: EncounterSetCatalog,
}

impl CardStore {
    /// Create an empty store for a set.
    #[must_use]
    pub fn new(info: SetInfo) -> Self {
        Self {
            info,
            player: FxHashMap::default(),
            encounter: FxHashMap::default(),
            quest: FxHashMap::default(),
            encounter_sets: EncounterSetCatalog::new(),
        }
    }

    #[must_use]
    pub fn info(&self) -> &SetInfo {
        &self.info
    }

    #[must_use]
    pub fn set_id(&self) -> &SetId {
        &self.info.id
    }

    /// Register a template in the partition matching its type.
    ///
    /// Fails if the code is already registered in any partition, or if its
    /// prefix names a different set.
    pub fn register(&mut self, card: impl Into<Card>) -> Result<()> {
        let card = card.into();
        let code = card.code();
        if !code.belongs_to(&self.info.id) {
            return Err(CatalogError::ForeignCode {
                code: code.clone(),
                set: self.info.id.clone(),
            });
        }
        if self.contains(code.as_str()) {
            return Err(CatalogError::DuplicateCode(code.clone()));
        }

        match card {
            Card::Player(c) => {
                self.player.insert(c.base.code.clone(), c);
            }
            Card::Encounter(c) if c.is_quest() => {
                self.quest.insert(c.base.code.clone(), c);
            }
            Card::Encounter(c) => {
                self.encounter.insert(c.base.code.clone(), c);
            }
        }
        Ok(())
    }

    /// Register several templates, stopping at the first failure.
    pub fn register_all<C: Into<Card>>(&mut self, cards: impl IntoIterator<Item = C>) -> Result<()> {
        for card in cards {
            self.register(card)?;
        }
        Ok(())
    }

    /// Group already-registered encounter cards under a set name.
    ///
    /// Every member must be a registered encounter card (not a quest stage).
    pub fn define_encounter_set<C: Into<CardCode>>(
        &mut self,
        name: impl Into<String>,
        members: impl IntoIterator<Item = C>,
    ) -> Result<()> {
        let name = name.into();
        let members: Vec<CardCode> = members.into_iter().map(Into::into).collect();
        if let Some(missing) = members
            .iter()
            .find(|code| !self.encounter.contains_key(code.as_str()))
        {
            return Err(CatalogError::UnknownSetMember {
                name,
                code: missing.clone(),
            });
        }
        self.encounter_sets.insert(name, members)
    }

    /// Register new encounter cards and group them under a set name, in the
    /// given order.
    ///
    /// The whole list is checked before anything is registered: on error the
    /// store is unchanged.
    pub fn register_encounter_set(
        &mut self,
        name: impl Into<String>,
        cards: Vec<EncounterCard>,
    ) -> Result<()> {
        let name = name.into();
        if self.encounter_sets.contains(&name) {
            return Err(CatalogError::DuplicateEncounterSet(name));
        }

        let mut members: Vec<CardCode> = Vec::with_capacity(cards.len());
        for card in &cards {
            let code = card.code();
            if !code.belongs_to(&self.info.id) {
                return Err(CatalogError::ForeignCode {
                    code: code.clone(),
                    set: self.info.id.clone(),
                });
            }
            if self.contains(code.as_str()) || members.contains(code) {
                return Err(CatalogError::DuplicateCode(code.clone()));
            }
            if card.is_quest() {
                return Err(CatalogError::UnknownSetMember {
                    name,
                    code: code.clone(),
                });
            }
            members.push(code.clone());
        }

        for card in cards {
            self.encounter.insert(card.base.code.clone(), card);
        }
        self.encounter_sets.insert(name, members)
    }

    /// Look up any template by code.
    ///
    /// Returns the canonical template itself; callers copy before mutating.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<CardRef<'_>> {
        self.player
            .get(code)
            .map(CardRef::Player)
            .or_else(|| self.encounter_card(code).map(CardRef::Encounter))
    }

    /// Look up a player card.
    #[must_use]
    pub fn player_card(&self, code: &str) -> Option<&PlayerCard> {
        self.player.get(code)
    }

    /// Look up an encounter-family card, quest stages included.
    #[must_use]
    pub fn encounter_card(&self, code: &str) -> Option<&EncounterCard> {
        self.encounter.get(code).or_else(|| self.quest.get(code))
    }

    /// Look up a quest stage.
    #[must_use]
    pub fn quest_card(&self, code: &str) -> Option<&EncounterCard> {
        self.quest.get(code)
    }

    /// Templates of a named encounter set, in definition order.
    ///
    /// Empty for an unknown name.
    #[must_use]
    pub fn encounter_set(&self, name: &str) -> Vec<&EncounterCard> {
        self.encounter_sets
            .members(name)
            .iter()
            .filter_map(|code| self.encounter.get(code))
            .collect()
    }

    #[must_use]
    pub fn encounter_sets(&self) -> &EncounterSetCatalog {
        &self.encounter_sets
    }

    /// Check if any partition holds `code`.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.player.contains_key(code)
            || self.encounter.contains_key(code)
            || self.quest.contains_key(code)
    }

    /// All registered codes. Order is unspecified.
    pub fn codes(&self) -> impl Iterator<Item = &CardCode> {
        self.player
            .keys()
            .chain(self.encounter.keys())
            .chain(self.quest.keys())
    }

    /// Templates in one family.
    pub fn iter_family(&self, family: CardFamily) -> Box<dyn Iterator<Item = CardRef<'_>> + '_> {
        match family {
            CardFamily::Player => Box::new(self.player.values().map(CardRef::Player)),
            CardFamily::Encounter => Box::new(self.encounter.values().map(CardRef::Encounter)),
            CardFamily::Quest => Box::new(self.quest.values().map(CardRef::Encounter)),
        }
    }

    /// Number of templates in one family.
    #[must_use]
    pub fn family_len(&self, family: CardFamily) -> usize {
        match family {
            CardFamily::Player => self.player.len(),
            CardFamily::Encounter => self.encounter.len(),
            CardFamily::Quest => self.quest.len(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.player.len() + self.encounter.len() + self.quest.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
