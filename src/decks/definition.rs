//! Deck definitions.
//!
//! A deck is configuration only: hero codes plus `(code, quantity)` entries.
//! Card data stays in the stores; a deck resolves its codes through the
//! `SetRegistry` each time it is built.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{expand_into, CardInstance, InstanceAllocator, PlayerCard, SetRegistry};
use crate::core::{CardCode, CatalogError, Result, SetId};

/// One `(code, quantity)` line of a deck list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub code: CardCode,
    pub quantity: u32,
}

impl DeckEntry {
    pub fn new(code: impl Into<CardCode>, quantity: u32) -> Self {
        Self {
            code: code.into(),
            quantity,
        }
    }
}

/// A pre-built player deck.
///
/// ## Example
///
/// ```
/// use lcg_catalog::decks::{DeckDefinition, DeckEntry};
///
/// let deck = DeckDefinition::new(
///     "tiny",
///     "Tiny Deck",
///     "01",
///     ["01001"],
///     [DeckEntry::new("01026", 2), DeckEntry::new("01073", 1)],
/// )
/// .unwrap();
///
/// assert_eq!(deck.size(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDeck")]
pub struct DeckDefinition {
    pub id: String,
    pub name: String,
    /// Set the deck is built from.
    pub set: SetId,
    /// Starting heroes, in play order. Usually three.
    hero_codes: SmallVec<[CardCode; 3]>,
    entries: Vec<DeckEntry>,
}

/// Unchecked wire form; deserialization goes through `DeckDefinition::new`.
#[derive(Deserialize)]
struct RawDeck {
    id: String,
    name: String,
    set: SetId,
    hero_codes: Vec<CardCode>,
    entries: Vec<DeckEntry>,
}

impl TryFrom<RawDeck> for DeckDefinition {
    type Error = CatalogError;

    fn try_from(raw: RawDeck) -> Result<Self> {
        Self::new(raw.id, raw.name, raw.set, raw.hero_codes, raw.entries)
    }
}

impl DeckDefinition {
    /// Create a deck definition.
    ///
    /// Rejects duplicate heroes, zero quantities, and a code appearing in
    /// more than one entry.
    pub fn new<H: Into<CardCode>>(
        id: impl Into<String>,
        name: impl Into<String>,
        set: impl Into<SetId>,
        heroes: impl IntoIterator<Item = H>,
        entries: impl IntoIterator<Item = DeckEntry>,
    ) -> Result<Self> {
        let id = id.into();

        let mut hero_codes: SmallVec<[CardCode; 3]> = SmallVec::new();
        for code in heroes.into_iter().map(Into::into) {
            if hero_codes.contains(&code) {
                return Err(CatalogError::DuplicateHero { deck: id, code });
            }
            hero_codes.push(code);
        }

        let mut checked: Vec<DeckEntry> = Vec::new();
        for entry in entries {
            if entry.quantity == 0 {
                return Err(CatalogError::ZeroQuantity {
                    deck: id,
                    code: entry.code,
                });
            }
            if checked.iter().any(|e| e.code == entry.code) {
                return Err(CatalogError::DuplicateDeckEntry {
                    deck: id,
                    code: entry.code,
                });
            }
            checked.push(entry);
        }

        Ok(Self {
            id,
            name: name.into(),
            set: set.into(),
            hero_codes,
            entries: checked,
        })
    }

    #[must_use]
    pub fn hero_codes(&self) -> &[CardCode] {
        &self.hero_codes
    }

    #[must_use]
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    /// Total cards in the deck (heroes excluded).
    #[must_use]
    pub fn size(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Resolve the heroes, one instance per hero code, in order.
    ///
    /// A hero that does not resolve makes the deck unplayable, so this fails
    /// instead of skipping it.
    pub fn get_heroes(
        &self,
        registry: &SetRegistry,
        ids: &mut InstanceAllocator,
    ) -> Result<Vec<CardInstance<PlayerCard>>> {
        self.hero_codes
            .iter()
            .map(|code| {
                registry
                    .find_player_card(code.as_str())
                    .map(|hero| CardInstance::from_template(hero, ids.alloc()))
                    .ok_or_else(|| CatalogError::UnresolvedHero {
                        deck: self.id.clone(),
                        code: code.clone(),
                    })
            })
            .collect()
    }

    /// Expand the deck list into independent card instances.
    ///
    /// Entries are expanded in configuration order, copies in index order.
    /// An entry whose code does not resolve is skipped and logged. The
    /// result is unshuffled.
    pub fn build_deck(
        &self,
        registry: &SetRegistry,
        ids: &mut InstanceAllocator,
    ) -> Vec<CardInstance<PlayerCard>> {
        let mut deck = Vec::with_capacity(self.size() as usize);
        for entry in &self.entries {
            match registry.find_player_card(entry.code.as_str()) {
                Some(template) => expand_into(template, entry.quantity, ids, &mut deck),
                None => {
                    tracing::warn!(
                        deck = %self.id,
                        code = %entry.code,
                        quantity = entry.quantity,
                        "Skipping unresolved deck entry"
                    );
                }
            }
        }
        deck
    }

    /// Configured codes (heroes and entries) that do not resolve to a
    /// player card.
    #[must_use]
    pub fn unresolved_codes(&self, registry: &SetRegistry) -> Vec<CardCode> {
        self.hero_codes
            .iter()
            .chain(self.entries.iter().map(|e| &e.code))
            .filter(|code| registry.find_player_card(code.as_str()).is_none())
            .cloned()
            .collect()
    }
}
