//! Card templates - static card data.
//!
//! A template holds the printed, immutable properties of a card: "Gimli" is
//! a Tactics hero with 2 willpower. Per-game state (damage, exhaustion,
//! attachments) lives in `CardInstance`.
//!
//! ## Card Shapes
//!
//! Cards come in two variants sharing a common `CardBase`:
//! - `PlayerCard`: heroes, allies, attachments, events
//! - `EncounterCard`: enemies, locations, treacheries, objectives, quests
//!
//! `Card` is the tagged union of the two. Variant-specific fields are only
//! reachable after matching on the variant.

use serde::{Deserialize, Serialize};

use crate::core::CardCode;

/// Printed card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Hero,
    Ally,
    Attachment,
    Event,
    Enemy,
    Location,
    Treachery,
    Objective,
    Quest,
}

impl CardType {
    /// The store partition this type belongs to.
    #[must_use]
    pub const fn family(self) -> CardFamily {
        match self {
            CardType::Hero | CardType::Ally | CardType::Attachment | CardType::Event => {
                CardFamily::Player
            }
            CardType::Quest => CardFamily::Quest,
            CardType::Enemy | CardType::Location | CardType::Treachery | CardType::Objective => {
                CardFamily::Encounter
            }
        }
    }

    /// Check if this is one of the player-card types.
    #[must_use]
    pub const fn is_player_type(self) -> bool {
        matches!(self.family(), CardFamily::Player)
    }
}

/// Card family - how a `CardStore` partitions its templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFamily {
    Player,
    Encounter,
    Quest,
}

/// Sphere of influence for player cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sphere {
    Leadership,
    Tactics,
    Spirit,
    Lore,
    Neutral,
    Baggins,
}

/// Fields shared by every card shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardBase {
    /// Unique code; the prefix names the owning set.
    pub code: CardCode,

    /// Printed name.
    pub name: String,

    /// Printed type.
    pub type_code: CardType,

    /// Trait line, e.g. "Creature. Spider.".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<String>,

    /// Rules text (opaque to the catalog).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Physical copies in the product. `None` means 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    /// Image reference (resolved by the presentation layer).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CardBase {
    fn new(code: impl Into<CardCode>, name: impl Into<String>, type_code: CardType) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            type_code,
            traits: None,
            text: None,
            quantity: None,
            image: None,
        }
    }

    /// Number of copies to produce when expanding by quantity.
    #[must_use]
    pub fn copies(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }
}

/// Common access to the shared base of a card shape.
///
/// Implemented by both templates so expansion and instances can be generic
/// over the variant.
pub trait CardTemplate: Clone {
    /// The shared fields.
    fn base(&self) -> &CardBase;

    /// The card code.
    fn code(&self) -> &CardCode {
        &self.base().code
    }

    /// The card name.
    fn name(&self) -> &str {
        &self.base().name
    }

    /// The printed type.
    fn card_type(&self) -> CardType {
        self.base().type_code
    }
}

/// Player card template (hero, ally, attachment, event).
///
/// ## Example
///
/// ```
/// use lcg_catalog::cards::{CardTemplate, CardType, PlayerCard, Sphere};
///
/// let gimli = PlayerCard::new("01004", "Gimli", CardType::Hero)
///     .with_sphere(Sphere::Tactics)
///     .with_threat(11)
///     .with_stats(2, 2, 2, 5);
///
/// assert_eq!(gimli.willpower, Some(2));
/// assert_eq!(gimli.code().as_str(), "01004");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCard {
    #[serde(flatten)]
    pub base: CardBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sphere: Option<Sphere>,

    /// Resource cost (`None` for heroes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u8>,

    /// Starting threat (heroes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub willpower: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<u8>,

    #[serde(default)]
    pub unique: bool,
}

impl PlayerCard {
    /// Create a new player card template.
    ///
    /// Panics if `card_type` is not a player-card type.
    #[must_use]
    pub fn new(code: impl Into<CardCode>, name: impl Into<String>, card_type: CardType) -> Self {
        assert!(
            card_type.is_player_type(),
            "{:?} is not a player card type",
            card_type
        );
        Self {
            base: CardBase::new(code, name, card_type),
            sphere: None,
            cost: None,
            threat: None,
            willpower: None,
            attack: None,
            defense: None,
            health: None,
            unique: false,
        }
    }

    #[must_use]
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.sphere = Some(sphere);
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u8) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_threat(mut self, threat: u8) -> Self {
        self.threat = Some(threat);
        self
    }

    /// Set willpower, attack, defense and health together.
    #[must_use]
    pub fn with_stats(mut self, willpower: u8, attack: u8, defense: u8, health: u8) -> Self {
        self.willpower = Some(willpower);
        self.attack = Some(attack);
        self.defense = Some(defense);
        self.health = Some(health);
        self
    }

    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub fn with_traits(mut self, traits: impl Into<String>) -> Self {
        self.base.traits = Some(traits.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.base.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.base.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.base.image = Some(image.into());
        self
    }
}

impl CardTemplate for PlayerCard {
    fn base(&self) -> &CardBase {
        &self.base
    }
}

/// Encounter card template (enemy, location, treachery, objective, quest).
///
/// Quest stages share this shape; they use `stage` and `quest_points`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterCard {
    #[serde(flatten)]
    pub base: CardBase,

    /// Engagement cost (enemies only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_cost: Option<u8>,

    /// Threat contributed while in the staging area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<u8>,

    /// Progress needed to explore (locations) or defeat (quests).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest_points: Option<u8>,

    /// Stage number (quests only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,

    /// Victory points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub victory: Option<u8>,
}

impl EncounterCard {
    /// Create a new encounter card template.
    ///
    /// Panics if `card_type` is a player-card type.
    #[must_use]
    pub fn new(code: impl Into<CardCode>, name: impl Into<String>, card_type: CardType) -> Self {
        assert!(
            !card_type.is_player_type(),
            "{:?} is not an encounter card type",
            card_type
        );
        Self {
            base: CardBase::new(code, name, card_type),
            engagement_cost: None,
            threat: None,
            attack: None,
            defense: None,
            health: None,
            quest_points: None,
            stage: None,
            shadow: None,
            flavor: None,
            victory: None,
        }
    }

    /// Create an enemy with its full stat line.
    #[must_use]
    pub fn enemy(
        code: impl Into<CardCode>,
        name: impl Into<String>,
        engagement_cost: u8,
        threat: u8,
        attack: u8,
        defense: u8,
        health: u8,
    ) -> Self {
        let mut card = Self::new(code, name, CardType::Enemy);
        card.engagement_cost = Some(engagement_cost);
        card.threat = Some(threat);
        card.attack = Some(attack);
        card.defense = Some(defense);
        card.health = Some(health);
        card
    }

    /// Create a location.
    #[must_use]
    pub fn location(
        code: impl Into<CardCode>,
        name: impl Into<String>,
        threat: u8,
        quest_points: u8,
    ) -> Self {
        let mut card = Self::new(code, name, CardType::Location);
        card.threat = Some(threat);
        card.quest_points = Some(quest_points);
        card
    }

    /// Create a quest stage.
    #[must_use]
    pub fn quest(
        code: impl Into<CardCode>,
        name: impl Into<String>,
        stage: u8,
        quest_points: u8,
    ) -> Self {
        let mut card = Self::new(code, name, CardType::Quest);
        card.stage = Some(stage);
        card.quest_points = Some(quest_points);
        card
    }

    #[must_use]
    pub fn with_threat(mut self, threat: u8) -> Self {
        self.threat = Some(threat);
        self
    }

    #[must_use]
    pub fn with_shadow(mut self, shadow: impl Into<String>) -> Self {
        self.shadow = Some(shadow.into());
        self
    }

    #[must_use]
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = Some(flavor.into());
        self
    }

    #[must_use]
    pub fn with_victory(mut self, victory: u8) -> Self {
        self.victory = Some(victory);
        self
    }

    #[must_use]
    pub fn with_traits(mut self, traits: impl Into<String>) -> Self {
        self.base.traits = Some(traits.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.base.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.base.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.base.image = Some(image.into());
        self
    }

    /// Check if this is a quest stage.
    #[must_use]
    pub fn is_quest(&self) -> bool {
        self.base.type_code == CardType::Quest
    }
}

impl CardTemplate for EncounterCard {
    fn base(&self) -> &CardBase {
        &self.base
    }
}

/// Any card template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum Card {
    Player(PlayerCard),
    Encounter(EncounterCard),
}

impl Card {
    /// The shared fields.
    #[must_use]
    pub fn base(&self) -> &CardBase {
        match self {
            Card::Player(c) => &c.base,
            Card::Encounter(c) => &c.base,
        }
    }

    #[must_use]
    pub fn code(&self) -> &CardCode {
        &self.base().code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.base().name
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.base().type_code
    }

    #[must_use]
    pub fn family(&self) -> CardFamily {
        self.card_type().family()
    }

    /// Check if this is a player card.
    ///
    /// A card with a sphere affiliation or a player-card type tag.
    #[must_use]
    pub fn is_player_card(&self) -> bool {
        match self {
            Card::Player(c) => c.sphere.is_some() || c.base.type_code.is_player_type(),
            Card::Encounter(_) => false,
        }
    }

    /// Check if this is an encounter-family card (quest stages included).
    #[must_use]
    pub fn is_encounter_card(&self) -> bool {
        matches!(self, Card::Encounter(_))
    }

    #[must_use]
    pub fn as_player(&self) -> Option<&PlayerCard> {
        match self {
            Card::Player(c) => Some(c),
            Card::Encounter(_) => None,
        }
    }

    #[must_use]
    pub fn as_encounter(&self) -> Option<&EncounterCard> {
        match self {
            Card::Encounter(c) => Some(c),
            Card::Player(_) => None,
        }
    }
}

impl From<PlayerCard> for Card {
    fn from(card: PlayerCard) -> Self {
        Card::Player(card)
    }
}

impl From<EncounterCard> for Card {
    fn from(card: EncounterCard) -> Self {
        Card::Encounter(card)
    }
}

/// Borrowed view of a template held by a `CardStore`.
///
/// Returned by lookups so the canonical template is never copied until a
/// caller asks for an instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardRef<'a> {
    Player(&'a PlayerCard),
    Encounter(&'a EncounterCard),
}

impl<'a> CardRef<'a> {
    #[must_use]
    pub fn base(self) -> &'a CardBase {
        match self {
            CardRef::Player(c) => &c.base,
            CardRef::Encounter(c) => &c.base,
        }
    }

    #[must_use]
    pub fn code(self) -> &'a CardCode {
        &self.base().code
    }

    #[must_use]
    pub fn name(self) -> &'a str {
        &self.base().name
    }

    #[must_use]
    pub fn card_type(self) -> CardType {
        self.base().type_code
    }

    #[must_use]
    pub fn is_player_card(self) -> bool {
        matches!(self, CardRef::Player(_))
    }

    #[must_use]
    pub fn is_encounter_card(self) -> bool {
        matches!(self, CardRef::Encounter(_))
    }

    #[must_use]
    pub fn as_player(self) -> Option<&'a PlayerCard> {
        match self {
            CardRef::Player(c) => Some(c),
            CardRef::Encounter(_) => None,
        }
    }

    #[must_use]
    pub fn as_encounter(self) -> Option<&'a EncounterCard> {
        match self {
            CardRef::Encounter(c) => Some(c),
            CardRef::Player(_) => None,
        }
    }

    /// Copy the template into an owned `Card`.
    #[must_use]
    pub fn to_card(self) -> Card {
        match self {
            CardRef::Player(c) => Card::Player(c.clone()),
            CardRef::Encounter(c) => Card::Encounter(c.clone()),
        }
    }
}

/// Check if a card is a player card.
#[must_use]
pub fn is_player_card(card: &Card) -> bool {
    card.is_player_card()
}

/// Check if a card is an encounter-family card.
#[must_use]
pub fn is_encounter_card(card: &Card) -> bool {
    card.is_encounter_card()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_type_family() {
        assert_eq!(CardType::Hero.family(), CardFamily::Player);
        assert_eq!(CardType::Event.family(), CardFamily::Player);
        assert_eq!(CardType::Enemy.family(), CardFamily::Encounter);
        assert_eq!(CardType::Objective.family(), CardFamily::Encounter);
        assert_eq!(CardType::Quest.family(), CardFamily::Quest);
    }

    #[test]
    fn test_player_card_builder() {
        let faramir = PlayerCard::new("01014", "Faramir", CardType::Ally)
            .with_sphere(Sphere::Leadership)
            .with_cost(4)
            .with_stats(2, 1, 2, 3)
            .unique()
            .with_traits("Gondor. Noble. Ranger.");

        assert_eq!(faramir.name(), "Faramir");
        assert_eq!(faramir.cost, Some(4));
        assert_eq!(faramir.health, Some(3));
        assert!(faramir.unique);
        assert_eq!(faramir.base.copies(), 1);
        assert_eq!(faramir.threat, None);
    }

    #[test]
    #[should_panic(expected = "not a player card type")]
    fn test_player_card_rejects_encounter_type() {
        let _ = PlayerCard::new("01074", "King Spider", CardType::Enemy);
    }

    #[test]
    #[should_panic(expected = "not an encounter card type")]
    fn test_encounter_card_rejects_player_type() {
        let _ = EncounterCard::new("01001", "Aragorn", CardType::Hero);
    }

    #[test]
    fn test_encounter_quantity_defaults_to_one() {
        let card = EncounterCard::location("01099", "Old Forest Road", 1, 3);
        assert_eq!(card.base.quantity, None);
        assert_eq!(card.base.copies(), 1);

        let card = card.with_quantity(2);
        assert_eq!(card.base.copies(), 2);
    }

    #[test]
    fn test_discriminators() {
        let hero: Card = PlayerCard::new("01001", "Aragorn", CardType::Hero)
            .with_sphere(Sphere::Leadership)
            .into();
        let enemy: Card = EncounterCard::enemy("01074", "King Spider", 20, 2, 3, 1, 3).into();
        let quest: Card = EncounterCard::quest("01119A", "Flies and Spiders", 1, 8).into();

        assert!(is_player_card(&hero));
        assert!(!is_encounter_card(&hero));
        assert!(is_encounter_card(&enemy));
        assert!(!is_player_card(&enemy));
        assert!(is_encounter_card(&quest));
        assert_eq!(quest.family(), CardFamily::Quest);
    }

    #[test]
    fn test_card_ref_to_card() {
        let spider = EncounterCard::enemy("01096", "Forest Spider", 25, 2, 2, 1, 4);
        let r = CardRef::Encounter(&spider);

        assert_eq!(r.code().as_str(), "01096");
        assert!(r.is_encounter_card());
        assert_eq!(r.to_card(), Card::Encounter(spider.clone()));
        assert!(r.as_player().is_none());
    }

    #[test]
    fn test_card_serialization() {
        let card: Card = PlayerCard::new("01026", "Steward of Gondor", CardType::Attachment)
            .with_sphere(Sphere::Leadership)
            .with_cost(2)
            .into();

        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"family\":\"player\""));
        assert!(json.contains("\"type_code\":\"attachment\""));

        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
