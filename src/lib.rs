//! # lcg-catalog
//!
//! Card catalog and game-setup assembly for a cooperative living card game.
//!
//! Immutable card templates are grouped into expansion sets and named
//! encounter sets. Decks and scenarios reference them by code and name.
//! `Catalog::build_game_setup` composes these fragments into a ready-to-play
//! bundle of independently owned card instances.
//!
//! ## Design Principles
//!
//! 1. **Templates never change**: registration is the only write. Every card
//!    placed into a deck is a fresh copy with its own `InstanceId`.
//!
//! 2. **Explicit catalog**: no global registries. A `Catalog` value is built
//!    once and shared by reference.
//!
//! 3. **Deterministic output**: the same deck and scenario always produce
//!    equal setups. Shuffling belongs to the caller.
//!
//! ## Modules
//!
//! - `core`: Card codes, set ids, configuration, errors
//! - `cards`: Templates, instances, per-set stores, the set registry
//! - `decks`: Deck definitions and their registry
//! - `scenarios`: Scenario definitions and their registry
//! - `setup`: The `Catalog` and content validation
//! - `data`: Bundled Core Set content
//!
//! ## Example
//!
//! ```
//! use lcg_catalog::Catalog;
//!
//! let catalog = Catalog::core_set().unwrap();
//! let setup = catalog.build_default_game_setup().unwrap();
//!
//! let heroes: Vec<_> = setup.heroes.iter().map(|h| h.name()).collect();
//! assert_eq!(heroes, vec!["Aragorn", "Legolas", "Gimli"]);
//! ```

pub mod core;
pub mod cards;
pub mod decks;
pub mod scenarios;
pub mod setup;
pub mod data;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{CardCode, CatalogConfig, CatalogError, Result, SetId};

pub use crate::cards::{
    is_encounter_card, is_player_card, Card, CardFamily, CardInstance, CardRef, CardStore,
    CardTemplate, CardType, EncounterCard, InstanceAllocator, InstanceId, PlayerCard, SetInfo,
    SetRegistry, Sphere,
};

pub use crate::decks::{DeckDefinition, DeckEntry, DeckRegistry};

pub use crate::scenarios::{Difficulty, ScenarioDefinition, ScenarioRegistry};

pub use crate::setup::{Catalog, ContentIssue, GameSetup, IssueKind};
