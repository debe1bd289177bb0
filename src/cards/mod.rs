//! Card system: templates, instances, stores, and the set registry.
//!
//! ## Key Types
//!
//! - `Card`, `PlayerCard`, `EncounterCard`: immutable templates
//! - `CardInstance`: an independently owned per-game copy of a template
//! - `CardStore`: templates of one expansion set, partitioned by family
//! - `EncounterSetCatalog`: named groupings inside a store
//! - `SetRegistry`: prefix-routed lookup across loaded stores

pub mod definition;
pub mod encounter_sets;
pub mod instance;
pub mod registry;
pub mod store;

pub use definition::{
    is_encounter_card, is_player_card, Card, CardBase, CardFamily, CardRef, CardTemplate,
    CardType, EncounterCard, PlayerCard, Sphere,
};
pub use encounter_sets::EncounterSetCatalog;
pub use instance::{expand_into, CardInstance, InstanceAllocator, InstanceId};
pub use registry::SetRegistry;
pub use store::{CardStore, SetInfo};
