//! Scenarios: quest chains and encounter-deck composition.

pub mod definition;
pub mod registry;

pub use definition::{Difficulty, ScenarioDefinition};
pub use registry::ScenarioRegistry;
