//! Scenario registry.

use rustc_hash::FxHashMap;

use super::definition::ScenarioDefinition;
use crate::core::{CatalogError, Result};

/// Scenario definitions keyed by id, iterated in registration order.
#[derive(Clone, Debug, Default)]
pub struct ScenarioRegistry {
    scenarios: FxHashMap<String, ScenarioDefinition>,
    order: Vec<String>,
}

impl ScenarioRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scenario. Fails if the id is taken.
    pub fn register(&mut self, scenario: ScenarioDefinition) -> Result<()> {
        if self.scenarios.contains_key(&scenario.id) {
            return Err(CatalogError::DuplicateScenario(scenario.id));
        }
        self.order.push(scenario.id.clone());
        self.scenarios.insert(scenario.id.clone(), scenario);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ScenarioDefinition> {
        self.scenarios.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.scenarios.contains_key(id)
    }

    /// Scenarios of one set, sorted by scenario number.
    #[must_use]
    pub fn by_set(&self, set: &str) -> Vec<&ScenarioDefinition> {
        let mut scenarios: Vec<_> = self.iter().filter(|s| s.set.as_str() == set).collect();
        scenarios.sort_by_key(|s| s.number);
        scenarios
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioDefinition> {
        self.order.iter().filter_map(|id| self.scenarios.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
