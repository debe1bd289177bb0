//! Catalog bindings for Python.

use pyo3::prelude::*;

use crate::cards::{Card, CardInstance, CardTemplate};
use crate::core::CatalogConfig;
use crate::setup::{Catalog, GameSetup};

use super::py_cards::{PyCard, PyCardInstance};

fn to_py<T: CardTemplate + Into<Card>>(cards: &[CardInstance<T>]) -> Vec<PyCardInstance> {
    cards.iter().map(PyCardInstance::from).collect()
}

/// Python wrapper for a built game setup.
#[pyclass(name = "GameSetup")]
#[derive(Clone, Debug)]
pub struct PyGameSetup(pub GameSetup);

#[pymethods]
impl PyGameSetup {
    #[getter]
    fn heroes(&self) -> Vec<PyCardInstance> {
        to_py(&self.0.heroes)
    }

    #[getter]
    fn player_deck(&self) -> Vec<PyCardInstance> {
        to_py(&self.0.player_deck)
    }

    #[getter]
    fn quest_deck(&self) -> Vec<PyCardInstance> {
        to_py(&self.0.quest_deck)
    }

    #[getter]
    fn encounter_deck(&self) -> Vec<PyCardInstance> {
        to_py(&self.0.encounter_deck)
    }

    #[getter]
    fn setup_cards(&self) -> Vec<PyCardInstance> {
        to_py(&self.0.setup_cards)
    }

    fn __len__(&self) -> usize {
        self.0.card_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "GameSetup(heroes={}, player_deck={}, encounter_deck={})",
            self.0.heroes.len(),
            self.0.player_deck.len(),
            self.0.encounter_deck.len()
        )
    }
}

/// Python wrapper for the catalog.
#[pyclass(name = "Catalog")]
pub struct PyCatalog {
    inner: Catalog,
}

#[pymethods]
impl PyCatalog {
    /// Load the bundled Core Set catalog.
    ///
    /// # Arguments
    /// - strict: fail setups on unknown encounter sets or unresolved codes
    #[staticmethod]
    #[pyo3(signature = (strict = false))]
    fn core_set(strict: bool) -> PyResult<Self> {
        let config = if strict {
            CatalogConfig::strict()
        } else {
            CatalogConfig::default()
        };
        Ok(Self {
            inner: Catalog::core_set()?.with_config(config),
        })
    }

    /// Build a game setup. Raises KeyError for unknown ids.
    fn build_game_setup(&self, deck_id: &str, scenario_id: &str) -> PyResult<PyGameSetup> {
        Ok(PyGameSetup(self.inner.build_game_setup(deck_id, scenario_id)?))
    }

    fn build_default_game_setup(&self) -> PyResult<PyGameSetup> {
        Ok(PyGameSetup(self.inner.build_default_game_setup()?))
    }

    fn find_card(&self, code: &str) -> Option<PyCard> {
        self.inner.find_card(code).map(|card| PyCard(card.to_card()))
    }

    fn get_encounter_set(&self, name: &str) -> Vec<PyCard> {
        self.inner
            .get_encounter_set(name)
            .into_iter()
            .map(|card| PyCard(card.clone().into()))
            .collect()
    }

    fn deck_ids(&self) -> Vec<String> {
        self.inner.decks().ids().map(str::to_string).collect()
    }

    fn scenario_ids(&self) -> Vec<String> {
        self.inner.scenarios().ids().map(str::to_string).collect()
    }

    /// Dangling references, one message per issue.
    fn validate(&self) -> Vec<String> {
        self.inner.validate().iter().map(ToString::to_string).collect()
    }
}
