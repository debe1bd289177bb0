//! Card bindings for Python.

use pyo3::prelude::*;

use crate::cards::{Card, CardInstance, CardTemplate};

/// Python wrapper for a card template (owned copy).
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    #[getter]
    fn code(&self) -> String {
        self.0.code().to_string()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name().to_string()
    }

    /// Printed type, e.g. "hero" or "enemy".
    #[getter]
    fn type_code(&self) -> String {
        format!("{:?}", self.0.card_type()).to_lowercase()
    }

    #[getter]
    fn traits(&self) -> Option<String> {
        self.0.base().traits.clone()
    }

    #[getter]
    fn text(&self) -> Option<String> {
        self.0.base().text.clone()
    }

    /// Copies in the product (1 when unspecified).
    #[getter]
    fn quantity(&self) -> u32 {
        self.0.base().copies()
    }

    fn is_player_card(&self) -> bool {
        self.0.is_player_card()
    }

    fn is_encounter_card(&self) -> bool {
        self.0.is_encounter_card()
    }

    fn __repr__(&self) -> String {
        format!("Card({}, {:?})", self.0.code(), self.0.name())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for a card instance in a game setup.
#[pyclass(name = "CardInstance")]
#[derive(Clone, Debug)]
pub struct PyCardInstance {
    instance_id: u32,
    card: Card,
}

impl<T: CardTemplate + Into<Card>> From<&CardInstance<T>> for PyCardInstance {
    fn from(instance: &CardInstance<T>) -> Self {
        Self {
            instance_id: instance.instance_id.raw(),
            card: instance.card.clone().into(),
        }
    }
}

#[pymethods]
impl PyCardInstance {
    #[getter]
    fn instance_id(&self) -> u32 {
        self.instance_id
    }

    #[getter]
    fn card(&self) -> PyCard {
        PyCard(self.card.clone())
    }

    #[getter]
    fn code(&self) -> String {
        self.card.code().to_string()
    }

    #[getter]
    fn name(&self) -> String {
        self.card.name().to_string()
    }

    fn __repr__(&self) -> String {
        format!("CardInstance({}, {})", self.instance_id, self.card.code())
    }
}
