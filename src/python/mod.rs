//! Python bindings for the card catalog.
//!
//! # Quick Start
//!
//! ```python
//! import lcg_catalog
//!
//! catalog = lcg_catalog.Catalog.core_set()
//! setup = catalog.build_game_setup("core-starter", "passage-through-mirkwood")
//!
//! print(len(setup.player_deck), [h.name for h in setup.heroes])
//! ```

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::core::CatalogError;

mod py_cards;
mod py_catalog;

pub use py_cards::*;
pub use py_catalog::*;

impl From<CatalogError> for PyErr {
    fn from(err: CatalogError) -> Self {
        if err.is_not_found() {
            PyErr::new::<PyKeyError, _>(err.to_string())
        } else {
            PyErr::new::<PyValueError, _>(err.to_string())
        }
    }
}

/// lcg_catalog: card catalog and game-setup assembly.
#[pymodule]
fn lcg_catalog(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyCardInstance>()?;
    m.add_class::<PyGameSetup>()?;
    m.add_class::<PyCatalog>()?;
    Ok(())
}
