//! Core catalog types: card codes, configuration, errors.
//!
//! Everything else in the crate builds on these. They carry no card data.

pub mod code;
pub mod config;
pub mod error;

pub use code::{CardCode, SetId, SET_ID_WIDTH};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
