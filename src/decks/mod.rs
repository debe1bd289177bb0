//! Pre-built player decks.

pub mod definition;
pub mod registry;

pub use definition::{DeckDefinition, DeckEntry};
pub use registry::DeckRegistry;
