//! Card codes and set identifiers.
//!
//! Every card template has a unique code such as `"01026"` or `"01119A"`.
//!
//! ## Code Layout
//!
//! - Characters `0..SET_ID_WIDTH`: the owning expansion set (`"01"` = Core Set)
//! - The rest: card number within the set, plus an optional side suffix
//!   (quest cards use `A`/`B`)
//!
//! The prefix is a routing key, not a hint: the registry dispatches a lookup
//! straight to the store named by the prefix.
//!
//! ```
//! use lcg_catalog::core::{CardCode, SetId};
//!
//! let code = CardCode::new("01026");
//! assert_eq!(code.set_id(), Some(SetId::new("01")));
//! ```

use serde::{Deserialize, Serialize};

/// Width of the set-id prefix in every card code.
pub const SET_ID_WIDTH: usize = 2;

/// Identifier of an expansion set (e.g. `"01"` for the Core Set).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SetId(pub String);

impl SetId {
    /// Create a new set ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Set({})", self.0)
    }
}

impl From<&str> for SetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::borrow::Borrow<str> for SetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Unique code of a card template.
///
/// Identifies the template ("Steward of Gondor"), never a specific copy in
/// a game. Copies are told apart by `InstanceId`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardCode(pub String);

impl CardCode {
    /// Create a new card code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the raw code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the owning set from the fixed-width prefix.
    ///
    /// Returns `None` for codes too short to carry a prefix.
    #[must_use]
    pub fn set_id(&self) -> Option<SetId> {
        self.0.get(..SET_ID_WIDTH).map(SetId::new)
    }

    /// Check whether this code belongs to `set`.
    #[must_use]
    pub fn belongs_to(&self, set: &SetId) -> bool {
        self.0.get(..SET_ID_WIDTH) == Some(set.as_str())
    }
}

impl std::fmt::Display for CardCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::borrow::Borrow<str> for CardCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
