//! Card instances - per-game copies of templates.
//!
//! `CardInstance` is a specific copy of a card in a game. It owns a full copy
//! of its template plus mutable state (damage, exhaustion, attachments).
//! Two instances of the same template share nothing: changing one never
//! touches the other or the template still held by the store.
//!
//! ## Instance IDs
//!
//! Each instance carries an `InstanceId` handed out by an
//! `InstanceAllocator`. A setup allocates ids sequentially from 0, so
//! building the same setup twice yields value-equal results.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::CardTemplate;
use crate::core::CardCode;

/// Unique identifier for a card instance within one game setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Sequential allocator for instance ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceAllocator {
    next: u32,
}

impl InstanceAllocator {
    /// Create an allocator starting at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

/// A card instance in a game.
///
/// ## State Values (i64 only)
///
/// `state` follows the engine convention of integer-only values:
/// - Booleans: use 0/1 (see `set_flag`)
/// - Counters: damage, resources, progress
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance<T> {
    /// Unique id for this copy.
    pub instance_id: InstanceId,

    /// Owned copy of the template.
    pub card: T,

    /// Mutable instance state (damage, exhausted, etc.)
    #[serde(default)]
    pub state: FxHashMap<String, i64>,

    /// Instances attached to this card.
    #[serde(default)]
    pub attachments: Vec<InstanceId>,
}

impl<T: CardTemplate> CardInstance<T> {
    /// Copy a template into a fresh instance.
    #[must_use]
    pub fn from_template(template: &T, instance_id: InstanceId) -> Self {
        Self {
            instance_id,
            card: template.clone(),
            state: FxHashMap::default(),
            attachments: Vec::new(),
        }
    }

    /// The template's code.
    #[must_use]
    pub fn code(&self) -> &CardCode {
        self.card.code()
    }

    /// The template's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.card.name()
    }
}

impl<T> CardInstance<T> {
    /// Get a state value with a default.
    #[must_use]
    pub fn get_state(&self, key: &str, default: i64) -> i64 {
        self.state.get(key).copied().unwrap_or(default)
    }

    /// Set a state value.
    pub fn set_state(&mut self, key: impl Into<String>, value: i64) {
        self.state.insert(key.into(), value);
    }

    /// Modify a state value by delta.
    pub fn modify_state(&mut self, key: &str, delta: i64) {
        let current = self.get_state(key, 0);
        self.state.insert(key.to_string(), current + delta);
    }

    /// Check if a state flag is set (non-zero).
    #[must_use]
    pub fn has_flag(&self, key: &str) -> bool {
        self.get_state(key, 0) != 0
    }

    /// Set a boolean flag (1 for true, 0 for false).
    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        self.set_state(key, if value { 1 } else { 0 });
    }

    /// Attach another instance to this one.
    pub fn attach(&mut self, other: InstanceId) {
        self.attachments.push(other);
    }

    /// Clear all state and attachments (e.g. when the card leaves play).
    pub fn reset(&mut self) {
        self.state.clear();
        self.attachments.clear();
    }
}

/// Push `copies` independent instances of `template` onto `out`.
///
/// Each copy is a separate clone with its own id; copies come out in index
/// order.
pub fn expand_into<T: CardTemplate>(
    template: &T,
    copies: u32,
    ids: &mut InstanceAllocator,
    out: &mut Vec<CardInstance<T>>,
) {
    out.reserve(copies as usize);
    for _ in 0..copies {
        out.push(CardInstance::from_template(template, ids.alloc()));
    }
}
