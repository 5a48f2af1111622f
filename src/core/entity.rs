//! Card entity handles.
//!
//! Every card placed in a match gets a unique `EntityId`. Scripts never own
//! cards: a `Value::Card` is just this handle, and the card itself lives in
//! the game state.
//!
//! ```
//! use ccg_script::core::EntityId;
//!
//! let card = EntityId::new(7);
//! assert_eq!(card.raw(), 7);
//! assert_eq!(card.to_string(), "Card#7");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card in play.
///
/// Equality is identity: two handles are equal only if they name the same
/// card instance, so `remove` on a card list removes that exact card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The ID following this one. Used by allocators.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}
