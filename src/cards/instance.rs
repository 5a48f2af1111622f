//! Card instances - runtime card state.
//!
//! A `CardInstance` is the game-state side of a `Value::Card` handle. Scripts
//! only ever see the `EntityId`; the instance stays owned by `GameState`.

use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// A card in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    /// Display name.
    pub name: String,

    /// Owner (whose deck it came from). `None` for neutral cards.
    pub owner: Option<PlayerId>,

    /// Current power.
    pub power: i64,
}

impl CardInstance {
    /// Create a card instance with an owner.
    #[must_use]
    pub fn new(entity_id: EntityId, name: impl Into<String>, owner: PlayerId) -> Self {
        Self {
            entity_id,
            name: name.into(),
            owner: Some(owner),
            power: 0,
        }
    }

    /// Create a neutral card instance (weather, board effects).
    #[must_use]
    pub fn neutral(entity_id: EntityId, name: impl Into<String>) -> Self {
        Self {
            entity_id,
            name: name.into(),
            owner: None,
            power: 0,
        }
    }

    /// Set the starting power.
    #[must_use]
    pub fn with_power(mut self, power: i64) -> Self {
        self.power = power;
        self
    }

    /// Check if this is a neutral (ownerless) card.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.owner.is_none()
    }
}
