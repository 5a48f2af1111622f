//! Core match types: entities, players, RNG, configuration, state.
//!
//! These are the pieces a script never sees directly. Scripts only ever
//! hold `EntityId` and `ZoneHandle` values; everything else stays with the
//! host.

pub mod config;
pub mod entity;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{ConfigError, EvalConfig, MatchConfig};
pub use entity::EntityId;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, PlayerZones};
