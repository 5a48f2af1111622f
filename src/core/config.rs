//! Configuration types.
//!
//! Hosts configure the crate by providing:
//! - `MatchConfig`: seats and seed for the reference `GameState`
//! - `EvalConfig`: limits applied while evaluating one expression tree

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest supported seat count.
pub const MAX_PLAYERS: usize = 255;

/// Rejected configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be between 1 and {MAX_PLAYERS}, got {0}")]
    PlayerCount(usize),
}

/// Match configuration for `GameState::from_config`.
///
/// Deserialization applies the same seat check as `try_new`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchConfig")]
pub struct MatchConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    /// Seed for the match RNG (used by `Shuffle`).
    pub seed: u64,
}

#[derive(Deserialize)]
struct RawMatchConfig {
    player_count: usize,
    #[serde(default)]
    seed: u64,
}

impl TryFrom<RawMatchConfig> for MatchConfig {
    type Error = ConfigError;

    fn try_from(raw: RawMatchConfig) -> Result<Self, Self::Error> {
        Ok(Self::try_new(raw.player_count)?.with_seed(raw.seed))
    }
}

impl MatchConfig {
    /// Create a match configuration with seed 0.
    ///
    /// # Panics
    ///
    /// Panics unless `player_count` is in `1..=255`. Use `try_new` for
    /// counts that come from outside the program.
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= MAX_PLAYERS, "At most 255 players supported");

        Self {
            player_count,
            seed: 0,
        }
    }

    /// Create a match configuration with seed 0, rejecting bad seat counts.
    pub fn try_new(player_count: usize) -> Result<Self, ConfigError> {
        if (1..=MAX_PLAYERS).contains(&player_count) {
            Ok(Self::new(player_count))
        } else {
            Err(ConfigError::PlayerCount(player_count))
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Evaluator limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Maximum expression nesting depth before evaluation is aborted.
    pub max_depth: usize,
}

impl EvalConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Set the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
