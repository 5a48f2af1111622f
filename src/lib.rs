//! # ccg-script
//!
//! Runtime for the expression language that card effects are written in.
//!
//! Card definitions carry small scripts ("draw a card", "send the top of the
//! deck to the bottom", "if power >= 10 ..."). A parser (outside this crate)
//! turns them into `Expr` trees; this crate evaluates those trees against a
//! live match.
//!
//! ## Design
//!
//! - **Handles, not copies**: Scripts hold `EntityId` and `ZoneHandle`
//!   values. Zones live in the host's state, so `Hand.Push(card)` mutates
//!   the real hand.
//!
//! - **Persistent lists**: Zones are `im::Vector`s, so cloning a
//!   `GameState` for a preview or rollback is cheap.
//!
//! - **Host boundary as a trait**: The evaluator only talks to
//!   `GameContext`. `GameState` is a ready-made implementation.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, RNG, configuration, reference match state
//! - `zones`: Zone kinds, handles and the zone manager
//! - `cards`: Card instances
//! - `script`: Values, environment, AST, evaluator
//! - `effects`: Named effect scripts and their registry

pub mod core;
pub mod zones;
pub mod cards;
pub mod script;
pub mod effects;

// Re-export commonly used types
pub use crate::core::{
    EntityId, PlayerId, PlayerMap,
    GameRng,
    ConfigError, MatchConfig, EvalConfig,
    GameState,
};

pub use crate::zones::{CardList, ZoneHandle, ZoneKind, ZoneManager};

pub use crate::cards::CardInstance;

pub use crate::script::{
    BinaryOp, Environment, Evaluator, Expr, GameContext, ListMethod,
    RuntimeError, RuntimeErrorKind, SourcePos, StepOp, Token, UnaryOp, Value,
};

pub use crate::effects::{EffectError, EffectRegistry, EffectScript};
