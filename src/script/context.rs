//! The game-state boundary seen by scripts.
//!
//! The host's match state implements `GameContext`. The evaluator never owns
//! zones: it resolves a zone to a `ZoneHandle`, and list methods mutate the
//! host's list in place through `cards_mut`.

use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::zones::{CardList, ZoneHandle, ZoneKind};

/// Read/write access to the live match, implemented by the host.
///
/// Handles returned by `zone` must be accepted by `cards` and `cards_mut` for
/// the lifetime of the context. Any other handle yields `None`, which the
/// evaluator reports as a `RuntimeError`.
pub trait GameContext {
    /// The player whose turn it is. Sugar-form zone access targets them.
    fn active_player(&self) -> PlayerId;

    /// Resolve a script player number. `None` if nobody has that number.
    fn player(&self, number: i64) -> Option<PlayerId>;

    /// The zone of `kind` belonging to `player`. Shared zones ignore `player`.
    fn zone(&self, kind: ZoneKind, player: PlayerId) -> ZoneHandle;

    /// Current contents of a zone, front first.
    fn cards(&self, zone: ZoneHandle) -> Option<&CardList>;

    /// Mutable contents of a zone.
    fn cards_mut(&mut self, zone: ZoneHandle) -> Option<&mut CardList>;

    /// RNG used by `Shuffle`.
    fn rng(&mut self) -> &mut GameRng;
}
