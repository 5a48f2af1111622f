//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `ZoneKind`: Board, Hand, Field, Graveyard, Deck
//! - `ZoneHandle`: Opaque index into the `ZoneManager` arena
//! - `CardList`: The live ordered sequence of cards backing a zone
//! - `ZoneManager`: Owns every `CardList` in a match

pub mod manager;

pub use manager::{CardList, ZoneHandle, ZoneKind, ZoneManager};
