//! Card instances owned by the game state.
//!
//! Card definitions and deck loading live with the host; this crate only
//! needs the runtime instance behind each `EntityId`.

pub mod instance;

pub use instance::CardInstance;
