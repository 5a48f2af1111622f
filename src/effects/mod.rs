//! Card effects as named expression scripts.
//!
//! - `EffectScript`: A name plus a body of expressions
//! - `EffectRegistry`: Looks scripts up by name and runs them
//! - `EffectError`: Unknown effect, or the `RuntimeError` that aborted one

mod registry;

pub use registry::{EffectError, EffectRegistry, EffectScript};
