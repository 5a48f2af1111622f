//! The card-effect expression language.
//!
//! ## Key Types
//!
//! - `Value`: Runtime values (numbers, text, booleans, card handles, card lists, null)
//! - `Environment`: Script-local variables for one effect invocation
//! - `Expr`: The closed set of expression nodes produced by the parser
//! - `GameContext`: The host's live match state, as seen by scripts
//! - `Evaluator`: Reduces an `Expr` to a `Value` or a located `RuntimeError`

pub mod ast;
pub mod context;
pub mod env;
pub mod error;
pub mod eval;
pub mod value;

pub use ast::{BinaryOp, Expr, ListMethod, StepOp, Token, UnaryOp};
pub use context::GameContext;
pub use env::Environment;
pub use error::{RuntimeError, RuntimeErrorKind, SourcePos};
pub use eval::Evaluator;
pub use value::Value;
