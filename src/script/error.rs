//! Runtime errors raised while evaluating an expression.
//!
//! There is exactly one error type at this layer. It always carries the
//! source position of the token that caused it so hosts can point at the
//! offending part of the card script.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::zones::ZoneHandle;

/// Line/column of a token in the original script text (1-based).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
}

impl SourcePos {
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourcePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// What went wrong. Hosts can branch on this without parsing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuntimeErrorKind {
    /// An operand had the wrong variant for its operator.
    TypeMismatch,
    /// A variable was read before any assignment.
    UndefinedVariable,
    /// A method or zone access received the wrong kind of argument.
    InvalidArgument,
    /// A method was called with the wrong number of arguments.
    ArityMismatch,
    /// A list method was called on something that is not a card list.
    NotAList,
    /// A player number does not name a seated player.
    UnknownPlayer,
    /// A literal's text could not be parsed.
    InvalidLiteral,
    /// Expression nesting exceeded `EvalConfig::max_depth`.
    DepthExceeded,
}

/// A located evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("[{pos}] {message}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub message: String,
    pub pos: SourcePos,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, message: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            kind,
            message: message.into(),
            pos,
        }
    }

    pub(crate) fn type_mismatch(message: impl Into<String>, pos: SourcePos) -> Self {
        Self::new(RuntimeErrorKind::TypeMismatch, message, pos)
    }

    pub(crate) fn undefined_variable(name: &str, pos: SourcePos) -> Self {
        Self::new(
            RuntimeErrorKind::UndefinedVariable,
            format!("Undefined variable '{name}'"),
            pos,
        )
    }

    pub(crate) fn unknown_zone(zone: ZoneHandle, pos: SourcePos) -> Self {
        Self::new(
            RuntimeErrorKind::InvalidArgument,
            format!("Unknown zone handle {zone}"),
            pos,
        )
    }

    pub(crate) fn arity(method: &str, given: usize, pos: SourcePos) -> Self {
        Self::new(
            RuntimeErrorKind::ArityMismatch,
            format!("No overload for method '{method}' takes {given} arguments"),
            pos,
        )
    }
}
