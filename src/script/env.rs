//! Script-local variables.
//!
//! One `Environment` per effect invocation. Scopes are flat: assigning to an
//! unknown name creates it, reading an unknown name is an error.

use rustc_hash::FxHashMap;

use super::ast::Token;
use super::error::RuntimeError;
use super::value::Value;

/// Name-to-value bindings (names are case-sensitive).
#[derive(Clone, Debug, Default)]
pub struct Environment {
    values: FxHashMap<String, Value>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a variable, failing at the token's position if it is unbound.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        self.values
            .get(&name.lexeme)
            .cloned()
            .ok_or_else(|| RuntimeError::undefined_variable(&name.lexeme, name.pos))
    }

    /// Look up a binding without raising.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Bind or rebind a variable.
    pub fn assign(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Builder form of `assign`, handy for seeding effect parameters.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.assign(name, value);
        self
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over bindings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
