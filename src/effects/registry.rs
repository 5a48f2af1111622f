//! Named effect scripts.
//!
//! A card definition refers to its effects by name; the host builds one
//! `EffectRegistry` at startup and invokes effects through it. Each
//! invocation gets a fresh `Environment`, so no variable survives from one
//! effect run to the next.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::config::EvalConfig;
use crate::script::{Environment, Evaluator, Expr, GameContext, RuntimeError, Value};

/// A named effect body: expressions run in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectScript {
    pub name: String,
    pub body: Vec<Expr>,
}

impl EffectScript {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Vec::new(),
        }
    }

    /// Append an expression to the body.
    #[must_use]
    pub fn with_expr(mut self, expr: Expr) -> Self {
        self.body.push(expr);
        self
    }
}

/// Failure to run an effect.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EffectError {
    #[error("Unknown effect '{0}'")]
    UnknownEffect(String),

    #[error("Effect '{effect}' aborted: {source}")]
    Runtime {
        effect: String,
        #[source]
        source: RuntimeError,
    },
}

impl EffectError {
    /// The underlying script error, if the effect got as far as running.
    #[must_use]
    pub fn runtime_error(&self) -> Option<&RuntimeError> {
        match self {
            EffectError::Runtime { source, .. } => Some(source),
            EffectError::UnknownEffect(_) => None,
        }
    }
}

/// Effect scripts by name.
#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    scripts: FxHashMap<String, EffectScript>,
    config: EvalConfig,
}

impl EffectRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a script, returning the one it replaced.
    pub fn register(&mut self, script: EffectScript) -> Option<EffectScript> {
        self.scripts.insert(script.name.clone(), script)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EffectScript> {
        self.scripts.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scripts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run an effect with an empty environment.
    pub fn invoke(&self, name: &str, ctx: &mut dyn GameContext) -> Result<Value, EffectError> {
        self.invoke_with(name, Environment::new(), ctx)
    }

    /// Run an effect with pre-seeded variables.
    ///
    /// Returns the value of the last expression, or `Null` for an empty body.
    /// The first failing expression aborts the run; mutations made by the
    /// expressions before it stay applied.
    pub fn invoke_with(
        &self,
        name: &str,
        mut env: Environment,
        ctx: &mut dyn GameContext,
    ) -> Result<Value, EffectError> {
        let script = self
            .scripts
            .get(name)
            .ok_or_else(|| EffectError::UnknownEffect(name.to_string()))?;

        debug!(effect = name, exprs = script.body.len(), "invoking effect");

        let mut evaluator = Evaluator::new(&mut env, ctx).with_config(self.config);
        let mut last = Value::Null;
        for expr in &script.body {
            last = evaluator.evaluate(expr).map_err(|source| {
                warn!(effect = name, error = %source, "effect aborted");
                EffectError::Runtime {
                    effect: name.to_string(),
                    source,
                }
            })?;
        }

        debug!(effect = name, result = %last, kind = last.kind(), "effect finished");
        Ok(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, PlayerId};
    use crate::script::{BinaryOp, RuntimeErrorKind};
    use crate::zones::ZoneKind;

    fn registry() -> EffectRegistry {
        let mut registry = EffectRegistry::new();
        registry.register(
            EffectScript::new("double")
                .with_expr(Expr::assign("x", Expr::number("21")))
                .with_expr(Expr::binary(BinaryOp::Multiply, Expr::var("x"), Expr::number("2"))),
        );
        registry.register(EffectScript::new("noop"));
        registry
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = registry();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("double"));
        assert_eq!(registry.names(), vec!["double", "noop"]);

        let replaced = registry.register(EffectScript::new("noop"));
        assert!(replaced.is_some());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_invoke_returns_last_value() {
        let mut state = GameState::new(2, 7);
        let result = registry().invoke("double", &mut state).unwrap();
        assert_eq!(result, Value::Number(42.0));
    }

    #[test]
    fn test_empty_body_is_null() {
        let mut state = GameState::new(2, 7);
        assert_eq!(registry().invoke("noop", &mut state).unwrap(), Value::Null);
    }

    #[test]
    fn test_unknown_effect() {
        let mut state = GameState::new(2, 7);
        let err = registry().invoke("missing", &mut state).unwrap_err();
        assert_eq!(err, EffectError::UnknownEffect("missing".into()));
        assert!(err.runtime_error().is_none());
    }

    #[test]
    fn test_invoke_with_seeded_variables() {
        let mut registry = EffectRegistry::new();
        registry.register(EffectScript::new("draw").with_expr(Expr::call(
            Expr::zone(ZoneKind::Hand),
            crate::script::ListMethod::Push,
            Some(Expr::var("card")),
        )));

        let mut state = GameState::new(2, 7);
        let p1 = PlayerId::new(0);
        let card = state.spawn_card("Roach", p1, ZoneKind::Deck);

        let env = Environment::new().with("card", Value::Card(card));
        registry.invoke_with("draw", env, &mut state).unwrap();

        assert_eq!(state.zone_cards(ZoneKind::Hand, p1).front(), Some(&card));
    }

    #[test]
    fn test_runtime_error_is_wrapped() {
        let mut registry = EffectRegistry::new();
        registry.register(EffectScript::new("broken").with_expr(Expr::var("nope")));

        let mut state = GameState::new(2, 7);
        let err = registry.invoke("broken", &mut state).unwrap_err();
        let source = err.runtime_error().unwrap();
        assert_eq!(source.kind, RuntimeErrorKind::UndefinedVariable);
        assert!(err.to_string().starts_with("Effect 'broken' aborted: "));
    }
}
