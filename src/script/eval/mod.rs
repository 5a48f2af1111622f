//! Tree-walking expression evaluator.
//!
//! `Evaluator::evaluate` is the single entry point. It reduces one `Expr` to
//! a `Value` or aborts with one `RuntimeError`; nothing is retried and no
//! partial state is kept between calls. The only side effects are variable
//! writes (assignment, `++`/`--`) and in-place card list mutation through the
//! `GameContext`.
//!
//! Binary operators always evaluate left then right; `&&` and `||` do not
//! short-circuit.
//!
//! ## Usage
//!
//! ```
//! use ccg_script::core::GameState;
//! use ccg_script::script::{BinaryOp, Environment, Evaluator, Expr, Value};
//!
//! let mut state = GameState::new(2, 42);
//! let mut env = Environment::new();
//! let mut eval = Evaluator::new(&mut env, &mut state);
//!
//! let expr = Expr::binary(
//!     BinaryOp::ConcatSpaced,
//!     Expr::text("\"Gwent\""),
//!     Expr::text("\"rules\""),
//! );
//! assert_eq!(eval.evaluate(&expr).unwrap(), Value::from("Gwent rules"));
//! ```

mod access;
mod ops;

use crate::core::config::EvalConfig;

use super::ast::{Expr, Token};
use super::context::GameContext;
use super::env::Environment;
use super::error::{RuntimeError, RuntimeErrorKind};
use super::value::Value;

/// Evaluates expressions against one environment and one game context.
pub struct Evaluator<'a> {
    env: &'a mut Environment,
    ctx: &'a mut dyn GameContext,
    config: EvalConfig,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(env: &'a mut Environment, ctx: &'a mut dyn GameContext) -> Self {
        Self {
            env,
            ctx,
            config: EvalConfig::default(),
            depth: 0,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Evaluate one expression tree.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        if self.depth >= self.config.max_depth {
            return Err(RuntimeError::new(
                RuntimeErrorKind::DepthExceeded,
                format!("Expression nesting exceeds {} levels", self.config.max_depth),
                expr.pos(),
            ));
        }

        self.depth += 1;
        let result = self.eval_node(expr);
        self.depth -= 1;
        result
    }

    fn eval_node(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Number(tok) => tok.as_ref().map_or(Ok(Value::Null), parse_number),
            Expr::Text(tok) => Ok(tok
                .as_ref()
                .map_or(Value::Null, |t| Value::Text(unquote(&t.lexeme).to_string()))),
            Expr::Boolean(tok) => tok.as_ref().map_or(Ok(Value::Null), parse_boolean),

            Expr::Variable(name) => self.env.get(name),

            Expr::Group(inner) => self.evaluate(inner),

            Expr::Unary {
                op,
                operator,
                operand,
            } => {
                let operand = self.evaluate(operand)?;
                ops::unary(*op, &operand, operator.pos)
            }

            Expr::Binary {
                op,
                operator,
                left,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                ops::binary(*op, &left, &right, operator.pos, &*self.ctx)
            }

            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                // Null right-hand sides leave the binding untouched.
                if value.is_null() {
                    return Ok(Value::Null);
                }
                self.env.assign(name.lexeme.clone(), value.clone());
                Ok(value)
            }

            Expr::Step { op, name, operator } => {
                let Value::Number(old) = self.env.get(name)? else {
                    return Err(RuntimeError::type_mismatch(
                        ops::NUMERIC_OPERAND,
                        operator.pos,
                    ));
                };
                let new = old + op.delta();
                self.env.assign(name.lexeme.clone(), Value::Number(new));
                Ok(Value::Number(if op.is_prefix() { new } else { old }))
            }

            Expr::TriggerPlayer(_) => Ok(Value::Number(self.ctx.active_player().number() as f64)),

            Expr::ZoneAccess {
                zone,
                player,
                access,
            } => self.eval_zone_access(*zone, player.as_deref(), access),

            Expr::MethodCall {
                receiver,
                method,
                name,
                arg,
            } => self.eval_method(receiver, *method, name, arg.as_deref()),
        }
    }
}

fn parse_number(tok: &Token) -> Result<Value, RuntimeError> {
    tok.lexeme.trim().parse::<f64>().map(Value::Number).map_err(|_| {
        RuntimeError::new(
            RuntimeErrorKind::InvalidLiteral,
            format!("Invalid numeric literal '{}'", tok.lexeme),
            tok.pos,
        )
    })
}

fn parse_boolean(tok: &Token) -> Result<Value, RuntimeError> {
    let lexeme = tok.lexeme.trim();
    if lexeme.eq_ignore_ascii_case("true") {
        Ok(Value::Boolean(true))
    } else if lexeme.eq_ignore_ascii_case("false") {
        Ok(Value::Boolean(false))
    } else {
        Err(RuntimeError::new(
            RuntimeErrorKind::InvalidLiteral,
            format!("Invalid boolean literal '{}'", tok.lexeme),
            tok.pos,
        ))
    }
}

/// Strip one pair of surrounding double quotes, if present.
fn unquote(lexeme: &str) -> &str {
    lexeme
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(lexeme)
}
