//! Operator semantics.
//!
//! Each operator family accepts exactly one operand variant. Equality is the
//! exception: it accepts any pair and never fails.

use crate::script::ast::{BinaryOp, UnaryOp};
use crate::script::context::GameContext;
use crate::script::error::{RuntimeError, SourcePos};
use crate::script::value::Value;
use crate::zones::ZoneHandle;

const BOOLEAN_OPERANDS: &str = "The operands must be boolean values";
const STRING_OPERANDS: &str = "The operands must be string values";
const NUMERIC_OPERANDS: &str = "The operands must be numeric values";
const BOOLEAN_OPERAND: &str = "The operand must be a boolean value";
pub(super) const NUMERIC_OPERAND: &str = "The operand must be a numeric value";

pub(super) fn binary(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    pos: SourcePos,
    ctx: &dyn GameContext,
) -> Result<Value, RuntimeError> {
    match op {
        BinaryOp::And | BinaryOp::Or => {
            let (Value::Boolean(a), Value::Boolean(b)) = (left, right) else {
                return Err(RuntimeError::type_mismatch(BOOLEAN_OPERANDS, pos));
            };
            Ok(Value::Boolean(if op == BinaryOp::And { *a && *b } else { *a || *b }))
        }

        BinaryOp::Equal => Ok(Value::Boolean(values_equal(left, right, pos, ctx)?)),
        BinaryOp::NotEqual => Ok(Value::Boolean(!values_equal(left, right, pos, ctx)?)),

        BinaryOp::Concat | BinaryOp::ConcatSpaced => {
            let (Value::Text(a), Value::Text(b)) = (left, right) else {
                return Err(RuntimeError::type_mismatch(STRING_OPERANDS, pos));
            };
            let joined = if op == BinaryOp::Concat {
                format!("{a}{b}")
            } else {
                format!("{a} {b}")
            };
            Ok(Value::Text(joined))
        }

        BinaryOp::Greater | BinaryOp::GreaterEqual | BinaryOp::Less | BinaryOp::LessEqual => {
            let (a, b) = numbers(left, right, pos)?;
            let result = match op {
                BinaryOp::Greater => a > b,
                BinaryOp::GreaterEqual => a >= b,
                BinaryOp::Less => a < b,
                _ => a <= b,
            };
            Ok(Value::Boolean(result))
        }

        BinaryOp::Add
        | BinaryOp::Subtract
        | BinaryOp::Multiply
        | BinaryOp::Divide
        | BinaryOp::Power => {
            let (a, b) = numbers(left, right, pos)?;
            // Division by zero follows IEEE 754 (inf / NaN), it is not trapped.
            let result = match op {
                BinaryOp::Add => a + b,
                BinaryOp::Subtract => a - b,
                BinaryOp::Multiply => a * b,
                BinaryOp::Divide => a / b,
                _ => a.powf(b),
            };
            Ok(Value::Number(result))
        }
    }
}

pub(super) fn unary(op: UnaryOp, operand: &Value, pos: SourcePos) -> Result<Value, RuntimeError> {
    match (op, operand) {
        (UnaryOp::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
        (UnaryOp::Not, _) => Err(RuntimeError::type_mismatch(BOOLEAN_OPERAND, pos)),
        (UnaryOp::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Negate, _) => Err(RuntimeError::type_mismatch(NUMERIC_OPERAND, pos)),
    }
}

/// Script-level `==`.
///
/// Values of different variants are never equal. NaN equals NaN so that
/// equality stays reflexive. Card lists compare by current contents, so the
/// only failure is a list handle the context does not know.
pub(super) fn values_equal(
    left: &Value,
    right: &Value,
    pos: SourcePos,
    ctx: &dyn GameContext,
) -> Result<bool, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(a == b || (a.is_nan() && b.is_nan())),
        (Value::CardList(a), Value::CardList(b)) => {
            let contents = |zone: ZoneHandle| {
                ctx.cards(zone).ok_or_else(|| RuntimeError::unknown_zone(zone, pos))
            };
            Ok(contents(*a)? == contents(*b)?)
        }
        _ => Ok(left == right),
    }
}

fn numbers(left: &Value, right: &Value, pos: SourcePos) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::type_mismatch(NUMERIC_OPERANDS, pos)),
    }
}
