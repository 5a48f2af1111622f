//! Runtime values.
//!
//! Every expression evaluates to exactly one `Value`. There is no implicit
//! coercion between variants: operators check the variant and fail with a
//! `RuntimeError` when it is wrong.
//!
//! `Card` and `CardList` are handles. The card or list they name is owned by
//! the game state, so copying a `Value::CardList` never copies cards.

use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;
use crate::zones::ZoneHandle;

/// A script value.
///
/// The derived `PartialEq` compares handles structurally. Script-level `==`
/// goes through the evaluator, which compares card lists by content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Text(String),
    Boolean(bool),
    /// Reference to a card owned by the game state.
    Card(EntityId),
    /// Live list backing a zone.
    CardList(ZoneHandle),
    Null,
}

impl Value {
    /// Kind name used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Boolean(_) => "boolean",
            Value::Card(_) => "card",
            Value::CardList(_) => "card list",
            Value::Null => "null",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_card(&self) -> Option<EntityId> {
        match self {
            Value::Card(id) => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_card_list(&self) -> Option<ZoneHandle> {
        match self {
            Value::CardList(zone) => Some(*zone),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<EntityId> for Value {
    fn from(id: EntityId) -> Self {
        Value::Card(id)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Card(id) => write!(f, "{id}"),
            Value::CardList(zone) => write!(f, "{zone}"),
            Value::Null => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Value::Number(1.0).kind(), "number");
        assert_eq!(Value::from("x").kind(), "text");
        assert_eq!(Value::CardList(ZoneHandle(0)).kind(), "card list");
        assert!(Value::Null.is_null());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(2.5_f64).as_number(), Some(2.5));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from("a").as_text(), Some("a"));
        assert_eq!(Value::from(EntityId(4)).as_card(), Some(EntityId(4)));
        assert_eq!(Value::CardList(ZoneHandle(2)).as_card_list(), Some(ZoneHandle(2)));
        assert_eq!(Value::from("1").as_number(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(5.0).to_string(), "5");
        assert_eq!(Value::Number(-2.5).to_string(), "-2.5");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::Card(EntityId(8)).to_string(), "Card#8");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_value_serde() {
        let values = vec![
            Value::Number(1.5),
            Value::from("Roach"),
            Value::Card(EntityId(3)),
            Value::CardList(ZoneHandle(1)),
            Value::Null,
        ];
        let json = serde_json::to_string(&values).unwrap();
        let deserialized: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(values, deserialized);
    }
}
