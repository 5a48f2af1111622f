//! Expression AST consumed by the evaluator.
//!
//! The parser lives upstream; this module is the contract it must satisfy.
//! The set of node kinds is closed, so the evaluator is one exhaustive
//! `match` and adding a node without handling it is a compile error.
//!
//! Literal nodes keep their raw token text. Numbers and booleans are parsed
//! when evaluated, so a malformed literal fails at the point of use.
//!
//! ## Building trees by hand
//!
//! ```
//! use ccg_script::script::{BinaryOp, Expr};
//!
//! // power * 2 >= 10
//! let expr = Expr::binary(
//!     BinaryOp::GreaterEqual,
//!     Expr::binary(BinaryOp::Multiply, Expr::var("power"), Expr::number("2")),
//!     Expr::number("10"),
//! );
//! assert_eq!(expr.to_string(), "((power * 2) >= 10)");
//! ```

use serde::{Deserialize, Serialize};

use super::error::SourcePos;
use crate::zones::ZoneKind;

/// A lexical token: its text and where it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub lexeme: String,
    #[serde(default)]
    pub pos: SourcePos,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            lexeme: lexeme.into(),
            pos,
        }
    }

    /// Token at a given line and column.
    pub fn at(lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(lexeme, SourcePos::new(line, column))
    }

    /// Token with no source position, for trees built in code.
    pub fn synthetic(lexeme: impl Into<String>) -> Self {
        Self::new(lexeme, SourcePos::default())
    }
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    And,
    Or,
    Equal,
    NotEqual,
    /// `@`: plain string concatenation.
    Concat,
    /// `@@`: concatenation with a single space between the operands.
    ConcatSpaced,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Concat => "@",
            BinaryOp::ConcatSpaced => "@@",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Power => "^",
        }
    }
}

/// Prefix operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// `!`
    Not,
    /// `-`
    Negate,
}

impl UnaryOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Negate => "-",
        }
    }
}

/// `++` / `--` in prefix or postfix position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepOp {
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

impl StepOp {
    /// +1 or -1.
    #[must_use]
    pub const fn delta(self) -> f64 {
        match self {
            StepOp::PreIncrement | StepOp::PostIncrement => 1.0,
            StepOp::PreDecrement | StepOp::PostDecrement => -1.0,
        }
    }

    /// Prefix forms yield the updated value, postfix forms the previous one.
    #[must_use]
    pub const fn is_prefix(self) -> bool {
        matches!(self, StepOp::PreIncrement | StepOp::PreDecrement)
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            StepOp::PreIncrement | StepOp::PostIncrement => "++",
            StepOp::PreDecrement | StepOp::PostDecrement => "--",
        }
    }
}

/// Methods callable on a card list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListMethod {
    /// Insert a card at the front.
    Push,
    /// Append a card at the bottom.
    SendBottom,
    /// Remove and return the front card.
    Pop,
    /// Remove the first occurrence of a card.
    Remove,
    /// Reorder the list with the game RNG.
    Shuffle,
}

impl ListMethod {
    /// Name as written in scripts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ListMethod::Push => "Push",
            ListMethod::SendBottom => "SendBottom",
            ListMethod::Pop => "Pop",
            ListMethod::Remove => "Remove",
            ListMethod::Shuffle => "Shuffle",
        }
    }

    /// Whether the method takes exactly one card argument (otherwise none).
    #[must_use]
    pub const fn takes_card(self) -> bool {
        matches!(self, ListMethod::Push | ListMethod::SendBottom | ListMethod::Remove)
    }
}

/// An expression node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Numeric literal. `None` if the parser recovered from a missing token.
    Number(Option<Token>),
    /// String literal; the lexeme may still carry its quotes.
    Text(Option<Token>),
    /// `true` / `false`.
    Boolean(Option<Token>),
    /// Read of a script-local variable.
    Variable(Token),
    /// Parenthesized expression.
    Group(Box<Expr>),
    Unary {
        op: UnaryOp,
        operator: Token,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        operator: Token,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `name = value`
    Assign { name: Token, value: Box<Expr> },
    /// `name++`, `--name`, ...
    Step {
        op: StepOp,
        name: Token,
        operator: Token,
    },
    /// Number of the player whose action triggered the effect.
    TriggerPlayer(Token),
    /// `Hand`, `FieldOfPlayer(2)`, `Board`, ...
    ///
    /// `player` is `None` for the sugar form, which targets the active player.
    ZoneAccess {
        zone: ZoneKind,
        player: Option<Box<Expr>>,
        access: Token,
    },
    /// `receiver.Method(arg)`
    MethodCall {
        receiver: Box<Expr>,
        method: ListMethod,
        name: Token,
        arg: Option<Box<Expr>>,
    },
}

impl Expr {
    pub fn number(lexeme: impl Into<String>) -> Self {
        Expr::Number(Some(Token::synthetic(lexeme)))
    }

    pub fn text(lexeme: impl Into<String>) -> Self {
        Expr::Text(Some(Token::synthetic(lexeme)))
    }

    pub fn boolean(value: bool) -> Self {
        Expr::Boolean(Some(Token::synthetic(if value { "true" } else { "false" })))
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(Token::synthetic(name))
    }

    pub fn group(inner: Expr) -> Self {
        Expr::Group(Box::new(inner))
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operator: Token::synthetic(op.symbol()),
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            operator: Token::synthetic(op.symbol()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Expr::Assign {
            name: Token::synthetic(name),
            value: Box::new(value),
        }
    }

    pub fn step(op: StepOp, name: impl Into<String>) -> Self {
        Expr::Step {
            op,
            name: Token::synthetic(name),
            operator: Token::synthetic(op.symbol()),
        }
    }

    pub fn trigger_player() -> Self {
        Expr::TriggerPlayer(Token::synthetic("TriggerPlayer"))
    }

    /// Sugar form: the active player's zone.
    pub fn zone(zone: ZoneKind) -> Self {
        Expr::ZoneAccess {
            zone,
            player: None,
            access: Token::synthetic(zone.name()),
        }
    }

    /// Explicit form: a given player's zone.
    pub fn zone_of(zone: ZoneKind, player: Expr) -> Self {
        Expr::ZoneAccess {
            zone,
            player: Some(Box::new(player)),
            access: Token::synthetic(format!("{}OfPlayer", zone.name())),
        }
    }

    pub fn call(receiver: Expr, method: ListMethod, arg: Option<Expr>) -> Self {
        Expr::MethodCall {
            receiver: Box::new(receiver),
            method,
            name: Token::synthetic(method.name()),
            arg: arg.map(Box::new),
        }
    }

    /// Best-effort source position of this node, for diagnostics.
    #[must_use]
    pub fn pos(&self) -> SourcePos {
        match self {
            Expr::Number(tok) | Expr::Text(tok) | Expr::Boolean(tok) => {
                tok.as_ref().map(|t| t.pos).unwrap_or_default()
            }
            Expr::Variable(tok) | Expr::TriggerPlayer(tok) => tok.pos,
            Expr::Group(inner) => inner.pos(),
            Expr::Unary { operator, .. }
            | Expr::Binary { operator, .. }
            | Expr::Step { operator, .. } => operator.pos,
            Expr::Assign { name, .. } => name.pos,
            Expr::ZoneAccess { access, .. } => access.pos,
            Expr::MethodCall { name, .. } => name.pos,
        }
    }
}

fn lexeme(tok: &Option<Token>) -> &str {
    tok.as_ref().map_or("<missing>", |t| t.lexeme.as_str())
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(tok) | Expr::Text(tok) | Expr::Boolean(tok) => {
                f.write_str(lexeme(tok))
            }
            Expr::Variable(tok) => f.write_str(&tok.lexeme),
            Expr::Group(inner) => write!(f, "({inner})"),
            Expr::Unary { op, operand, .. } => write!(f, "{}{operand}", op.symbol()),
            Expr::Binary {
                op, left, right, ..
            } => write!(f, "({left} {} {right})", op.symbol()),
            Expr::Assign { name, value } => write!(f, "{} = {value}", name.lexeme),
            Expr::Step { op, name, .. } => {
                if op.is_prefix() {
                    write!(f, "{}{}", op.symbol(), name.lexeme)
                } else {
                    write!(f, "{}{}", name.lexeme, op.symbol())
                }
            }
            Expr::TriggerPlayer(_) => f.write_str("TriggerPlayer"),
            Expr::ZoneAccess { zone, player, .. } => match player {
                Some(p) => write!(f, "{}OfPlayer({p})", zone.name()),
                None => f.write_str(zone.name()),
            },
            Expr::MethodCall {
                receiver,
                method,
                arg,
                ..
            } => match arg {
                Some(a) => write!(f, "{receiver}.{}({a})", method.name()),
                None => write!(f, "{receiver}.{}()", method.name()),
            },
        }
    }
}
