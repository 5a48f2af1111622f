//! Evaluator integration tests.
//!
//! These build expression trees the way a parser would, run them against a
//! reference `GameState`, and check values, variable effects and errors.

use ccg_script::core::{GameState, PlayerId};
use ccg_script::script::{
    BinaryOp, Environment, Evaluator, Expr, RuntimeErrorKind, SourcePos, StepOp, Token, UnaryOp,
    Value,
};
use proptest::prelude::*;

fn run(env: &mut Environment, expr: &Expr) -> Result<Value, ccg_script::RuntimeError> {
    let mut state = GameState::new(2, 42);
    Evaluator::new(env, &mut state).evaluate(expr)
}

fn run_fresh(expr: &Expr) -> Result<Value, ccg_script::RuntimeError> {
    run(&mut Environment::new(), expr)
}

fn bin(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::binary(op, left, right)
}

/// `(power * 2) >= 10` with power = 5.
#[test]
fn test_nested_arithmetic_comparison() {
    let mut env = Environment::new().with("power", Value::Number(5.0));
    let expr = bin(
        BinaryOp::GreaterEqual,
        bin(BinaryOp::Multiply, Expr::var("power"), Expr::number("2")),
        Expr::number("10"),
    );

    assert_eq!(expr.to_string(), "((power * 2) >= 10)");
    assert_eq!(run(&mut env, &expr).unwrap(), Value::Boolean(true));
}

#[test]
fn test_concat_spaced() {
    let expr = bin(BinaryOp::ConcatSpaced, Expr::text("\"foo\""), Expr::text("\"bar\""));
    assert_eq!(run_fresh(&expr).unwrap(), Value::from("foo bar"));
}

#[test]
fn test_concat_chain() {
    // ("Deal " @ "3") @@ "damage"
    let expr = bin(
        BinaryOp::ConcatSpaced,
        bin(BinaryOp::Concat, Expr::text("\"Deal \""), Expr::text("\"3\"")),
        Expr::text("\"damage\""),
    );
    assert_eq!(run_fresh(&expr).unwrap(), Value::from("Deal 3 damage"));
}

#[test]
fn test_mismatched_concat_is_located_at_operator() {
    let expr = Expr::Binary {
        op: BinaryOp::Concat,
        operator: Token::at("@", 4, 9),
        left: Box::new(Expr::text("\"x\"")),
        right: Box::new(Expr::number("1")),
    };

    let err = run_fresh(&expr).unwrap_err();
    assert_eq!(err.kind, RuntimeErrorKind::TypeMismatch);
    assert_eq!(err.message, "The operands must be string values");
    assert_eq!(err.pos, SourcePos::new(4, 9));
    assert_eq!(err.to_string(), "[4:9] The operands must be string values");
}

#[test]
fn test_logic_on_numbers_fails() {
    let expr = bin(BinaryOp::Or, Expr::number("1"), Expr::boolean(true));
    let err = run_fresh(&expr).unwrap_err();
    assert_eq!(err.message, "The operands must be boolean values");
}

#[test]
fn test_arithmetic_on_text_fails() {
    let expr = bin(BinaryOp::Add, Expr::text("\"1\""), Expr::number("1"));
    let err = run_fresh(&expr).unwrap_err();
    assert_eq!(err.message, "The operands must be numeric values");
}

#[test]
fn test_logic_does_not_short_circuit() {
    // false && (x = true): the assignment still runs.
    let mut env = Environment::new();
    let expr = bin(
        BinaryOp::And,
        Expr::boolean(false),
        Expr::group(Expr::assign("x", Expr::boolean(true))),
    );

    assert_eq!(run(&mut env, &expr).unwrap(), Value::Boolean(false));
    assert_eq!(env.lookup("x"), Some(&Value::Boolean(true)));
}

#[test]
fn test_right_operand_error_after_left_side_effect() {
    // (x = 1) + missing: left side runs, then the right side fails.
    let mut env = Environment::new();
    let expr = bin(
        BinaryOp::Add,
        Expr::group(Expr::assign("x", Expr::number("1"))),
        Expr::var("missing"),
    );

    let err = run(&mut env, &expr).unwrap_err();
    assert_eq!(err.kind, RuntimeErrorKind::UndefinedVariable);
    assert_eq!(err.message, "Undefined variable 'missing'");
    assert!(env.contains("x"));
}

#[test]
fn test_assignment_returns_value() {
    let mut env = Environment::new();
    let value = run(&mut env, &Expr::assign("x", Expr::number("3"))).unwrap();

    assert_eq!(value, Value::Number(3.0));
    assert_eq!(env.lookup("x"), Some(&Value::Number(3.0)));
}

#[test]
fn test_chained_assignment() {
    // a = b = 4
    let mut env = Environment::new();
    let expr = Expr::assign("a", Expr::assign("b", Expr::number("4")));

    assert_eq!(run(&mut env, &expr).unwrap(), Value::Number(4.0));
    assert_eq!(env.lookup("a"), Some(&Value::Number(4.0)));
    assert_eq!(env.lookup("b"), Some(&Value::Number(4.0)));
}

#[test]
fn test_null_assignment_leaves_binding_untouched() {
    let mut env = Environment::new().with("x", Value::Number(1.0));
    let value = run(&mut env, &Expr::assign("x", Expr::Number(None))).unwrap();

    assert_eq!(value, Value::Null);
    assert_eq!(env.lookup("x"), Some(&Value::Number(1.0)));

    // An unbound name stays unbound.
    run(&mut env, &Expr::assign("y", Expr::Text(None))).unwrap();
    assert!(!env.contains("y"));
}

#[test]
fn test_post_increment_returns_old_value() {
    let mut env = Environment::new().with("i", Value::Number(5.0));

    let value = run(&mut env, &Expr::step(StepOp::PostIncrement, "i")).unwrap();
    assert_eq!(value, Value::Number(5.0));
    assert_eq!(env.lookup("i"), Some(&Value::Number(6.0)));
}

#[test]
fn test_assign_then_step_then_read() {
    let mut env = Environment::new();
    run(&mut env, &Expr::assign("x", Expr::number("5"))).unwrap();
    assert_eq!(run(&mut env, &Expr::var("x")).unwrap(), Value::Number(5.0));

    assert_eq!(run(&mut env, &Expr::step(StepOp::PostIncrement, "x")).unwrap(), Value::Number(5.0));
    assert_eq!(run(&mut env, &Expr::var("x")).unwrap(), Value::Number(6.0));
}

#[test]
fn test_undefined_variable_kind_is_stable() {
    let mut env = Environment::new();
    let before = run(&mut env, &Expr::var("ghost")).unwrap_err();

    for name in ["a", "b", "ghosts", "Ghost"] {
        run(&mut env, &Expr::assign(name, Expr::boolean(true))).unwrap();
    }
    let after = run(&mut env, &Expr::var("ghost")).unwrap_err();

    assert_eq!(before.kind, RuntimeErrorKind::UndefinedVariable);
    assert_eq!(before, after);
}

#[test]
fn test_pre_decrement_subtracts() {
    let mut env = Environment::new().with("i", Value::Number(5.0));

    let value = run(&mut env, &Expr::step(StepOp::PreDecrement, "i")).unwrap();
    assert_eq!(value, Value::Number(4.0));
    assert_eq!(env.lookup("i"), Some(&Value::Number(4.0)));
}

#[test]
fn test_step_undefined_variable_is_located() {
    let expr = Expr::Step {
        op: StepOp::PostDecrement,
        name: Token::at("count", 2, 1),
        operator: Token::at("--", 2, 6),
    };
    let err = run_fresh(&expr).unwrap_err();
    assert_eq!(err.kind, RuntimeErrorKind::UndefinedVariable);
    assert_eq!(err.pos, SourcePos::new(2, 1));
}

#[test]
fn test_unary() {
    let not = Expr::unary(UnaryOp::Not, Expr::boolean(false));
    assert_eq!(run_fresh(&not).unwrap(), Value::Boolean(true));

    let neg = Expr::unary(UnaryOp::Negate, Expr::text("\"5\""));
    let err = run_fresh(&neg).unwrap_err();
    assert_eq!(err.kind, RuntimeErrorKind::TypeMismatch);
}

#[test]
fn test_equality_never_fails() {
    let cases = [
        (Expr::number("1"), Expr::text("\"1\""), false),
        (Expr::boolean(true), Expr::boolean(true), true),
        (Expr::text("\"a\""), Expr::text("\"a\""), true),
        (Expr::Number(None), Expr::Text(None), true),
        (Expr::Number(None), Expr::boolean(false), false),
    ];

    for (left, right, expected) in cases {
        let eq = bin(BinaryOp::Equal, left.clone(), right.clone());
        let ne = bin(BinaryOp::NotEqual, left, right);
        assert_eq!(run_fresh(&eq).unwrap(), Value::Boolean(expected));
        assert_eq!(run_fresh(&ne).unwrap(), Value::Boolean(!expected));
    }
}

#[test]
fn test_card_equality_by_identity() {
    let mut state = GameState::new(2, 42);
    let p1 = PlayerId::new(0);
    let a = state.spawn_card("Geralt", p1, ccg_script::ZoneKind::Hand);
    let b = state.spawn_card("Geralt", p1, ccg_script::ZoneKind::Hand);

    let mut env = Environment::new()
        .with("a", Value::Card(a))
        .with("a2", Value::Card(a))
        .with("b", Value::Card(b));
    let mut eval = Evaluator::new(&mut env, &mut state);

    let same = bin(BinaryOp::Equal, Expr::var("a"), Expr::var("a2"));
    let other = bin(BinaryOp::Equal, Expr::var("a"), Expr::var("b"));
    assert_eq!(eval.evaluate(&same).unwrap(), Value::Boolean(true));
    assert_eq!(eval.evaluate(&other).unwrap(), Value::Boolean(false));
}

#[test]
fn test_trigger_player_follows_turn() {
    let mut state = GameState::new(3, 42);
    let mut env = Environment::new();

    state.pass_turn();
    state.pass_turn();
    let value = Evaluator::new(&mut env, &mut state)
        .evaluate(&Expr::trigger_player())
        .unwrap();
    assert_eq!(value, Value::Number(3.0));
}

#[test]
fn test_expression_tree_serde() {
    let expr = Expr::assign(
        "dmg",
        bin(BinaryOp::Power, Expr::number("2"), Expr::var("level")),
    );

    let json = serde_json::to_string(&expr).unwrap();
    let restored: Expr = serde_json::from_str(&json).unwrap();
    assert_eq!(expr, restored);

    let mut env = Environment::new().with("level", Value::Number(3.0));
    assert_eq!(run(&mut env, &restored).unwrap(), Value::Number(8.0));
}

fn number(n: f64) -> Expr {
    Expr::number(format!("{n:?}"))
}

proptest! {
    #[test]
    fn prop_boolean_operators_match_truth_table(a in any::<bool>(), b in any::<bool>()) {
        let and = bin(BinaryOp::And, Expr::boolean(a), Expr::boolean(b));
        let or = bin(BinaryOp::Or, Expr::boolean(a), Expr::boolean(b));
        let not = Expr::unary(UnaryOp::Not, Expr::boolean(a));

        prop_assert_eq!(run_fresh(&and).unwrap(), Value::Boolean(a && b));
        prop_assert_eq!(run_fresh(&or).unwrap(), Value::Boolean(a || b));
        prop_assert_eq!(run_fresh(&not).unwrap(), Value::Boolean(!a));
    }

    #[test]
    fn prop_arithmetic_is_ieee(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        let cases = [
            (BinaryOp::Add, a + b),
            (BinaryOp::Subtract, a - b),
            (BinaryOp::Multiply, a * b),
            (BinaryOp::Divide, a / b),
            (BinaryOp::Power, a.powf(b)),
        ];

        for (op, expected) in cases {
            let value = run_fresh(&bin(op, number(a), number(b))).unwrap();
            if expected.is_nan() {
                prop_assert!(value.as_number().is_some_and(f64::is_nan));
            } else {
                prop_assert_eq!(value, Value::Number(expected));
            }
        }
    }

    #[test]
    fn prop_equality_is_reflexive(n in any::<f64>()) {
        let mut env = Environment::new().with("n", Value::Number(n));
        let expr = bin(BinaryOp::Equal, Expr::var("n"), Expr::var("n"));
        prop_assert_eq!(run(&mut env, &expr).unwrap(), Value::Boolean(true));
    }

    #[test]
    fn prop_comparisons_agree(a in -1000i32..1000, b in -1000i32..1000) {
        let (a, b) = (f64::from(a), f64::from(b));
        let gt = run_fresh(&bin(BinaryOp::Greater, number(a), number(b))).unwrap();
        let le = run_fresh(&bin(BinaryOp::LessEqual, number(a), number(b))).unwrap();

        prop_assert_eq!(gt.as_bool(), Some(a > b));
        prop_assert_eq!(le.as_bool(), Some(!(a > b)));
    }
}
