use fluxion_ast::{BinaryOp, Expr, FnCallExpr, UnaryOp};

#[test]
fn test_constants_render() {
    assert_eq!(Expr::IntegerConstant(42).to_string(), "42");
    assert_eq!(Expr::IntegerConstant(-7).to_string(), "-7");
    assert_eq!(Expr::FloatConstant(3.25).to_string(), "3.25");
    assert_eq!(Expr::FloatConstant(2.0).to_string(), "2.0");
    assert_eq!(Expr::BoolConstant(true).to_string(), "true");
    assert_eq!(Expr::BoolConstant(false).to_string(), "false");
    assert_eq!(Expr::Variable("V_m".into()).to_string(), "V_m");
}

#[test]
fn test_binary_render() {
    let expr = Expr::binary(
        BinaryOp::Add,
        Expr::Variable("a".into()),
        Expr::binary(
            BinaryOp::Multiply,
            Expr::Variable("b".into()),
            Expr::IntegerConstant(2),
        ),
    );

    assert_eq!(expr.to_string(), "a + b * 2");
}

#[test]
fn test_grouping_restores_parentheses() {
    let expr = Expr::binary(
        BinaryOp::Multiply,
        Expr::Grouping(Box::new(Expr::binary(
            BinaryOp::Add,
            Expr::Variable("a".into()),
            Expr::Variable("b".into()),
        ))),
        Expr::IntegerConstant(2),
    );

    assert_eq!(expr.to_string(), "(a + b) * 2");
}

#[test]
fn test_unary_render() {
    assert_eq!(
        Expr::unary(UnaryOp::Minus, Expr::Variable("x".into())).to_string(),
        "-x"
    );
    assert_eq!(
        Expr::unary(UnaryOp::Not, Expr::Variable("done".into())).to_string(),
        "not done"
    );
}

#[test]
fn test_logical_and_comparison_render() {
    let expr = Expr::binary(
        BinaryOp::And,
        Expr::binary(
            BinaryOp::GreaterEq,
            Expr::Variable("x".into()),
            Expr::IntegerConstant(0),
        ),
        Expr::binary(
            BinaryOp::NotEqual,
            Expr::Variable("y".into()),
            Expr::IntegerConstant(1),
        ),
    );

    assert_eq!(expr.to_string(), "x >= 0 and y != 1");
}

#[test]
fn test_fn_call_render() {
    let call = FnCallExpr::new(
        "max",
        [Expr::Variable("a".into()), Expr::Variable("b".into())],
    );
    assert_eq!(call.to_string(), "max(a, b)");

    let empty = FnCallExpr::new("emit_spike", []);
    assert_eq!(empty.to_string(), "emit_spike()");

    let nested = Expr::FnCall(Box::new(FnCallExpr::new(
        "exp",
        [Expr::binary(
            BinaryOp::Divide,
            Expr::unary(UnaryOp::Minus, Expr::Variable("t".into())),
            Expr::Variable("tau".into()),
        )],
    )));
    assert_eq!(nested.to_string(), "exp(-t / tau)");
}

#[test]
fn test_operator_literal_syntax() {
    assert_eq!(BinaryOp::Power.literal_syntax(), "**");
    assert_eq!(BinaryOp::Modulo.literal_syntax(), "%");
    assert_eq!(BinaryOp::And.literal_syntax(), "and");
    assert_eq!(BinaryOp::Or.literal_syntax(), "or");
    assert_eq!(UnaryOp::Not.literal_syntax(), "not");

    assert!(BinaryOp::Equal.is_comparison());
    assert!(!BinaryOp::Add.is_comparison());
}

#[test]
fn test_expr_inspection() {
    assert!(Expr::IntegerConstant(1).is_constant());
    assert!(Expr::FloatConstant(0.5).is_constant());
    assert!(!Expr::Variable("x".into()).is_constant());

    assert_eq!(
        Expr::Variable("tau_m".into()).get_variable_name(),
        Some("tau_m")
    );
    assert_eq!(Expr::IntegerConstant(1).get_variable_name(), None);
}
