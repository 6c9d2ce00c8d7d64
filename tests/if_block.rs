use fluxion_ast::{BinaryOp, ElifClause, Expr, IfStmt, Stmt, StmtBlock, UnaryOp};

#[test]
fn test_elif_clause_render() {
    let clause = ElifClause::new(
        Expr::binary(
            BinaryOp::Greater,
            Expr::Variable("x".into()),
            Expr::IntegerConstant(0),
        ),
        StmtBlock::new([Stmt::assign("y", Expr::IntegerConstant(1))]),
    );

    assert_eq!(clause.to_string(), "elif x > 0:\ny = 1");

    // Rendering is pure: a second call yields identical text.
    assert_eq!(clause.to_string(), clause.to_string());
}

#[test]
fn test_elif_clause_accessors() {
    let condition = Expr::binary(
        BinaryOp::Less,
        Expr::Variable("t".into()),
        Expr::FloatConstant(1.5),
    );
    let body = StmtBlock::new([Stmt::assign("u", Expr::IntegerConstant(2))]);

    let clause = ElifClause::new(condition.clone(), body.clone());

    assert_eq!(*clause.condition(), condition);
    assert_eq!(*clause.body(), body);

    // Accessors never mutate: two reads observe the same children.
    assert_eq!(clause.condition(), clause.condition());
    assert_eq!(clause.body(), clause.body());
}

#[test]
fn test_elif_clause_no_terminator() {
    let clause = ElifClause::new(Expr::BoolConstant(true), StmtBlock::NONE);

    // Clauses are delimited by their parent statement, not self-terminated.
    assert!(!clause.to_string().ends_with("end"));
    assert_eq!(clause.to_string(), "elif true:\n");
}

#[test]
fn test_if_stmt_render() {
    let mut stmt = IfStmt::new(
        Expr::binary(
            BinaryOp::Greater,
            Expr::Variable("x".into()),
            Expr::IntegerConstant(0),
        ),
        StmtBlock::new([Stmt::assign("y", Expr::IntegerConstant(1))]),
    );
    stmt.elif_clauses.push(ElifClause::new(
        Expr::binary(
            BinaryOp::Less,
            Expr::Variable("x".into()),
            Expr::IntegerConstant(0),
        ),
        StmtBlock::new([Stmt::assign("y", Expr::IntegerConstant(2))]),
    ));
    stmt.else_body = Some(StmtBlock::new([Stmt::assign(
        "y",
        Expr::IntegerConstant(3),
    )]));

    assert_eq!(
        stmt.to_string(),
        "if x > 0:\ny = 1\nelif x < 0:\ny = 2\nelse:\ny = 3\nend"
    );
}

#[test]
fn test_if_stmt_without_alternatives() {
    let stmt = IfStmt::new(
        Expr::unary(UnaryOp::Not, Expr::Variable("ready".into())),
        StmtBlock::new([Stmt::Return(None)]),
    );

    assert_eq!(stmt.to_string(), "if not ready:\nreturn\nend");
}

#[test]
fn test_if_stmt_as_statement() {
    let stmt: Stmt = IfStmt::new(
        Expr::BoolConstant(false),
        StmtBlock::new([Stmt::Return(Some(Expr::IntegerConstant(0)))]),
    )
    .into();

    assert!(stmt.is_compound());
    assert_eq!(stmt.to_string(), "if false:\nreturn 0\nend");
}
