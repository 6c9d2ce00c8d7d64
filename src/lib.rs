//! # Fluxion AST
//!
//! The abstract-syntax-tree layer of the Fluxion compiler front end.
//!
//! [Fluxion](https://github.com/fluxion-lang/fluxion) is a domain-specific
//! modeling language describing dynamical-system equations and the control
//! flow around them. This crate defines the immutable, strongly-typed tree
//! that the parser produces and that the semantic checker, code generator
//! and pretty-printer consume.
//!
//! It deliberately contains _no_ lexer, parser, checker or generator;
//! those are separate stages built on top of this crate. What it does
//! contain:
//!
//! * the closed set of node types ([`Expr`], [`Stmt`] and friends),
//! * incremental [builders](crate::ast::builder) used by the parser while a
//!   node is only partially recognized,
//! * the canonical render-to-text capability (every complete node
//!   implements [`Display`][std::fmt::Display]),
//! * the [`AstError`] contract-violation taxonomy.
//!
//! # Example
//!
//! ```
//! use fluxion_ast::{BinaryExpr, BinaryOp, ElifClause, Expr, Stmt, StmtBlock};
//!
//! // elif x > 0:
//! //     y = 1
//! let condition = Expr::Binary(Box::new(BinaryExpr {
//!     op: BinaryOp::Greater,
//!     lhs: Expr::Variable("x".into()),
//!     rhs: Expr::IntegerConstant(0),
//! }));
//! let body = StmtBlock::new([Stmt::assign("y", Expr::IntegerConstant(1))]);
//!
//! let clause = ElifClause::new(condition, body);
//!
//! assert_eq!(clause.to_string(), "elif x > 0:\ny = 1");
//! ```

pub mod ast;
pub mod types;


/// The system integer type. It is defined as [`i64`].
pub type INT = i64;

/// The system floating-point type. It is defined as [`f64`].
pub type FLOAT = f64;

/// An identifier in Fluxion.
///
/// [`SmartString`](https://crates.io/crates/smartstring) is used because most
/// identifiers are ASCII and short, fewer than 24 characters, so they can be
/// stored inline.
pub type Identifier = SmartString;

/// Alias to [`smartstring::SmartString<LazyCompact>`].
type SmartString = smartstring::SmartString<smartstring::LazyCompact>;

pub use ast::{
    AssignOp, AssignmentStmt, BinaryExpr, BinaryOp, DeclFlags, DeclarationStmt, ElifClause,
    ElifClauseBuilder, Expr, FnCallExpr, ForStmt, ForStmtBuilder, Ident, IfStmt, NumericLiteral,
    Stmt, StmtBlock, StmtBlockContainer, UnaryOp, WhileStmt,
};
pub use types::{AstError, AstResultOf};
