//! Module defining the AST (abstract syntax tree).

pub mod builder;
pub mod expr;
pub mod flags;
pub mod ident;
pub mod stmt;

pub use builder::{ElifClauseBuilder, ForStmtBuilder};
pub use expr::{BinaryExpr, BinaryOp, Expr, FnCallExpr, NumericLiteral, UnaryOp};
pub use flags::DeclFlags;
pub use ident::Ident;
pub use stmt::{
    AssignOp, AssignmentStmt, DeclarationStmt, ElifClause, ForStmt, IfStmt, Stmt, StmtBlock,
    StmtBlockContainer, WhileStmt,
};
