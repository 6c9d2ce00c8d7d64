//! Module defining statement nodes.

use crate::ast::{DeclFlags, Expr, FnCallExpr, Ident, NumericLiteral};
use crate::types::{AstError, AstResultOf};
use smallvec::SmallVec;
use std::{fmt, iter::FromIterator, ops::Deref};
use thin_vec::ThinVec;

/// The underlying container type for the statements of a [`StmtBlock`].
pub type StmtBlockContainer = SmallVec<[Stmt; 3]>;

/// An ordered sequence of statements executed together.
///
/// A block renders as its statements joined by single newlines; it applies
/// no indentation or reformatting of its own.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct StmtBlock {
    block: StmtBlockContainer,
}

impl StmtBlock {
    /// A [`StmtBlock`] with no statements.
    pub const NONE: Self = Self {
        block: StmtBlockContainer::new_const(),
    };

    /// Create a new [`StmtBlock`].
    #[inline]
    pub fn new(statements: impl IntoIterator<Item = Stmt>) -> Self {
        Self {
            block: statements.into_iter().collect(),
        }
    }
    /// Number of statements in the block.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.block.len()
    }
    /// Is the block empty?
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }
    /// Get the statements of the block.
    #[inline(always)]
    #[must_use]
    pub fn statements(&self) -> &[Stmt] {
        &self.block
    }
    /// Iterate over the statements of the block.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Stmt> {
        self.block.iter()
    }
}

impl Deref for StmtBlock {
    type Target = [Stmt];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.block
    }
}

impl FromIterator<Stmt> for StmtBlock {
    #[inline]
    fn from_iter<T: IntoIterator<Item = Stmt>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for StmtBlock {
    type Item = Stmt;
    type IntoIter = smallvec::IntoIter<[Stmt; 3]>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.block.into_iter()
    }
}

impl<'a> IntoIterator for &'a StmtBlock {
    type Item = &'a Stmt;
    type IntoIter = std::slice::Iter<'a, Stmt>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.block.iter()
    }
}

impl fmt::Display for StmtBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.block.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for stmt in iter {
                write!(f, "\n{stmt}")?;
            }
        }
        Ok(())
    }
}

/// One `elif` alternative of a conditional statement: a guarding condition
/// plus the block executed when it holds.
///
/// An `elif` clause carries no terminator of its own; it is delimited by the
/// next sibling clause or by the parent statement's `end`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElifClause {
    condition: Expr,
    body: StmtBlock,
}

impl ElifClause {
    /// Node kind, as reported in contract-violation errors.
    pub(crate) const KIND: &'static str = "elif clause";

    /// Create a new [`ElifClause`].
    #[inline(always)]
    pub fn new(condition: Expr, body: StmtBlock) -> Self {
        Self { condition, body }
    }
    /// The boolean condition guarding the clause.
    #[inline(always)]
    #[must_use]
    pub const fn condition(&self) -> &Expr {
        &self.condition
    }
    /// The statements executed when the condition holds.
    #[inline(always)]
    #[must_use]
    pub const fn body(&self) -> &StmtBlock {
        &self.body
    }
}

impl fmt::Display for ElifClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "elif {}:\n{}", self.condition, self.body)
    }
}

/// A bounded counting loop:
/// `for <variable> in <from>...<to> step <step>: <body> end`.
///
/// Range endpoints are inclusive and stay unevaluated at this layer. The
/// step is a signed numeric literal; zero is the "not yet set" placeholder
/// and is rejected at construction, so no complete loop node with a
/// degenerate step ever reaches downstream stages.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForStmt {
    variable: Ident,
    from: Expr,
    to: Expr,
    step: NumericLiteral,
    body: StmtBlock,
}

impl ForStmt {
    /// Node kind, as reported in contract-violation errors.
    pub(crate) const KIND: &'static str = "counting loop";

    /// Create a new [`ForStmt`].
    ///
    /// Returns [`AstError::MissingChild`] when the variable name is empty
    /// and [`AstError::DegenerateStep`] when the step is zero.
    pub fn new(
        variable: impl Into<Ident>,
        from: Expr,
        to: Expr,
        step: NumericLiteral,
        body: StmtBlock,
    ) -> AstResultOf<Self> {
        let variable = variable.into();
        if variable.is_empty() {
            return Err(AstError::MissingChild(Self::KIND, "variable"));
        }
        if step.is_zero() {
            return Err(AstError::DegenerateStep(variable.name));
        }
        Ok(Self {
            variable,
            from,
            to,
            step,
            body,
        })
    }
    /// The variable bound for the duration of the loop body.
    #[inline(always)]
    #[must_use]
    pub const fn variable(&self) -> &Ident {
        &self.variable
    }
    /// The inclusive lower bound of the range.
    #[inline(always)]
    #[must_use]
    pub const fn from(&self) -> &Expr {
        &self.from
    }
    /// The inclusive upper bound of the range.
    #[inline(always)]
    #[must_use]
    pub const fn to(&self) -> &Expr {
        &self.to
    }
    /// The step literal. Guaranteed non-zero.
    #[inline(always)]
    #[must_use]
    pub const fn step(&self) -> NumericLiteral {
        self.step
    }
    /// The loop body.
    #[inline(always)]
    #[must_use]
    pub const fn body(&self) -> &StmtBlock {
        &self.body
    }
}

impl fmt::Display for ForStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "for {} in {}...{} step {}:\n{}\nend",
            self.variable, self.from, self.to, self.step, self.body
        )
    }
}

/// A multi-branch conditional statement:
/// `if` clause, zero or more `elif` clauses, optional `else`, closed by
/// `end`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IfStmt {
    /// The condition of the leading `if` clause.
    pub condition: Expr,
    /// The block of the leading `if` clause.
    pub body: StmtBlock,
    /// Alternative `elif` clauses, in source order.
    pub elif_clauses: ThinVec<ElifClause>,
    /// The optional trailing `else` block.
    pub else_body: Option<StmtBlock>,
}

impl IfStmt {
    /// Create a new [`IfStmt`] with no `elif` or `else` branches.
    #[inline]
    pub fn new(condition: Expr, body: StmtBlock) -> Self {
        Self {
            condition,
            body,
            elif_clauses: ThinVec::new(),
            else_body: None,
        }
    }
}

impl fmt::Display for IfStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if {}:\n{}", self.condition, self.body)?;
        for clause in &self.elif_clauses {
            write!(f, "\n{clause}")?;
        }
        if let Some(else_body) = &self.else_body {
            write!(f, "\nelse:\n{else_body}")?;
        }
        f.write_str("\nend")
    }
}

/// A `while` loop: `while <condition>: <body> end`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhileStmt {
    /// The continuation condition.
    pub condition: Expr,
    /// The loop body.
    pub body: StmtBlock,
}

impl WhileStmt {
    /// Create a new [`WhileStmt`].
    #[inline(always)]
    pub fn new(condition: Expr, body: StmtBlock) -> Self {
        Self { condition, body }
    }
}

impl fmt::Display for WhileStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "while {}:\n{}\nend", self.condition, self.body)
    }
}

/// A variable declaration, e.g. `recordable v, w real = 0.0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclarationStmt {
    /// Modifier keywords.
    pub flags: DeclFlags,
    /// Declared names. At least one.
    pub names: ThinVec<Ident>,
    /// Name of the declared type.
    pub type_name: Ident,
    /// The optional initializing expression.
    pub value: Option<Expr>,
}

impl DeclarationStmt {
    /// Create a new [`DeclarationStmt`].
    #[inline]
    pub fn new(
        flags: DeclFlags,
        names: impl IntoIterator<Item = Ident>,
        type_name: impl Into<Ident>,
        value: Option<Expr>,
    ) -> Self {
        Self {
            flags,
            names: names.into_iter().collect(),
            type_name: type_name.into(),
            value,
        }
    }
}

impl fmt::Display for DeclarationStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flags.keywords())?;
        let mut iter = self.names.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for name in iter {
                write!(f, ", {name}")?;
            }
        }
        write!(f, " {}", self.type_name)?;
        if let Some(value) = &self.value {
            write!(f, " = {value}")?;
        }
        Ok(())
    }
}

/// An assignment operator.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
}

impl AssignOp {
    /// Get the operator's literal source syntax.
    #[must_use]
    pub const fn literal_syntax(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
        }
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal_syntax())
    }
}

/// An assignment statement, e.g. `x += 1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentStmt {
    /// The assigned variable.
    pub target: Ident,
    /// The assignment operator.
    pub op: AssignOp,
    /// The assigned value.
    pub value: Expr,
}

impl fmt::Display for AssignmentStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.target, self.op, self.value)
    }
}

/// A statement.
///
/// Like [`Expr`], a closed set with one variant per grammar production.
/// Compound statements own their child nodes exclusively; the tree is
/// strict, with no sharing and no back-references.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Stmt {
    /// A variable declaration.
    Declaration(Box<DeclarationStmt>),
    /// An assignment.
    Assignment(Box<AssignmentStmt>),
    /// A standalone function call.
    FnCall(Box<FnCallExpr>),
    /// An `if` .. `elif` .. `else` conditional.
    If(Box<IfStmt>),
    /// A bounded counting loop.
    For(Box<ForStmt>),
    /// A `while` loop.
    While(Box<WhileStmt>),
    /// A `return` statement with an optional value.
    Return(Option<Expr>),
}

impl Stmt {
    /// Create a plain `=` assignment.
    #[inline]
    pub fn assign(target: impl Into<Ident>, value: Expr) -> Self {
        Self::Assignment(Box::new(AssignmentStmt {
            target: target.into(),
            op: AssignOp::Assign,
            value,
        }))
    }
    /// Is the statement a compound statement (one carrying a nested block)?
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        match self {
            Self::If(..) | Self::For(..) | Self::While(..) => true,
            _ => false,
        }
    }
}

impl From<ForStmt> for Stmt {
    #[inline(always)]
    fn from(stmt: ForStmt) -> Self {
        Self::For(Box::new(stmt))
    }
}

impl From<WhileStmt> for Stmt {
    #[inline(always)]
    fn from(stmt: WhileStmt) -> Self {
        Self::While(Box::new(stmt))
    }
}

impl From<IfStmt> for Stmt {
    #[inline(always)]
    fn from(stmt: IfStmt) -> Self {
        Self::If(Box::new(stmt))
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration(x) => fmt::Display::fmt(x, f),
            Self::Assignment(x) => fmt::Display::fmt(x, f),
            Self::FnCall(x) => fmt::Display::fmt(x, f),
            Self::If(x) => fmt::Display::fmt(x, f),
            Self::For(x) => fmt::Display::fmt(x, f),
            Self::While(x) => fmt::Display::fmt(x, f),
            Self::Return(None) => f.write_str("return"),
            Self::Return(Some(value)) => write!(f, "return {value}"),
        }
    }
}
