//! Module defining expression nodes.

use crate::ast::Ident;
use crate::{FLOAT, INT};
use num_traits::Zero;
use std::fmt;
use thin_vec::ThinVec;

/// A signed numeric literal, either integer or floating-point.
///
/// This is the only legal form for a counting loop step: the step is a
/// literal in the grammar, never a general expression.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericLiteral {
    /// An integer literal.
    Integer(INT),
    /// A floating-point literal.
    Float(FLOAT),
}

impl NumericLiteral {
    /// Is the literal exactly zero?
    ///
    /// For a counting loop step, zero is the "not yet set" placeholder and
    /// never a meaningful value.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n.is_zero(),
            Self::Float(v) => v.is_zero(),
        }
    }
    /// Is the literal negative?
    #[inline]
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Integer(n) => n < 0,
            Self::Float(v) => v < 0.0,
        }
    }
}

/// The zero placeholder standing in for a step that has not been set.
impl Default for NumericLiteral {
    #[inline(always)]
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<INT> for NumericLiteral {
    #[inline(always)]
    fn from(value: INT) -> Self {
        Self::Integer(value)
    }
}

impl From<FLOAT> for NumericLiteral {
    #[inline(always)]
    fn from(value: FLOAT) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for NumericLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => fmt::Display::fmt(n, f),
            // Keep the decimal point so the literal reads back as a float.
            Self::Float(v) => {
                fmt::Display::fmt(v, f)?;
                if v.is_finite() && v.fract().is_zero() {
                    f.write_str(".0")?;
                }
                Ok(())
            }
        }
    }
}

/// A unary operator.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum UnaryOp {
    /// `-`
    Minus,
    /// `not`
    Not,
}

impl UnaryOp {
    /// Get the operator's literal source syntax.
    #[must_use]
    pub const fn literal_syntax(self) -> &'static str {
        match self {
            Self::Minus => "-",
            Self::Not => "not",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal_syntax())
    }
}

/// A binary operator.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `**`
    Power,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `and`
    And,
    /// `or`
    Or,
}

impl BinaryOp {
    /// Get the operator's literal source syntax.
    #[must_use]
    pub const fn literal_syntax(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "**",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "and",
            Self::Or => "or",
        }
    }
    /// Does the operator yield a boolean?
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        match self {
            Self::Less
            | Self::LessEq
            | Self::Greater
            | Self::GreaterEq
            | Self::Equal
            | Self::NotEqual => true,
            _ => false,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal_syntax())
    }
}

/// A binary expression: `lhs op rhs`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryExpr {
    /// The operator.
    pub op: BinaryOp,
    /// LHS expression.
    pub lhs: Expr,
    /// RHS expression.
    pub rhs: Expr,
}

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

/// A function call, either an expression or a standalone statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FnCallExpr {
    /// Name of the called function.
    pub name: Ident,
    /// List of argument expressions.
    pub args: ThinVec<Expr>,
}

impl FnCallExpr {
    /// Create a new [`FnCallExpr`].
    #[inline]
    pub fn new(name: impl Into<Ident>, args: impl IntoIterator<Item = Expr>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }
}

impl fmt::Display for FnCallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        let mut iter = self.args.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for arg in iter {
                write!(f, ", {arg}")?;
            }
        }
        f.write_str(")")
    }
}

/// A syntactic expression.
///
/// One variant per grammar production, so tree walkers stay exhaustive and
/// compiler-checked. Expressions are immutable once parsed; no evaluation
/// happens at this layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Expr {
    /// An integer constant.
    IntegerConstant(INT),
    /// A floating-point constant.
    FloatConstant(FLOAT),
    /// A boolean constant.
    BoolConstant(bool),
    /// A variable access.
    Variable(Ident),
    /// A unary operation.
    Unary(UnaryOp, Box<Expr>),
    /// A binary operation.
    Binary(Box<BinaryExpr>),
    /// A function call.
    FnCall(Box<FnCallExpr>),
    /// A parenthesized sub-expression.
    ///
    /// Kept explicit so rendering restores the source's bracketing instead
    /// of re-deriving precedence.
    Grouping(Box<Expr>),
}

impl Expr {
    /// Create a binary operation.
    #[inline]
    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Self::Binary(Box::new(BinaryExpr { op, lhs, rhs }))
    }
    /// Create a unary operation.
    #[inline]
    pub fn unary(op: UnaryOp, operand: Self) -> Self {
        Self::Unary(op, Box::new(operand))
    }
    /// Is the expression a constant literal?
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        match self {
            Self::IntegerConstant(..) | Self::FloatConstant(..) | Self::BoolConstant(..) => true,
            _ => false,
        }
    }
    /// Return the variable name if the expression is a plain variable access.
    #[must_use]
    pub fn get_variable_name(&self) -> Option<&str> {
        match self {
            Self::Variable(x) => Some(x.as_str()),
            _ => None,
        }
    }
}

impl From<NumericLiteral> for Expr {
    #[inline]
    fn from(value: NumericLiteral) -> Self {
        match value {
            NumericLiteral::Integer(n) => Self::IntegerConstant(n),
            NumericLiteral::Float(v) => Self::FloatConstant(v),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntegerConstant(n) => fmt::Display::fmt(n, f),
            Self::FloatConstant(v) => fmt::Display::fmt(&NumericLiteral::Float(*v), f),
            Self::BoolConstant(b) => f.write_str(if *b { "true" } else { "false" }),
            Self::Variable(x) => fmt::Display::fmt(x, f),
            Self::Unary(UnaryOp::Minus, operand) => write!(f, "-{operand}"),
            Self::Unary(UnaryOp::Not, operand) => write!(f, "not {operand}"),
            Self::Binary(x) => fmt::Display::fmt(x, f),
            Self::FnCall(x) => fmt::Display::fmt(x, f),
            Self::Grouping(inner) => write!(f, "({inner})"),
        }
    }
}
