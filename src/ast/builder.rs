//! Incremental node builders used by the parser.
//!
//! While a grammar production is only partially recognized, required child
//! nodes are still absent. Builders make that `Building` state explicit:
//! every required field is optional here, and the single [`finalize`]
//! transition is the only way to obtain a complete node. Complete nodes
//! have no optional fields left, so nothing downstream ever needs to check
//! for absent children again.
//!
//! [`finalize`]: ElifClauseBuilder::finalize

use crate::ast::{ElifClause, Expr, ForStmt, Ident, NumericLiteral, StmtBlock};
use crate::types::{AstError, AstResultOf};

/// Builder for an [`ElifClause`] under construction.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ElifClauseBuilder {
    condition: Option<Expr>,
    body: Option<StmtBlock>,
}

impl ElifClauseBuilder {
    /// Create an empty builder.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }
    /// Set the guarding condition.
    #[inline(always)]
    pub fn condition(mut self, condition: Expr) -> Self {
        self.condition = Some(condition);
        self
    }
    /// Set the clause body.
    #[inline(always)]
    pub fn body(mut self, body: StmtBlock) -> Self {
        self.body = Some(body);
        self
    }
    /// Are all required children present?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.condition.is_some() && self.body.is_some()
    }
    /// Transition to a complete [`ElifClause`].
    ///
    /// Returns [`AstError::MissingChild`] naming the first absent child.
    pub fn finalize(self) -> AstResultOf<ElifClause> {
        let condition = self
            .condition
            .ok_or(AstError::MissingChild(ElifClause::KIND, "condition"))?;
        let body = self
            .body
            .ok_or(AstError::MissingChild(ElifClause::KIND, "body"))?;
        Ok(ElifClause::new(condition, body))
    }
    /// Render the canonical text of the node under construction.
    ///
    /// Fails with [`AstError::MissingChild`] while any required child is
    /// absent; either the full text is produced or none at all.
    pub fn render(&self) -> AstResultOf<String> {
        self.clone().finalize().map(|node| node.to_string())
    }
}

/// Builder for a [`ForStmt`] under construction.
///
/// The step starts out as the zero placeholder, meaning "not yet set"; a
/// loop whose step is still zero at [`finalize`] time is rejected with
/// [`AstError::DegenerateStep`].
///
/// [`finalize`]: ForStmtBuilder::finalize
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ForStmtBuilder {
    variable: Option<Ident>,
    from: Option<Expr>,
    to: Option<Expr>,
    step: NumericLiteral,
    body: Option<StmtBlock>,
}

impl ForStmtBuilder {
    /// Create an empty builder.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }
    /// Set the loop variable.
    #[inline(always)]
    pub fn variable(mut self, variable: impl Into<Ident>) -> Self {
        self.variable = Some(variable.into());
        self
    }
    /// Set the inclusive lower bound.
    #[inline(always)]
    pub fn from(mut self, from: Expr) -> Self {
        self.from = Some(from);
        self
    }
    /// Set the inclusive upper bound.
    #[inline(always)]
    pub fn to(mut self, to: Expr) -> Self {
        self.to = Some(to);
        self
    }
    /// Set the step literal.
    #[inline(always)]
    pub fn step(mut self, step: impl Into<NumericLiteral>) -> Self {
        self.step = step.into();
        self
    }
    /// Set the loop body.
    #[inline(always)]
    pub fn body(mut self, body: StmtBlock) -> Self {
        self.body = Some(body);
        self
    }
    /// Are all required children present, with a real step?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.variable.is_some()
            && self.from.is_some()
            && self.to.is_some()
            && self.body.is_some()
            && !self.step.is_zero()
    }
    /// Transition to a complete [`ForStmt`].
    ///
    /// Absent children are reported first, as [`AstError::MissingChild`] in
    /// field order; only a fully-populated loop is checked for a zero step,
    /// reported as [`AstError::DegenerateStep`].
    pub fn finalize(self) -> AstResultOf<ForStmt> {
        let variable = self
            .variable
            .ok_or(AstError::MissingChild(ForStmt::KIND, "variable"))?;
        let from = self
            .from
            .ok_or(AstError::MissingChild(ForStmt::KIND, "from"))?;
        let to = self.to.ok_or(AstError::MissingChild(ForStmt::KIND, "to"))?;
        let body = self
            .body
            .ok_or(AstError::MissingChild(ForStmt::KIND, "body"))?;
        ForStmt::new(variable, from, to, self.step, body)
    }
    /// Render the canonical text of the node under construction.
    ///
    /// Fails with [`AstError::MissingChild`] while any required child is
    /// absent; either the full text is produced or none at all.
    pub fn render(&self) -> AstResultOf<String> {
        self.clone().finalize().map(|node| node.to_string())
    }
}
