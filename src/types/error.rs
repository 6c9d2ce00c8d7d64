//! Module containing error definitions for the AST layer.

use crate::Identifier;
use std::fmt;

/// Alias to `Result<T, AstError>`.
pub type AstResultOf<T> = Result<T, AstError>;

/// All possible contract violations detectable at the AST layer.
///
/// These errors indicate a bug in the producing stage (usually the parser),
/// never a user input error: a correctly-behaving pipeline only ever attaches
/// fully-populated nodes to the tree.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum AstError {
    /// A required child node is absent from a node still under construction.
    ///
    /// Wrapped values are the node kind and the name of the missing field.
    MissingChild(&'static str, &'static str),
    /// A counting loop carries the zero step sentinel, which describes no
    /// valid iteration.
    ///
    /// Wrapped value is the loop variable name, when known.
    DegenerateStep(Identifier),
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingChild(node, field) => {
                write!(f, "{node} node is missing its required '{field}' child")
            }
            Self::DegenerateStep(var) if var.is_empty() => {
                f.write_str("counting loop has a zero step")
            }
            Self::DegenerateStep(var) => {
                write!(f, "counting loop over '{var}' has a zero step")
            }
        }
    }
}

impl std::error::Error for AstError {}
