//! Module defining identifier nodes.

use crate::Identifier;
use std::{borrow::Borrow, fmt, hash::Hash};

/// An identifier node, e.g. a declared name or the variable bound by a
/// counting loop.
///
/// Identifiers are printable AST nodes in their own right, so a renderer
/// treats them uniformly with every other child node, while checker stages
/// can still read them as plain strings via [`AsRef`]/[`Borrow`].
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Ident {
    /// Identifier name.
    pub name: Identifier,
}

impl fmt::Debug for Ident {
    #[cold]
    #[inline(never)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.name)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Borrow<str> for Ident {
    #[inline(always)]
    #[must_use]
    fn borrow(&self) -> &str {
        self.name.as_ref()
    }
}

impl AsRef<str> for Ident {
    #[inline(always)]
    #[must_use]
    fn as_ref(&self) -> &str {
        self.name.as_ref()
    }
}

impl From<&str> for Ident {
    #[inline(always)]
    fn from(name: &str) -> Self {
        Self { name: name.into() }
    }
}

impl From<String> for Ident {
    #[inline(always)]
    fn from(name: String) -> Self {
        Self { name: name.into() }
    }
}

impl From<Identifier> for Ident {
    #[inline(always)]
    fn from(name: Identifier) -> Self {
        Self { name }
    }
}

impl Ident {
    /// Get the name of the identifier as a string slice.
    #[inline(always)]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }
    /// Is the identifier empty?
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}
