//! Module defining Fluxion supporting data types.

pub mod error;

pub use error::{AstError, AstResultOf};
