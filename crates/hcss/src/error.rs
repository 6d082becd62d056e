//! Error types for HCSS parsing.
//!
//! The lenient entry points ([`deserialize`](crate::parser::deserialize),
//! [`serialize`](crate::serialize::serialize)) never return these; they are
//! produced by the strict parser and by color parsing.

use thiserror::Error;

pub use crate::types::color::ColorParseError;

/// Errors that can occur during strict declaration parsing.
///
/// # Examples
///
/// ```rust
/// use hcss::parser::parse_declarations;
///
/// // Missing value after the colon
/// let result = parse_declarations("color: ; width: 10px;");
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HcssError {
    /// A declaration segment could not be split into `property: value`.
    ///
    /// The string holds the offending segment, trimmed.
    #[error("CSS syntax error: {0}")]
    InvalidSyntax(String),

    /// A nested `&` block was opened but never closed.
    #[error("unclosed nested block: {0}")]
    UnclosedBlock(String),
}
