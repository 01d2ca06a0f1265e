//! Error types for shorthand compilation.

use thiserror::Error;

/// Errors that can occur when compiling a shorthand string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShorthandError {
    /// The shorthand contained no property path.
    #[error("empty property path")]
    EmptyPath,

    /// The property path contained an empty segment (e.g. `"a..b"`).
    #[error("invalid property path '{0}'")]
    InvalidPath(String),

    /// The comparison operator is not one of the supported forms.
    #[error("unknown comparison operator '{0}'")]
    UnknownOperator(String),

    /// A comparison operator was given without a right-hand literal.
    #[error("comparison is missing its literal")]
    MissingLiteral,

    /// The right-hand side is not a number, quoted string, bool, or null.
    #[error("invalid literal '{0}'")]
    InvalidLiteral(String),

    /// Input remained after the path where an operator was expected.
    #[error("unexpected trailing input '{0}'")]
    TrailingInput(String),
}

/// Result type for shorthand compilation.
pub type Result<T> = std::result::Result<T, ShorthandError>;
