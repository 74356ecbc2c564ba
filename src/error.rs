//! Crate errors.

use std::fmt;

/// Errors raised by the expression codecs.
///
/// Both variants are input-contract violations and propagate to the caller
/// unmodified; nothing in the crate retries or recovers from them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Unbalanced grouping encountered during postfix conversion or parsing.
    MalformedExpression(String),
    /// Operator/operand count mismatch during postfix evaluation.
    ImbalancedExpression(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedExpression(msg) => write!(f, "malformed expression: {}", msg),
            Error::ImbalancedExpression(msg) => write!(f, "imbalanced expression: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
