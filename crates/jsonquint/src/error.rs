//! The located error type raised by materialization.

use alloc::string::String;

use thiserror::Error;

use crate::tokenizer::Token;

/// A failed parse, located at the offending token.
///
/// Carries the diagnostic text together with the token's line, column, and
/// spelling. Diagnostics recorded by the event parser are forwarded here
/// verbatim.
///
/// # Examples
///
/// ```
/// use jsonquint::parse;
///
/// let err = parse("[1, 2").unwrap_err();
/// assert_eq!(err.message, "Unterminated array literal");
/// assert_eq!((err.line, err.column), (0, 5));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("error at input line {line}, column {column} (token `{spelling}`): {message}")]
pub struct ParseError {
    /// The diagnostic text.
    pub message: &'static str,
    /// 0-based line of the offending token.
    pub line: usize,
    /// 0-based column of the offending token.
    pub column: usize,
    /// Spelling of the offending token.
    pub spelling: String,
}

impl ParseError {
    pub(crate) fn at(message: &'static str, token: &Token<'_>) -> Self {
        Self {
            message,
            line: token.line,
            column: token.column,
            spelling: token.spelling.into(),
        }
    }
}
