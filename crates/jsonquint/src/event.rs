//! Events emitted by the streaming JSON5 parser.

use crate::tokenizer::Token;

/// Classification of a [`ParseEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The parse failed at this token. The diagnostic is retrievable from
    /// [`Parser::error_message`](crate::Parser::error_message).
    Invalid,

    /// A `null` value.
    NullLiteral,
    /// A numeric value.
    NumberLiteral,
    /// A string value.
    StringLiteral,
    /// A `true` or `false` value.
    BooleanLiteral,

    /// A `[` opening an array.
    ArrayBegin,
    /// A `]` closing the innermost open array.
    ArrayEnd,

    /// A `{` opening an object.
    ObjectBegin,
    /// An identifier or string naming the next object member.
    ObjectKey,
    /// A `}` closing the innermost open object.
    ObjectEnd,

    /// A comment. Part of the closed event vocabulary, but never produced:
    /// the parser skips comments before dispatching on its state.
    Comment,
    /// End of the document. Produced exactly once, at the top level.
    Eof,
}

/// One step of document traversal: a structural or literal notification,
/// carrying the token that triggered it for diagnostics.
///
/// # Examples
///
/// ```
/// use jsonquint::{EventKind, Parser};
///
/// let mut parser = Parser::new("[true]");
/// let event = parser.next().unwrap();
/// assert_eq!(event.kind, EventKind::ArrayBegin);
/// assert_eq!(event.token.spelling, "[");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseEvent<'src> {
    /// What this step of the traversal saw.
    pub kind: EventKind,
    /// The token the event was produced from.
    pub token: Token<'src>,
}
