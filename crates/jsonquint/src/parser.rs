//! The event-based streaming JSON5 parser.
//!
//! [`Parser`] consumes the token stream and emits one [`ParseEvent`] per
//! step of document traversal. Refer to the syntactic grammar:
//! <https://spec.json5.org/#syntactic-grammar>.
//!
//! Nesting is tracked without allocation in a fixed bit stack (see
//! [`nest_stack`](crate::nest_stack)); the parser itself holds nothing but
//! the tokenizer cursors, that stack, and a handful of scalars, so an
//! abandoned parser is free to drop at any point.

use crate::{
    event::{EventKind, ParseEvent},
    nest_stack::NestStack,
    options::ParserOptions,
    tokenizer::{Token, TokenKind, Tokenizer},
};

/// What the parser expects next.
///
/// Always consistent with the top of the nesting stack: transitions are the
/// only place state and stack change together. The `after_comma` payloads
/// record whether a value-or-close position was reached through a `,`,
/// which is what distinguishes `[]` from the trailing comma in `[1,]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Top,

    ArrayValueOrClose { after_comma: bool },
    ArrayTail,

    ObjectKeyOrClose { after_comma: bool },
    ObjectKvColon,
    ObjectValue,
    ObjectTail,
}

/// The streaming JSON5 event parser.
///
/// Pulls tokens from a borrowed document span and yields [`ParseEvent`]s
/// via [`Iterator`], one per call, in strict document order. Comments are
/// skipped transparently (unless the dialect forbids them). The stream ends
/// with a single [`EventKind::Eof`] event — or an [`EventKind::Invalid`]
/// event on the first failure — after which the next call returns `None`
/// and [`done`](Self::done) reports `true`. A failed parse cannot be
/// resumed; the diagnostic stays available from
/// [`error_message`](Self::error_message).
///
/// # Examples
///
/// ```
/// use jsonquint::{EventKind, Parser};
///
/// let kinds: Vec<EventKind> = Parser::new("{foo: 1}").map(|e| e.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         EventKind::ObjectBegin,
///         EventKind::ObjectKey,
///         EventKind::NumberLiteral,
///         EventKind::ObjectEnd,
///         EventKind::Eof,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    toks: Tokenizer<'src>,
    state: State,
    nest: NestStack,
    opts: ParserOptions,

    error: Option<&'static str>,
    failed: bool,
    done: bool,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `text` with the default (full JSON5) dialect.
    #[must_use]
    pub fn new(text: &'src str) -> Self {
        Self::with_options(text, ParserOptions::default())
    }

    /// Creates a parser over `text` with an explicit dialect.
    #[must_use]
    pub fn with_options(text: &'src str, options: ParserOptions) -> Self {
        Self {
            toks: Tokenizer::new(text),
            state: State::Top,
            nest: NestStack::new(),
            opts: options,
            error: None,
            failed: false,
            done: false,
        }
    }

    /// Reports whether the event stream is exhausted.
    ///
    /// Becomes `true` exactly one [`next`](Iterator::next) call after the
    /// `Eof` or `Invalid` event, never before.
    #[must_use]
    pub fn done(&self) -> bool {
        self.done
    }

    /// The diagnostic recorded by the most recent `Invalid` event, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        self.error
    }

    /// An empty end-of-input token at the current position, for callers
    /// that need a location after the stream has ended.
    #[cfg_attr(not(feature = "values"), allow(dead_code))]
    pub(crate) fn end_token(&self) -> Token<'src> {
        self.toks.eof_at_current()
    }

    fn in_object(&self) -> bool {
        self.nest.top() == Some(true)
    }

    fn in_array(&self) -> bool {
        self.nest.top() == Some(false)
    }

    /// The tail state matching the innermost open container.
    fn context_state(&self) -> State {
        match self.nest.top() {
            Some(true) => State::ObjectTail,
            Some(false) => State::ArrayTail,
            None => State::Top,
        }
    }

    fn emit(&self, kind: EventKind) -> ParseEvent<'src> {
        ParseEvent {
            kind,
            token: self.toks.current(),
        }
    }

    /// Records the diagnostic and produces the terminal `Invalid` event.
    fn fail(&mut self, message: &'static str) -> ParseEvent<'src> {
        self.error = Some(message);
        self.failed = true;
        self.emit(EventKind::Invalid)
    }

    /// Produces a literal value event and transitions to the tail state of
    /// the current parsing context.
    fn value(&mut self, kind: EventKind) -> ParseEvent<'src> {
        self.state = self.context_state();
        self.emit(kind)
    }

    fn array_begin(&mut self) -> ParseEvent<'src> {
        if self.nest.is_full() {
            return self.fail("Array/object nesting is too deep.");
        }
        self.nest.push(false);
        self.state = State::ArrayValueOrClose { after_comma: false };
        self.emit(EventKind::ArrayBegin)
    }

    fn array_end(&mut self) -> ParseEvent<'src> {
        self.nest.pop();
        self.state = self.context_state();
        self.emit(EventKind::ArrayEnd)
    }

    fn object_begin(&mut self) -> ParseEvent<'src> {
        if self.nest.is_full() {
            return self.fail("Array/object nesting is too deep.");
        }
        self.nest.push(true);
        self.state = State::ObjectKeyOrClose { after_comma: false };
        self.emit(EventKind::ObjectBegin)
    }

    fn object_end(&mut self) -> ParseEvent<'src> {
        self.nest.pop();
        self.state = self.context_state();
        self.emit(EventKind::ObjectEnd)
    }

    /// Dialect checks applied wherever a string token is accepted, as a
    /// value or as an object key.
    fn check_string_dialect(&self) -> Option<&'static str> {
        let spelling = self.toks.current().spelling;
        if !self.opts.single_quote_strings && spelling.starts_with('\'') {
            return Some("Single-quote strings are not allowed.");
        }
        if !self.opts.escaped_newline_strings {
            let mut escaped = false;
            for c in spelling.chars() {
                if escaped {
                    if c == '\n' || c == '\r' {
                        return Some("Escaped newlines in strings are not allowed.");
                    }
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                }
            }
        }
        None
    }

    /// Returns the next parser event, `None` once the stream is exhausted.
    fn parse_next(&mut self) -> Option<ParseEvent<'src>> {
        self.toks.advance();
        // Comments have no effect on parser state; skip them all, unless
        // the dialect says otherwise.
        loop {
            match self.toks.current().kind {
                TokenKind::Comment if self.opts.comments => self.toks.advance(),
                TokenKind::Comment => return Some(self.fail("Comments are not allowed.")),
                TokenKind::UnterminatedComment => {
                    return Some(self.fail("Unterminated block comment"));
                }
                _ => break,
            }
        }

        // If the tokenizer has nothing more, neither do we.
        if self.toks.done() {
            self.done = true;
            return None;
        }

        // End of input at the top level is the single eof event.
        if self.toks.current().kind == TokenKind::Eof && self.state == State::Top {
            return Some(self.emit(EventKind::Eof));
        }

        match self.state {
            State::Top | State::ObjectValue => Some(self.parse_value()),
            State::ArrayValueOrClose { after_comma } => Some(self.parse_array_elem(after_comma)),
            State::ArrayTail => self.parse_array_tail(),
            State::ObjectKeyOrClose { after_comma } => Some(self.parse_obj_elem(after_comma)),
            State::ObjectKvColon => {
                if self.toks.current().kind != TokenKind::Colon {
                    return Some(self.fail("Expected `:` following object member key"));
                }
                self.state = State::ObjectValue;
                self.parse_next()
            }
            State::ObjectTail => self.parse_obj_tail(),
        }
    }

    /// Parses a JSON5 value.
    fn parse_value(&mut self) -> ParseEvent<'src> {
        match self.toks.current().kind {
            TokenKind::NullLiteral => self.value(EventKind::NullLiteral),
            TokenKind::BooleanLiteral => self.value(EventKind::BooleanLiteral),
            TokenKind::NumberLiteral => self.value(EventKind::NumberLiteral),
            TokenKind::StringLiteral => match self.check_string_dialect() {
                Some(message) => self.fail(message),
                None => self.value(EventKind::StringLiteral),
            },

            TokenKind::BracketOpen => self.array_begin(),
            TokenKind::BraceOpen => self.object_begin(),

            TokenKind::Eof => self.fail("Unexpected end-of-input: Expected a value"),

            TokenKind::Identifier => self.fail("An object key identifier is not a valid value."),
            TokenKind::BracketClose => self.fail("Unexpected closing `]`"),
            TokenKind::BraceClose => self.fail("Unexpected closing `}`"),
            TokenKind::UnterminatedString => self.fail("Unterminated string"),
            TokenKind::Colon => self.fail("Unexpected `:`"),
            TokenKind::Comma => {
                if self.in_array() {
                    self.fail("Extraneous `,` in array literal.")
                } else if self.in_object() {
                    self.fail("Expected value before `,` in object literal.")
                } else {
                    self.fail("Unexpected `,`")
                }
            }

            // Comments are filtered before dispatch.
            TokenKind::Invalid | TokenKind::Comment | TokenKind::UnterminatedComment => {
                self.fail("Invalid token")
            }
        }
    }

    /// Parses an array element or the closing of an array. This position
    /// appears after an opening `[` or after a continuing comma.
    fn parse_array_elem(&mut self, after_comma: bool) -> ParseEvent<'src> {
        match self.toks.current().kind {
            TokenKind::BracketClose => {
                if after_comma && !self.opts.trailing_commas {
                    self.fail("Trailing commas are not allowed: Expected an array value.")
                } else {
                    self.array_end()
                }
            }
            TokenKind::Eof => self.fail("Unterminated array literal"),
            _ => self.parse_value(),
        }
    }

    /// Parses an object member key or the closing of an object. This
    /// position appears after an opening `{` or after a continuing comma.
    fn parse_obj_elem(&mut self, after_comma: bool) -> ParseEvent<'src> {
        match self.toks.current().kind {
            TokenKind::BraceClose => {
                if after_comma && !self.opts.trailing_commas {
                    self.fail("Trailing commas are not allowed: Expected an object key.")
                } else {
                    self.object_end()
                }
            }
            TokenKind::Identifier => {
                if self.opts.bare_identifier_keys {
                    self.state = State::ObjectKvColon;
                    self.emit(EventKind::ObjectKey)
                } else {
                    self.fail("Bare identifier object keys are not allowed.")
                }
            }
            TokenKind::StringLiteral => match self.check_string_dialect() {
                Some(message) => self.fail(message),
                None => {
                    self.state = State::ObjectKvColon;
                    self.emit(EventKind::ObjectKey)
                }
            },
            TokenKind::Eof => self.fail("Unterminated object literal"),
            TokenKind::NumberLiteral
            | TokenKind::BooleanLiteral
            | TokenKind::NullLiteral
            | TokenKind::BraceOpen
            | TokenKind::BracketOpen => {
                self.fail("Object member keys must be strings or identifiers.")
            }
            TokenKind::Comma => self.fail("Extraneous `,` in object literal."),
            _ => self.fail("Expected an object member or closing brace `}`"),
        }
    }

    /// Parses an array tail: a closing `]` or a continuing comma. This
    /// position appears after an array element value.
    fn parse_array_tail(&mut self) -> Option<ParseEvent<'src>> {
        match self.toks.current().kind {
            TokenKind::BracketClose => Some(self.array_end()),
            TokenKind::Comma => {
                self.state = State::ArrayValueOrClose { after_comma: true };
                self.parse_next()
            }
            TokenKind::Eof => Some(self.fail("Unterminated array literal")),
            _ => Some(self.fail("Expected `,` or `]` in array")),
        }
    }

    /// Parses an object tail: a closing `}` or a continuing comma. This
    /// position appears after an object member value.
    fn parse_obj_tail(&mut self) -> Option<ParseEvent<'src>> {
        match self.toks.current().kind {
            TokenKind::Comma => {
                self.state = State::ObjectKeyOrClose { after_comma: true };
                self.parse_next()
            }
            TokenKind::BraceClose => Some(self.object_end()),
            TokenKind::Eof => Some(self.fail("Unterminated object literal")),
            _ => Some(self.fail("Expected `,` or `}` in object")),
        }
    }
}

impl<'src> Iterator for Parser<'src> {
    type Item = ParseEvent<'src>;

    fn next(&mut self) -> Option<ParseEvent<'src>> {
        if self.done {
            return None;
        }
        // A failure is terminal: the stream ends one call after the
        // invalid event, mirroring the eof contract.
        if self.failed {
            self.done = true;
            return None;
        }
        self.parse_next()
    }
}
