//! Character-level tokenizer for JSON5 text.
//!
//! The tokenizer walks a borrowed span with two byte cursors and classifies
//! exactly one token per [`Tokenizer::advance`] call. It never allocates and
//! never fails: lexically broken input is surfaced through dedicated token
//! kinds ([`TokenKind::Invalid`], [`TokenKind::UnterminatedString`],
//! [`TokenKind::UnterminatedComment`]) and left for the parser to interpret.
//!
//! The lexical grammar is the ASCII core of <https://spec.json5.org/#lexical-grammar>:
//! identifiers and whitespace are classified in the ASCII range only, and
//! the `U+2028`/`U+2029` separators are not treated as line endings.

/// Classification of a single lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A character that starts no token.
    Invalid,
    /// A string whose closing quote was preempted by a line terminator or
    /// end-of-input.
    UnterminatedString,
    /// A `/*` block comment that ran off the end of the input.
    UnterminatedComment,

    /// A `//` line comment or a terminated `/*  */` block comment.
    Comment,
    /// `[A-Za-z_$][A-Za-z0-9_$]*`, excluding the reclassified keywords.
    Identifier,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `:`
    Colon,
    /// `,`
    Comma,

    /// The spelling `null`.
    NullLiteral,
    /// A numeric literal, including the spellings `Infinity` and `NaN`.
    NumberLiteral,
    /// A single- or double-quoted string, closing quote included.
    StringLiteral,
    /// The spelling `true` or `false`.
    BooleanLiteral,

    /// End of input. Yielded exactly once.
    Eof,
}

/// A classified, located lexical unit of the input text.
///
/// Tokens borrow their spelling from the buffer the [`Tokenizer`] was built
/// over; they own no memory. Lines and columns are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The exact source text of the token.
    pub spelling: &'src str,
    /// 0-based source line of the token's first character.
    pub line: usize,
    /// 0-based source column of the token's first character.
    pub column: usize,
    /// The token's classification.
    pub kind: TokenKind,
}

fn is_ident_first(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_char(c: char) -> bool {
    is_ident_first(c) || c.is_ascii_digit()
}

fn is_line_term(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// The JSON5 tokenizer.
///
/// [`advance`](Self::advance) consumes characters from the current position
/// and classifies exactly one token; [`current`](Self::current) returns the
/// last classified token; [`done`](Self::done) reports whether the
/// end-of-input token has already been consumed. Advancing a finished
/// tokenizer is a caller error.
///
/// # Examples
///
/// ```
/// use jsonquint::{TokenKind, Tokenizer};
///
/// let mut toks = Tokenizer::new("{foo: 1}");
/// toks.advance();
/// assert_eq!(toks.current().kind, TokenKind::BraceOpen);
/// toks.advance();
/// assert_eq!(toks.current().spelling, "foo");
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'src> {
    full: &'src str,

    // Byte offsets of the current token's first and one-past-last character.
    tail: usize,
    head: usize,

    line: usize,
    column: usize,
    next_line: usize,
    next_column: usize,

    kind: TokenKind,
    done: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over `text`. No token is classified until the
    /// first [`advance`](Self::advance).
    #[must_use]
    pub fn new(text: &'src str) -> Self {
        Self {
            full: text,
            tail: 0,
            head: 0,
            line: 0,
            column: 0,
            next_line: 0,
            next_column: 0,
            kind: TokenKind::Invalid,
            done: false,
        }
    }

    /// Returns the last classified token.
    #[must_use]
    pub fn current(&self) -> Token<'src> {
        Token {
            spelling: &self.full[self.tail..self.head],
            line: self.line,
            column: self.column,
            kind: self.kind,
        }
    }

    /// Reports whether the end-of-input token has been consumed.
    #[must_use]
    pub fn done(&self) -> bool {
        self.done
    }

    /// An empty end-of-input token at the current position.
    #[cfg_attr(not(feature = "values"), allow(dead_code))]
    pub(crate) fn eof_at_current(&self) -> Token<'src> {
        Token {
            spelling: "",
            line: self.line,
            column: self.column,
            kind: TokenKind::Eof,
        }
    }

    /// Consumes the tokenizer, yielding every token up to and including the
    /// end-of-input token.
    pub fn tokens(self) -> Tokens<'src> {
        Tokens { toks: self }
    }

    fn peek(&self, n: usize) -> Option<char> {
        self.full[self.head..].chars().nth(n)
    }

    fn take(&mut self) {
        if let Some(c) = self.full[self.head..].chars().next() {
            self.next_column += 1;
            if c == '\n' {
                self.next_column = 0;
                self.next_line += 1;
            }
            self.head += c.len_utf8();
        }
    }

    /// Classifies the next token.
    ///
    /// Skips leading whitespace, then consumes exactly one token. Must not
    /// be called once [`done`](Self::done) is true.
    pub fn advance(&mut self) {
        debug_assert!(!self.done, "advance() called on a finished tokenizer");

        while self.peek(0).is_some_and(|c| c.is_ascii_whitespace()) {
            self.take();
        }

        self.tail = self.head;
        self.line = self.next_line;
        self.column = self.next_column;

        let Some(c) = self.peek(0) else {
            // A second advance at end-of-input marks the stream exhausted.
            if self.kind == TokenKind::Eof {
                self.done = true;
            }
            self.kind = TokenKind::Eof;
            return;
        };

        match c {
            '{' | '}' | '[' | ']' | ':' | ',' => {
                self.kind = match c {
                    '{' => TokenKind::BraceOpen,
                    '}' => TokenKind::BraceClose,
                    '[' => TokenKind::BracketOpen,
                    ']' => TokenKind::BracketClose,
                    ':' => TokenKind::Colon,
                    _ => TokenKind::Comma,
                };
                self.take();
            }
            c if is_ident_first(c) => self.scan_identifier(),
            '/' if self.peek(1) == Some('/') => self.scan_line_comment(),
            '/' if self.peek(1) == Some('*') => self.scan_block_comment(),
            '\'' | '"' => {
                self.take();
                self.scan_string(c);
            }
            c if self.starts_number(c) => self.scan_number(),
            _ => {
                self.kind = TokenKind::Invalid;
                self.take();
            }
        }
    }

    // A number starts at a digit, at `.` followed by a digit, or at a sign
    // followed by either. A bare `.` or sign is an invalid token, which
    // keeps every number spelling numerically parseable downstream.
    fn starts_number(&self, c: char) -> bool {
        let digit_at = |n| self.peek(n).is_some_and(|c: char| c.is_ascii_digit());
        match c {
            '0'..='9' => true,
            '.' => digit_at(1),
            '+' | '-' => digit_at(1) || (self.peek(1) == Some('.') && digit_at(2)),
            _ => false,
        }
    }

    fn scan_identifier(&mut self) {
        while self.peek(0).is_some_and(is_ident_char) {
            self.take();
        }
        self.kind = match &self.full[self.tail..self.head] {
            "null" => TokenKind::NullLiteral,
            "true" | "false" => TokenKind::BooleanLiteral,
            "Infinity" | "NaN" => TokenKind::NumberLiteral,
            _ => TokenKind::Identifier,
        };
    }

    fn scan_number(&mut self) {
        self.kind = TokenKind::NumberLiteral;
        if matches!(self.peek(0), Some('+' | '-')) {
            self.take();
        }
        while self.peek(0).is_some_and(|c| c.is_ascii_digit()) {
            self.take();
        }
        if self.peek(0) == Some('.') && self.peek(1).is_some_and(|c| c.is_ascii_digit()) {
            self.take();
            while self.peek(0).is_some_and(|c| c.is_ascii_digit()) {
                self.take();
            }
        }
    }

    fn scan_string(&mut self, quote: char) {
        let mut escaped = false;
        while let Some(c) = self.peek(0) {
            if escaped {
                // Take the character, no matter what it is.
                self.take();
                escaped = false;
            } else if c == '\\' {
                self.take();
                escaped = true;
            } else if c == quote || is_line_term(c) {
                break;
            } else {
                self.take();
            }
        }
        match self.peek(0) {
            Some(c) if c == quote => {
                self.take();
                self.kind = TokenKind::StringLiteral;
            }
            // End of input or an embedded line terminator; the terminator is
            // left for the next token.
            _ => self.kind = TokenKind::UnterminatedString,
        }
    }

    fn scan_line_comment(&mut self) {
        while self.peek(0).is_some_and(|c| !is_line_term(c)) {
            self.take();
        }
        self.kind = TokenKind::Comment;
    }

    fn scan_block_comment(&mut self) {
        let mut terminated = false;
        while self.peek(0).is_some() {
            if self.peek(0) == Some('*') && self.peek(1) == Some('/') {
                self.take();
                self.take();
                terminated = true;
                break;
            }
            self.take();
        }
        self.kind = if terminated {
            TokenKind::Comment
        } else {
            TokenKind::UnterminatedComment
        };
    }
}

/// Iterator over a tokenizer's tokens, ending after the end-of-input token.
///
/// Returned by [`Tokenizer::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'src> {
    toks: Tokenizer<'src>,
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.toks.done() {
            return None;
        }
        self.toks.advance();
        if self.toks.done() {
            return None;
        }
        Some(self.toks.current())
    }
}
