//! Assembles event streams into value trees.
//!
//! This layer drives a [`Parser`] pull-style: [`parse_next_value`] consumes
//! exactly the events of one value (recursing into containers), and
//! [`parse`] additionally requires the document to end there. It is the
//! first layer allowed to fail hard: every problem — lexical, syntactic,
//! dialect, or a malformed literal — becomes one located [`ParseError`].

use alloc::string::{String, ToString};

use crate::{
    error::ParseError,
    event::{EventKind, ParseEvent},
    options::ParserOptions,
    parser::Parser,
    tokenizer::{Token, TokenKind},
    value::{TreeBuilder, Value, ValueBuilder},
};

/// Parses one complete JSON5 document into a [`Value`].
///
/// Trailing non-whitespace content after the value is an error. Escape
/// sequences other than `\"`, `\'`, `\\`, `\n`, `\r`, and an escaped line
/// terminator (a line continuation) decode to nothing.
///
/// # Errors
///
/// Returns a [`ParseError`] locating the offending token.
///
/// # Examples
///
/// ```
/// use jsonquint::{Value, parse};
///
/// let value = parse("[1, 'two', /* three */]").unwrap();
/// let items = value.as_array().unwrap();
/// assert_eq!(items[0], Value::Number(1.0));
/// assert_eq!(items[1], Value::String("two".into()));
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with_options(text, ParserOptions::default())
}

/// Parses one complete document under an explicit dialect.
///
/// # Errors
///
/// Returns a [`ParseError`] locating the offending token.
pub fn parse_with_options(text: &str, options: ParserOptions) -> Result<Value, ParseError> {
    parse_with_builder::<TreeBuilder>(text, options)
}

/// Parses one complete document into whatever container `B` builds.
///
/// # Errors
///
/// Returns a [`ParseError`] locating the offending token.
pub fn parse_with_builder<B: ValueBuilder>(
    text: &str,
    options: ParserOptions,
) -> Result<B::Value, ParseError> {
    let mut parser = Parser::with_options(text, options);
    let value = parse_next_value::<B>(&mut parser)?;
    let event = next_event(&mut parser)?;
    if event.kind != EventKind::Eof {
        return Err(ParseError::at("Trailing characters in JSON data", &event.token));
    }
    Ok(value)
}

/// Materializes the next value from `parser`, consuming however many events
/// it spans.
///
/// May be called repeatedly on one parser to consume successive roots of a
/// multi-value stream.
///
/// # Errors
///
/// Returns a [`ParseError`] locating the offending token.
pub fn parse_next_value<B: ValueBuilder>(parser: &mut Parser<'_>) -> Result<B::Value, ParseError> {
    let event = next_event(parser)?;
    realize::<B>(parser, &event)
}

fn next_event<'src>(parser: &mut Parser<'src>) -> Result<ParseEvent<'src>, ParseError> {
    parser
        .next()
        .ok_or_else(|| ParseError::at("Unexpected end-of-input", &parser.end_token()))
}

fn parser_error(parser: &Parser<'_>, token: &Token<'_>) -> ParseError {
    ParseError::at(parser.error_message().unwrap_or("Invalid token"), token)
}

fn realize<B: ValueBuilder>(
    parser: &mut Parser<'_>,
    event: &ParseEvent<'_>,
) -> Result<B::Value, ParseError> {
    match event.kind {
        EventKind::NullLiteral => Ok(B::null()),
        EventKind::BooleanLiteral => Ok(B::boolean(event.token.spelling == "true")),
        EventKind::NumberLiteral => realize_number(&event.token).map(B::number),
        EventKind::StringLiteral => realize_string(&event.token).map(B::string),
        EventKind::ArrayBegin => realize_array::<B>(parser),
        EventKind::ObjectBegin => realize_object::<B>(parser),
        EventKind::Invalid => Err(parser_error(parser, &event.token)),
        EventKind::Eof => Err(ParseError::at("Unexpected end-of-input", &event.token)),
        _ => Err(ParseError::at("Invalid parse event sequence", &event.token)),
    }
}

fn realize_array<B: ValueBuilder>(parser: &mut Parser<'_>) -> Result<B::Value, ParseError> {
    let mut array = B::new_array();
    loop {
        let event = next_event(parser)?;
        if event.kind == EventKind::ArrayEnd {
            break;
        }
        let element = realize::<B>(parser, &event)?;
        B::append(&mut array, element);
    }
    Ok(B::finish_array(array))
}

fn realize_object<B: ValueBuilder>(parser: &mut Parser<'_>) -> Result<B::Value, ParseError> {
    let mut object = B::new_object();
    loop {
        let event = next_event(parser)?;
        match event.kind {
            EventKind::ObjectEnd => break,
            EventKind::ObjectKey => {
                let key = realize_key(&event.token)?;
                let value = parse_next_value::<B>(parser)?;
                B::insert(&mut object, key, value);
            }
            EventKind::Invalid => return Err(parser_error(parser, &event.token)),
            _ => return Err(ParseError::at("Invalid parse event sequence", &event.token)),
        }
    }
    Ok(B::finish_object(object))
}

// The parser guarantees a key token is an identifier or a string; anything
// else here is re-validated into an error rather than trusted.
fn realize_key(token: &Token<'_>) -> Result<String, ParseError> {
    match token.kind {
        TokenKind::Identifier => Ok(token.spelling.to_string()),
        TokenKind::StringLiteral => realize_string(token),
        _ => Err(ParseError::at("Invalid object member key token", token)),
    }
}

// Tokenizer-validated spellings always parse; `Infinity` and `NaN` are in
// `f64::from_str`'s vocabulary. The error arm is defensive.
fn realize_number(token: &Token<'_>) -> Result<f64, ParseError> {
    token
        .spelling
        .parse()
        .map_err(|_| ParseError::at("Invalid number token", token))
}

fn realize_string(token: &Token<'_>) -> Result<String, ParseError> {
    let spelling = token.spelling;
    let invalid = || ParseError::at("Invalid string token", token);
    if spelling.len() < 2 {
        return Err(invalid());
    }

    let mut chars = spelling.chars();
    let Some(quote) = chars.next() else {
        return Err(invalid());
    };

    let mut out = String::new();
    let mut escaped = false;
    loop {
        // Running out before the closing quote means the token is malformed.
        let Some(c) = chars.next() else {
            return Err(invalid());
        };
        if escaped {
            match c {
                '"' | '\'' | '\\' => out.push(c),
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                // An escaped line terminator is a line continuation; any
                // other escape decodes to nothing.
                _ => {}
            }
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            // The closing quote must be the token's final character.
            if chars.next().is_some() {
                return Err(invalid());
            }
            break;
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{realize_number, realize_string};
    use crate::tokenizer::{Token, TokenKind};

    fn string_token(spelling: &str) -> Token<'_> {
        Token {
            spelling,
            line: 0,
            column: 0,
            kind: TokenKind::StringLiteral,
        }
    }

    #[test]
    fn decodes_escapes() {
        let decode = |s| realize_string(&string_token(s)).unwrap();
        assert_eq!(decode("'abc'"), "abc");
        assert_eq!(decode("''"), "");
        assert_eq!(decode(r#""a\"b""#), "a\"b");
        assert_eq!(decode(r"'a\'b'"), "a'b");
        assert_eq!(decode(r"'a\\b'"), "a\\b");
        assert_eq!(decode(r"'a\nb'"), "a\nb");
        assert_eq!(decode(r"'a\rb'"), "a\rb");
        // Line continuation and unknown escapes decode to nothing.
        assert_eq!(decode("'a\\\nb'"), "ab");
        assert_eq!(decode(r"'a\qb'"), "ab");
    }

    #[test]
    fn rejects_malformed_string_tokens() {
        let check = |s| {
            let err = realize_string(&string_token(s)).unwrap_err();
            assert_eq!(err.message, "Invalid string token");
        };
        // Too short, unterminated, and trailing-garbage tokens; the parser
        // never produces these, but the scan re-validates anyway.
        check("'");
        check("'abc");
        check("'abc'x");
        check("'abc\\");
    }

    #[test]
    fn realizes_extended_number_spellings() {
        let number = |s| {
            realize_number(&Token {
                spelling: s,
                line: 0,
                column: 0,
                kind: TokenKind::NumberLiteral,
            })
            .unwrap()
        };
        assert_eq!(number("1.25"), 1.25);
        assert_eq!(number(".5"), 0.5);
        assert_eq!(number("+3"), 3.0);
        assert_eq!(number("-2"), -2.0);
        assert_eq!(number("Infinity"), f64::INFINITY);
        assert!(number("NaN").is_nan());
        assert_eq!(number("1").to_string(), "1");
    }
}
