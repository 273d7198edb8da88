use alloc::{string::String, vec::Vec};

use rstest::rstest;

use crate::{EventKind, MAX_NESTING_DEPTH, Parser};

fn check_fails(text: &str, message: &str) {
    let mut parser = Parser::new(text);
    let mut kinds = Vec::new();
    while let Some(event) = parser.next() {
        kinds.push(event.kind);
    }
    assert_eq!(
        kinds.last(),
        Some(&EventKind::Invalid),
        "expected a failure for {text:?}"
    );
    assert_eq!(
        kinds
            .iter()
            .filter(|kind| **kind == EventKind::Invalid)
            .count(),
        1,
        "exactly one invalid event for {text:?}"
    );
    assert_eq!(
        parser.error_message(),
        Some(message),
        "diagnostic mismatch for {text:?}"
    );
    assert!(parser.done());
}

#[rstest]
#[case::invalid_token(".[{{A", "Invalid token")]
#[case::open_object("{", "Unterminated object literal")]
#[case::open_object_after_value("{a: 1", "Unterminated object literal")]
#[case::open_object_after_comma("{a: 1,", "Unterminated object literal")]
#[case::open_array("[", "Unterminated array literal")]
#[case::open_array_after_value("[1, 2", "Unterminated array literal")]
#[case::missing_colon("{foo 1}", "Expected `:` following object member key")]
#[case::missing_colon_eof("{foo", "Expected `:` following object member key")]
#[case::number_for_key("{1: 2}", "Object member keys must be strings or identifiers.")]
#[case::array_for_key("{[]: 2}", "Object member keys must be strings or identifiers.")]
#[case::null_for_key("{null: 2}", "Object member keys must be strings or identifiers.")]
#[case::unterminated_string_for_key("{'a", "Expected an object member or closing brace `}`")]
#[case::extraneous_comma_object("{,}", "Extraneous `,` in object literal.")]
#[case::extraneous_comma_array("[,]", "Extraneous `,` in array literal.")]
#[case::double_comma("[1,,2]", "Extraneous `,` in array literal.")]
#[case::missing_member_value("{foo: ,}", "Expected value before `,` in object literal.")]
#[case::eof_member_value("{a:", "Unexpected end-of-input: Expected a value")]
#[case::bare_comma(",", "Unexpected `,`")]
#[case::bare_colon(":", "Unexpected `:`")]
#[case::bare_close_bracket("]", "Unexpected closing `]`")]
#[case::bare_close_brace("}", "Unexpected closing `}`")]
#[case::bare_identifier("foo", "An object key identifier is not a valid value.")]
#[case::unterminated_string("'abc", "Unterminated string")]
#[case::unterminated_comment("/* abc", "Unterminated block comment")]
#[case::missing_array_separator("[1 2]", "Expected `,` or `]` in array")]
#[case::missing_object_separator("{a: 1 b: 2}", "Expected `,` or `}` in object")]
fn fails_with(#[case] text: &str, #[case] message: &str) {
    check_fails(text, message);
}

#[test]
fn rejects_excessive_nesting() {
    let text = "[".repeat(MAX_NESTING_DEPTH + 1);
    let mut parser = Parser::new(&text);
    let mut begins = 0;
    let mut last = None;
    while let Some(event) = parser.next() {
        if event.kind == EventKind::ArrayBegin {
            begins += 1;
        }
        last = Some(event.kind);
    }
    assert_eq!(begins, MAX_NESTING_DEPTH);
    assert_eq!(last, Some(EventKind::Invalid));
    assert_eq!(
        parser.error_message(),
        Some("Array/object nesting is too deep.")
    );
}

#[test]
fn accepts_nesting_at_the_limit() {
    let mut text = String::new();
    text.push_str(&"[".repeat(MAX_NESTING_DEPTH));
    text.push_str(&"]".repeat(MAX_NESTING_DEPTH));
    let mut parser = Parser::new(&text);
    let mut begins = 0;
    let mut ends = 0;
    let mut last = None;
    while let Some(event) = parser.next() {
        match event.kind {
            EventKind::ArrayBegin => begins += 1,
            EventKind::ArrayEnd => ends += 1,
            _ => {}
        }
        last = Some(event.kind);
    }
    assert_eq!((begins, ends), (MAX_NESTING_DEPTH, MAX_NESTING_DEPTH));
    assert_eq!(last, Some(EventKind::Eof));
    assert_eq!(parser.error_message(), None);
}

// A failure is terminal: the stream ends one call later and stays ended.
#[test]
fn failure_latches() {
    let mut parser = Parser::new("@");
    assert_eq!(parser.next().map(|e| e.kind), Some(EventKind::Invalid));
    assert!(!parser.done());
    assert_eq!(parser.error_message(), Some("Invalid token"));
    assert_eq!(parser.next(), None);
    assert!(parser.done());
    assert_eq!(parser.next(), None);
    assert!(parser.done());
    assert_eq!(parser.error_message(), Some("Invalid token"));
}
