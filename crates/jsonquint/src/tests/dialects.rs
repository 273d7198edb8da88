use rstest::rstest;

use crate::{Parser, ParserOptions};

fn last_error(text: &str, options: ParserOptions) -> Option<&'static str> {
    let mut parser = Parser::with_options(text, options);
    while parser.next().is_some() {}
    parser.error_message()
}

#[test]
fn presets() {
    let json5 = ParserOptions::json5();
    assert!(json5.comments);
    assert!(json5.trailing_commas);
    assert!(json5.bare_identifier_keys);
    assert!(json5.single_quote_strings);
    assert!(json5.escaped_newline_strings);
    assert_eq!(ParserOptions::default(), json5);

    let jsonc = ParserOptions::jsonc();
    assert!(jsonc.comments);
    assert!(!jsonc.trailing_commas);
    assert!(!jsonc.bare_identifier_keys);
    assert!(!jsonc.single_quote_strings);
    assert!(!jsonc.escaped_newline_strings);

    let strict = ParserOptions::strict_json();
    assert!(!strict.comments);
    assert!(!strict.trailing_commas);
    assert!(!strict.bare_identifier_keys);
    assert!(!strict.single_quote_strings);
    assert!(!strict.escaped_newline_strings);
}

#[rstest]
#[case::array("[1, 2, 3,]", "Trailing commas are not allowed: Expected an array value.")]
#[case::object("{a: 1,}", "Trailing commas are not allowed: Expected an object key.")]
fn rejects_trailing_commas_when_disabled(#[case] text: &str, #[case] message: &str) {
    let options = ParserOptions {
        trailing_commas: false,
        ..ParserOptions::json5()
    };
    assert_eq!(last_error(text, options), Some(message));
    assert_eq!(last_error(text, ParserOptions::json5()), None);
}

#[test]
fn empty_containers_are_not_trailing_commas() {
    let strict = ParserOptions::strict_json();
    assert_eq!(last_error("[]", strict), None);
    assert_eq!(last_error("{}", strict), None);
}

#[rstest]
#[case::line("[1] // c")]
#[case::block("/* c */ 1")]
fn rejects_comments_when_disabled(#[case] text: &str) {
    assert_eq!(
        last_error(text, ParserOptions::strict_json()),
        Some("Comments are not allowed.")
    );
    assert_eq!(last_error(text, ParserOptions::jsonc()), None);
}

#[test]
fn rejects_bare_identifier_keys_when_disabled() {
    let options = ParserOptions {
        bare_identifier_keys: false,
        ..ParserOptions::json5()
    };
    assert_eq!(
        last_error("{foo: 1}", options),
        Some("Bare identifier object keys are not allowed.")
    );
    assert_eq!(last_error("{\"foo\": 1}", options), None);
}

// The single-quote rule applies wherever a string token is accepted.
#[rstest]
#[case::value("'s'")]
#[case::key("{'a': 1}")]
#[case::element("[\"x\", 's']")]
fn rejects_single_quote_strings_when_disabled(#[case] text: &str) {
    let options = ParserOptions {
        single_quote_strings: false,
        ..ParserOptions::json5()
    };
    assert_eq!(
        last_error(text, options),
        Some("Single-quote strings are not allowed.")
    );
    assert_eq!(last_error(text, ParserOptions::json5()), None);
}

#[test]
fn rejects_escaped_newlines_when_disabled() {
    let options = ParserOptions {
        escaped_newline_strings: false,
        ..ParserOptions::json5()
    };
    let text = "\"multi\\\nline\"";
    assert_eq!(
        last_error(text, options),
        Some("Escaped newlines in strings are not allowed.")
    );
    assert_eq!(last_error(text, ParserOptions::json5()), None);
    // A literal `\n` escape sequence is not an escaped newline.
    assert_eq!(last_error("\"multi\\nline\"", options), None);
}

#[test]
fn strict_json_accepts_plain_json() {
    let strict = ParserOptions::strict_json();
    assert_eq!(
        last_error("{\"a\": [1, 2.5, true, null], \"b\": \"x\"}", strict),
        None
    );
}
