#![no_main]
use jsonquint::{EventKind, MAX_NESTING_DEPTH, Parser, ParserOptions, parse_with_options};
use libfuzzer_sys::fuzz_target;

const HEADER: usize = 1; // 1 flags byte, the rest is document text

fn parser(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let options = match flags & 3 {
        0 => ParserOptions::json5(),
        1 => ParserOptions::jsonc(),
        2 => ParserOptions::strict_json(),
        _ => ParserOptions {
            comments: flags & 4 != 0,
            trailing_commas: flags & 8 != 0,
            bare_identifier_keys: flags & 16 != 0,
            single_quote_strings: flags & 32 != 0,
            escaped_newline_strings: flags & 64 != 0,
        },
    };

    let text = String::from_utf8_lossy(&data[HEADER..]).into_owned();

    // The event stream must terminate, one invalid event at most, with
    // begin/end nesting balanced and bounded throughout.
    let mut parser = Parser::with_options(&text, options);
    let mut depth = 0usize;
    let mut invalid = 0usize;
    while let Some(event) = parser.next() {
        match event.kind {
            EventKind::ArrayBegin | EventKind::ObjectBegin => {
                depth += 1;
                assert!(depth <= MAX_NESTING_DEPTH);
            }
            EventKind::ArrayEnd | EventKind::ObjectEnd => {
                depth = depth.checked_sub(1).expect("unbalanced close event");
            }
            EventKind::Invalid => invalid += 1,
            _ => {}
        }
    }
    assert!(parser.done());
    assert!(invalid <= 1);
    assert_eq!(parser.error_message().is_some(), invalid == 1);

    // Materialization is deterministic: a second run over the same text
    // produces the identical value or the identical error.
    let first = parse_with_options(&text, options);
    let second = parse_with_options(&text, options);
    assert_eq!(first, second);
}

fuzz_target!(|data: &[u8]| parser(data));
