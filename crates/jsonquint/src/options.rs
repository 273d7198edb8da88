#![allow(clippy::struct_excessive_bools)]

//! Dialect configuration for the parser.

/// Dialect switches controlling which JSON5 extensions the parser accepts.
///
/// Each switch independently enables one extension relative to strict JSON.
/// The default configuration is the full JSON5 dialect; the
/// [`jsonc`](Self::jsonc) and [`strict_json`](Self::strict_json) presets
/// progressively disable extensions.
///
/// # Examples
///
/// ```
/// use jsonquint::ParserOptions;
///
/// // JSONC: comments, but none of the other extensions.
/// let options = ParserOptions::jsonc();
/// assert!(options.comments);
/// assert!(!options.trailing_commas);
///
/// // One-off dialects compose from a preset.
/// let options = ParserOptions {
///     single_quote_strings: false,
///     ..ParserOptions::json5()
/// };
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether `//` line comments and `/* */` block comments are accepted.
    pub comments: bool,

    /// Whether a `,` may directly precede a closing `]` or `}`.
    pub trailing_commas: bool,

    /// Whether object keys may be bare identifiers rather than strings.
    pub bare_identifier_keys: bool,

    /// Whether strings may be delimited with `'` as well as `"`.
    pub single_quote_strings: bool,

    /// Whether a backslash-escaped line terminator inside a string is
    /// accepted (as a line continuation).
    pub escaped_newline_strings: bool,
}

impl ParserOptions {
    /// The full JSON5 dialect: every extension enabled.
    #[must_use]
    pub const fn json5() -> Self {
        Self {
            comments: true,
            trailing_commas: true,
            bare_identifier_keys: true,
            single_quote_strings: true,
            escaped_newline_strings: true,
        }
    }

    /// The JSONC dialect: comments only.
    #[must_use]
    pub const fn jsonc() -> Self {
        Self {
            comments: true,
            trailing_commas: false,
            bare_identifier_keys: false,
            single_quote_strings: false,
            escaped_newline_strings: false,
        }
    }

    /// Strict JSON: every extension disabled.
    #[must_use]
    pub const fn strict_json() -> Self {
        Self {
            comments: false,
            trailing_commas: false,
            bare_identifier_keys: false,
            single_quote_strings: false,
            escaped_newline_strings: false,
        }
    }
}

impl Default for ParserOptions {
    /// Defaults to the full JSON5 dialect.
    fn default() -> Self {
        Self::json5()
    }
}
