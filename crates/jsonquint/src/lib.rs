//! A streaming JSON5 tokenizer, event parser, and tree materializer.
//!
//! Three layers, each pulling from the one below, one unit at a time:
//! [`Tokenizer`] classifies characters into located tokens, [`Parser`]
//! turns tokens into structural [`ParseEvent`]s under a configurable
//! dialect, and [`parse`] materializes the event stream into a [`Value`]
//! tree. The input is one borrowed span; the tokenizer and parser never
//! allocate.
//!
//! ```
//! use jsonquint::{Value, parse};
//!
//! let value = parse("{greeting: 'hello', /* totals */ counts: [1, 2, 3,]}").unwrap();
//! let map = value.as_object().unwrap();
//! assert_eq!(map["greeting"], Value::String("hello".into()));
//! assert_eq!(map["counts"].as_array().unwrap().len(), 3);
//! ```
//!
//! Dialects other than full JSON5 come from [`ParserOptions`]:
//!
//! ```
//! use jsonquint::{ParserOptions, parse_with_options};
//!
//! let err = parse_with_options("[1, 2,]", ParserOptions::strict_json()).unwrap_err();
//! assert_eq!(err.message, "Trailing commas are not allowed: Expected an array value.");
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod event;
mod nest_stack;
mod options;
mod parser;
mod tokenizer;

#[cfg(feature = "values")]
mod error;
#[cfg(feature = "values")]
mod materialize;
#[cfg(feature = "values")]
mod value;

#[cfg(test)]
mod tests;

pub use event::{EventKind, ParseEvent};
pub use nest_stack::MAX_NESTING_DEPTH;
pub use options::ParserOptions;
pub use parser::Parser;
pub use tokenizer::{Token, TokenKind, Tokenizer, Tokens};

#[cfg(feature = "values")]
pub use error::ParseError;
#[cfg(feature = "values")]
pub use materialize::{parse, parse_next_value, parse_with_builder, parse_with_options};
#[cfg(feature = "values")]
pub use value::{Array, Map, TreeBuilder, Value, ValueBuilder};
