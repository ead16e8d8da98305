//! A streaming, incremental JSON parser with prefix-based selectors.
//!
//! `jsonsift` consumes a byte stream of JSON text and emits structured
//! events without materialising the document. The pipeline is a stack of
//! lazy transformers: a lexer splits bytes into lexemes, the basic parser
//! validates the grammar and emits typed [`Event`]s, the prefix tracker
//! tags each event with its dotted path, and the `items` / `kvitems`
//! selectors reassemble whole sub-values or key/value pairs at a
//! caller-supplied prefix.
//!
//! Input may arrive in arbitrarily small chunks (splits inside multi-byte
//! UTF-8 sequences, escapes, and number literals are all fine) and the
//! emitted sequence is a pure function of the bytes, independent of
//! chunking and of the delivery mode:
//!
//! - **pull**: [`basic_parse`], [`parse`], [`items`], [`kvitems`] over any
//!   [`std::io::Read`];
//! - **push**: [`BasicParser`], [`PrefixedParser`], [`ItemsParser`],
//!   [`KvItemsParser`] with `feed` / iterate / `finish`;
//! - **async** (feature `async`): the same pull surface over
//!   [`tokio::io::AsyncRead`].
//!
//! Numbers keep their lexical distinction: integer literals become
//! unbounded integers, fractional and exponent forms become exact decimals
//! ([`Number`]). Malformed input fails with a positioned [`JsonError`];
//! input that merely *ended too early* fails with its incomplete subtype
//! (see [`JsonError::is_incomplete`]).
//!
//! # Examples
//!
//! ```rust
//! use jsonsift::{ParserOptions, Value, items};
//!
//! let json = &br#"{"docs": [{"n": 1}, {"n": 2}]}"#[..];
//! let ns: Vec<Value> = items(json, "docs.item.n", ParserOptions::default())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(ns, vec![Value::from(1_i64), Value::from(2_i64)]);
//! ```
#![allow(missing_docs)]

mod buffer;
mod builder;
mod error;
mod escape;
mod event;
mod factory;
mod items;
mod kvitems;
mod lexer;
mod literal;
mod number;
mod options;
mod parser;
mod pipeline;
mod prefix;
mod read;
mod value;

#[cfg(feature = "async")]
mod async_read;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, JsonError};
pub use event::{Event, PrefixedEvent};
pub use factory::{StdFactory, ValueFactory};
pub use items::{ClosedItemsParser, ItemsParser, ItemsSelector};
pub use kvitems::{ClosedKvItemsParser, KvItemsParser, KvItemsSelector};
pub use lexer::{Lexeme, LexemeKind, Lexer, Scan};
pub use number::Number;
pub use options::{CAPABILITIES, Capabilities, DEFAULT_BUF_SIZE, ParserOptions};
pub use parser::{BasicParser, ClosedBasicParser};
pub use pipeline::Pipeline;
pub use prefix::{ClosedPrefixedParser, PrefixedParser};
pub use read::{
    BasicParse, Items, KvItems, Parse, Pull, basic_parse, items, items_with_factory, kvitems,
    kvitems_with_factory, parse,
};
pub use value::{Array, Map, Value};

#[cfg(feature = "async")]
pub use async_read::{
    AsyncBasicParse, AsyncItems, AsyncKvItems, AsyncParse, AsyncPull, basic_parse_async,
    items_async, kvitems_async, parse_async,
};
