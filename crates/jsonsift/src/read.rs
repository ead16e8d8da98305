//! The pull delivery adapters: drive any [`Pipeline`] from a
//! [`std::io::Read`] byte source.
//!
//! Each adapter reads `buf_size`-byte chunks on demand (only when the
//! pipeline has no output ready), feeds them in, and closes the pipeline at
//! end of stream. All parsing happens inside the pipeline, so pull mode
//! emits exactly the sequences push mode does for the same bytes.
use std::io::Read;

use crate::{
    error::JsonError,
    factory::{StdFactory, ValueFactory},
    items::ItemsParser,
    kvitems::KvItemsParser,
    options::ParserOptions,
    parser::BasicParser,
    pipeline::Pipeline,
    prefix::PrefixedParser,
};

/// An iterator pulling pipeline outputs out of a byte source.
///
/// Produced by [`basic_parse`], [`parse`], [`items`], and [`kvitems`]. After
/// yielding an `Err` the iterator is fused.
#[derive(Debug)]
pub struct Pull<P, R> {
    pipeline: P,
    reader: Option<R>,
    chunk: Vec<u8>,
    failed: bool,
}

impl<P: Pipeline, R: Read> Pull<P, R> {
    fn new(pipeline: P, reader: R, options: ParserOptions) -> Self {
        Self {
            pipeline,
            reader: Some(reader),
            chunk: vec![0; options.buf_size.get()],
            failed: false,
        }
    }
}

impl<P: Pipeline, R: Read> Iterator for Pull<P, R> {
    type Item = Result<P::Output, JsonError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(out) = self.pipeline.next_output() {
                self.failed = out.is_err();
                return Some(out);
            }
            let reader = self.reader.as_mut()?;
            match reader.read(&mut self.chunk) {
                Ok(0) => {
                    self.pipeline.end_input();
                    self.reader = None;
                }
                Ok(n) => self.pipeline.feed(&self.chunk[..n]),
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
                Err(err) => {
                    self.failed = true;
                    return Some(Err(JsonError::io(err)));
                }
            }
        }
    }
}

/// Pull iterator over basic events; see [`basic_parse`].
pub type BasicParse<R> = Pull<BasicParser, R>;
/// Pull iterator over prefixed events; see [`parse`].
pub type Parse<R> = Pull<PrefixedParser, R>;
/// Pull iterator over values at a prefix; see [`items`].
pub type Items<R, F = StdFactory> = Pull<ItemsParser<F>, R>;
/// Pull iterator over `(key, value)` pairs at a prefix; see [`kvitems`].
pub type KvItems<R, F = StdFactory> = Pull<KvItemsParser<F>, R>;

/// Iterates the [`Event`](crate::Event)s of the JSON document read from
/// `source`.
///
/// # Examples
///
/// ```rust
/// use jsonsift::{Event, ParserOptions, basic_parse};
///
/// let events: Vec<Event> = basic_parse(&b"[null]"[..], ParserOptions::default())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(events, vec![Event::StartArray, Event::Null, Event::EndArray]);
/// ```
pub fn basic_parse<R: Read>(source: R, options: ParserOptions) -> BasicParse<R> {
    Pull::new(BasicParser::new(options), source, options)
}

/// Iterates the [`PrefixedEvent`](crate::PrefixedEvent)s of the JSON
/// document read from `source`.
pub fn parse<R: Read>(source: R, options: ParserOptions) -> Parse<R> {
    Pull::new(PrefixedParser::new(options), source, options)
}

/// Iterates the materialised values found at `prefix` in the JSON document
/// read from `source`.
///
/// # Examples
///
/// ```rust
/// use jsonsift::{ParserOptions, Value, items};
///
/// let source = &br#"{"docs": [{"n": 1}, {"n": 2}]}"#[..];
/// let ns: Vec<Value> = items(source, "docs.item.n", ParserOptions::default())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(ns, vec![Value::from(1_i64), Value::from(2_i64)]);
/// ```
pub fn items<R: Read>(source: R, prefix: &str, options: ParserOptions) -> Items<R> {
    items_with_factory(source, prefix, StdFactory, options)
}

/// Like [`items`], building values through a custom
/// [`ValueFactory`](crate::ValueFactory).
pub fn items_with_factory<R: Read, F: ValueFactory>(
    source: R,
    prefix: &str,
    factory: F,
    options: ParserOptions,
) -> Items<R, F> {
    Pull::new(ItemsParser::with_factory(prefix, factory, options), source, options)
}

/// Iterates the `(key, value)` pairs of the object found at `prefix` in the
/// JSON document read from `source`.
pub fn kvitems<R: Read>(source: R, prefix: &str, options: ParserOptions) -> KvItems<R> {
    kvitems_with_factory(source, prefix, StdFactory, options)
}

/// Like [`kvitems`], building values through a custom
/// [`ValueFactory`](crate::ValueFactory).
pub fn kvitems_with_factory<R: Read, F: ValueFactory>(
    source: R,
    prefix: &str,
    factory: F,
    options: ParserOptions,
) -> KvItems<R, F> {
    Pull::new(
        KvItemsParser::with_factory(prefix, factory, options),
        source,
        options,
    )
}
