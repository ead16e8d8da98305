//! The `items` selector: whole values at a prefix.
//!
//! [`ItemsSelector`] watches a prefixed event stream for events whose prefix
//! equals the target. Scalars are yielded directly; a `StartMap`/`StartArray`
//! at the target begins an in-memory reconstruction that swallows every
//! following event until the container closes, then yields the finished
//! value. Multiple matches yield multiple values (the common case being
//! array elements via an `item` suffix) and the selector re-arms
//! indefinitely, so it works unchanged across concatenated documents in
//! multiple-values mode.
use crate::{
    builder::ValueAssembler,
    error::JsonError,
    event::{Event, PrefixedEvent},
    factory::{StdFactory, ValueFactory},
    options::ParserOptions,
    pipeline::Pipeline,
    prefix::PrefixedParser,
};

/// The pure transducer: prefixed events in, values out.
pub struct ItemsSelector<F: ValueFactory = StdFactory> {
    prefix: String,
    factory: F,
    assembler: Option<ValueAssembler<F>>,
}

impl ItemsSelector<StdFactory> {
    /// A selector building [`Value`](crate::Value)s with insertion-ordered
    /// objects.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_factory(prefix, StdFactory)
    }
}

impl<F: ValueFactory> ItemsSelector<F> {
    /// A selector building values through `factory`.
    pub fn with_factory(prefix: impl Into<String>, factory: F) -> Self {
        Self {
            prefix: prefix.into(),
            factory,
            assembler: None,
        }
    }

    /// Feeds one prefixed event; returns a value when one completes at the
    /// target prefix.
    pub fn apply(&mut self, ev: PrefixedEvent) -> Option<F::Value> {
        if let Some(assembler) = self.assembler.as_mut() {
            let done = assembler.apply(&self.factory, ev.event);
            if done.is_some() {
                self.assembler = None;
            }
            return done;
        }

        if ev.prefix != self.prefix {
            return None;
        }
        match ev.event {
            Event::StartMap | Event::StartArray => {
                let mut assembler = ValueAssembler::new();
                assembler.apply(&self.factory, ev.event);
                self.assembler = Some(assembler);
                None
            }
            // Keys and container ends at the target belong to an enclosing
            // structure; only values are items.
            Event::MapKey(_) | Event::EndMap | Event::EndArray => None,
            Event::Null => Some(self.factory.null()),
            Event::Boolean(b) => Some(self.factory.boolean(b)),
            Event::Number(n) => Some(self.factory.number(n)),
            Event::String(s) => Some(self.factory.string(s)),
        }
    }
}

/// The push façade: bytes in, materialised values at a prefix out.
///
/// # Examples
///
/// ```rust
/// use jsonsift::{ItemsParser, ParserOptions, Value};
///
/// let mut parser = ItemsParser::new("docs.item", ParserOptions::default());
/// parser.feed(br#"{"docs": [1, 2]}"#);
/// let values: Vec<Value> = parser.finish().collect::<Result<_, _>>().unwrap();
/// assert_eq!(values, vec![Value::from(1_i64), Value::from(2_i64)]);
/// ```
pub struct ItemsParser<F: ValueFactory = StdFactory> {
    inner: PrefixedParser,
    selector: ItemsSelector<F>,
}

impl ItemsParser<StdFactory> {
    /// Creates an `items` parser with the default factory.
    #[must_use]
    pub fn new(prefix: impl Into<String>, options: ParserOptions) -> Self {
        Self::with_factory(prefix, StdFactory, options)
    }
}

impl<F: ValueFactory> ItemsParser<F> {
    /// Creates an `items` parser building values through `factory`.
    pub fn with_factory(prefix: impl Into<String>, factory: F, options: ParserOptions) -> Self {
        Self {
            inner: PrefixedParser::new(options),
            selector: ItemsSelector::with_factory(prefix, factory),
        }
    }

    /// Feeds a chunk of JSON bytes; see
    /// [`BasicParser::feed`](crate::BasicParser::feed).
    pub fn feed(&mut self, chunk: &[u8]) {
        self.inner.feed(chunk);
    }

    /// Marks the end of input and returns a closed parser that drains the
    /// remaining values.
    #[must_use]
    pub fn finish(mut self) -> ClosedItemsParser<F> {
        self.close();
        ClosedItemsParser { parser: self }
    }

    pub(crate) fn close(&mut self) {
        self.inner.close();
    }

    pub(crate) fn next_value(&mut self) -> Option<Result<F::Value, JsonError>> {
        loop {
            match self.inner.next_event()? {
                Err(err) => return Some(Err(err)),
                Ok(ev) => {
                    if let Some(value) = self.selector.apply(ev) {
                        return Some(Ok(value));
                    }
                }
            }
        }
    }
}

impl<F: ValueFactory> Iterator for ItemsParser<F> {
    type Item = Result<F::Value, JsonError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_value()
    }
}

impl<F: ValueFactory> Pipeline for ItemsParser<F> {
    type Output = F::Value;

    fn feed(&mut self, chunk: &[u8]) {
        ItemsParser::feed(self, chunk);
    }

    fn end_input(&mut self) {
        self.close();
    }

    fn next_output(&mut self) -> Option<Result<F::Value, JsonError>> {
        self.next_value()
    }
}

/// An [`ItemsParser`] whose input has ended; iterate to drain the remaining
/// values.
pub struct ClosedItemsParser<F: ValueFactory = StdFactory> {
    parser: ItemsParser<F>,
}

impl<F: ValueFactory> Iterator for ClosedItemsParser<F> {
    type Item = Result<F::Value, JsonError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parser.next_value()
    }
}
