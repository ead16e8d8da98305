//! The `kvitems` selector: direct members of the object at a prefix.
//!
//! [`KvItemsSelector`] watches for `MapKey` events whose prefix equals the
//! target, i.e. the direct keys of the object sitting at that prefix,
//! captures the key, reconstructs the value that follows (scalar or whole
//! subtree), and yields the `(key, value)` pair. If the value at the target
//! is not an object, no key ever carries that prefix and the selector
//! yields nothing. Like `items`, it re-arms for every matching object, so
//! repeated prefixes (array elements, multiple-values mode) yield the pairs
//! of each one in document order.
use crate::{
    builder::ValueAssembler,
    error::JsonError,
    event::{Event, PrefixedEvent},
    factory::{StdFactory, ValueFactory},
    options::ParserOptions,
    pipeline::Pipeline,
    prefix::PrefixedParser,
};

/// The pure transducer: prefixed events in, `(key, value)` pairs out.
pub struct KvItemsSelector<F: ValueFactory = StdFactory> {
    prefix: String,
    factory: F,
    key: Option<String>,
    assembler: Option<ValueAssembler<F>>,
}

impl KvItemsSelector<StdFactory> {
    /// A selector building [`Value`](crate::Value)s with insertion-ordered
    /// objects.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_factory(prefix, StdFactory)
    }
}

impl<F: ValueFactory> KvItemsSelector<F> {
    /// A selector building values through `factory`.
    pub fn with_factory(prefix: impl Into<String>, factory: F) -> Self {
        Self {
            prefix: prefix.into(),
            factory,
            key: None,
            assembler: None,
        }
    }

    /// Feeds one prefixed event; returns a pair when a captured key's value
    /// completes.
    pub fn apply(&mut self, ev: PrefixedEvent) -> Option<(String, F::Value)> {
        if let Some(assembler) = self.assembler.as_mut() {
            if let Some(value) = assembler.apply(&self.factory, ev.event) {
                self.assembler = None;
                let key = self.key.take().unwrap_or_default();
                return Some((key, value));
            }
            return None;
        }

        // The event right after a captured key is the first event of its
        // value, so arming an empty assembler is enough: a scalar completes
        // it immediately, a container start pushes and waits for its end.
        if ev.prefix == self.prefix {
            if let Event::MapKey(key) = ev.event {
                self.key = Some(key);
                self.assembler = Some(ValueAssembler::new());
            }
        }
        None
    }
}

/// The push façade: bytes in, `(key, value)` pairs at a prefix out.
///
/// # Examples
///
/// ```rust
/// use jsonsift::{KvItemsParser, ParserOptions, Value};
///
/// let mut parser = KvItemsParser::new("meta", ParserOptions::default());
/// parser.feed(br#"{"meta": {"key": "value"}}"#);
/// let pairs: Vec<(String, Value)> = parser.finish().collect::<Result<_, _>>().unwrap();
/// assert_eq!(pairs, vec![("key".to_string(), Value::from("value"))]);
/// ```
pub struct KvItemsParser<F: ValueFactory = StdFactory> {
    inner: PrefixedParser,
    selector: KvItemsSelector<F>,
}

impl KvItemsParser<StdFactory> {
    /// Creates a `kvitems` parser with the default factory.
    #[must_use]
    pub fn new(prefix: impl Into<String>, options: ParserOptions) -> Self {
        Self::with_factory(prefix, StdFactory, options)
    }
}

impl<F: ValueFactory> KvItemsParser<F> {
    /// Creates a `kvitems` parser building values through `factory`.
    pub fn with_factory(prefix: impl Into<String>, factory: F, options: ParserOptions) -> Self {
        Self {
            inner: PrefixedParser::new(options),
            selector: KvItemsSelector::with_factory(prefix, factory),
        }
    }

    /// Feeds a chunk of JSON bytes; see
    /// [`BasicParser::feed`](crate::BasicParser::feed).
    pub fn feed(&mut self, chunk: &[u8]) {
        self.inner.feed(chunk);
    }

    /// Marks the end of input and returns a closed parser that drains the
    /// remaining pairs.
    #[must_use]
    pub fn finish(mut self) -> ClosedKvItemsParser<F> {
        self.close();
        ClosedKvItemsParser { parser: self }
    }

    pub(crate) fn close(&mut self) {
        self.inner.close();
    }

    pub(crate) fn next_pair(&mut self) -> Option<Result<(String, F::Value), JsonError>> {
        loop {
            match self.inner.next_event()? {
                Err(err) => return Some(Err(err)),
                Ok(ev) => {
                    if let Some(pair) = self.selector.apply(ev) {
                        return Some(Ok(pair));
                    }
                }
            }
        }
    }
}

impl<F: ValueFactory> Iterator for KvItemsParser<F> {
    type Item = Result<(String, F::Value), JsonError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_pair()
    }
}

impl<F: ValueFactory> Pipeline for KvItemsParser<F> {
    type Output = (String, F::Value);

    fn feed(&mut self, chunk: &[u8]) {
        KvItemsParser::feed(self, chunk);
    }

    fn end_input(&mut self) {
        self.close();
    }

    fn next_output(&mut self) -> Option<Result<(String, F::Value), JsonError>> {
        self.next_pair()
    }
}

/// A [`KvItemsParser`] whose input has ended; iterate to drain the
/// remaining pairs.
pub struct ClosedKvItemsParser<F: ValueFactory = StdFactory> {
    parser: KvItemsParser<F>,
}

impl<F: ValueFactory> Iterator for ClosedKvItemsParser<F> {
    type Item = Result<(String, F::Value), JsonError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parser.next_pair()
    }
}
