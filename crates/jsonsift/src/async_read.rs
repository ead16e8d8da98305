//! The async delivery adapters: drive any [`Pipeline`] from a
//! [`tokio::io::AsyncRead`] byte source.
//!
//! Identical to the pull adapters except that the byte-source read is a
//! suspension point; the pipeline itself stays synchronous between reads,
//! so the emitted sequences are byte-for-byte those of the other delivery
//! modes.
//!
//! Available with the `async` feature.
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::{
    error::JsonError,
    factory::StdFactory,
    items::ItemsParser,
    kvitems::KvItemsParser,
    options::ParserOptions,
    parser::BasicParser,
    pipeline::Pipeline,
    prefix::PrefixedParser,
};

/// An async puller of pipeline outputs out of a byte source.
///
/// Produced by [`basic_parse_async`], [`parse_async`], [`items_async`], and
/// [`kvitems_async`]. Consume it with a `while let` loop over
/// [`next`](AsyncPull::next); after an `Err` it yields `None` forever.
///
/// # Examples
///
/// ```rust
/// use jsonsift::{Event, ParserOptions, basic_parse_async};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut events = basic_parse_async(&b"[null]"[..], ParserOptions::default());
/// let mut collected = Vec::new();
/// while let Some(event) = events.next().await {
///     collected.push(event.unwrap());
/// }
/// assert_eq!(
///     collected,
///     vec![Event::StartArray, Event::Null, Event::EndArray]
/// );
/// # }
/// ```
#[derive(Debug)]
pub struct AsyncPull<P, R> {
    pipeline: P,
    reader: Option<R>,
    chunk: Vec<u8>,
    failed: bool,
}

impl<P: Pipeline, R: AsyncRead + Unpin> AsyncPull<P, R> {
    fn new(pipeline: P, reader: R, options: ParserOptions) -> Self {
        Self {
            pipeline,
            reader: Some(reader),
            chunk: vec![0; options.buf_size.get()],
            failed: false,
        }
    }

    /// Produces the next output, reading more bytes from the source
    /// whenever the pipeline runs dry.
    pub async fn next(&mut self) -> Option<Result<P::Output, JsonError>> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(out) = self.pipeline.next_output() {
                self.failed = out.is_err();
                return Some(out);
            }
            let reader = self.reader.as_mut()?;
            match reader.read(&mut self.chunk).await {
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

    /// Drains every remaining output into a `Vec`, stopping after the first
    /// error.
    ///
    /// # Errors
    ///
    /// Returns the first [`JsonError`] the pipeline produces.
    pub async fn collect_all(mut self) -> Result<Vec<P::Output>, JsonError> {
        let mut out = Vec::new();
        while let Some(item) = self.next().await {
            out.push(item?);
        }
        Ok(out)
    }
}

/// Async puller over basic events; see [`basic_parse_async`].
pub type AsyncBasicParse<R> = AsyncPull<BasicParser, R>;
/// Async puller over prefixed events; see [`parse_async`].
pub type AsyncParse<R> = AsyncPull<PrefixedParser, R>;
/// Async puller over values at a prefix; see [`items_async`].
pub type AsyncItems<R, F = StdFactory> = AsyncPull<ItemsParser<F>, R>;
/// Async puller over `(key, value)` pairs at a prefix; see
/// [`kvitems_async`].
pub type AsyncKvItems<R, F = StdFactory> = AsyncPull<KvItemsParser<F>, R>;

/// Async variant of [`basic_parse`](crate::basic_parse).
pub fn basic_parse_async<R: AsyncRead + Unpin>(
    source: R,
    options: ParserOptions,
) -> AsyncBasicParse<R> {
    AsyncPull::new(BasicParser::new(options), source, options)
}

/// Async variant of [`parse`](crate::parse).
pub fn parse_async<R: AsyncRead + Unpin>(source: R, options: ParserOptions) -> AsyncParse<R> {
    AsyncPull::new(PrefixedParser::new(options), source, options)
}

/// Async variant of [`items`](crate::items).
pub fn items_async<R: AsyncRead + Unpin>(
    source: R,
    prefix: &str,
    options: ParserOptions,
) -> AsyncItems<R> {
    AsyncPull::new(ItemsParser::new(prefix, options), source, options)
}

/// Async variant of [`kvitems`](crate::kvitems).
pub fn kvitems_async<R: AsyncRead + Unpin>(
    source: R,
    prefix: &str,
    options: ParserOptions,
) -> AsyncKvItems<R> {
    AsyncPull::new(KvItemsParser::new(prefix, options), source, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[tokio::test]
    async fn async_items_match_sync_items() {
        let json = &br#"{"docs": [{"n": 1}, {"n": 2}]}"#[..];
        let sync: Vec<Value> = crate::items(json, "docs.item.n", ParserOptions::default())
            .collect::<Result<_, _>>()
            .unwrap();
        let asynchronous = items_async(json, "docs.item.n", ParserOptions::default())
            .collect_all()
            .await
            .unwrap();
        assert_eq!(sync, asynchronous);
    }

    #[tokio::test]
    async fn async_events_are_chunking_independent() {
        let json = br#"{"key": [1, 2.5, "x"]}"#;
        let whole = basic_parse_async(&json[..], ParserOptions::default())
            .collect_all()
            .await
            .unwrap();
        let one = ParserOptions {
            buf_size: core::num::NonZeroUsize::MIN,
            ..Default::default()
        };
        let byte_at_a_time = basic_parse_async(&json[..], one).collect_all().await.unwrap();
        assert_eq!(whole, byte_at_a_time);
    }

    #[tokio::test]
    async fn async_error_fuses_the_stream() {
        let mut events = basic_parse_async(&b"[1,]"[..], ParserOptions::default());
        let mut saw_error = false;
        while let Some(event) = events.next().await {
            if event.is_err() {
                saw_error = true;
            }
        }
        assert!(saw_error);
        assert!(events.next().await.is_none());
    }
}
