//! The byte-in/output-out contract shared by every pipeline stage.
//!
//! Each parsing layer (events, prefixed events, items, key/value items)
//! is a pure push transducer: bytes go in through [`Pipeline::feed`],
//! finished outputs are drained with [`Pipeline::next_output`], and
//! [`Pipeline::end_input`] marks the end of the stream. The delivery
//! adapters (pull, push, async) are thin shells around this trait and
//! contain no parsing logic of their own, which is what guarantees that all
//! delivery modes emit identical sequences for identical bytes.
use crate::error::JsonError;

/// A push-driven parsing pipeline stage.
pub trait Pipeline {
    /// What this stage produces: events, prefixed events, values, or
    /// key/value pairs.
    type Output;

    /// Appends a chunk of input bytes. Feeding never fails and never
    /// blocks; outputs become observable through
    /// [`next_output`](Pipeline::next_output).
    fn feed(&mut self, chunk: &[u8]);

    /// Signals that no more input will arrive.
    fn end_input(&mut self);

    /// Drains the next finished output, if one can be produced from the
    /// bytes seen so far.
    ///
    /// `None` means "nothing available right now": either more input is
    /// needed, or, after [`end_input`](Pipeline::end_input), the stream
    /// finished cleanly. After an `Err` the pipeline is poisoned and yields
    /// `None` forever.
    fn next_output(&mut self) -> Option<Result<Self::Output, JsonError>>;
}
