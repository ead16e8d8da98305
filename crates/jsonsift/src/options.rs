//! Configuration for the parsing pipeline.
use core::num::NonZeroUsize;

/// Default chunk size for the pull and async adapters, and the initial
/// capacity hint for the lexer's working buffer.
pub const DEFAULT_BUF_SIZE: NonZeroUsize = match NonZeroUsize::new(64 * 1024) {
    Some(n) => n,
    None => unreachable!(),
};

/// Configuration options for the streaming JSON pipeline.
///
/// The same options drive every layer and every delivery mode; adapters that
/// do not read from a byte source ignore `buf_size` beyond using it as a
/// buffer capacity hint.
///
/// # Examples
///
/// ```rust
/// use jsonsift::ParserOptions;
///
/// let options = ParserOptions {
///     multiple_values: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Chunk size used when reading from a byte source, and the initial
    /// capacity of the lexer's working buffer. It hints, never caps: tokens
    /// larger than the buffer simply grow it.
    ///
    /// The type makes a non-positive size unrepresentable, so no runtime
    /// validation happens at construction.
    ///
    /// # Default
    ///
    /// 64 KiB.
    pub buf_size: NonZeroUsize,

    /// Whether to parse multiple whitespace-delimited JSON values from a
    /// single input stream.
    ///
    /// When `true`, the parser returns to its start state after each
    /// complete top-level value, accepting formats such as JSON Lines and
    /// arbitrary concatenations (`{}{}{}`); empty input is then acceptable.
    /// When `false`, exactly one top-level value is required and any further
    /// lexeme is an error.
    ///
    /// # Default
    ///
    /// `false`
    pub multiple_values: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            buf_size: DEFAULT_BUF_SIZE,
            multiple_values: false,
        }
    }
}

/// The feature set implemented by this parsing backend.
///
/// Mirrors the capability declaration that front-ends use to decide which
/// options they may pass; this backend supports everything in the struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether [`ParserOptions::multiple_values`] is honoured.
    pub multiple_values: bool,
}

/// The capabilities of this backend.
pub const CAPABILITIES: Capabilities = Capabilities {
    multiple_values: true,
};
