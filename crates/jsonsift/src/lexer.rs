//! The lexer: a byte-at-a-time state machine turning input chunks into JSON
//! lexemes.
//!
//! The lexer owns a single growable buffer of unread bytes. Chunks are fed
//! with [`Lexer::feed`]; [`Lexer::next_lexeme`] consumes buffered bytes and
//! either produces one complete [`Lexeme`], reports [`Scan::Pending`] when
//! the buffer ran dry mid-scan, or reports [`Scan::Eof`] once the input has
//! ended cleanly. A lexeme is never emitted partially: if a chunk ends inside
//! a string, number, or keyword, the accumulated bytes are retained and the
//! next chunk continues the same literal, so chunk boundaries are invisible in
//! the output.
//!
//! String lexemes carry their raw bytes (quotes and escapes included);
//! decoding is deferred to the parser. Number lexemes terminate on one byte
//! of lookahead, which stays in the buffer for the next scan.
use core::mem;

use crate::{
    buffer::InputBuffer,
    error::{ErrorKind, JsonError},
    literal::{ExpectedKeyword, Step},
};

/// The kind of a [`Lexeme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    /// One of `{` `}` `[` `]` `,` `:`, carried as its byte.
    Punct(u8),
    /// A string literal; the raw bytes include both quotes.
    Str,
    /// A number literal, sign and exponent included.
    Number,
    /// The keyword `true`.
    True,
    /// The keyword `false`.
    False,
    /// The keyword `null`.
    Null,
}

/// A minimal syntactic token of JSON: kind plus the literal bytes exactly as
/// they appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// What was recognised.
    pub kind: LexemeKind,
    /// The raw input bytes of the lexeme.
    pub raw: Vec<u8>,
}

/// Outcome of one [`Lexer::next_lexeme`] call.
#[derive(Debug, PartialEq, Eq)]
pub enum Scan {
    /// One complete lexeme.
    Lexeme(Lexeme),
    /// The buffer is exhausted but the input has not ended; feed more bytes.
    Pending,
    /// The input ended cleanly with no lexeme in progress.
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Default,
    Keyword,
    Sign,
    Zero,
    Integer,
    FractionStart,
    Fraction,
    ExponentStart,
    ExponentSign,
    Exponent,
    Str,
    StrEscape,
    StrUnicode,
}

/// The streaming lexer.
#[derive(Debug)]
pub struct Lexer {
    input: InputBuffer,
    scratch: Vec<u8>,
    state: LexState,
    keyword: ExpectedKeyword,
    hex_left: u8,
    closed: bool,

    offset: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Creates a lexer whose working buffer starts with `buf_size_hint`
    /// bytes of capacity. The hint caps nothing; the buffer grows as needed.
    #[must_use]
    pub fn new(buf_size_hint: usize) -> Self {
        Self {
            input: InputBuffer::with_capacity(buf_size_hint),
            scratch: Vec::new(),
            state: LexState::Default,
            keyword: ExpectedKeyword::none(),
            hex_left: 0,
            closed: false,

            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Appends a chunk of input bytes. Bytes fed after [`Lexer::end_input`]
    /// are never scanned.
    pub fn feed(&mut self, chunk: &[u8]) {
        if !self.closed {
            self.input.push(chunk);
        }
    }

    /// Marks the end of input. Subsequent scans flush any terminable number
    /// lexeme and then report [`Scan::Eof`]; an unterminated string, keyword,
    /// or dangling number prefix becomes an incomplete-input error.
    pub fn end_input(&mut self) {
        self.closed = true;
    }

    pub(crate) fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Absolute byte offset of the next unconsumed input byte.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Scans the next lexeme out of the buffered input.
    ///
    /// # Errors
    ///
    /// Returns a [`JsonError`] for any byte that is invalid in context, or an
    /// incomplete-input error when the input ends mid-lexeme.
    pub fn next_lexeme(&mut self) -> Result<Scan, JsonError> {
        loop {
            match self.state {
                LexState::Default => match self.input.peek() {
                    None => {
                        return Ok(if self.closed { Scan::Eof } else { Scan::Pending });
                    }
                    Some(b' ' | b'\t' | b'\r' | b'\n') => self.advance(),
                    Some(b @ (b'{' | b'}' | b'[' | b']' | b',' | b':')) => {
                        self.advance();
                        return Ok(Scan::Lexeme(Lexeme {
                            kind: LexemeKind::Punct(b),
                            raw: vec![b],
                        }));
                    }
                    Some(b'"') => {
                        self.begin(b'"', LexState::Str);
                    }
                    Some(b @ (b't' | b'f' | b'n')) => {
                        self.keyword = ExpectedKeyword::new(b);
                        self.begin(b, LexState::Keyword);
                    }
                    Some(b @ b'-') => self.begin(b, LexState::Sign),
                    Some(b @ b'0') => self.begin(b, LexState::Zero),
                    Some(b) if b.is_ascii_digit() => self.begin(b, LexState::Integer),
                    Some(b) => return Err(self.unexpected(b)),
                },

                LexState::Keyword => match self.input.peek() {
                    None => return self.pending_or("truncated keyword literal"),
                    Some(b) => match self.keyword.step(b) {
                        Step::NeedMore => {
                            self.advance();
                            self.scratch.push(b);
                        }
                        Step::Done(kind) => {
                            self.advance();
                            self.scratch.push(b);
                            return Ok(self.take_lexeme(kind));
                        }
                        Step::Reject => return Err(self.unexpected(b)),
                    },
                },

                LexState::Sign => match self.input.peek() {
                    None => return self.pending_or("truncated number literal"),
                    Some(b @ b'0') => self.extend(b, LexState::Zero),
                    Some(b) if b.is_ascii_digit() => self.extend(b, LexState::Integer),
                    Some(b) => return Err(self.unexpected(b)),
                },

                LexState::Zero => match self.input.peek() {
                    None if self.closed => return Ok(self.number_lexeme()),
                    None => return Ok(Scan::Pending),
                    Some(b @ b'.') => self.extend(b, LexState::FractionStart),
                    Some(b @ (b'e' | b'E')) => self.extend(b, LexState::ExponentStart),
                    // One-byte lookahead: the terminator stays in the buffer.
                    Some(_) => return Ok(self.number_lexeme()),
                },

                LexState::Integer => match self.input.peek() {
                    None if self.closed => return Ok(self.number_lexeme()),
                    None => return Ok(Scan::Pending),
                    Some(b @ b'.') => self.extend(b, LexState::FractionStart),
                    Some(b @ (b'e' | b'E')) => self.extend(b, LexState::ExponentStart),
                    Some(b) if b.is_ascii_digit() => self.copy_digits(),
                    Some(_) => return Ok(self.number_lexeme()),
                },

                LexState::FractionStart => match self.input.peek() {
                    None => return self.pending_or("truncated number literal"),
                    Some(b) if b.is_ascii_digit() => {
                        self.extend(b, LexState::Fraction);
                        self.copy_digits();
                    }
                    // `12.` followed by a non-digit can never become a number.
                    Some(b) => return Err(self.unexpected(b)),
                },

                LexState::Fraction => match self.input.peek() {
                    None if self.closed => return Ok(self.number_lexeme()),
                    None => return Ok(Scan::Pending),
                    Some(b @ (b'e' | b'E')) => self.extend(b, LexState::ExponentStart),
                    Some(b) if b.is_ascii_digit() => self.copy_digits(),
                    Some(_) => return Ok(self.number_lexeme()),
                },

                LexState::ExponentStart => match self.input.peek() {
                    None => return self.pending_or("truncated number literal"),
                    Some(b @ (b'+' | b'-')) => self.extend(b, LexState::ExponentSign),
                    Some(b) if b.is_ascii_digit() => {
                        self.extend(b, LexState::Exponent);
                        self.copy_digits();
                    }
                    Some(b) => return Err(self.unexpected(b)),
                },

                LexState::ExponentSign => match self.input.peek() {
                    None => return self.pending_or("truncated number literal"),
                    Some(b) if b.is_ascii_digit() => {
                        self.extend(b, LexState::Exponent);
                        self.copy_digits();
                    }
                    Some(b) => return Err(self.unexpected(b)),
                },

                LexState::Exponent => match self.input.peek() {
                    None if self.closed => return Ok(self.number_lexeme()),
                    None => return Ok(Scan::Pending),
                    Some(b) if b.is_ascii_digit() => self.copy_digits(),
                    Some(_) => return Ok(self.number_lexeme()),
                },

                LexState::Str => match self.input.peek() {
                    None => return self.pending_or("unterminated string literal"),
                    Some(b @ b'"') => {
                        self.advance();
                        self.scratch.push(b);
                        self.state = LexState::Default;
                        return Ok(self.take_lexeme(LexemeKind::Str));
                    }
                    Some(b @ b'\\') => self.extend(b, LexState::StrEscape),
                    Some(b) if b < 0x20 => {
                        return Err(self.error(ErrorKind::UnescapedControl(b)));
                    }
                    Some(_) => {
                        // Bulk-copy the span up to the next quote, escape, or
                        // control byte. UTF-8 continuation bytes are >= 0x80,
                        // so a quote inside a multi-byte sequence cannot be
                        // mistaken for the terminator.
                        let copied = self
                            .input
                            .copy_while(&mut self.scratch, |b| b != b'"' && b != b'\\' && b >= 0x20);
                        self.offset += copied;
                        self.column += copied;
                    }
                },

                LexState::StrEscape => match self.input.peek() {
                    None => return self.pending_or("unterminated string literal"),
                    Some(b @ (b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't')) => {
                        self.extend(b, LexState::Str);
                    }
                    Some(b @ b'u') => {
                        self.hex_left = 4;
                        self.extend(b, LexState::StrUnicode);
                    }
                    Some(b) => return Err(self.error(ErrorKind::InvalidEscape(b))),
                },

                LexState::StrUnicode => match self.input.peek() {
                    None => return self.pending_or("unterminated string literal"),
                    Some(b) if b.is_ascii_hexdigit() => {
                        self.advance();
                        self.scratch.push(b);
                        self.hex_left -= 1;
                        if self.hex_left == 0 {
                            self.state = LexState::Str;
                        }
                    }
                    Some(b) => return Err(self.error(ErrorKind::InvalidUnicodeEscape(b))),
                },
            }
        }
    }

    /// Begin a fresh lexeme with introducer byte `b`.
    fn begin(&mut self, b: u8, next: LexState) {
        self.advance();
        self.scratch.clear();
        self.scratch.push(b);
        self.state = next;
    }

    /// Consume `b` into the current lexeme and switch state.
    fn extend(&mut self, b: u8, next: LexState) {
        self.advance();
        self.scratch.push(b);
        self.state = next;
    }

    fn copy_digits(&mut self) {
        let copied = self
            .input
            .copy_while(&mut self.scratch, |b| b.is_ascii_digit());
        self.offset += copied;
        self.column += copied;
    }

    fn take_lexeme(&mut self, kind: LexemeKind) -> Scan {
        self.state = LexState::Default;
        Scan::Lexeme(Lexeme {
            kind,
            raw: mem::take(&mut self.scratch),
        })
    }

    fn number_lexeme(&mut self) -> Scan {
        self.take_lexeme(LexemeKind::Number)
    }

    fn pending_or(&self, context: &'static str) -> Result<Scan, JsonError> {
        if self.closed {
            Err(self.error(ErrorKind::Incomplete(context)))
        } else {
            Ok(Scan::Pending)
        }
    }

    #[inline]
    fn advance(&mut self) {
        if let Some(b) = self.input.next() {
            self.offset += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn unexpected(&self, b: u8) -> JsonError {
        self.error(ErrorKind::UnexpectedByte(b))
    }

    fn error(&self, kind: ErrorKind) -> JsonError {
        JsonError::new(kind, self.line, self.column)
    }
}
