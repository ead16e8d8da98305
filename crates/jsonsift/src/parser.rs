//! The basic parser: lexemes in, typed [`Event`]s out.
//!
//! `BasicParser` drives the lexer, enforces the JSON grammar with a stack of
//! container frames, decodes strings, and applies the integer/decimal number
//! split. It is the push façade of the pipeline: feed chunks with
//! [`BasicParser::feed`], drain events by iterating, and close the input
//! with [`BasicParser::finish`].
//!
//! # Examples
//!
//! ```rust
//! use jsonsift::{BasicParser, Event, ParserOptions};
//!
//! let mut parser = BasicParser::new(ParserOptions::default());
//! parser.feed(br#"{"key": [null]}"#);
//! let events: Vec<_> = parser.finish().collect::<Result<_, _>>().unwrap();
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::StartMap,
//!         Event::MapKey("key".to_string()),
//!         Event::StartArray,
//!         Event::Null,
//!         Event::EndArray,
//!         Event::EndMap,
//!     ]
//! );
//! ```
use crate::{
    error::{ErrorKind, JsonError},
    escape,
    event::Event,
    lexer::{Lexeme, LexemeKind, Lexer, Scan},
    number::Number,
    options::ParserOptions,
    pipeline::Pipeline,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Expecting a top-level value.
    Start,
    /// After `{`: a key or `}`.
    BeforeFirstKey,
    /// After `,` in an object: a key only.
    BeforeKey,
    /// After a key: `:`.
    AfterKey,
    /// After `:`: a value.
    BeforeValue,
    /// After an object member's value: `,` or `}`.
    AfterMapValue,
    /// After `[`: a value or `]`.
    BeforeFirstItem,
    /// After `,` in an array: a value only.
    BeforeItem,
    /// After an array element: `,` or `]`.
    AfterItem,
    /// A complete top-level value has been consumed.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Map,
    Array,
}

/// The streaming basic parser.
///
/// Implements [`Iterator`]; `next` returns `None` when no further event can
/// be produced from the bytes fed so far. Feeding more bytes may make the
/// iterator productive again; call [`BasicParser::finish`] to assert that
/// no more input will arrive and drain the rest.
#[derive(Debug)]
pub struct BasicParser {
    lexer: Lexer,
    state: ParseState,
    frames: Vec<Container>,
    multiple_values: bool,
    poisoned: bool,
}

impl Default for BasicParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl BasicParser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            lexer: Lexer::new(options.buf_size.get()),
            state: ParseState::Start,
            frames: Vec::with_capacity(16),
            multiple_values: options.multiple_values,
            poisoned: false,
        }
    }

    /// Feeds a chunk of JSON bytes.
    ///
    /// Chunks may split the input anywhere, including inside multi-byte
    /// UTF-8 sequences, escapes, and number literals; the emitted event
    /// sequence depends only on the byte sequence, never on its chunking.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.lexer.feed(chunk);
    }

    /// Feeds pre-decoded text by re-encoding it as UTF-8 bytes.
    #[deprecated(note = "feed bytes instead; text input is equivalent to feeding its UTF-8 bytes")]
    pub fn feed_text(&mut self, text: &str) {
        self.feed(text.as_bytes());
    }

    /// Marks the end of input and returns a closed parser that drains the
    /// remaining events.
    #[must_use]
    pub fn finish(mut self) -> ClosedBasicParser {
        self.close();
        ClosedBasicParser { parser: self }
    }

    pub(crate) fn close(&mut self) {
        self.lexer.end_input();
    }

    pub(crate) fn next_event(&mut self) -> Option<Result<Event, JsonError>> {
        if self.poisoned {
            return None;
        }
        loop {
            match self.lexer.next_lexeme() {
                Err(err) => {
                    self.poisoned = true;
                    return Some(Err(err));
                }
                Ok(Scan::Pending) => return None,
                Ok(Scan::Eof) => return self.at_eof(),
                Ok(Scan::Lexeme(lexeme)) => match self.dispatch(lexeme) {
                    Err(err) => {
                        self.poisoned = true;
                        return Some(Err(err));
                    }
                    Ok(Some(event)) => return Some(Ok(event)),
                    Ok(None) => {}
                },
            }
        }
    }

    fn at_eof(&mut self) -> Option<Result<Event, JsonError>> {
        match self.state {
            ParseState::End => None,
            ParseState::Start if self.multiple_values => None,
            state => {
                self.poisoned = true;
                let context = match state {
                    ParseState::Start => "no JSON value found",
                    ParseState::BeforeFirstKey
                    | ParseState::BeforeKey
                    | ParseState::AfterKey
                    | ParseState::BeforeValue
                    | ParseState::AfterMapValue => "unclosed object",
                    _ => "unclosed array",
                };
                Some(Err(self.error(ErrorKind::Incomplete(context))))
            }
        }
    }

    fn dispatch(&mut self, lexeme: Lexeme) -> Result<Option<Event>, JsonError> {
        use ParseState::{
            AfterItem, AfterKey, AfterMapValue, BeforeFirstItem, BeforeFirstKey, BeforeItem,
            BeforeKey, BeforeValue, End, Start,
        };

        if self.state == End {
            if !self.multiple_values {
                return Err(self.error(ErrorKind::TrailingData));
            }
            // Multiple-values mode: each complete value resets to the start
            // state and the next lexeme begins a fresh document.
            self.state = Start;
        }

        match self.state {
            Start | BeforeValue | BeforeFirstItem | BeforeItem => self.value_lexeme(lexeme),

            BeforeFirstKey => match lexeme.kind {
                LexemeKind::Str => {
                    let key = self.decode(&lexeme.raw)?;
                    self.state = AfterKey;
                    Ok(Some(Event::MapKey(key)))
                }
                LexemeKind::Punct(b'}') => self.pop_map(),
                _ => Err(self.syntax("expected object key or '}'")),
            },

            BeforeKey => match lexeme.kind {
                LexemeKind::Str => {
                    let key = self.decode(&lexeme.raw)?;
                    self.state = AfterKey;
                    Ok(Some(Event::MapKey(key)))
                }
                _ => Err(self.syntax("expected object key after ','")),
            },

            AfterKey => match lexeme.kind {
                LexemeKind::Punct(b':') => {
                    self.state = BeforeValue;
                    Ok(None)
                }
                _ => Err(self.syntax("expected ':' after object key")),
            },

            AfterMapValue => match lexeme.kind {
                LexemeKind::Punct(b',') => {
                    self.state = BeforeKey;
                    Ok(None)
                }
                LexemeKind::Punct(b'}') => self.pop_map(),
                _ => Err(self.syntax("expected ',' or '}' in object")),
            },

            AfterItem => match lexeme.kind {
                LexemeKind::Punct(b',') => {
                    self.state = BeforeItem;
                    Ok(None)
                }
                LexemeKind::Punct(b']') => self.pop_array(),
                _ => Err(self.syntax("expected ',' or ']' in array")),
            },

            End => Err(self.error(ErrorKind::TrailingData)),
        }
    }

    fn value_lexeme(&mut self, lexeme: Lexeme) -> Result<Option<Event>, JsonError> {
        match lexeme.kind {
            LexemeKind::Punct(b'{') => {
                self.frames.push(Container::Map);
                self.state = ParseState::BeforeFirstKey;
                Ok(Some(Event::StartMap))
            }
            LexemeKind::Punct(b'[') => {
                self.frames.push(Container::Array);
                self.state = ParseState::BeforeFirstItem;
                Ok(Some(Event::StartArray))
            }
            // `]` directly after `[` closes an empty array; after `,` it
            // would be a trailing comma and falls through to the error arm.
            LexemeKind::Punct(b']') if self.state == ParseState::BeforeFirstItem => {
                self.pop_array()
            }
            LexemeKind::Str => {
                let value = self.decode(&lexeme.raw)?;
                self.after_value();
                Ok(Some(Event::String(value)))
            }
            LexemeKind::Number => {
                let number = Number::from_literal(&lexeme.raw).map_err(|k| self.error(k))?;
                self.after_value();
                Ok(Some(Event::Number(number)))
            }
            LexemeKind::True => {
                self.after_value();
                Ok(Some(Event::Boolean(true)))
            }
            LexemeKind::False => {
                self.after_value();
                Ok(Some(Event::Boolean(false)))
            }
            LexemeKind::Null => {
                self.after_value();
                Ok(Some(Event::Null))
            }
            LexemeKind::Punct(_) => Err(self.syntax("expected a JSON value")),
        }
    }

    fn pop_map(&mut self) -> Result<Option<Event>, JsonError> {
        self.frames.pop();
        self.after_value();
        Ok(Some(Event::EndMap))
    }

    fn pop_array(&mut self) -> Result<Option<Event>, JsonError> {
        self.frames.pop();
        self.after_value();
        Ok(Some(Event::EndArray))
    }

    /// A value (or a closed container) just completed; the next expectation
    /// depends on the enclosing frame.
    fn after_value(&mut self) {
        self.state = match self.frames.last() {
            None => ParseState::End,
            Some(Container::Map) => ParseState::AfterMapValue,
            Some(Container::Array) => ParseState::AfterItem,
        };
    }

    fn decode(&self, raw: &[u8]) -> Result<String, JsonError> {
        escape::decode_string(raw).map_err(|k| self.error(k))
    }

    fn syntax(&self, msg: &'static str) -> JsonError {
        self.error(ErrorKind::Syntax(msg))
    }

    fn error(&self, kind: ErrorKind) -> JsonError {
        let (line, column) = self.lexer.position();
        JsonError::new(kind, line, column)
    }
}

impl Iterator for BasicParser {
    type Item = Result<Event, JsonError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event()
    }
}

impl Pipeline for BasicParser {
    type Output = Event;

    fn feed(&mut self, chunk: &[u8]) {
        BasicParser::feed(self, chunk);
    }

    fn end_input(&mut self) {
        self.close();
    }

    fn next_output(&mut self) -> Option<Result<Event, JsonError>> {
        self.next_event()
    }
}

/// A [`BasicParser`] whose input has ended; iterate to drain the remaining
/// events.
#[derive(Debug)]
pub struct ClosedBasicParser {
    parser: BasicParser,
}

impl Iterator for ClosedBasicParser {
    type Item = Result<Event, JsonError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parser.next_event()
    }
}
