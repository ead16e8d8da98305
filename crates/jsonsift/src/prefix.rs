//! The prefix tracker: tags each event with its dotted path.
//!
//! `PrefixedParser` wraps the basic parser and maintains a stack of path
//! components mirroring the container stack: the current key for each open
//! object, the literal component `item` for each open array. The dotted form
//! is materialised incrementally: pushing appends to one shared string,
//! popping truncates it, so emitting an event costs one clone of the current
//! prefix and no re-joining.
//!
//! Path components are opaque: a key that contains a dot, or the empty key,
//! contributes exactly one component. Components are joined with `.`
//! unconditionally, so key `""` under `a` materialises as `a.` and key
//! `"0.1"` at the root materialises identically to the nested path `0` → `1`.
use crate::{
    error::JsonError,
    event::{Event, PrefixedEvent},
    options::ParserOptions,
    parser::BasicParser,
    pipeline::Pipeline,
};

/// The component stack plus its incrementally-maintained dotted form.
#[derive(Debug, Default)]
struct PathStack {
    dotted: String,
    /// Byte offset in `dotted` where each component (and its leading
    /// separator, if any) begins.
    starts: Vec<usize>,
}

impl PathStack {
    fn push(&mut self, component: &str) {
        let had_components = !self.starts.is_empty();
        self.starts.push(self.dotted.len());
        if had_components {
            self.dotted.push('.');
        }
        self.dotted.push_str(component);
    }

    fn pop(&mut self) {
        if let Some(start) = self.starts.pop() {
            self.dotted.truncate(start);
        }
    }

    /// Swaps the top component, keeping the rest of the materialised form.
    fn replace_top(&mut self, component: &str) {
        if let Some(&start) = self.starts.last() {
            self.dotted.truncate(start);
            if self.starts.len() > 1 {
                self.dotted.push('.');
            }
            self.dotted.push_str(component);
        }
    }

    fn current(&self) -> String {
        self.dotted.clone()
    }

    /// The prefix of the enclosing container, i.e. the dotted form without
    /// the top component.
    fn parent(&self) -> String {
        match self.starts.last() {
            Some(&start) => self.dotted[..start].to_string(),
            None => String::new(),
        }
    }
}

/// The streaming parser with prefixes: wraps [`BasicParser`] and yields
/// [`PrefixedEvent`]s.
///
/// Same push surface as the basic parser: [`feed`](PrefixedParser::feed),
/// iterate, [`finish`](PrefixedParser::finish).
///
/// # Examples
///
/// ```rust
/// use jsonsift::{Event, ParserOptions, PrefixedParser};
///
/// let mut parser = PrefixedParser::new(ParserOptions::default());
/// parser.feed(br#"{"docs": [0]}"#);
/// let prefixed: Vec<_> = parser.finish().collect::<Result<_, _>>().unwrap();
/// let at: Vec<(&str, &Event)> = prefixed
///     .iter()
///     .map(|pe| (pe.prefix.as_str(), &pe.event))
///     .collect();
/// assert_eq!(at[2].0, "docs");
/// assert!(matches!(at[2].1, Event::StartArray));
/// assert_eq!(at[3].0, "docs.item");
/// ```
#[derive(Debug, Default)]
pub struct PrefixedParser {
    inner: BasicParser,
    path: PathStack,
}

impl PrefixedParser {
    /// Creates a prefixed parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            inner: BasicParser::new(options),
            path: PathStack::default(),
        }
    }

    /// Feeds a chunk of JSON bytes; see [`BasicParser::feed`].
    pub fn feed(&mut self, chunk: &[u8]) {
        self.inner.feed(chunk);
    }

    /// Feeds pre-decoded text by re-encoding it as UTF-8 bytes.
    #[deprecated(note = "feed bytes instead; text input is equivalent to feeding its UTF-8 bytes")]
    pub fn feed_text(&mut self, text: &str) {
        self.feed(text.as_bytes());
    }

    /// Marks the end of input and returns a closed parser that drains the
    /// remaining prefixed events.
    #[must_use]
    pub fn finish(mut self) -> ClosedPrefixedParser {
        self.close();
        ClosedPrefixedParser { parser: self }
    }

    pub(crate) fn close(&mut self) {
        self.inner.close();
    }

    pub(crate) fn next_event(&mut self) -> Option<Result<PrefixedEvent, JsonError>> {
        match self.inner.next_event()? {
            Ok(event) => Some(Ok(self.attach(event))),
            Err(err) => Some(Err(err)),
        }
    }

    /// Computes the prefix for one event and updates the path stack.
    fn attach(&mut self, event: Event) -> PrefixedEvent {
        let prefix = match &event {
            // Containers are tagged with their own location; the fresh
            // object's key slot stays empty until the first `MapKey` and is
            // never materialised while empty.
            Event::StartMap => {
                let prefix = self.path.current();
                self.path.push("");
                prefix
            }
            Event::StartArray => {
                let prefix = self.path.current();
                self.path.push("item");
                prefix
            }
            Event::EndMap | Event::EndArray => {
                self.path.pop();
                self.path.current()
            }
            // A key is tagged with the containing object's prefix, then
            // becomes the path component for the value that follows.
            Event::MapKey(key) => {
                let prefix = self.path.parent();
                self.path.replace_top(key);
                prefix
            }
            _ => self.path.current(),
        };
        PrefixedEvent { prefix, event }
    }
}

impl Iterator for PrefixedParser {
    type Item = Result<PrefixedEvent, JsonError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event()
    }
}

impl Pipeline for PrefixedParser {
    type Output = PrefixedEvent;

    fn feed(&mut self, chunk: &[u8]) {
        PrefixedParser::feed(self, chunk);
    }

    fn end_input(&mut self) {
        self.close();
    }

    fn next_output(&mut self) -> Option<Result<PrefixedEvent, JsonError>> {
        self.next_event()
    }
}

/// A [`PrefixedParser`] whose input has ended; iterate to drain the
/// remaining prefixed events.
#[derive(Debug)]
pub struct ClosedPrefixedParser {
    parser: PrefixedParser,
}

impl Iterator for ClosedPrefixedParser {
    type Item = Result<PrefixedEvent, JsonError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parser.next_event()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::Number;

    fn prefixed(input: &[u8]) -> Vec<(String, Event)> {
        let mut parser = PrefixedParser::new(ParserOptions::default());
        parser.feed(input);
        parser
            .finish()
            .map(|r| {
                let pe = r.unwrap();
                (pe.prefix, pe.event)
            })
            .collect()
    }

    #[test]
    fn root_scalar_has_empty_prefix() {
        assert_eq!(
            prefixed(b"0"),
            vec![(String::new(), Event::Number(Number::from(0_i64)))]
        );
    }

    #[test]
    fn object_members_use_their_key() {
        assert_eq!(
            prefixed(br#"{"a": {"b": 1}}"#),
            vec![
                (String::new(), Event::StartMap),
                (String::new(), Event::MapKey("a".into())),
                ("a".into(), Event::StartMap),
                ("a".into(), Event::MapKey("b".into())),
                ("a.b".into(), Event::Number(Number::from(1_i64))),
                ("a".into(), Event::EndMap),
                (String::new(), Event::EndMap),
            ]
        );
    }

    #[test]
    fn array_elements_use_the_item_component() {
        assert_eq!(
            prefixed(b"[[1]]"),
            vec![
                (String::new(), Event::StartArray),
                ("item".into(), Event::StartArray),
                ("item.item".into(), Event::Number(Number::from(1_i64))),
                ("item".into(), Event::EndArray),
                (String::new(), Event::EndArray),
            ]
        );
    }

    #[test]
    fn empty_keys_are_single_components() {
        assert_eq!(
            prefixed(br#"{"a": {"": 1}}"#),
            vec![
                (String::new(), Event::StartMap),
                (String::new(), Event::MapKey("a".into())),
                ("a".into(), Event::StartMap),
                ("a".into(), Event::MapKey(String::new())),
                ("a.".into(), Event::Number(Number::from(1_i64))),
                ("a".into(), Event::EndMap),
                (String::new(), Event::EndMap),
            ]
        );
    }

    #[test]
    fn dotted_keys_are_lexical() {
        // A key literally containing a dot materialises exactly like the
        // equivalent nested path.
        assert_eq!(
            prefixed(br#"{"0.1": 0}"#)[2],
            ("0.1".into(), Event::Number(Number::from(0_i64)))
        );
        assert_eq!(
            prefixed(br#"{"0": {"1": 0}}"#)[4],
            ("0.1".into(), Event::Number(Number::from(0_i64)))
        );
    }

    #[test]
    fn later_keys_replace_earlier_ones() {
        let events = prefixed(br#"{"first": 1, "second": {"x": 2}}"#);
        assert_eq!(events[3], (String::new(), Event::MapKey("second".into())));
        assert_eq!(events[4], ("second".into(), Event::StartMap));
        assert_eq!(
            events[6],
            ("second.x".into(), Event::Number(Number::from(2_i64)))
        );
    }
}
