//! Events emitted by the parsing layers.
//!
//! The basic parser produces a stream of [`Event`]s describing the document
//! structure; the prefix tracker wraps each one in a [`PrefixedEvent`] that
//! adds the dotted path of the event's location.
use crate::number::Number;

/// A semantic notification from the parser.
///
/// Container boundaries carry no payload; `MapKey`, `String`, `Boolean`, and
/// `Number` carry their decoded value. A `MapKey` is always followed, after
/// zero or more nested structures, by exactly one value event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Event {
    /// `{`: a new object begins.
    StartMap,
    /// `}`: the innermost object ends.
    EndMap,
    /// `[`: a new array begins.
    StartArray,
    /// `]`: the innermost array ends.
    EndArray,
    /// An object key, decoded.
    MapKey(String),
    /// The keyword `null`.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A number with its integer/decimal distinction preserved.
    Number(Number),
    /// A string value, decoded.
    String(String),
}

impl Event {
    /// Returns `true` for events that carry a scalar value (`null`,
    /// booleans, numbers, and strings, but not keys or container boundaries).
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Event::Null | Event::Boolean(_) | Event::Number(_) | Event::String(_)
        )
    }
}

/// An [`Event`] tagged with the dotted path of its location.
///
/// The root has the empty prefix; object members append their key, array
/// elements append the literal component `item`. Keys are opaque: a key
/// containing a dot contributes a single component that happens to contain a
/// dot, indistinguishable in the materialised form from two nested
/// components.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrefixedEvent {
    /// Dotted path of the event's location; empty at the root.
    pub prefix: String,
    /// The underlying event.
    pub event: Event,
}

impl PrefixedEvent {
    /// Convenience constructor, mostly for tests and examples.
    #[must_use]
    pub fn new(prefix: impl Into<String>, event: Event) -> Self {
        Self {
            prefix: prefix.into(),
            event,
        }
    }
}
