//! Abstraction over how selector output values are constructed.
//!
//! The `items` and `kvitems` selectors do not build [`Value`](crate::Value)
//! directly; they go through a [`ValueFactory`], which chooses the value,
//! array, and object representations. This is how the object container is
//! made pluggable: the default [`StdFactory`] builds [`Value`] with
//! insertion-ordered maps, while a custom factory can target sorted maps,
//! host-language objects, or any other representation without touching the
//! pipeline.
use crate::{
    number::Number,
    value::{Array, Map, Value},
};

/// Constructs values for the selectors.
///
/// Methods take `&self` so factories can carry configuration.
pub trait ValueFactory {
    /// The finished value type.
    type Value;
    /// The in-progress array container.
    type Array;
    /// The in-progress object container.
    type Object;

    /// A JSON `null`.
    fn null(&self) -> Self::Value;
    /// A JSON boolean.
    fn boolean(&self, value: bool) -> Self::Value;
    /// A JSON number.
    fn number(&self, value: Number) -> Self::Value;
    /// A JSON string.
    fn string(&self, value: String) -> Self::Value;

    /// A fresh, empty array container.
    fn new_array(&self) -> Self::Array;
    /// Appends one element.
    fn array_push(&self, array: &mut Self::Array, value: Self::Value);
    /// Seals an array container into a value.
    fn array_value(&self, array: Self::Array) -> Self::Value;

    /// A fresh, empty object container.
    fn new_object(&self) -> Self::Object;
    /// Inserts one member. Called once per key in document order.
    fn object_insert(&self, object: &mut Self::Object, key: String, value: Self::Value);
    /// Seals an object container into a value.
    fn object_value(&self, object: Self::Object) -> Self::Value;
}

/// The default factory: builds [`Value`] with insertion-ordered objects.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFactory;

impl ValueFactory for StdFactory {
    type Value = Value;
    type Array = Array;
    type Object = Map;

    #[inline]
    fn null(&self) -> Value {
        Value::Null
    }

    #[inline]
    fn boolean(&self, value: bool) -> Value {
        Value::Boolean(value)
    }

    #[inline]
    fn number(&self, value: Number) -> Value {
        Value::Number(value)
    }

    #[inline]
    fn string(&self, value: String) -> Value {
        Value::String(value)
    }

    #[inline]
    fn new_array(&self) -> Array {
        Array::new()
    }

    #[inline]
    fn array_push(&self, array: &mut Array, value: Value) {
        array.push(value);
    }

    #[inline]
    fn array_value(&self, array: Array) -> Value {
        Value::Array(array)
    }

    #[inline]
    fn new_object(&self) -> Map {
        Map::new()
    }

    #[inline]
    fn object_insert(&self, object: &mut Map, key: String, value: Value) {
        object.insert(key, value);
    }

    #[inline]
    fn object_value(&self, object: Map) -> Value {
        Value::Object(object)
    }
}
