//! `items` and `kvitems` selector behaviour, including the dotted-name and
//! empty-member corners.
use std::collections::BTreeMap;

use rstest::rstest;

use super::{JSON, arr, canonical_object, dec_v, get_items, get_kvitems, int_v, obj};
use crate::{Number, ParserOptions, Value, ValueFactory, items_with_factory};

#[test]
fn items_at_the_root_yields_the_whole_document() {
    assert_eq!(get_items(JSON, ""), vec![canonical_object()]);
}

#[test]
fn items_at_scalar_prefixes() {
    assert_eq!(get_items(JSON, "docs.item.integer"), vec![int_v(0)]);
    assert_eq!(get_items(JSON, "docs.item.double"), vec![dec_v("0.5")]);
    assert_eq!(get_items(JSON, "docs.item.long"), vec![int_v(10_000_000_000)]);
}

#[test]
fn items_exponent_preserves_value_and_decimalness() {
    let exponents = get_items(JSON, "docs.item.exponent");
    assert_eq!(exponents, vec![dec_v("1.0e+2")]);
    let number = exponents[0].as_number().unwrap();
    assert!(!number.is_integer());
    assert_eq!(*number, Number::from(100_i64));
}

#[test]
fn items_two_dict_levels() {
    let json = br#"{"meta":{"view":{"columns":[{"id": -1}, {"id": -2}]}}}"#;
    assert_eq!(
        get_items(json, "meta.view.columns.item.id"),
        vec![int_v(-1), int_v(-2)]
    );
}

#[rstest]
#[case(br#"{"0.1": 0}"#, "0.1", vec![int_v(0)])]
#[case(br#"{"0.1": [{"a.b": 0}]}"#, "0.1.item.a.b", vec![int_v(0)])]
#[case(br#"{"0.1": 0, "0": {"1": 1}}"#, "0.1", vec![int_v(0), int_v(1)])]
#[case(br#"{"abc.def": 0}"#, "abc.def", vec![int_v(0)])]
#[case(br#"{"abc.def": 0}"#, "abc", vec![])]
#[case(br#"{"abc.def": 0}"#, "def", vec![])]
#[case(br#"{"0.1": 0}"#, "0", vec![])]
#[case(br#"{"0.1": 0}"#, "1", vec![])]
fn items_with_dotted_names(
    #[case] json: &[u8],
    #[case] prefix: &str,
    #[case] expected: Vec<Value>,
) {
    assert_eq!(get_items(json, prefix), expected);
}

#[test]
fn kvitems_of_each_docs_element() {
    assert_eq!(
        get_kvitems(JSON, "docs.item"),
        vec![
            ("null".to_string(), Value::Null),
            ("boolean".to_string(), Value::Boolean(false)),
            ("true".to_string(), Value::Boolean(true)),
            ("integer".to_string(), int_v(0)),
            ("double".to_string(), dec_v("0.5")),
            ("exponent".to_string(), dec_v("1.0e+2")),
            ("long".to_string(), int_v(10_000_000_000)),
            ("string".to_string(), Value::from("строка - тест")),
            ("ñandú".to_string(), Value::Null),
            ("meta".to_string(), arr(vec![arr(vec![int_v(1)]), obj(vec![])])),
            ("meta".to_string(), obj(vec![("key", Value::from("value"))])),
            ("meta".to_string(), Value::Null),
            ("meta".to_string(), arr(vec![])),
        ]
    );
}

#[test]
fn kvitems_at_the_root_yields_the_single_top_pair() {
    let pairs = get_kvitems(JSON, "");
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "docs");
    assert_eq!(Some(&pairs[0].1), canonical_object().as_object().unwrap().get("docs"));
}

#[test]
fn kvitems_at_a_non_object_prefix_yields_nothing() {
    assert_eq!(get_kvitems(JSON, "docs"), vec![]);
}

#[test]
fn kvitems_two_dict_levels() {
    let json = br#"{"meta":{"view":{"columns":[{"id": -1}, {"id": -2}]}}}"#;
    let view = get_kvitems(json, "meta.view");
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].0, "columns");
    assert_eq!(
        view[0].1,
        arr(vec![
            obj(vec![("id", int_v(-1))]),
            obj(vec![("id", int_v(-2))]),
        ])
    );
}

#[test]
fn kvitems_mixed_underlying_types() {
    assert_eq!(
        get_kvitems(JSON, "docs.item.meta"),
        vec![("key".to_string(), Value::from("value"))]
    );
}

#[test]
fn kvitems_of_array_wrapped_document() {
    let mut wrapped = Vec::with_capacity(JSON.len() + 2);
    wrapped.push(b'[');
    wrapped.extend_from_slice(JSON);
    wrapped.push(b']');
    assert_eq!(
        get_kvitems(&wrapped, "item.docs.item"),
        get_kvitems(JSON, "docs.item")
    );
}

// The empty-member corpus: `""` keys form real path components.
#[rstest]
#[case::simple(br#"{"a": {"": {"b": 1, "c": 2}}}"#, "a.",
       vec![("b", int_v(1)), ("c", int_v(2))],
       vec![obj(vec![("b", int_v(1)), ("c", int_v(2))])])]
#[case::embedded(br#"{"a": {"": {"": {"b": 1, "c": 2}}}}"#, "a..",
       vec![("b", int_v(1)), ("c", int_v(2))],
       vec![obj(vec![("b", int_v(1)), ("c", int_v(2))])])]
#[case::top_level(br#"{"": 1, "a": 2}"#, "",
       vec![("", int_v(1)), ("a", int_v(2))],
       vec![obj(vec![("", int_v(1)), ("a", int_v(2))])])]
#[case::top_level_embedded(br#"{"": {"": 1}, "a": 2}"#, "",
       vec![("", obj(vec![("", int_v(1))])), ("a", int_v(2))],
       vec![obj(vec![("", obj(vec![("", int_v(1))])), ("a", int_v(2))])])]
fn empty_member_prefixes(
    #[case] json: &[u8],
    #[case] prefix: &str,
    #[case] kv: Vec<(&str, Value)>,
    #[case] values: Vec<Value>,
) {
    let expected_kv: Vec<(String, Value)> =
        kv.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
    assert_eq!(get_kvitems(json, prefix), expected_kv);
    assert_eq!(get_items(json, prefix), values);
}

/// A factory targeting sorted maps and its own value type: the `map_type`
/// swap.
#[derive(Debug, Clone, PartialEq)]
enum SortedValue {
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    Array(Vec<SortedValue>),
    Object(BTreeMap<String, SortedValue>),
}

#[derive(Clone, Copy, Debug, Default)]
struct SortedFactory;

impl ValueFactory for SortedFactory {
    type Value = SortedValue;
    type Array = Vec<SortedValue>;
    type Object = BTreeMap<String, SortedValue>;

    fn null(&self) -> SortedValue {
        SortedValue::Null
    }

    fn boolean(&self, value: bool) -> SortedValue {
        SortedValue::Boolean(value)
    }

    fn number(&self, value: Number) -> SortedValue {
        SortedValue::Number(value)
    }

    fn string(&self, value: String) -> SortedValue {
        SortedValue::String(value)
    }

    fn new_array(&self) -> Vec<SortedValue> {
        Vec::new()
    }

    fn array_push(&self, array: &mut Vec<SortedValue>, value: SortedValue) {
        array.push(value);
    }

    fn array_value(&self, array: Vec<SortedValue>) -> SortedValue {
        SortedValue::Array(array)
    }

    fn new_object(&self) -> BTreeMap<String, SortedValue> {
        BTreeMap::new()
    }

    fn object_insert(
        &self,
        object: &mut BTreeMap<String, SortedValue>,
        key: String,
        value: SortedValue,
    ) {
        object.insert(key, value);
    }

    fn object_value(&self, object: BTreeMap<String, SortedValue>) -> SortedValue {
        SortedValue::Object(object)
    }
}

#[test]
fn default_factory_preserves_insertion_order() {
    let values = get_items(br#"{"z": 1, "a": 2}"#, "");
    let keys: Vec<&String> = values[0].as_object().unwrap().keys().collect();
    assert_eq!(keys, ["z", "a"]);
}

#[test]
fn custom_factory_chooses_the_object_container() {
    let values: Vec<SortedValue> = items_with_factory(
        &br#"{"z": 1, "a": 2}"#[..],
        "",
        SortedFactory,
        ParserOptions::default(),
    )
    .collect::<Result<_, _>>()
    .unwrap();
    let SortedValue::Object(map) = &values[0] else {
        panic!("expected an object");
    };
    let keys: Vec<&String> = map.keys().collect();
    assert_eq!(keys, ["a", "z"]);
}
