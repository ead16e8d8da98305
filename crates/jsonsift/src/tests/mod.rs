//! Cross-cutting test suites driving the whole pipeline.
mod selectors;

use crate::{Event, Map, Number, ParserOptions, Value};

/// The canonical exercise document: nested containers, every scalar kind,
/// escaped and raw multi-byte keys and values.
pub(crate) const JSON: &[u8] = r#"
{
  "docs": [
    {
      "null": null,
      "boolean": false,
      "true": true,
      "integer": 0,
      "double": 0.5,
      "exponent": 1.0e+2,
      "long": 10000000000,
      "string": "\u0441\u0442\u0440\u043e\u043a\u0430 - тест",
      "ñandú": null
    },
    {
      "meta": [[1], {}]
    },
    {
      "meta": {"key": "value"}
    },
    {
      "meta": null
    },
    {
      "meta": []
    }
  ]
}
"#
.as_bytes();

pub(crate) fn key(k: &str) -> Event {
    Event::MapKey(k.to_string())
}

pub(crate) fn string_ev(s: &str) -> Event {
    Event::String(s.to_string())
}

pub(crate) fn num(i: i64) -> Event {
    Event::Number(Number::from(i))
}

pub(crate) fn dec(literal: &str) -> Event {
    Event::Number(decimal(literal))
}

pub(crate) fn decimal(literal: &str) -> Number {
    literal.parse().expect("test literal must parse")
}

pub(crate) fn int_v(i: i64) -> Value {
    Value::from(i)
}

pub(crate) fn dec_v(literal: &str) -> Value {
    Value::Number(decimal(literal))
}

pub(crate) fn arr(items: Vec<Value>) -> Value {
    Value::Array(items)
}

pub(crate) fn obj(pairs: Vec<(&str, Value)>) -> Value {
    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert(k.to_string(), v);
    }
    Value::Object(map)
}

/// The event sequence `basic_parse` must produce for [`JSON`].
pub(crate) fn canonical_events() -> Vec<Event> {
    use Event::{EndArray, EndMap, Null, StartArray, StartMap};
    vec![
        StartMap,
        key("docs"),
        StartArray,
        StartMap,
        key("null"),
        Null,
        key("boolean"),
        Event::Boolean(false),
        key("true"),
        Event::Boolean(true),
        key("integer"),
        num(0),
        key("double"),
        dec("0.5"),
        key("exponent"),
        dec("1.0e+2"),
        key("long"),
        num(10_000_000_000),
        key("string"),
        string_ev("строка - тест"),
        key("ñandú"),
        Null,
        EndMap,
        StartMap,
        key("meta"),
        StartArray,
        StartArray,
        num(1),
        EndArray,
        StartMap,
        EndMap,
        EndArray,
        EndMap,
        StartMap,
        key("meta"),
        StartMap,
        key("key"),
        string_ev("value"),
        EndMap,
        EndMap,
        StartMap,
        key("meta"),
        Null,
        EndMap,
        StartMap,
        key("meta"),
        StartArray,
        EndArray,
        EndMap,
        EndArray,
        EndMap,
    ]
}

/// The prefixed sequence `parse` must produce for [`JSON`].
pub(crate) fn canonical_prefixed() -> Vec<(String, Event)> {
    use Event::{EndArray, EndMap, Null, StartArray, StartMap};
    let pe = |prefix: &str, event: Event| (prefix.to_string(), event);
    vec![
        pe("", StartMap),
        pe("", key("docs")),
        pe("docs", StartArray),
        pe("docs.item", StartMap),
        pe("docs.item", key("null")),
        pe("docs.item.null", Null),
        pe("docs.item", key("boolean")),
        pe("docs.item.boolean", Event::Boolean(false)),
        pe("docs.item", key("true")),
        pe("docs.item.true", Event::Boolean(true)),
        pe("docs.item", key("integer")),
        pe("docs.item.integer", num(0)),
        pe("docs.item", key("double")),
        pe("docs.item.double", dec("0.5")),
        pe("docs.item", key("exponent")),
        pe("docs.item.exponent", dec("1.0e+2")),
        pe("docs.item", key("long")),
        pe("docs.item.long", num(10_000_000_000)),
        pe("docs.item", key("string")),
        pe("docs.item.string", string_ev("строка - тест")),
        pe("docs.item", key("ñandú")),
        pe("docs.item.ñandú", Null),
        pe("docs.item", EndMap),
        pe("docs.item", StartMap),
        pe("docs.item", key("meta")),
        pe("docs.item.meta", StartArray),
        pe("docs.item.meta.item", StartArray),
        pe("docs.item.meta.item.item", num(1)),
        pe("docs.item.meta.item", EndArray),
        pe("docs.item.meta.item", StartMap),
        pe("docs.item.meta.item", EndMap),
        pe("docs.item.meta", EndArray),
        pe("docs.item", EndMap),
        pe("docs.item", StartMap),
        pe("docs.item", key("meta")),
        pe("docs.item.meta", StartMap),
        pe("docs.item.meta", key("key")),
        pe("docs.item.meta.key", string_ev("value")),
        pe("docs.item.meta", EndMap),
        pe("docs.item", EndMap),
        pe("docs.item", StartMap),
        pe("docs.item", key("meta")),
        pe("docs.item.meta", Null),
        pe("docs.item", EndMap),
        pe("docs.item", StartMap),
        pe("docs.item", key("meta")),
        pe("docs.item.meta", StartArray),
        pe("docs.item.meta", EndArray),
        pe("docs.item", EndMap),
        pe("docs", EndArray),
        pe("", EndMap),
    ]
}

/// The value `items("")` must materialise for [`JSON`].
pub(crate) fn canonical_object() -> Value {
    obj(vec![(
        "docs",
        arr(vec![
            obj(vec![
                ("null", Value::Null),
                ("boolean", Value::Boolean(false)),
                ("true", Value::Boolean(true)),
                ("integer", int_v(0)),
                ("double", dec_v("0.5")),
                ("exponent", dec_v("1.0e+2")),
                ("long", int_v(10_000_000_000)),
                ("string", Value::from("строка - тест")),
                ("ñandú", Value::Null),
            ]),
            obj(vec![("meta", arr(vec![arr(vec![int_v(1)]), obj(vec![])]))]),
            obj(vec![("meta", obj(vec![("key", Value::from("value"))]))]),
            obj(vec![("meta", Value::Null)]),
            obj(vec![("meta", arr(vec![]))]),
        ]),
    )])
}

pub(crate) fn get_events(json: &[u8], options: ParserOptions) -> Vec<Event> {
    crate::basic_parse(json, options)
        .collect::<Result<_, _>>()
        .expect("document must parse")
}

pub(crate) fn get_prefixed(json: &[u8]) -> Vec<(String, Event)> {
    crate::parse(json, ParserOptions::default())
        .map(|r| {
            let pe = r.expect("document must parse");
            (pe.prefix, pe.event)
        })
        .collect()
}

pub(crate) fn get_items(json: &[u8], prefix: &str) -> Vec<Value> {
    crate::items(json, prefix, ParserOptions::default())
        .collect::<Result<_, _>>()
        .expect("document must parse")
}

pub(crate) fn get_kvitems(json: &[u8], prefix: &str) -> Vec<(String, Value)> {
    crate::kvitems(json, prefix, ParserOptions::default())
        .collect::<Result<_, _>>()
        .expect("document must parse")
}
