//! JSON input
//!
//! Builds a value graph from a parsed JSON document. JSON cannot express
//! sharing, cycles, patterns or callables, so the result is always a tree.

use serde_json::Value as Json;

use super::value::{Mapping, Value};

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Nullish,
            Json::Bool(b) => Value::Bool(b),
            // integers beyond 2^53 lose precision
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            Json::Object(fields) => {
                let map = Mapping::new();
                for (key, field) in fields {
                    map.insert(key, Value::from(field));
                }
                Value::Mapping(map)
            }
        }
    }
}
