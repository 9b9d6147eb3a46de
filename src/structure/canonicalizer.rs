//! Deep array sorting so that element order stops mattering.
//!
//! Every array at any depth is reordered by a total order over its elements'
//! serialized content. Two arrays holding the same multiset of elements end
//! up in the same order, which lets the comparator match them positionally.

use serde_json::{Map, Value};

use super::kind::NodeKind;

/// Produces an order-normalized copy of a value
///
/// Implementations must not depend on the input's array order and must
/// leave every non-array node semantically unchanged.
pub trait Canonicalizer {
    fn canonicalize(&self, value: &Value) -> Value;
}

/// Default canonicalizer: recursive stable sort keyed by
/// (shape signature, canonical JSON text)
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepSort;

impl Canonicalizer for DeepSort {
    fn canonicalize(&self, value: &Value) -> Value {
        canonicalize(value)
    }
}

/// Return a copy of `value` with every nested array deep-sorted
///
/// Object key order is left as it is.
///
/// # Example
/// ```
/// use serde_json::json;
/// use structure_match::structure::canonicalize;
///
/// let sorted = canonicalize(&json!([3, 1, 2]));
/// assert_eq!(sorted, json!([1, 2, 3]));
/// ```
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Array(items) => {
            let mut items: Vec<Value> = items.iter().map(canonicalize).collect();
            // Children are already canonical, so their keys are too
            items.sort_by_cached_key(|item| (shape_signature(item), canonical_json(item)));
            Value::Array(items)
        }
        Value::Object(fields) => {
            let fields: Map<String, Value> = fields
                .iter()
                .map(|(key, child)| (key.clone(), canonicalize(child)))
                .collect();
            Value::Object(fields)
        }
        primitive => primitive.clone(),
    }
}

/// Serialize with object keys in sorted order
///
/// Array order is kept as given; callers sort arrays before asking.
pub fn canonical_json(value: &Value) -> String {
    match value {
        Value::Object(fields) => {
            let mut keys: Vec<&String> = fields.keys().collect();
            keys.sort();
            let parts: Vec<String> = keys
                .into_iter()
                .map(|key| format!("{}:{}", quote(key), canonical_json(&fields[key])))
                .collect();
            format!("{{{}}}", parts.join(","))
        }
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(canonical_json).collect();
            format!("[{}]", parts.join(","))
        }
        primitive => primitive.to_string(),
    }
}

/// Serialized skeleton of a value with primitive contents erased
///
/// `{"b": [1, "x"], "a": true}` becomes `{"a":boolean,"b":[number,string]}`.
pub fn shape_signature(value: &Value) -> String {
    match value {
        Value::Object(fields) => {
            let mut keys: Vec<&String> = fields.keys().collect();
            keys.sort();
            let parts: Vec<String> = keys
                .into_iter()
                .map(|key| format!("{}:{}", quote(key), shape_signature(&fields[key])))
                .collect();
            format!("{{{}}}", parts.join(","))
        }
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(shape_signature).collect();
            format!("[{}]", parts.join(","))
        }
        primitive => NodeKind::of(primitive).name().to_string(),
    }
}

fn quote(key: &str) -> String {
    Value::String(key.to_string()).to_string()
}
