//! Recursive merging of a configuration tree over its defaults.
//!
//! [`merge`] walks `defaults` first and `overrides` second, so overrides win at
//! every leaf while nested objects are merged field by field. Integer-keyed
//! entries (array elements, and object keys such as `"0"`) are appended rather
//! than merged by position unless `preserve_integer_keys` is set.
//!
//! ```rust
//! use html_table::{merge, value};
//!
//! let merged = merge(
//!     &value!({ "a": { "x": 1 } }),
//!     &value!({ "a": { "x": 0, "y": 2 } }),
//!     false,
//! );
//! assert_eq!(merged, value!({ "a": { "x": 1, "y": 2 } }));
//!
//! // sequences are concatenated, defaults first
//! assert_eq!(merge(&value!([1, 2]), &value!([3]), false), value!([3, 1, 2]));
//! ```

use crate::{Map, Value};
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    /// Object keys spelled as canonical decimal integers count as positions.
    fn parse(key: &str) -> Key {
        let canonical = !key.is_empty()
            && key.bytes().all(|b| b.is_ascii_digit())
            && (key == "0" || !key.starts_with('0'));
        match canonical.then(|| key.parse::<usize>().ok()).flatten() {
            Some(index) => Key::Index(index),
            None => Key::Name(key.to_string()),
        }
    }

    fn into_string(self) -> String {
        match self {
            Key::Index(index) => index.to_string(),
            Key::Name(name) => name,
        }
    }
}

/// Lists the entries a value contributes to a merge.
///
/// A lone scalar contributes itself at position 0; `Null` contributes nothing.
fn entries(value: &Value) -> Vec<(Key, &Value)> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(arr) => arr
            .iter()
            .enumerate()
            .map(|(i, v)| (Key::Index(i), v))
            .collect(),
        Value::Object(obj) => obj.iter().map(|(k, v)| (Key::parse(k), v)).collect(),
        scalar => vec![(Key::Index(0), scalar)],
    }
}

/// Merges `overrides` over `defaults`, recursing into nested containers.
///
/// - A scalar (or `Null`) `defaults` yields `overrides` unchanged.
/// - Otherwise entries of `defaults` then `overrides` are folded into the
///   output. Integer keys are appended when `preserve_integer_keys` is false;
///   a key whose accumulated and incoming values are both containers is merged
///   recursively; anything else is replaced by the incoming value.
/// - The output is an `Object` when either input is one (integer keys are
///   written as decimal strings), otherwise an `Array`.
///
/// Type conflicts never fail: the last writer wins.
///
/// # Examples
///
/// ```rust
/// use html_table::{merge, value};
///
/// assert_eq!(merge(&value!({ "k": "o" }), &value!({ "k": "d" }), false), value!({ "k": "o" }));
/// assert_eq!(merge(&value!([1, 2]), &value!([3]), true), value!([1, 2]));
/// ```
#[must_use]
pub fn merge(overrides: &Value, defaults: &Value, preserve_integer_keys: bool) -> Value {
    if !defaults.is_container() {
        return overrides.clone();
    }

    let as_object = overrides.is_object() || defaults.is_object();
    let mut output: IndexMap<Key, Value> = IndexMap::new();
    let mut next_index = 0usize;

    for source in [defaults, overrides] {
        for (key, element) in entries(source) {
            match key {
                Key::Index(_) if !preserve_integer_keys => {
                    output.insert(Key::Index(next_index), element.clone());
                    next_index += 1;
                }
                key => {
                    let merged = match output.get(&key) {
                        Some(current) if current.is_container() && element.is_container() => {
                            merge(element, current, preserve_integer_keys)
                        }
                        _ => element.clone(),
                    };
                    if let Key::Index(index) = key {
                        next_index = next_index.max(index + 1);
                    }
                    output.insert(key, merged);
                }
            }
        }
    }

    assemble(output, as_object)
}

fn assemble(output: IndexMap<Key, Value>, as_object: bool) -> Value {
    let is_sequence = output
        .keys()
        .enumerate()
        .all(|(position, key)| *key == Key::Index(position));

    if !as_object && is_sequence {
        Value::Array(output.into_values().collect())
    } else {
        Value::Object(
            output
                .into_iter()
                .map(|(key, value)| (key.into_string(), value))
                .collect::<Map>(),
        )
    }
}
