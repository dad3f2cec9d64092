//! The two wire conventions the service speaks.
//!
//! The token endpoint takes form data and answers snake_case JSON with
//! slug-cased enumeration values. The data endpoints (search, candidate,
//! quota, dictionary) exchange JSON with capitalised field names and
//! capitalised enumeration values. Documents move between Rust snake_case
//! and each convention by walking the `serde_json` value tree with the
//! pure transforms in [`case`] - two explicit codec values, never global
//! serializer state.
//!
//! Both codecs ignore unknown fields on decode and omit null fields on
//! encode. Tolerant enumeration decoding on the verbatim side lives with
//! the document shapes themselves (`models::wire`), since serde applies
//! it field by field.

pub mod case;
pub mod slug;
pub mod verbatim;

use serde_json::{Map, Value};

/// Rename every object key in the tree with `rename`, dropping null
/// values along the way. The service omits unset fields and expects the
/// same of us.
fn transform_tree(value: Value, rename: &impl Fn(&str) -> String) -> Value {
    match value {
        Value::Object(object) => {
            let mut transformed = Map::with_capacity(object.len());
            for (key, value) in object {
                if value.is_null() {
                    continue;
                }
                transformed.insert(rename(&key), transform_tree(value, rename));
            }
            Value::Object(transformed)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| transform_tree(item, rename))
                .collect(),
        ),
        other => other,
    }
}
