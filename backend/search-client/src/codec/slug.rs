//! Codec for the token endpoint family: snake_case field names and
//! slug-cased enumeration values.

use super::{case, transform_tree};
use crate::error::CodecError;

use models::wire::WireEnum;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Encode with snake_case field names, omitting null-valued fields.
pub fn encode<T: Serialize>(document: &T) -> Result<Vec<u8>, CodecError> {
    let tree = transform_tree(serde_json::to_value(document)?, &|key| {
        case::lower_delimited(key, '_')
    });
    Ok(serde_json::to_vec(&tree)?)
}

/// Decode a snake_case payload. Unknown fields are ignored; only a body
/// that is not well-formed JSON fails.
pub fn decode<T: DeserializeOwned>(payload: &[u8]) -> Result<T, CodecError> {
    let tree: Value = serde_json::from_slice(payload)?;
    let tree = transform_tree(tree, &|key| case::lower_delimited(key, '_'));
    Ok(serde_json::from_value(tree)?)
}

/// Slug form of an enumeration value: `ProfileAndCV` -> `profile-and-cv`.
pub fn enum_to_slug<E: WireEnum>(value: E) -> String {
    case::lower_delimited(value.as_wire(), '-')
}

/// Parse a slug token back to the canonical enumeration member. Empty,
/// unknown and the literal "null" all decode to `None`, never an error -
/// the service is known to emit "null" for unset enumerations.
pub fn enum_from_slug<E: WireEnum>(text: &str) -> Option<E> {
    if text.is_empty() || text.eq_ignore_ascii_case("null") {
        return None;
    }
    E::parse(&case::pascal_from_delimited(text, '-')).or_else(|| E::parse(text))
}
