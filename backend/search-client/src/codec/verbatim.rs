//! Codec for the data endpoint family: field names in their natural
//! capitalised form, enumeration values as canonical capitalised strings.

use super::{case, transform_tree};
use crate::error::CodecError;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Encode with capitalised field names, omitting null-valued fields.
pub fn encode<T: Serialize>(document: &T) -> Result<Vec<u8>, CodecError> {
    let tree = transform_tree(serde_json::to_value(document)?, &|key| {
        case::pascal_from_delimited(key, '_')
    });
    Ok(serde_json::to_vec(&tree)?)
}

/// Decode a capitalised-field payload. Unknown fields are ignored; a
/// lowercase body decodes just as well, which the error classifier leans
/// on. Only a body that is not well-formed JSON fails.
pub fn decode<T: DeserializeOwned>(payload: &[u8]) -> Result<T, CodecError> {
    let tree: Value = serde_json::from_slice(payload)?;
    let tree = transform_tree(tree, &|key| case::lower_delimited(key, '_'));
    Ok(serde_json::from_value(tree)?)
}
