//! `"id N"` object references.

use serde_json::Value;

use crate::number::as_index;
use crate::CodecError;

/// The tag the host puts in front of raw object ids.
pub const ID_TAG: &str = "id";

/// Format a raw id as `"id N"`.
pub fn format_id(id: u64) -> String {
    format!("{ID_TAG} {id}")
}

/// Parse an `"id N"` string. Any other shape yields `None`.
///
/// # Example
///
/// ```
/// use lom_codec::parse_id;
///
/// assert_eq!(parse_id("id 42"), Some(42));
/// assert_eq!(parse_id("id  7"), Some(7));
/// assert_eq!(parse_id("42"), None);
/// assert_eq!(parse_id("id -1"), None);
/// ```
pub fn parse_id(text: &str) -> Option<u64> {
    let mut parts = text.split_whitespace();
    if parts.next() != Some(ID_TAG) {
        return None;
    }
    let number = parts.next()?;
    if parts.next().is_some() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}

/// Flatten a host id listing into raw ids.
///
/// Hosts report child collections as `["id", 1, "id", 2]`; bare numbers and
/// `"id N"` strings are accepted too.
///
/// # Example
///
/// ```
/// use lom_codec::decode_id_list;
/// use serde_json::json;
///
/// let raw = vec![json!("id"), json!(3), json!("id"), json!(9)];
/// assert_eq!(decode_id_list(&raw).unwrap(), vec![3, 9]);
/// ```
pub fn decode_id_list(raw: &[Value]) -> Result<Vec<u64>, CodecError> {
    let mut ids = Vec::with_capacity(raw.len() / 2);
    let mut items = raw.iter();
    while let Some(item) = items.next() {
        let id = match item {
            Value::String(tag) if tag == ID_TAG => {
                let next = items
                    .next()
                    .ok_or_else(|| CodecError::MalformedIdentifier(Value::Array(raw.to_vec())))?;
                as_index(next).ok_or_else(|| CodecError::MalformedIdentifier(next.clone()))?
            }
            Value::String(text) => {
                parse_id(text).ok_or_else(|| CodecError::MalformedIdentifier(item.clone()))?
            }
            _ => as_index(item).ok_or_else(|| CodecError::MalformedIdentifier(item.clone()))?,
        };
        ids.push(id);
    }
    Ok(ids)
}

/// Decode a single reference value (`["id", N]`, `[N]` or `["id N"]`).
///
/// An empty listing means "no object" and decodes to `None`.
pub fn decode_id(raw: &[Value]) -> Result<Option<String>, CodecError> {
    let ids = decode_id_list(raw)?;
    match ids.as_slice() {
        [] => Ok(None),
        [id] => Ok(Some(format_id(*id))),
        _ => Err(CodecError::MalformedIdentifier(Value::Array(raw.to_vec()))),
    }
}

/// Encode a value written to an identifier-class property.
///
/// Bare non-negative integers become `"id N"`; other values pass through.
pub fn encode_id(value: Value) -> Result<Value, CodecError> {
    match &value {
        Value::Number(_) => as_index(&value)
            .map(|id| Value::String(format_id(id)))
            .ok_or(CodecError::MalformedIdentifier(value)),
        _ => Ok(value),
    }
}
