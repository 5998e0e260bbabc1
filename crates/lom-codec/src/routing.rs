//! Routing values: objects on the caller side, JSON text on the host side.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::CodecError;

/// A routing type or channel as the host describes it.
///
/// Fields beyond `display_name` and `identifier` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routing {
    pub display_name: String,
    pub identifier: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Routing {
    pub fn from_value(property: &str, value: Value) -> Result<Self, CodecError> {
        serde_json::from_value(value).map_err(|e| CodecError::MalformedRouting {
            property: property.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn to_value(&self) -> Value {
        // Serializing a struct of JSON values cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Encode a routing value as the JSON text the host expects.
pub fn encode_routing(value: &Value) -> String {
    value.to_string()
}

/// Decode routing JSON text read from the host.
///
/// # Example
///
/// ```
/// use lom_codec::decode_routing;
/// use serde_json::json;
///
/// let value = decode_routing("output_routing_type", r#"{"display_name":"Master","identifier":1}"#).unwrap();
/// assert_eq!(value, json!({"display_name": "Master", "identifier": 1}));
/// assert!(decode_routing("output_routing_type", "{not json").is_err());
/// ```
pub fn decode_routing(property: &str, text: &str) -> Result<Value, CodecError> {
    serde_json::from_str(text).map_err(|e| CodecError::MalformedRouting {
        property: property.to_string(),
        reason: e.to_string(),
    })
}
