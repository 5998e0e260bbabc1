//! Per-property classification consulted by every get and set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::color::{color_from_value, hex_to_color};
use crate::id::{decode_id, encode_id};
use crate::routing::{decode_routing, encode_routing};
use crate::CodecError;

/// Whether a property is unwrapped on read or handed back as the full array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    #[default]
    Scalar,
    Array,
}

/// How a property's value is encoded on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    #[default]
    Plain,
    /// JSON text on the host, an object for callers.
    Routing,
    /// `"id N"` object reference.
    Identifier,
    /// 24-bit RGB integer.
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertySpec {
    pub shape: Shape,
    pub encoding: Encoding,
}

impl PropertySpec {
    pub const PLAIN: PropertySpec = PropertySpec {
        shape: Shape::Scalar,
        encoding: Encoding::Plain,
    };

    pub const fn array() -> Self {
        Self {
            shape: Shape::Array,
            encoding: Encoding::Plain,
        }
    }

    pub const fn encoded(encoding: Encoding) -> Self {
        Self {
            shape: Shape::Scalar,
            encoding,
        }
    }
}

const ARRAY_PROPERTIES: &[&str] = &["scale_intervals", "value_items"];

const ROUTING_PROPERTIES: &[&str] = &[
    "input_routing_type",
    "input_routing_channel",
    "output_routing_type",
    "output_routing_channel",
    "available_input_routing_types",
    "available_input_routing_channels",
    "available_output_routing_types",
    "available_output_routing_channels",
];

const IDENTIFIER_PROPERTIES: &[&str] = &[
    "selected_track",
    "selected_scene",
    "selected_chain",
    "selected_device",
    "selected_parameter",
    "detail_clip",
    "highlighted_clip_slot",
    "appointed_device",
    "canonical_parent",
];

/// Property classification table.
///
/// Properties not listed are plain scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable {
    entries: HashMap<String, PropertySpec>,
}

impl Default for PropertyTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for name in ARRAY_PROPERTIES {
            table.register(*name, PropertySpec::array());
        }
        for name in ROUTING_PROPERTIES {
            table.register(*name, PropertySpec::encoded(Encoding::Routing));
        }
        for name in IDENTIFIER_PROPERTIES {
            table.register(*name, PropertySpec::encoded(Encoding::Identifier));
        }
        table.register("color", PropertySpec::encoded(Encoding::Color));
        table
    }
}

impl PropertyTable {
    /// A table where every property is a plain scalar.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The built-in table with entries from a JSON object layered on top.
    ///
    /// # Example
    ///
    /// ```
    /// use lom_codec::{Encoding, PropertyTable, Shape};
    ///
    /// let table = PropertyTable::from_json(r#"{
    ///     "notes": {"shape": "array"},
    ///     "groove": {"encoding": "identifier"}
    /// }"#).unwrap();
    /// assert_eq!(table.spec("notes").shape, Shape::Array);
    /// assert_eq!(table.spec("groove").encoding, Encoding::Identifier);
    /// assert_eq!(table.spec("scale_intervals").shape, Shape::Array);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, CodecError> {
        let overrides: HashMap<String, PropertySpec> =
            serde_json::from_str(text).map_err(|e| CodecError::InvalidTable(e.to_string()))?;
        let mut table = Self::default();
        table.entries.extend(overrides);
        Ok(table)
    }

    pub fn register(&mut self, name: impl Into<String>, spec: PropertySpec) -> &mut Self {
        self.entries.insert(name.into(), spec);
        self
    }

    pub fn spec(&self, name: &str) -> PropertySpec {
        self.entries.get(name).copied().unwrap_or(PropertySpec::PLAIN)
    }

    pub fn is_array(&self, name: &str) -> bool {
        self.spec(name).shape == Shape::Array
    }

    /// Turn a raw host read into a caller value.
    ///
    /// - array-shaped: the listing verbatim
    /// - `[]`: `None`
    /// - `[v]`: `v`
    /// - longer listings: the array
    ///
    /// then applies the property's encoding.
    pub fn decode(&self, name: &str, raw: Vec<Value>) -> Result<Option<Value>, CodecError> {
        let spec = self.spec(name);

        if spec.encoding == Encoding::Identifier {
            return Ok(decode_id(&raw)?.map(Value::String));
        }
        if spec.shape == Shape::Array {
            return Ok(Some(Value::Array(raw)));
        }

        let value = match raw.len() {
            0 => return Ok(None),
            1 => raw.into_iter().next(),
            _ => Some(Value::Array(raw)),
        };
        trace!(property = name, encoding = ?spec.encoding, "decoded property");

        match (spec.encoding, value) {
            (Encoding::Routing, Some(Value::String(text))) => decode_routing(name, &text).map(Some),
            (_, value) => Ok(value),
        }
    }

    /// Turn a caller value into what the host expects to be written.
    pub fn encode(&self, name: &str, value: Value) -> Result<Value, CodecError> {
        match self.spec(name).encoding {
            Encoding::Plain => Ok(value),
            Encoding::Routing => Ok(Value::String(encode_routing(&value))),
            Encoding::Identifier => encode_id(value),
            Encoding::Color => match &value {
                Value::String(hex) => Ok(Value::from(hex_to_color(hex)?)),
                _ => Ok(Value::from(color_from_value(&value)?)),
            },
        }
    }
}
