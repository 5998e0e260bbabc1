//! Property codecs for Live Object Model values.
//!
//! The host hands every property back wrapped in an array and encodes some
//! of them as text or integers. This crate reconciles that with plain values:
//!
//! - [`PropertyTable`] decides per property whether a read is unwrapped and
//!   how the value is encoded
//! - routing objects travel as JSON text ([`encode_routing`], [`decode_routing`])
//! - object references travel as `"id N"` ([`format_id`], [`decode_id_list`])
//! - colors travel as 24-bit integers ([`color_to_hex`], [`hex_to_color`])
//!
//! # Example
//!
//! ```
//! use lom_codec::PropertyTable;
//! use serde_json::json;
//!
//! let table = PropertyTable::default();
//! assert_eq!(table.decode("name", vec![json!("Drums")]).unwrap(), Some(json!("Drums")));
//! assert_eq!(table.decode("name", vec![]).unwrap(), None);
//! assert_eq!(table.decode("scale_intervals", vec![json!(0), json!(2)]).unwrap(), Some(json!([0, 2])));
//! assert_eq!(table.encode("selected_track", json!(5)).unwrap(), json!("id 5"));
//! ```

use serde_json::Value;
use thiserror::Error;

mod number;

pub mod color;
pub use color::{color_from_value, color_to_hex, hex_to_color, MAX_COLOR};

pub mod id;
pub use id::{decode_id, decode_id_list, encode_id, format_id, parse_id, ID_TAG};

pub mod routing;
pub use routing::{decode_routing, encode_routing, Routing};

pub mod table;
pub use table::{Encoding, PropertySpec, PropertyTable, Shape};

/// A host value that could not be decoded, or a caller value that cannot be
/// encoded.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    #[error("color {0} is outside the 24-bit range")]
    ColorOutOfRange(i64),
    #[error("malformed hex color: {0:?}")]
    MalformedHex(String),
    #[error("expected an integer, got {0}")]
    NotAnInteger(Value),
    #[error("malformed routing value for '{property}': {reason}")]
    MalformedRouting { property: String, reason: String },
    #[error("malformed object reference: {0}")]
    MalformedIdentifier(Value),
    #[error("invalid property table: {0}")]
    InvalidTable(String),
}

/// Compose `"N/D"` from separately read numerator and denominator values.
///
/// Absent when either part is absent.
///
/// # Example
///
/// ```
/// use lom_codec::format_time_signature;
/// use serde_json::json;
///
/// assert_eq!(format_time_signature(Some(&json!(7)), Some(&json!(8))).unwrap(), Some("7/8".to_string()));
/// assert_eq!(format_time_signature(Some(&json!(4)), None).unwrap(), None);
/// ```
pub fn format_time_signature(
    numerator: Option<&Value>,
    denominator: Option<&Value>,
) -> Result<Option<String>, CodecError> {
    let (Some(numerator), Some(denominator)) = (numerator, denominator) else {
        return Ok(None);
    };
    let numerator =
        number::as_integer(numerator).ok_or_else(|| CodecError::NotAnInteger(numerator.clone()))?;
    let denominator = number::as_integer(denominator)
        .ok_or_else(|| CodecError::NotAnInteger(denominator.clone()))?;
    Ok(Some(format!("{numerator}/{denominator}")))
}
