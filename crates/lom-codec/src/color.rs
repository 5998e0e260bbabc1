//! 24-bit RGB integer <-> `#RRGGBB` conversion.

use serde_json::Value;

use crate::number::as_integer;
use crate::CodecError;

/// Largest representable color.
pub const MAX_COLOR: u32 = 0xFF_FF_FF;

/// Format a host color integer as upper-case `#RRGGBB`.
///
/// # Example
///
/// ```
/// use lom_codec::color_to_hex;
///
/// assert_eq!(color_to_hex(0xFF8000).unwrap(), "#FF8000");
/// assert_eq!(color_to_hex(0).unwrap(), "#000000");
/// assert!(color_to_hex(0x1000000).is_err());
/// ```
pub fn color_to_hex(color: u32) -> Result<String, CodecError> {
    if color > MAX_COLOR {
        return Err(CodecError::ColorOutOfRange(i64::from(color)));
    }
    Ok(format!("#{color:06X}"))
}

/// Parse `#RRGGBB` (either case) into a host color integer.
///
/// # Example
///
/// ```
/// use lom_codec::hex_to_color;
///
/// assert_eq!(hex_to_color("#FF8000").unwrap(), 0xFF8000);
/// assert_eq!(hex_to_color("#ff8000").unwrap(), 0xFF8000);
/// assert!(hex_to_color("FF8000").is_err());
/// assert!(hex_to_color("#FFF").is_err());
/// ```
pub fn hex_to_color(hex: &str) -> Result<u32, CodecError> {
    let malformed = || CodecError::MalformedHex(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(malformed)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    u32::from_str_radix(digits, 16).map_err(|_| malformed())
}

/// Read a stored color value, rejecting anything outside the 24-bit range.
pub fn color_from_value(value: &Value) -> Result<u32, CodecError> {
    let color = as_integer(value).ok_or_else(|| CodecError::NotAnInteger(value.clone()))?;
    if !(0..=i64::from(MAX_COLOR)).contains(&color) {
        return Err(CodecError::ColorOutOfRange(color));
    }
    Ok(color as u32)
}
