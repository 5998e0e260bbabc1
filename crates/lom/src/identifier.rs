//! Identifier normalization.
//!
//! Callers address nodes by raw id (`42`, `"42"`, `("id", 42)`, `"id 42"`) or
//! by canonical path. All of them collapse into a single [`Target`], checked
//! before the host is ever asked to construct a handle.

use std::fmt;

use lom_codec::{format_id, parse_id, ID_TAG};
use lom_path::parse_path;
use serde_json::Value;

use crate::LomError;

/// Identifier input as callers hand it over.
#[derive(Debug, Clone, PartialEq)]
pub enum Identifier {
    Id(u64),
    Text(String),
    /// `(tag, value)`; only the `"id"` tag is accepted.
    Tagged(String, Value),
}

impl From<u64> for Identifier {
    fn from(id: u64) -> Self {
        Identifier::Id(id)
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Id(u64::from(id))
    }
}

impl From<&str> for Identifier {
    fn from(text: &str) -> Self {
        Identifier::Text(text.to_string())
    }
}

impl From<String> for Identifier {
    fn from(text: String) -> Self {
        Identifier::Text(text)
    }
}

impl From<(&str, u64)> for Identifier {
    fn from((tag, id): (&str, u64)) -> Self {
        Identifier::Tagged(tag.to_string(), Value::from(id))
    }
}

impl From<&Target> for Identifier {
    fn from(target: &Target) -> Self {
        match target {
            Target::Id(id) => Identifier::Id(*id),
            Target::Path(path) => Identifier::Text(path.clone()),
        }
    }
}

impl TryFrom<&Value> for Identifier {
    type Error = LomError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => n.as_u64().map(Identifier::Id).ok_or_else(|| invalid(value)),
            Value::String(text) => Ok(Identifier::Text(text.clone())),
            Value::Array(items) => match items.as_slice() {
                [Value::String(tag), id] => Ok(Identifier::Tagged(tag.clone(), id.clone())),
                _ => Err(invalid(value)),
            },
            _ => Err(invalid(value)),
        }
    }
}

/// The canonical construction argument for a raw handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Id(u64),
    Path(String),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Id(id) => f.write_str(&format_id(*id)),
            Target::Path(path) => f.write_str(path),
        }
    }
}

impl Identifier {
    /// Rewrite into the canonical construction argument.
    ///
    /// # Example
    ///
    /// ```
    /// use lom::{Identifier, Target};
    ///
    /// let a = Identifier::from(42u64).normalize().unwrap();
    /// let b = Identifier::from("42").normalize().unwrap();
    /// let c = Identifier::from(("id", 42)).normalize().unwrap();
    /// assert_eq!(a, Target::Id(42));
    /// assert_eq!(a, b);
    /// assert_eq!(b, c);
    /// assert_eq!(a.to_string(), "id 42");
    ///
    /// let path = Identifier::from("live_set tracks 0").normalize().unwrap();
    /// assert_eq!(path.to_string(), "live_set tracks 0");
    ///
    /// assert!(Identifier::from("not a path").normalize().is_err());
    /// ```
    pub fn normalize(&self) -> Result<Target, LomError> {
        match self {
            Identifier::Id(id) => Ok(Target::Id(*id)),
            Identifier::Text(text) => normalize_text(text),
            Identifier::Tagged(tag, id) if tag == ID_TAG => match id {
                Value::Number(n) => n.as_u64().map(Target::Id).ok_or_else(|| invalid(self)),
                Value::String(digits) => parse_digits(digits).map(Target::Id).ok_or_else(|| invalid(self)),
                _ => Err(invalid(self)),
            },
            Identifier::Tagged(..) => Err(invalid(self)),
        }
    }
}

/// Normalize any supported identifier input.
pub fn normalize(identifier: impl Into<Identifier>) -> Result<Target, LomError> {
    identifier.into().normalize()
}

fn normalize_text(text: &str) -> Result<Target, LomError> {
    let trimmed = text.trim();
    if let Some(id) = parse_digits(trimmed).or_else(|| parse_id(trimmed)) {
        return Ok(Target::Id(id));
    }
    match parse_path(trimmed) {
        Ok(_) => Ok(Target::Path(text.to_string())),
        Err(e) => Err(LomError::InvalidIdentifierKind(format!("{text:?}: {e}"))),
    }
}

fn parse_digits(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn invalid(input: &impl fmt::Debug) -> LomError {
    LomError::InvalidIdentifierKind(format!("{input:?}"))
}
