//! The host boundary: the four accessor primitives plus handle attributes.

use serde_json::Value;

/// A raw accessor onto one host node.
///
/// Every read comes back as an array. The host owns the node; when it is
/// deleted, `id()` reports `0` and `path()` an empty string.
pub trait RawHandle {
    fn get(&self, property: &str) -> Vec<Value>;
    fn set(&mut self, property: &str, value: Value);
    fn call(&mut self, method: &str, args: &[Value]) -> Value;
    /// Repoint this handle at another node.
    fn goto(&mut self, path: &str);

    fn id(&self) -> u64;
    fn path(&self) -> String;
    fn kind(&self) -> String;
    /// Diagnostic text. Never parsed.
    fn info(&self) -> String;
}

/// Creates raw handles from canonical construction arguments
/// (`"id N"` or a canonical path).
pub trait Host {
    type Handle: RawHandle;

    fn open(&self, target: &str) -> Self::Handle;
}
