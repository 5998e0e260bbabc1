//! Typed facade over a raw handle.

use std::sync::OnceLock;

use lom_codec::{
    color_from_value, color_to_hex, decode_id_list, format_id, format_time_signature,
    hex_to_color, PropertyTable, Routing,
};
use lom_path::{parse_path, LomPath, PathError, TrackCategory};
use serde_json::{Map, Value};
use tracing::debug;

use crate::host::{Host, RawHandle};
use crate::identifier::Identifier;
use crate::LomError;

fn default_table() -> &'static PropertyTable {
    static TABLE: OnceLock<PropertyTable> = OnceLock::new();
    TABLE.get_or_init(PropertyTable::default)
}

/// A handle onto one host node with normalized property access.
///
/// Nothing is cached: every read and write is one host round-trip, so the
/// result always reflects the live graph.
pub struct LiveObject<'h, H: Host> {
    host: &'h H,
    table: &'h PropertyTable,
    handle: H::Handle,
}

impl<'h, H: Host> LiveObject<'h, H> {
    /// Open a handle using the built-in property table.
    pub fn open(host: &'h H, identifier: impl Into<Identifier>) -> Result<Self, LomError> {
        Self::open_with_table(host, default_table(), identifier)
    }

    /// Open a handle with a custom property table.
    pub fn open_with_table(
        host: &'h H,
        table: &'h PropertyTable,
        identifier: impl Into<Identifier>,
    ) -> Result<Self, LomError> {
        let construct = identifier.into().normalize()?.to_string();
        debug!(construct = %construct, "opening handle");
        Ok(Self {
            host,
            table,
            handle: host.open(&construct),
        })
    }

    pub fn table(&self) -> &'h PropertyTable {
        self.table
    }

    /// The underlying raw handle.
    pub fn raw(&self) -> &H::Handle {
        &self.handle
    }

    /// Canonical `"id N"`.
    pub fn id(&self) -> String {
        format_id(self.handle.id())
    }

    pub fn raw_id(&self) -> u64 {
        self.handle.id()
    }

    /// Canonical path without the quotes the host wraps it in.
    pub fn path(&self) -> String {
        let path = self.handle.path();
        let trimmed = path.trim();
        trimmed
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(trimmed)
            .to_string()
    }

    pub fn kind(&self) -> String {
        self.handle.kind()
    }

    pub fn info(&self) -> String {
        self.handle.info()
    }

    /// Whether the handle currently resolves to a live node.
    pub fn exists(&self) -> bool {
        self.handle.id() != 0
    }

    /// Raw array read.
    pub fn get(&self, property: &str) -> Vec<Value> {
        debug!(property, "get");
        self.handle.get(property)
    }

    /// Raw write.
    pub fn set(&mut self, property: &str, value: Value) {
        debug!(property, value = %value, "set");
        self.handle.set(property, value);
    }

    pub fn call(&mut self, method: &str, args: &[Value]) -> Value {
        debug!(method, args = args.len(), "call");
        self.handle.call(method, args)
    }

    pub fn goto(&mut self, path: &str) {
        debug!(path, "goto");
        self.handle.goto(path);
    }

    /// Read a property, unwrapped and decoded per the property table.
    ///
    /// `None` when the host returns an empty array.
    pub fn get_property(&self, property: &str) -> Result<Option<Value>, LomError> {
        let raw = self.get(property);
        Ok(self.table.decode(property, raw)?)
    }

    /// Encode and write a property.
    pub fn set_property(&mut self, property: &str, value: impl Into<Value>) -> Result<(), LomError> {
        let encoded = self.table.encode(property, value.into())?;
        self.set(property, encoded);
        Ok(())
    }

    /// Write every non-null entry, in map order. Null entries are skipped.
    ///
    /// All entries are encoded before the first write, so an encoding error
    /// leaves the host untouched.
    pub fn set_all(&mut self, values: &Map<String, Value>) -> Result<(), LomError> {
        let encoded = values
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(property, value)| -> Result<_, LomError> {
                Ok((property, self.table.encode(property, value.clone())?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        for (property, value) in encoded {
            self.set(property, value);
        }
        Ok(())
    }

    /// The `color` property as `#RRGGBB`.
    pub fn get_color(&self) -> Result<Option<String>, LomError> {
        match self.get_property("color")? {
            Some(value) => Ok(Some(color_to_hex(color_from_value(&value)?)?)),
            None => Ok(None),
        }
    }

    pub fn set_color(&mut self, hex: &str) -> Result<(), LomError> {
        let color = hex_to_color(hex)?;
        self.set_property("color", color)
    }

    pub fn get_routing(&self, property: &str) -> Result<Option<Routing>, LomError> {
        match self.get_property(property)? {
            Some(value) => Ok(Some(Routing::from_value(property, value)?)),
            None => Ok(None),
        }
    }

    pub fn set_routing(&mut self, property: &str, routing: &Routing) -> Result<(), LomError> {
        self.set_property(property, routing.to_value())
    }

    /// Child ids of a collection (`tracks`, `devices`, ...) as `"id N"`.
    pub fn child_ids(&self, collection: &str) -> Result<Vec<String>, LomError> {
        let ids = decode_id_list(&self.get(collection))?;
        Ok(ids.into_iter().map(format_id).collect())
    }

    pub fn child_count(&self, collection: &str) -> Result<usize, LomError> {
        Ok(decode_id_list(&self.get(collection))?.len())
    }

    /// One facade per child of a collection, sharing this handle's host and table.
    pub fn children(&self, collection: &str) -> Result<Vec<LiveObject<'h, H>>, LomError> {
        decode_id_list(&self.get(collection))?
            .into_iter()
            .map(|id| Self::open_with_table(self.host, self.table, id))
            .collect()
    }

    /// The node one path segment up, `None` at a root or once the node is gone.
    pub fn parent(&self) -> Result<Option<LiveObject<'h, H>>, LomError> {
        let Some(location) = self.location()? else {
            return Ok(None);
        };
        match lom_path::parent(&location) {
            Ok(parent) => Self::open_with_table(self.host, self.table, parent.to_string()).map(Some),
            Err(PathError::NoParent) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// The parsed canonical path, `None` when the host reports no path
    /// (the node was deleted).
    pub fn location(&self) -> Result<Option<LomPath>, LomError> {
        let path = self.path();
        if path.is_empty() {
            return Ok(None);
        }
        Ok(Some(parse_path(&path)?))
    }

    fn project(&self, index: impl FnOnce(&LomPath) -> Option<u32>) -> Result<Option<u32>, LomError> {
        Ok(self.location()?.as_ref().and_then(index))
    }

    pub fn track_index(&self) -> Result<Option<u32>, LomError> {
        self.project(LomPath::track_index)
    }

    pub fn return_track_index(&self) -> Result<Option<u32>, LomError> {
        self.project(LomPath::return_track_index)
    }

    pub fn category(&self) -> Result<Option<TrackCategory>, LomError> {
        Ok(self.location()?.and_then(|path| path.category()))
    }

    pub fn scene_index(&self) -> Result<Option<u32>, LomError> {
        self.project(LomPath::scene_index)
    }

    pub fn clip_slot_index(&self) -> Result<Option<u32>, LomError> {
        self.project(LomPath::clip_slot_index)
    }

    pub fn device_index(&self) -> Result<Option<u32>, LomError> {
        self.project(LomPath::device_index)
    }

    /// `"N/D"` from `signature_numerator` and `signature_denominator`.
    pub fn time_signature(&self) -> Result<Option<String>, LomError> {
        let numerator = self.get_property("signature_numerator")?;
        let denominator = self.get_property("signature_denominator")?;
        Ok(format_time_signature(numerator.as_ref(), denominator.as_ref())?)
    }
}
