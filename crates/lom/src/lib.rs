//! Typed facade over a live object model accessor.
//!
//! The host exposes nodes of its scene graph (tracks, clips, devices,
//! scenes) through four primitives: array-wrapped `get`, `set`, `call` and
//! `goto`. This crate layers normalized access on top:
//!
//! - [`identifier`]: ids, `("id", N)` pairs and paths collapse into one [`Target`]
//! - [`object`]: [`LiveObject`], unwrapped/decoded properties, colors,
//!   routings, children and path-derived indices
//! - [`browser`]: the read-only browser tree and hotswap relations
//!
//! Property codecs live in [`lom_codec`], path parsing in [`lom_path`].
//!
//! # Example
//!
//! ```
//! use lom::{normalize, Target};
//!
//! assert_eq!(normalize(42u64).unwrap(), Target::Id(42));
//! assert_eq!(normalize("42").unwrap().to_string(), "id 42");
//! assert_eq!(normalize(("id", 42)).unwrap().to_string(), "id 42");
//! ```

mod error;
pub use error::LomError;

pub mod host;
pub use host::{Host, RawHandle};

pub mod identifier;
pub use identifier::{normalize, Identifier, Target};

pub mod object;
pub use object::LiveObject;

pub mod browser;
pub use browser::{Browser, BrowserCategory, BrowserHost, BrowserNode, ChildSource, Children, Relation};

pub use lom_codec::{PropertySpec, PropertyTable, Routing};
pub use lom_path::{LomPath, PathIndices, TrackCategory};
