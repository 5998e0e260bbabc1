//! Canonical Live Object Model path utilities.
//!
//! A canonical path is a space-separated token sequence. Collection tokens
//! are followed by an index and nesting runs outer to inner, so
//! `live_set tracks 0 devices 2 chains 0 devices 1` is a device inside a rack
//! on the first track.
//!
//! The path is parsed once into a [`LomPath`]; every index getter is a
//! projection over its segments.
//!
//! # Example
//!
//! ```
//! use lom_path::{parse_path, TrackCategory};
//!
//! let path = parse_path("live_set tracks 0 devices 2 devices 1").unwrap();
//! assert_eq!(path.track_index(), Some(0));
//! assert_eq!(path.device_index(), Some(1));
//! assert_eq!(path.category(), Some(TrackCategory::Regular));
//! assert_eq!(path.return_track_index(), None);
//!
//! let master = parse_path("live_set master_track").unwrap();
//! assert_eq!(master.category(), Some(TrackCategory::Master));
//! assert_eq!(master.track_index(), None);
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Collection, LomPath, PathIndices, Root, Segment, TrackCategory};

mod parser;
pub use parser::PathParser;

pub mod util;
pub use util::{format_path, is_child, is_valid_index, parent};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path")]
    Empty,
    #[error("unknown path root: {0}")]
    UnknownRoot(String),
    #[error("expected an index after '{0}'")]
    MissingIndex(String),
    #[error("unexpected index: {0}")]
    UnexpectedIndex(String),
    #[error("invalid index: {0}")]
    InvalidIndex(String),
    #[error("invalid path token: {0}")]
    InvalidToken(String),
    #[error("path has no parent")]
    NoParent,
}

/// Parse a canonical path string.
///
/// # Example
///
/// ```
/// use lom_path::{parse_path, PathError};
///
/// assert!(parse_path("live_set scenes 3").is_ok());
/// assert_eq!(parse_path(""), Err(PathError::Empty));
/// ```
pub fn parse_path(path: &str) -> Result<LomPath, PathError> {
    PathParser::parse(path)
}

/// Project all positional indices of a path string.
pub fn path_indices(path: &str) -> Result<PathIndices, PathError> {
    Ok(parse_path(path)?.indices())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> LomPath {
        parse_path(path).unwrap_or_else(|e| panic!("parse failed for '{path}': {e}"))
    }

    #[test]
    fn test_regular_track() {
        let indices = path_indices("live_set tracks 0").unwrap();
        assert_eq!(indices.track_index, Some(0));
        assert_eq!(indices.category, Some(TrackCategory::Regular));
        assert_eq!(indices.return_track_index, None);
    }

    #[test]
    fn test_master_track() {
        let indices = path_indices("live_set master_track").unwrap();
        assert_eq!(indices.category, Some(TrackCategory::Master));
        assert_eq!(indices.track_index, None);
    }

    #[test]
    fn test_last_devices_token_wins() {
        assert_eq!(parse("live_set tracks 0 devices 2 devices 1").device_index(), Some(1));
        assert_eq!(parse("live_set tracks 0 devices 2").device_index(), Some(2));
    }

    #[test]
    fn test_format_roundtrip() {
        let paths = [
            "live_set",
            "live_set tracks 0",
            "live_set master_track mixer_device volume",
            "live_set return_tracks 1 devices 0 parameters 3",
            "live_set tracks 2 clip_slots 4 clip",
            "control_surfaces 0 components 5",
        ];
        for path in paths {
            assert_eq!(format_path(&parse(path)), path, "Failed roundtrip for: {:?}", path);
        }
    }

    #[test]
    fn test_parent() {
        let path = parse("live_set tracks 0 devices 1");
        assert_eq!(parent(&path).unwrap(), parse("live_set tracks 0"));
        assert_eq!(parent(&parse("live_set tracks 0")).unwrap(), parse("live_set"));
        assert_eq!(parent(&parse("live_set")), Err(PathError::NoParent));
    }

    #[test]
    fn test_is_child() {
        let track = parse("live_set tracks 0");
        let device = parse("live_set tracks 0 devices 1");
        let other = parse("live_set tracks 1 devices 1");

        assert!(is_child(&track, &device));
        assert!(!is_child(&device, &track));
        assert!(!is_child(&track, &other));
        assert!(!is_child(&track, &track));
        assert!(!is_child(&parse("live_app"), &parse("live_set tracks 0")));
    }

    #[test]
    fn test_is_valid_index() {
        assert!(is_valid_index("0"));
        assert!(is_valid_index("123"));
        assert!(!is_valid_index("-1"));
        assert!(!is_valid_index("1.5"));
        assert!(!is_valid_index(""));
        assert!(!is_valid_index("01"));
    }
}
