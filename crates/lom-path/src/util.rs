use crate::types::LomPath;
use crate::PathError;

/// Check if a token is a canonical index: digits only, no leading zero
/// unless the index is `0` itself.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Format a parsed path back into its canonical text.
pub fn format_path(path: &LomPath) -> String {
    path.to_string()
}

/// The path one segment up. A bare root has no parent.
pub fn parent(path: &LomPath) -> Result<LomPath, PathError> {
    if path.segments.is_empty() {
        return Err(PathError::NoParent);
    }
    Ok(LomPath::new(
        path.root,
        path.segments[..path.segments.len() - 1].to_vec(),
    ))
}

/// Check if `parent` strictly contains `child`.
pub fn is_child(parent: &LomPath, child: &LomPath) -> bool {
    parent.root == child.root
        && parent.segments.len() < child.segments.len()
        && child.segments.starts_with(&parent.segments)
}
