//! Tree-position relation between a browser node and the hotswap target.

use std::fmt;

use super::node::BrowserNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Same `uri`.
    Equal,
    /// The target sits below the item.
    Ancestor,
    /// The item sits below the target.
    Descendant,
    /// No target, or neither contains the other.
    Unrelated,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Equal => "equal",
            Relation::Ancestor => "ancestor",
            Relation::Descendant => "descendant",
            Relation::Unrelated => "none",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relate `item` to `target` by walking each subtree for the other's `uri`.
pub fn relation_between(item: &BrowserNode, target: Option<&BrowserNode>) -> Relation {
    let Some(target) = target else {
        return Relation::Unrelated;
    };
    if item.uri == target.uri {
        Relation::Equal
    } else if contains(item, &target.uri) {
        Relation::Ancestor
    } else if contains(target, &item.uri) {
        Relation::Descendant
    } else {
        Relation::Unrelated
    }
}

/// Depth-first search below `root`, stopping at the first match.
///
/// Iterative so depth is bounded by the tree, not the call stack.
pub fn contains(root: &BrowserNode, uri: &str) -> bool {
    let mut stack = vec![root.iter_children()];
    while let Some(cursor) = stack.last_mut() {
        match cursor.next() {
            Some(child) if child.uri == uri => return true,
            Some(child) => stack.push(child.iter_children()),
            None => {
                stack.pop();
            }
        }
    }
    false
}
