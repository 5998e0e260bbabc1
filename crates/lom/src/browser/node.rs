use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

/// Produces the children of one browser node, one at a time.
pub trait ChildSource {
    /// The child at `index`, or `None` past the last child.
    fn child_at(&self, index: usize) -> Option<BrowserNode>;
}

impl ChildSource for Vec<BrowserNode> {
    fn child_at(&self, index: usize) -> Option<BrowserNode> {
        self.get(index).cloned()
    }
}

/// An immutable browser tree node.
///
/// `uri` is unique across the whole browser, so equality is by `uri`.
#[derive(Clone)]
pub struct BrowserNode {
    pub name: String,
    pub uri: String,
    pub source: String,
    pub is_folder: bool,
    pub is_device: bool,
    pub is_loadable: bool,
    pub is_selected: bool,
    children: Rc<dyn ChildSource>,
}

impl BrowserNode {
    pub fn new(name: impl Into<String>, uri: impl Into<String>, children: Rc<dyn ChildSource>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            source: String::new(),
            is_folder: false,
            is_device: false,
            is_loadable: false,
            is_selected: false,
            children,
        }
    }

    /// A node with no children.
    pub fn leaf(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::new(name, uri, Rc::new(Vec::<BrowserNode>::new()))
    }

    /// A folder over an in-memory child list.
    pub fn folder(name: impl Into<String>, uri: impl Into<String>, children: Vec<BrowserNode>) -> Self {
        let mut node = Self::new(name, uri, Rc::new(children));
        node.is_folder = true;
        node
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn device(mut self) -> Self {
        self.is_device = true;
        self
    }

    pub fn loadable(mut self) -> Self {
        self.is_loadable = true;
        self
    }

    pub fn selected(mut self) -> Self {
        self.is_selected = true;
        self
    }

    /// A fresh forward-only cursor over the children.
    pub fn iter_children(&self) -> Children {
        Children {
            source: Rc::clone(&self.children),
            next: 0,
            done: false,
        }
    }
}

impl PartialEq for BrowserNode {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

impl Eq for BrowserNode {}

impl fmt::Debug for BrowserNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserNode")
            .field("name", &self.name)
            .field("uri", &self.uri)
            .field("source", &self.source)
            .field("is_folder", &self.is_folder)
            .field("is_device", &self.is_device)
            .field("is_loadable", &self.is_loadable)
            .field("is_selected", &self.is_selected)
            .finish_non_exhaustive()
    }
}

/// Single-pass cursor over a node's children.
///
/// Each step fetches exactly one child. Once it yields `None` it stays
/// exhausted; call [`BrowserNode::iter_children`] again to restart.
pub struct Children {
    source: Rc<dyn ChildSource>,
    next: usize,
    done: bool,
}

impl Iterator for Children {
    type Item = BrowserNode;

    fn next(&mut self) -> Option<BrowserNode> {
        if self.done {
            return None;
        }
        match self.source.child_at(self.next) {
            Some(child) => {
                self.next += 1;
                Some(child)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for Children {}
