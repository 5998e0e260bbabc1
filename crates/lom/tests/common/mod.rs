#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use lom::{BrowserCategory, BrowserHost, BrowserNode, Host, RawHandle};
use lom_codec::parse_id;
use serde_json::Value;

struct Node {
    path: String,
    kind: String,
    props: HashMap<String, Vec<Value>>,
}

#[derive(Default)]
struct Graph {
    nodes: BTreeMap<u64, Node>,
    opened: Vec<String>,
    writes: Vec<(u64, String, Value)>,
    calls: Vec<(u64, String, Vec<Value>)>,
}

impl Graph {
    fn resolve(&self, target: &str) -> u64 {
        if let Some(id) = parse_id(target) {
            return if self.nodes.contains_key(&id) { id } else { 0 };
        }
        self.nodes
            .iter()
            .find(|(_, node)| node.path == target)
            .map(|(id, _)| *id)
            .unwrap_or(0)
    }
}

/// In-memory scene graph standing in for the host.
#[derive(Clone, Default)]
pub struct FakeHost {
    graph: Rc<RefCell<Graph>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, id: u64, path: &str, kind: &str) -> &Self {
        self.graph.borrow_mut().nodes.insert(
            id,
            Node {
                path: path.to_string(),
                kind: kind.to_string(),
                props: HashMap::new(),
            },
        );
        self
    }

    pub fn prop(&self, id: u64, name: &str, raw: Vec<Value>) -> &Self {
        if let Some(node) = self.graph.borrow_mut().nodes.get_mut(&id) {
            node.props.insert(name.to_string(), raw);
        }
        self
    }

    pub fn delete(&self, id: u64) {
        self.graph.borrow_mut().nodes.remove(&id);
    }

    pub fn opened(&self) -> Vec<String> {
        self.graph.borrow().opened.clone()
    }

    pub fn writes(&self) -> Vec<(u64, String, Value)> {
        self.graph.borrow().writes.clone()
    }

    pub fn calls(&self) -> Vec<(u64, String, Vec<Value>)> {
        self.graph.borrow().calls.clone()
    }

    pub fn stored(&self, id: u64, name: &str) -> Option<Vec<Value>> {
        self.graph
            .borrow()
            .nodes
            .get(&id)
            .and_then(|node| node.props.get(name).cloned())
    }
}

pub struct FakeHandle {
    graph: Rc<RefCell<Graph>>,
    id: u64,
}

impl Host for FakeHost {
    type Handle = FakeHandle;

    fn open(&self, target: &str) -> FakeHandle {
        let mut graph = self.graph.borrow_mut();
        graph.opened.push(target.to_string());
        let id = graph.resolve(target);
        FakeHandle {
            graph: Rc::clone(&self.graph),
            id,
        }
    }
}

impl RawHandle for FakeHandle {
    fn get(&self, property: &str) -> Vec<Value> {
        self.graph
            .borrow()
            .nodes
            .get(&self.id)
            .and_then(|node| node.props.get(property).cloned())
            .unwrap_or_default()
    }

    fn set(&mut self, property: &str, value: Value) {
        let mut graph = self.graph.borrow_mut();
        graph.writes.push((self.id, property.to_string(), value.clone()));
        if let Some(node) = graph.nodes.get_mut(&self.id) {
            node.props.insert(property.to_string(), vec![value]);
        }
    }

    fn call(&mut self, method: &str, args: &[Value]) -> Value {
        self.graph
            .borrow_mut()
            .calls
            .push((self.id, method.to_string(), args.to_vec()));
        Value::Null
    }

    fn goto(&mut self, path: &str) {
        self.id = self.graph.borrow().resolve(path);
    }

    fn id(&self) -> u64 {
        if self.graph.borrow().nodes.contains_key(&self.id) {
            self.id
        } else {
            0
        }
    }

    fn path(&self) -> String {
        match self.graph.borrow().nodes.get(&self.id) {
            Some(node) => format!("\"{}\"", node.path),
            None => String::new(),
        }
    }

    fn kind(&self) -> String {
        self.graph
            .borrow()
            .nodes
            .get(&self.id)
            .map(|node| node.kind.clone())
            .unwrap_or_default()
    }

    fn info(&self) -> String {
        format!("id {}\ntype {}", self.id(), self.kind())
    }
}

/// In-memory browser with a settable hotswap target.
#[derive(Default)]
pub struct FakeBrowser {
    pub categories: HashMap<BrowserCategory, BrowserNode>,
    pub user_folders: Vec<BrowserNode>,
    pub target: RefCell<Option<BrowserNode>>,
    pub loaded: RefCell<Vec<String>>,
    pub previewing: RefCell<Option<String>>,
}

impl FakeBrowser {
    pub fn set_target(&self, target: Option<BrowserNode>) {
        *self.target.borrow_mut() = target;
    }
}

impl BrowserHost for FakeBrowser {
    fn category(&self, category: BrowserCategory) -> Option<BrowserNode> {
        self.categories.get(&category).cloned()
    }

    fn user_folders(&self) -> Vec<BrowserNode> {
        self.user_folders.clone()
    }

    fn colors(&self) -> Vec<BrowserNode> {
        Vec::new()
    }

    fn hotswap_target(&self) -> Option<BrowserNode> {
        self.target.borrow().clone()
    }

    fn load_item(&self, item: &BrowserNode) {
        self.loaded.borrow_mut().push(item.uri.clone());
    }

    fn preview_item(&self, item: &BrowserNode) {
        *self.previewing.borrow_mut() = Some(item.uri.clone());
    }

    fn stop_preview(&self) {
        *self.previewing.borrow_mut() = None;
    }
}

/// Depth-first lookup by uri across a subtree, root included.
pub fn find_node(root: &BrowserNode, uri: &str) -> Option<BrowserNode> {
    if root.uri == uri {
        return Some(root.clone());
    }
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        for child in node.iter_children() {
            if child.uri == uri {
                return Some(child);
            }
            stack.push(child);
        }
    }
    None
}
