//! MemoryNode: a shared, mutable element handle.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tracing::debug;

use autopick_protocols::{BoundingBox, DispatchError, DomNode};

const EDITABLE_TAGS: [&str; 3] = ["input", "textarea", "select"];

struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    value: String,
    clicks: usize,
    bounds: BoundingBox,
    connected: bool,
    parent: Weak<RwLock<NodeData>>,
    children: Vec<MemoryNode>,
}

/// Element handle. Clones share the same element; equality is identity.
#[derive(Clone)]
pub struct MemoryNode {
    inner: Arc<RwLock<NodeData>>,
}

impl MemoryNode {
    /// Create a parentless element with the given tag.
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(NodeData {
                tag: tag.into(),
                classes: Vec::new(),
                attributes: HashMap::new(),
                value: String::new(),
                clicks: 0,
                bounds: BoundingBox::default(),
                connected: true,
                parent: Weak::new(),
                children: Vec::new(),
            })),
        }
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.push_class(class.into());
        self
    }

    pub fn with_classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            self.push_class(class.into());
        }
        self
    }

    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_bounds(self, bounds: BoundingBox) -> Self {
        self.inner.write().bounds = bounds;
        self
    }

    pub fn with_child(self, child: MemoryNode) -> Self {
        self.append_child(&child);
        self
    }

    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.write().attributes.insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.read().attributes.get(name).cloned()
    }

    /// Append `child` as the last child, moving it out of any previous parent.
    pub fn append_child(&self, child: &MemoryNode) {
        child.unlink();
        child.inner.write().parent = Arc::downgrade(&self.inner);
        self.inner.write().children.push(child.clone());
    }

    /// Remove this node from its parent. The node and its subtree stop
    /// accepting dispatched actions.
    pub fn detach(&self) {
        self.unlink();
        self.mark_disconnected();
        debug!(tag = %self.tag_name(), "Node detached");
    }

    pub fn is_connected(&self) -> bool {
        self.inner.read().connected
    }

    /// Current value (as set by [`DomNode::set_value`]).
    pub fn value(&self) -> String {
        self.inner.read().value.clone()
    }

    /// Number of clicks dispatched to this node.
    pub fn click_count(&self) -> usize {
        self.inner.read().clicks
    }

    /// Pre-order traversal of this node's subtree, excluding the node itself.
    pub fn descendants(&self) -> Vec<MemoryNode> {
        let mut out = Vec::new();
        let mut stack: Vec<MemoryNode> = self.children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.children().into_iter().rev());
            out.push(node);
        }
        out
    }

    fn push_class(&self, class: String) {
        let mut data = self.inner.write();
        if !data.classes.contains(&class) {
            data.classes.push(class);
        }
    }

    fn unlink(&self) {
        let parent = self.inner.read().parent.upgrade();
        if let Some(parent) = parent {
            parent
                .write()
                .children
                .retain(|c| !Arc::ptr_eq(&c.inner, &self.inner));
        }
        self.inner.write().parent = Weak::new();
    }

    fn mark_disconnected(&self) {
        self.inner.write().connected = false;
        for child in self.children() {
            child.mark_disconnected();
        }
    }
}

impl PartialEq for MemoryNode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for MemoryNode {}

impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.read();
        f.debug_struct("MemoryNode")
            .field("tag", &data.tag)
            .field("classes", &data.classes)
            .field("children", &data.children.len())
            .finish()
    }
}

impl DomNode for MemoryNode {
    fn tag_name(&self) -> String {
        self.inner.read().tag.clone()
    }

    fn class_names(&self) -> Vec<String> {
        self.inner.read().classes.clone()
    }

    fn parent(&self) -> Option<Self> {
        self.inner
            .read()
            .parent
            .upgrade()
            .map(|inner| MemoryNode { inner })
    }

    fn children(&self) -> Vec<Self> {
        self.inner.read().children.clone()
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.inner.read().attributes.contains_key(name)
    }

    fn add_marker(&self, marker: &str) {
        self.push_class(marker.to_string());
    }

    fn remove_marker(&self, marker: &str) {
        self.inner.write().classes.retain(|c| c != marker);
    }

    fn click(&self) -> Result<(), DispatchError> {
        let mut data = self.inner.write();
        if !data.connected {
            return Err(DispatchError::Detached(data.tag.clone()));
        }
        data.clicks += 1;
        Ok(())
    }

    fn set_value(&self, value: &str) -> Result<(), DispatchError> {
        let mut data = self.inner.write();
        if !data.connected {
            return Err(DispatchError::Detached(data.tag.clone()));
        }
        if !EDITABLE_TAGS
            .iter()
            .any(|t| t.eq_ignore_ascii_case(&data.tag))
        {
            return Err(DispatchError::NotEditable(data.tag.clone()));
        }
        data.value = value.to_string();
        Ok(())
    }

    fn bounding_box(&self) -> BoundingBox {
        self.inner.read().bounds
    }
}
