//! Declarative tree description.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use autopick_protocols::BoundingBox;

use crate::MemoryNode;

/// Serializable description of an element and its subtree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeSpec {
    pub tag: String,

    #[serde(default)]
    pub classes: Vec<String>,

    #[serde(default)]
    pub attributes: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundingBox>,

    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Materialize the described subtree.
    pub fn build(&self) -> MemoryNode {
        let mut node =
            MemoryNode::element(self.tag.clone()).with_classes(self.classes.iter().cloned());
        for (name, value) in &self.attributes {
            node.set_attribute(name.clone(), value.clone());
        }
        if let Some(bounds) = self.bounds {
            node = node.with_bounds(bounds);
        }
        for child in &self.children {
            node.append_child(&child.build());
        }
        node
    }
}
