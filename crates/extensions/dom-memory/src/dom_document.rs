//! MemoryDocument: whole-document queries over a `body` root.

use autopick_protocols::{Document, DomNode};

use crate::{MemoryNode, NodeSpec};

/// A document rooted at a `body` element.
///
/// Queries search the descendants of `body`; `body` itself never matches.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    body: MemoryNode,
}

impl MemoryDocument {
    pub fn new(body: MemoryNode) -> Self {
        Self { body }
    }

    /// Build a document whose `body` is constructed from `spec`.
    pub fn from_spec(spec: &NodeSpec) -> Self {
        Self::new(spec.build())
    }

    pub fn body(&self) -> &MemoryNode {
        &self.body
    }

    /// First element whose `id` attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<MemoryNode> {
        self.body
            .descendants()
            .into_iter()
            .find(|n| n.attribute("id").as_deref() == Some(id))
    }
}

impl Document for MemoryDocument {
    type Node = MemoryNode;

    fn query_classes(&self, classes: &[String]) -> Vec<MemoryNode> {
        if classes.is_empty() {
            return Vec::new();
        }
        self.body
            .descendants()
            .into_iter()
            .filter(|n| {
                let own = n.class_names();
                classes.iter().all(|c| own.contains(c))
            })
            .collect()
    }

    fn query_tag(&self, tag: &str) -> Vec<MemoryNode> {
        self.body
            .descendants()
            .into_iter()
            .filter(|n| n.tag_name().eq_ignore_ascii_case(tag))
            .collect()
    }
}
