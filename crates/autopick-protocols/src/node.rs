//! Node capability trait.

use crate::error::DispatchError;
use crate::types::BoundingBox;

/// Core trait for document nodes.
///
/// A `DomNode` is a cheap handle: cloning it yields another handle to the
/// same element, and `PartialEq` compares identity, not content. The engine
/// never inspects anything beyond this capability set.
pub trait DomNode: Clone + PartialEq + Send + Sync + 'static {
    /// Tag name as reported by the document (case is preserved).
    fn tag_name(&self) -> String;

    /// Ordered class-name tokens, markers included.
    fn class_names(&self) -> Vec<String>;

    /// Parent element, if the node is attached below one.
    fn parent(&self) -> Option<Self>;

    /// Child elements in document order.
    fn children(&self) -> Vec<Self>;

    fn has_attribute(&self, name: &str) -> bool;

    /// Add a marker token. Adding a marker that is already present is a no-op.
    fn add_marker(&self, marker: &str);

    /// Remove a marker token. Removing an absent marker is a no-op.
    fn remove_marker(&self, marker: &str);

    /// Dispatch a synthetic click.
    fn click(&self) -> Result<(), DispatchError>;

    /// Replace the node's value.
    fn set_value(&self, value: &str) -> Result<(), DispatchError>;

    fn bounding_box(&self) -> BoundingBox;

    fn has_class(&self, class: &str) -> bool {
        self.class_names().iter().any(|c| c == class)
    }

    /// True when `other` is a direct or indirect child of `self`.
    fn is_ancestor_of(&self, other: &Self) -> bool {
        let mut current = other.parent();
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.parent();
        }
        false
    }
}
