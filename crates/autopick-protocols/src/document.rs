//! Document-wide query capability.

use crate::node::DomNode;

/// Queries against the full document.
///
/// Both queries return matches in document order.
pub trait Document: Send + Sync {
    type Node: DomNode;

    /// Every node carrying all of `classes` (logical AND, like a compound
    /// `.a.b.c` selector). An empty token list matches nothing.
    fn query_classes(&self, classes: &[String]) -> Vec<Self::Node>;

    /// Every node whose tag name matches `tag`.
    fn query_tag(&self, tag: &str) -> Vec<Self::Node>;
}
