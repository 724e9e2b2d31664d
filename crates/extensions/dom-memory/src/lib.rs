//! In-memory document tree for autopick.
//!
//! Implements [`DomNode`](autopick_protocols::DomNode) and
//! [`Document`](autopick_protocols::Document) over a plain element tree, so
//! the selection engine can run without a browser. Markers are stored as
//! class tokens, the same way a live DOM would carry them.
//!
//! ## Building a tree
//!
//! Trees are assembled either with the builder methods on [`MemoryNode`] or
//! declaratively from a [`NodeSpec`] (serde, so JSON and TOML fixtures work).

mod dom_document;
mod dom_node;
mod dom_spec;

pub use dom_document::MemoryDocument;
pub use dom_node::MemoryNode;
pub use dom_spec::NodeSpec;

#[cfg(test)]
#[path = "dom_tests.rs"]
mod tests;
