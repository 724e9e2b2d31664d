//! # Autopick Protocols
//!
//! Capability definitions (traits) the selection engine consumes from a
//! document tree. Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`DomNode`] - A single element: class list, tag, tree links, markers, dispatch
//! - [`Document`] - Whole-document queries by compound class and by tag name

pub mod document;
pub mod error;
pub mod node;
pub mod types;

pub use document::Document;
pub use error::DispatchError;
pub use node::DomNode;
pub use types::BoundingBox;
