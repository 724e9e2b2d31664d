//! Dispatch errors raised by node capability implementations.

use thiserror::Error;

/// Failure to deliver a synthetic action to a node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The node was removed from the document before the action fired.
    #[error("Node detached from document: <{0}>")]
    Detached(String),

    /// The node does not accept a value.
    #[error("Node is not editable: <{0}>")]
    NotEditable(String),

    #[error("Dispatch failed: {0}")]
    Failed(String),
}
