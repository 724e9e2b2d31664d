//! Automator state types.

use serde::{Deserialize, Serialize};

use autopick_protocols::{BoundingBox, DomNode};

/// Coarse UI phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Building the primary selection.
    #[default]
    Picking,
    /// Selection is locked while an action is chosen.
    ChoosingAction,
    /// Building the sub-selection for the chosen action.
    Configuring,
}

/// Batch action replayed over the sub-selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubAction {
    Click,
    Input,
}

/// Who selected a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Pointed at by the user. May trigger generalization.
    User,
    /// Added by generalization. Never cascades.
    Inferred,
}

/// Result of a select-or-toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Selection is locked in the current step; nothing changed.
    Locked,
    /// The node was already selected and has been removed.
    Deselected,
    /// The node was appended to the active set.
    Selected {
        /// Previously selected descendants dropped in favor of the node.
        subsumed: usize,
        /// Nodes added by the generalization pass this pick triggered.
        inferred: usize,
    },
}

/// What the embedder should do with a pointer click after routing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDisposition {
    /// The click was taken by the inspector: prevent default handling and
    /// stop propagation.
    Consumed,
    /// Not ours (automation panel, empty path, or inspector disabled).
    PassThrough,
}

/// Hover overlay state. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overlay {
    pub visible: bool,
    pub bounds: BoundingBox,
}

/// A pointer event as seen by the inspector.
#[derive(Debug, Clone)]
pub struct PointerEvent<N> {
    /// Composed event path, target first.
    pub path: Vec<N>,
}

impl<N: DomNode> PointerEvent<N> {
    pub fn new(path: Vec<N>) -> Self {
        Self { path }
    }

    /// Event on a single node: the path is the node followed by its ancestors.
    pub fn at(node: &N) -> Self {
        let mut path = vec![node.clone()];
        let mut current = node.parent();
        while let Some(parent) = current {
            current = parent.parent();
            path.push(parent);
        }
        Self { path }
    }

    /// The node the event targets, unless the path crosses a node carrying
    /// `ignore_attribute`.
    pub fn target(&self, ignore_attribute: &str) -> Option<&N> {
        if self.path.iter().any(|n| n.has_attribute(ignore_attribute)) {
            return None;
        }
        self.path.first()
    }
}
