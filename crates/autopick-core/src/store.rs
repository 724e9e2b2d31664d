//! Selection store: the primary and sub selection sets plus step state.

use tracing::debug;

use autopick_config::MarkersConfig;
use autopick_protocols::DomNode;

use crate::automator::{Origin, Step, SubAction};

/// Ordered, duplicate-free sequence of nodes. Membership is identity.
#[derive(Debug, Clone)]
pub struct SelectionSet<N> {
    nodes: Vec<N>,
}

impl<N> Default for SelectionSet<N> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<N: DomNode> SelectionSet<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.iter().any(|n| n == node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn as_slice(&self) -> &[N] {
        &self.nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Append `node` unless it is already a member. Returns whether it was added.
    pub fn push(&mut self, node: N) -> bool {
        if self.contains(&node) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Remove `node`. Returns whether it was a member.
    pub fn remove(&mut self, node: &N) -> bool {
        match self.nodes.iter().position(|n| n == node) {
            Some(index) => {
                self.nodes.remove(index);
                true
            }
            None => false,
        }
    }

    fn take(&mut self) -> Vec<N> {
        std::mem::take(&mut self.nodes)
    }
}

/// Holds both selection sets and the step/action state, and applies the
/// marker vocabulary to members.
///
/// A node carries at most one origin marker. Clearing a node strips every
/// reserved marker regardless of which ones it holds.
#[derive(Debug)]
pub struct SelectionStore<N> {
    primary: SelectionSet<N>,
    sub: SelectionSet<N>,
    step: Step,
    sub_action: Option<SubAction>,
    input_value: String,
    markers: MarkersConfig,
}

impl<N: DomNode> SelectionStore<N> {
    pub fn new(markers: MarkersConfig) -> Self {
        Self {
            primary: SelectionSet::new(),
            sub: SelectionSet::new(),
            step: Step::Picking,
            sub_action: None,
            input_value: String::new(),
            markers,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    pub fn sub_action(&self) -> Option<SubAction> {
        self.sub_action
    }

    pub fn set_sub_action(&mut self, sub_action: Option<SubAction>) {
        self.sub_action = sub_action;
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn set_input_value(&mut self, value: impl Into<String>) {
        self.input_value = value.into();
    }

    pub fn primary(&self) -> &SelectionSet<N> {
        &self.primary
    }

    pub fn sub(&self) -> &SelectionSet<N> {
        &self.sub
    }

    /// The set every selection operation targets: the sub-selection while a
    /// sub-action is chosen, else the primary selection.
    pub fn active_set(&self) -> &SelectionSet<N> {
        if self.sub_action.is_some() {
            &self.sub
        } else {
            &self.primary
        }
    }

    fn active_set_mut(&mut self) -> &mut SelectionSet<N> {
        if self.sub_action.is_some() {
            &mut self.sub
        } else {
            &mut self.primary
        }
    }

    /// Remove `node` from the active set and strip its markers.
    pub fn remove(&mut self, node: &N) -> bool {
        if !self.active_set_mut().remove(node) {
            return false;
        }
        self.clear_markers(node);
        true
    }

    /// Append `node` to the active set, dropping members it is an ancestor
    /// of. Returns the number of members dropped.
    pub fn insert(&mut self, node: &N, origin: Origin) -> usize {
        let subsumed: Vec<N> = self
            .active_set()
            .iter()
            .filter(|member| node.is_ancestor_of(member))
            .cloned()
            .collect();
        for member in &subsumed {
            self.remove(member);
        }
        if !subsumed.is_empty() {
            debug!(count = subsumed.len(), "Selected ancestor subsumed descendants");
        }

        self.active_set_mut().push(node.clone());

        let (marker, other) = match origin {
            Origin::User => (&self.markers.user_selected, &self.markers.algo_selected),
            Origin::Inferred => (&self.markers.algo_selected, &self.markers.user_selected),
        };
        node.remove_marker(other);
        node.add_marker(marker);
        if self.sub_action.is_some() {
            node.add_marker(&self.markers.dimmed);
        }

        subsumed.len()
    }

    /// Mark every primary member as locked.
    pub fn lock_primary(&self) {
        for node in self.primary.iter() {
            node.add_marker(&self.markers.locked);
        }
    }

    /// Strip markers from every primary member and empty the set.
    pub fn clear_primary(&mut self) {
        for node in self.primary.take() {
            self.clear_markers(&node);
        }
    }

    /// Strip markers from every sub-selection member and empty the set.
    pub fn clear_sub(&mut self) {
        for node in self.sub.take() {
            self.clear_markers(&node);
        }
    }

    fn clear_markers(&self, node: &N) {
        for marker in self.markers.reserved() {
            node.remove_marker(&marker);
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
