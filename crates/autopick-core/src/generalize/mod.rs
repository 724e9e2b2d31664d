//! Generalization engine.
//!
//! Given the active selection, infer further nodes that belong to the same
//! logical group. Heuristics run in order and the first one that yields
//! anything wins; later heuristics are never evaluated for that pass.
//!
//! Built-in chain:
//! 1. [`SharedClassHeuristic`] - class tokens present on every selected node
//! 2. [`SharedTagHeuristic`] - the single tag name shared by the selection
//!
//! Additional heuristics (structural position, attribute values, ...) plug in
//! after these via [`Generalizer::with_heuristic`].

mod heuristics;

pub use heuristics::{Heuristic, SharedClassHeuristic, SharedTagHeuristic};

use tracing::debug;

use autopick_protocols::{Document, DomNode};

/// Inputs a heuristic sees for one prediction pass.
pub struct PredictionContext<'a, D: Document> {
    pub document: &'a D,
    /// The active selection the prediction generalizes.
    pub selection: &'a [D::Node],
    /// Primary anchors, present only while a sub-action is chosen. Candidates
    /// must lie inside one of them.
    pub anchors: Option<&'a [D::Node]>,
    /// Marker tokens that never count as shared styling.
    pub reserved: &'a [String],
}

impl<D: Document> PredictionContext<'_, D> {
    /// Class tokens present on every selected node, reserved markers
    /// excluded, in first-seen order.
    pub fn shared_classes(&self) -> Vec<String> {
        shared_classes(self.selection, self.reserved)
    }

    /// Distinct tag names of the selection, in first-seen order.
    pub fn tag_names(&self) -> Vec<String> {
        distinct_tag_names(self.selection)
    }

    /// Reduce raw document matches to new candidates.
    ///
    /// Yields nothing unless the matches outnumber the selection. Already
    /// selected nodes are dropped, and under a sub-action so is anything
    /// outside the anchors' subtrees.
    pub fn candidates(&self, matches: Vec<D::Node>) -> Vec<D::Node> {
        if matches.len() <= self.selection.len() {
            return Vec::new();
        }
        matches
            .into_iter()
            .filter(|m| !self.selection.contains(m))
            .filter(|m| match self.anchors {
                Some(anchors) => anchors.iter().any(|a| a.is_ancestor_of(m)),
                None => true,
            })
            .collect()
    }
}

/// Output of a successful prediction pass.
#[derive(Debug, Clone)]
pub struct Prediction<N> {
    /// Name of the heuristic that produced the nodes.
    pub heuristic: &'static str,
    /// New nodes to select, in document order.
    pub nodes: Vec<N>,
}

/// Ordered heuristic chain.
pub struct Generalizer<D: Document> {
    reserved: Vec<String>,
    heuristics: Vec<Box<dyn Heuristic<D>>>,
}

impl<D: Document> Generalizer<D> {
    /// Create the built-in chain. `reserved` is the marker vocabulary
    /// excluded from class matching.
    pub fn new(reserved: Vec<String>) -> Self {
        let mut heuristics: Vec<Box<dyn Heuristic<D>>> = Vec::new();
        heuristics.push(Box::new(SharedClassHeuristic));
        heuristics.push(Box::new(SharedTagHeuristic));
        Self {
            reserved,
            heuristics,
        }
    }

    /// Append a heuristic after the existing ones.
    pub fn with_heuristic<H: Heuristic<D> + 'static>(mut self, heuristic: H) -> Self {
        self.heuristics.push(Box::new(heuristic));
        self
    }

    pub fn reserved(&self) -> &[String] {
        &self.reserved
    }

    pub fn heuristic_names(&self) -> Vec<&'static str> {
        self.heuristics.iter().map(|h| h.name()).collect()
    }

    /// Run the chain. Returns the first non-empty result, or `None` when no
    /// heuristic found anything new.
    pub fn predict(
        &self,
        document: &D,
        selection: &[D::Node],
        anchors: Option<&[D::Node]>,
    ) -> Option<Prediction<D::Node>> {
        let ctx = PredictionContext {
            document,
            selection,
            anchors,
            reserved: &self.reserved,
        };

        for heuristic in &self.heuristics {
            let nodes = heuristic.predict(&ctx);
            if !nodes.is_empty() {
                debug!(heuristic = heuristic.name(), count = nodes.len(), "Prediction found");
                return Some(Prediction {
                    heuristic: heuristic.name(),
                    nodes,
                });
            }
            debug!(heuristic = heuristic.name(), "Heuristic yielded nothing");
        }
        None
    }
}

/// Class tokens present on every node in `nodes`, minus `reserved`.
pub fn shared_classes<N: DomNode>(nodes: &[N], reserved: &[String]) -> Vec<String> {
    let Some((first, rest)) = nodes.split_first() else {
        return Vec::new();
    };
    let rest: Vec<Vec<String>> = rest.iter().map(|n| n.class_names()).collect();

    let mut shared: Vec<String> = Vec::new();
    for class in first.class_names() {
        if reserved.contains(&class) || shared.contains(&class) {
            continue;
        }
        if rest.iter().all(|classes| classes.contains(&class)) {
            shared.push(class);
        }
    }
    shared
}

/// Distinct tag names across `nodes`, in first-seen order.
pub fn distinct_tag_names<N: DomNode>(nodes: &[N]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in nodes.iter().map(|n| n.tag_name()) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
#[path = "generalize_tests.rs"]
mod tests;
