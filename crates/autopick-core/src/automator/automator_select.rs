//! Automator selection: select-or-toggle and the generalization pass.

use std::collections::VecDeque;

use tracing::debug;

use autopick_protocols::Document;

use super::{Automator, Origin, SelectOutcome, Step};

impl<D: Document> Automator<D> {
    /// Select `node` into the active set, or deselect it if already there.
    ///
    /// A no-op while choosing an action. Selecting an ancestor of existing
    /// members replaces them. User picks trigger generalization once the
    /// active set reaches the threshold; inferred picks never do.
    pub fn select_or_toggle(&mut self, node: &D::Node, origin: Origin) -> SelectOutcome {
        let outcome = self.apply_selection(node, origin);
        let SelectOutcome::Selected { subsumed, .. } = outcome else {
            return outcome;
        };

        let inferred = if origin == Origin::User && self.should_predict() {
            self.generalize()
        } else {
            0
        };
        SelectOutcome::Selected { subsumed, inferred }
    }

    fn apply_selection(&mut self, node: &D::Node, origin: Origin) -> SelectOutcome {
        if self.store.step() == Step::ChoosingAction {
            debug!("Selection locked while choosing an action");
            return SelectOutcome::Locked;
        }

        if self.store.remove(node) {
            debug!(?origin, "Deselected node");
            return SelectOutcome::Deselected;
        }

        let subsumed = self.store.insert(node, origin);
        debug!(?origin, size = self.store.active_set().len(), "Selected node");
        SelectOutcome::Selected {
            subsumed,
            inferred: 0,
        }
    }

    fn should_predict(&self) -> bool {
        let len = self.store.active_set().len();
        if self.store.sub_action().is_some() {
            len >= 1
        } else {
            len >= self.min_primary_picks
        }
    }

    /// Run the heuristic chain once and select its candidates as inferred
    /// picks. Returns the number of nodes added.
    fn generalize(&mut self) -> usize {
        let anchors = self
            .store
            .sub_action()
            .map(|_| self.store.primary().as_slice());
        let prediction = self.generalizer.predict(
            self.document.as_ref(),
            self.store.active_set().as_slice(),
            anchors,
        );
        let Some(prediction) = prediction else {
            return 0;
        };

        // Candidates are queued rather than selected recursively; inferred
        // picks are never re-examined for further generalization.
        let mut queue: VecDeque<D::Node> = prediction.nodes.into();
        let mut added = 0;
        while let Some(candidate) = queue.pop_front() {
            let outcome = self.apply_selection(&candidate, Origin::Inferred);
            if matches!(outcome, SelectOutcome::Selected { .. }) {
                added += 1;
            }
        }

        debug!(heuristic = prediction.heuristic, added, "Generalization applied");
        added
    }
}
