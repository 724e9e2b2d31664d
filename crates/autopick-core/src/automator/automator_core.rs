//! Automator core: struct definition, state accessors and step transitions.

use std::sync::Arc;

use tracing::{debug, info};

use autopick_config::Config;
use autopick_protocols::Document;

use super::{Overlay, Step, SubAction};
use crate::generalize::{Generalizer, Heuristic, distinct_tag_names, shared_classes};
use crate::runner::{ActionPlan, ActionRunner, InspectorGate, RunReport};
use crate::store::{SelectionSet, SelectionStore};

/// Interactive selection engine over a document.
pub struct Automator<D: Document> {
    pub(super) document: Arc<D>,
    pub(super) store: SelectionStore<D::Node>,
    pub(super) generalizer: Generalizer<D>,
    pub(super) runner: ActionRunner,
    pub(super) gate: InspectorGate,
    pub(super) ignore_attribute: String,
    pub(super) min_primary_picks: usize,
    pub(super) overlay: Overlay,
}

impl<D: Document> Automator<D> {
    /// Create an automator in the `Picking` step with empty selections.
    pub fn new(document: Arc<D>, config: &Config) -> Self {
        let gate = InspectorGate::new(config.inspector.enabled);
        Self {
            document,
            store: SelectionStore::new(config.markers.clone()),
            generalizer: Generalizer::new(config.markers.reserved()),
            runner: ActionRunner::new(&config.runner, gate.clone()),
            gate,
            ignore_attribute: config.inspector.ignore_attribute.clone(),
            min_primary_picks: config.generalization.min_primary_picks,
            overlay: Overlay::default(),
        }
    }

    /// Append a heuristic to the generalization chain.
    pub fn with_heuristic<H: Heuristic<D> + 'static>(mut self, heuristic: H) -> Self {
        self.generalizer = self.generalizer.with_heuristic(heuristic);
        self
    }

    pub fn document(&self) -> &Arc<D> {
        &self.document
    }

    pub fn step(&self) -> Step {
        self.store.step()
    }

    pub fn sub_action(&self) -> Option<SubAction> {
        self.store.sub_action()
    }

    pub fn is_click_sub_action(&self) -> bool {
        self.store.sub_action() == Some(SubAction::Click)
    }

    pub fn is_input_sub_action(&self) -> bool {
        self.store.sub_action() == Some(SubAction::Input)
    }

    pub fn input_value(&self) -> &str {
        self.store.input_value()
    }

    pub fn set_input_value(&mut self, value: impl Into<String>) {
        self.store.set_input_value(value);
    }

    pub fn primary_selection(&self) -> &SelectionSet<D::Node> {
        self.store.primary()
    }

    pub fn sub_selection(&self) -> &SelectionSet<D::Node> {
        self.store.sub()
    }

    pub fn active_set(&self) -> &SelectionSet<D::Node> {
        self.store.active_set()
    }

    /// Class tokens shared by every active member, markers excluded.
    pub fn selected_classes(&self) -> Vec<String> {
        shared_classes(self.store.active_set().as_slice(), self.generalizer.reserved())
    }

    /// Distinct tag names of the active members.
    pub fn selected_tag_names(&self) -> Vec<String> {
        distinct_tag_names(self.store.active_set().as_slice())
    }

    /// Display heuristic: primary picks beyond the first two. May be negative.
    pub fn predicted_parents_count(&self) -> i64 {
        self.store.primary().len() as i64 - 2
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn inspector_enabled(&self) -> bool {
        self.gate.is_enabled()
    }

    /// Leave `Picking` for `ChoosingAction`. Requires at least one anchor.
    pub fn finish_picking(&mut self) -> bool {
        if self.store.step() != Step::Picking || self.store.primary().is_empty() {
            debug!(step = ?self.store.step(), "finish_picking ignored");
            return false;
        }
        self.store.set_step(Step::ChoosingAction);
        info!(anchors = self.store.primary().len(), "Anchors fixed, choosing action");
        true
    }

    /// Choose the batch action. Moves to `Configuring` and locks every
    /// primary anchor; the primary selection stays frozen until a full reset.
    pub fn advance_to_sub_action_choice(&mut self, sub_action: SubAction) {
        self.store.set_sub_action(Some(sub_action));
        self.store.set_step(Step::Configuring);
        self.store.lock_primary();
        info!(?sub_action, "Sub-action chosen");
    }

    /// Step back one level.
    ///
    /// Without a sub-action: back to `Picking` with the primary selection
    /// cleared. With one: back to `ChoosingAction`, dropping the sub-selection,
    /// the sub-action and the input value while keeping the anchors.
    pub fn reset(&mut self) {
        if self.store.sub_action().is_none() {
            self.store.set_step(Step::Picking);
            self.store.clear_primary();
            info!("Reset to picking");
        } else {
            self.store.set_step(Step::ChoosingAction);
            self.store.clear_sub();
            self.store.set_sub_action(None);
            self.store.set_input_value("");
            info!("Reset to action choice");
        }
    }

    /// Snapshot of the current action, value and sub-selection.
    pub fn action_plan(&self) -> ActionPlan<D::Node> {
        ActionPlan {
            action: self.store.sub_action(),
            value: self.store.input_value().to_string(),
            targets: self.store.sub().as_slice().to_vec(),
        }
    }

    /// Replay the chosen action across the sub-selection.
    ///
    /// The plan is snapshotted and pointer selection is switched off before
    /// this returns. Clicks routed through [`Automator::pointer_click`] while
    /// the returned future is pending pass through untouched.
    pub fn run(&self) -> impl Future<Output = RunReport> + Send + use<D> {
        self.runner.run(self.action_plan())
    }
}
