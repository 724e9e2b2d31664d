//! # Autopick Core
//!
//! Interactive element selection with structural generalization.
//!
//! A user points at nodes, the [`Automator`] selects them, infers a rule
//! (shared class tokens, then shared tag name) to auto-select similar nodes,
//! and finally replays a click or value entry across the inferred set via
//! the [`ActionRunner`].
//!
//! ## Flow
//!
//! ```text
//! pointer click ─► Automator::select_or_toggle ─► SelectionStore
//!                          │ (user pick, threshold reached)
//!                          ▼
//!                     Generalizer ─► inferred picks ─► SelectionStore
//!
//! Automator::run ─► ActionRunner ─► DomNode::click / DomNode::set_value
//! ```
//!
//! ## Steps
//!
//! 1. `Picking` - pointer picks build the primary selection (anchors)
//! 2. `ChoosingAction` - selection is locked while the user picks click or input
//! 3. `Configuring` - picks build the sub-selection inside the anchors

pub mod automator;
pub mod generalize;
pub mod runner;
pub mod store;

pub use automator::{
    Automator, ClickDisposition, Origin, Overlay, PointerEvent, SelectOutcome, Step, SubAction,
};
pub use generalize::{
    Generalizer, Heuristic, Prediction, PredictionContext, SharedClassHeuristic,
    SharedTagHeuristic,
};
pub use runner::{ActionPlan, ActionRunner, DispatchFailure, InspectorGate, RunReport};
pub use store::{SelectionSet, SelectionStore};
