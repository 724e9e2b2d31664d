//! Selection controller.
//!
//! The [`Automator`] owns the selection store, routes pointer events into it,
//! triggers generalization after user picks and hands the sub-selection to
//! the action runner.

mod automator_core;
mod automator_pointer;
mod automator_select;
mod automator_types;

pub use automator_core::Automator;
pub use automator_types::{
    ClickDisposition, Origin, Overlay, PointerEvent, SelectOutcome, Step, SubAction,
};

#[cfg(test)]
#[path = "automator_tests.rs"]
mod tests;
