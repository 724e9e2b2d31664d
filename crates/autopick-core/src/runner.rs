//! Batch action runner.
//!
//! Every target gets its own task that sleeps for the configured delay and
//! then dispatches. Tasks are independent, so N targets all fire at roughly
//! the same offset; the run completes once the whole set has been joined.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use autopick_config::RunnerConfig;
use autopick_protocols::{DispatchError, DomNode};

use crate::automator::SubAction;

/// Shared switch for pointer-driven selection.
///
/// Cleared while a run is in flight so pointer clicks pass through instead
/// of mutating the selection.
#[derive(Debug, Clone)]
pub struct InspectorGate(Arc<AtomicBool>);

impl InspectorGate {
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.0.store(enabled, Ordering::SeqCst);
    }
}

impl Default for InspectorGate {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Holds the gate closed; reopens it on drop, including when a run future
/// is dropped before completing.
struct GateGuard(InspectorGate);

impl GateGuard {
    fn disable(gate: InspectorGate) -> Self {
        gate.set_enabled(false);
        Self(gate)
    }
}

impl Drop for GateGuard {
    fn drop(&mut self) {
        self.0.set_enabled(true);
    }
}

/// Snapshot of what a run will do.
#[derive(Debug, Clone)]
pub struct ActionPlan<N> {
    /// `None` dispatches nothing; the targets are still scheduled.
    pub action: Option<SubAction>,
    /// Value written by [`SubAction::Input`].
    pub value: String,
    pub targets: Vec<N>,
}

/// A target whose dispatch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchFailure {
    /// Position of the target in the plan.
    pub index: usize,
    pub error: DispatchError,
}

/// Outcome of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub total: usize,
    pub dispatched: usize,
    /// Sorted by target index.
    pub failures: Vec<DispatchFailure>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Executes an [`ActionPlan`] with a fixed per-node delay.
#[derive(Debug, Clone)]
pub struct ActionRunner {
    delay: Duration,
    gate: InspectorGate,
}

impl ActionRunner {
    pub fn new(config: &RunnerConfig, gate: InspectorGate) -> Self {
        Self {
            delay: Duration::from_millis(config.dispatch_delay_ms),
            gate,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn gate(&self) -> &InspectorGate {
        &self.gate
    }

    /// Run the plan. Pointer selection is disabled as soon as this is called
    /// and stays off until every scheduled dispatch has fired. The returned
    /// future owns its state, so the caller keeps the runner free while it is
    /// in flight. A failing target is logged and recorded; it never stops the
    /// others.
    pub fn run<N: DomNode>(
        &self,
        plan: ActionPlan<N>,
    ) -> impl Future<Output = RunReport> + Send + use<N> {
        let guard = GateGuard::disable(self.gate.clone());
        let runner = self.clone();
        async move {
            let report = runner.execute(plan).await;
            drop(guard);
            report
        }
    }

    async fn execute<N: DomNode>(&self, plan: ActionPlan<N>) -> RunReport {
        let total = plan.targets.len();
        info!(action = ?plan.action, targets = total, "Running batch action");

        let mut tasks = JoinSet::new();
        for (index, node) in plan.targets.into_iter().enumerate() {
            let delay = self.delay;
            let action = plan.action;
            let value = plan.value.clone();
            tasks.spawn(async move {
                tokio::time::sleep(delay).await;
                (index, dispatch(&node, action, &value))
            });
        }

        let mut report = RunReport {
            total,
            ..Default::default()
        };
        let mut pending: BTreeSet<usize> = (0..total).collect();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(()))) => {
                    pending.remove(&index);
                    report.dispatched += 1;
                }
                Ok((index, Err(error))) => {
                    pending.remove(&index);
                    warn!(index, error = %error, "Dispatch failed");
                    report.failures.push(DispatchFailure { index, error });
                }
                Err(e) => {
                    warn!(error = %e, "Dispatch task did not complete");
                }
            }
        }

        // Whatever is still pending belongs to a task that panicked
        for index in pending {
            report.failures.push(DispatchFailure {
                index,
                error: DispatchError::Failed("dispatch task aborted".to_string()),
            });
        }
        report.failures.sort_by_key(|f| f.index);

        info!(
            dispatched = report.dispatched,
            failed = report.failures.len(),
            "Batch action finished"
        );
        report
    }
}

fn dispatch<N: DomNode>(
    node: &N,
    action: Option<SubAction>,
    value: &str,
) -> Result<(), DispatchError> {
    match action {
        Some(SubAction::Click) => node.click()?,
        Some(SubAction::Input) => node.set_value(value)?,
        None => {}
    }
    debug!(tag = %node.tag_name(), action = ?action, "Dispatched");
    Ok(())
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
