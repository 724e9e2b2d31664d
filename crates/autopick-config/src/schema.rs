//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub markers: MarkersConfig,

    #[serde(default)]
    pub inspector: InspectorConfig,

    #[serde(default)]
    pub generalization: GeneralizationConfig,

    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Marker vocabulary applied to selected nodes.
///
/// Markers are class-name-like tokens that only encode selection state, so
/// generalization never treats them as shared styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkersConfig {
    /// Origin marker for nodes the user pointed at.
    #[serde(default = "default_user_selected")]
    pub user_selected: String,

    /// Origin marker for nodes added by generalization.
    #[serde(default = "default_algo_selected")]
    pub algo_selected: String,

    /// Applied to primary anchors once a sub-action is chosen.
    #[serde(default = "default_locked")]
    pub locked: String,

    /// Applied to sub-selection members.
    #[serde(default = "default_dimmed")]
    pub dimmed: String,
}

impl MarkersConfig {
    /// Every reserved marker, in a stable order.
    pub fn reserved(&self) -> Vec<String> {
        vec![
            self.user_selected.clone(),
            self.algo_selected.clone(),
            self.locked.clone(),
            self.dimmed.clone(),
        ]
    }
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            user_selected: default_user_selected(),
            algo_selected: default_algo_selected(),
            locked: default_locked(),
            dimmed: default_dimmed(),
        }
    }
}

fn default_user_selected() -> String {
    "--user-selected".to_string()
}

fn default_algo_selected() -> String {
    "--algo-selected".to_string()
}

fn default_locked() -> String {
    "--dashed".to_string()
}

fn default_dimmed() -> String {
    "--dark".to_string()
}

/// Pointer inspector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectorConfig {
    /// Attribute marking the automation panel; pointer events whose path
    /// crosses a node carrying it never select anything.
    #[serde(default = "default_ignore_attribute")]
    pub ignore_attribute: String,

    /// Whether pointer-driven selection starts enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            ignore_attribute: default_ignore_attribute(),
            enabled: true,
        }
    }
}

fn default_ignore_attribute() -> String {
    "inspector-ignore".to_string()
}

fn default_true() -> bool {
    true
}

/// Generalization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralizationConfig {
    /// Primary picks required before prediction fires. Under a sub-action a
    /// single pick is always enough.
    #[serde(default = "default_min_primary_picks")]
    pub min_primary_picks: usize,
}

impl Default for GeneralizationConfig {
    fn default() -> Self {
        Self {
            min_primary_picks: default_min_primary_picks(),
        }
    }
}

fn default_min_primary_picks() -> usize {
    2
}

/// Action runner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Delay before each node's action fires, in milliseconds.
    #[serde(default = "default_dispatch_delay_ms")]
    pub dispatch_delay_ms: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            dispatch_delay_ms: default_dispatch_delay_ms(),
        }
    }
}

fn default_dispatch_delay_ms() -> u64 {
    100
}
