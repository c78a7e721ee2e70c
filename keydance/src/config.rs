//! Behavior configuration, built in code.

use embassy_time::Duration;

use crate::context::LayerGroups;
use crate::host_os::OsLayerMap;
use crate::indicator::IndicatorConfig;
pub use crate::tap_hold::TapHoldConfig;

/// Config for configurable keymap behavior
#[derive(Clone, Debug, Default)]
pub struct BehaviorConfig {
    pub tap_hold: TapHoldConfig,
    pub tap_dance: TapDanceConfig,
    /// OS layer groups, resolving the context of tap dances and gating caps word
    pub layer_groups: LayerGroups,
    pub indicator: IndicatorConfig,
    pub os_layers: OsLayerMap,
}

/// Config for tap dance behavior
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDanceConfig {
    /// How long a dance waits for another tap before it finishes
    pub settle_term: Duration,
}

impl Default for TapDanceConfig {
    fn default() -> Self {
        Self {
            settle_term: Duration::from_millis(200),
        }
    }
}
