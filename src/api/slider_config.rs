use serde::{Deserialize, Serialize};

use crate::core::TimeView;
use crate::error::{SliderError, SliderResult};

/// Auto-refresh schedule tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoRefreshBehavior {
    pub enabled: bool,
    /// Delay before the first firing, measured from construction.
    pub initial_delay_ms: u64,
    pub period_ms: u64,
}

impl Default for AutoRefreshBehavior {
    fn default() -> Self {
        Self {
            enabled: true,
            initial_delay_ms: 1_000,
            period_ms: 60_000,
        }
    }
}

/// Public slider bootstrap configuration.
///
/// Serializable so hosts can keep slider setup next to their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSliderConfig {
    pub mode: TimeView,
    /// Track width known at initial layout; `0.0` until laid out.
    #[serde(default)]
    pub track_width_px: f64,
    #[serde(default)]
    pub auto_refresh: AutoRefreshBehavior,
}

impl TimeSliderConfig {
    #[must_use]
    pub fn new(mode: TimeView) -> Self {
        Self {
            mode,
            track_width_px: 0.0,
            auto_refresh: AutoRefreshBehavior::default(),
        }
    }

    #[must_use]
    pub fn with_track_width_px(mut self, track_width_px: f64) -> Self {
        self.track_width_px = track_width_px;
        self
    }

    #[must_use]
    pub fn with_auto_refresh(mut self, behavior: AutoRefreshBehavior) -> Self {
        self.auto_refresh = behavior;
        self
    }

    /// Turns the refresh ticker off entirely.
    #[must_use]
    pub fn without_auto_refresh(mut self) -> Self {
        self.auto_refresh.enabled = false;
        self
    }

    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidData(format!("failed to parse slider config: {e}")))
    }

    pub fn to_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SliderError::InvalidData(format!("failed to serialize slider config: {e}"))
        })
    }
}
