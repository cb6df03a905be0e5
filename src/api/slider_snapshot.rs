use serde::{Deserialize, Serialize};

use crate::core::{Clock, HandleKind, HandlerState, Label, RefreshTicker, TimeBounds, TimeView};
use crate::interaction::DragState;

use super::TimeSlider;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub mode: TimeView,
    pub bounds: TimeBounds,
    pub min: HandlerState,
    pub max: HandlerState,
    pub user_adjusted: bool,
    pub labels: Vec<Label>,
    pub min_drag: DragState,
    pub max_drag: DragState,
    pub track_width_px: f64,
    pub ticker: RefreshTicker,
    pub torn_down: bool,
    #[serde(default)]
    pub plugin_ids: Vec<String>,
}

impl<C: Clock> TimeSlider<C> {
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            mode: self.mode,
            bounds: self.bounds,
            min: self.range.min,
            max: self.range.max,
            user_adjusted: self.range.user_adjusted,
            labels: self.labels.to_vec(),
            min_drag: self.drag_state(HandleKind::Min),
            max_drag: self.drag_state(HandleKind::Max),
            track_width_px: self.track_width_px,
            ticker: self.ticker,
            torn_down: self.torn_down,
            plugin_ids: self.plugins.keys().cloned().collect(),
        }
    }
}
