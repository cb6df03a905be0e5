use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::{Clock, RangeChangeCause, RangeEvent, TimeView, compute_bounds};
use crate::error::SliderResult;

use super::TimeSlider;

impl<C: Clock> TimeSlider<C> {
    /// Switches the view, recomputing bounds and resetting both handles.
    ///
    /// Returns `None` when `mode` is already active.
    pub fn set_mode(&mut self, mode: TimeView) -> SliderResult<Option<RangeEvent>> {
        self.ensure_live()?;
        if mode == self.mode {
            return Ok(None);
        }
        debug!(from = %self.mode, to = %mode, "time view changed");
        self.mode = mode;
        let now = self.clock.now();
        self.recompute_epoch(now, RangeChangeCause::ModeChanged)
            .map(Some)
    }

    /// Parses a host selector string (`"Last 1 Day"`, `"Last 7 Days"`) and
    /// applies it. Unknown strings fail without touching state.
    pub fn set_mode_str(&mut self, mode: &str) -> SliderResult<Option<RangeEvent>> {
        let mode = mode.parse::<TimeView>()?;
        self.set_mode(mode)
    }

    pub(super) fn recompute_epoch(
        &mut self,
        now: DateTime<Utc>,
        cause: RangeChangeCause,
    ) -> SliderResult<RangeEvent> {
        self.bounds = compute_bounds(self.mode, now)?;
        self.range.reset_to(self.bounds);
        self.regenerate_labels()?;
        debug!(
            cause = ?cause,
            initial_min = self.bounds.initial_min(),
            initial_max = self.bounds.initial_max(),
            "bounds recomputed"
        );
        Ok(self.emit_range_changed(cause))
    }
}
