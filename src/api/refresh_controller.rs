use chrono::TimeDelta;
use tracing::{debug, trace, warn};

use crate::core::primitives::truncate_datetime;
use crate::core::{Clock, RangeChangeCause, RangeEvent};
use crate::error::SliderResult;

use super::TimeSlider;

impl<C: Clock> TimeSlider<C> {
    /// Polls the auto-refresh ticker against the clock.
    ///
    /// When the ticker fires, the selection is untouched and the minute has
    /// advanced past `initial_max`, bounds are re-anchored to now and the new
    /// range is returned. A manually adjusted selection is never overwritten.
    pub fn tick(&mut self) -> SliderResult<Option<RangeEvent>> {
        let now = self.clock.now();
        if !self.ticker.poll(now.timestamp_millis()) {
            return Ok(None);
        }

        if self.range.user_adjusted {
            debug!("auto-refresh skipped: selection adjusted by user");
            return Ok(None);
        }

        let current_minute = truncate_datetime(now, TimeDelta::minutes(1))?.timestamp_millis();
        if current_minute == self.bounds.initial_max() {
            trace!(current_minute, "auto-refresh skipped: bounds already current");
            return Ok(None);
        }
        if current_minute < self.bounds.initial_max() {
            warn!(
                current_minute,
                initial_max = self.bounds.initial_max(),
                "clock moved backwards; re-anchoring bounds"
            );
        }

        self.recompute_epoch(now, RangeChangeCause::AutoRefreshed)
            .map(Some)
    }
}
