use chrono::{DateTime, DurationRound, TimeDelta, Utc};

use crate::error::{SliderError, SliderResult};

pub const MINUTE_MS: i64 = 60_000;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Smallest committed distance between the two handles.
pub const MIN_WINDOW_MS: i64 = HOUR_MS;
/// Released handles snap to multiples of this step.
pub const GRID_STEP_MS: i64 = 5 * MINUTE_MS;
/// Released handles closer than this to a bound snap onto the bound.
pub const EDGE_SNAP_MS: i64 = 5 * MINUTE_MS;

pub fn millis_to_datetime(millis: i64) -> SliderResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        SliderError::InvalidData(format!("timestamp {millis} ms is out of range"))
    })
}

/// Truncates a millisecond timestamp down to a multiple of `step` (UTC).
pub fn truncate_millis(millis: i64, step: TimeDelta) -> SliderResult<i64> {
    let truncated = truncate_datetime(millis_to_datetime(millis)?, step)?;
    Ok(truncated.timestamp_millis())
}

pub fn truncate_datetime(time: DateTime<Utc>, step: TimeDelta) -> SliderResult<DateTime<Utc>> {
    time.duration_trunc(step)
        .map_err(|e| SliderError::InvalidData(format!("failed to truncate {time}: {e}")))
}

/// Rounds to two decimal places, the precision used for track percentages.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
