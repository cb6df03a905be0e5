use chrono::{TimeDelta, Timelike};

use crate::core::TimeBounds;
use crate::core::primitives::{
    EDGE_SNAP_MS, GRID_STEP_MS, MINUTE_MS, millis_to_datetime, truncate_millis,
};
use crate::error::SliderResult;

const GRID_STEP_MINUTES: i64 = GRID_STEP_MS / MINUTE_MS;
/// Minute remainders above this round up to the next grid mark.
const ROUND_UP_REMAINDER: i64 = 2;

/// Snaps a released handle time to the five-minute grid.
///
/// Times within five minutes of a bound land exactly on that bound. Other
/// times are truncated to the minute and rounded to a multiple of five, with
/// remainders 3 and 4 going up and 0..=2 going down. A grid mark that lands
/// inside a bound's snap zone is pulled onto the bound so the result is a
/// fixed point.
pub fn closest_grid_time(bounds: TimeBounds, time: i64) -> SliderResult<i64> {
    if let Some(edge) = edge_snap(bounds, time) {
        return Ok(edge);
    }

    let minute_start = truncate_millis(time, TimeDelta::minutes(1))?;
    let minute = i64::from(millis_to_datetime(minute_start)?.minute());
    let remainder = minute % GRID_STEP_MINUTES;
    let shift_minutes = if remainder > ROUND_UP_REMAINDER {
        GRID_STEP_MINUTES - remainder
    } else {
        -remainder
    };
    let grid = minute_start + shift_minutes * MINUTE_MS;

    Ok(edge_snap(bounds, grid).unwrap_or(grid))
}

fn edge_snap(bounds: TimeBounds, time: i64) -> Option<i64> {
    if (bounds.initial_max() - time).abs() < EDGE_SNAP_MS {
        return Some(bounds.initial_max());
    }
    if (bounds.initial_min() - time).abs() < EDGE_SNAP_MS {
        return Some(bounds.initial_min());
    }
    None
}
