use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::core::TimeBounds;
use crate::core::primitives::truncate_datetime;
use crate::error::{SliderError, SliderResult};

/// Coarse window selector driving bounds width and label cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeView {
    #[serde(rename = "Last 1 Day", alias = "1d")]
    OneDay,
    #[serde(rename = "Last 7 Days", alias = "7d")]
    SevenDay,
}

impl TimeView {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "Last 1 Day",
            Self::SevenDay => "Last 7 Days",
        }
    }

    /// Width of the full track.
    #[must_use]
    pub fn span(self) -> TimeDelta {
        match self {
            Self::OneDay => TimeDelta::days(1),
            Self::SevenDay => TimeDelta::days(7),
        }
    }

    /// Distance between consecutive axis labels; also the anchor alignment.
    #[must_use]
    pub fn label_step(self) -> TimeDelta {
        match self {
            Self::OneDay => TimeDelta::hours(1),
            Self::SevenDay => TimeDelta::hours(12),
        }
    }

    #[must_use]
    pub fn label_count(self) -> usize {
        match self {
            Self::OneDay => 24,
            Self::SevenDay => 14,
        }
    }
}

impl fmt::Display for TimeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeView {
    type Err = SliderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Last 1 Day" | "1d" => Ok(Self::OneDay),
            "Last 7 Days" | "7d" => Ok(Self::SevenDay),
            other => Err(SliderError::UnknownMode(other.to_owned())),
        }
    }
}

/// Computes the track bounds for `mode` ending at `now` truncated to the minute.
pub fn compute_bounds(mode: TimeView, now: DateTime<Utc>) -> SliderResult<TimeBounds> {
    let initial_max = truncate_datetime(now, TimeDelta::minutes(1))?;
    let initial_min = initial_max
        .checked_sub_signed(mode.span())
        .ok_or_else(|| SliderError::InvalidData(format!("cannot subtract {mode} from {now}")))?;
    TimeBounds::new(
        initial_min.timestamp_millis(),
        initial_max.timestamp_millis(),
    )
}
