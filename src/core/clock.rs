use chrono::{DateTime, TimeDelta, Utc};

use crate::core::primitives::millis_to_datetime;
use crate::error::{SliderError, SliderResult};

/// Source of "now" for bounds computation and the refresh schedule.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Host-driven clock for tests, replays and deterministic embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualClock {
    now: DateTime<Utc>,
}

impl ManualClock {
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn from_millis(millis: i64) -> SliderResult<Self> {
        Ok(Self::new(millis_to_datetime(millis)?))
    }

    pub fn set(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    pub fn advance(&mut self, delta: TimeDelta) -> SliderResult<()> {
        self.now = self
            .now
            .checked_add_signed(delta)
            .ok_or_else(|| SliderError::InvalidData("clock advance overflowed".to_owned()))?;
        Ok(())
    }

    pub fn advance_millis(&mut self, millis: i64) -> SliderResult<()> {
        self.advance(TimeDelta::milliseconds(millis))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
