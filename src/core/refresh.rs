use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickerState {
    /// Next firing is due at `next_due_ms` (epoch milliseconds).
    Armed { next_due_ms: i64 },
    /// Never armed (auto-refresh disabled by config).
    Disabled,
    Cancelled,
}

/// Host-polled periodic schedule: one firing after `initial_delay_ms`, then
/// one every `period_ms`.
///
/// Missed periods are coalesced into a single firing, and the next due time
/// stays on the phase set by the first firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTicker {
    period_ms: i64,
    state: TickerState,
    fired_count: u64,
}

impl RefreshTicker {
    pub fn arm(started_at_ms: i64, initial_delay_ms: u64, period_ms: u64) -> SliderResult<Self> {
        if period_ms == 0 {
            return Err(SliderError::InvalidData(
                "refresh period must be > 0".to_owned(),
            ));
        }
        let period_ms = i64::try_from(period_ms)
            .map_err(|_| SliderError::InvalidData("refresh period is too large".to_owned()))?;
        let next_due_ms = i64::try_from(initial_delay_ms)
            .ok()
            .and_then(|delay| started_at_ms.checked_add(delay))
            .ok_or_else(|| SliderError::InvalidData("refresh delay is too large".to_owned()))?;

        Ok(Self {
            period_ms,
            state: TickerState::Armed { next_due_ms },
            fired_count: 0,
        })
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            period_ms: 0,
            state: TickerState::Disabled,
            fired_count: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> TickerState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, TickerState::Armed { .. })
    }

    #[must_use]
    pub fn next_due_ms(&self) -> Option<i64> {
        match self.state {
            TickerState::Armed { next_due_ms } => Some(next_due_ms),
            TickerState::Disabled | TickerState::Cancelled => None,
        }
    }

    #[must_use]
    pub fn fired_count(&self) -> u64 {
        self.fired_count
    }

    /// Returns `true` when the schedule fires at `now_ms`.
    pub fn poll(&mut self, now_ms: i64) -> bool {
        let TickerState::Armed { next_due_ms } = self.state else {
            return false;
        };
        if now_ms < next_due_ms {
            return false;
        }

        let missed = (now_ms - next_due_ms) / self.period_ms;
        let next_due_ms = next_due_ms.saturating_add((missed + 1).saturating_mul(self.period_ms));
        self.state = TickerState::Armed { next_due_ms };
        self.fired_count += 1;
        true
    }

    /// Stops the schedule. Returns `false` when it was not running.
    pub fn cancel(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state = TickerState::Cancelled;
        true
    }
}
