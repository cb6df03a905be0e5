use serde::{Deserialize, Serialize};

use crate::core::TimeBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    Min,
    Max,
}

impl HandleKind {
    pub const ALL: [Self; 2] = [Self::Min, Self::Max];

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Min => Self::Max,
            Self::Max => Self::Min,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Min => 0,
            Self::Max => 1,
        }
    }
}

/// Position of one handle, both as track percentage and as timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandlerState {
    pub percentage: f64,
    pub time: i64,
}

impl HandlerState {
    #[must_use]
    pub fn new(percentage: f64, time: i64) -> Self {
        Self { percentage, time }
    }

    /// CSS-style horizontal offset for positioning the handle visual.
    #[must_use]
    pub fn left_css(&self) -> String {
        format!("{}%", self.percentage)
    }
}

/// Selected window reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeSelection {
    pub min: i64,
    pub max: i64,
}

impl RangeSelection {
    #[must_use]
    pub fn window_ms(self) -> i64 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeChangeCause {
    Initialized,
    ModeChanged,
    DragReleased(HandleKind),
    AutoRefreshed,
}

/// Outbound range notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeEvent {
    pub selection: RangeSelection,
    pub cause: RangeChangeCause,
}

/// Both handles plus the explicit "touched since last reset" flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeState {
    pub min: HandlerState,
    pub max: HandlerState,
    pub user_adjusted: bool,
}

impl RangeState {
    /// Full-width selection over `bounds`.
    #[must_use]
    pub fn full(bounds: TimeBounds) -> Self {
        Self {
            min: HandlerState::new(0.0, bounds.initial_min()),
            max: HandlerState::new(100.0, bounds.initial_max()),
            user_adjusted: false,
        }
    }

    pub fn reset_to(&mut self, bounds: TimeBounds) {
        *self = Self::full(bounds);
    }

    #[must_use]
    pub fn handle(&self, kind: HandleKind) -> HandlerState {
        match kind {
            HandleKind::Min => self.min,
            HandleKind::Max => self.max,
        }
    }

    pub fn handle_mut(&mut self, kind: HandleKind) -> &mut HandlerState {
        match kind {
            HandleKind::Min => &mut self.min,
            HandleKind::Max => &mut self.max,
        }
    }

    #[must_use]
    pub fn selection(&self) -> RangeSelection {
        RangeSelection {
            min: self.min.time,
            max: self.max.time,
        }
    }

    #[must_use]
    pub fn window_ms(&self) -> i64 {
        self.max.time - self.min.time
    }
}
