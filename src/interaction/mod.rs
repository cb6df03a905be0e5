use serde::{Deserialize, Serialize};

use crate::core::primitives::{GRID_STEP_MS, MIN_WINDOW_MS, round_to_hundredths};
use crate::core::{
    HandleKind, HandlerState, RangeSelection, RangeState, TimeBounds, closest_grid_time,
};
use crate::error::{SliderError, SliderResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragState {
    Idle,
    /// Gesture in progress. The track width is sampled once at pointer-down.
    Dragging { last_x: f64, track_width_px: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragStart {
    Started,
    /// Layout has no positive track width yet; no gesture was started.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragMoveOutcome {
    Accepted { percentage: f64, time: i64 },
    /// The window would drop below one hour.
    RejectedWindow,
    /// The candidate position is off the track.
    RejectedTrack,
    /// The handle is not being dragged.
    Ignored,
}

impl DragMoveOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Idle/Dragging state machine for a single handle.
///
/// Controllers only share the [`RangeState`] and [`TimeBounds`] they are
/// handed per call, so two of them can be driven concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragController {
    handle: HandleKind,
    state: DragState,
}

impl DragController {
    #[must_use]
    pub fn new(handle: HandleKind) -> Self {
        Self {
            handle,
            state: DragState::Idle,
        }
    }

    #[must_use]
    pub fn handle(self) -> HandleKind {
        self.handle
    }

    #[must_use]
    pub fn state(self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Starts a gesture at `client_x`. A pointer-down while already dragging
    /// restarts the gesture from the new coordinate.
    pub fn begin(&mut self, client_x: f64, track_width_px: f64) -> SliderResult<DragStart> {
        validate_client_x(client_x)?;
        if !track_width_px.is_finite() || track_width_px <= 0.0 {
            return Ok(DragStart::Ignored);
        }
        self.state = DragState::Dragging {
            last_x: client_x,
            track_width_px,
        };
        Ok(DragStart::Started)
    }

    /// Applies one pointer-move to `range`.
    pub fn step(
        &mut self,
        client_x: f64,
        range: &mut RangeState,
        bounds: TimeBounds,
    ) -> SliderResult<DragMoveOutcome> {
        let DragState::Dragging {
            last_x,
            track_width_px,
        } = self.state
        else {
            return Ok(DragMoveOutcome::Ignored);
        };
        validate_client_x(client_x)?;

        let current_px = range.handle(self.handle).percentage * track_width_px / 100.0;
        let candidate_px = current_px - (last_x - client_x);
        let percentage = round_to_hundredths(candidate_px * 100.0 / track_width_px);
        let time = bounds.percentage_to_time(percentage)?;

        let outcome = if self.window_with(range, time) < MIN_WINDOW_MS {
            DragMoveOutcome::RejectedWindow
        } else if !(0.0..=track_width_px).contains(&candidate_px) {
            DragMoveOutcome::RejectedTrack
        } else {
            DragMoveOutcome::Accepted { percentage, time }
        };

        match outcome {
            DragMoveOutcome::Accepted { percentage, time } => {
                *range.handle_mut(self.handle) = HandlerState::new(percentage, time);
                range.user_adjusted = true;
                self.state = DragState::Dragging {
                    last_x: client_x,
                    track_width_px,
                };
            }
            _ if self.handle == HandleKind::Max => {
                // TODO: confirm with product whether the min handle should
                // re-snap on rejection too; only max does today.
                range.max.time = self.snap_within_window(range, bounds, range.max.time)?;
            }
            _ => {}
        }
        Ok(outcome)
    }

    /// Ends the gesture and commits the handle: minimum window, grid snap,
    /// percentage recomputed from the snapped time.
    ///
    /// Returns `None` when no gesture was active.
    pub fn release(
        &mut self,
        range: &mut RangeState,
        bounds: TimeBounds,
    ) -> SliderResult<Option<RangeSelection>> {
        if !self.cancel() {
            return Ok(None);
        }

        let other = range.handle(self.handle.other()).time;
        let mut time = range.handle(self.handle).time;
        if range.window_ms() < MIN_WINDOW_MS {
            time = match self.handle {
                HandleKind::Min => other - MIN_WINDOW_MS,
                HandleKind::Max => other + MIN_WINDOW_MS,
            };
        }

        let snapped = self.snap_within_window(range, bounds, time)?;

        let handler = range.handle_mut(self.handle);
        handler.time = snapped;
        handler.percentage = bounds.time_to_percentage(snapped);
        Ok(Some(range.selection()))
    }

    /// Drops any active gesture without committing. Returns `true` when a
    /// gesture was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    /// Snaps `time` for this handle to the grid without letting the window
    /// drop below the minimum: a snap that lands inside the hour steps one
    /// grid mark outward. The result stays within `bounds`.
    fn snap_within_window(
        self,
        range: &RangeState,
        bounds: TimeBounds,
        time: i64,
    ) -> SliderResult<i64> {
        let mut snapped = closest_grid_time(bounds, time)?;
        if self.window_with(range, snapped) < MIN_WINDOW_MS {
            let outward = match self.handle {
                HandleKind::Min => snapped - GRID_STEP_MS,
                HandleKind::Max => snapped + GRID_STEP_MS,
            };
            // Re-snap so a step into a bound's edge zone lands on the bound.
            snapped = closest_grid_time(bounds, outward)?;
        }
        Ok(snapped.clamp(bounds.initial_min(), bounds.initial_max()))
    }

    fn window_with(self, range: &RangeState, time: i64) -> i64 {
        match self.handle {
            HandleKind::Min => range.max.time - time,
            HandleKind::Max => time - range.min.time,
        }
    }
}

fn validate_client_x(client_x: f64) -> SliderResult<()> {
    if !client_x.is_finite() {
        return Err(SliderError::InvalidData(
            "pointer coordinate must be finite".to_owned(),
        ));
    }
    Ok(())
}
