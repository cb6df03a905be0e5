use std::collections::VecDeque;

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{
    Clock, HandleKind, HandlerState, Label, LabelSequence, RangeChangeCause, RangeEvent,
    RangeSelection, RangeState, RefreshTicker, TickerState, TimeBounds, TimeView,
    compute_bounds, generate_labels,
};
use crate::error::{SliderError, SliderResult};
use crate::extensions::{SliderEvent, SliderPlugin};
use crate::interaction::{DragController, DragState};

use super::validation::{validate_slider_config, validate_track_width};
use super::{AutoRefreshBehavior, TimeSliderConfig};

/// Label storage sized for the densest view (24 hourly ticks).
pub(super) type LabelBuffer = SmallVec<[Label; 24]>;

/// Main facade consumed by host applications.
///
/// `TimeSlider` owns the bounds epoch, both handles, their drag controllers,
/// the axis labels and the auto-refresh ticker. All mutation goes through
/// `&mut self`, which serializes pointer, tick and mode inputs.
pub struct TimeSlider<C: Clock> {
    pub(super) clock: C,
    pub(super) auto_refresh: AutoRefreshBehavior,
    pub(super) mode: TimeView,
    pub(super) bounds: TimeBounds,
    pub(super) range: RangeState,
    pub(super) labels: LabelBuffer,
    pub(super) drags: [DragController; 2],
    pub(super) ticker: RefreshTicker,
    pub(super) track_width_px: f64,
    pub(super) range_events: VecDeque<RangeEvent>,
    pub(super) plugins: IndexMap<String, Box<dyn SliderPlugin>>,
    pub(super) torn_down: bool,
}

impl<C: Clock + std::fmt::Debug> std::fmt::Debug for TimeSlider<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeSlider")
            .field("clock", &self.clock)
            .field("auto_refresh", &self.auto_refresh)
            .field("mode", &self.mode)
            .field("bounds", &self.bounds)
            .field("range", &self.range)
            .field("labels", &self.labels)
            .field("drags", &self.drags)
            .field("ticker", &self.ticker)
            .field("track_width_px", &self.track_width_px)
            .field("range_events", &self.range_events)
            .field("plugins", &self.plugins.keys().collect::<Vec<_>>())
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

impl<C: Clock> TimeSlider<C> {
    /// Computes the first bounds epoch, arms the refresh ticker and queues the
    /// initial range event.
    pub fn new(clock: C, config: TimeSliderConfig) -> SliderResult<Self> {
        let config = validate_slider_config(config)?;
        let now = clock.now();
        let bounds = compute_bounds(config.mode, now)?;
        let ticker = if config.auto_refresh.enabled {
            RefreshTicker::arm(
                now.timestamp_millis(),
                config.auto_refresh.initial_delay_ms,
                config.auto_refresh.period_ms,
            )?
        } else {
            RefreshTicker::disabled()
        };

        let mut slider = Self {
            clock,
            auto_refresh: config.auto_refresh,
            mode: config.mode,
            bounds,
            range: RangeState::full(bounds),
            labels: LabelBuffer::new(),
            drags: HandleKind::ALL.map(DragController::new),
            ticker,
            track_width_px: config.track_width_px,
            range_events: VecDeque::new(),
            plugins: IndexMap::new(),
            torn_down: false,
        };
        slider.regenerate_labels()?;
        slider.emit_range_changed(RangeChangeCause::Initialized);
        debug!(
            mode = %slider.mode,
            initial_min = bounds.initial_min(),
            initial_max = bounds.initial_max(),
            "time slider initialized"
        );
        Ok(slider)
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable clock access, used by hosts driving a manual clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    #[must_use]
    pub fn mode(&self) -> TimeView {
        self.mode
    }

    #[must_use]
    pub fn bounds(&self) -> TimeBounds {
        self.bounds
    }

    #[must_use]
    pub fn auto_refresh_behavior(&self) -> AutoRefreshBehavior {
        self.auto_refresh
    }

    #[must_use]
    pub fn range_state(&self) -> RangeState {
        self.range
    }

    #[must_use]
    pub fn min_handle(&self) -> HandlerState {
        self.range.min
    }

    #[must_use]
    pub fn max_handle(&self) -> HandlerState {
        self.range.max
    }

    #[must_use]
    pub fn handle(&self, kind: HandleKind) -> HandlerState {
        self.range.handle(kind)
    }

    #[must_use]
    pub fn selection(&self) -> RangeSelection {
        self.range.selection()
    }

    /// Whether either handle moved since the bounds were last computed.
    #[must_use]
    pub fn user_adjusted(&self) -> bool {
        self.range.user_adjusted
    }

    /// Axis labels for the current epoch, oldest first.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Fresh lazy label sequence for the current epoch.
    pub fn label_sequence(&self) -> SliderResult<LabelSequence> {
        generate_labels(self.bounds, self.mode)
    }

    #[must_use]
    pub fn track_width_px(&self) -> f64 {
        self.track_width_px
    }

    /// Records the laid-out track width.
    ///
    /// Gestures already in progress keep the width sampled at their
    /// pointer-down; the new width applies to the next gesture.
    pub fn set_track_width_px(&mut self, track_width_px: f64) -> SliderResult<()> {
        self.track_width_px = validate_track_width(track_width_px)?;
        Ok(())
    }

    #[must_use]
    pub fn drag_state(&self, handle: HandleKind) -> DragState {
        self.drags[handle.index()].state()
    }

    #[must_use]
    pub fn is_dragging(&self, handle: HandleKind) -> bool {
        self.drags[handle.index()].is_dragging()
    }

    #[must_use]
    pub fn ticker_state(&self) -> TickerState {
        self.ticker.state()
    }

    #[must_use]
    pub fn refresh_ticker(&self) -> RefreshTicker {
        self.ticker
    }

    /// Removes and returns queued range events in emission order.
    pub fn drain_range_events(&mut self) -> Vec<RangeEvent> {
        self.range_events.drain(..).collect()
    }

    #[must_use]
    pub fn pending_range_events(&self) -> usize {
        self.range_events.len()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Cancels the refresh ticker and any active drags.
    ///
    /// Returns `false` when the slider was already torn down.
    pub fn teardown(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        let ticker_cancelled = self.ticker.cancel();
        let cancelled_drags = self.cancel_drags();
        self.torn_down = true;
        debug!(ticker_cancelled, cancelled_drags, "time slider torn down");
        self.emit_plugin_event(SliderEvent::TornDown);
        true
    }

    pub(super) fn ensure_live(&self) -> SliderResult<()> {
        if self.torn_down {
            return Err(SliderError::TornDown);
        }
        Ok(())
    }

    pub(super) fn regenerate_labels(&mut self) -> SliderResult<()> {
        self.labels = generate_labels(self.bounds, self.mode)?.collect();
        let count = self.labels.len();
        self.emit_plugin_event(SliderEvent::LabelsRegenerated { count });
        Ok(())
    }
}
