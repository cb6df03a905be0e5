use serde::{Deserialize, Serialize};

use crate::core::{HandleKind, RangeEvent, RangeSelection, TimeBounds, TimeView};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderContext {
    pub mode: TimeView,
    pub bounds: TimeBounds,
    pub selection: RangeSelection,
    pub user_adjusted: bool,
    pub track_width_px: f64,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    RangeChanged(RangeEvent),
    DragStarted { handle: HandleKind },
    DragEnded { handle: HandleKind },
    LabelsRegenerated { count: usize },
    TornDown,
}

/// Observer hook for hosts and tooling.
///
/// Plugins see every event and a context snapshot but cannot mutate the
/// slider.
pub trait SliderPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: SliderEvent, context: SliderContext);
}
