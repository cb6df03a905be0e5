use crate::core::{Clock, RangeChangeCause, RangeEvent};
use crate::extensions::{SliderContext, SliderEvent};

use super::TimeSlider;

impl<C: Clock> TimeSlider<C> {
    pub(super) fn plugin_context(&self) -> SliderContext {
        SliderContext {
            mode: self.mode,
            bounds: self.bounds,
            selection: self.range.selection(),
            user_adjusted: self.range.user_adjusted,
            track_width_px: self.track_width_px,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: SliderEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in self.plugins.values_mut() {
            plugin.on_event(event, context);
        }
    }

    /// Queues the current selection for the host and notifies plugins.
    pub(super) fn emit_range_changed(&mut self, cause: RangeChangeCause) -> RangeEvent {
        let event = RangeEvent {
            selection: self.range.selection(),
            cause,
        };
        self.range_events.push_back(event);
        self.emit_plugin_event(SliderEvent::RangeChanged(event));
        event
    }
}
