use tracing::{debug, trace};

use crate::core::{Clock, HandleKind, RangeChangeCause, RangeEvent};
use crate::error::SliderResult;
use crate::extensions::SliderEvent;
use crate::interaction::{DragMoveOutcome, DragStart};

use super::TimeSlider;

impl<C: Clock> TimeSlider<C> {
    /// Starts dragging `handle` from pointer coordinate `client_x`.
    ///
    /// The current track width is sampled here and used for the whole
    /// gesture. Without a positive width the gesture is ignored.
    pub fn pointer_down(&mut self, handle: HandleKind, client_x: f64) -> SliderResult<DragStart> {
        self.ensure_live()?;
        let start = self.drags[handle.index()].begin(client_x, self.track_width_px)?;
        match start {
            DragStart::Started => {
                trace!(?handle, client_x, "drag started");
                self.emit_plugin_event(SliderEvent::DragStarted { handle });
            }
            DragStart::Ignored => {
                debug!(
                    ?handle,
                    track_width_px = self.track_width_px,
                    "ignoring drag before track layout"
                );
            }
        }
        Ok(start)
    }

    /// Feeds one pointer-move to the drag of `handle`.
    ///
    /// Moves for a handle that is not being dragged are ignored.
    pub fn pointer_move(
        &mut self,
        handle: HandleKind,
        client_x: f64,
    ) -> SliderResult<DragMoveOutcome> {
        let bounds = self.bounds;
        let outcome = self.drags[handle.index()].step(client_x, &mut self.range, bounds)?;
        match outcome {
            DragMoveOutcome::Accepted { percentage, time } => {
                trace!(?handle, percentage, time, "drag move accepted");
            }
            DragMoveOutcome::RejectedWindow | DragMoveOutcome::RejectedTrack => {
                trace!(?handle, client_x, ?outcome, "drag move rejected");
            }
            DragMoveOutcome::Ignored => {}
        }
        Ok(outcome)
    }

    /// Releases the drag of `handle`, committing and emitting the range.
    ///
    /// Safe to call when no drag is active; returns `None` then.
    pub fn pointer_up(&mut self, handle: HandleKind) -> SliderResult<Option<RangeEvent>> {
        let bounds = self.bounds;
        let Some(selection) = self.drags[handle.index()].release(&mut self.range, bounds)? else {
            return Ok(None);
        };
        debug!(
            ?handle,
            min = selection.min,
            max = selection.max,
            "drag released"
        );
        self.emit_plugin_event(SliderEvent::DragEnded { handle });
        Ok(Some(
            self.emit_range_changed(RangeChangeCause::DragReleased(handle)),
        ))
    }

    /// Drops every active gesture without committing. Returns how many
    /// gestures were active.
    pub fn cancel_drags(&mut self) -> usize {
        self.drags
            .iter_mut()
            .map(|drag| drag.cancel())
            .filter(|cancelled| *cancelled)
            .count()
    }
}
