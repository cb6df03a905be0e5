use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::core::primitives::truncate_millis;
use crate::core::{TimeBounds, TimeView};
use crate::error::SliderResult;

/// Axis tick on the track.
///
/// `left` is the track percentage of `time` and may fall outside `[0, 100]`;
/// clipping is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub time: i64,
    pub left: f64,
}

impl Label {
    /// CSS-style horizontal offset, e.g. `"41.67%"`.
    #[must_use]
    pub fn left_css(&self) -> String {
        format!("{:.2}%", self.left)
    }
}

/// Lazy chronological label sequence for one bounds epoch.
///
/// The sequence is anchored on `initial_max` aligned down to the view's label
/// step and walks backwards `label_count - 1` steps; it yields oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSequence {
    bounds: TimeBounds,
    anchor: i64,
    step_ms: i64,
    count: usize,
    front: usize,
    back: usize,
}

impl LabelSequence {
    #[must_use]
    pub fn anchor(&self) -> i64 {
        self.anchor
    }

    #[must_use]
    pub fn step_ms(&self) -> i64 {
        self.step_ms
    }

    fn label_at(&self, index: usize) -> Label {
        let steps_back = (self.count - 1 - index) as i64;
        let time = self.anchor - steps_back * self.step_ms;
        Label {
            time,
            left: self.bounds.time_to_percentage(time),
        }
    }
}

impl Iterator for LabelSequence {
    type Item = Label;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let label = self.label_at(self.front);
        self.front += 1;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for LabelSequence {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.label_at(self.back))
    }
}

impl ExactSizeIterator for LabelSequence {}

impl FusedIterator for LabelSequence {}

/// Builds the axis labels for `bounds` at the cadence of `mode`.
pub fn generate_labels(bounds: TimeBounds, mode: TimeView) -> SliderResult<LabelSequence> {
    let step = mode.label_step();
    let anchor = truncate_millis(bounds.initial_max(), step)?;
    let count = mode.label_count();
    Ok(LabelSequence {
        bounds,
        anchor,
        step_ms: step.num_milliseconds(),
        count,
        front: 0,
        back: count,
    })
}
