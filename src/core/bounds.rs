use serde::{Deserialize, Serialize};

use crate::core::primitives::round_to_hundredths;
use crate::error::{SliderError, SliderResult};

/// Full-width time interval currently represented by the track.
///
/// A constructed value always satisfies `initial_min < initial_max`, so the
/// percentage mapping never divides by zero. Bounds are replaced wholesale on
/// every mode change or refresh and never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeBounds", into = "RawTimeBounds")]
pub struct TimeBounds {
    initial_min: i64,
    initial_max: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawTimeBounds {
    initial_min: i64,
    initial_max: i64,
}

impl TryFrom<RawTimeBounds> for TimeBounds {
    type Error = SliderError;

    fn try_from(raw: RawTimeBounds) -> Result<Self, Self::Error> {
        Self::new(raw.initial_min, raw.initial_max)
    }
}

impl From<TimeBounds> for RawTimeBounds {
    fn from(bounds: TimeBounds) -> Self {
        Self {
            initial_min: bounds.initial_min,
            initial_max: bounds.initial_max,
        }
    }
}

impl TimeBounds {
    pub fn new(initial_min: i64, initial_max: i64) -> SliderResult<Self> {
        if initial_max <= initial_min {
            return Err(SliderError::InvalidBounds {
                initial_min,
                initial_max,
            });
        }
        Ok(Self {
            initial_min,
            initial_max,
        })
    }

    #[must_use]
    pub fn initial_min(self) -> i64 {
        self.initial_min
    }

    #[must_use]
    pub fn initial_max(self) -> i64 {
        self.initial_max
    }

    #[must_use]
    pub fn span_ms(self) -> i64 {
        self.initial_max - self.initial_min
    }

    #[must_use]
    pub fn contains(self, time: i64) -> bool {
        (self.initial_min..=self.initial_max).contains(&time)
    }

    /// Maps a timestamp to its track position, rounded to hundredths.
    ///
    /// Times outside the bounds map outside `[0, 100]`.
    #[must_use]
    pub fn time_to_percentage(self, time: i64) -> f64 {
        let offset = (time - self.initial_min) as f64;
        round_to_hundredths(offset * 100.0 / self.span_ms() as f64)
    }

    /// Maps a track position back to a timestamp (nearest millisecond).
    pub fn percentage_to_time(self, percentage: f64) -> SliderResult<i64> {
        if !percentage.is_finite() {
            return Err(SliderError::InvalidData(
                "percentage must be finite".to_owned(),
            ));
        }
        let offset = percentage * self.span_ms() as f64 / 100.0;
        Ok((offset + self.initial_min as f64).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::TimeBounds;
    use crate::error::SliderError;

    #[test]
    fn degenerate_bounds_are_rejected() {
        let err = TimeBounds::new(10, 10).expect_err("zero span must fail");
        assert!(matches!(
            err,
            SliderError::InvalidBounds {
                initial_min: 10,
                initial_max: 10
            }
        ));
        assert!(TimeBounds::new(11, 10).is_err());
    }

    #[test]
    fn endpoints_map_to_track_edges() {
        let bounds = TimeBounds::new(1_000, 201_000).expect("bounds");
        assert_eq!(bounds.time_to_percentage(1_000), 0.0);
        assert_eq!(bounds.time_to_percentage(201_000), 100.0);
        assert_eq!(bounds.time_to_percentage(101_000), 50.0);
        assert_eq!(bounds.percentage_to_time(25.0).expect("time"), 51_000);
    }

    #[test]
    fn out_of_range_times_map_outside_track() {
        let bounds = TimeBounds::new(0, 1_000).expect("bounds");
        assert_eq!(bounds.time_to_percentage(-500), -50.0);
        assert_eq!(bounds.time_to_percentage(1_500), 150.0);
    }

    #[test]
    fn non_finite_percentage_is_invalid_data() {
        let bounds = TimeBounds::new(0, 1_000).expect("bounds");
        let err = bounds
            .percentage_to_time(f64::NAN)
            .expect_err("nan must fail");
        assert!(format!("{err}").contains("percentage"));
    }

    #[test]
    fn deserialization_enforces_ordering() {
        let err = serde_json::from_str::<TimeBounds>(r#"{"initial_min":5,"initial_max":1}"#);
        assert!(err.is_err());
        let ok: TimeBounds =
            serde_json::from_str(r#"{"initial_min":1,"initial_max":5}"#).expect("valid bounds");
        assert_eq!(ok.span_ms(), 4);
    }
}
