use crate::error::{SliderError, SliderResult};

use super::{AutoRefreshBehavior, TimeSliderConfig};

pub(super) fn validate_track_width(track_width_px: f64) -> SliderResult<f64> {
    if !track_width_px.is_finite() || track_width_px < 0.0 {
        return Err(SliderError::InvalidTrackWidth(track_width_px));
    }
    Ok(track_width_px)
}

pub(super) fn validate_auto_refresh_behavior(
    behavior: AutoRefreshBehavior,
) -> SliderResult<AutoRefreshBehavior> {
    if behavior.enabled && behavior.period_ms == 0 {
        return Err(SliderError::InvalidData(
            "auto-refresh period must be > 0".to_owned(),
        ));
    }
    Ok(behavior)
}

pub(super) fn validate_slider_config(config: TimeSliderConfig) -> SliderResult<TimeSliderConfig> {
    validate_track_width(config.track_width_px)?;
    validate_auto_refresh_behavior(config.auto_refresh)?;
    Ok(config)
}
