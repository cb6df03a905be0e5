use approx::assert_abs_diff_eq;
use chrono::{DateTime, TimeZone, Utc};
use time_range_slider::SliderError;
use time_range_slider::api::{TimeSlider, TimeSliderConfig};
use time_range_slider::core::{ManualClock, RangeChangeCause, TimeBounds, TimeView, compute_bounds};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn one_day_bounds_truncate_now_to_the_minute() {
    let now = utc(2024, 1, 10, 15, 32, 45) + chrono::TimeDelta::milliseconds(123);
    let bounds = compute_bounds(TimeView::OneDay, now).expect("bounds");

    assert_eq!(
        bounds.initial_max(),
        utc(2024, 1, 10, 15, 32, 0).timestamp_millis()
    );
    assert_eq!(
        bounds.initial_min(),
        utc(2024, 1, 9, 15, 32, 0).timestamp_millis()
    );
}

#[test]
fn initialized_handles_map_to_bounds_edges() {
    let clock = ManualClock::new(utc(2024, 1, 10, 15, 32, 0));
    let mut slider = TimeSlider::new(clock, TimeSliderConfig::new(TimeView::OneDay))
        .expect("slider init");

    let bounds = slider.bounds();
    assert_eq!(slider.min_handle().percentage, 0.0);
    assert_eq!(slider.max_handle().percentage, 100.0);
    assert_eq!(slider.min_handle().time, bounds.initial_min());
    assert_eq!(slider.max_handle().time, bounds.initial_max());
    assert_eq!(
        bounds.percentage_to_time(0.0).expect("min"),
        bounds.initial_min()
    );
    assert_eq!(
        bounds.percentage_to_time(100.0).expect("max"),
        bounds.initial_max()
    );

    let events = slider.drain_range_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].cause, RangeChangeCause::Initialized);
    assert_eq!(events[0].selection.min, bounds.initial_min());
    assert_eq!(events[0].selection.max, bounds.initial_max());
}

#[test]
fn percentages_round_to_hundredths() {
    let bounds = TimeBounds::new(0, 3_000).expect("bounds");
    assert_abs_diff_eq!(bounds.time_to_percentage(1_000), 33.33, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.time_to_percentage(2_000), 66.67, epsilon = 1e-12);
}

#[test]
fn round_trip_stays_within_rounding_error() {
    let now = utc(2024, 1, 10, 15, 32, 0);
    let bounds = compute_bounds(TimeView::SevenDay, now).expect("bounds");
    let tolerance = bounds.span_ms() as f64 * 0.005 / 100.0 + 1.0;

    for step in 0..=50 {
        let time = bounds.initial_min() + bounds.span_ms() * step / 50;
        let recovered = bounds
            .percentage_to_time(bounds.time_to_percentage(time))
            .expect("to time");
        assert!(((recovered - time) as f64).abs() <= tolerance);
    }
}

#[test]
fn degenerate_bounds_are_a_precondition_error() {
    let err = TimeBounds::new(5_000, 5_000).expect_err("zero span must fail");
    assert!(matches!(err, SliderError::InvalidBounds { .. }));
}
