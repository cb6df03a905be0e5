use chrono::{DateTime, TimeZone, Utc};
use time_range_slider::api::{TimeSlider, TimeSliderConfig};
use time_range_slider::core::{
    HandleKind, ManualClock, RangeChangeCause, TimeView, closest_grid_time, compute_bounds,
};

const MINUTE_MS: i64 = 60_000;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn ms(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

fn slider() -> TimeSlider<ManualClock> {
    let clock = ManualClock::new(utc(2024, 1, 10, 15, 32, 0));
    let config = TimeSliderConfig::new(TimeView::OneDay)
        .with_track_width_px(1_000.0)
        .without_auto_refresh();
    TimeSlider::new(clock, config).expect("slider init")
}

#[test]
fn released_min_handle_at_minute_47_rounds_down_to_45() {
    let mut slider = slider();
    slider.drain_range_events();

    slider.pointer_down(HandleKind::Min, 100.0).expect("down");
    // 10.5px is 1.05% of the day: 15m07.2s past 15:32, i.e. 15:47:07.2.
    let outcome = slider.pointer_move(HandleKind::Min, 110.5).expect("move");
    assert!(outcome.is_accepted());
    assert_eq!(
        slider.min_handle().time,
        ms(utc(2024, 1, 9, 15, 47, 7)) + 200
    );

    let event = slider
        .pointer_up(HandleKind::Min)
        .expect("up")
        .expect("range emitted");
    assert_eq!(event.cause, RangeChangeCause::DragReleased(HandleKind::Min));
    assert_eq!(event.selection.min, ms(utc(2024, 1, 9, 15, 45, 0)));
    assert_eq!(slider.min_handle().time, ms(utc(2024, 1, 9, 15, 45, 0)));
    assert_eq!(
        slider.min_handle().percentage,
        slider.bounds().time_to_percentage(event.selection.min)
    );
}

#[test]
fn minute_remainder_three_rounds_up_and_two_rounds_down() {
    let bounds = compute_bounds(TimeView::OneDay, utc(2024, 1, 10, 15, 32, 0)).expect("bounds");

    let up = closest_grid_time(bounds, ms(utc(2024, 1, 10, 3, 8, 41))).expect("snap");
    assert_eq!(up, ms(utc(2024, 1, 10, 3, 10, 0)));

    let down = closest_grid_time(bounds, ms(utc(2024, 1, 10, 3, 7, 59))).expect("snap");
    assert_eq!(down, ms(utc(2024, 1, 10, 3, 5, 0)));

    let four = closest_grid_time(bounds, ms(utc(2024, 1, 10, 3, 9, 0))).expect("snap");
    assert_eq!(four, ms(utc(2024, 1, 10, 3, 10, 0)));
}

#[test]
fn times_close_to_bounds_snap_exactly_onto_them() {
    let bounds = compute_bounds(TimeView::OneDay, utc(2024, 1, 10, 15, 32, 0)).expect("bounds");

    let near_max = bounds.initial_max() - 3 * MINUTE_MS - 10_000;
    assert_eq!(
        closest_grid_time(bounds, near_max).expect("snap"),
        bounds.initial_max()
    );

    let near_min = bounds.initial_min() + 4 * MINUTE_MS;
    assert_eq!(
        closest_grid_time(bounds, near_min).expect("snap"),
        bounds.initial_min()
    );
}

#[test]
fn snapping_is_idempotent_across_a_day() {
    let bounds = compute_bounds(TimeView::OneDay, utc(2024, 1, 10, 15, 32, 0)).expect("bounds");
    let mut time = bounds.initial_min();
    while time <= bounds.initial_max() {
        let once = closest_grid_time(bounds, time).expect("snap");
        let twice = closest_grid_time(bounds, once).expect("snap");
        assert_eq!(once, twice, "snap not idempotent for {time}");
        time += 17_321;
    }
}
