use chrono::{DateTime, TimeZone, Timelike, Utc};
use time_range_slider::api::{TimeSlider, TimeSliderConfig};
use time_range_slider::core::{Label, ManualClock, TimeView, compute_bounds, generate_labels};

const HOUR_MS: i64 = 3_600_000;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn labels_for(mode: TimeView, now: DateTime<Utc>) -> Vec<Label> {
    let bounds = compute_bounds(mode, now).expect("bounds");
    generate_labels(bounds, mode).expect("labels").collect()
}

fn assert_evenly_spaced(labels: &[Label], step_ms: i64) {
    for pair in labels.windows(2) {
        assert_eq!(pair[1].time - pair[0].time, step_ms);
    }
}

#[test]
fn one_day_produces_24_hourly_labels_oldest_first() {
    let labels = labels_for(TimeView::OneDay, utc(2024, 1, 10, 15, 32, 0));

    assert_eq!(labels.len(), 24);
    assert_evenly_spaced(&labels, HOUR_MS);
    assert_eq!(
        labels[0].time,
        utc(2024, 1, 9, 16, 0, 0).timestamp_millis()
    );
    assert_eq!(
        labels[23].time,
        utc(2024, 1, 10, 15, 0, 0).timestamp_millis()
    );
    for label in &labels {
        let time = DateTime::from_timestamp_millis(label.time).expect("valid time");
        assert_eq!((time.minute(), time.second(), time.nanosecond()), (0, 0, 0));
    }
}

#[test]
fn one_day_label_positions_follow_the_mapping() {
    let now = utc(2024, 1, 10, 15, 32, 0);
    let bounds = compute_bounds(TimeView::OneDay, now).expect("bounds");
    let labels: Vec<Label> = generate_labels(bounds, TimeView::OneDay)
        .expect("labels")
        .collect();

    // 16:00 is 28 minutes past the lower bound: 28 / 1440 = 1.944..%.
    assert_eq!(labels[0].left, 1.94);
    assert_eq!(labels[0].left_css(), "1.94%");
    for label in &labels {
        assert_eq!(label.left, bounds.time_to_percentage(label.time));
    }
}

#[test]
fn seven_day_produces_14_labels_on_twelve_hour_marks() {
    let labels = labels_for(TimeView::SevenDay, utc(2024, 1, 10, 15, 32, 0));

    assert_eq!(labels.len(), 14);
    assert_evenly_spaced(&labels, 12 * HOUR_MS);
    assert_eq!(
        labels[13].time,
        utc(2024, 1, 10, 12, 0, 0).timestamp_millis()
    );
    assert_eq!(labels[0].time, utc(2024, 1, 4, 0, 0, 0).timestamp_millis());
    for label in &labels {
        let time = DateTime::from_timestamp_millis(label.time).expect("valid time");
        assert_eq!(time.hour() % 12, 0);
        assert_eq!((time.minute(), time.second()), (0, 0));
    }
}

#[test]
fn seven_day_morning_anchor_rounds_down_to_midnight() {
    let labels = labels_for(TimeView::SevenDay, utc(2024, 1, 10, 9, 10, 0));
    assert_eq!(
        labels.last().expect("anchor").time,
        utc(2024, 1, 10, 0, 0, 0).timestamp_millis()
    );
}

#[test]
fn sequence_is_restartable_and_matches_slider_labels() {
    let clock = ManualClock::new(utc(2024, 1, 10, 15, 32, 0));
    let slider = TimeSlider::new(clock, TimeSliderConfig::new(TimeView::OneDay))
        .expect("slider init");

    let first: Vec<Label> = slider.label_sequence().expect("labels").collect();
    let second: Vec<Label> = slider.label_sequence().expect("labels").collect();
    assert_eq!(first, second);
    assert_eq!(first.as_slice(), slider.labels());

    let newest_first: Vec<Label> = slider.label_sequence().expect("labels").rev().collect();
    assert_eq!(newest_first.first(), first.last());
}

#[test]
fn labels_strictly_increase() {
    for mode in [TimeView::OneDay, TimeView::SevenDay] {
        let labels = labels_for(mode, utc(2024, 6, 30, 23, 59, 59));
        assert!(labels.windows(2).all(|pair| pair[0].time < pair[1].time));
    }
}
