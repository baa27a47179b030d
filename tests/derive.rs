use std::f64::consts::PI;

use kira_trialsdash::derive::{MIN_BUBBLE_SIZE, SENTINEL_YEAR, bubble_size, extract_year};

#[test]
fn year_from_date_text() {
    assert_eq!(extract_year("Started 2014-05-01"), 2014);
}

#[test]
fn year_sentinel_when_missing() {
    assert_eq!(SENTINEL_YEAR, 2025);
    assert_eq!(extract_year(""), SENTINEL_YEAR);
    assert_eq!(extract_year("no digits here"), SENTINEL_YEAR);
    assert_eq!(extract_year("0999 or 3050"), SENTINEL_YEAR);
}

#[test]
fn year_first_match_wins() {
    assert_eq!(extract_year("1999 trial, updated 2020"), 1999);
}

#[test]
fn bubble_clamped_at_minimum() {
    assert_eq!(bubble_size(0), MIN_BUBBLE_SIZE);
    assert_eq!(bubble_size(3), 5.0);
}

#[test]
fn bubble_area_scaling() {
    let s = bubble_size(100);
    let expected = (100.0 / PI).sqrt() / 0.5;
    assert!(s > 5.0);
    assert!((s - expected).abs() < 1e-9);
}

#[test]
fn bubble_monotonic() {
    let sizes: Vec<f64> = (0..2000u64).step_by(7).map(bubble_size).collect();
    assert!(sizes.windows(2).all(|w| w[1] >= w[0]));
}
