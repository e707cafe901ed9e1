use super::*;
use time::macros::datetime;

// =============================================================
// Salary formatting
// =============================================================

#[test]
fn group_inr_small_amounts_unchanged() {
    assert_eq!(group_inr(0), "0");
    assert_eq!(group_inr(999), "999");
}

#[test]
fn group_inr_uses_indian_grouping() {
    assert_eq!(group_inr(1_000), "1,000");
    assert_eq!(group_inr(100_000), "1,00,000");
    assert_eq!(group_inr(1_234_567), "12,34,567");
    assert_eq!(group_inr(120_00_000), "1,20,00,000");
}

#[test]
fn salary_range_both_bounds() {
    assert_eq!(
        salary_range(Some(500_000.0), Some(1_200_000.0)),
        "\u{20b9}5,00,000 - \u{20b9}12,00,000"
    );
}

#[test]
fn salary_range_single_bounds() {
    assert_eq!(salary_range(Some(500_000.0), None), "From \u{20b9}5,00,000");
    assert_eq!(salary_range(None, Some(800_000.0)), "Up to \u{20b9}8,00,000");
}

#[test]
fn salary_range_unspecified() {
    assert_eq!(salary_range(None, None), "Salary not specified");
}

// =============================================================
// Timestamps
// =============================================================

#[test]
fn parse_timestamp_accepts_backend_shape() {
    let dt = parse_timestamp("2025-06-01T09:30:00").unwrap();
    assert_eq!(dt, datetime!(2025-06-01 09:30:00));
}

#[test]
fn parse_timestamp_tolerates_fractional_seconds() {
    let dt = parse_timestamp("2025-06-01T09:30:00.123456").unwrap();
    assert_eq!(dt, datetime!(2025-06-01 09:30:00));
}

#[test]
fn parse_timestamp_rejects_garbage() {
    assert!(parse_timestamp("not a date").is_none());
    assert!(parse_timestamp("").is_none());
}

#[test]
fn short_and_long_dates() {
    assert_eq!(short_date("2025-06-01T09:30:00"), "Jun 1, 2025");
    assert_eq!(long_date("2025-06-01T09:30:00"), "June 1, 2025");
}

#[test]
fn unparseable_dates_fall_through_verbatim() {
    assert_eq!(short_date("soon"), "soon");
}

#[test]
fn is_past_compares_against_now() {
    let now = datetime!(2025-06-15 12:00:00);
    assert!(is_past("2025-06-01T00:00:00", now));
    assert!(!is_past("2025-07-01T00:00:00", now));
}

#[test]
fn relative_age_buckets() {
    let now = datetime!(2025-06-15 12:00:00);
    assert_eq!(relative_age("2025-06-15T09:00:00", now), "Today");
    assert_eq!(relative_age("2025-06-14T09:00:00", now), "Yesterday");
    assert_eq!(relative_age("2025-06-12T09:00:00", now), "3 days ago");
    assert_eq!(relative_age("2025-06-01T09:00:00", now), "2 weeks ago");
    assert_eq!(relative_age("2025-04-01T09:00:00", now), "Apr 1, 2025");
}

#[test]
fn message_time_buckets() {
    let now = datetime!(2025-06-15 18:00:00);
    assert_eq!(message_time("2025-06-15T09:05:00", now), "9:05 AM");
    assert_eq!(message_time("2025-06-14T22:00:00", now), "Yesterday");
    assert_eq!(message_time("2025-06-12T09:00:00", now), "Thu");
    assert_eq!(message_time("2025-05-01T09:00:00", now), "May 1");
}

// =============================================================
// Text helpers
// =============================================================

#[test]
fn initial_takes_uppercased_first_char() {
    assert_eq!(initial("priya"), "P");
    assert_eq!(initial("  anand"), "A");
    assert_eq!(initial(""), "U");
}

#[test]
fn preview_clips_long_text() {
    assert_eq!(preview("short", 150), "short");
    let long = "x".repeat(200);
    let clipped = preview(&long, 150);
    assert_eq!(clipped.chars().count(), 153);
    assert!(clipped.ends_with("..."));
}

#[test]
fn split_skills_trims_and_drops_empties() {
    assert_eq!(
        split_skills(" rust , wasm ,, leptos "),
        vec!["rust".to_owned(), "wasm".to_owned(), "leptos".to_owned()]
    );
    assert!(split_skills("   ").is_empty());
}
