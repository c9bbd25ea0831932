//! Tests for relative time formatting.

use chrono::{Duration, Utc};

use crate::client::util::time::format_relative_time;

/// Test formatting of a timestamp under a minute old.
///
/// Expected: a seconds phrase.
#[test]
fn under_a_minute_formats_as_seconds() {
    let timestamp = Utc::now() - Duration::seconds(30);
    assert!(format_relative_time(&timestamp).ends_with(" seconds ago"));
}

/// Test minute formatting including the singular form.
///
/// Expected: "1 minute ago" has no plural s, larger counts do. Timestamps
/// sit mid-bucket so a slow test runner cannot shift the count.
#[test]
fn minutes_pluralize_correctly() {
    let one = Utc::now() - Duration::seconds(90);
    assert_eq!(format_relative_time(&one), "1 minute ago");

    let five = Utc::now() - Duration::seconds(5 * 60 + 30);
    assert_eq!(format_relative_time(&five), "5 minutes ago");
}

/// Test the hour and day buckets.
///
/// Expected: durations under a day format as hours, under thirty days as
/// days.
#[test]
fn hours_and_days_buckets() {
    let hours = Utc::now() - Duration::minutes(3 * 60 + 30);
    assert_eq!(format_relative_time(&hours), "3 hours ago");

    let days = Utc::now() - Duration::hours(2 * 24 + 12);
    assert_eq!(format_relative_time(&days), "2 days ago");
}

/// Test the month and year buckets.
///
/// Expected: thirty-day months and 365-day years, with singular forms at
/// one.
#[test]
fn months_and_years_buckets() {
    let month = Utc::now() - Duration::days(45);
    assert_eq!(format_relative_time(&month), "1 month ago");

    let years = Utc::now() - Duration::days(800);
    assert_eq!(format_relative_time(&years), "2 years ago");
}
