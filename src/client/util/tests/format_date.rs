//! Tests for short date formatting.

use chrono::{DateTime, Utc};

use crate::client::util::time::format_date;

/// Test the card and table date format.
///
/// Expected: abbreviated month, zero padded day, full year.
#[test]
fn formats_month_day_year() {
    let issued: DateTime<Utc> = "2025-03-04T10:00:00Z".parse().unwrap();
    assert_eq!(format_date(&issued), "Mar 04, 2025");
}
