//! Tests for salary band formatting.

use crate::client::components::placement::job_board::format_salary;
use crate::model::placement::SalaryRangeDto;

fn range(min: i64, max: i64) -> SalaryRangeDto {
    SalaryRangeDto {
        min,
        max,
        currency: "INR".to_string(),
    }
}

/// Test a salary band on whole lakh boundaries.
///
/// Expected: rupee amounts collapse to integer lakhs per annum.
#[test]
fn whole_lakhs_format_as_integers() {
    let band = range(600_000, 1_200_000);

    assert_eq!(format_salary(Some(&band)), "₹6-12 LPA");
}

/// Test a salary band with a fractional lakh bound.
///
/// Expected: the fractional bound keeps its decimal part.
#[test]
fn fractional_lakhs_keep_their_decimals() {
    let band = range(650_000, 1_000_000);

    assert_eq!(format_salary(Some(&band)), "₹6.5-10 LPA");
}

/// Test a posting without a salary band.
///
/// Expected: the placeholder label used on job cards.
#[test]
fn missing_band_uses_placeholder() {
    assert_eq!(format_salary(None), "Salary disclosed");
}
