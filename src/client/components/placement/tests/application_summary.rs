//! Tests for the application summary counts.

use serde_json::json;

use crate::client::components::placement::applications::ApplicationSummary;
use crate::model::placement::ApplicationDto;

fn application(job_id: &str, status: &str) -> ApplicationDto {
    serde_json::from_value(json!({
        "jobId": job_id,
        "title": "Backend Engineer",
        "company": "ACME Corp",
        "appliedAt": "2025-06-01T00:00:00Z",
        "status": status
    }))
    .unwrap()
}

/// Test counting a mixed set of applications.
///
/// Expected: one count per outcome bucket plus the overall total; Applied
/// and Under Review only contribute to the total.
#[test]
fn counts_each_outcome_bucket() {
    let applications = vec![
        application("j1", "Applied"),
        application("j2", "Under Review"),
        application("j3", "Interview Scheduled"),
        application("j4", "Hired"),
        application("j5", "Rejected"),
        application("j6", "Interview Scheduled"),
    ];

    let summary = ApplicationSummary::from_applications(&applications);

    assert_eq!(summary.total, 6);
    assert_eq!(summary.interviews, 2);
    assert_eq!(summary.offers, 1);
    assert_eq!(summary.rejected, 1);
}

/// Test the empty list.
///
/// Expected: every count is zero.
#[test]
fn empty_list_yields_zeroes() {
    let summary = ApplicationSummary::from_applications(&[]);

    assert_eq!(summary, ApplicationSummary::default());
}
