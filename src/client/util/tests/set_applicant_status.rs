//! Tests for applicant pipeline status edits.

use serde_json::json;

use crate::client::util::patch::set_applicant_status;
use crate::model::placement::{ApplicationStatus, JobDto};

fn job_with_applicants() -> Vec<JobDto> {
    serde_json::from_value(json!([{
        "_id": "j1",
        "title": "Backend Engineer",
        "company": "ACME Corp",
        "createdAt": "2025-06-01T00:00:00Z",
        "applicants": [
            {
                "user": { "_id": "u1", "name": "Asha", "email": "asha@example.com" },
                "status": "Applied",
                "appliedAt": "2025-06-02T00:00:00Z"
            },
            {
                "user": { "_id": "u2", "name": "Ravi", "email": "ravi@example.com" },
                "status": "Under Review",
                "appliedAt": "2025-06-03T00:00:00Z"
            }
        ]
    }]))
    .unwrap()
}

/// Test moving one applicant to a new status.
///
/// Expected: only the targeted applicant changes and the previous status is
/// returned for rollback.
#[test]
fn updates_targeted_applicant_only() {
    let mut jobs = job_with_applicants();

    let previous =
        set_applicant_status(&mut jobs, "j1", "u1", ApplicationStatus::InterviewScheduled);

    assert_eq!(previous, Some(ApplicationStatus::Applied));
    assert_eq!(
        jobs[0].applicants[0].status,
        ApplicationStatus::InterviewScheduled
    );
    assert_eq!(jobs[0].applicants[1].status, ApplicationStatus::UnderReview);
}

/// Test the miss cases.
///
/// Expected: an unknown job or user id changes nothing and reports no
/// previous status.
#[test]
fn unknown_ids_change_nothing() {
    let mut jobs = job_with_applicants();

    assert!(set_applicant_status(&mut jobs, "j9", "u1", ApplicationStatus::Hired).is_none());
    assert!(set_applicant_status(&mut jobs, "j1", "u9", ApplicationStatus::Hired).is_none());
    assert_eq!(jobs[0].applicants[0].status, ApplicationStatus::Applied);
}
