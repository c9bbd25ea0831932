//! Tests for job board ordering.

use serde_json::json;

use crate::client::components::placement::job_board::sorted_jobs;
use crate::model::placement::JobDto;

fn job(id: &str, created_at: &str) -> JobDto {
    serde_json::from_value(json!({
        "_id": id,
        "title": "Backend Engineer",
        "company": "ACME Corp",
        "createdAt": created_at
    }))
    .unwrap()
}

/// Test the default ordering.
///
/// Expected: newest posting first.
#[test]
fn newest_first_puts_latest_posting_on_top() {
    let jobs = vec![
        job("old", "2025-01-10T00:00:00Z"),
        job("new", "2025-06-01T00:00:00Z"),
        job("mid", "2025-03-15T00:00:00Z"),
    ];

    let sorted = sorted_jobs(jobs, true);

    let ids: Vec<&str> = sorted.iter().map(|job| job.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

/// Test the flipped ordering.
///
/// Expected: oldest posting first.
#[test]
fn oldest_first_reverses_the_order() {
    let jobs = vec![
        job("new", "2025-06-01T00:00:00Z"),
        job("old", "2025-01-10T00:00:00Z"),
    ];

    let sorted = sorted_jobs(jobs, false);

    let ids: Vec<&str> = sorted.iter().map(|job| job.id.as_str()).collect();
    assert_eq!(ids, vec!["old", "new"]);
}
