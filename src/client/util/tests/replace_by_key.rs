//! Tests for keyed replacement in loaded lists.

use serde_json::json;

use crate::client::util::patch::replace_by_key;
use crate::model::placement::JobDto;

fn job(id: &str, title: &str) -> JobDto {
    serde_json::from_value(json!({
        "_id": id,
        "title": title,
        "company": "ACME Corp",
        "createdAt": "2025-06-01T00:00:00Z"
    }))
    .unwrap()
}

/// Test swapping an updated record into a list.
///
/// Expected: the record with the matching id is replaced in place and the
/// displaced record is handed back for rollback.
#[test]
fn replaces_matching_record_and_returns_old() {
    let mut jobs = vec![job("j1", "Backend Engineer"), job("j2", "Data Analyst")];

    let displaced = replace_by_key(&mut jobs, job("j2", "Senior Data Analyst"));

    assert_eq!(displaced.map(|j| j.title), Some("Data Analyst".to_string()));
    assert_eq!(jobs[1].title, "Senior Data Analyst");
    assert_eq!(jobs.len(), 2);
}

/// Test replacement when the id is not present.
///
/// Expected: the list is untouched and nothing is displaced.
#[test]
fn missing_key_leaves_list_untouched() {
    let mut jobs = vec![job("j1", "Backend Engineer")];

    let displaced = replace_by_key(&mut jobs, job("j9", "Ghost Role"));

    assert!(displaced.is_none());
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Backend Engineer");
}
