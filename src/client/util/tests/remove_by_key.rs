//! Tests for keyed removal and rollback reinsertion.

use serde_json::json;

use crate::client::util::patch::{remove_by_key, restore_at};
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

/// Test removal of a record by id.
///
/// Expected: the record leaves the list and comes back with the index it
/// occupied.
#[test]
fn removes_record_and_reports_index() {
    let mut jobs = vec![
        job("j1", "Backend Engineer"),
        job("j2", "Data Analyst"),
        job("j3", "ML Engineer"),
    ];

    let removed = remove_by_key(&mut jobs, "j2");

    let (index, record) = removed.unwrap();
    assert_eq!(index, 1);
    assert_eq!(record.title, "Data Analyst");
    assert_eq!(jobs.len(), 2);
}

/// Test the delete rollback round trip.
///
/// Expected: restoring the removed record at its reported index recreates
/// the original ordering.
#[test]
fn restore_undoes_removal() {
    let mut jobs = vec![
        job("j1", "Backend Engineer"),
        job("j2", "Data Analyst"),
        job("j3", "ML Engineer"),
    ];

    let (index, record) = remove_by_key(&mut jobs, "j2").unwrap();
    restore_at(&mut jobs, index, record);

    let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["j1", "j2", "j3"]);
}

/// Test restoring at an index past the end of the list.
///
/// Expected: the record is appended rather than panicking, which can happen
/// when other edits land between removal and rollback.
#[test]
fn restore_clamps_out_of_range_index() {
    let mut jobs = vec![job("j1", "Backend Engineer")];

    restore_at(&mut jobs, 5, job("j2", "Data Analyst"));

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[1].id, "j2");
}
