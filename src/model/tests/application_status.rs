//! Tests for ApplicationStatus serialization.

use crate::model::placement::{ApplicationDto, ApplicationStatus};

/// Tests that the multi-word statuses use their display spelling on the wire.
///
/// Verifies "Under Review" and "Interview Scheduled" parse into the enum and
/// serialize back with the same spelling.
///
/// Expected: round-trip without rename drift
#[test]
fn multi_word_statuses_round_trip() {
    let parsed: ApplicationStatus = serde_json::from_str(r#""Under Review""#).unwrap();
    assert_eq!(parsed, ApplicationStatus::UnderReview);

    let parsed: ApplicationStatus = serde_json::from_str(r#""Interview Scheduled""#).unwrap();
    assert_eq!(parsed, ApplicationStatus::InterviewScheduled);

    let serialized = serde_json::to_string(&ApplicationStatus::UnderReview).unwrap();
    assert_eq!(serialized, r#""Under Review""#);
}

/// Tests that labels match the wire spelling.
///
/// Verifies label() output for every status.
///
/// Expected: labels identical to the serialized form
#[test]
fn labels_match_wire_spelling() {
    for status in [
        ApplicationStatus::Applied,
        ApplicationStatus::UnderReview,
        ApplicationStatus::InterviewScheduled,
        ApplicationStatus::Hired,
        ApplicationStatus::Rejected,
    ] {
        let serialized = serde_json::to_string(&status).unwrap();
        assert_eq!(serialized, format!("\"{}\"", status.label()));
    }
}

/// Tests parsing an application entry with optional fields absent.
///
/// Verifies the skill gap defaults to empty and notes to none.
///
/// Expected: defaults applied, status parsed
#[test]
fn application_defaults_missing_fields() {
    let json = r#"{
        "jobId": "j1",
        "title": "Backend Engineer",
        "company": "TechCorp",
        "appliedAt": "2024-06-16T12:00:00Z",
        "status": "Applied"
    }"#;

    let application: ApplicationDto = serde_json::from_str(json).unwrap();

    assert_eq!(application.status, ApplicationStatus::Applied);
    assert!(application.skill_gap.is_empty());
    assert!(application.notes.is_none());
    assert_eq!(application.match_score, 0);
}
