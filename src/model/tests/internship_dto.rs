//! Tests for InternshipDto deserialization.

use crate::model::internship::{InternshipDto, InternshipStatus};

/// Tests that a posting without a status parses as active.
///
/// Verifies the status default and empty tag tolerance.
///
/// Expected: Active status, empty tags
#[test]
fn defaults_to_active() {
    let internship: InternshipDto =
        serde_json::from_str(r#"{ "_id": "i1", "company": "TechCorp", "role": "Frontend Intern" }"#)
            .unwrap();

    assert_eq!(internship.status, InternshipStatus::Active);
    assert!(internship.tags.is_empty());
}

/// Tests parsing a closed posting.
///
/// Verifies the status string maps onto the enum.
///
/// Expected: Closed status
#[test]
fn parses_closed_status() {
    let json = r#"{
        "_id": "i2",
        "company": "DataWorks",
        "role": "Analytics Intern",
        "location": "Remote",
        "stipend": "15k/month",
        "duration": "3 months",
        "tags": ["SQL", "Python"],
        "description": "Support the analytics team.",
        "status": "Closed"
    }"#;

    let internship: InternshipDto = serde_json::from_str(json).unwrap();

    assert_eq!(internship.status, InternshipStatus::Closed);
    assert_eq!(internship.status.label(), "Closed");
}
