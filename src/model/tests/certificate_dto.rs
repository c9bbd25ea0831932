//! Tests for CertificateDto deserialization.

use crate::model::certificate::CertificateDto;
use crate::model::project::{ProjectResourceDto, ResourceKind};

/// Tests parsing a certificate with a populated course reference.
///
/// Verifies the courseId field maps onto the nested course struct.
///
/// Expected: course id and title available
#[test]
fn parses_populated_course() {
    let json = r#"{
        "_id": "cert1",
        "courseId": { "_id": "c1", "title": "ML Basics" },
        "issueDate": "2024-03-10T00:00:00Z",
        "certificateId": "MAK-2024-0042",
        "downloadUrl": "https://cdn.example.com/certs/MAK-2024-0042.pdf"
    }"#;

    let certificate: CertificateDto = serde_json::from_str(json).unwrap();

    let course = certificate.course.unwrap();
    assert_eq!(course.title, "ML Basics");
    assert_eq!(certificate.certificate_id, "MAK-2024-0042");
}

/// Tests parsing a certificate whose course was deleted.
///
/// Verifies a null course reference is tolerated.
///
/// Expected: course is none
#[test]
fn tolerates_missing_course() {
    let json = r#"{
        "_id": "cert2",
        "courseId": null,
        "issueDate": "2024-03-10T00:00:00Z",
        "certificateId": "MAK-2024-0043"
    }"#;

    let certificate: CertificateDto = serde_json::from_str(json).unwrap();

    assert!(certificate.course.is_none());
    assert!(certificate.download_url.is_empty());
}

/// Tests that a project resource without a kind parses as a template.
///
/// Verifies the `type` rename and kind default.
///
/// Expected: Template kind, zero downloads
#[test]
fn project_resource_defaults_to_template() {
    let resource: ProjectResourceDto =
        serde_json::from_str(r#"{ "_id": "p1", "title": "MERN Starter" }"#).unwrap();

    assert_eq!(resource.kind, ResourceKind::Template);
    assert_eq!(resource.downloads, 0);

    let resource: ProjectResourceDto =
        serde_json::from_str(r#"{ "_id": "p2", "title": "Report Guide", "type": "Document" }"#)
            .unwrap();

    assert_eq!(resource.kind, ResourceKind::Document);
}
