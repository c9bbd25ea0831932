//! Tests for JobDto deserialization.

use crate::model::placement::JobDto;

/// Tests parsing a job with every optional field absent.
///
/// Verifies that the active flag defaults to true and optional structures
/// default to empty rather than failing the parse.
///
/// Expected: active job with empty lists and no salary range
#[test]
fn defaults_missing_fields() {
    let json = r#"{
        "_id": "j1",
        "title": "Backend Engineer",
        "company": "TechCorp",
        "createdAt": "2024-05-01T10:30:00.000Z"
    }"#;

    let job: JobDto = serde_json::from_str(json).unwrap();

    assert!(job.is_active);
    assert!(job.salary_range.is_none());
    assert!(job.requirements.is_empty());
    assert!(job.tech_stack.is_empty());
    assert!(job.applicants.is_empty());
    assert!(job.description.is_none());
    assert!(job.apply_link.is_none());
}

/// Tests parsing a fully populated admin job document.
///
/// Verifies the `type` rename, nested salary range, and embedded applicant
/// entries all map through.
///
/// Expected: all fields populated, one applicant with a parsed status
#[test]
fn parses_full_document() {
    let json = r#"{
        "_id": "j2",
        "title": "Senior React Developer",
        "company": "TechCorp Inc.",
        "role": "Frontend",
        "type": "Remote",
        "salaryRange": { "min": 500000, "max": 1500000, "currency": "INR" },
        "requirements": ["React.js experience", "Knowledge of Node.js"],
        "techStack": ["React", "Node.js", "MongoDB"],
        "description": "Build and own customer-facing features.",
        "applyLink": "https://company.com/careers/apply/123",
        "companyDetails": { "logo": "https://cdn.example.com/logo.png", "website": "https://company.com" },
        "isActive": true,
        "createdAt": "2024-06-15T08:00:00Z",
        "applicants": [
            {
                "user": { "_id": "u1", "name": "Asha", "email": "asha@example.com" },
                "status": "Under Review",
                "matchScore": 82,
                "appliedAt": "2024-06-16T12:00:00Z"
            }
        ]
    }"#;

    let job: JobDto = serde_json::from_str(json).unwrap();

    assert_eq!(job.job_type, "Remote");
    let salary = job.salary_range.unwrap();
    assert_eq!(salary.min, 500000);
    assert_eq!(salary.max, 1500000);
    assert_eq!(job.applicants.len(), 1);
    assert_eq!(job.applicants[0].user.name, "Asha");
    assert_eq!(job.applicants[0].match_score, 82);
}
