//! Tests for UserDto deserialization.

use crate::model::user::UserDto;

/// Tests parsing the minimal user the login response carries.
///
/// Verifies that profile extras default rather than failing the parse.
///
/// Expected: id/name/email set, everything else defaulted
#[test]
fn defaults_missing_fields() {
    let user: UserDto =
        serde_json::from_str(r#"{ "_id": "u1", "name": "Asha", "email": "asha@example.com" }"#)
            .unwrap();

    assert_eq!(user.id, "u1");
    assert!(user.role.is_none());
    assert!(user.image.is_none());
    assert!(user.skills.is_empty());
    assert!(user.student_profile.is_none());
}

/// Tests parsing a user with filled student profile sections.
///
/// Verifies the nested spotlight and pull quote structures map through.
///
/// Expected: nested sections populated
#[test]
fn parses_student_profile_sections() {
    let json = r#"{
        "_id": "u2",
        "name": "Vinoth",
        "email": "vinoth@example.com",
        "role": "student",
        "githubUrl": "https://github.com/vinoth",
        "expectedGraduation": "2025",
        "progress": ["React", "Node.js"],
        "studentProfile": {
            "myStory": "Started from a tier-3 college.",
            "mockExamSpotlight": {
                "title": "Inventory Tracker",
                "challenge": "Race conditions in stock updates.",
                "solution": "Versioned writes with retries.",
                "projectImage": "https://example.com/shot.png",
                "githubLink": "https://github.com/vinoth/tracker",
                "liveProjectLink": "https://tracker.example.com"
            },
            "pullQuote": { "mentorName": "Priya", "quote": "Ships fast, learns faster." }
        }
    }"#;

    let user: UserDto = serde_json::from_str(json).unwrap();

    let profile = user.student_profile.unwrap();
    assert_eq!(profile.my_story.as_deref(), Some("Started from a tier-3 college."));
    assert!(profile.why_this_academy.is_none());
    let spotlight = profile.mock_exam_spotlight.unwrap();
    assert_eq!(spotlight.title, "Inventory Tracker");
    assert_eq!(profile.pull_quote.unwrap().mentor_name, "Priya");
}
