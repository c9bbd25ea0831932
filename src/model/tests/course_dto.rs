//! Tests for CourseDto deserialization.

use crate::model::course::CourseDto;

/// Tests parsing a course with only the fields the backend always sends.
///
/// Verifies that every optional field falls back to its default instead of
/// rejecting the document.
///
/// Expected: empty strings/lists, zero counts, no rejection
#[test]
fn defaults_missing_fields() {
    let course: CourseDto =
        serde_json::from_str(r#"{ "_id": "c1", "title": "ML Basics", "tags": ["Machine Learning"] }"#)
            .unwrap();

    assert_eq!(course.id, "c1");
    assert_eq!(course.title, "ML Basics");
    assert_eq!(course.tags, vec!["Machine Learning"]);
    assert!(course.description.is_empty());
    assert!(course.syllabus.is_empty());
    assert!(course.image.is_none());
    assert_eq!(course.students, 0);
    assert_eq!(course.rating, 0.0);
}

/// Tests parsing a fully populated course document.
///
/// Verifies that nested syllabus modules and list fields map through.
///
/// Expected: all fields populated
#[test]
fn parses_full_document() {
    let json = r#"{
        "_id": "c2",
        "title": "SQL Mastery",
        "description": "Hands-on SQL",
        "longDescription": "Everything from joins to tuning.",
        "duration": "8 Weeks",
        "students": 1200,
        "rating": 4.7,
        "level": "Beginner",
        "price": "4999",
        "image": "https://example.com/sql.png",
        "tags": ["SQL", "Databases"],
        "syllabus": [
            { "week": 1, "topic": "Foundations", "content": "SELECT, WHERE, ORDER BY" },
            { "week": 2, "topic": "Joins", "content": "INNER, LEFT, RIGHT" }
        ],
        "prerequisites": ["Basic computer literacy"],
        "outcomes": ["Write production queries"],
        "resources": ["Query workbook"],
        "certification": "Industry-recognized certificate on completion"
    }"#;

    let course: CourseDto = serde_json::from_str(json).unwrap();

    assert_eq!(course.syllabus.len(), 2);
    assert_eq!(course.syllabus[0].week, 1);
    assert_eq!(course.syllabus[1].topic, "Joins");
    assert_eq!(course.level, "Beginner");
    assert_eq!(course.students, 1200);
    assert_eq!(course.image.as_deref(), Some("https://example.com/sql.png"));
    assert_eq!(
        course.certification.as_deref(),
        Some("Industry-recognized certificate on completion")
    );
}

/// Tests that a stubbed list response keeps its item count.
///
/// Verifies the loaded item count equals the response array length.
///
/// Expected: 6 courses parsed from 6 documents
#[test]
fn list_preserves_item_count() {
    let json = r#"[
        { "_id": "c1", "title": "A" },
        { "_id": "c2", "title": "B" },
        { "_id": "c3", "title": "C" },
        { "_id": "c4", "title": "D" },
        { "_id": "c5", "title": "E" },
        { "_id": "c6", "title": "F" }
    ]"#;

    let courses: Vec<CourseDto> = serde_json::from_str(json).unwrap();

    assert_eq!(courses.len(), 6);
}
