//! Tests for the job board text search.

use serde_json::json;

use crate::client::components::placement::job_board::search_jobs;
use crate::model::placement::JobDto;

fn job(title: &str, company: &str, tech: &[&str]) -> JobDto {
    serde_json::from_value(json!({
        "_id": title,
        "title": title,
        "company": company,
        "techStack": tech,
        "createdAt": "2025-06-01T00:00:00Z"
    }))
    .unwrap()
}

/// Test searching across title, company and tech stack.
///
/// Expected: a job matches when the query appears in any of the three
/// fields, regardless of case.
#[test]
fn matches_title_company_and_tech_stack() {
    let jobs = vec![
        job("Frontend Developer", "PixelWorks", &["React"]),
        job("Data Analyst", "NumberCrunch", &["SQL", "Python"]),
        job("Platform Engineer", "ReactorLabs", &["Go"]),
    ];

    let by_title = search_jobs(&jobs, "frontend");
    let by_company = search_jobs(&jobs, "numbercrunch");
    let by_tech = search_jobs(&jobs, "PYTHON");

    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Frontend Developer");
    assert_eq!(by_company.len(), 1);
    assert_eq!(by_company[0].company, "NumberCrunch");
    assert_eq!(by_tech.len(), 1);
    assert_eq!(by_tech[0].title, "Data Analyst");
}

/// Test a blank query.
///
/// Expected: whitespace-only input returns every job unchanged.
#[test]
fn blank_query_returns_everything() {
    let jobs = vec![
        job("Frontend Developer", "PixelWorks", &["React"]),
        job("Data Analyst", "NumberCrunch", &["SQL"]),
    ];

    let result = search_jobs(&jobs, "   ");

    assert_eq!(result.len(), 2);
}

/// Test a query that matches nothing.
///
/// Expected: an empty result rather than an error.
#[test]
fn unmatched_query_returns_empty() {
    let jobs = vec![job("Frontend Developer", "PixelWorks", &["React"])];

    let result = search_jobs(&jobs, "blockchain");

    assert!(result.is_empty());
}
