use super::ApiError;
use crate::model::internship::{InternshipApplicationDto, InternshipDto};

/// Retrieve internship listings from API.
#[cfg(feature = "web")]
pub async fn get_internships() -> Result<Vec<InternshipDto>, ApiError> {
    let response = super::get("/api/internships").await?;
    super::parse_json(response).await
}

/// Apply the signed-in user to an internship with a cover letter.
#[cfg(feature = "web")]
pub async fn apply_to_internship(
    internship_id: &str,
    cover_letter: &str,
) -> Result<(), ApiError> {
    let body = InternshipApplicationDto {
        internship_id: internship_id.to_string(),
        cover_letter: cover_letter.to_string(),
    };
    let response = super::post_json("/api/internships/apply", &body).await?;
    super::parse_ok(response).await
}
