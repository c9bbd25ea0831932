use super::ApiError;
use crate::model::course::CourseDto;

/// Retrieve the full course catalog from API.
#[cfg(feature = "web")]
pub async fn get_courses() -> Result<Vec<CourseDto>, ApiError> {
    let response = super::get("/api/courses").await?;
    super::parse_json(response).await
}

/// Retrieve a single course by id from API. The id is owned so the future
/// can outlive the caller's scope inside a resource.
#[cfg(feature = "web")]
pub async fn get_course(course_id: String) -> Result<CourseDto, ApiError> {
    let response = super::get(&format!("/api/courses/{}", course_id)).await?;
    super::parse_json(response).await
}
