use super::ApiError;
use crate::model::placement::{
    ApplicationDto, JobApplicationDto, JobDto, JobPayloadDto, StatusUpdateDto,
};

/// Retrieve job postings from API, optionally narrowed by role and job type
/// on the server. Arguments are owned so the future can outlive the caller's
/// scope inside a resource.
#[cfg(feature = "web")]
pub async fn get_jobs(role: String, job_type: String) -> Result<Vec<JobDto>, ApiError> {
    let mut query = Vec::new();
    if !role.is_empty() {
        query.push(format!("role={}", encode_query_value(&role)));
    }
    if !job_type.is_empty() {
        query.push(format!("type={}", encode_query_value(&job_type)));
    }

    let url = if query.is_empty() {
        "/api/placement/jobs".to_string()
    } else {
        format!("/api/placement/jobs?{}", query.join("&"))
    };

    let response = super::get(&url).await?;
    super::parse_json(response).await
}

/// Apply the signed-in user to a job posting.
#[cfg(feature = "web")]
pub async fn apply_to_job(job_id: &str) -> Result<(), ApiError> {
    let body = JobApplicationDto {
        job_id: job_id.to_string(),
    };
    let response = super::post_json("/api/placement/jobs/apply", &body).await?;
    super::parse_ok(response).await
}

/// Retrieve the signed-in user's applications from API.
#[cfg(feature = "web")]
pub async fn get_my_applications() -> Result<Vec<ApplicationDto>, ApiError> {
    let response = super::get("/api/placement/my-applications").await?;
    super::parse_json(response).await
}

/// Create a job posting, returning the stored record.
#[cfg(feature = "web")]
pub async fn create_job(payload: &JobPayloadDto) -> Result<JobDto, ApiError> {
    let response = super::post_json("/api/placement/jobs", payload).await?;
    super::parse_json(response).await
}

/// Update a job posting, returning the stored record.
#[cfg(feature = "web")]
pub async fn update_job(job_id: &str, payload: &JobPayloadDto) -> Result<JobDto, ApiError> {
    let response = super::put_json(&format!("/api/placement/jobs/{}", job_id), payload).await?;
    super::parse_json(response).await
}

/// Delete a job posting.
#[cfg(feature = "web")]
pub async fn delete_job(job_id: &str) -> Result<(), ApiError> {
    let response = super::delete(&format!("/api/placement/jobs/{}", job_id)).await?;
    super::parse_ok(response).await
}

/// Move an applicant on a job posting to a new pipeline status.
#[cfg(feature = "web")]
pub async fn update_application_status(
    job_id: &str,
    user_id: &str,
    update: &StatusUpdateDto,
) -> Result<(), ApiError> {
    let url = format!("/api/placement/applications/{}/{}/status", job_id, user_id);
    let response = super::put_json(&url, update).await?;
    super::parse_ok(response).await
}

// Filter values come from fixed dropdown lists; spaces and slashes are the
// only characters in them that need escaping.
#[cfg(feature = "web")]
fn encode_query_value(value: &str) -> String {
    value.replace(' ', "%20").replace('/', "%2F")
}
