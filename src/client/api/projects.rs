use super::ApiError;
use crate::model::project::{DownloadLinkDto, ProjectResourceDto};

/// Retrieve project templates and documentation from API.
#[cfg(feature = "web")]
pub async fn get_project_resources() -> Result<Vec<ProjectResourceDto>, ApiError> {
    let response = super::get("/api/projects").await?;
    super::parse_json(response).await
}

/// Record a download of a project resource and fetch its file link. The
/// backend bumps the download counter as a side effect.
#[cfg(feature = "web")]
pub async fn request_download(resource_id: &str) -> Result<DownloadLinkDto, ApiError> {
    let url = format!("/api/projects/download/{}", resource_id);
    let response = super::post_json(&url, &serde_json::json!({})).await?;
    super::parse_json(response).await
}
