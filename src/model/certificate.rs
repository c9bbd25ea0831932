use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDto {
    #[serde(rename = "_id")]
    pub id: String,
    /// Populated course reference; absent if the course was deleted.
    #[serde(rename = "courseId", default)]
    pub course: Option<CertificateCourseDto>,
    pub issue_date: DateTime<Utc>,
    pub certificate_id: String,
    #[serde(default)]
    pub download_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CertificateCourseDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
}

/// Body for `POST /certificates/generate`.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestDto {
    pub course_id: String,
    pub user_name: String,
}
