use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(rename = "type", default)]
    pub job_type: String,
    #[serde(default)]
    pub salary_range: Option<SalaryRangeDto>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub apply_link: Option<String>,
    #[serde(default)]
    pub company_details: Option<CompanyDetailsDto>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub applicants: Vec<ApplicantDto>,
}

fn default_active() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalaryRangeDto {
    pub min: i64,
    pub max: i64,
    #[serde(default)]
    pub currency: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetailsDto {
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// One applicant entry embedded in an admin job listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantDto {
    pub user: ApplicantUserDto,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub match_score: u32,
    pub applied_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicantUserDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// One entry from the signed-in student's application list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub applied_at: DateTime<Utc>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub match_score: u32,
    #[serde(default)]
    pub skill_gap: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::InterviewScheduled => "Interview Scheduled",
            ApplicationStatus::Hired => "Hired",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// Body for admin job create/update calls.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPayloadDto {
    pub title: String,
    pub company: String,
    pub role: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary_range: SalaryRangeDto,
    pub requirements: Vec<String>,
    pub tech_stack: Vec<String>,
    pub description: String,
    pub apply_link: String,
}

/// Body for `POST /placement/jobs/apply`.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationDto {
    pub job_id: String,
}

/// Body for `PUT /placement/applications/:jobId/:userId/status`.
#[derive(Clone, Serialize)]
pub struct StatusUpdateDto {
    pub status: ApplicationStatus,
}
