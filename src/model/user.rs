use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub place_city: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub select_programme: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub expected_graduation: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub progress: Vec<String>,
    #[serde(default)]
    pub student_profile: Option<StudentProfileDto>,
}

/// Optional long-form spotlight sections a student may have filled in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfileDto {
    #[serde(default)]
    pub my_story: Option<String>,
    #[serde(default)]
    pub why_this_academy: Option<String>,
    #[serde(default)]
    pub my_experience: Option<String>,
    #[serde(default)]
    pub what_next: Option<String>,
    #[serde(default)]
    pub mock_exam_spotlight: Option<SpotlightDto>,
    #[serde(default)]
    pub pull_quote: Option<PullQuoteDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub challenge: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub project_image: String,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub live_project_link: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullQuoteDto {
    #[serde(default)]
    pub mentor_name: String,
    #[serde(default)]
    pub quote: String,
}

/// Body for `POST /auth/login`.
#[derive(Clone, Serialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Response from `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponseDto {
    pub user: UserDto,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub place_city: String,
    pub qualification: String,
    pub select_programme: String,
    pub resume_url: String,
}
