use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternshipDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub stipend: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: InternshipStatus,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternshipStatus {
    #[default]
    Active,
    Closed,
}

impl InternshipStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InternshipStatus::Active => "Active",
            InternshipStatus::Closed => "Closed",
        }
    }
}

/// Body for `POST /internships/apply`.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternshipApplicationDto {
    pub internship_id: String,
    pub cover_letter: String,
}
