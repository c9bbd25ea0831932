use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub students: u32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub syllabus: Vec<SyllabusModuleDto>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub certification: Option<String>,
}

/// One week of a course syllabus; `content` is a comma separated topic list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyllabusModuleDto {
    pub week: u32,
    pub topic: String,
    #[serde(default)]
    pub content: String,
}
