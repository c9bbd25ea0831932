use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResourceDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: ResourceKind,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub downloads: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    #[default]
    Template,
    Document,
    Guide,
}

/// Response from `POST /projects/download/:id`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DownloadLinkDto {
    #[serde(default)]
    pub url: Option<String>,
}
