use serde::{Deserialize, Serialize};

/// The response body when an API request fails
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
}
