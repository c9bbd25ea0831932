use super::ApiError;
use crate::model::user::UserDto;

/// Retrieve a student's public profile by id from API. The id is owned so
/// the future can outlive the caller's scope inside a resource.
#[cfg(feature = "web")]
pub async fn get_user(user_id: String) -> Result<UserDto, ApiError> {
    let response = super::get(&format!("/api/users/{}", user_id)).await?;
    super::parse_json(response).await
}
