use super::ApiError;
use crate::model::user::{LoginDto, LoginResponseDto, RegistrationDto, UserDto};

/// Authenticate with email and password, establishing the session cookie.
#[cfg(feature = "web")]
pub async fn login(credentials: &LoginDto) -> Result<LoginResponseDto, ApiError> {
    let response = super::post_json("/api/auth/login", credentials).await?;
    super::parse_json(response).await
}

/// Register a new account.
#[cfg(feature = "web")]
pub async fn register(registration: &RegistrationDto) -> Result<(), ApiError> {
    let response = super::post_json("/api/auth/register", registration).await?;
    super::parse_ok(response).await
}

/// Retrieve the user attached to the current session cookie, if any.
#[cfg(feature = "web")]
pub async fn me() -> Result<UserDto, ApiError> {
    let response = super::get("/api/auth/me").await?;
    super::parse_json(response).await
}

/// End the current session on the backend.
#[cfg(feature = "web")]
pub async fn logout() -> Result<(), ApiError> {
    let response = super::post_json("/api/auth/logout", &serde_json::json!({})).await?;
    super::parse_ok(response).await
}
