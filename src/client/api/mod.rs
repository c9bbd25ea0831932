pub mod auth;
pub mod certificates;
pub mod courses;
pub mod internships;
pub mod placement;
pub mod projects;
pub mod users;

mod error;

pub use error::ApiError;

/// Issue a credentialed GET against the backend.
#[cfg(feature = "web")]
async fn get(url: &str) -> Result<reqwasm::http::Response, ApiError> {
    use reqwasm::http::{Request, RequestCredentials};

    Request::get(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))
}

/// Issue a credentialed POST with a JSON body.
#[cfg(feature = "web")]
async fn post_json<B: serde::Serialize>(
    url: &str,
    body: &B,
) -> Result<reqwasm::http::Response, ApiError> {
    use reqwasm::http::{Request, RequestCredentials};

    let body = serde_json::to_string(body).map_err(|e| ApiError::Parse(e.to_string()))?;

    Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))
}

/// Issue a credentialed PUT with a JSON body.
#[cfg(feature = "web")]
async fn put_json<B: serde::Serialize>(
    url: &str,
    body: &B,
) -> Result<reqwasm::http::Response, ApiError> {
    use reqwasm::http::{Request, RequestCredentials};

    let body = serde_json::to_string(body).map_err(|e| ApiError::Parse(e.to_string()))?;

    Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))
}

/// Issue a credentialed DELETE against the backend.
#[cfg(feature = "web")]
async fn delete(url: &str) -> Result<reqwasm::http::Response, ApiError> {
    use reqwasm::http::{Request, RequestCredentials};

    Request::delete(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))
}

/// Map a response into the expected JSON body.
#[cfg(feature = "web")]
async fn parse_json<T: serde::de::DeserializeOwned>(
    response: reqwasm::http::Response,
) -> Result<T, ApiError> {
    match response.status() {
        200 | 201 => response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string())),
        404 => Err(ApiError::NotFound),
        status => Err(error_from_response(status, response).await),
    }
}

/// Map a response into success or failure, discarding any body.
#[cfg(feature = "web")]
async fn parse_ok(response: reqwasm::http::Response) -> Result<(), ApiError> {
    match response.status() {
        200 | 201 => Ok(()),
        404 => Err(ApiError::NotFound),
        status => Err(error_from_response(status, response).await),
    }
}

#[cfg(feature = "web")]
async fn error_from_response(status: u16, response: reqwasm::http::Response) -> ApiError {
    use crate::model::api::ErrorDto;

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        ApiError::Status {
            status,
            message: error_dto.message,
        }
    } else {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        ApiError::Status { status, message }
    }
}
