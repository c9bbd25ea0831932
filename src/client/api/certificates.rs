use super::ApiError;
use crate::model::certificate::{CertificateDto, CertificateRequestDto};

/// Retrieve the signed-in user's certificates from API.
#[cfg(feature = "web")]
pub async fn get_my_certificates() -> Result<Vec<CertificateDto>, ApiError> {
    let response = super::get("/api/certificates/my-certs").await?;
    super::parse_json(response).await
}

/// Ask the backend to render a certificate PDF for a completed course,
/// returning the record with its download link.
#[cfg(feature = "web")]
pub async fn generate_certificate(
    request: &CertificateRequestDto,
) -> Result<CertificateDto, ApiError> {
    let response = super::post_json("/api/certificates/generate", request).await?;
    super::parse_json(response).await
}
