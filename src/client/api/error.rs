use thiserror::Error;

/// Failure raised by a backend call. Kept cloneable so screens can hold it in
/// state and re-render from it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Request(String),
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Not found")]
    NotFound,
}

impl ApiError {
    /// Text suitable for inline display next to the control that triggered
    /// the call. Backend-provided detail for status failures, a generic
    /// retry phrase for transport and decode failures.
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::NotFound => "Not found".to_string(),
            ApiError::Request(_) | ApiError::Parse(_) => {
                "Something went wrong. Please try again later.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test message extraction from a status failure.
    ///
    /// Expected: the backend-provided message is surfaced unchanged.
    #[test]
    fn status_failure_surfaces_backend_message() {
        let error = ApiError::Status {
            status: 409,
            message: "You have already applied to this job".to_string(),
        };

        assert_eq!(error.message(), "You have already applied to this job");
    }

    /// Test message extraction from transport and decode failures.
    ///
    /// Expected: both map to the generic retry phrase rather than leaking
    /// internals to the user.
    #[test]
    fn transport_failures_use_generic_message() {
        let request = ApiError::Request("connection refused".to_string());
        let parse = ApiError::Parse("missing field `title`".to_string());

        assert_eq!(
            request.message(),
            "Something went wrong. Please try again later."
        );
        assert_eq!(request.message(), parse.message());
    }
}
