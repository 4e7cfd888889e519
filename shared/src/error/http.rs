//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::CompanyNotFound | Self::EmployeeNotFound => {
                StatusCode::NOT_FOUND
            }

            // 401 Unauthorized — wrong unlock code is retryable immediately
            Self::AccessDenied => StatusCode::UNAUTHORIZED,

            // 503 Service Unavailable — assistant credential missing
            Self::AssistantNotConfigured => StatusCode::SERVICE_UNAVAILABLE,

            // 502 Bad Gateway — assistant upstream failed
            Self::AssistantUpstream => StatusCode::BAD_GATEWAY,

            // 500 Internal Server Error
            Self::InternalError | Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::CompanyNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::EmployeeNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_access_denied_status() {
        assert_eq!(
            ErrorCode::AccessDenied.http_status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_assistant_statuses() {
        assert_eq!(
            ErrorCode::AssistantNotConfigured.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorCode::AssistantUpstream.http_status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::RequiredField.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::EmployeeIdMismatch.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
