//! Maps domain `AppError` to HTTP responses.
//!
//! Route bodies are plain text in the reference wording: missing
//! parameters surface their message verbatim, while malformed input and
//! absent data are prefixed with `Invalid data: `.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use pulse_core::error::{AppError, ErrorKind};

/// Error type returned by all Pulse handlers.
#[derive(Debug)]
pub enum ApiError {
    /// A domain error, mapped by its kind.
    App(AppError),
    /// A 400 with a route-specific verbatim body.
    BadRequest(String),
}

impl ApiError {
    /// A 400 response whose body is exactly `message`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::App(err) => match err.kind {
                ErrorKind::MissingParameter => (StatusCode::BAD_REQUEST, err.message),
                ErrorKind::MalformedInput | ErrorKind::NotFound | ErrorKind::NoSessions => (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid data: {}", err.message),
                ),
                ErrorKind::Configuration | ErrorKind::Internal => {
                    tracing::error!(error = %err, "Internal server error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> (StatusCode, String) {
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_missing_parameter_body_is_verbatim() {
        let response =
            ApiError::from(AppError::missing_parameter("Missing parameters")).into_response();
        let (status, body) = body_of(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Missing parameters");
    }

    #[tokio::test]
    async fn test_not_found_body_gets_invalid_data_prefix() {
        let response =
            ApiError::from(AppError::not_found("No sessions found for user")).into_response();
        let (status, body) = body_of(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid data: No sessions found for user");
    }

    #[tokio::test]
    async fn test_bad_request_body_is_verbatim() {
        let response = ApiError::bad_request("Invalid number format for days").into_response();
        let (status, body) = body_of(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid number format for days");
    }

    #[tokio::test]
    async fn test_internal_is_masked() {
        let response = ApiError::from(AppError::internal("secret detail")).into_response();
        let (status, body) = body_of(response).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Internal server error");
    }
}
