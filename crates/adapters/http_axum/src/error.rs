//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hbnb_domain::error::{HbnbError, NotFoundError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Everything a handler can fail with, mapped to a status code on the way out.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by the application layer.
    Domain(HbnbError),
    /// The request body is missing or is not a JSON object.
    NotAJson,
    /// The body is an object whose values have the wrong types.
    InvalidBody(serde_json::Error),
    /// No route matches the request.
    NoRoute,
    /// The path exists but does not accept the request method.
    MethodNotAllowed,
}

impl From<HbnbError> for ApiError {
    fn from(err: HbnbError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self::Domain(err.into())
    }
}

fn not_found() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, "Not found".to_string())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(HbnbError::Validation(err)) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Domain(HbnbError::NotFound(err)) => {
                tracing::debug!(entity = err.entity, id = %err.id, "not found");
                not_found()
            }
            Self::Domain(HbnbError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::NotAJson => (StatusCode::BAD_REQUEST, "Not a JSON".to_string()),
            Self::InvalidBody(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::NoRoute => not_found(),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_name_missing_field_with_bad_request() {
        let err = ApiError::from(HbnbError::from(ValidationError::MissingField("email")));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing email");
    }

    #[tokio::test]
    async fn should_hide_not_found_details() {
        let err = ApiError::from(NotFoundError::new("State", "abc"));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");
    }

    #[tokio::test]
    async fn should_map_storage_failure_to_internal_error() {
        let err = ApiError::from(HbnbError::Storage(Box::new(std::io::Error::other("disk"))));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");
    }

    #[tokio::test]
    async fn should_answer_unsupported_method_with_json() {
        let (status, body) = render(ApiError::MethodNotAllowed).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "Method not allowed");
    }
}
