//! Domain-error-to-HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use studyline_domain::StudylineError;
use tracing::error;

/// Wrapper so handlers can return `Result<_, ApiError>` with `?` over
/// domain errors.
#[derive(Debug)]
pub struct ApiError(pub StudylineError);

impl From<StudylineError> for ApiError {
    fn from(value: StudylineError) -> Self {
        Self(value)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            StudylineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            StudylineError::NotFound(_) => StatusCode::NOT_FOUND,
            StudylineError::Network(_) => StatusCode::BAD_GATEWAY,
            StudylineError::Config(_) | StudylineError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }
        // StudylineError serializes as {"type": ..., "message": ...}
        (status, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_covers_taxonomy() {
        let cases = [
            (StudylineError::InvalidInput("m".into()), StatusCode::BAD_REQUEST),
            (StudylineError::NotFound("m".into()), StatusCode::NOT_FOUND),
            (StudylineError::Network("m".into()), StatusCode::BAD_GATEWAY),
            (StudylineError::Config("m".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (StudylineError::Internal("m".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError(err).status(), expected);
        }
    }

    #[test]
    fn body_is_tagged_json() {
        let json = serde_json::to_value(StudylineError::NotFound("course c1".into())).unwrap();
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "course c1");
    }
}
