//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use studyline_domain::StudylineError;

/// Error newtype that keeps conversions on the infrastructure side and can
/// be converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub StudylineError);

impl From<InfraError> for StudylineError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<StudylineError> for InfraError {
    fn from(value: StudylineError) -> Self {
        InfraError(value)
    }
}

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        let mapped = if err.is_timeout() {
            StudylineError::Network("request timed out".into())
        } else if err.is_connect() {
            StudylineError::Network(format!("connection failed: {err}"))
        } else if err.is_decode() {
            StudylineError::InvalidInput(format!("response body could not be decoded: {err}"))
        } else if err.is_builder() {
            StudylineError::Internal(format!("request could not be built: {err}"))
        } else {
            StudylineError::Network(err.to_string())
        };
        InfraError(mapped)
    }
}
