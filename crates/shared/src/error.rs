//! Error values shared by the dataset loader, the callback dispatcher and the
//! HTTP layer. `ApiError` is what goes over the wire; `ApiException` is the
//! `std::error::Error` form raised by domain constructors such as
//! `PayloadRange::new`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure category of an update request. The HTTP layer maps each one to a
/// status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No callback is registered for the requested output.
    NotFound,
    /// An input value is missing or does not decode into its domain type.
    Validation,
    /// The registry and a handler disagree about their inputs.
    Internal,
}

/// JSON body returned for every failed `/api/update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("{message}")]
pub struct ApiException {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiException {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Validation,
            message: message.into(),
        }
    }
}

impl From<ApiException> for ApiError {
    fn from(value: ApiException) -> Self {
        Self::new(value.code, value.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_body_uses_snake_case_codes() {
        let body = serde_json::to_value(ApiError::not_found("no callback produces x.figure"))
            .expect("json");
        assert_eq!(
            body,
            json!({ "code": "not_found", "message": "no callback produces x.figure" })
        );
    }

    #[test]
    fn exception_displays_bare_message() {
        let err = ApiException::validation("payload range bounds must be finite");
        assert_eq!(err.to_string(), "payload range bounds must be finite");
    }

    #[test]
    fn exception_converts_to_validation_body() {
        let body: ApiError = ApiException::validation("bad slider").into();
        assert_eq!(body, ApiError::validation("bad slider"));
    }
}
