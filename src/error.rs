//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message surfaced to callers once a request has exhausted its retries.
pub const GENERIC_REQUEST_ERROR: &str = "Something happened with request, please try again later";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid server base path '{value}': {reason}")]
    InvalidBasePath { value: String, reason: String },
    #[error("invalid value for {key}: '{value}'")]
    InvalidSetting { key: &'static str, value: String },
    #[error("validation: {0}")]
    Validation(String),
}

/// Errors observed by callers of [`crate::client::RestClient`].
///
/// Transport and server failures are collapsed into `RequestFailed`; the
/// status code and response body only reach the log.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{}", GENERIC_REQUEST_ERROR)]
    RequestFailed,
    #[error("response body could not be decoded: {0}")]
    Decode(String),
    #[error("request body could not be encoded: {0}")]
    Encode(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Upstream(#[from] ClientError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, "upstream_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        };
        let message = match &self {
            AppError::Upstream(_) => GENERIC_REQUEST_ERROR.to_string(),
            _ => self.to_string(),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: None,
            },
        };
        (status, Json(body)).into_response()
    }
}
