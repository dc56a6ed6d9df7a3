//! HTTP error mapping

use super::dto::ErrorResponse;
use crate::contract::SettingsError;
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

impl ErrorResponse {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            status: status.as_u16(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP error responses
pub fn map_domain_error(error: SettingsError) -> ErrorResponse {
    match error {
        SettingsError::Forbidden { message } => {
            ErrorResponse::new(StatusCode::FORBIDDEN, "rest_forbidden", message)
        }

        SettingsError::Validation { message } => {
            ErrorResponse::new(StatusCode::BAD_REQUEST, "rest_invalid_param", message)
        }

        e @ SettingsError::PayloadTooLarge { .. } => ErrorResponse::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            "rest_payload_too_large",
            e.to_string(),
        ),

        SettingsError::StoreWrite { message } => ErrorResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_write_failed",
            message,
        ),

        SettingsError::Transport { message } => {
            tracing::error!("Transport error inside request handling: {}", message);
            ErrorResponse::new(StatusCode::BAD_GATEWAY, "transport_error", message)
        }

        SettingsError::Internal => ErrorResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "An unexpected error occurred",
        ),
    }
}

/// Implement From<SettingsError> so `?` works in handlers
impl From<SettingsError> for ErrorResponse {
    fn from(e: SettingsError) -> Self {
        map_domain_error(e)
    }
}

/// Body extraction failures, e.g. a body over the configured limit
impl From<BytesRejection> for ErrorResponse {
    fn from(rejection: BytesRejection) -> Self {
        let status = rejection.status();
        let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
            "rest_payload_too_large"
        } else {
            "rest_invalid_param"
        };
        tracing::warn!(%status, "request body rejected");
        ErrorResponse::new(status, code, rejection.body_text())
    }
}
