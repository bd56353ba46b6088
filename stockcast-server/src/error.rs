//! Startup failures and the request error type handlers return.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use stockcast::StockcastError;
use thiserror::Error;

/// Body of every error returned to clients for missing data.
pub const NO_DATA_FOUND: &str = "No data found";

/// Failures that stop the server from starting.
#[derive(Debug, Error)]
pub enum ServerError {
    /// An environment variable held an unusable value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The orchestrator or a connector could not be constructed.
    #[error(transparent)]
    Stockcast(#[from] StockcastError),

    /// Binding or serving the listener failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A request failure rendered as `{"error": message}` with a matching status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// 400 with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// HTTP status sent to the client.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Text placed in the `error` field.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<StockcastError> for ApiError {
    fn from(e: StockcastError) -> Self {
        let (status, message) = match e {
            StockcastError::InvalidArg(msg) => (StatusCode::BAD_REQUEST, msg),
            e @ (StockcastError::DataUnavailable { .. } | StockcastError::NotFound { .. }) => {
                tracing::debug!(error = %e, "no data for request");
                (StatusCode::NOT_FOUND, NO_DATA_FOUND.to_string())
            }
            StockcastError::InvalidData(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "request failed");
        } else {
            tracing::warn!(status = %self.status, error = %self.message, "request rejected");
        }
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}
