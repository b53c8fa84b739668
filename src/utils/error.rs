use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::utils::validation::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),

    /// Carries the raw path segment.
    #[error("Invalid event ID")]
    InvalidId(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Event not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Request timed out")]
    Timeout,

    #[error("{context}")]
    Database {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    /// Wraps a storage failure with the message shown to the client.
    pub fn database(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::Database { context, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidJson(_) | AppError::InvalidId(_) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::InvalidJson(e) => warn!(error = %e, "Rejected request body"),
            AppError::InvalidId(raw) => warn!(id = %raw, "Rejected event id"),
            AppError::Validation(reason) => warn!(%reason, "Validation failed"),
            AppError::NotFound | AppError::MethodNotAllowed | AppError::Timeout => {
                warn!(error = %self, "Client error")
            }
            AppError::Database { context, source } => {
                error!(error = ?source, %context, "Database error");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        // Display never includes sqlx details
        (self.status_code(), self.to_string()).into_response()
    }
}
