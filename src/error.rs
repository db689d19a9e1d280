use std::path::PathBuf;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("todo not found: {0}")]
    NotFound(String),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("failed to parse {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // NotFound -> 404, bad body -> 400, anything touching the file -> 500
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Persistence { .. } | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::NotFound(_) => status.into_response(),
            Self::InvalidBody(detail) => {
                tracing::debug!(%detail, "rejected request body");
                (
                    status,
                    Json(serde_json::json!({ "error": "invalid request body" })),
                )
                    .into_response()
            }
            other => {
                // Detail stays in the log; clients only see a generic message.
                tracing::error!(error = %other, "request failed");
                (
                    status,
                    Json(serde_json::json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
