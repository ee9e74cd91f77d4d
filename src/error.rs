use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;

/// The single user-facing analyzer failure text. Network errors, non-OK
/// proxy statuses, and malformed proxy bodies all collapse into this one
/// message; the cause is only logged.
pub const ANALYZE_FAILED_MESSAGE: &str =
    "Failed to analyze the website. Please check the URL and try again.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{}", ANALYZE_FAILED_MESSAGE)]
    AnalyzeFailed(anyhow::Error),
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BadRequest".to_string(), msg),
            AppError::AnalyzeFailed(err) => {
                tracing::warn!(error = ?err, "analyze failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "AnalyzeFailed".to_string(),
                    ANALYZE_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal".to_string(),
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorBody {
            error: ErrorDetail { code, message },
        });

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
