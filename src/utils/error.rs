use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use tracing::error;

pub const STORE_UNAVAILABLE_DETAIL: &str = "Database connection failed. Please try again later.";

#[derive(Debug)]
pub enum AppError {
    /// The store could not be reached: refused, timed out, or the pool is gone.
    StoreUnavailable(sqlx::Error),
    Validation(String),
    Internal(anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Whether a store error means the database itself is unreachable rather than a
/// failing statement.
pub fn is_store_unavailable(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if is_store_unavailable(&err) {
            AppError::StoreUnavailable(err)
        } else {
            AppError::Internal(err.into())
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::StoreUnavailable(e) => write!(f, "database unavailable: {}", e),
            AppError::Validation(message) => write!(f, "{}", message),
            AppError::Internal(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            AppError::StoreUnavailable(e) => {
                error!("Database error: {}", e);
                STORE_UNAVAILABLE_DETAIL.to_string()
            }
            AppError::Validation(message) => message.clone(),
            AppError::Internal(e) => {
                error!("Unhandled error: {:#}", e);
                "Internal Server Error".to_string()
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
