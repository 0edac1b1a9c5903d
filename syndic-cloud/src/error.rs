//! Service-level error bridge
//!
//! Workflow functions in `db::` return [`ServiceError`] so handlers can use
//! plain `?`. Business failures carry their own [`AppError`] code through
//! unchanged; storage failures are logged server-side and surface as the
//! generic database code, never with internal detail attached.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage or infrastructure failure (sqlx, hashing, serde)
    #[error("storage error: {0}")]
    Db(#[from] BoxError),
    /// Business-rule failure, already carrying its user-facing code
    #[error(transparent)]
    App(#[from] AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// True when a sqlx error is a UNIQUE constraint violation.
///
/// The workflow layer treats the constraint, not a pre-check, as the
/// authoritative duplicate-email signal and maps it to
/// [`ErrorCode::DuplicateEmail`].
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
