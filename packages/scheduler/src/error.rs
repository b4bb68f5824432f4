use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by contest creation and recurring generation.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Rejected before any state was written. Never retried automatically.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Contest not found: {0}")]
    ContestNotFound(i32),

    /// Persistence failure. A failed generation leaves its row due, so the
    /// next sweep retries it.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
