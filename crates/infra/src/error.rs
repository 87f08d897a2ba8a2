//! Store error model and sqlx error mapping.

use thiserror::Error;

/// Error surfaced by the user/event stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint was violated (e.g. duplicate user email).
    #[error("duplicate key: {0}")]
    Duplicate(String),

    /// The referenced row does not exist.
    #[error("not found")]
    NotFound,

    /// Anything else the database reported.
    #[error("database error: {0}")]
    Database(String),
}

/// Map sqlx errors to `StoreError`.
///
/// PostgreSQL error code `23505` (unique violation) becomes `Duplicate`;
/// everything else is an opaque `Database` error to the caller.
pub(crate) fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let msg = format!("database error in {}: {}", operation, db_err.message());

            if db_err.code().as_deref() == Some("23505") {
                StoreError::Duplicate(msg)
            } else {
                StoreError::Database(msg)
            }
        }
        sqlx::Error::PoolClosed => {
            StoreError::Database(format!("connection pool closed in {}", operation))
        }
        _ => StoreError::Database(format!("sqlx error in {}: {}", operation, err)),
    }
}
