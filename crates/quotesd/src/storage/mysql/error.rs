//! MySQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `quotes_core::storage`.

use quotes_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - I/O, TLS, and pool availability errors → `RepositoryError::ConnectionFailed`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed(err.to_string()),
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
