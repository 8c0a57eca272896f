use sqlx::error::{DatabaseError, ErrorKind};

use business::domain::errors::RepositoryError;

/// Maps a driver error onto the repository port's error type.
///
/// Unique violations surface as `Duplicated` so the service can report the
/// offending code even when a concurrent insert slipped past its pre-check.
pub fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    if matches!(error, sqlx::Error::RowNotFound) {
        return RepositoryError::not_found();
    }

    match error.as_database_error().map(DatabaseError::kind) {
        Some(ErrorKind::UniqueViolation) => RepositoryError::duplicated(),
        _ => {
            tracing::error!(error = %error, "database operation failed");
            RepositoryError::database_error()
        }
    }
}
