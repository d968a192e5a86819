use thiserror::Error;

use internlink_core::AppError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness rule was violated; the message is client-facing.
    #[error("{0}")]
    Conflict(String),

    /// A referenced row does not exist; the message is client-facing.
    #[error("{0}")]
    MissingReference(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

impl StoreError {
    /// Maps constraint violations to their client-facing variants.
    pub(crate) fn from_sqlx(err: sqlx::Error, conflict: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::Conflict(conflict.to_string());
            }
            if db_err.is_foreign_key_violation() {
                return StoreError::MissingReference("Referenced record not found".to_string());
            }
        }
        StoreError::Database(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => AppError::conflict(err),
            StoreError::MissingReference(_) => AppError::not_found(err),
            StoreError::Database(_) | StoreError::Migrate(_) => AppError::internal(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use internlink_core::ErrorKind;

    #[test]
    fn test_conflict_becomes_conflict_kind() {
        let err: AppError = StoreError::Conflict("Student already exists".to_string()).into();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message(), "Student already exists");
    }

    #[test]
    fn test_database_errors_are_unexpected() {
        let err: AppError = StoreError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.kind, ErrorKind::Unexpected);
    }

    #[test]
    fn test_non_database_errors_pass_through() {
        let err = StoreError::from_sqlx(sqlx::Error::RowNotFound, "ignored");
        assert!(matches!(err, StoreError::Database(sqlx::Error::RowNotFound)));
    }
}
