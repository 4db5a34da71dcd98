use business::domain::errors::RepositoryError;

const UNIQUE_VIOLATION: &str = "23505";

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION))
}

/// Collapses a driver error into a `RepositoryError`. The driver detail is
/// logged here and never leaves the adapter.
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    if is_unique_violation(&err) {
        return RepositoryError::Duplicated;
    }
    match err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        other => {
            tracing::error!(target: "persistence", "database error: {}", other);
            RepositoryError::DatabaseError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_row_to_not_found() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            RepositoryError::NotFound
        ));
    }

    #[test]
    fn should_hide_other_driver_errors() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);

        assert!(matches!(err, RepositoryError::DatabaseError));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
    }
}
