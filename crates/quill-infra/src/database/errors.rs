//! Classification of SeaORM errors into repository errors.

use sea_orm::{DbErr, SqlErr};

use quill_core::RepoError;

/// Messages Postgres and SQLite use when a table has not been created.
const MISSING_RELATION: [&str; 2] = ["does not exist", "no such table"];

pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        other => {
            let msg = other.to_string();
            if MISSING_RELATION.iter().any(|m| msg.contains(m)) {
                tracing::error!(error = %msg, "Table missing - have migrations run?");
                RepoError::Unavailable(msg)
            } else {
                RepoError::Query(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn test_missing_table_is_unavailable() {
        let err = DbErr::Query(RuntimeErr::Internal(
            "relation \"authors\" does not exist".into(),
        ));
        assert!(matches!(map_db_err(err), RepoError::Unavailable(_)));
    }

    #[test]
    fn test_not_updated_is_not_found() {
        assert!(matches!(
            map_db_err(DbErr::RecordNotUpdated),
            RepoError::NotFound
        ));
    }

    #[test]
    fn test_other_errors_are_query_errors() {
        let err = DbErr::Query(RuntimeErr::Internal("syntax error".into()));
        assert!(matches!(map_db_err(err), RepoError::Query(_)));
    }
}
