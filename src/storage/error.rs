use sea_orm::{sqlx, DbErr, RuntimeErr, SqlErr};

/// SQLite extended result code for `SQLITE_CONSTRAINT_NOTNULL`.
const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(DbErr),
}

/// `sql_err()` has no variant for NOT NULL, so read the driver's code directly.
fn is_not_null_violation(err: &DbErr) -> bool {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e))) => {
            e.code().as_deref() == Some(SQLITE_CONSTRAINT_NOTNULL)
        }
        _ => false,
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err {
            // `before_save` hooks report rejected fields as DbErr::Custom.
            DbErr::Custom(msg) => StoreError::Validation(msg),
            err if is_not_null_violation(&err) => StoreError::Validation(err.to_string()),
            err => match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(msg))
                | Some(SqlErr::UniqueConstraintViolation(msg)) => StoreError::Validation(msg),
                _ => StoreError::Db(err),
            },
        }
    }
}
