//! Typed error type for repository operations.

use crate::domain::FieldError;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    /// A foreign-key, not-null, unique or check constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// A random parent row was requested from an empty table.
    #[error("no rows in {table} to reference")]
    NoParentRows { table: &'static str },

    #[error("stored date is not ISO-8601: {value}")]
    CorruptDate { value: String },

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::CheckViolation => {
                    return RepoError::ConstraintViolation(db_err.message().to_string());
                }
                _ => {}
            }
        }
        RepoError::Database(err)
    }
}

impl From<FieldError> for RepoError {
    fn from(err: FieldError) -> Self {
        RepoError::InvalidField {
            field: err.field,
            reason: err.reason,
        }
    }
}
