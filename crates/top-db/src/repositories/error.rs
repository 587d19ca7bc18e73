//! Error handling utilities for repositories

use sqlx::error::ErrorKind;
use sqlx::Error as SqlxError;
use top_core::error::DomainError;

/// Convert SQLx error to DomainError.
///
/// Integrity violations (unique, not-null, check, foreign key) become
/// `ConstraintViolation` carrying the constraint name; everything else is a
/// `StoreError`.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
            | ErrorKind::ForeignKeyViolation => {
                let constraint = db_err
                    .constraint()
                    .map_or_else(|| db_err.message().to_string(), str::to_string);
                return DomainError::ConstraintViolation { constraint };
            }
            _ => {}
        }
    }
    DomainError::StoreError(e.to_string())
}
