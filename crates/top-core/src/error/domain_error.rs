//! Domain errors - failures reported by the store port

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A uniqueness, not-null or check constraint rejected the write
    #[error("Constraint violation on {constraint}")]
    ConstraintViolation { constraint: String },

    #[error("Database error: {0}")]
    StoreError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConstraintViolation { .. } => "CONSTRAINT_VIOLATION",
            Self::StoreError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}
