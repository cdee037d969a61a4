//! Shared primitives for all Rust crates in Guildhall.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across Guildhall crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Caller is not authenticated.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Caller is authenticated but blocked by authorization policy.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn forbidden_display_keeps_reason_message() {
        let error = AppError::Forbidden("not allowed".to_owned());
        assert_eq!(error.to_string(), "forbidden: not allowed");
    }

    #[test]
    fn internal_display_preserves_source_message() {
        let error = AppError::Internal("failed to load member: connection reset".to_owned());
        assert!(error.to_string().ends_with("connection reset"));
    }
}
