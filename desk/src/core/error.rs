//! # Common Error Types
//!
//! Consolidated error handling for the desk application.
//!
//! This module provides a centralized error type [`AppError`] that covers all
//! error scenarios in the client.
//!
//! ## Error Categories
//! Errors are categorized by their source:
//!
//! - **Api**: Backend API communication errors (network, HTTP, JSON parsing)
//! - **State**: Application state management errors (lock failures, invalid state)
//! - **Validation**: Input validation errors (invalid format, missing fields)
//! - **Io** / **Serde**: Local persistence errors (session and config files)
//!
//! ## Usage Pattern
//!
//! ```rust
//! use desk::core::error::AppError;
//!
//! fn validate_quantity(quantity: i64) -> Result<i64, AppError> {
//!     if quantity < 1 {
//!         return Err(AppError::Validation("Quantity must be at least 1".to_string()));
//!     }
//!     Ok(quantity)
//! }
//! ```
//!
//! ## Error Conversion
//!
//! Common error types automatically convert to `AppError`:
//!
//! - `String` / `&str` → `AppError::Api`
//! - `std::io::Error` → `AppError::Io`
//! - `serde_json::Error` → `AppError::Serde`

use thiserror::Error;

/// Application-wide error type.
///
/// Each variant carries a descriptive message; the `#[error]` attribute from
/// `thiserror` provides the `Display` and `Error` implementations.
///
/// # Example
///
/// ```rust
/// use desk::core::error::AppError;
///
/// let api_err = AppError::Api("Connection timeout".to_string());
/// let validation_err = AppError::Validation("Email is required".to_string());
///
/// assert_eq!(api_err.to_string(), "API error: Connection timeout");
/// assert_eq!(validation_err.to_string(), "Validation error: Email is required");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error: network failures, non-2xx statuses,
    /// or malformed response bodies.
    #[error("API error: {0}")]
    Api(String),

    /// Application state management error, e.g. an operation attempted in a
    /// state that cannot accept it.
    #[error("State error: {0}")]
    State(String),

    /// User input rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Local file I/O failure while reading or writing the session or
    /// config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure while persisting local files.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// ```rust
/// use desk::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_category() {
        assert_eq!(
            AppError::State("lock contention".to_string()).to_string(),
            "State error: lock contention"
        );
        assert_eq!(
            AppError::from("backend offline").to_string(),
            "API error: backend offline"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = io_err.into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
