//! # Core Abstractions
//!
//! Foundational abstractions used throughout the desk application:
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`ApiService`)
//!
//! ## Error Handling
//!
//! All application errors use the centralized [`AppError`] type:
//!
//! ```rust
//! use desk::core::error::{AppError, Result};
//!
//! fn validate_input(input: &str) -> Result<String> {
//!     if input.is_empty() {
//!         return Err(AppError::Validation("Input cannot be empty".to_string()));
//!     }
//!     Ok(input.to_string())
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! [`ApiService`] abstracts the backend so tests can substitute mock
//! implementations:
//!
//! ```rust,ignore
//! // In production: the real HTTP client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new());
//!
//! // In tests: a mock returning canned responses
//! let api: Arc<dyn ApiService> = Arc::new(MockApiService::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
