//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the desktop client and the
//! backend REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration, and password-reset DTOs
//!   - **[`dto::catalog`]**: Products and categories
//!   - **[`dto::customers`]**, **[`dto::sellers`]**, **[`dto::company`]**: directory records
//!   - **[`dto::quotes`]**, **[`dto::sales`]**: documents with line items and totals
//!   - **[`dto::dashboard`]**: read-only server aggregates
//! - **[`money`]**: Integer-cents arithmetic shared by the quote and sale builders
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using default `serde` behavior:
//! - Field names are **snake_case** on both sides
//! - Monetary amounts are **integer cents**, percentages are **basis points**
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage in the Client
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, AuthResponse};
//!
//! let request = LoginRequest {
//!     email: "alice@acme.test".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: AuthResponse = reqwest::Client::new()
//!     .post("http://localhost:3001/api/auth/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```
//!
//! ## Totals
//!
//! Quote and sale totals are recomputed client-side while the user edits a
//! document, through [`money::Totals`], and authoritatively by the backend on
//! save. Both run the same integer formula, so the preview never disagrees
//! with the stored record.

pub mod dto;
pub mod money;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use money::{Money, Totals};
