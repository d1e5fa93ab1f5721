//! # Data Transfer Objects (DTOs)
//!
//! All structures exchanged with the backend REST API. The client holds
//! ephemeral, non-authoritative copies of these records, fetched per screen;
//! identity and lifecycle belong entirely to the backend.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, password reset, error body
//! - [`catalog`] - Products and categories
//! - [`customers`] - Customer records
//! - [`sellers`] - Sellers with commission basis points
//! - [`quotes`] - Quotes, line items, status enum
//! - [`sales`] - Sales, payment methods, status enum
//! - [`company`] - Company profile
//! - [`dashboard`] - Read-only server aggregates
//! - [`sync`] - Declared sync summary (no engine consumes it yet)
//!
//! ## Serialization Format
//!
//! Everything is JSON via `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Money**: integer cents (`price_cents`, `total_cents`)
//! - **Percentages**: basis points (`discount_bps`, `commission_bps`)
//! - **Status enums**: lowercase strings via `#[serde(rename_all = "lowercase")]`
//! - **Timestamps**: RFC 3339 strings
//!
//! ## Example Request/Response Pair
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@acme.test",
//!   "password": "MyPassword123"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "user": {
//!     "id": 7,
//!     "name": "Alice",
//!     "email": "alice@acme.test",
//!     "role": "owner",
//!     "company_id": 3,
//!     "created_at": "2024-01-01T00:00:00Z"
//!   },
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "message": "Login successful"
//! }
//! ```

pub mod auth;
pub mod catalog;
pub mod company;
pub mod customers;
pub mod dashboard;
pub mod quotes;
pub mod sales;
pub mod sellers;
pub mod sync;

pub use auth::*;
pub use catalog::*;
pub use company::*;
pub use customers::*;
pub use dashboard::*;
pub use quotes::*;
pub use sales::*;
pub use sellers::*;
pub use sync::*;
