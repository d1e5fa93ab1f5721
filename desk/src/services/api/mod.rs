//! # Backend API Client Module
//!
//! HTTP client for the sales/inventory backend REST API. One module per
//! endpoint group; every function takes `&ApiClient` plus the bearer token
//! where the endpoint requires auth, and returns `Result<T, String>` with a
//! user-facing message on failure.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports
//! ├── client.rs     - ApiClient struct, base URL, shared response parsing
//! ├── auth.rs       - Login, registration, logout, password reset
//! ├── dashboard.rs  - Read-only metrics aggregate
//! ├── products.rs   - Product CRUD + categories
//! ├── customers.rs  - Customer CRUD
//! ├── sellers.rs    - Seller CRUD
//! ├── quotes.rs     - Quote CRUD + send + convert-to-sale
//! ├── sales.rs      - Sale list/detail/create + pay/cancel
//! └── companies.rs  - Company profile read/update
//! ```

pub mod auth;
pub mod client;
pub mod companies;
pub mod customers;
pub mod dashboard;
pub mod products;
pub mod quotes;
pub mod sales;
pub mod sellers;

pub use client::ApiClient;
