//! # Services Module
//!
//! External integrations and local persistence.
//!
//! ```text
//! services/
//! ├── api/        - Backend HTTP API client (auth, CRUD, dashboard)
//! └── session.rs  - Persisted bearer token + user record
//! ```
//!
//! `ApiClient` wraps `reqwest::Client` and is internally thread-safe: the app
//! stores it in an `Arc` inside `AppState` and clones the handle into spawned
//! request tasks. Session persistence is plain synchronous file I/O; it only
//! runs from event handlers on the UI thread, never inside request tasks.

pub mod api;
pub mod session;
