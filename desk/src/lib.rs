//! # SalesDesk - Library Root
//!
//! A **native desktop GUI** for small-business sales and inventory management.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Product Catalog**: Searchable inventory with categories, prices, stock
//! - **Customers & Sellers**: Contact records and commissioned sales staff
//! - **Quotes**: Draft, send, and convert quotes into sales
//! - **Sales**: Direct sales, payment tracking, cancellation with stock restore
//! - **Dashboard**: Revenue, pending sales, and low-stock metrics at a glance
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                 desk (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  egui-notify   - Toast notifications                   │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  shared        - DTOs and money arithmetic             │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (bearer token)
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! │  (REST server)  │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state and screen management
//!   - Core orchestrator of the GUI
//!   - Event-driven architecture with async tasks
//!   - Screen navigation and per-screen state
//!
//! - **services**: External integrations
//!   - `api`: Backend HTTP client (auth, catalog, quotes, sales, company)
//!   - `session`: Persisted login session on disk
//!
//! - **ui**: Rendering framework
//!   - `screens`: Screen-specific rendering (auth, dashboard, products, ...)
//!   - `widgets`: Reusable components (forms, tables, nav bar, toasts)
//!   - `theme`: Color palette and styling
//!
//! - **core**: Error types shared across the crate
//!
//! - **debug**: File-based structured logging
//!
//! - **utils**: Formatting, input parsing, validation, Tokio runtime
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! The application uses **async channels** for communication:
//! - Main thread: Handles input and rendering (single-threaded)
//! - Async tasks: Network requests against the backend (multi-threaded)
//!
//! Events flow from async tasks back to the main thread via the `AppEvent`
//! enum and are drained once per frame in `App::on_tick()`.
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`:
//! - **Thread-safe**: Multiple readers, exclusive writers
//! - **Shared**: Accessible from async tasks
//! - **Locked briefly**: Rendering works from a cloned snapshot
//!
//! ## Usage
//!
//! ### As a Binary
//!
//! ```bash
//! cargo run --bin desk
//! ```
//!
//! ### As a Library (for testing)
//!
//! ```rust,no_run
//! use desk::app::{App, Screen};
//!
//! let app = App::new();
//! let state = app.state.read();
//! assert_eq!(state.current_screen, Screen::Auth);
//! ```
//!
//! ## Testing
//!
//! Run all tests:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Run specific module tests:
//! ```bash
//! cargo test --lib app::tests
//! cargo test --lib utils::format::tests
//! ```

// Re-export main modules for testing and integration
pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use core::{AppError, Result};
