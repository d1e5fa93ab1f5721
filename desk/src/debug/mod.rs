//! # Logging Infrastructure
//!
//! File-based structured logging for the desktop app. Logs rotate daily
//! under `./logs/` and are written through a non-blocking channel so render
//! frames never block on disk I/O.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `SALESDESK_LOG`: filter directives (default `info,desk=debug`)
//! - `SALESDESK_LOG_DIR`: log directory (default `logs`)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;

/// Initialize logging. Call once at startup, before any other operations.
pub fn init() {
    init_logger();
}
