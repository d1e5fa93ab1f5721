//! # Utility Functions
//!
//! Shared utility functions used across the desk application.
//!
//! ## Modules
//!
//! - **[`validation`]**: Input validation utilities (email, password, quantities)
//! - **[`format`]**: Money/percent/date display formatting and input parsing
//! - **[`runtime`]**: Global Tokio runtime the UI thread enters at startup

pub mod format;
pub mod runtime;
pub mod validation;
