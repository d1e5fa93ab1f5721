//! # Reusable UI Components
//!
//! Shared widgets used across screens: form fields, data tables, metric
//! cards, the builder pieces, the navigation bar, toasts, and the status bar.

pub mod builder;
pub mod forms;
pub mod metric_card;
pub mod nav_bar;
pub mod notifications;
pub mod status_bar;
pub mod tables;
