//! # Screen Rendering
//!
//! One module per screen. Every screen renders from a cloned snapshot of
//! the state and reports user actions through the [`App`](crate::app::App)
//! delegates; none of them hold the state lock while calling a handler.

pub mod auth;
pub mod company;
pub mod customers;
pub mod dashboard;
pub mod products;
pub mod quotes;
pub mod sales;
pub mod sellers;
pub mod settings;
