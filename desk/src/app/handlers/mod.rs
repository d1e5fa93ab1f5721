//! # User Action Handlers
//!
//! Click and input handlers called from the UI layer. Each one validates
//! against current state, flips the relevant loading flag, and spawns the
//! network call; results come back through the event channel.

pub mod auth;
pub mod company;
pub mod customers;
pub mod navigation;
pub mod products;
pub mod quotes;
pub mod sales;
pub mod sellers;
pub mod settings;
