//! Global Tokio runtime for async HTTP operations.
//!
//! egui's frame loop is synchronous, but reqwest requires a tokio runtime.
//! `main` enters this runtime once so `tokio::spawn` works from any UI
//! handler; spawned tasks report back over the app's event channel instead
//! of touching the UI directly.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
