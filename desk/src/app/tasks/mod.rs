//! # Async Tasks
//!
//! Background fetch tasks for every list and detail screen. Each task
//! snapshots the API client and bearer token under a short lock, flips the
//! screen's loading flag, and spawns the request; the result comes back as
//! an [`AppEvent`] on the channel.

use std::sync::Arc;

use async_channel::Sender;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::services::api::client::is_unauthorized;
use crate::services::api::ApiClient;

pub mod company;
pub mod customers;
pub mod dashboard;
pub mod products;
pub mod quotes;
pub mod sales;
pub mod sellers;

/// Clone the API client and bearer token out of locked state, or `None`
/// when signed out.
pub(crate) fn auth_snapshot(state: &AppState) -> Option<(Arc<ApiClient>, String)> {
    match (&state.api_client, &state.auth_token) {
        (Some(client), Some(token)) => Some((client.clone(), token.clone())),
        _ => None,
    }
}

/// Send the task's result as `event`, except for a rejected bearer token,
/// which becomes [`AppEvent::SessionExpired`] so the fold can drop the
/// session once instead of in every entity handler.
pub(crate) async fn send_result<T>(
    event_tx: &Sender<AppEvent>,
    result: Result<T, String>,
    event: impl FnOnce(Result<T, String>) -> AppEvent,
) {
    match result {
        Err(err) if is_unauthorized(&err) => {
            let _ = event_tx.send(AppEvent::SessionExpired(err)).await;
        }
        other => {
            let _ = event_tx.send(event(other)).await;
        }
    }
}
