//! # Customer Tasks

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Fetch the customer list, carrying the current search term.
pub(crate) fn fetch_customers(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, search) = {
        let mut state = state.write();
        if state.customers.loading {
            return;
        }
        let (client, token) = match super::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.customers.loading = true;
        state.customers.search_pending = false;
        (client, token, state.customers.search.trim().to_string())
    };

    spawn(async move {
        let term = if search.is_empty() {
            None
        } else {
            Some(search.as_str())
        };
        let result = api_client.list_customers(&token, term).await;
        super::send_result(&event_tx, result, AppEvent::CustomersLoaded).await;
    });
}
