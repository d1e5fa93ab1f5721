//! # Quote Tasks

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Fetch the quote list with the screen's current status filter.
pub(crate) fn fetch_quotes(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, status) = {
        let mut state = state.write();
        if state.quotes.loading {
            return;
        }
        let (client, token) = match super::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.quotes.loading = true;
        (client, token, state.quotes.status_filter)
    };

    spawn(async move {
        let result = api_client.list_quotes(&token, status).await;
        super::send_result(&event_tx, result, AppEvent::QuotesLoaded).await;
    });
}
