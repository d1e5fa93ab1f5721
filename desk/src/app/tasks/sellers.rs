//! # Seller Tasks

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Fetch the seller list.
pub(crate) fn fetch_sellers(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token) = {
        let mut state = state.write();
        if state.sellers.loading {
            return;
        }
        let auth = match super::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.sellers.loading = true;
        auth
    };

    spawn(async move {
        let result = api_client.list_sellers(&token).await;
        super::send_result(&event_tx, result, AppEvent::SellersLoaded).await;
    });
}
