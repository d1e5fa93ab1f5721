//! # Sale Tasks

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Fetch the sale list with the screen's current status filter.
pub(crate) fn fetch_sales(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, status) = {
        let mut state = state.write();
        if state.sales.loading {
            return;
        }
        let (client, token) = match super::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.sales.loading = true;
        (client, token, state.sales.status_filter)
    };

    spawn(async move {
        let result = api_client.list_sales(&token, status).await;
        super::send_result(&event_tx, result, AppEvent::SalesLoaded).await;
    });
}

/// Fetch one sale for the detail view.
pub(crate) fn fetch_sale(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: i64) {
    let (api_client, token) = {
        let mut state = state.write();
        if state.sales.detail_loading {
            return;
        }
        let auth = match super::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.sales.detail_loading = true;
        auth
    };

    spawn(async move {
        let result = api_client.get_sale(&token, id).await;
        super::send_result(&event_tx, result, AppEvent::SaleLoaded).await;
    });
}
