//! # Product Tasks

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Fetch the product list, carrying the current search term.
///
/// Consumes the pending debounced search edit; the on-tick debounce and
/// direct screen-entry calls both land here.
pub(crate) fn fetch_products(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, search) = {
        let mut state = state.write();
        if state.products.loading {
            return;
        }
        let (client, token) = match super::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.products.loading = true;
        state.products.search_pending = false;
        (client, token, state.products.search.trim().to_string())
    };

    spawn(async move {
        let term = if search.is_empty() {
            None
        } else {
            Some(search.as_str())
        };
        let result = api_client.list_products(&token, term).await;
        super::send_result(&event_tx, result, AppEvent::ProductsLoaded).await;
    });
}

/// Fetch the category list for the product form picker. No guard flag;
/// this fires once when the screen first opens.
pub(crate) fn fetch_categories(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token) = {
        let state = state.read();
        match super::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        }
    };

    spawn(async move {
        let result = api_client.list_categories(&token).await;
        super::send_result(&event_tx, result, AppEvent::CategoriesLoaded).await;
    });
}
