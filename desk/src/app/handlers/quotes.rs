//! # Quote Handlers
//!
//! Status filter, the quote builder, and the draft lifecycle actions
//! (save, send, convert, delete). Only one mutation runs at a time per
//! screen, guarded by `quotes.saving`.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::quotes::QuoteStatus;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, DocumentDraft};
use crate::app::tasks;
use crate::core::service::ApiService;

/// Change the status filter and refetch the list.
pub(crate) fn set_status_filter(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    filter: Option<QuoteStatus>,
) {
    {
        let mut state = state.write();
        if state.quotes.status_filter == filter {
            return;
        }
        state.quotes.status_filter = filter;
    }
    tasks::quotes::fetch_quotes(state, event_tx);
}

pub(crate) fn open_builder_new(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.quotes.builder = Some(DocumentDraft::new());
}

/// Reopen an existing quote in the builder. Only drafts are editable.
pub(crate) fn open_builder_edit(state: Arc<RwLock<AppState>>, id: i64) {
    let mut state = state.write();
    let draft = match state.quotes.items.iter().find(|q| q.id == id) {
        Some(quote) if quote.status == QuoteStatus::Draft => DocumentDraft::from_quote(quote),
        _ => return,
    };
    state.quotes.builder = Some(draft);
}

pub(crate) fn close_builder(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.quotes.builder = None;
}

/// Add the picker's product to the draft at the typed quantity.
pub(crate) fn handle_add_line(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let (product_id, quantity) = match state.quotes.builder.as_ref() {
        Some(builder) => match builder.picker_product {
            Some(id) => (id, builder.quantity_input.trim().parse::<i64>().unwrap_or(0)),
            None => return,
        },
        None => return,
    };
    if quantity < 1 {
        if let Some(builder) = state.quotes.builder.as_mut() {
            builder.error = Some("Quantity must be at least 1".to_string());
        }
        return;
    }
    let product = match state.products.items.iter().find(|p| p.id == product_id) {
        Some(product) => product.clone(),
        None => return,
    };
    if let Some(builder) = state.quotes.builder.as_mut() {
        builder.add_line(&product, quantity);
        builder.quantity_input = "1".to_string();
        builder.error = None;
    }
}

pub(crate) fn handle_line_quantity(state: Arc<RwLock<AppState>>, product_id: i64, quantity: i64) {
    let mut state = state.write();
    if let Some(builder) = state.quotes.builder.as_mut() {
        builder.set_quantity(product_id, quantity);
    }
}

pub(crate) fn handle_remove_line(state: Arc<RwLock<AppState>>, product_id: i64) {
    let mut state = state.write();
    if let Some(builder) = state.quotes.builder.as_mut() {
        builder.remove_line(product_id);
    }
}

/// Validate the open builder and start the create or update call.
pub(crate) fn handle_save_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, id, request) = {
        let mut state = state.write();
        if state.quotes.saving {
            return;
        }

        let (id, request) = match state.quotes.builder.as_mut() {
            Some(builder) => match builder.quote_request() {
                Ok(request) => {
                    builder.error = None;
                    (builder.id, request)
                }
                Err(message) => {
                    builder.error = Some(message);
                    return;
                }
            },
            None => return,
        };

        let (api_client, token) = match tasks::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.quotes.saving = true;
        (api_client, token, id, request)
    };

    tokio::spawn(async move {
        let result = match id {
            Some(id) => api_client.update_quote(&token, id, &request).await,
            None => api_client.create_quote(&token, &request).await,
        };
        tasks::send_result(&event_tx, result, AppEvent::QuoteSaved).await;
    });
}

/// Move a draft quote to Sent.
pub(crate) fn handle_send_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: i64) {
    let (api_client, token) = {
        let mut state = state.write();
        if state.quotes.saving {
            return;
        }
        let (api_client, token) = match tasks::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.quotes.saving = true;
        (api_client, token)
    };

    tokio::spawn(async move {
        let result = api_client.send_quote(&token, id).await;
        tasks::send_result(&event_tx, result, AppEvent::QuoteSaved).await;
    });
}

/// Convert a quote into a sale. The backend snapshots the quote's lines and
/// totals; the fold then jumps to the new sale.
pub(crate) fn handle_convert_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: i64,
) {
    let (api_client, token) = {
        let mut state = state.write();
        if state.quotes.saving {
            return;
        }
        let (api_client, token) = match tasks::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.quotes.saving = true;
        (api_client, token)
    };

    tokio::spawn(async move {
        let result = api_client.convert_quote(&token, id).await;
        tasks::send_result(&event_tx, result, AppEvent::QuoteConverted).await;
    });
}

pub(crate) fn request_delete(state: Arc<RwLock<AppState>>, id: i64) {
    let mut state = state.write();
    state.quotes.confirm_delete = Some(id);
}

pub(crate) fn cancel_delete(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.quotes.confirm_delete = None;
}

/// Start the delete for the quote the confirm dialog is showing.
pub(crate) fn handle_delete_confirmed(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, id) = {
        let mut state = state.write();
        if state.quotes.saving {
            return;
        }
        let id = match state.quotes.confirm_delete {
            Some(id) => id,
            None => return,
        };
        let (api_client, token) = match tasks::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.quotes.saving = true;
        (api_client, token, id)
    };

    tokio::spawn(async move {
        let result = api_client.delete_quote(&token, id).await.map(|_| id);
        tasks::send_result(&event_tx, result, AppEvent::QuoteDeleted).await;
    });
}
