//! # Sale Handlers
//!
//! Status filter, the direct-sale builder, the detail pane, and the pay and
//! cancel actions. Sales are never edited after creation; pay and cancel
//! are the only transitions, and cancel asks for confirmation first.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::sales::SaleStatus;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, DocumentDraft};
use crate::app::tasks;
use crate::core::service::ApiService;

/// Change the status filter and refetch the list.
pub(crate) fn set_status_filter(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    filter: Option<SaleStatus>,
) {
    {
        let mut state = state.write();
        if state.sales.status_filter == filter {
            return;
        }
        state.sales.status_filter = filter;
    }
    tasks::sales::fetch_sales(state, event_tx);
}

pub(crate) fn open_builder_new(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.sales.builder = Some(DocumentDraft::new());
}

pub(crate) fn close_builder(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.sales.builder = None;
}

/// Add the picker's product to the draft at the typed quantity.
pub(crate) fn handle_add_line(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let (product_id, quantity) = match state.sales.builder.as_ref() {
        Some(builder) => match builder.picker_product {
            Some(id) => (id, builder.quantity_input.trim().parse::<i64>().unwrap_or(0)),
            None => return,
        },
        None => return,
    };
    if quantity < 1 {
        if let Some(builder) = state.sales.builder.as_mut() {
            builder.error = Some("Quantity must be at least 1".to_string());
        }
        return;
    }
    let product = match state.products.items.iter().find(|p| p.id == product_id) {
        Some(product) => product.clone(),
        None => return,
    };
    if let Some(builder) = state.sales.builder.as_mut() {
        builder.add_line(&product, quantity);
        builder.quantity_input = "1".to_string();
        builder.error = None;
    }
}

pub(crate) fn handle_line_quantity(state: Arc<RwLock<AppState>>, product_id: i64, quantity: i64) {
    let mut state = state.write();
    if let Some(builder) = state.sales.builder.as_mut() {
        builder.set_quantity(product_id, quantity);
    }
}

pub(crate) fn handle_remove_line(state: Arc<RwLock<AppState>>, product_id: i64) {
    let mut state = state.write();
    if let Some(builder) = state.sales.builder.as_mut() {
        builder.remove_line(product_id);
    }
}

/// Validate the open builder and start the create call. Sales have no
/// update path, so `builder.id` is never consulted here.
pub(crate) fn handle_create_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, request) = {
        let mut state = state.write();
        if state.sales.saving {
            return;
        }

        let request = match state.sales.builder.as_mut() {
            Some(builder) => match builder.sale_request() {
                Ok(request) => {
                    builder.error = None;
                    request
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
        state.sales.saving = true;
        (api_client, token, request)
    };

    tokio::spawn(async move {
        let result = api_client.create_sale(&token, &request).await;
        tasks::send_result(&event_tx, result, AppEvent::SaleSaved).await;
    });
}

/// Mark a pending sale as paid.
pub(crate) fn handle_pay_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: i64) {
    let (api_client, token) = {
        let mut state = state.write();
        if state.sales.saving {
            return;
        }
        let (api_client, token) = match tasks::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.sales.saving = true;
        (api_client, token)
    };

    tokio::spawn(async move {
        let result = api_client.pay_sale(&token, id).await;
        tasks::send_result(&event_tx, result, AppEvent::SaleSaved).await;
    });
}

/// Ask for confirmation before cancelling.
pub(crate) fn request_cancel(state: Arc<RwLock<AppState>>, id: i64) {
    let mut state = state.write();
    state.sales.confirm_cancel = Some(id);
}

pub(crate) fn dismiss_cancel(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.sales.confirm_cancel = None;
}

/// Start the cancel for the sale the confirm dialog is showing.
pub(crate) fn handle_cancel_confirmed(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, id) = {
        let mut state = state.write();
        if state.sales.saving {
            return;
        }
        let id = match state.sales.confirm_cancel {
            Some(id) => id,
            None => return,
        };
        let (api_client, token) = match tasks::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.sales.saving = true;
        (api_client, token, id)
    };

    tokio::spawn(async move {
        let result = api_client.cancel_sale(&token, id).await;
        tasks::send_result(&event_tx, result, AppEvent::SaleSaved).await;
    });
}

/// Show the detail pane for a sale, refreshed from the backend.
pub(crate) fn open_detail(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: i64) {
    {
        let mut state = state.write();
        // Seed from the row we already have so the pane opens instantly.
        let cached = state.sales.items.iter().find(|s| s.id == id).cloned();
        state.sales.detail = cached;
    }
    tasks::sales::fetch_sale(state, event_tx, id);
}

pub(crate) fn close_detail(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.sales.detail = None;
}
