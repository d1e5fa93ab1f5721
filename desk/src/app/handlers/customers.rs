//! # Customer Handlers
//!
//! Same shape as the product handlers: debounced search, a modal editor,
//! confirm-before-delete.

use std::sync::Arc;
use std::time::Instant;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, CustomerEditor};
use crate::app::tasks;
use crate::core::service::ApiService;

/// Record a search-box edit and arm the debounce timer.
pub(crate) fn handle_search_changed(state: Arc<RwLock<AppState>>, search: String) {
    let mut state = state.write();
    state.customers.search = search;
    state.customers.last_search_edit = Instant::now();
    state.customers.search_pending = true;
}

pub(crate) fn open_editor_new(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.customers.editor = Some(CustomerEditor::default());
}

pub(crate) fn open_editor(state: Arc<RwLock<AppState>>, id: i64) {
    let mut state = state.write();
    let editor = match state.customers.items.iter().find(|c| c.id == id) {
        Some(customer) => CustomerEditor::from_customer(customer),
        None => return,
    };
    state.customers.editor = Some(editor);
}

pub(crate) fn close_editor(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.customers.editor = None;
}

/// Validate the open editor and start the create or update call.
pub(crate) fn handle_save_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, id, request) = {
        let mut state = state.write();
        if state.customers.saving {
            return;
        }

        let (id, request) = match state.customers.editor.as_mut() {
            Some(editor) => match editor.to_request() {
                Ok(request) => {
                    editor.error = None;
                    (editor.id, request)
                }
                Err(message) => {
                    editor.error = Some(message);
                    return;
                }
            },
            None => return,
        };

        let (api_client, token) = match tasks::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.customers.saving = true;
        (api_client, token, id, request)
    };

    tokio::spawn(async move {
        let result = match id {
            Some(id) => api_client.update_customer(&token, id, &request).await,
            None => api_client.create_customer(&token, &request).await,
        };
        tasks::send_result(&event_tx, result, AppEvent::CustomerSaved).await;
    });
}

pub(crate) fn request_delete(state: Arc<RwLock<AppState>>, id: i64) {
    let mut state = state.write();
    state.customers.confirm_delete = Some(id);
}

pub(crate) fn cancel_delete(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.customers.confirm_delete = None;
}

/// Start the delete for the row the confirm dialog is showing.
pub(crate) fn handle_delete_confirmed(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, id) = {
        let mut state = state.write();
        if state.customers.saving {
            return;
        }
        let id = match state.customers.confirm_delete {
            Some(id) => id,
            None => return,
        };
        let (api_client, token) = match tasks::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.customers.saving = true;
        (api_client, token, id)
    };

    tokio::spawn(async move {
        let result = api_client.delete_customer(&token, id).await.map(|_| id);
        tasks::send_result(&event_tx, result, AppEvent::CustomerDeleted).await;
    });
}
