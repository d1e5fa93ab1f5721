//! # Product Handlers
//!
//! Catalog search, the create/edit form, and deletes. Search edits only arm
//! the debounce timer here; the fetch fires from
//! [`crate::app::App::on_tick`] once typing pauses.

use std::sync::Arc;
use std::time::Instant;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, ProductEditor};
use crate::app::tasks;
use crate::core::service::ApiService;

/// Record a search-box edit and arm the debounce timer.
pub(crate) fn handle_search_changed(state: Arc<RwLock<AppState>>, search: String) {
    let mut state = state.write();
    state.products.search = search;
    state.products.last_search_edit = Instant::now();
    state.products.search_pending = true;
}

/// Open the editor for a new product.
pub(crate) fn open_editor_new(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.products.editor = Some(ProductEditor::new());
}

/// Open the editor prefilled from an existing row.
pub(crate) fn open_editor(state: Arc<RwLock<AppState>>, id: i64) {
    let mut state = state.write();
    let editor = match state.products.items.iter().find(|p| p.id == id) {
        Some(product) => ProductEditor::from_product(product),
        None => return,
    };
    state.products.editor = Some(editor);
}

/// Discard the editor without saving.
pub(crate) fn close_editor(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.products.editor = None;
}

/// Validate the open editor and start the create or update call.
///
/// Internal handler function - use [`crate::app::App::handle_product_save`] instead.
pub(crate) fn handle_save_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, id, request) = {
        let mut state = state.write();
        if state.products.saving {
            return;
        }

        let (id, request) = match state.products.editor.as_mut() {
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
        state.products.saving = true;
        (api_client, token, id, request)
    };

    tokio::spawn(async move {
        let result = match id {
            Some(id) => api_client.update_product(&token, id, &request).await,
            None => api_client.create_product(&token, &request).await,
        };
        tasks::send_result(&event_tx, result, AppEvent::ProductSaved).await;
    });
}

/// Ask for confirmation before deleting.
pub(crate) fn request_delete(state: Arc<RwLock<AppState>>, id: i64) {
    let mut state = state.write();
    state.products.confirm_delete = Some(id);
}

pub(crate) fn cancel_delete(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.products.confirm_delete = None;
}

/// Start the delete for the row the confirm dialog is showing.
pub(crate) fn handle_delete_confirmed(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, id) = {
        let mut state = state.write();
        if state.products.saving {
            return;
        }
        let id = match state.products.confirm_delete {
            Some(id) => id,
            None => return,
        };
        let (api_client, token) = match tasks::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.products.saving = true;
        (api_client, token, id)
    };

    tokio::spawn(async move {
        let result = api_client.delete_product(&token, id).await.map(|_| id);
        tasks::send_result(&event_tx, result, AppEvent::ProductDeleted).await;
    });
}
