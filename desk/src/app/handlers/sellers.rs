//! # Seller Handlers
//!
//! Editor, delete, and the active toggle shown directly in the table. The
//! toggle sends a full update built from the current row, so no editor has
//! to be open.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::sellers::SellerRequest;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, SellerEditor};
use crate::app::tasks;
use crate::core::service::ApiService;

pub(crate) fn open_editor_new(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.sellers.editor = Some(SellerEditor::new());
}

pub(crate) fn open_editor(state: Arc<RwLock<AppState>>, id: i64) {
    let mut state = state.write();
    let editor = match state.sellers.items.iter().find(|s| s.id == id) {
        Some(seller) => SellerEditor::from_seller(seller),
        None => return,
    };
    state.sellers.editor = Some(editor);
}

pub(crate) fn close_editor(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.sellers.editor = None;
}

/// Validate the open editor and start the create or update call.
pub(crate) fn handle_save_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, id, request) = {
        let mut state = state.write();
        if state.sellers.saving {
            return;
        }

        let (id, request) = match state.sellers.editor.as_mut() {
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
        state.sellers.saving = true;
        (api_client, token, id, request)
    };

    tokio::spawn(async move {
        let result = match id {
            Some(id) => api_client.update_seller(&token, id, &request).await,
            None => api_client.create_seller(&token, &request).await,
        };
        tasks::send_result(&event_tx, result, AppEvent::SellerSaved).await;
    });
}

/// Flip a seller's active flag straight from the table row.
pub(crate) fn handle_toggle_active(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: i64,
) {
    let (api_client, token, request) = {
        let mut state = state.write();
        if state.sellers.saving {
            return;
        }
        let request = match state.sellers.items.iter().find(|s| s.id == id) {
            Some(seller) => {
                let mut request = SellerRequest::from_seller(seller);
                request.active = !seller.active;
                request
            }
            None => return,
        };
        let (api_client, token) = match tasks::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.sellers.saving = true;
        (api_client, token, request)
    };

    tokio::spawn(async move {
        let result = api_client.update_seller(&token, id, &request).await;
        tasks::send_result(&event_tx, result, AppEvent::SellerSaved).await;
    });
}

pub(crate) fn request_delete(state: Arc<RwLock<AppState>>, id: i64) {
    let mut state = state.write();
    state.sellers.confirm_delete = Some(id);
}

pub(crate) fn cancel_delete(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.sellers.confirm_delete = None;
}

/// Start the delete for the row the confirm dialog is showing.
pub(crate) fn handle_delete_confirmed(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, id) = {
        let mut state = state.write();
        if state.sellers.saving {
            return;
        }
        let id = match state.sellers.confirm_delete {
            Some(id) => id,
            None => return,
        };
        let (api_client, token) = match tasks::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.sellers.saving = true;
        (api_client, token, id)
    };

    tokio::spawn(async move {
        let result = api_client.delete_seller(&token, id).await.map(|_| id);
        tasks::send_result(&event_tx, result, AppEvent::SellerDeleted).await;
    });
}
