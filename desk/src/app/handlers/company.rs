//! # Company Handlers
//!
//! The signed-in user's company profile: read-only view with an inline
//! edit form. The company id comes from the loaded profile when present,
//! falling back to the session's `company_id`.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, CompanyEditor};
use crate::app::tasks;
use crate::core::service::ApiService;

/// Open the edit form prefilled from the loaded profile.
pub(crate) fn start_edit(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let editor = match state.company.company.as_ref() {
        Some(company) => CompanyEditor::from_company(company),
        None => return,
    };
    state.company.editor = Some(editor);
}

pub(crate) fn cancel_edit(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.company.editor = None;
}

/// Validate the edit form and start the update call.
pub(crate) fn handle_save_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, id, request) = {
        let mut state = state.write();
        if state.company.saving {
            return;
        }

        let request = match state.company.editor.as_mut() {
            Some(editor) => match editor.to_request() {
                Ok(request) => {
                    editor.error = None;
                    request
                }
                Err(message) => {
                    editor.error = Some(message);
                    return;
                }
            },
            None => return,
        };

        let id = match (
            state.company.company.as_ref().map(|c| c.id),
            state.current_user.as_ref().map(|u| u.company_id),
        ) {
            (Some(id), _) | (None, Some(id)) => id,
            (None, None) => return,
        };

        let (api_client, token) = match tasks::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.company.saving = true;
        (api_client, token, id, request)
    };

    tokio::spawn(async move {
        let result = api_client.update_company(&token, id, &request).await;
        tasks::send_result(&event_tx, result, AppEvent::CompanySaved).await;
    });
}
