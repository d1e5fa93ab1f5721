//! # Company Tasks

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Fetch the signed-in user's company profile.
pub(crate) fn fetch_company(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token, company_id) = {
        let mut state = state.write();
        if state.company.loading {
            return;
        }
        let (client, token) = match super::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        let company_id = match &state.current_user {
            Some(user) => user.company_id,
            None => return,
        };
        state.company.loading = true;
        (client, token, company_id)
    };

    spawn(async move {
        let result = api_client.get_company(&token, company_id).await;
        super::send_result(&event_tx, result, AppEvent::CompanyLoaded).await;
    });
}
