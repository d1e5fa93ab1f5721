//! # Dashboard Tasks

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Fetch the server-computed dashboard metrics.
///
/// Runs on login and on screen entry; the loading flag doubles as the
/// in-flight guard so a refresh click cannot pile up requests.
pub(crate) fn fetch_dashboard(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, token) = {
        let mut state = state.write();
        if state.dashboard.loading {
            return;
        }
        let auth = match super::auth_snapshot(&state) {
            Some(auth) => auth,
            None => return,
        };
        state.dashboard.loading = true;
        auth
    };

    spawn(async move {
        let result = api_client.get_dashboard(&token).await;
        super::send_result(&event_tx, result, AppEvent::DashboardLoaded).await;
    });
}
