//! # Dashboard Endpoint
//!
//! Single read-only aggregate the backend computes per company.

use shared::DashboardMetrics;

use super::client::{self, ApiClient};

pub async fn get_dashboard(client: &ApiClient, token: &str) -> Result<DashboardMetrics, String> {
    let response = client::with_bearer(
        client
            .client
            .get(format!("{}/api/dashboard", ApiClient::base_url())),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}
