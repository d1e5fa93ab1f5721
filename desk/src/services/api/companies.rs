//! # Company Endpoints
//!
//! The client only ever reads and updates its own company profile.

use shared::{Company, CompanyRequest};

use super::client::{self, ApiClient};

pub async fn get_company(client: &ApiClient, token: &str, id: i64) -> Result<Company, String> {
    let response = client::with_bearer(
        client
            .client
            .get(format!("{}/api/companies/{}", ApiClient::base_url(), id)),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn update_company(
    client: &ApiClient,
    token: &str,
    id: i64,
    request: &CompanyRequest,
) -> Result<Company, String> {
    let response = client::with_bearer(
        client
            .client
            .put(format!("{}/api/companies/{}", ApiClient::base_url(), id))
            .json(request),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}
