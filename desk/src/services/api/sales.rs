//! # Sale Endpoints
//!
//! Sale list/detail/create plus the pay and cancel status transitions.

use shared::{Sale, SaleRequest, SaleStatus};

use super::client::{self, ApiClient};

pub async fn list_sales(
    client: &ApiClient,
    token: &str,
    status: Option<SaleStatus>,
) -> Result<Vec<Sale>, String> {
    let mut request = client
        .client
        .get(format!("{}/api/sales", ApiClient::base_url()));
    if let Some(status) = status {
        request = request.query(&[("status", status.as_query())]);
    }

    let response = client::with_bearer(request, token)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn get_sale(client: &ApiClient, token: &str, id: i64) -> Result<Sale, String> {
    let response = client::with_bearer(
        client
            .client
            .get(format!("{}/api/sales/{}", ApiClient::base_url(), id)),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn create_sale(
    client: &ApiClient,
    token: &str,
    request: &SaleRequest,
) -> Result<Sale, String> {
    let response = client::with_bearer(
        client
            .client
            .post(format!("{}/api/sales", ApiClient::base_url()))
            .json(request),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

/// Mark a pending sale as paid.
pub async fn pay_sale(client: &ApiClient, token: &str, id: i64) -> Result<Sale, String> {
    let response = client::with_bearer(
        client
            .client
            .post(format!("{}/api/sales/{}/pay", ApiClient::base_url(), id)),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

/// Cancel a pending sale.
pub async fn cancel_sale(client: &ApiClient, token: &str, id: i64) -> Result<Sale, String> {
    let response = client::with_bearer(
        client
            .client
            .post(format!("{}/api/sales/{}/cancel", ApiClient::base_url(), id)),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}
