//! # Quote Endpoints
//!
//! Quote CRUD plus the two lifecycle operations: send and convert-to-sale.

use shared::{Quote, QuoteRequest, QuoteStatus, Sale};

use super::client::{self, ApiClient};

pub async fn list_quotes(
    client: &ApiClient,
    token: &str,
    status: Option<QuoteStatus>,
) -> Result<Vec<Quote>, String> {
    let mut request = client
        .client
        .get(format!("{}/api/quotes", ApiClient::base_url()));
    if let Some(status) = status {
        request = request.query(&[("status", status.as_query())]);
    }

    let response = client::with_bearer(request, token)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn create_quote(
    client: &ApiClient,
    token: &str,
    request: &QuoteRequest,
) -> Result<Quote, String> {
    let response = client::with_bearer(
        client
            .client
            .post(format!("{}/api/quotes", ApiClient::base_url()))
            .json(request),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn update_quote(
    client: &ApiClient,
    token: &str,
    id: i64,
    request: &QuoteRequest,
) -> Result<Quote, String> {
    let response = client::with_bearer(
        client
            .client
            .put(format!("{}/api/quotes/{}", ApiClient::base_url(), id))
            .json(request),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn delete_quote(client: &ApiClient, token: &str, id: i64) -> Result<(), String> {
    let response = client::with_bearer(
        client
            .client
            .delete(format!("{}/api/quotes/{}", ApiClient::base_url(), id)),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_unit(response).await
}

/// Mark a draft as sent to the customer.
pub async fn send_quote(client: &ApiClient, token: &str, id: i64) -> Result<Quote, String> {
    let response = client::with_bearer(
        client
            .client
            .post(format!("{}/api/quotes/{}/send", ApiClient::base_url(), id)),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

/// Convert a quote into a sale. The backend copies the frozen line items
/// and returns the created sale.
#[tracing::instrument(skip(client, token), fields(quote_id = id))]
pub async fn convert_quote(client: &ApiClient, token: &str, id: i64) -> Result<Sale, String> {
    tracing::info!("Converting quote to sale");

    let response = client::with_bearer(
        client.client.post(format!(
            "{}/api/quotes/{}/convert",
            ApiClient::base_url(),
            id
        )),
        token,
    )
    .send()
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Quote conversion network error");
        format!("Network error: {}", e)
    })?;

    let result: Result<Sale, String> = client::parse_json(response).await;
    match &result {
        Ok(sale) => tracing::info!(sale_id = sale.id, "Quote converted"),
        Err(error) => tracing::warn!(error = %error, "Quote conversion failed"),
    }
    result
}
