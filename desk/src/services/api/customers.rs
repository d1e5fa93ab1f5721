//! # Customer Endpoints

use shared::{Customer, CustomerRequest};

use super::client::{self, ApiClient};

pub async fn list_customers(
    client: &ApiClient,
    token: &str,
    search: Option<&str>,
) -> Result<Vec<Customer>, String> {
    let mut request = client
        .client
        .get(format!("{}/api/customers", ApiClient::base_url()));
    if let Some(term) = search {
        request = request.query(&[("search", term)]);
    }

    let response = client::with_bearer(request, token)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn create_customer(
    client: &ApiClient,
    token: &str,
    request: &CustomerRequest,
) -> Result<Customer, String> {
    let response = client::with_bearer(
        client
            .client
            .post(format!("{}/api/customers", ApiClient::base_url()))
            .json(request),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn update_customer(
    client: &ApiClient,
    token: &str,
    id: i64,
    request: &CustomerRequest,
) -> Result<Customer, String> {
    let response = client::with_bearer(
        client
            .client
            .put(format!("{}/api/customers/{}", ApiClient::base_url(), id))
            .json(request),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn delete_customer(client: &ApiClient, token: &str, id: i64) -> Result<(), String> {
    let response = client::with_bearer(
        client
            .client
            .delete(format!("{}/api/customers/{}", ApiClient::base_url(), id)),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_unit(response).await
}
