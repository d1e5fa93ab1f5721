//! # Seller Endpoints

use shared::{Seller, SellerRequest};

use super::client::{self, ApiClient};

pub async fn list_sellers(client: &ApiClient, token: &str) -> Result<Vec<Seller>, String> {
    let response = client::with_bearer(
        client
            .client
            .get(format!("{}/api/sellers", ApiClient::base_url())),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn create_seller(
    client: &ApiClient,
    token: &str,
    request: &SellerRequest,
) -> Result<Seller, String> {
    let response = client::with_bearer(
        client
            .client
            .post(format!("{}/api/sellers", ApiClient::base_url()))
            .json(request),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn update_seller(
    client: &ApiClient,
    token: &str,
    id: i64,
    request: &SellerRequest,
) -> Result<Seller, String> {
    let response = client::with_bearer(
        client
            .client
            .put(format!("{}/api/sellers/{}", ApiClient::base_url(), id))
            .json(request),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn delete_seller(client: &ApiClient, token: &str, id: i64) -> Result<(), String> {
    let response = client::with_bearer(
        client
            .client
            .delete(format!("{}/api/sellers/{}", ApiClient::base_url(), id)),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_unit(response).await
}
