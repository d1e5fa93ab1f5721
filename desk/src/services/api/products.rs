//! # Product Catalog Endpoints
//!
//! CRUD for products plus the read-only category list.

use shared::{Category, Product, ProductRequest};

use super::client::{self, ApiClient};

/// List products, optionally filtered by a search term. The term goes out as
/// a query parameter so the backend does the matching.
pub async fn list_products(
    client: &ApiClient,
    token: &str,
    search: Option<&str>,
) -> Result<Vec<Product>, String> {
    let mut request = client
        .client
        .get(format!("{}/api/products", ApiClient::base_url()));
    if let Some(term) = search {
        request = request.query(&[("search", term)]);
    }

    let response = client::with_bearer(request, token)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn create_product(
    client: &ApiClient,
    token: &str,
    request: &ProductRequest,
) -> Result<Product, String> {
    let response = client::with_bearer(
        client
            .client
            .post(format!("{}/api/products", ApiClient::base_url()))
            .json(request),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn update_product(
    client: &ApiClient,
    token: &str,
    id: i64,
    request: &ProductRequest,
) -> Result<Product, String> {
    let response = client::with_bearer(
        client
            .client
            .put(format!("{}/api/products/{}", ApiClient::base_url(), id))
            .json(request),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}

pub async fn delete_product(client: &ApiClient, token: &str, id: i64) -> Result<(), String> {
    let response = client::with_bearer(
        client
            .client
            .delete(format!("{}/api/products/{}", ApiClient::base_url(), id)),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_unit(response).await
}

/// Categories are company-wide and read-only from the client's side.
pub async fn list_categories(client: &ApiClient, token: &str) -> Result<Vec<Category>, String> {
    let response = client::with_bearer(
        client
            .client
            .get(format!("{}/api/categories", ApiClient::base_url())),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_json(response).await
}
