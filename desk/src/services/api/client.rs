//! # API Client
//!
//! Main HTTP client for backend API communication.

use once_cell::sync::Lazy;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::ErrorResponse;

use crate::core::service::ApiService;

/// Fallback when `SALESDESK_API_URL` is not set.
const DEFAULT_API_URL: &str = "http://127.0.0.1:3001";

/// Base URL for the backend API server, read once at startup.
static API_BASE_URL: Lazy<String> = Lazy::new(|| {
    std::env::var("SALESDESK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
});

/// Message surfaced when the backend rejects the bearer token. The event
/// fold matches on it via [`is_unauthorized`] to clear the stored session.
pub(crate) const SESSION_EXPIRED: &str = "Session expired. Please sign in again.";

/// True when an API error string is the rejected-bearer sentinel.
pub(crate) fn is_unauthorized(error: &str) -> bool {
    error == SESSION_EXPIRED
}

/// HTTP client for communicating with the backend API server.
///
/// This client handles all REST API calls and maintains a connection pool
/// for efficient HTTP/2 multiplexing.
pub struct ApiClient {
    pub(crate) client: Client,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// The client is configured with a 10 second timeout to prevent freezing.
    pub fn new() -> Self {
        // Create client with 10 second timeout to prevent freezing
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url() -> &'static str {
        &API_BASE_URL
    }
}

/// Attach the bearer token to an outgoing request.
pub(crate) fn with_bearer(request: RequestBuilder, token: &str) -> RequestBuilder {
    request.header("Authorization", format!("Bearer {}", token))
}

/// Parse a JSON response from an authenticated endpoint.
///
/// A 401 here means the bearer was rejected, so the caller gets the
/// session-expired sentinel rather than the backend body. Unauthenticated
/// endpoints (login, register, password reset) handle their own error bodies
/// because a 401 there is just bad credentials.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(SESSION_EXPIRED.to_string());
    }
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|e| format!("Failed to parse error: {}", e))?;
        Err(error.error)
    }
}

/// Parse a bodyless response (204 or empty 200) from an authenticated endpoint.
pub(crate) async fn parse_unit(response: Response) -> Result<(), String> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(SESSION_EXPIRED.to_string());
    }
    if status.is_success() {
        Ok(())
    } else {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|e| format!("Failed to parse error: {}", e))?;
        Err(error.error)
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<shared::AuthResponse, String> {
        super::auth::login(self, email, password).await
    }

    async fn register(&self, request: shared::RegisterRequest) -> Result<shared::AuthResponse, String> {
        super::auth::register(self, request).await
    }

    async fn logout(&self, token: &str) -> Result<(), String> {
        super::auth::logout(self, token).await
    }

    async fn request_password_reset(&self, email: String) -> Result<(), String> {
        super::auth::request_password_reset(self, email).await
    }

    async fn confirm_password_reset(&self, request: shared::PasswordResetConfirm) -> Result<(), String> {
        super::auth::confirm_password_reset(self, request).await
    }

    async fn get_dashboard(&self, token: &str) -> Result<shared::DashboardMetrics, String> {
        super::dashboard::get_dashboard(self, token).await
    }

    async fn list_products(&self, token: &str, search: Option<&str>) -> Result<Vec<shared::Product>, String> {
        super::products::list_products(self, token, search).await
    }

    async fn create_product(&self, token: &str, request: &shared::ProductRequest) -> Result<shared::Product, String> {
        super::products::create_product(self, token, request).await
    }

    async fn update_product(&self, token: &str, id: i64, request: &shared::ProductRequest) -> Result<shared::Product, String> {
        super::products::update_product(self, token, id, request).await
    }

    async fn delete_product(&self, token: &str, id: i64) -> Result<(), String> {
        super::products::delete_product(self, token, id).await
    }

    async fn list_categories(&self, token: &str) -> Result<Vec<shared::Category>, String> {
        super::products::list_categories(self, token).await
    }

    async fn list_customers(&self, token: &str, search: Option<&str>) -> Result<Vec<shared::Customer>, String> {
        super::customers::list_customers(self, token, search).await
    }

    async fn create_customer(&self, token: &str, request: &shared::CustomerRequest) -> Result<shared::Customer, String> {
        super::customers::create_customer(self, token, request).await
    }

    async fn update_customer(&self, token: &str, id: i64, request: &shared::CustomerRequest) -> Result<shared::Customer, String> {
        super::customers::update_customer(self, token, id, request).await
    }

    async fn delete_customer(&self, token: &str, id: i64) -> Result<(), String> {
        super::customers::delete_customer(self, token, id).await
    }

    async fn list_sellers(&self, token: &str) -> Result<Vec<shared::Seller>, String> {
        super::sellers::list_sellers(self, token).await
    }

    async fn create_seller(&self, token: &str, request: &shared::SellerRequest) -> Result<shared::Seller, String> {
        super::sellers::create_seller(self, token, request).await
    }

    async fn update_seller(&self, token: &str, id: i64, request: &shared::SellerRequest) -> Result<shared::Seller, String> {
        super::sellers::update_seller(self, token, id, request).await
    }

    async fn delete_seller(&self, token: &str, id: i64) -> Result<(), String> {
        super::sellers::delete_seller(self, token, id).await
    }

    async fn list_quotes(&self, token: &str, status: Option<shared::QuoteStatus>) -> Result<Vec<shared::Quote>, String> {
        super::quotes::list_quotes(self, token, status).await
    }

    async fn create_quote(&self, token: &str, request: &shared::QuoteRequest) -> Result<shared::Quote, String> {
        super::quotes::create_quote(self, token, request).await
    }

    async fn update_quote(&self, token: &str, id: i64, request: &shared::QuoteRequest) -> Result<shared::Quote, String> {
        super::quotes::update_quote(self, token, id, request).await
    }

    async fn delete_quote(&self, token: &str, id: i64) -> Result<(), String> {
        super::quotes::delete_quote(self, token, id).await
    }

    async fn send_quote(&self, token: &str, id: i64) -> Result<shared::Quote, String> {
        super::quotes::send_quote(self, token, id).await
    }

    async fn convert_quote(&self, token: &str, id: i64) -> Result<shared::Sale, String> {
        super::quotes::convert_quote(self, token, id).await
    }

    async fn list_sales(&self, token: &str, status: Option<shared::SaleStatus>) -> Result<Vec<shared::Sale>, String> {
        super::sales::list_sales(self, token, status).await
    }

    async fn get_sale(&self, token: &str, id: i64) -> Result<shared::Sale, String> {
        super::sales::get_sale(self, token, id).await
    }

    async fn create_sale(&self, token: &str, request: &shared::SaleRequest) -> Result<shared::Sale, String> {
        super::sales::create_sale(self, token, request).await
    }

    async fn pay_sale(&self, token: &str, id: i64) -> Result<shared::Sale, String> {
        super::sales::pay_sale(self, token, id).await
    }

    async fn cancel_sale(&self, token: &str, id: i64) -> Result<shared::Sale, String> {
        super::sales::cancel_sale(self, token, id).await
    }

    async fn get_company(&self, token: &str, id: i64) -> Result<shared::Company, String> {
        super::companies::get_company(self, token, id).await
    }

    async fn update_company(&self, token: &str, id: i64, request: &shared::CompanyRequest) -> Result<shared::Company, String> {
        super::companies::update_company(self, token, id, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_sentinel_round_trip() {
        assert!(is_unauthorized(SESSION_EXPIRED));
        assert!(!is_unauthorized("Invalid credentials"));
        assert!(!is_unauthorized(""));
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert!(!ApiClient::base_url().ends_with('/'));
    }
}
