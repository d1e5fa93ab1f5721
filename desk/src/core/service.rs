//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    AuthResponse, Category, Company, CompanyRequest, Customer, CustomerRequest, DashboardMetrics,
    PasswordResetConfirm, Product, ProductRequest, Quote, QuoteRequest, QuoteStatus,
    RegisterRequest, Sale, SaleRequest, SaleStatus, Seller, SellerRequest,
};

/// Trait covering every backend operation the app performs.
///
/// `ApiClient` is the production implementation; tests substitute mocks to
/// drive event flows without a network. Authenticated calls take the bearer
/// token explicitly so the client itself stays stateless.
#[async_trait]
pub trait ApiService: Send + Sync {
    // Auth
    async fn login(&self, email: String, password: String) -> Result<AuthResponse, String>;
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, String>;
    async fn logout(&self, token: &str) -> Result<(), String>;
    async fn request_password_reset(&self, email: String) -> Result<(), String>;
    async fn confirm_password_reset(&self, request: PasswordResetConfirm) -> Result<(), String>;

    // Dashboard
    async fn get_dashboard(&self, token: &str) -> Result<DashboardMetrics, String>;

    // Products and categories
    async fn list_products(&self, token: &str, search: Option<&str>) -> Result<Vec<Product>, String>;
    async fn create_product(&self, token: &str, request: &ProductRequest) -> Result<Product, String>;
    async fn update_product(&self, token: &str, id: i64, request: &ProductRequest) -> Result<Product, String>;
    async fn delete_product(&self, token: &str, id: i64) -> Result<(), String>;
    async fn list_categories(&self, token: &str) -> Result<Vec<Category>, String>;

    // Customers
    async fn list_customers(&self, token: &str, search: Option<&str>) -> Result<Vec<Customer>, String>;
    async fn create_customer(&self, token: &str, request: &CustomerRequest) -> Result<Customer, String>;
    async fn update_customer(&self, token: &str, id: i64, request: &CustomerRequest) -> Result<Customer, String>;
    async fn delete_customer(&self, token: &str, id: i64) -> Result<(), String>;

    // Sellers
    async fn list_sellers(&self, token: &str) -> Result<Vec<Seller>, String>;
    async fn create_seller(&self, token: &str, request: &SellerRequest) -> Result<Seller, String>;
    async fn update_seller(&self, token: &str, id: i64, request: &SellerRequest) -> Result<Seller, String>;
    async fn delete_seller(&self, token: &str, id: i64) -> Result<(), String>;

    // Quotes
    async fn list_quotes(&self, token: &str, status: Option<QuoteStatus>) -> Result<Vec<Quote>, String>;
    async fn create_quote(&self, token: &str, request: &QuoteRequest) -> Result<Quote, String>;
    async fn update_quote(&self, token: &str, id: i64, request: &QuoteRequest) -> Result<Quote, String>;
    async fn delete_quote(&self, token: &str, id: i64) -> Result<(), String>;
    async fn send_quote(&self, token: &str, id: i64) -> Result<Quote, String>;
    async fn convert_quote(&self, token: &str, id: i64) -> Result<Sale, String>;

    // Sales
    async fn list_sales(&self, token: &str, status: Option<SaleStatus>) -> Result<Vec<Sale>, String>;
    async fn get_sale(&self, token: &str, id: i64) -> Result<Sale, String>;
    async fn create_sale(&self, token: &str, request: &SaleRequest) -> Result<Sale, String>;
    async fn pay_sale(&self, token: &str, id: i64) -> Result<Sale, String>;
    async fn cancel_sale(&self, token: &str, id: i64) -> Result<Sale, String>;

    // Company
    async fn get_company(&self, token: &str, id: i64) -> Result<Company, String>;
    async fn update_company(&self, token: &str, id: i64, request: &CompanyRequest) -> Result<Company, String>;
}
