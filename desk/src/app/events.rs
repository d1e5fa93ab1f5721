//! # Application Events
//!
//! Event types carrying async task results back to the main thread.
//!
//! Every network call a handler spawns ends with exactly one of these on
//! the channel. Errors arrive as the user-facing message string extracted
//! at the API seam; a rejected bearer token is routed to [`AppEvent::SessionExpired`]
//! before any entity-specific event fires.

use shared::{
    AuthResponse, Category, Company, Customer, DashboardMetrics, Product, Quote, Sale, Seller,
};

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<AuthResponse, String>),
    /// Registration wizard submitted
    RegisterResult(Result<AuthResponse, String>),
    /// Password-reset code requested
    ResetRequested(Result<(), String>),
    /// Password-reset code + new password submitted
    ResetConfirmed(Result<(), String>),
    /// The backend rejected the bearer token on an authenticated call
    SessionExpired(String),
    /// Dashboard metrics fetched
    DashboardLoaded(Result<DashboardMetrics, String>),
    /// Product list fetched
    ProductsLoaded(Result<Vec<Product>, String>),
    /// Category list fetched (feeds the product form picker)
    CategoriesLoaded(Result<Vec<Category>, String>),
    /// Product created or updated
    ProductSaved(Result<Product, String>),
    /// Product deleted; Ok carries the removed id
    ProductDeleted(Result<i64, String>),
    /// Customer list fetched
    CustomersLoaded(Result<Vec<Customer>, String>),
    /// Customer created or updated
    CustomerSaved(Result<Customer, String>),
    /// Customer deleted; Ok carries the removed id
    CustomerDeleted(Result<i64, String>),
    /// Seller list fetched
    SellersLoaded(Result<Vec<Seller>, String>),
    /// Seller created or updated (including the active toggle)
    SellerSaved(Result<Seller, String>),
    /// Seller deleted; Ok carries the removed id
    SellerDeleted(Result<i64, String>),
    /// Quote list fetched
    QuotesLoaded(Result<Vec<Quote>, String>),
    /// Quote created, updated, or sent
    QuoteSaved(Result<Quote, String>),
    /// Quote deleted; Ok carries the removed id
    QuoteDeleted(Result<i64, String>),
    /// Quote converted into a sale
    QuoteConverted(Result<Sale, String>),
    /// Sale list fetched
    SalesLoaded(Result<Vec<Sale>, String>),
    /// Single sale fetched for the detail view
    SaleLoaded(Result<Sale, String>),
    /// Sale created, paid, or cancelled
    SaleSaved(Result<Sale, String>),
    /// Company profile fetched
    CompanyLoaded(Result<Company, String>),
    /// Company profile updated
    CompanySaved(Result<Company, String>),
}
