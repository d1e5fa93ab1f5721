//! # Application State
//!
//! State types shared between the egui thread and async tasks.
//!
//! [`AppState`] is owned behind `Arc<RwLock<...>>`; the UI thread reads it
//! every frame and the event fold writes it when async results arrive.
//! Everything in here is plain data plus the small amount of arithmetic the
//! forms need (wizard step gating, draft totals). No I/O happens in this
//! module.

use std::sync::Arc;
use std::time::Instant;

use shared::money::{Money, Totals};
use shared::{
    Category, Company, CompanyRequest, Customer, CustomerRequest, DashboardMetrics, LineItemInput,
    PaymentMethod, Product, ProductRequest, Quote, QuoteRequest, QuoteStatus, RegisterRequest,
    Sale, SaleRequest, SaleStatus, Seller, SellerRequest, UserInfo,
};

use crate::services::api::ApiClient;
use crate::ui::theme::ThemeConfig;
use crate::utils::format::{bps_to_input, cents_to_input, parse_bps_input, parse_money_input};
use crate::utils::validation::{
    validate_email, validate_password, validate_quantity, validate_required,
};

/// How long a search box must stay quiet before the query fires.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Registration wizard step titles, in order.
pub const REGISTER_STEPS: [&str; 4] = ["Account", "Company", "Contact", "Review"];

/// Password-reset wizard step titles, in order.
pub const RESET_STEPS: [&str; 3] = ["Request Code", "New Password", "Done"];

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Dashboard,
    Products,
    Customers,
    Quotes,
    Sales,
    Sellers,
    Company,
    Settings,
}

impl Screen {
    /// All screens in navigation order.
    pub fn all() -> [Screen; 9] {
        [
            Screen::Auth,
            Screen::Dashboard,
            Screen::Products,
            Screen::Customers,
            Screen::Quotes,
            Screen::Sales,
            Screen::Sellers,
            Screen::Company,
            Screen::Settings,
        ]
    }

    pub fn title(&self) -> &str {
        match self {
            Screen::Auth => "Sign In",
            Screen::Dashboard => "Dashboard",
            Screen::Products => "Products",
            Screen::Customers => "Customers",
            Screen::Quotes => "Quotes",
            Screen::Sales => "Sales",
            Screen::Sellers => "Sellers",
            Screen::Company => "Company Profile",
            Screen::Settings => "Settings",
        }
    }
}

/// Registration wizard form data, carried across all four steps so Back
/// never loses input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub company_name: String,
    pub company_trade_name: String,
    pub company_tax_id: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl RegisterForm {
    /// Gate for the wizard's Next button. Steps are indexed into
    /// [`REGISTER_STEPS`]; the contact step has no required fields.
    pub fn validate_step(&self, step: usize) -> Result<(), String> {
        match step {
            0 => {
                validate_required(&self.name, "Name").into_result()?;
                validate_email(&self.email).into_result()?;
                validate_password(&self.password).into_result()?;
                if self.password != self.confirm_password {
                    return Err("Passwords don't match".to_string());
                }
                Ok(())
            }
            1 => {
                validate_required(&self.company_name, "Company name").into_result()?;
                validate_required(&self.company_tax_id, "Tax ID").into_result()
            }
            _ => Ok(()),
        }
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            company_name: self.company_name.trim().to_string(),
            company_trade_name: opt(&self.company_trade_name),
            company_tax_id: self.company_tax_id.trim().to_string(),
            phone: opt(&self.phone),
            address: opt(&self.address),
            city: opt(&self.city),
            state: opt(&self.state),
            postal_code: opt(&self.postal_code),
        }
    }
}

/// Password-reset wizard form data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetForm {
    pub email: String,
    pub code: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ResetForm {
    pub fn validate_step(&self, step: usize) -> Result<(), String> {
        match step {
            0 => validate_email(&self.email).into_result(),
            1 => {
                validate_required(&self.code, "Code").into_result()?;
                validate_password(&self.new_password).into_result()?;
                if self.new_password != self.confirm_password {
                    return Err("Passwords don't match".to_string());
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Authentication state
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Login {
        email: String,
        password: String,
        error: Option<String>,
    },
    /// Four-step registration wizard. `step` indexes [`REGISTER_STEPS`];
    /// it is a plain counter, nothing more.
    Register {
        step: usize,
        form: RegisterForm,
        error: Option<String>,
    },
    /// Three-step password reset. `step` indexes [`RESET_STEPS`].
    ResetPassword {
        step: usize,
        form: ResetForm,
        error: Option<String>,
    },
}

impl AuthState {
    pub fn login() -> Self {
        AuthState::Login {
            email: String::new(),
            password: String::new(),
            error: None,
        }
    }

    pub fn register() -> Self {
        AuthState::Register {
            step: 0,
            form: RegisterForm::default(),
            error: None,
        }
    }

    pub fn reset_password() -> Self {
        AuthState::ResetPassword {
            step: 0,
            form: ResetForm::default(),
            error: None,
        }
    }

    /// Set the inline error on whichever form is showing.
    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = Some(message.into());
        match self {
            AuthState::Login { error, .. } => *error = message,
            AuthState::Register { error, .. } => *error = message,
            AuthState::ResetPassword { error, .. } => *error = message,
        }
    }

    pub fn clear_error(&mut self) {
        match self {
            AuthState::Login { error, .. } => *error = None,
            AuthState::Register { error, .. } => *error = None,
            AuthState::ResetPassword { error, .. } => *error = None,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        AuthState::login()
    }
}

/// Dashboard screen state
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub metrics: Option<DashboardMetrics>,
    pub loading: bool,
}

/// Product create/edit form. `id` is `None` for a new product.
#[derive(Debug, Clone, Default)]
pub struct ProductEditor {
    pub id: Option<i64>,
    pub name: String,
    pub sku: String,
    pub category_id: Option<i64>,
    pub price: String,
    pub stock: String,
    pub description: String,
    pub active: bool,
    pub error: Option<String>,
}

impl ProductEditor {
    pub fn new() -> Self {
        Self {
            active: true,
            stock: "0".to_string(),
            ..Self::default()
        }
    }

    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            sku: product.sku.clone().unwrap_or_default(),
            category_id: product.category_id,
            price: cents_to_input(product.price_cents),
            stock: product.stock.to_string(),
            description: product.description.clone().unwrap_or_default(),
            active: product.active,
            error: None,
        }
    }

    pub fn to_request(&self) -> Result<ProductRequest, String> {
        validate_required(&self.name, "Name").into_result()?;
        let price_cents =
            parse_money_input(&self.price).ok_or("Price must be a positive amount like 12.50")?;
        let stock: i64 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| "Stock must be a whole number".to_string())?;
        if stock < 0 {
            return Err("Stock cannot be negative".to_string());
        }

        Ok(ProductRequest {
            name: self.name.trim().to_string(),
            sku: opt(&self.sku),
            category_id: self.category_id,
            description: opt(&self.description),
            price_cents,
            stock,
            active: self.active,
        })
    }
}

/// Products screen state
#[derive(Debug, Clone)]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub categories: Vec<Category>,
    /// In-flight guard for the list fetch; also drives the spinner.
    pub loading: bool,
    pub search: String,
    pub last_search_edit: Instant,
    /// An edit happened and the debounced fetch has not fired yet.
    pub search_pending: bool,
    pub editor: Option<ProductEditor>,
    pub confirm_delete: Option<i64>,
    pub saving: bool,
}

impl Default for ProductsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            categories: Vec::new(),
            loading: false,
            search: String::new(),
            last_search_edit: Instant::now(),
            search_pending: false,
            editor: None,
            confirm_delete: None,
            saving: false,
        }
    }
}

/// Customer create/edit form.
#[derive(Debug, Clone, Default)]
pub struct CustomerEditor {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tax_id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub notes: String,
    pub error: Option<String>,
}

impl CustomerEditor {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            id: Some(customer.id),
            name: customer.name.clone(),
            email: customer.email.clone().unwrap_or_default(),
            phone: customer.phone.clone().unwrap_or_default(),
            tax_id: customer.tax_id.clone().unwrap_or_default(),
            address: customer.address.clone().unwrap_or_default(),
            city: customer.city.clone().unwrap_or_default(),
            state: customer.state.clone().unwrap_or_default(),
            postal_code: customer.postal_code.clone().unwrap_or_default(),
            notes: customer.notes.clone().unwrap_or_default(),
            error: None,
        }
    }

    pub fn to_request(&self) -> Result<CustomerRequest, String> {
        validate_required(&self.name, "Name").into_result()?;
        if !self.email.trim().is_empty() {
            validate_email(self.email.trim()).into_result()?;
        }

        Ok(CustomerRequest {
            name: self.name.trim().to_string(),
            email: opt(&self.email),
            phone: opt(&self.phone),
            tax_id: opt(&self.tax_id),
            address: opt(&self.address),
            city: opt(&self.city),
            state: opt(&self.state),
            postal_code: opt(&self.postal_code),
            notes: opt(&self.notes),
        })
    }
}

/// Customers screen state
#[derive(Debug, Clone)]
pub struct CustomersState {
    pub items: Vec<Customer>,
    pub loading: bool,
    pub search: String,
    pub last_search_edit: Instant,
    pub search_pending: bool,
    pub editor: Option<CustomerEditor>,
    pub confirm_delete: Option<i64>,
    pub saving: bool,
}

impl Default for CustomersState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            search: String::new(),
            last_search_edit: Instant::now(),
            search_pending: false,
            editor: None,
            confirm_delete: None,
            saving: false,
        }
    }
}

/// Seller create/edit form. Commission is entered as a percent and stored
/// as basis points on the wire.
#[derive(Debug, Clone, Default)]
pub struct SellerEditor {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub commission: String,
    pub active: bool,
    pub error: Option<String>,
}

impl SellerEditor {
    pub fn new() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    pub fn from_seller(seller: &Seller) -> Self {
        Self {
            id: Some(seller.id),
            name: seller.name.clone(),
            email: seller.email.clone(),
            phone: seller.phone.clone().unwrap_or_default(),
            commission: bps_to_input(seller.commission_bps),
            active: seller.active,
            error: None,
        }
    }

    pub fn to_request(&self) -> Result<SellerRequest, String> {
        validate_required(&self.name, "Name").into_result()?;
        validate_email(self.email.trim()).into_result()?;
        let commission_bps = if self.commission.trim().is_empty() {
            0
        } else {
            parse_bps_input(&self.commission)
                .ok_or("Commission must be a percentage between 0 and 100")?
        };

        Ok(SellerRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: opt(&self.phone),
            commission_bps,
            active: self.active,
        })
    }
}

/// Sellers screen state
#[derive(Debug, Clone, Default)]
pub struct SellersState {
    pub items: Vec<Seller>,
    pub loading: bool,
    pub editor: Option<SellerEditor>,
    pub confirm_delete: Option<i64>,
    pub saving: bool,
}

/// One line in the quote/sale builder.
///
/// The unit price is frozen from the product at the moment the line is
/// added; later catalog edits do not reprice existing lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftLine {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

impl DraftLine {
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).times(self.quantity)
    }
}

/// Working state for the quote and sale builders.
///
/// Quotes use `valid_until`, direct sales use `payment_method`; the line
/// and totals arithmetic is one shared path so the figures on screen always
/// match what gets submitted.
#[derive(Debug, Clone)]
pub struct DocumentDraft {
    /// Set when editing an existing draft quote.
    pub id: Option<i64>,
    pub customer_id: Option<i64>,
    pub seller_id: Option<i64>,
    pub lines: Vec<DraftLine>,
    pub picker_product: Option<i64>,
    pub quantity_input: String,
    pub discount_input: String,
    pub tax_input: String,
    pub valid_until: String,
    pub payment_method: Option<PaymentMethod>,
    pub notes: String,
    pub totals: Totals,
    pub error: Option<String>,
}

impl Default for DocumentDraft {
    fn default() -> Self {
        Self {
            id: None,
            customer_id: None,
            seller_id: None,
            lines: Vec::new(),
            picker_product: None,
            quantity_input: "1".to_string(),
            discount_input: String::new(),
            tax_input: String::new(),
            valid_until: String::new(),
            payment_method: None,
            notes: String::new(),
            totals: Totals::default(),
            error: None,
        }
    }
}

impl DocumentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reopen an existing quote for editing.
    pub fn from_quote(quote: &Quote) -> Self {
        let mut draft = Self {
            id: Some(quote.id),
            customer_id: Some(quote.customer_id),
            seller_id: quote.seller_id,
            lines: quote
                .items
                .iter()
                .map(|item| DraftLine {
                    product_id: item.product_id,
                    product_name: item.product_name.clone(),
                    quantity: item.quantity,
                    unit_price_cents: item.unit_price_cents,
                })
                .collect(),
            discount_input: bps_to_input(quote.discount_bps),
            tax_input: bps_to_input(quote.tax_bps),
            valid_until: quote.valid_until.clone().unwrap_or_default(),
            notes: quote.notes.clone().unwrap_or_default(),
            ..Self::default()
        };
        draft.recompute();
        draft
    }

    /// Add a product line, freezing the unit price at today's catalog
    /// price. Adding the same product again merges into the existing line
    /// without repricing it.
    pub fn add_line(&mut self, product: &Product, quantity: i64) {
        if quantity < 1 {
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity += quantity;
        } else {
            self.lines.push(DraftLine {
                product_id: product.id,
                product_name: product.name.clone(),
                quantity,
                unit_price_cents: product.price_cents,
            });
        }
        self.recompute();
    }

    /// Set a line's quantity. Values below 1 are ignored; removal is an
    /// explicit action.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity < 1 {
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity;
            self.recompute();
        }
    }

    pub fn remove_line(&mut self, product_id: i64) {
        self.lines.retain(|line| line.product_id != product_id);
        self.recompute();
    }

    /// Percent inputs parse leniently while typing: empty or not-yet-valid
    /// text counts as zero until submit-time validation runs.
    pub fn discount_bps(&self) -> u32 {
        parse_bps_input(&self.discount_input).unwrap_or(0)
    }

    pub fn tax_bps(&self) -> u32 {
        parse_bps_input(&self.tax_input).unwrap_or(0)
    }

    /// Recompute totals from lines and percent inputs. Called after every
    /// edit so the on-screen figures never go stale.
    pub fn recompute(&mut self) {
        self.totals = Totals::compute(
            self.lines.iter().map(DraftLine::line_total),
            self.discount_bps(),
            self.tax_bps(),
        );
    }

    fn validate_common(&self) -> Result<(i64, Vec<LineItemInput>), String> {
        let customer_id = self.customer_id.ok_or("Pick a customer first")?;
        if self.lines.is_empty() {
            return Err("Add at least one product line".to_string());
        }
        if !self.discount_input.trim().is_empty() && parse_bps_input(&self.discount_input).is_none()
        {
            return Err("Discount must be a percentage between 0 and 100".to_string());
        }
        if !self.tax_input.trim().is_empty() && parse_bps_input(&self.tax_input).is_none() {
            return Err("Tax must be a percentage between 0 and 100".to_string());
        }

        let items = self
            .lines
            .iter()
            .map(|line| LineItemInput {
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price_cents: line.unit_price_cents,
            })
            .collect();
        Ok((customer_id, items))
    }

    pub fn quote_request(&self) -> Result<QuoteRequest, String> {
        let (customer_id, items) = self.validate_common()?;
        let valid_until = if self.valid_until.trim().is_empty() {
            None
        } else {
            let date = self.valid_until.trim();
            chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| "Valid-until must be a date like 2026-09-30".to_string())?;
            Some(date.to_string())
        };

        Ok(QuoteRequest {
            customer_id,
            seller_id: self.seller_id,
            items,
            discount_bps: self.discount_bps(),
            tax_bps: self.tax_bps(),
            valid_until,
            notes: opt(&self.notes),
        })
    }

    pub fn sale_request(&self) -> Result<SaleRequest, String> {
        let (customer_id, items) = self.validate_common()?;
        Ok(SaleRequest {
            customer_id,
            seller_id: self.seller_id,
            payment_method: self.payment_method,
            items,
            discount_bps: self.discount_bps(),
            tax_bps: self.tax_bps(),
            notes: opt(&self.notes),
        })
    }
}

/// Quotes screen state
#[derive(Debug, Clone, Default)]
pub struct QuotesState {
    pub items: Vec<Quote>,
    pub loading: bool,
    pub status_filter: Option<QuoteStatus>,
    pub builder: Option<DocumentDraft>,
    pub confirm_delete: Option<i64>,
    /// Covers save, send, convert, and delete; one mutation at a time.
    pub saving: bool,
}

/// Sales screen state
#[derive(Debug, Clone, Default)]
pub struct SalesState {
    pub items: Vec<Sale>,
    pub loading: bool,
    pub status_filter: Option<SaleStatus>,
    pub detail: Option<Sale>,
    pub detail_loading: bool,
    pub builder: Option<DocumentDraft>,
    pub confirm_cancel: Option<i64>,
    pub saving: bool,
}

/// Company profile edit form.
#[derive(Debug, Clone, Default)]
pub struct CompanyEditor {
    pub name: String,
    pub trade_name: String,
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub error: Option<String>,
}

impl CompanyEditor {
    pub fn from_company(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            trade_name: company.trade_name.clone().unwrap_or_default(),
            tax_id: company.tax_id.clone(),
            email: company.email.clone().unwrap_or_default(),
            phone: company.phone.clone().unwrap_or_default(),
            address: company.address.clone().unwrap_or_default(),
            city: company.city.clone().unwrap_or_default(),
            state: company.state.clone().unwrap_or_default(),
            postal_code: company.postal_code.clone().unwrap_or_default(),
            error: None,
        }
    }

    pub fn to_request(&self) -> Result<CompanyRequest, String> {
        validate_required(&self.name, "Company name").into_result()?;
        validate_required(&self.tax_id, "Tax ID").into_result()?;
        if !self.email.trim().is_empty() {
            validate_email(self.email.trim()).into_result()?;
        }

        Ok(CompanyRequest {
            name: self.name.trim().to_string(),
            trade_name: opt(&self.trade_name),
            tax_id: self.tax_id.trim().to_string(),
            email: opt(&self.email),
            phone: opt(&self.phone),
            address: opt(&self.address),
            city: opt(&self.city),
            state: opt(&self.state),
            postal_code: opt(&self.postal_code),
        })
    }
}

/// Company screen state
#[derive(Debug, Clone, Default)]
pub struct CompanyState {
    pub company: Option<Company>,
    pub loading: bool,
    pub editor: Option<CompanyEditor>,
    pub saving: bool,
}

/// Settings screen state
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    pub theme_config: ThemeConfig,
    pub config_path: String,
    pub unsaved_changes: bool,
}

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub auth: AuthState,
    /// An auth request (login, register, reset) is in flight; disables the
    /// submit buttons.
    pub auth_loading: bool,
    /// Bearer token attached to every authenticated request.
    pub auth_token: Option<String>,
    pub current_user: Option<UserInfo>,
    pub api_client: Option<Arc<ApiClient>>,
    pub dashboard: DashboardState,
    pub products: ProductsState,
    pub customers: CustomersState,
    pub sellers: SellersState,
    pub quotes: QuotesState,
    pub sales: SalesState,
    pub company: CompanyState,
    pub settings: SettingsState,
    /// (kind, message) toasts drained by the notification widget each
    /// frame. Kind is one of "success", "error", "warning", "info".
    pub pending_notifications: Vec<(String, String)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_screen: Screen::Auth,
            auth: AuthState::login(),
            auth_loading: false,
            auth_token: None,
            current_user: None,
            api_client: None,
            dashboard: DashboardState::default(),
            products: ProductsState::default(),
            customers: CustomersState::default(),
            sellers: SellersState::default(),
            quotes: QuotesState::default(),
            sales: SalesState::default(),
            company: CompanyState::default(),
            settings: SettingsState::default(),
            pending_notifications: Vec::new(),
        }
    }
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Whether a screen requires authentication. Everything except the
    /// auth screen does.
    pub fn requires_auth(screen: Screen) -> bool {
        screen != Screen::Auth
    }

    /// Drop credentials and every cached piece of company data, landing on
    /// a fresh login form. Used by logout and session expiry; deleting the
    /// session file is the caller's job.
    pub fn reset_auth(&mut self) {
        self.auth_token = None;
        self.current_user = None;
        self.auth_loading = false;
        self.dashboard = DashboardState::default();
        self.products = ProductsState::default();
        self.customers = CustomersState::default();
        self.sellers = SellersState::default();
        self.quotes = QuotesState::default();
        self.sales = SalesState::default();
        self.company = CompanyState::default();
        self.current_screen = Screen::Auth;
        self.auth = AuthState::login();
    }

    /// Session-expiry path: reset auth and tell the user why they are
    /// looking at the login form again.
    pub fn expire_session(&mut self, reason: &str) {
        self.reset_auth();
        self.auth.set_error(reason);
        self.notify_warning(reason);
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.pending_notifications
            .push(("success".to_string(), message.into()));
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.pending_notifications
            .push(("error".to_string(), message.into()));
    }

    pub fn notify_warning(&mut self, message: impl Into<String>) {
        self.pending_notifications
            .push(("warning".to_string(), message.into()));
    }

    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.pending_notifications
            .push(("info".to_string(), message.into()));
    }
}

/// Trimmed optional field: empty input means "not provided", not "".
fn opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            company_id: 1,
            category_id: None,
            name: format!("Product {}", id),
            sku: None,
            description: None,
            price_cents,
            stock: 10,
            active: true,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_register_step_gating() {
        let mut form = RegisterForm::default();
        assert!(form.validate_step(0).is_err());

        form.name = "Ana".to_string();
        form.email = "ana@example.com".to_string();
        form.password = "longenough".to_string();
        form.confirm_password = "different".to_string();
        assert_eq!(
            form.validate_step(0),
            Err("Passwords don't match".to_string())
        );

        form.confirm_password = form.password.clone();
        assert!(form.validate_step(0).is_ok());

        // Company step needs a name and tax id
        assert!(form.validate_step(1).is_err());
        form.company_name = "Acme Ltda".to_string();
        form.company_tax_id = "12.345.678/0001-00".to_string();
        assert!(form.validate_step(1).is_ok());

        // Contact step is all optional
        assert!(form.validate_step(2).is_ok());
    }

    #[test]
    fn test_register_form_optionals_drop_empty_strings() {
        let form = RegisterForm {
            name: "Ana".to_string(),
            email: " ana@example.com ".to_string(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
            company_name: "Acme".to_string(),
            company_tax_id: "123".to_string(),
            phone: "  ".to_string(),
            city: "Lisbon".to_string(),
            ..RegisterForm::default()
        };

        let request = form.to_request();
        assert_eq!(request.email, "ana@example.com");
        assert_eq!(request.phone, None);
        assert_eq!(request.city, Some("Lisbon".to_string()));
        assert_eq!(request.company_trade_name, None);
    }

    #[test]
    fn test_reset_step_gating() {
        let mut form = ResetForm::default();
        assert!(form.validate_step(0).is_err());

        form.email = "ana@example.com".to_string();
        assert!(form.validate_step(0).is_ok());

        form.code = "123456".to_string();
        form.new_password = "short".to_string();
        form.confirm_password = "short".to_string();
        assert!(form.validate_step(1).is_err());

        form.new_password = "longenough".to_string();
        form.confirm_password = "longenough".to_string();
        assert!(form.validate_step(1).is_ok());
    }

    #[test]
    fn test_draft_add_line_freezes_unit_price() {
        let mut draft = DocumentDraft::new();
        let mut product = sample_product(7, 1099);

        draft.add_line(&product, 2);
        assert_eq!(draft.lines[0].unit_price_cents, 1099);

        // A catalog price change must not reprice the existing line,
        // even when the same product is added again.
        product.price_cents = 1500;
        draft.add_line(&product, 1);
        assert_eq!(draft.lines.len(), 1);
        assert_eq!(draft.lines[0].quantity, 3);
        assert_eq!(draft.lines[0].unit_price_cents, 1099);
    }

    #[test]
    fn test_draft_totals_follow_every_edit() {
        let mut draft = DocumentDraft::new();
        draft.add_line(&sample_product(1, 10_000), 1);
        assert_eq!(draft.totals.total.cents(), 10_000);

        draft.discount_input = "10".to_string();
        draft.tax_input = "8.25".to_string();
        draft.recompute();
        assert_eq!(draft.totals.discount.cents(), 1000);
        assert_eq!(draft.totals.tax.cents(), 743);
        assert_eq!(draft.totals.total.cents(), 9743);

        draft.remove_line(1);
        assert_eq!(draft.totals.total.cents(), 0);
    }

    #[test]
    fn test_draft_set_quantity_ignores_zero() {
        let mut draft = DocumentDraft::new();
        draft.add_line(&sample_product(1, 500), 2);

        draft.set_quantity(1, 0);
        assert_eq!(draft.lines[0].quantity, 2);

        draft.set_quantity(1, 5);
        assert_eq!(draft.lines[0].quantity, 5);
        assert_eq!(draft.totals.subtotal.cents(), 2500);
    }

    #[test]
    fn test_quote_request_requires_customer_and_lines() {
        let mut draft = DocumentDraft::new();
        assert!(draft.quote_request().is_err());

        draft.customer_id = Some(3);
        assert_eq!(
            draft.quote_request(),
            Err("Add at least one product line".to_string())
        );

        draft.add_line(&sample_product(1, 500), 1);
        let request = draft.quote_request().expect("valid draft");
        assert_eq!(request.customer_id, 3);
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].unit_price_cents, 500);
    }

    #[test]
    fn test_quote_request_rejects_bad_date() {
        let mut draft = DocumentDraft::new();
        draft.customer_id = Some(3);
        draft.add_line(&sample_product(1, 500), 1);

        draft.valid_until = "next week".to_string();
        assert!(draft.quote_request().is_err());

        draft.valid_until = "2026-09-30".to_string();
        let request = draft.quote_request().expect("valid date");
        assert_eq!(request.valid_until, Some("2026-09-30".to_string()));
    }

    #[test]
    fn test_sale_request_carries_payment_method() {
        let mut draft = DocumentDraft::new();
        draft.customer_id = Some(3);
        draft.payment_method = Some(PaymentMethod::Card);
        draft.add_line(&sample_product(1, 500), 2);

        let request = draft.sale_request().expect("valid draft");
        assert_eq!(request.payment_method, Some(PaymentMethod::Card));
        assert_eq!(request.discount_bps, 0);
    }

    #[test]
    fn test_from_quote_round_trips_inputs() {
        let draft = {
            let quote = shared::Quote {
                id: 11,
                company_id: 1,
                customer_id: 3,
                customer_name: "Acme".to_string(),
                seller_id: Some(2),
                status: QuoteStatus::Draft,
                items: vec![shared::QuoteItem {
                    product_id: 7,
                    product_name: "Widget".to_string(),
                    quantity: 2,
                    unit_price_cents: 1099,
                    line_total_cents: 2198,
                }],
                subtotal_cents: 2198,
                discount_bps: 1000,
                discount_cents: 220,
                tax_bps: 825,
                tax_cents: 163,
                total_cents: 2141,
                valid_until: Some("2026-09-30".to_string()),
                notes: None,
                created_at: "2026-01-01T00:00:00Z".to_string(),
                updated_at: "2026-01-01T00:00:00Z".to_string(),
            };
            DocumentDraft::from_quote(&quote)
        };

        assert_eq!(draft.id, Some(11));
        assert_eq!(draft.customer_id, Some(3));
        assert_eq!(draft.discount_bps(), 1000);
        assert_eq!(draft.tax_bps(), 825);
        assert_eq!(draft.lines.len(), 1);
        assert_eq!(draft.totals.subtotal.cents(), 2198);
    }

    #[test]
    fn test_product_editor_round_trip() {
        let product = sample_product(7, 1234);
        let editor = ProductEditor::from_product(&product);
        assert_eq!(editor.price, "12.34");

        let request = editor.to_request().expect("valid editor");
        assert_eq!(request.price_cents, 1234);
        assert_eq!(request.stock, 10);
    }

    #[test]
    fn test_product_editor_rejects_bad_price() {
        let mut editor = ProductEditor::new();
        editor.name = "Widget".to_string();
        editor.price = "12.345".to_string();
        assert!(editor.to_request().is_err());

        editor.price = "12.34".to_string();
        assert!(editor.to_request().is_ok());
    }

    #[test]
    fn test_seller_editor_percent_to_bps() {
        let mut editor = SellerEditor::new();
        editor.name = "Rui".to_string();
        editor.email = "rui@example.com".to_string();
        editor.commission = "2.5".to_string();

        let request = editor.to_request().expect("valid editor");
        assert_eq!(request.commission_bps, 250);
        assert!(request.active);
    }

    #[test]
    fn test_expire_session_clears_credentials() {
        let mut state = AppState {
            auth_token: Some("token".to_string()),
            current_screen: Screen::Products,
            ..AppState::default()
        };
        state.products.items.push(sample_product(1, 500));

        state.expire_session("Session expired. Please sign in again.");

        assert!(state.auth_token.is_none());
        assert!(state.current_user.is_none());
        assert!(state.products.items.is_empty());
        assert_eq!(state.current_screen, Screen::Auth);
        match &state.auth {
            AuthState::Login { error, .. } => {
                assert_eq!(
                    error.as_deref(),
                    Some("Session expired. Please sign in again.")
                );
            }
            other => panic!("expected login form, got {:?}", other),
        }
        assert_eq!(state.pending_notifications.len(), 1);
        assert_eq!(state.pending_notifications[0].0, "warning");
    }

    #[test]
    fn test_requires_auth_for_everything_but_auth() {
        for screen in Screen::all() {
            assert_eq!(AppState::requires_auth(screen), screen != Screen::Auth);
        }
    }
}
