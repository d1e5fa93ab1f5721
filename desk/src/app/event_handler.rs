//! # Event Handler
//!
//! Folds async task results into application state.
//!
//! Each handler takes the write lock briefly, updates the screen state the
//! event belongs to, and releases the lock before triggering any follow-up
//! fetch. Error strings arriving here are already user-facing; rejected
//! bearer tokens never reach the entity handlers because the task layer
//! rewrites them into [`AppEvent::SessionExpired`].

use shared::{QuoteStatus, SaleStatus};

use crate::app::events::AppEvent;
use crate::app::state::AuthState;
use crate::app::{tasks, App, Screen};
use crate::services::session::{self, StoredSession};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::RegisterResult(result) => self.handle_register_result(result),
            AppEvent::ResetRequested(result) => self.handle_reset_requested(result),
            AppEvent::ResetConfirmed(result) => self.handle_reset_confirmed(result),
            AppEvent::SessionExpired(reason) => self.handle_session_expired(reason),
            AppEvent::DashboardLoaded(result) => self.handle_dashboard_loaded(result),
            AppEvent::ProductsLoaded(result) => self.handle_products_loaded(result),
            AppEvent::CategoriesLoaded(result) => self.handle_categories_loaded(result),
            AppEvent::ProductSaved(result) => self.handle_product_saved(result),
            AppEvent::ProductDeleted(result) => self.handle_product_deleted(result),
            AppEvent::CustomersLoaded(result) => self.handle_customers_loaded(result),
            AppEvent::CustomerSaved(result) => self.handle_customer_saved(result),
            AppEvent::CustomerDeleted(result) => self.handle_customer_deleted(result),
            AppEvent::SellersLoaded(result) => self.handle_sellers_loaded(result),
            AppEvent::SellerSaved(result) => self.handle_seller_saved(result),
            AppEvent::SellerDeleted(result) => self.handle_seller_deleted(result),
            AppEvent::QuotesLoaded(result) => self.handle_quotes_loaded(result),
            AppEvent::QuoteSaved(result) => self.handle_quote_saved(result),
            AppEvent::QuoteDeleted(result) => self.handle_quote_deleted(result),
            AppEvent::QuoteConverted(result) => self.handle_quote_converted(result),
            AppEvent::SalesLoaded(result) => self.handle_sales_loaded(result),
            AppEvent::SaleLoaded(result) => self.handle_sale_loaded(result),
            AppEvent::SaleSaved(result) => self.handle_sale_saved(result),
            AppEvent::CompanyLoaded(result) => self.handle_company_loaded(result),
            AppEvent::CompanySaved(result) => self.handle_company_saved(result),
        }
    }
}

impl App {
    fn handle_login_result(&mut self, result: Result<shared::AuthResponse, String>) {
        tracing::info!(event = "LoginResult", success = result.is_ok(), "Processing login result");

        match result {
            Ok(auth_response) => {
                // Persist before locking so file I/O never holds the state lock
                let stored = StoredSession {
                    token: auth_response.token.clone(),
                    user: auth_response.user.clone(),
                };
                if let Err(e) = session::save_session(&stored) {
                    tracing::warn!(error = %e, "Failed to persist session file");
                }

                {
                    let mut state = self.state.write();
                    state.auth_loading = false;
                    state.auth_token = Some(auth_response.token);
                    state.current_user = Some(auth_response.user);
                    state.auth = AuthState::login();
                    state.current_screen = Screen::Dashboard;
                    state.notify_success("Signed in");
                }

                tasks::dashboard::fetch_dashboard(self.state.clone(), self.event_tx.clone());
            }
            Err(err) => {
                let mut state = self.state.write();
                state.auth_loading = false;
                state.auth.set_error(err);
            }
        }
    }

    fn handle_register_result(&mut self, result: Result<shared::AuthResponse, String>) {
        tracing::info!(
            event = "RegisterResult",
            success = result.is_ok(),
            "Processing registration result"
        );

        match result {
            Ok(auth_response) => {
                let stored = StoredSession {
                    token: auth_response.token.clone(),
                    user: auth_response.user.clone(),
                };
                if let Err(e) = session::save_session(&stored) {
                    tracing::warn!(error = %e, "Failed to persist session file");
                }

                {
                    let mut state = self.state.write();
                    state.auth_loading = false;
                    state.auth_token = Some(auth_response.token);
                    state.current_user = Some(auth_response.user);
                    state.auth = AuthState::login();
                    state.current_screen = Screen::Dashboard;
                    state.notify_success("Account created");
                }

                tasks::dashboard::fetch_dashboard(self.state.clone(), self.event_tx.clone());
            }
            Err(err) => {
                let mut state = self.state.write();
                state.auth_loading = false;
                state.auth.set_error(err);
            }
        }
    }

    fn handle_reset_requested(&mut self, result: Result<(), String>) {
        let mut state = self.state.write();
        state.auth_loading = false;
        match result {
            Ok(()) => {
                if let AuthState::ResetPassword { step, error, .. } = &mut state.auth {
                    *step = 1;
                    *error = None;
                }
                state.notify_info("Check your email for the reset code");
            }
            Err(err) => state.auth.set_error(err),
        }
    }

    fn handle_reset_confirmed(&mut self, result: Result<(), String>) {
        let mut state = self.state.write();
        state.auth_loading = false;
        match result {
            Ok(()) => {
                if let AuthState::ResetPassword { step, error, .. } = &mut state.auth {
                    *step = 2;
                    *error = None;
                }
                state.notify_success("Password updated");
            }
            Err(err) => state.auth.set_error(err),
        }
    }

    fn handle_session_expired(&mut self, reason: String) {
        tracing::warn!(reason = %reason, "Bearer token rejected, dropping session");
        session::clear_session();
        let mut state = self.state.write();
        state.expire_session(&reason);
    }

    fn handle_dashboard_loaded(&mut self, result: Result<shared::DashboardMetrics, String>) {
        let mut state = self.state.write();
        state.dashboard.loading = false;
        match result {
            Ok(metrics) => state.dashboard.metrics = Some(metrics),
            Err(err) => state.notify_error(err),
        }
    }

    fn handle_products_loaded(&mut self, result: Result<Vec<shared::Product>, String>) {
        let mut state = self.state.write();
        state.products.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Product list loaded");
                state.products.items = items;
            }
            Err(err) => state.notify_error(err),
        }
    }

    fn handle_categories_loaded(&mut self, result: Result<Vec<shared::Category>, String>) {
        let mut state = self.state.write();
        match result {
            Ok(categories) => state.products.categories = categories,
            Err(err) => {
                // Picker just stays empty; the product form still works
                tracing::warn!(error = %err, "Failed to fetch categories");
            }
        }
    }

    fn handle_product_saved(&mut self, result: Result<shared::Product, String>) {
        let mut state = self.state.write();
        state.products.saving = false;
        match result {
            Ok(product) => {
                if let Some(existing) = state
                    .products
                    .items
                    .iter_mut()
                    .find(|p| p.id == product.id)
                {
                    *existing = product;
                } else {
                    state.products.items.insert(0, product);
                }
                state.products.editor = None;
                state.notify_success("Product saved");
            }
            Err(err) => match &mut state.products.editor {
                Some(editor) => editor.error = Some(err),
                None => state.notify_error(err),
            },
        }
    }

    fn handle_product_deleted(&mut self, result: Result<i64, String>) {
        let mut state = self.state.write();
        state.products.saving = false;
        state.products.confirm_delete = None;
        match result {
            Ok(id) => {
                state.products.items.retain(|p| p.id != id);
                state.notify_success("Product deleted");
            }
            Err(err) => state.notify_error(err),
        }
    }

    fn handle_customers_loaded(&mut self, result: Result<Vec<shared::Customer>, String>) {
        let mut state = self.state.write();
        state.customers.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Customer list loaded");
                state.customers.items = items;
            }
            Err(err) => state.notify_error(err),
        }
    }

    fn handle_customer_saved(&mut self, result: Result<shared::Customer, String>) {
        let mut state = self.state.write();
        state.customers.saving = false;
        match result {
            Ok(customer) => {
                if let Some(existing) = state
                    .customers
                    .items
                    .iter_mut()
                    .find(|c| c.id == customer.id)
                {
                    *existing = customer;
                } else {
                    state.customers.items.insert(0, customer);
                }
                state.customers.editor = None;
                state.notify_success("Customer saved");
            }
            Err(err) => match &mut state.customers.editor {
                Some(editor) => editor.error = Some(err),
                None => state.notify_error(err),
            },
        }
    }

    fn handle_customer_deleted(&mut self, result: Result<i64, String>) {
        let mut state = self.state.write();
        state.customers.saving = false;
        state.customers.confirm_delete = None;
        match result {
            Ok(id) => {
                state.customers.items.retain(|c| c.id != id);
                state.notify_success("Customer deleted");
            }
            Err(err) => state.notify_error(err),
        }
    }

    fn handle_sellers_loaded(&mut self, result: Result<Vec<shared::Seller>, String>) {
        let mut state = self.state.write();
        state.sellers.loading = false;
        match result {
            Ok(items) => state.sellers.items = items,
            Err(err) => state.notify_error(err),
        }
    }

    fn handle_seller_saved(&mut self, result: Result<shared::Seller, String>) {
        let mut state = self.state.write();
        state.sellers.saving = false;
        match result {
            Ok(seller) => {
                if let Some(existing) =
                    state.sellers.items.iter_mut().find(|s| s.id == seller.id)
                {
                    *existing = seller;
                } else {
                    state.sellers.items.insert(0, seller);
                }
                state.sellers.editor = None;
                state.notify_success("Seller saved");
            }
            Err(err) => match &mut state.sellers.editor {
                Some(editor) => editor.error = Some(err),
                None => state.notify_error(err),
            },
        }
    }

    fn handle_seller_deleted(&mut self, result: Result<i64, String>) {
        let mut state = self.state.write();
        state.sellers.saving = false;
        state.sellers.confirm_delete = None;
        match result {
            Ok(id) => {
                state.sellers.items.retain(|s| s.id != id);
                state.notify_success("Seller deleted");
            }
            Err(err) => state.notify_error(err),
        }
    }

    fn handle_quotes_loaded(&mut self, result: Result<Vec<shared::Quote>, String>) {
        let mut state = self.state.write();
        state.quotes.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Quote list loaded");
                state.quotes.items = items;
            }
            Err(err) => state.notify_error(err),
        }
    }

    fn handle_quote_saved(&mut self, result: Result<shared::Quote, String>) {
        let mut state = self.state.write();
        state.quotes.saving = false;
        match result {
            Ok(quote) => {
                let message = match quote.status {
                    QuoteStatus::Sent => "Quote sent",
                    _ => "Quote saved",
                };
                if let Some(existing) =
                    state.quotes.items.iter_mut().find(|q| q.id == quote.id)
                {
                    *existing = quote;
                } else {
                    state.quotes.items.insert(0, quote);
                }
                state.quotes.builder = None;
                state.notify_success(message);
            }
            Err(err) => match &mut state.quotes.builder {
                Some(builder) => builder.error = Some(err),
                None => state.notify_error(err),
            },
        }
    }

    fn handle_quote_deleted(&mut self, result: Result<i64, String>) {
        let mut state = self.state.write();
        state.quotes.saving = false;
        state.quotes.confirm_delete = None;
        match result {
            Ok(id) => {
                state.quotes.items.retain(|q| q.id != id);
                state.notify_success("Quote deleted");
            }
            Err(err) => state.notify_error(err),
        }
    }

    /// A converted quote comes back as the new sale; the quote list entry
    /// flips to converted locally and the app jumps to the sale.
    fn handle_quote_converted(&mut self, result: Result<shared::Sale, String>) {
        tracing::info!(
            event = "QuoteConverted",
            success = result.is_ok(),
            "Processing quote conversion"
        );

        let mut state = self.state.write();
        state.quotes.saving = false;
        match result {
            Ok(sale) => {
                if let Some(quote) = state
                    .quotes
                    .items
                    .iter_mut()
                    .find(|q| Some(q.id) == sale.quote_id)
                {
                    quote.status = QuoteStatus::Converted;
                }
                let message = format!("Quote converted to sale #{}", sale.id);
                state.sales.items.insert(0, sale.clone());
                state.sales.detail = Some(sale);
                state.current_screen = Screen::Sales;
                state.notify_success(message);
            }
            Err(err) => state.notify_error(err),
        }
    }

    fn handle_sales_loaded(&mut self, result: Result<Vec<shared::Sale>, String>) {
        let mut state = self.state.write();
        state.sales.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Sale list loaded");
                state.sales.items = items;
            }
            Err(err) => state.notify_error(err),
        }
    }

    fn handle_sale_loaded(&mut self, result: Result<shared::Sale, String>) {
        let mut state = self.state.write();
        state.sales.detail_loading = false;
        match result {
            Ok(sale) => state.sales.detail = Some(sale),
            Err(err) => state.notify_error(err),
        }
    }

    fn handle_sale_saved(&mut self, result: Result<shared::Sale, String>) {
        let mut state = self.state.write();
        state.sales.saving = false;
        state.sales.confirm_cancel = None;
        match result {
            Ok(sale) => {
                let created = state.sales.builder.take().is_some();
                let message = if created {
                    "Sale created"
                } else {
                    match sale.status {
                        SaleStatus::Paid => "Sale marked paid",
                        SaleStatus::Cancelled => "Sale cancelled",
                        SaleStatus::Pending => "Sale updated",
                    }
                };

                if state.sales.detail.as_ref().map(|d| d.id) == Some(sale.id) {
                    state.sales.detail = Some(sale.clone());
                }
                if let Some(existing) =
                    state.sales.items.iter_mut().find(|s| s.id == sale.id)
                {
                    *existing = sale;
                } else {
                    state.sales.items.insert(0, sale);
                }
                state.notify_success(message);
            }
            Err(err) => match &mut state.sales.builder {
                Some(builder) => builder.error = Some(err),
                None => state.notify_error(err),
            },
        }
    }

    fn handle_company_loaded(&mut self, result: Result<shared::Company, String>) {
        let mut state = self.state.write();
        state.company.loading = false;
        match result {
            Ok(company) => state.company.company = Some(company),
            Err(err) => state.notify_error(err),
        }
    }

    fn handle_company_saved(&mut self, result: Result<shared::Company, String>) {
        let mut state = self.state.write();
        state.company.saving = false;
        match result {
            Ok(company) => {
                state.company.company = Some(company);
                state.company.editor = None;
                state.notify_success("Company profile saved");
            }
            Err(err) => match &mut state.company.editor {
                Some(editor) => editor.error = Some(err),
                None => state.notify_error(err),
            },
        }
    }
}
