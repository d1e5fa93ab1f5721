//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async request
//! tasks, and application state.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                        │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains events, runs search debounce   │   │
//! │  │  - handle_event() - folds async results into state   │   │
//! │  │  - handle_*_click() - user action delegates          │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - One lock, held briefly, never across .await       │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                             │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  tasks/    - list and detail fetches per screen      │   │
//! │  │  handlers/ - validation + mutations (save, delete,   │   │
//! │  │              send, convert, pay, cancel)             │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Management Pattern
//!
//! The application uses `Arc<RwLock<AppState>>` for thread-safe state:
//!
//! ```rust,ignore
//! // Main thread: read state for rendering
//! let state = app.state.read();
//! // render UI from state
//! drop(state);
//!
//! // Async task: write results back
//! let mut state = app.state.write();
//! state.products.items = new_items;
//! drop(state);
//! ```
//!
//! **Critical**: locks are held for minimal duration and never across an
//! `.await`; request tasks snapshot what they need, run the HTTP call, and
//! report back as an [`AppEvent`].
//!
//! ## Event-Driven Communication
//!
//! ```rust,ignore
//! // Async task sends its result
//! event_tx.send(AppEvent::ProductsLoaded(result)).await?;
//!
//! // Main thread receives it in on_tick()
//! while let Ok(event) = app.event_rx.try_recv() {
//!     app.handle_event(event);
//! }
//! ```
//!
//! ## Related Modules
//!
//! - [`state`]: screen state, forms, and the document builder
//! - [`events`]: event enum for async communication
//! - [`handlers`]: user action handlers
//! - [`tasks`]: async fetch tasks

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::{QuoteStatus, SaleStatus};
use std::sync::Arc;
use std::time::Duration;

use crate::services::session;
use crate::ui::theme::ThemeConfig;

/// Main application orchestrator.
///
/// Owns the shared state handle and both ends of the event channel. The UI
/// calls the `handle_*` delegates for user actions; async tasks report back
/// through the channel, and [`App::on_tick`] folds those results into state
/// once per frame.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// - Use `read()` for rendering (shared lock, multiple readers)
    /// - Use `write()` for updates (exclusive lock, single writer)
    /// - **Critical**: hold locks for minimal duration to keep the UI responsive
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()` with
    /// `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender, cloned into every spawned task.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application: API client, persisted theme, and a previous
    /// session if one is stored on disk.
    ///
    /// When a session is restored, the app starts on the dashboard and kicks
    /// off its fetch immediately; otherwise it starts on the sign-in form.
    pub fn new() -> Self {
        let api_client = Arc::new(crate::services::api::ApiClient::new());

        let settings = SettingsState {
            theme_config: handlers::settings::load_settings(),
            config_path: handlers::settings::get_config_path()
                .to_string_lossy()
                .to_string(),
            unsaved_changes: false,
        };

        let mut state = AppState {
            api_client: Some(api_client),
            settings,
            ..AppState::default()
        };

        let mut restored = false;
        if let Some(stored) = session::load_session() {
            tracing::info!(user = %stored.user.email, "Restored previous session");
            state.auth_token = Some(stored.token);
            state.current_user = Some(stored.user);
            state.current_screen = Screen::Dashboard;
            restored = true;
        }

        let (event_tx, event_rx) = unbounded();

        let app = App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        };

        if restored {
            tasks::dashboard::fetch_dashboard(app.state.clone(), app.event_tx.clone());
        }

        tracing::info!(restored_session = restored, "App state initialized");

        app
    }

    /// Called every frame to process async events and run the search
    /// debounce.
    ///
    /// Drains the event channel without blocking, then checks whether a
    /// pending search edit has sat still long enough to fetch. Both checks
    /// are cheap, so calling this at the repaint rate is fine.
    pub fn on_tick(&mut self) {
        let started = std::time::Instant::now();
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }
        if events_processed > 0 {
            tracing::debug!(
                events_processed = events_processed,
                elapsed_us = started.elapsed().as_micros() as u64,
                "on_tick: folded events into state"
            );
        }

        let debounce = Duration::from_millis(SEARCH_DEBOUNCE_MS);
        let (run_products, run_customers) = {
            let state = self.state.read();
            let p = &state.products;
            let c = &state.customers;
            (
                p.search_pending && !p.loading && p.last_search_edit.elapsed() >= debounce,
                c.search_pending && !c.loading && c.last_search_edit.elapsed() >= debounce,
            )
        };
        if run_products {
            tasks::products::fetch_products(self.state.clone(), self.event_tx.clone());
        }
        if run_customers {
            tasks::customers::fetch_customers(self.state.clone(), self.event_tx.clone());
        }
    }

    /// Fold one async result into state. Delegates to the event_handler
    /// module; each fold takes the write lock briefly.
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Get a sender for hand-rolled integrations (tests, tooling).
    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle login button click
    pub fn handle_login_click(&mut self, email: String, password: String) {
        handlers::auth::handle_login_click(
            self.state.clone(),
            self.event_tx.clone(),
            email,
            password,
        );
    }

    /// Advance the registration wizard, validating the current step
    pub fn handle_register_next(&mut self) {
        handlers::auth::handle_register_next(self.state.clone());
    }

    /// Step back in the registration wizard
    pub fn handle_register_back(&mut self) {
        handlers::auth::handle_register_back(self.state.clone());
    }

    /// Submit the registration wizard
    pub fn handle_register_submit(&mut self) {
        handlers::auth::handle_register_submit(self.state.clone(), self.event_tx.clone());
    }

    /// Advance the password-reset wizard
    pub fn handle_reset_next(&mut self) {
        handlers::auth::handle_reset_next(self.state.clone(), self.event_tx.clone());
    }

    /// Step back in the password-reset wizard
    pub fn handle_reset_back(&mut self) {
        handlers::auth::handle_reset_back(self.state.clone());
    }

    /// Switch to the login form
    pub fn handle_switch_to_login(&mut self) {
        handlers::auth::handle_switch_to_login(self.state.clone());
    }

    /// Switch to the registration wizard
    pub fn handle_switch_to_register(&mut self) {
        handlers::auth::handle_switch_to_register(self.state.clone());
    }

    /// Switch to the password-reset wizard
    pub fn handle_switch_to_reset(&mut self) {
        handlers::auth::handle_switch_to_reset(self.state.clone());
    }

    /// Handle logout button click
    pub fn handle_logout_click(&mut self) {
        handlers::auth::handle_logout_click(self.state.clone());
    }

    /// Handle screen change
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(
            self.state.clone(),
            self.event_tx.clone(),
            screen,
        );
    }

    /// Navigate to next screen in Tab order
    pub fn next_screen(&mut self) {
        handlers::navigation::next_screen(self.state.clone(), self.event_tx.clone());
    }

    /// Navigate to previous screen in Tab order
    pub fn previous_screen(&mut self) {
        handlers::navigation::previous_screen(self.state.clone(), self.event_tx.clone());
    }

    /// Refresh the dashboard metrics
    pub fn refresh_dashboard(&mut self) {
        tasks::dashboard::fetch_dashboard(self.state.clone(), self.event_tx.clone());
    }

    // ----- Products -----

    pub fn handle_product_search(&mut self, search: String) {
        handlers::products::handle_search_changed(self.state.clone(), search);
    }

    pub fn open_product_editor(&mut self) {
        handlers::products::open_editor_new(self.state.clone());
    }

    pub fn edit_product(&mut self, id: i64) {
        handlers::products::open_editor(self.state.clone(), id);
    }

    pub fn close_product_editor(&mut self) {
        handlers::products::close_editor(self.state.clone());
    }

    pub fn handle_product_save(&mut self) {
        handlers::products::handle_save_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn request_product_delete(&mut self, id: i64) {
        handlers::products::request_delete(self.state.clone(), id);
    }

    pub fn cancel_product_delete(&mut self) {
        handlers::products::cancel_delete(self.state.clone());
    }

    pub fn confirm_product_delete(&mut self) {
        handlers::products::handle_delete_confirmed(self.state.clone(), self.event_tx.clone());
    }

    // ----- Customers -----

    pub fn handle_customer_search(&mut self, search: String) {
        handlers::customers::handle_search_changed(self.state.clone(), search);
    }

    pub fn open_customer_editor(&mut self) {
        handlers::customers::open_editor_new(self.state.clone());
    }

    pub fn edit_customer(&mut self, id: i64) {
        handlers::customers::open_editor(self.state.clone(), id);
    }

    pub fn close_customer_editor(&mut self) {
        handlers::customers::close_editor(self.state.clone());
    }

    pub fn handle_customer_save(&mut self) {
        handlers::customers::handle_save_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn request_customer_delete(&mut self, id: i64) {
        handlers::customers::request_delete(self.state.clone(), id);
    }

    pub fn cancel_customer_delete(&mut self) {
        handlers::customers::cancel_delete(self.state.clone());
    }

    pub fn confirm_customer_delete(&mut self) {
        handlers::customers::handle_delete_confirmed(self.state.clone(), self.event_tx.clone());
    }

    // ----- Sellers -----

    pub fn open_seller_editor(&mut self) {
        handlers::sellers::open_editor_new(self.state.clone());
    }

    pub fn edit_seller(&mut self, id: i64) {
        handlers::sellers::open_editor(self.state.clone(), id);
    }

    pub fn close_seller_editor(&mut self) {
        handlers::sellers::close_editor(self.state.clone());
    }

    pub fn handle_seller_save(&mut self) {
        handlers::sellers::handle_save_click(self.state.clone(), self.event_tx.clone());
    }

    /// Flip a seller's active flag straight from the table
    pub fn handle_seller_toggle_active(&mut self, id: i64) {
        handlers::sellers::handle_toggle_active(self.state.clone(), self.event_tx.clone(), id);
    }

    pub fn request_seller_delete(&mut self, id: i64) {
        handlers::sellers::request_delete(self.state.clone(), id);
    }

    pub fn cancel_seller_delete(&mut self) {
        handlers::sellers::cancel_delete(self.state.clone());
    }

    pub fn confirm_seller_delete(&mut self) {
        handlers::sellers::handle_delete_confirmed(self.state.clone(), self.event_tx.clone());
    }

    // ----- Quotes -----

    pub fn set_quote_filter(&mut self, filter: Option<QuoteStatus>) {
        handlers::quotes::set_status_filter(self.state.clone(), self.event_tx.clone(), filter);
    }

    pub fn open_quote_builder(&mut self) {
        handlers::quotes::open_builder_new(self.state.clone());
    }

    /// Reopen a draft quote for editing
    pub fn edit_quote(&mut self, id: i64) {
        handlers::quotes::open_builder_edit(self.state.clone(), id);
    }

    pub fn close_quote_builder(&mut self) {
        handlers::quotes::close_builder(self.state.clone());
    }

    pub fn handle_quote_add_line(&mut self) {
        handlers::quotes::handle_add_line(self.state.clone());
    }

    pub fn handle_quote_line_quantity(&mut self, product_id: i64, quantity: i64) {
        handlers::quotes::handle_line_quantity(self.state.clone(), product_id, quantity);
    }

    pub fn handle_quote_remove_line(&mut self, product_id: i64) {
        handlers::quotes::handle_remove_line(self.state.clone(), product_id);
    }

    pub fn handle_quote_save(&mut self) {
        handlers::quotes::handle_save_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_quote_send(&mut self, id: i64) {
        handlers::quotes::handle_send_click(self.state.clone(), self.event_tx.clone(), id);
    }

    pub fn handle_quote_convert(&mut self, id: i64) {
        handlers::quotes::handle_convert_click(self.state.clone(), self.event_tx.clone(), id);
    }

    pub fn request_quote_delete(&mut self, id: i64) {
        handlers::quotes::request_delete(self.state.clone(), id);
    }

    pub fn cancel_quote_delete(&mut self) {
        handlers::quotes::cancel_delete(self.state.clone());
    }

    pub fn confirm_quote_delete(&mut self) {
        handlers::quotes::handle_delete_confirmed(self.state.clone(), self.event_tx.clone());
    }

    // ----- Sales -----

    pub fn set_sale_filter(&mut self, filter: Option<SaleStatus>) {
        handlers::sales::set_status_filter(self.state.clone(), self.event_tx.clone(), filter);
    }

    pub fn open_sale_builder(&mut self) {
        handlers::sales::open_builder_new(self.state.clone());
    }

    pub fn close_sale_builder(&mut self) {
        handlers::sales::close_builder(self.state.clone());
    }

    pub fn handle_sale_add_line(&mut self) {
        handlers::sales::handle_add_line(self.state.clone());
    }

    pub fn handle_sale_line_quantity(&mut self, product_id: i64, quantity: i64) {
        handlers::sales::handle_line_quantity(self.state.clone(), product_id, quantity);
    }

    pub fn handle_sale_remove_line(&mut self, product_id: i64) {
        handlers::sales::handle_remove_line(self.state.clone(), product_id);
    }

    pub fn handle_sale_create(&mut self) {
        handlers::sales::handle_create_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_sale_pay(&mut self, id: i64) {
        handlers::sales::handle_pay_click(self.state.clone(), self.event_tx.clone(), id);
    }

    pub fn request_sale_cancel(&mut self, id: i64) {
        handlers::sales::request_cancel(self.state.clone(), id);
    }

    pub fn dismiss_sale_cancel(&mut self) {
        handlers::sales::dismiss_cancel(self.state.clone());
    }

    pub fn confirm_sale_cancel(&mut self) {
        handlers::sales::handle_cancel_confirmed(self.state.clone(), self.event_tx.clone());
    }

    pub fn open_sale_detail(&mut self, id: i64) {
        handlers::sales::open_detail(self.state.clone(), self.event_tx.clone(), id);
    }

    pub fn close_sale_detail(&mut self) {
        handlers::sales::close_detail(self.state.clone());
    }

    // ----- Company -----

    pub fn edit_company(&mut self) {
        handlers::company::start_edit(self.state.clone());
    }

    pub fn cancel_company_edit(&mut self) {
        handlers::company::cancel_edit(self.state.clone());
    }

    pub fn handle_company_save(&mut self) {
        handlers::company::handle_save_click(self.state.clone(), self.event_tx.clone());
    }

    // ----- Settings -----

    /// Handle a theme edit from the settings screen
    pub fn handle_theme_change(&mut self, config: ThemeConfig) {
        handlers::settings::handle_theme_change(self.state.clone(), config);
    }

    /// Handle settings save
    pub fn handle_settings_save(&mut self) {
        handlers::settings::handle_settings_save(self.state.clone());
    }

    /// Handle settings reset to defaults
    pub fn handle_settings_reset(&mut self) {
        handlers::settings::handle_settings_reset(self.state.clone());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{
        AuthResponse, Product, Quote, QuoteItem, Sale, SaleItem, SaleStatus, UserInfo,
    };

    // ========== Fixtures ==========

    fn sample_user() -> UserInfo {
        UserInfo {
            id: 7,
            name: "Alice".to_string(),
            email: "alice@acme.test".to_string(),
            role: "owner".to_string(),
            company_id: 3,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn auth_response() -> AuthResponse {
        AuthResponse {
            user: sample_user(),
            token: "jwt-token".to_string(),
            message: "Login successful".to_string(),
        }
    }

    fn sample_product(id: i64, name: &str) -> Product {
        Product {
            id,
            company_id: 3,
            category_id: None,
            name: name.to_string(),
            sku: None,
            description: None,
            price_cents: 459,
            stock: 10,
            active: true,
            created_at: "2024-05-01T10:00:00Z".to_string(),
            updated_at: "2024-05-01T10:00:00Z".to_string(),
        }
    }

    fn sample_quote(id: i64, status: QuoteStatus) -> Quote {
        Quote {
            id,
            company_id: 3,
            customer_id: 9,
            customer_name: "Acme Corp".to_string(),
            seller_id: None,
            status,
            items: vec![QuoteItem {
                product_id: 12,
                product_name: "Thermal paper roll".to_string(),
                quantity: 3,
                unit_price_cents: 459,
                line_total_cents: 1377,
            }],
            subtotal_cents: 1377,
            discount_bps: 0,
            discount_cents: 0,
            tax_bps: 0,
            tax_cents: 0,
            total_cents: 1377,
            valid_until: None,
            notes: None,
            created_at: "2024-06-01T12:00:00Z".to_string(),
            updated_at: "2024-06-01T12:00:00Z".to_string(),
        }
    }

    fn sample_sale(id: i64, status: SaleStatus, quote_id: Option<i64>) -> Sale {
        Sale {
            id,
            company_id: 3,
            customer_id: 9,
            customer_name: "Acme Corp".to_string(),
            seller_id: None,
            quote_id,
            status,
            payment_method: None,
            items: vec![SaleItem {
                product_id: 12,
                product_name: "Thermal paper roll".to_string(),
                quantity: 3,
                unit_price_cents: 459,
                line_total_cents: 1377,
            }],
            subtotal_cents: 1377,
            discount_bps: 0,
            discount_cents: 0,
            tax_bps: 0,
            tax_cents: 0,
            total_cents: 1377,
            notes: None,
            created_at: "2024-06-01T12:00:00Z".to_string(),
            updated_at: "2024-06-01T12:00:00Z".to_string(),
        }
    }

    fn sign_in(app: &App) {
        let mut state = app.state.write();
        state.auth_token = Some("jwt-token".to_string());
        state.current_user = Some(sample_user());
        state.current_screen = Screen::Dashboard;
    }

    fn sign_out(app: &App) {
        let mut state = app.state.write();
        state.auth_token = None;
        state.current_user = None;
        state.current_screen = Screen::Auth;
    }

    // ========== Screen Tests ==========

    #[test]
    fn test_screen_all_returns_correct_order() {
        let screens = Screen::all();

        assert_eq!(screens.len(), 9);
        assert_eq!(screens[0], Screen::Auth);
        assert_eq!(screens[1], Screen::Dashboard);
        assert_eq!(screens[2], Screen::Products);
        assert_eq!(screens[3], Screen::Customers);
        assert_eq!(screens[4], Screen::Quotes);
        assert_eq!(screens[5], Screen::Sales);
        assert_eq!(screens[6], Screen::Sellers);
        assert_eq!(screens[7], Screen::Company);
        assert_eq!(screens[8], Screen::Settings);
    }

    #[test]
    fn test_screen_titles() {
        assert_eq!(Screen::Auth.title(), "Sign In");
        assert_eq!(Screen::Dashboard.title(), "Dashboard");
        assert_eq!(Screen::Company.title(), "Company Profile");
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.current_screen, Screen::Auth);
        assert!(matches!(state.auth, AuthState::Login { .. }));
        assert!(state.auth_token.is_none());
        assert!(state.products.items.is_empty());
        assert!(state.pending_notifications.is_empty());
    }

    // ========== Screen Navigation Tests ==========

    #[tokio::test]
    async fn test_next_screen_cycles_forward_when_signed_in() {
        let mut app = App::new();
        sign_in(&app);

        let expected = [
            Screen::Products,
            Screen::Customers,
            Screen::Quotes,
            Screen::Sales,
            Screen::Sellers,
            Screen::Company,
            Screen::Auth,
            Screen::Dashboard,
        ];
        for screen in expected {
            app.next_screen();
            assert_eq!(app.state.read().current_screen, screen);
        }
    }

    #[tokio::test]
    async fn test_previous_screen_cycles_backward_when_signed_in() {
        let mut app = App::new();
        sign_in(&app);

        app.previous_screen();
        assert_eq!(app.state.read().current_screen, Screen::Auth);

        // Settings is nav-bar only, so backwards from Auth lands on Company.
        app.previous_screen();
        assert_eq!(app.state.read().current_screen, Screen::Company);
    }

    #[tokio::test]
    async fn test_next_screen_stays_on_auth_when_signed_out() {
        let mut app = App::new();
        sign_out(&app);

        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Auth);
    }

    #[tokio::test]
    async fn test_screen_change_redirects_unauthenticated_to_auth() {
        let mut app = App::new();
        sign_out(&app);

        app.handle_screen_change(Screen::Products);
        assert_eq!(app.state.read().current_screen, Screen::Auth);
    }

    #[tokio::test]
    async fn test_screen_change_starts_list_fetch() {
        let mut app = App::new();
        sign_in(&app);

        app.handle_screen_change(Screen::Products);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Products);
        assert!(state.products.loading);
    }

    #[tokio::test]
    async fn test_app_new_provides_api_client() {
        let app = App::new();
        assert!(app.state.read().api_client.is_some());
    }

    // ========== Auth Event Tests ==========

    #[tokio::test]
    async fn test_login_result_success_lands_on_dashboard() {
        let mut app = App::new();
        sign_out(&app);

        app.handle_event(AppEvent::LoginResult(Ok(auth_response())));

        {
            let state = app.state.read();
            assert_eq!(state.auth_token, Some("jwt-token".to_string()));
            assert_eq!(state.current_screen, Screen::Dashboard);
            assert!(!state.auth_loading);
            assert!(state
                .pending_notifications
                .iter()
                .any(|(kind, message)| kind == "success" && message == "Signed in"));
            // Dashboard fetch started as part of the fold
            assert!(state.dashboard.loading);
        }

        session::clear_session();
    }

    #[tokio::test]
    async fn test_login_result_error_stays_on_login_form() {
        let mut app = App::new();
        sign_out(&app);

        app.handle_event(AppEvent::LoginResult(Err("Invalid credentials".to_string())));

        let state = app.state.read();
        assert!(state.auth_token.is_none());
        assert_eq!(state.current_screen, Screen::Auth);
        assert!(!state.auth_loading);
        match &state.auth {
            AuthState::Login { error, .. } => {
                assert_eq!(error, &Some("Invalid credentials".to_string()));
            }
            _ => panic!("Expected Login state in test"),
        }
    }

    #[tokio::test]
    async fn test_session_expired_returns_to_login_with_reason() {
        let mut app = App::new();
        sign_in(&app);
        {
            let mut state = app.state.write();
            state.products.items = vec![sample_product(1, "Paper")];
        }

        app.handle_event(AppEvent::SessionExpired(
            "Session expired. Please sign in again.".to_string(),
        ));

        let state = app.state.read();
        assert!(state.auth_token.is_none());
        assert!(state.current_user.is_none());
        assert_eq!(state.current_screen, Screen::Auth);
        assert!(state.products.items.is_empty());
        match &state.auth {
            AuthState::Login { error, .. } => assert!(error.is_some()),
            _ => panic!("Expected Login state in test"),
        }
    }

    #[tokio::test]
    async fn test_logout_clears_credentials() {
        let mut app = App::new();
        sign_in(&app);

        app.handle_logout_click();

        let state = app.state.read();
        assert!(state.auth_token.is_none());
        assert_eq!(state.current_screen, Screen::Auth);
        assert!(state
            .pending_notifications
            .iter()
            .any(|(kind, message)| kind == "info" && message == "Signed out"));
    }

    // ========== Registration Wizard Tests ==========

    #[tokio::test]
    async fn test_register_next_blocks_invalid_step() {
        let mut app = App::new();
        sign_out(&app);
        app.handle_switch_to_register();

        app.handle_register_next();

        let state = app.state.read();
        match &state.auth {
            AuthState::Register { step, error, .. } => {
                assert_eq!(*step, 0);
                assert!(error.is_some());
            }
            _ => panic!("Expected Register state in test"),
        }
    }

    #[tokio::test]
    async fn test_register_next_advances_after_valid_step() {
        let mut app = App::new();
        sign_out(&app);
        app.handle_switch_to_register();
        {
            let mut state = app.state.write();
            if let AuthState::Register { form, .. } = &mut state.auth {
                form.name = "Alice".to_string();
                form.email = "alice@acme.test".to_string();
                form.password = "longenough".to_string();
                form.confirm_password = "longenough".to_string();
            }
        }

        app.handle_register_next();

        let state = app.state.read();
        match &state.auth {
            AuthState::Register { step, error, .. } => {
                assert_eq!(*step, 1);
                assert!(error.is_none());
            }
            _ => panic!("Expected Register state in test"),
        }
    }

    #[tokio::test]
    async fn test_register_back_preserves_input() {
        let mut app = App::new();
        sign_out(&app);
        app.handle_switch_to_register();
        {
            let mut state = app.state.write();
            if let AuthState::Register { step, form, .. } = &mut state.auth {
                *step = 1;
                form.name = "Alice".to_string();
            }
        }

        app.handle_register_back();

        let state = app.state.read();
        match &state.auth {
            AuthState::Register { step, form, .. } => {
                assert_eq!(*step, 0);
                assert_eq!(form.name, "Alice");
            }
            _ => panic!("Expected Register state in test"),
        }
    }

    // ========== Entity Event Tests ==========

    #[tokio::test]
    async fn test_product_saved_replaces_row_and_closes_editor() {
        let mut app = App::new();
        sign_in(&app);
        {
            let mut state = app.state.write();
            state.products.items = vec![sample_product(1, "Paper"), sample_product(2, "Ink")];
            state.products.editor = Some(ProductEditor::new());
            state.products.saving = true;
        }

        app.handle_event(AppEvent::ProductSaved(Ok(sample_product(2, "Ink XL"))));

        let state = app.state.read();
        assert!(!state.products.saving);
        assert!(state.products.editor.is_none());
        assert_eq!(state.products.items.len(), 2);
        assert_eq!(state.products.items[1].name, "Ink XL");
    }

    #[tokio::test]
    async fn test_product_saved_inserts_new_row_first() {
        let mut app = App::new();
        sign_in(&app);
        {
            let mut state = app.state.write();
            state.products.items = vec![sample_product(1, "Paper")];
        }

        app.handle_event(AppEvent::ProductSaved(Ok(sample_product(9, "Stapler"))));

        let state = app.state.read();
        assert_eq!(state.products.items.len(), 2);
        assert_eq!(state.products.items[0].id, 9);
    }

    #[tokio::test]
    async fn test_product_save_error_stays_in_editor() {
        let mut app = App::new();
        sign_in(&app);
        {
            let mut state = app.state.write();
            state.products.editor = Some(ProductEditor::new());
            state.products.saving = true;
        }

        app.handle_event(AppEvent::ProductSaved(Err("SKU already in use".to_string())));

        let state = app.state.read();
        assert!(!state.products.saving);
        let editor = state.products.editor.as_ref().expect("editor stays open");
        assert_eq!(editor.error, Some("SKU already in use".to_string()));
    }

    #[tokio::test]
    async fn test_product_deleted_removes_row() {
        let mut app = App::new();
        sign_in(&app);
        {
            let mut state = app.state.write();
            state.products.items = vec![sample_product(1, "Paper"), sample_product(2, "Ink")];
            state.products.confirm_delete = Some(1);
            state.products.saving = true;
        }

        app.handle_event(AppEvent::ProductDeleted(Ok(1)));

        let state = app.state.read();
        assert!(!state.products.saving);
        assert!(state.products.confirm_delete.is_none());
        assert_eq!(state.products.items.len(), 1);
        assert_eq!(state.products.items[0].id, 2);
    }

    #[tokio::test]
    async fn test_quote_converted_jumps_to_new_sale() {
        let mut app = App::new();
        sign_in(&app);
        {
            let mut state = app.state.write();
            state.quotes.items = vec![sample_quote(17, QuoteStatus::Sent)];
            state.quotes.saving = true;
        }

        app.handle_event(AppEvent::QuoteConverted(Ok(sample_sale(
            44,
            SaleStatus::Pending,
            Some(17),
        ))));

        let state = app.state.read();
        assert!(!state.quotes.saving);
        assert_eq!(state.quotes.items[0].status, QuoteStatus::Converted);
        assert_eq!(state.sales.items[0].id, 44);
        assert_eq!(state.sales.detail.as_ref().map(|s| s.id), Some(44));
        assert_eq!(state.current_screen, Screen::Sales);
        assert!(state
            .pending_notifications
            .iter()
            .any(|(_, message)| message == "Quote converted to sale #44"));
    }

    #[tokio::test]
    async fn test_sale_saved_from_builder_reports_creation() {
        let mut app = App::new();
        sign_in(&app);
        {
            let mut state = app.state.write();
            state.sales.builder = Some(DocumentDraft::new());
            state.sales.saving = true;
        }

        app.handle_event(AppEvent::SaleSaved(Ok(sample_sale(
            44,
            SaleStatus::Pending,
            None,
        ))));

        let state = app.state.read();
        assert!(state.sales.builder.is_none());
        assert_eq!(state.sales.items[0].id, 44);
        assert!(state
            .pending_notifications
            .iter()
            .any(|(_, message)| message == "Sale created"));
    }

    #[tokio::test]
    async fn test_sale_saved_pay_updates_list_and_detail() {
        let mut app = App::new();
        sign_in(&app);
        {
            let mut state = app.state.write();
            state.sales.items = vec![sample_sale(44, SaleStatus::Pending, None)];
            state.sales.detail = Some(sample_sale(44, SaleStatus::Pending, None));
            state.sales.saving = true;
        }

        app.handle_event(AppEvent::SaleSaved(Ok(sample_sale(
            44,
            SaleStatus::Paid,
            None,
        ))));

        let state = app.state.read();
        assert_eq!(state.sales.items[0].status, SaleStatus::Paid);
        assert_eq!(
            state.sales.detail.as_ref().map(|s| s.status),
            Some(SaleStatus::Paid)
        );
        assert!(state
            .pending_notifications
            .iter()
            .any(|(_, message)| message == "Sale marked paid"));
    }

    // ========== Search Debounce Tests ==========

    #[tokio::test]
    async fn test_search_debounce_fires_after_pause() {
        let mut app = App::new();
        sign_in(&app);
        {
            let mut state = app.state.write();
            state.products.search = "paper".to_string();
            state.products.search_pending = true;
            state.products.last_search_edit =
                std::time::Instant::now() - Duration::from_millis(SEARCH_DEBOUNCE_MS + 100);
        }

        app.on_tick();

        let state = app.state.read();
        assert!(state.products.loading);
        assert!(!state.products.search_pending);
    }

    #[tokio::test]
    async fn test_search_debounce_waits_while_typing() {
        let mut app = App::new();
        sign_in(&app);
        app.handle_product_search("pa".to_string());

        app.on_tick();

        let state = app.state.read();
        assert!(!state.products.loading);
        assert!(state.products.search_pending);
    }
}
