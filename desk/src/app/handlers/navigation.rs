//! # Navigation Handlers
//!
//! Screen changes with an authentication guard, plus Tab-order cycling.
//! Entering a data screen kicks off its fetches; every fetch carries its
//! own in-flight guard, so re-entering while a load runs is a no-op.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::app::tasks;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle screen change with authentication guard
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    let target = {
        let mut state = state.write();
        let target = if AppState::requires_auth(screen) && !state.is_authenticated() {
            tracing::info!(
                "Access denied: {} requires authentication, redirecting to sign-in",
                screen.title()
            );
            Screen::Auth
        } else {
            screen
        };
        state.current_screen = target;
        target
    };

    load_screen_data(state, event_tx, target);
}

/// Start the fetches a screen needs when it becomes current.
pub(crate) fn load_screen_data(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    match screen {
        Screen::Dashboard => tasks::dashboard::fetch_dashboard(state, event_tx),
        Screen::Products => {
            // Categories rarely change; one fetch per session is enough.
            if state.read().products.categories.is_empty() {
                tasks::products::fetch_categories(state.clone(), event_tx.clone());
            }
            tasks::products::fetch_products(state, event_tx);
        }
        Screen::Customers => tasks::customers::fetch_customers(state, event_tx),
        Screen::Sellers => tasks::sellers::fetch_sellers(state, event_tx),
        Screen::Quotes => tasks::quotes::fetch_quotes(state, event_tx),
        Screen::Sales => tasks::sales::fetch_sales(state, event_tx),
        Screen::Company => tasks::company::fetch_company(state, event_tx),
        Screen::Auth | Screen::Settings => {}
    }
}

/// Navigate to next screen in Tab order (skips protected screens if not authenticated)
///
/// Internal handler function - use [`crate::app::App::next_screen`] instead.
pub(crate) fn next_screen(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let chosen = {
        let mut state = match state.try_write() {
            Some(guard) => guard,
            None => {
                tracing::warn!("Skipped screen navigation - state locked");
                return;
            }
        };

        // Settings is only reachable from the nav bar, never by cycling.
        let screens: Vec<Screen> = Screen::all()
            .iter()
            .copied()
            .filter(|&s| s != Screen::Settings)
            .collect();

        let current_idx = screens
            .iter()
            .position(|&s| s == state.current_screen)
            .unwrap_or(0);

        let is_authenticated = state.is_authenticated();

        let mut next_idx = (current_idx + 1) % screens.len();
        let mut attempts = 0;
        let mut chosen = None;
        while attempts < screens.len() {
            let screen = screens[next_idx];
            if !AppState::requires_auth(screen) || is_authenticated {
                chosen = Some(screen);
                break;
            }
            next_idx = (next_idx + 1) % screens.len();
            attempts += 1;
        }

        // Fallback: everything reachable needs a session we do not have.
        let chosen = chosen.unwrap_or(Screen::Auth);
        state.current_screen = chosen;
        chosen
    };

    load_screen_data(state, event_tx, chosen);
}

/// Navigate to previous screen in Tab order (skips protected screens if not authenticated)
///
/// Internal handler function - use [`crate::app::App::previous_screen`] instead.
pub(crate) fn previous_screen(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let chosen = {
        let mut state = match state.try_write() {
            Some(guard) => guard,
            None => {
                tracing::warn!("Skipped screen navigation - state locked");
                return;
            }
        };

        // Settings is only reachable from the nav bar, never by cycling.
        let screens: Vec<Screen> = Screen::all()
            .iter()
            .copied()
            .filter(|&s| s != Screen::Settings)
            .collect();

        let current_idx = screens
            .iter()
            .position(|&s| s == state.current_screen)
            .unwrap_or(0);

        let is_authenticated = state.is_authenticated();

        let mut prev_idx = if current_idx == 0 {
            screens.len() - 1
        } else {
            current_idx - 1
        };
        let mut attempts = 0;
        let mut chosen = None;
        while attempts < screens.len() {
            let screen = screens[prev_idx];
            if !AppState::requires_auth(screen) || is_authenticated {
                chosen = Some(screen);
                break;
            }
            prev_idx = if prev_idx == 0 {
                screens.len() - 1
            } else {
                prev_idx - 1
            };
            attempts += 1;
        }

        let chosen = chosen.unwrap_or(Screen::Auth);
        state.current_screen = chosen;
        chosen
    };

    load_screen_data(state, event_tx, chosen);
}
