//! # Authentication Handlers
//!
//! Login, the registration and password-reset wizards, and logout.
//!
//! The wizards are plain step counters over their form structs; Next is
//! gated by per-step validation and Back never clears what was typed.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, AuthState, REGISTER_STEPS};
use crate::core::service::ApiService;
use crate::services::session;
use crate::utils::validation::validate_email;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::PasswordResetConfirm;
use std::sync::Arc;

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    let api_client = {
        let mut state = state.write();
        if state.auth_loading {
            return;
        }
        if let Err(message) = validate_email(email.trim()).into_result() {
            state.auth.set_error(message);
            return;
        }
        if password.is_empty() {
            state.auth.set_error("Password is required");
            return;
        }
        let api_client = match state.api_client.clone() {
            Some(client) => client,
            None => {
                state.auth.set_error("API client not available");
                return;
            }
        };
        state.auth_loading = true;
        state.auth.clear_error();
        api_client
    };

    let email = email.trim().to_string();
    tokio::spawn(async move {
        let result = api_client.login(email, password).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Advance the registration wizard when the current step validates.
pub(crate) fn handle_register_next(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if let AuthState::Register { step, form, error } = &mut state.auth {
        match form.validate_step(*step) {
            Ok(()) => {
                *error = None;
                if *step + 1 < REGISTER_STEPS.len() {
                    *step += 1;
                }
            }
            Err(message) => *error = Some(message),
        }
    }
}

/// Step back in the registration wizard, keeping everything typed so far.
pub(crate) fn handle_register_back(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if let AuthState::Register { step, error, .. } = &mut state.auth {
        if *step > 0 {
            *step -= 1;
            *error = None;
        }
    }
}

/// Submit the registration wizard from the review step.
pub(crate) fn handle_register_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, request) = {
        let mut state = state.write();
        if state.auth_loading {
            return;
        }

        let form = match &state.auth {
            AuthState::Register { form, .. } => form.clone(),
            _ => return,
        };

        // Back lets users change earlier answers after they were first
        // checked, so every gated step revalidates here.
        if let Some(message) =
            (0..REGISTER_STEPS.len()).find_map(|step| form.validate_step(step).err())
        {
            state.auth.set_error(message);
            return;
        }

        let api_client = match state.api_client.clone() {
            Some(client) => client,
            None => {
                state.auth.set_error("API client not available");
                return;
            }
        };
        state.auth_loading = true;
        state.auth.clear_error();
        (api_client, form.to_request())
    };

    tokio::spawn(async move {
        let result = api_client.register(request).await;
        let _ = event_tx.send(AppEvent::RegisterResult(result)).await;
    });
}

/// Advance the password-reset wizard. Steps 0 and 1 submit to the backend;
/// step 2 is the done screen, handled by [`handle_switch_to_login`].
pub(crate) fn handle_reset_next(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    enum Submit {
        Request(String),
        Confirm(PasswordResetConfirm),
    }

    let (api_client, submit) = {
        let mut state = state.write();
        if state.auth_loading {
            return;
        }

        let (step, form) = match &state.auth {
            AuthState::ResetPassword { step, form, .. } => (*step, form.clone()),
            _ => return,
        };

        if let Err(message) = form.validate_step(step) {
            state.auth.set_error(message);
            return;
        }

        let submit = match step {
            0 => Submit::Request(form.email.trim().to_string()),
            1 => Submit::Confirm(PasswordResetConfirm {
                email: form.email.trim().to_string(),
                code: form.code.trim().to_string(),
                new_password: form.new_password.clone(),
            }),
            _ => return,
        };

        let api_client = match state.api_client.clone() {
            Some(client) => client,
            None => {
                state.auth.set_error("API client not available");
                return;
            }
        };
        state.auth_loading = true;
        state.auth.clear_error();
        (api_client, submit)
    };

    tokio::spawn(async move {
        match submit {
            Submit::Request(email) => {
                let result = api_client.request_password_reset(email).await;
                let _ = event_tx.send(AppEvent::ResetRequested(result)).await;
            }
            Submit::Confirm(request) => {
                let result = api_client.confirm_password_reset(request).await;
                let _ = event_tx.send(AppEvent::ResetConfirmed(result)).await;
            }
        }
    });
}

/// Step back in the password-reset wizard.
pub(crate) fn handle_reset_back(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if let AuthState::ResetPassword { step, error, .. } = &mut state.auth {
        if *step == 1 {
            *step = 0;
            *error = None;
        }
    }
}

/// Switch to the login form
pub(crate) fn handle_switch_to_login(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.auth = AuthState::login();
}

/// Switch to the registration wizard
pub(crate) fn handle_switch_to_register(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.auth = AuthState::register();
}

/// Switch to the password-reset wizard
pub(crate) fn handle_switch_to_reset(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.auth = AuthState::reset_password();
}

/// Sign out: revoke the token server-side as best effort, then drop the
/// session locally whatever the server said.
pub(crate) fn handle_logout_click(state: Arc<RwLock<AppState>>) {
    let (api_client, token) = {
        let state = state.read();
        (state.api_client.clone(), state.auth_token.clone())
    };

    if let (Some(api_client), Some(token)) = (api_client, token) {
        tokio::spawn(async move {
            if let Err(e) = api_client.logout(&token).await {
                tracing::debug!(error = %e, "Logout call failed");
            }
        });
    }

    session::clear_session();
    let mut state = state.write();
    state.reset_auth();
    state.notify_info("Signed out");
}
