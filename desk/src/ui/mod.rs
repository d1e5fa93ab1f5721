//! # UI Rendering Module
//!
//! Orchestrates the per-frame render pass. Every frame takes one snapshot of
//! [`AppState`] under `try_read` (skipping the frame if a writer holds the
//! lock) and renders from the clone, so no lock is ever held while screen
//! code runs handler delegates.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, AppState, Screen};
use egui;
use theme::Theme;
use widgets::notifications::NotificationManager;

/// Main render function, called every frame.
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    // Pending toasts must be taken out before the snapshot below; draining
    // them from the clone would drop them on the floor.
    notifications.drain_pending(&app.state);

    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            None => {
                // Lock is held by another task, skip this frame
                return;
            }
        }
    };
    let theme = Theme::from_config(&state.settings.theme_config);

    egui::CentralPanel::default().show(ctx, |ui| {
        let current_screen = state.current_screen;
        let is_authenticated = state.is_authenticated();

        // Redirect to the auth screen when a protected screen is requested
        // without a session.
        if AppState::requires_auth(current_screen) && !is_authenticated {
            app.handle_screen_change(Screen::Auth);
            screens::auth::render(ui, &state, app, &theme);
            return;
        }

        if is_authenticated {
            widgets::nav_bar::render_nav_bar(ui, &state, app, &theme);
            ui.add_space(5.0);
            ui.separator();
            ui.add_space(5.0);
        }

        // Tab / Shift+Tab cycle through screens, but not while a text field
        // has focus.
        if !ctx.wants_keyboard_input() {
            if ctx.input(|i| i.key_pressed(egui::Key::Tab) && !i.modifiers.shift) {
                app.next_screen();
            }
            if ctx.input(|i| i.key_pressed(egui::Key::Tab) && i.modifiers.shift) {
                app.previous_screen();
            }
        }

        match current_screen {
            Screen::Auth => screens::auth::render(ui, &state, app, &theme),
            Screen::Dashboard => screens::dashboard::render(ui, &state, app, &theme),
            Screen::Products => screens::products::render(ui, &state, app, &theme),
            Screen::Customers => screens::customers::render(ui, &state, app, &theme),
            Screen::Quotes => screens::quotes::render(ui, &state, app, &theme),
            Screen::Sales => screens::sales::render(ui, &state, app, &theme),
            Screen::Sellers => screens::sellers::render(ui, &state, app, &theme),
            Screen::Company => screens::company::render(ui, &state, app, &theme),
            Screen::Settings => screens::settings::render(ui, &state, app, &theme),
        }

        if is_authenticated {
            ui.add_space(10.0);
            ui.separator();
            widgets::status_bar::render_status_bar(ui, &state, &theme);
        }
    });
}
