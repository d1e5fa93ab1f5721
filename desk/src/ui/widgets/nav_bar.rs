//! # Navigation Bar
//!
//! Top navigation with arrows, one tab per screen, and account actions.
//! Settings is reachable only from the gear button here, never from the
//! Tab-cycle order.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use egui;

/// Render the navigation bar. Only visible when signed in.
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    if !state.is_authenticated() {
        return;
    }

    ui.horizontal(|ui| {
        ui.set_height(32.0);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(2.0, 0.0);
            if ui.button("<").clicked() {
                app.previous_screen();
            }
            if ui.button(">").clicked() {
                app.next_screen();
            }
        });

        ui.add_space(10.0);

        for screen in Screen::all() {
            if screen == Screen::Auth || screen == Screen::Settings {
                continue;
            }
            let selected = state.current_screen == screen;
            if ui.selectable_label(selected, screen.title()).clicked() && !selected {
                app.handle_screen_change(screen);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Sign out").clicked() {
                app.handle_logout_click();
            }

            ui.add_space(6.0);

            let settings_selected = state.current_screen == Screen::Settings;
            if ui
                .selectable_label(settings_selected, "⚙ Settings")
                .clicked()
                && !settings_selected
            {
                app.handle_screen_change(Screen::Settings);
            }

            ui.add_space(6.0);

            if let Some(user) = &state.current_user {
                ui.colored_label(theme.dim, &user.name);
            }
        });
    });
}
