//! # Status Bar Widget
//!
//! Bottom status bar showing the signed-in account, the API endpoint, and
//! keyboard hints.

use crate::app::AppState;
use crate::services::api::ApiClient;
use crate::ui::theme::Theme;
use egui;

/// Render status bar at the bottom of authenticated screens.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.horizontal(|ui| {
        match &state.current_user {
            Some(user) => {
                ui.colored_label(theme.success, "●");
                ui.label(format!("{} ({})", user.name, user.email));
            }
            None => {
                ui.colored_label(theme.dim, "●");
                ui.colored_label(theme.dim, "Signed out");
            }
        }

        ui.separator();

        ui.colored_label(theme.dim, format!("API: {}", ApiClient::base_url()));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(theme.dim, "Tab: Next screen | Shift+Tab: Previous");
        });
    });
}
