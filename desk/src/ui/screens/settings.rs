//! # Settings Screen
//!
//! Theme configuration with live preview, plus connection info.

use crate::app::{App, AppState};
use crate::services::api::ApiClient;
use crate::ui::theme::{Theme, ThemeConfig};
use egui;

/// Render settings screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.heading("Settings");
    ui.add_space(12.0);

    let config = state.settings.theme_config.clone();
    let mut dark_mode = config.dark_mode;
    let mut accent = config.accent;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Appearance").strong());
        ui.add_space(6.0);

        ui.checkbox(&mut dark_mode, "Dark mode");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Accent color");
            ui.color_edit_button_srgb(&mut accent);
        });
    });

    if dark_mode != config.dark_mode || accent != config.accent {
        app.handle_theme_change(ThemeConfig { dark_mode, accent });
    }

    ui.add_space(12.0);

    ui.group(|ui| {
        ui.label(egui::RichText::new("Connection").strong());
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.colored_label(theme.dim, "API server:");
            ui.label(ApiClient::base_url());
        });
        ui.horizontal(|ui| {
            ui.colored_label(theme.dim, "Settings file:");
            ui.label(&state.settings.config_path);
        });
    });

    ui.add_space(16.0);

    ui.horizontal(|ui| {
        if ui
            .add(egui::Button::new("Save Settings").fill(theme.selected))
            .clicked()
        {
            app.handle_settings_save();
        }
        if ui.button("Reset to Defaults").clicked() {
            app.handle_settings_reset();
        }
    });

    ui.add_space(8.0);
    if state.settings.unsaved_changes {
        ui.colored_label(theme.warning, "You have unsaved changes");
    } else {
        ui.colored_label(theme.success, "All changes saved");
    }
}
