//! # Settings Handlers
//!
//! Theme configuration and its persistence next to the executable.

use crate::app::AppState;
use crate::ui::theme::ThemeConfig;
use parking_lot::RwLock;
use std::sync::Arc;

/// Get default config file path
pub fn get_config_path() -> std::path::PathBuf {
    std::path::PathBuf::from("./salesdesk-config.json")
}

/// Load settings from file
pub fn load_settings() -> ThemeConfig {
    let path = get_config_path();
    match ThemeConfig::load_from_file(&path) {
        Ok(config) => {
            tracing::info!("Loaded theme configuration from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load theme config from {:?}: {}. Using defaults.",
                path,
                e
            );
            ThemeConfig::default()
        }
    }
}

/// Save settings to file
pub fn save_settings(config: &ThemeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let path = get_config_path();
    config.save_to_file(&path)?;
    tracing::info!("Saved theme configuration to {:?}", path);
    Ok(())
}

/// Handle a theme edit from the settings screen
pub fn handle_theme_change(state: Arc<RwLock<AppState>>, config: ThemeConfig) {
    let mut app_state = state.write();
    if app_state.settings.theme_config == config {
        return;
    }
    app_state.settings.theme_config = config;
    app_state.settings.unsaved_changes = true;
}

/// Handle settings save
pub fn handle_settings_save(state: Arc<RwLock<AppState>>) {
    let app_state = state.write();
    let config = app_state.settings.theme_config.clone();
    drop(app_state);

    match save_settings(&config) {
        Ok(_) => {
            let mut app_state = state.write();
            app_state.settings.unsaved_changes = false;
            app_state.notify_success("Settings saved");
        }
        Err(e) => {
            tracing::error!("Failed to save settings: {}", e);
            let mut app_state = state.write();
            app_state.notify_error(format!("Failed to save settings: {e}"));
        }
    }
}

/// Handle settings reset to defaults
pub fn handle_settings_reset(state: Arc<RwLock<AppState>>) {
    let mut app_state = state.write();
    app_state.settings.theme_config = ThemeConfig::default();
    app_state.settings.unsaved_changes = true;
}
