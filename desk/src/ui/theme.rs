//! # GUI Theme
//!
//! Desk theme for egui: a quiet slate palette with a configurable accent,
//! in dark and light variants. The persisted part is [`ThemeConfig`]; the
//! derived [`DeskColors`] palette feeds the visuals and the status badges.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};
use serde::{Deserialize, Serialize};
use shared::dto::quotes::QuoteStatus;
use shared::dto::sales::SaleStatus;
use std::path::Path;

/// Serializable theme configuration for persistence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeConfig {
    pub dark_mode: bool,
    /// Accent color used for selection, links, and primary buttons
    pub accent: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            dark_mode: true,
            accent: [54, 124, 214],
        }
    }
}

impl ThemeConfig {
    /// Load theme configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ThemeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save theme configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn accent_color(&self) -> Color32 {
        Color32::from_rgb(self.accent[0], self.accent[1], self.accent[2])
    }

    /// Derive the full palette for the configured mode.
    pub fn colors(&self) -> DeskColors {
        let accent = self.accent_color();
        if self.dark_mode {
            DeskColors {
                background: Color32::from_rgb(24, 26, 31),
                panel: Color32::from_rgb(30, 33, 39),
                field: Color32::from_rgb(38, 42, 50),
                text: Color32::from_rgb(225, 228, 233),
                text_dim: Color32::from_rgb(140, 146, 156),
                border: Color32::from_rgb(52, 57, 66),
                accent,
                accent_soft: soften(accent, 0.25),
                success: Color32::from_rgb(88, 180, 110),
                error: Color32::from_rgb(224, 92, 92),
                warning: Color32::from_rgb(226, 168, 70),
                info: Color32::from_rgb(110, 160, 230),
            }
        } else {
            DeskColors {
                background: Color32::from_rgb(244, 245, 247),
                panel: Color32::from_rgb(252, 252, 253),
                field: Color32::from_rgb(255, 255, 255),
                text: Color32::from_rgb(32, 36, 42),
                text_dim: Color32::from_rgb(110, 117, 128),
                border: Color32::from_rgb(208, 212, 218),
                accent,
                accent_soft: soften(accent, 0.15),
                success: Color32::from_rgb(36, 135, 66),
                error: Color32::from_rgb(185, 49, 49),
                warning: Color32::from_rgb(176, 118, 20),
                info: Color32::from_rgb(44, 98, 180),
            }
        }
    }
}

/// Blend the accent toward the background for hover/selection fills.
fn soften(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (alpha * 255.0).round() as u8,
    )
}

/// Desk color palette, derived from [`ThemeConfig`]
#[derive(Clone)]
pub struct DeskColors {
    pub background: Color32,
    pub panel: Color32,
    /// Text field and table cell background
    pub field: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub border: Color32,
    pub accent: Color32,
    /// Translucent accent for hover and selection fills
    pub accent_soft: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
}

/// Application theme handed to the screens each frame
pub struct Theme {
    pub colors: DeskColors,
    pub normal: Color32,
    pub dim: Color32,
    pub border: Color32,
    pub selected: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let colors = config.colors();
        Theme {
            normal: colors.text,
            dim: colors.text_dim,
            border: colors.border,
            selected: colors.accent,
            success: colors.success,
            error: colors.error,
            warning: colors.warning,
            info: colors.info,
            colors,
        }
    }

    /// Badge color for a sale's lifecycle status.
    pub fn sale_status_color(&self, status: SaleStatus) -> Color32 {
        match status {
            SaleStatus::Pending => self.warning,
            SaleStatus::Paid => self.success,
            SaleStatus::Cancelled => self.dim,
        }
    }

    /// Badge color for a quote's lifecycle status.
    pub fn quote_status_color(&self, status: QuoteStatus) -> Color32 {
        match status {
            QuoteStatus::Draft => self.dim,
            QuoteStatus::Sent => self.info,
            QuoteStatus::Approved => self.success,
            QuoteStatus::Rejected => self.error,
            QuoteStatus::Converted => self.selected,
        }
    }

    /// Build egui Visuals from a theme configuration.
    pub fn visuals_from_config(config: &ThemeConfig) -> Visuals {
        let colors = config.colors();
        let mut visuals = if config.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.panel;
        visuals.window_fill = colors.panel;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = colors.background;
        visuals.extreme_bg_color = colors.field;

        visuals.widgets.noninteractive.bg_fill = colors.panel;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.field;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.hovered.bg_fill = colors.accent_soft;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.accent);

        visuals.widgets.active.bg_fill = colors.accent_soft;
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, colors.accent);

        visuals.widgets.open.bg_fill = colors.accent_soft;
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, colors.accent);

        visuals.selection.bg_fill = colors.accent_soft;
        visuals.selection.stroke = Stroke::new(1.0, colors.accent);

        visuals.hyperlink_color = colors.accent;
        visuals.slider_trailing_fill = true;

        visuals
    }

    /// Apply the configured theme to an egui context.
    ///
    /// Writes both the dark and light style slots so the visuals survive an
    /// OS-level theme switch.
    pub fn apply(ctx: &Context, config: &ThemeConfig) {
        let visuals = Self::visuals_from_config(config);

        for slot in [EguiTheme::Dark, EguiTheme::Light] {
            let visuals = visuals.clone();
            ctx.style_mut_of(slot, move |style| {
                style.visuals = visuals;
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.window_margin = egui::Margin::same(8);
                style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
                style.spacing.indent = 14.0;
                style.spacing.interact_size = egui::Vec2::new(40.0, 24.0);
                style.spacing.menu_margin = egui::Margin::same(4);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trips_through_json() {
        let config = ThemeConfig {
            dark_mode: false,
            accent: [10, 20, 30],
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ThemeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config =
            ThemeConfig::load_from_file(Path::new("./definitely-not-here.json")).unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_palettes_keep_accent() {
        let config = ThemeConfig {
            dark_mode: true,
            accent: [1, 2, 3],
        };
        assert_eq!(config.colors().accent, Color32::from_rgb(1, 2, 3));
        let light = ThemeConfig {
            dark_mode: false,
            ..config
        };
        assert_eq!(light.colors().accent, Color32::from_rgb(1, 2, 3));
    }
}
