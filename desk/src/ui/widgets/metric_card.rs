//! # Metric Card Widget
//!
//! Card component for the dashboard aggregates.

use crate::ui::theme::Theme;
use egui;

/// Render one dashboard metric as a framed card: dim caption on top,
/// large accented value below, optional fine print at the bottom.
pub fn render_metric_card(
    ui: &mut egui::Ui,
    caption: &str,
    value: &str,
    detail: Option<&str>,
    accent: egui::Color32,
    theme: &Theme,
) {
    ui.group(|ui| {
        ui.set_min_width(150.0);
        ui.vertical(|ui| {
            ui.colored_label(theme.dim, caption);
            ui.label(
                egui::RichText::new(value)
                    .heading()
                    .strong()
                    .color(accent),
            );
            if let Some(detail) = detail {
                ui.colored_label(theme.dim, egui::RichText::new(detail).small());
            }
        });
    });
}
