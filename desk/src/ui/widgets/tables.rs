//! # Table Components
//!
//! Reusable table/grid components for displaying entity lists consistently.

use crate::ui::theme::Theme;
use egui;

/// Configuration for table styling
pub struct TableConfig {
    pub num_columns: usize,
    pub spacing: [f32; 2],
    pub striped: bool,
    pub scrollable: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_columns: 4,
            spacing: [12.0, 6.0],
            striped: true,
            scrollable: true,
        }
    }
}

/// Render a data table with headers and rows
pub fn render_table<F>(
    ui: &mut egui::Ui,
    id: &str,
    config: TableConfig,
    headers: &[&str],
    theme: &Theme,
    render_rows: F,
) where
    F: FnOnce(&mut egui::Ui),
{
    let table = |ui: &mut egui::Ui| {
        egui::Grid::new(id)
            .num_columns(config.num_columns)
            .spacing(config.spacing)
            .striped(config.striped)
            .show(ui, |ui| {
                for header in headers {
                    ui.colored_label(theme.selected, *header);
                }
                ui.end_row();

                render_rows(ui);
            });
    };

    if config.scrollable {
        egui::ScrollArea::vertical()
            .id_salt(format!("{id}_scroll"))
            .show(ui, table);
    } else {
        table(ui);
    }
}

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(8.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}

/// Render a loading spinner with a caption
pub fn render_loading(ui: &mut egui::Ui, caption: &str, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.colored_label(theme.dim, caption);
    });
}

/// Render a count summary row, e.g. "Total: 12  |  Draft: 3  |  Sent: 5"
pub fn render_count_summary(ui: &mut egui::Ui, stats: &[(&str, usize)]) {
    ui.horizontal(|ui| {
        let parts: Vec<String> = stats
            .iter()
            .map(|(label, count)| format!("{}: {}", label, count))
            .collect();
        ui.label(parts.join("  |  "));
    });
}
