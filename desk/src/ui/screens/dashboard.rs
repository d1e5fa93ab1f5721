//! # Dashboard Screen
//!
//! Business metrics overview plus the most recent sales.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{metric_card, tables};
use crate::utils::format::{format_cents, format_date};
use egui;

/// Render dashboard screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.heading("Dashboard");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let refresh = ui.add_enabled(!state.dashboard.loading, egui::Button::new("Refresh"));
            if refresh.clicked() {
                app.refresh_dashboard();
            }
            if state.dashboard.loading {
                ui.spinner();
            }
        });
    });
    ui.add_space(8.0);

    let Some(metrics) = &state.dashboard.metrics else {
        if state.dashboard.loading {
            tables::render_loading(ui, "Loading metrics...", theme);
        } else {
            tables::render_empty_state(
                ui,
                "No metrics yet",
                Some("Use Refresh to load the latest numbers."),
                theme,
            );
        }
        return;
    };

    ui.horizontal_wrapped(|ui| {
        metric_card::render_metric_card(
            ui,
            "Revenue",
            &format_cents(metrics.revenue_cents),
            Some("paid sales"),
            theme.success,
            theme,
        );
        metric_card::render_metric_card(
            ui,
            "Sales",
            &metrics.total_sales.to_string(),
            Some(&format!("{} pending", metrics.pending_sales)),
            theme.selected,
            theme,
        );
        metric_card::render_metric_card(
            ui,
            "Quotes",
            &metrics.total_quotes.to_string(),
            None,
            theme.info,
            theme,
        );
    });
    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        metric_card::render_metric_card(
            ui,
            "Products",
            &metrics.total_products.to_string(),
            None,
            theme.normal,
            theme,
        );
        metric_card::render_metric_card(
            ui,
            "Customers",
            &metrics.total_customers.to_string(),
            None,
            theme.normal,
            theme,
        );
        let stock_accent = if metrics.low_stock_products > 0 {
            theme.warning
        } else {
            theme.normal
        };
        metric_card::render_metric_card(
            ui,
            "Low Stock",
            &metrics.low_stock_products.to_string(),
            Some("products under threshold"),
            stock_accent,
            theme,
        );
    });

    ui.add_space(16.0);
    ui.label(egui::RichText::new("Recent Sales").strong());
    ui.add_space(4.0);

    if metrics.recent_sales.is_empty() {
        tables::render_empty_state(ui, "No sales recorded yet", None, theme);
        return;
    }

    let config = tables::TableConfig {
        num_columns: 5,
        ..Default::default()
    };
    tables::render_table(
        ui,
        "recent_sales",
        config,
        &["#", "Customer", "Total", "Status", "Date"],
        theme,
        |ui| {
            for sale in &metrics.recent_sales {
                ui.label(format!("{}", sale.id));
                ui.label(&sale.customer_name);
                ui.label(format_cents(sale.total_cents));
                ui.colored_label(theme.sale_status_color(sale.status), sale.status.label());
                ui.colored_label(theme.dim, format_date(&sale.created_at));
                ui.end_row();
            }
        },
    );
}
