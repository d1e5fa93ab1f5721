//! # Sales Screen
//!
//! Status-filtered sale list, the direct-sale builder, a detail window,
//! and the cancel confirmation.

use crate::app::{App, AppState, DocumentDraft};
use crate::ui::theme::Theme;
use crate::ui::widgets::{builder, forms, tables};
use crate::utils::format::{format_bps, format_cents, format_date};
use egui;
use shared::{PaymentMethod, Sale, SaleStatus};

/// Render sales screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.heading("Sales");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("New sale").clicked() {
                app.open_sale_builder();
            }
            if state.sales.loading {
                ui.spinner();
            }
        });
    });
    ui.add_space(8.0);

    render_filter_row(ui, state, app);
    ui.add_space(8.0);

    if state.sales.items.is_empty() {
        if state.sales.loading {
            tables::render_loading(ui, "Loading sales...", theme);
        } else if state.sales.status_filter.is_some() {
            tables::render_empty_state(ui, "No sales with this status", None, theme);
        } else {
            tables::render_empty_state(
                ui,
                "No sales yet",
                Some("Record one with New sale or convert a quote."),
                theme,
            );
        }
    } else {
        render_sale_table(ui, state, app, theme);
    }

    if state.sales.builder.is_some() {
        render_builder_window(ui, state, app, theme);
    }
    if state.sales.detail.is_some() || state.sales.detail_loading {
        render_detail_window(ui, state, app, theme);
    }
    if let Some(id) = state.sales.confirm_cancel {
        render_confirm_cancel(ui, id, state, app, theme);
    }
}

fn render_filter_row(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.horizontal(|ui| {
        let filter = state.sales.status_filter;
        if ui.selectable_label(filter.is_none(), "All").clicked() {
            app.set_sale_filter(None);
        }
        for status in SaleStatus::ALL {
            if ui
                .selectable_label(filter == Some(status), status.label())
                .clicked()
            {
                app.set_sale_filter(Some(status));
            }
        }
    });
}

fn render_sale_table(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let config = tables::TableConfig {
        num_columns: 7,
        ..Default::default()
    };
    tables::render_table(
        ui,
        "sales",
        config,
        &["#", "Customer", "Status", "Total", "Payment", "Date", ""],
        theme,
        |ui| {
            for sale in &state.sales.items {
                ui.label(format!("{}", sale.id));
                ui.label(&sale.customer_name);
                ui.horizontal(|ui| {
                    ui.colored_label(theme.sale_status_color(sale.status), sale.status.label());
                    if sale.quote_id.is_some() {
                        ui.colored_label(theme.dim, "(from quote)");
                    }
                });
                ui.label(format_cents(sale.total_cents));
                ui.colored_label(
                    theme.dim,
                    sale.payment_method.map(|m| m.label()).unwrap_or("-"),
                );
                ui.colored_label(theme.dim, format_date(&sale.created_at));
                ui.horizontal(|ui| {
                    if ui.small_button("View").clicked() {
                        app.open_sale_detail(sale.id);
                    }
                    if sale.status == SaleStatus::Pending {
                        if ui.small_button("Mark paid").clicked() {
                            app.handle_sale_pay(sale.id);
                        }
                        if ui.small_button("Cancel").clicked() {
                            app.request_sale_cancel(sale.id);
                        }
                    }
                });
                ui.end_row();
            }
        },
    );
}

fn render_builder_window(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(draft) = &state.sales.builder else {
        return;
    };
    let mut draft: DocumentDraft = draft.clone();

    let mut actions = builder::LineEditorActions::default();
    let mut create_clicked = false;
    let mut cancel_clicked = false;

    egui::Window::new("New Sale")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            builder::render_party_pickers(ui, &mut draft, state);
            ui.add_space(10.0);

            actions = builder::render_line_editor(ui, &mut draft, state, theme);
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Payment");
                let method_text = draft
                    .payment_method
                    .map(|m| m.label().to_string())
                    .unwrap_or_else(|| "Not recorded".to_string());
                egui::ComboBox::from_id_salt("sale_payment_method")
                    .width(140.0)
                    .selected_text(method_text)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut draft.payment_method, None, "Not recorded");
                        for method in PaymentMethod::ALL {
                            ui.selectable_value(
                                &mut draft.payment_method,
                                Some(method),
                                method.label(),
                            );
                        }
                    });
            });
            ui.add_space(6.0);
            ui.label("Notes");
            ui.add(
                egui::TextEdit::multiline(&mut draft.notes)
                    .desired_rows(2)
                    .desired_width(320.0),
            );
            ui.add_space(10.0);

            builder::render_totals(ui, &draft.totals, theme);

            if let Some(err) = &draft.error {
                ui.add_space(6.0);
                forms::render_error(ui, err, theme);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let create = ui.add_enabled(
                    !state.sales.saving,
                    egui::Button::new("Create sale").fill(theme.selected),
                );
                create_clicked = create.clicked();
                cancel_clicked = ui.button("Cancel").clicked();
                if state.sales.saving {
                    ui.spinner();
                }
            });
        });

    {
        let mut s = app.state.write();
        if let Some(state_draft) = &mut s.sales.builder {
            *state_draft = draft;
        }
    }

    if actions.add_line {
        app.handle_sale_add_line();
    }
    if let Some((product_id, quantity)) = actions.set_quantity {
        app.handle_sale_line_quantity(product_id, quantity);
    }
    if let Some(product_id) = actions.remove_line {
        app.handle_sale_remove_line(product_id);
    }
    if create_clicked {
        app.handle_sale_create();
    }
    if cancel_clicked {
        app.close_sale_builder();
    }
}

fn render_detail_window(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let mut close_clicked = false;
    let mut pay_clicked: Option<i64> = None;
    let mut cancel_clicked: Option<i64> = None;

    let title = match &state.sales.detail {
        Some(sale) => format!("Sale #{}", sale.id),
        None => "Sale".to_string(),
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            let Some(sale) = &state.sales.detail else {
                ui.spinner();
                ui.colored_label(theme.dim, "Loading sale...");
                close_clicked = ui.button("Close").clicked();
                return;
            };

            render_detail_body(ui, sale, theme);

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if sale.status == SaleStatus::Pending {
                    if ui
                        .add(egui::Button::new("Mark paid").fill(theme.selected))
                        .clicked()
                    {
                        pay_clicked = Some(sale.id);
                    }
                    if ui.button("Cancel sale").clicked() {
                        cancel_clicked = Some(sale.id);
                    }
                }
                close_clicked = ui.button("Close").clicked();
            });
        });

    if let Some(id) = pay_clicked {
        app.handle_sale_pay(id);
    }
    if let Some(id) = cancel_clicked {
        app.request_sale_cancel(id);
    }
    if close_clicked {
        app.close_sale_detail();
    }
}

fn render_detail_body(ui: &mut egui::Ui, sale: &Sale, theme: &Theme) {
    egui::Grid::new("sale_detail_head")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.colored_label(theme.dim, "Customer");
            ui.label(&sale.customer_name);
            ui.end_row();
            ui.colored_label(theme.dim, "Status");
            ui.colored_label(theme.sale_status_color(sale.status), sale.status.label());
            ui.end_row();
            ui.colored_label(theme.dim, "Payment");
            ui.label(sale.payment_method.map(|m| m.label()).unwrap_or("-"));
            ui.end_row();
            if let Some(quote_id) = sale.quote_id {
                ui.colored_label(theme.dim, "From quote");
                ui.label(format!("#{quote_id}"));
                ui.end_row();
            }
            ui.colored_label(theme.dim, "Created");
            ui.label(format_date(&sale.created_at));
            ui.end_row();
        });

    ui.add_space(8.0);
    egui::Grid::new("sale_detail_items")
        .num_columns(4)
        .spacing([12.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            for header in ["Product", "Qty", "Unit price", "Line total"] {
                ui.label(egui::RichText::new(header).color(theme.selected).strong());
            }
            ui.end_row();
            for item in &sale.items {
                ui.label(&item.product_name);
                ui.label(item.quantity.to_string());
                ui.label(format_cents(item.unit_price_cents));
                ui.label(format_cents(item.line_total_cents));
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    egui::Grid::new("sale_detail_totals")
        .num_columns(2)
        .spacing([24.0, 2.0])
        .show(ui, |ui| {
            ui.colored_label(theme.dim, "Subtotal");
            ui.label(format_cents(sale.subtotal_cents));
            ui.end_row();
            let discount_label = format!("Discount ({})", format_bps(sale.discount_bps));
            ui.colored_label(theme.dim, discount_label);
            ui.label(format!("-{}", format_cents(sale.discount_cents)));
            ui.end_row();
            ui.colored_label(theme.dim, format!("Tax ({})", format_bps(sale.tax_bps)));
            ui.label(format!("+{}", format_cents(sale.tax_cents)));
            ui.end_row();
            ui.colored_label(theme.dim, "Total");
            ui.label(
                egui::RichText::new(format_cents(sale.total_cents))
                    .strong()
                    .color(theme.selected),
            );
            ui.end_row();
        });

    if let Some(notes) = &sale.notes {
        if !notes.trim().is_empty() {
            ui.add_space(8.0);
            ui.colored_label(theme.dim, "Notes");
            ui.label(notes);
        }
    }
}

fn render_confirm_cancel(
    ui: &mut egui::Ui,
    id: i64,
    _state: &AppState,
    app: &mut App,
    theme: &Theme,
) {
    egui::Window::new("Cancel Sale")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(format!(
                "Cancel sale #{id}? Stock for its items is restored."
            ));
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new("Cancel sale").fill(theme.error))
                    .clicked()
                {
                    app.confirm_sale_cancel();
                }
                if ui.button("Keep sale").clicked() {
                    app.dismiss_sale_cancel();
                }
            });
        });
}
