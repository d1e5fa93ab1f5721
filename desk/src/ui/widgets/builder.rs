//! # Builder Widgets
//!
//! Shared pieces of the quote and sale builder windows: customer/seller
//! pickers, the line-item grid, and the totals block. Semantic clicks are
//! returned to the caller so each screen can route them to its own handlers.

use crate::app::{AppState, DocumentDraft};
use crate::ui::theme::Theme;
use crate::utils::format::format_cents;
use egui;
use shared::Totals;

/// Clicks collected from one frame of the line editor.
#[derive(Debug, Default)]
pub struct LineEditorActions {
    pub add_line: bool,
    pub set_quantity: Option<(i64, i64)>,
    pub remove_line: Option<i64>,
}

/// Customer (required) and seller (optional) dropdowns.
pub fn render_party_pickers(ui: &mut egui::Ui, draft: &mut DocumentDraft, state: &AppState) {
    egui::Grid::new("builder_parties")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Customer");
            let customer_text = draft
                .customer_id
                .and_then(|id| {
                    state
                        .customers
                        .items
                        .iter()
                        .find(|c| c.id == id)
                        .map(|c| c.name.clone())
                })
                .unwrap_or_else(|| "Select a customer".to_string());
            egui::ComboBox::from_id_salt("builder_customer")
                .width(220.0)
                .selected_text(customer_text)
                .show_ui(ui, |ui| {
                    for customer in &state.customers.items {
                        ui.selectable_value(
                            &mut draft.customer_id,
                            Some(customer.id),
                            &customer.name,
                        );
                    }
                });
            ui.end_row();

            ui.label("Seller");
            let seller_text = draft
                .seller_id
                .and_then(|id| {
                    state
                        .sellers
                        .items
                        .iter()
                        .find(|s| s.id == id)
                        .map(|s| s.name.clone())
                })
                .unwrap_or_else(|| "Unassigned".to_string());
            egui::ComboBox::from_id_salt("builder_seller")
                .width(220.0)
                .selected_text(seller_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut draft.seller_id, None, "Unassigned");
                    for seller in state.sellers.items.iter().filter(|s| s.active) {
                        ui.selectable_value(&mut draft.seller_id, Some(seller.id), &seller.name);
                    }
                });
            ui.end_row();
        });
}

/// Product picker, add-line row, and the editable line grid.
///
/// Typing mutates the local draft directly; button clicks come back in
/// [`LineEditorActions`] so the caller can dispatch them after write-back.
pub fn render_line_editor(
    ui: &mut egui::Ui,
    draft: &mut DocumentDraft,
    state: &AppState,
    theme: &Theme,
) -> LineEditorActions {
    let mut actions = LineEditorActions::default();

    ui.label(egui::RichText::new("Lines").strong());
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let picker_text = draft
            .picker_product
            .and_then(|id| {
                state
                    .products
                    .items
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| p.name.clone())
            })
            .unwrap_or_else(|| "Select a product".to_string());
        egui::ComboBox::from_id_salt("builder_product")
            .width(220.0)
            .selected_text(picker_text)
            .show_ui(ui, |ui| {
                for product in state.products.items.iter().filter(|p| p.active) {
                    ui.selectable_value(
                        &mut draft.picker_product,
                        Some(product.id),
                        format!("{} ({})", product.name, format_cents(product.price_cents)),
                    );
                }
            });
        ui.label("Qty");
        ui.add(egui::TextEdit::singleline(&mut draft.quantity_input).desired_width(40.0));
        let can_add = draft.picker_product.is_some();
        if ui
            .add_enabled(can_add, egui::Button::new("Add line"))
            .clicked()
        {
            actions.add_line = true;
        }
    });
    ui.add_space(6.0);

    if draft.lines.is_empty() {
        ui.colored_label(theme.dim, "No lines yet. Pick a product above.");
    } else {
        egui::Grid::new("builder_lines")
            .num_columns(5)
            .spacing([12.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                for header in ["Product", "Unit price", "Qty", "Line total", ""] {
                    ui.label(egui::RichText::new(header).color(theme.selected).strong());
                }
                ui.end_row();
                for line in &draft.lines {
                    ui.label(&line.product_name);
                    ui.label(format_cents(line.unit_price_cents));
                    ui.horizontal(|ui| {
                        let minus =
                            ui.add_enabled(line.quantity > 1, egui::Button::new("-").small());
                        if minus.clicked() {
                            actions.set_quantity = Some((line.product_id, line.quantity - 1));
                        }
                        ui.label(line.quantity.to_string());
                        if ui.small_button("+").clicked() {
                            actions.set_quantity = Some((line.product_id, line.quantity + 1));
                        }
                    });
                    ui.label(line.line_total().to_string());
                    if ui.small_button("Remove").clicked() {
                        actions.remove_line = Some(line.product_id);
                    }
                    ui.end_row();
                }
            });
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label("Discount %");
        let discount =
            ui.add(egui::TextEdit::singleline(&mut draft.discount_input).desired_width(50.0));
        ui.add_space(8.0);
        ui.label("Tax %");
        let tax = ui.add(egui::TextEdit::singleline(&mut draft.tax_input).desired_width(50.0));
        if discount.changed() || tax.changed() {
            draft.recompute();
        }
    });

    actions
}

/// Subtotal / discount / tax / total block.
pub fn render_totals(ui: &mut egui::Ui, totals: &Totals, theme: &Theme) {
    egui::Grid::new("builder_totals")
        .num_columns(2)
        .spacing([24.0, 2.0])
        .show(ui, |ui| {
            ui.colored_label(theme.dim, "Subtotal");
            ui.label(totals.subtotal.to_string());
            ui.end_row();
            ui.colored_label(theme.dim, "Discount");
            ui.label(format!("-{}", totals.discount));
            ui.end_row();
            ui.colored_label(theme.dim, "Tax");
            ui.label(format!("+{}", totals.tax));
            ui.end_row();
            ui.colored_label(theme.dim, "Total");
            ui.label(
                egui::RichText::new(totals.total.to_string())
                    .strong()
                    .color(theme.selected),
            );
            ui.end_row();
        });
}
