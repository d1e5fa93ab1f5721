//! # Products Screen
//!
//! Searchable catalog table with a modal editor window.

use crate::app::{App, AppState, ProductEditor};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format::format_cents;
use egui;

/// Render products screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.heading("Products");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("New product").clicked() {
                app.open_product_editor();
            }
        });
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let mut search = state.products.search.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search by name or SKU")
                .desired_width(260.0),
        );
        if response.changed() {
            app.handle_product_search(search);
        }
        if state.products.loading {
            ui.spinner();
        }
    });
    ui.add_space(8.0);

    let active_count = state.products.items.iter().filter(|p| p.active).count();
    tables::render_count_summary(
        ui,
        &[
            ("products", state.products.items.len()),
            ("active", active_count),
        ],
    );
    ui.add_space(4.0);

    if state.products.items.is_empty() {
        if state.products.loading {
            tables::render_loading(ui, "Loading products...", theme);
        } else if state.products.search.trim().is_empty() {
            tables::render_empty_state(
                ui,
                "No products yet",
                Some("Use New product to add your first item."),
                theme,
            );
        } else {
            tables::render_empty_state(ui, "No products match this search", None, theme);
        }
    } else {
        render_product_table(ui, state, app, theme);
    }

    if state.products.editor.is_some() {
        render_editor_window(ui, state, app, theme);
    }
    if let Some(id) = state.products.confirm_delete {
        render_confirm_delete(ui, id, state, app, theme);
    }
}

fn render_product_table(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let category_name = |id: Option<i64>| -> String {
        id.and_then(|id| {
            state
                .products
                .categories
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.name.clone())
        })
        .unwrap_or_else(|| "-".to_string())
    };

    let config = tables::TableConfig {
        num_columns: 7,
        ..Default::default()
    };
    tables::render_table(
        ui,
        "products",
        config,
        &["Name", "SKU", "Category", "Price", "Stock", "Active", ""],
        theme,
        |ui| {
            for product in &state.products.items {
                ui.label(&product.name);
                ui.colored_label(theme.dim, product.sku.as_deref().unwrap_or("-"));
                ui.colored_label(theme.dim, category_name(product.category_id));
                ui.label(format_cents(product.price_cents));
                let stock_color = if product.stock <= 0 {
                    theme.warning
                } else {
                    theme.normal
                };
                ui.colored_label(stock_color, product.stock.to_string());
                if product.active {
                    ui.colored_label(theme.success, "Yes");
                } else {
                    ui.colored_label(theme.dim, "No");
                }
                ui.horizontal(|ui| {
                    if ui.small_button("Edit").clicked() {
                        app.edit_product(product.id);
                    }
                    if ui.small_button("Delete").clicked() {
                        app.request_product_delete(product.id);
                    }
                });
                ui.end_row();
            }
        },
    );
}

fn render_editor_window(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(editor) = &state.products.editor else {
        return;
    };
    let mut editor: ProductEditor = editor.clone();
    let title = if editor.id.is_some() {
        "Edit Product"
    } else {
        "New Product"
    };

    let mut save_clicked = false;
    let mut cancel_clicked = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            egui::Grid::new("product_editor")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    forms::render_field_row(ui, "Name", &mut editor.name, "Product name");
                    forms::render_field_row(ui, "SKU", &mut editor.sku, "Optional");
                    ui.label("Category");
                    category_picker(ui, &mut editor.category_id, state);
                    ui.end_row();
                    forms::render_field_row(ui, "Price", &mut editor.price, "10.99");
                    forms::render_field_row(ui, "Stock", &mut editor.stock, "0");
                    ui.label("Description");
                    ui.add(
                        egui::TextEdit::multiline(&mut editor.description)
                            .desired_rows(3)
                            .desired_width(220.0),
                    );
                    ui.end_row();
                    ui.label("Active");
                    ui.checkbox(&mut editor.active, "");
                    ui.end_row();
                });

            if let Some(err) = &editor.error {
                ui.add_space(6.0);
                forms::render_error(ui, err, theme);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let save = ui.add_enabled(
                    !state.products.saving,
                    egui::Button::new("Save").fill(theme.selected),
                );
                save_clicked = save.clicked();
                cancel_clicked = ui.button("Cancel").clicked();
                if state.products.saving {
                    ui.spinner();
                }
            });
        });

    {
        let mut s = app.state.write();
        if let Some(state_editor) = &mut s.products.editor {
            *state_editor = editor;
        }
    }

    if save_clicked {
        app.handle_product_save();
    }
    if cancel_clicked {
        app.close_product_editor();
    }
}

fn category_picker(ui: &mut egui::Ui, selected: &mut Option<i64>, state: &AppState) {
    let current = selected
        .and_then(|id| {
            state
                .products
                .categories
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.name.clone())
        })
        .unwrap_or_else(|| "None".to_string());

    egui::ComboBox::from_id_salt("product_category")
        .width(220.0)
        .selected_text(current)
        .show_ui(ui, |ui| {
            ui.selectable_value(selected, None, "None");
            for category in &state.products.categories {
                ui.selectable_value(selected, Some(category.id), &category.name);
            }
        });
}

fn render_confirm_delete(
    ui: &mut egui::Ui,
    id: i64,
    state: &AppState,
    app: &mut App,
    theme: &Theme,
) {
    let name = state
        .products
        .items
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("#{id}"));

    egui::Window::new("Delete Product")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(format!("Delete {name}? This cannot be undone."));
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new("Delete").fill(theme.error))
                    .clicked()
                {
                    app.confirm_product_delete();
                }
                if ui.button("Cancel").clicked() {
                    app.cancel_product_delete();
                }
            });
        });
}
