//! # Customers Screen

use crate::app::{App, AppState, CustomerEditor};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use egui;

/// Render customers screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.heading("Customers");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("New customer").clicked() {
                app.open_customer_editor();
            }
        });
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let mut search = state.customers.search.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search by name or email")
                .desired_width(260.0),
        );
        if response.changed() {
            app.handle_customer_search(search);
        }
        if state.customers.loading {
            ui.spinner();
        }
    });
    ui.add_space(8.0);

    tables::render_count_summary(ui, &[("customers", state.customers.items.len())]);
    ui.add_space(4.0);

    if state.customers.items.is_empty() {
        if state.customers.loading {
            tables::render_loading(ui, "Loading customers...", theme);
        } else if state.customers.search.trim().is_empty() {
            tables::render_empty_state(
                ui,
                "No customers yet",
                Some("Use New customer to add one."),
                theme,
            );
        } else {
            tables::render_empty_state(ui, "No customers match this search", None, theme);
        }
    } else {
        render_customer_table(ui, state, app, theme);
    }

    if state.customers.editor.is_some() {
        render_editor_window(ui, state, app, theme);
    }
    if let Some(id) = state.customers.confirm_delete {
        render_confirm_delete(ui, id, state, app, theme);
    }
}

fn render_customer_table(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let config = tables::TableConfig {
        num_columns: 5,
        ..Default::default()
    };
    tables::render_table(
        ui,
        "customers",
        config,
        &["Name", "Email", "Phone", "City", ""],
        theme,
        |ui| {
            for customer in &state.customers.items {
                ui.label(&customer.name);
                ui.colored_label(theme.dim, customer.email.as_deref().unwrap_or("-"));
                ui.colored_label(theme.dim, customer.phone.as_deref().unwrap_or("-"));
                ui.colored_label(theme.dim, customer.city.as_deref().unwrap_or("-"));
                ui.horizontal(|ui| {
                    if ui.small_button("Edit").clicked() {
                        app.edit_customer(customer.id);
                    }
                    if ui.small_button("Delete").clicked() {
                        app.request_customer_delete(customer.id);
                    }
                });
                ui.end_row();
            }
        },
    );
}

fn render_editor_window(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(editor) = &state.customers.editor else {
        return;
    };
    let mut editor: CustomerEditor = editor.clone();
    let title = if editor.id.is_some() {
        "Edit Customer"
    } else {
        "New Customer"
    };

    let mut save_clicked = false;
    let mut cancel_clicked = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            egui::Grid::new("customer_editor")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    forms::render_field_row(ui, "Name", &mut editor.name, "Customer name");
                    forms::render_field_row(ui, "Email", &mut editor.email, "Optional");
                    forms::render_field_row(ui, "Phone", &mut editor.phone, "Optional");
                    forms::render_field_row(ui, "Tax ID", &mut editor.tax_id, "Optional");
                    forms::render_field_row(ui, "Address", &mut editor.address, "Optional");
                    forms::render_field_row(ui, "City", &mut editor.city, "Optional");
                    forms::render_field_row(ui, "State", &mut editor.state, "Optional");
                    forms::render_field_row(ui, "Postal code", &mut editor.postal_code, "Optional");
                    ui.label("Notes");
                    ui.add(
                        egui::TextEdit::multiline(&mut editor.notes)
                            .desired_rows(3)
                            .desired_width(220.0),
                    );
                    ui.end_row();
                });

            if let Some(err) = &editor.error {
                ui.add_space(6.0);
                forms::render_error(ui, err, theme);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let save = ui.add_enabled(
                    !state.customers.saving,
                    egui::Button::new("Save").fill(theme.selected),
                );
                save_clicked = save.clicked();
                cancel_clicked = ui.button("Cancel").clicked();
                if state.customers.saving {
                    ui.spinner();
                }
            });
        });

    {
        let mut s = app.state.write();
        if let Some(state_editor) = &mut s.customers.editor {
            *state_editor = editor;
        }
    }

    if save_clicked {
        app.handle_customer_save();
    }
    if cancel_clicked {
        app.close_customer_editor();
    }
}

fn render_confirm_delete(
    ui: &mut egui::Ui,
    id: i64,
    state: &AppState,
    app: &mut App,
    theme: &Theme,
) {
    let name = state
        .customers
        .items
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| format!("#{id}"));

    egui::Window::new("Delete Customer")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(format!("Delete {name}? Quotes and sales keep their history."));
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new("Delete").fill(theme.error))
                    .clicked()
                {
                    app.confirm_customer_delete();
                }
                if ui.button("Cancel").clicked() {
                    app.cancel_customer_delete();
                }
            });
        });
}
