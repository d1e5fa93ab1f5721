//! # Sellers Screen
//!
//! Sales staff roster with commission rates and an activate/deactivate toggle.

use crate::app::{App, AppState, SellerEditor};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format::format_bps;
use egui;

/// Render sellers screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.heading("Sellers");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("New seller").clicked() {
                app.open_seller_editor();
            }
            if state.sellers.loading {
                ui.spinner();
            }
        });
    });
    ui.add_space(8.0);

    let active_count = state.sellers.items.iter().filter(|s| s.active).count();
    tables::render_count_summary(
        ui,
        &[
            ("sellers", state.sellers.items.len()),
            ("active", active_count),
        ],
    );
    ui.add_space(4.0);

    if state.sellers.items.is_empty() {
        if state.sellers.loading {
            tables::render_loading(ui, "Loading sellers...", theme);
        } else {
            tables::render_empty_state(
                ui,
                "No sellers yet",
                Some("Add your sales staff to assign them to quotes."),
                theme,
            );
        }
    } else {
        render_seller_table(ui, state, app, theme);
    }

    if state.sellers.editor.is_some() {
        render_editor_window(ui, state, app, theme);
    }
    if let Some(id) = state.sellers.confirm_delete {
        render_confirm_delete(ui, id, state, app, theme);
    }
}

fn render_seller_table(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let config = tables::TableConfig {
        num_columns: 6,
        ..Default::default()
    };
    tables::render_table(
        ui,
        "sellers",
        config,
        &["Name", "Email", "Phone", "Commission", "Status", ""],
        theme,
        |ui| {
            for seller in &state.sellers.items {
                ui.label(&seller.name);
                ui.colored_label(theme.dim, &seller.email);
                ui.colored_label(theme.dim, seller.phone.as_deref().unwrap_or("-"));
                ui.label(format_bps(seller.commission_bps));
                if seller.active {
                    ui.colored_label(theme.success, "Active");
                } else {
                    ui.colored_label(theme.dim, "Inactive");
                }
                ui.horizontal(|ui| {
                    let toggle = if seller.active { "Deactivate" } else { "Activate" };
                    if ui.small_button(toggle).clicked() {
                        app.handle_seller_toggle_active(seller.id);
                    }
                    if ui.small_button("Edit").clicked() {
                        app.edit_seller(seller.id);
                    }
                    if ui.small_button("Delete").clicked() {
                        app.request_seller_delete(seller.id);
                    }
                });
                ui.end_row();
            }
        },
    );
}

fn render_editor_window(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(editor) = &state.sellers.editor else {
        return;
    };
    let mut editor: SellerEditor = editor.clone();
    let title = if editor.id.is_some() {
        "Edit Seller"
    } else {
        "New Seller"
    };

    let mut save_clicked = false;
    let mut cancel_clicked = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            egui::Grid::new("seller_editor")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    forms::render_field_row(ui, "Name", &mut editor.name, "Seller name");
                    forms::render_field_row(ui, "Email", &mut editor.email, "seller@company.com");
                    forms::render_field_row(ui, "Phone", &mut editor.phone, "Optional");
                    forms::render_field_row(ui, "Commission %", &mut editor.commission, "2.5");
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
                    !state.sellers.saving,
                    egui::Button::new("Save").fill(theme.selected),
                );
                save_clicked = save.clicked();
                cancel_clicked = ui.button("Cancel").clicked();
                if state.sellers.saving {
                    ui.spinner();
                }
            });
        });

    {
        let mut s = app.state.write();
        if let Some(state_editor) = &mut s.sellers.editor {
            *state_editor = editor;
        }
    }

    if save_clicked {
        app.handle_seller_save();
    }
    if cancel_clicked {
        app.close_seller_editor();
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
        .sellers
        .items
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| format!("#{id}"));

    egui::Window::new("Delete Seller")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(format!("Delete {name}? Consider deactivating instead."));
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new("Delete").fill(theme.error))
                    .clicked()
                {
                    app.confirm_seller_delete();
                }
                if ui.button("Cancel").clicked() {
                    app.cancel_seller_delete();
                }
            });
        });
}
