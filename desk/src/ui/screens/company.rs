//! # Company Screen
//!
//! Read-only company profile with an inline edit form.

use crate::app::{App, AppState, CompanyEditor};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format::format_date;
use egui;
use shared::Company;

/// Render company profile screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.heading("Company Profile");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.company.editor.is_none() {
                let edit = ui.add_enabled(
                    state.company.company.is_some(),
                    egui::Button::new("Edit"),
                );
                if edit.clicked() {
                    app.edit_company();
                }
            }
            if state.company.loading {
                ui.spinner();
            }
        });
    });
    ui.add_space(8.0);

    if state.company.editor.is_some() {
        render_edit_form(ui, state, app, theme);
        return;
    }

    match &state.company.company {
        Some(company) => render_profile(ui, company, theme),
        None if state.company.loading => {
            tables::render_loading(ui, "Loading company profile...", theme);
        }
        None => {
            tables::render_empty_state(ui, "Company profile not loaded", None, theme);
        }
    }
}

fn render_profile(ui: &mut egui::Ui, company: &Company, theme: &Theme) {
    let optional = |value: &Option<String>| -> String {
        value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or("-")
            .to_string()
    };

    ui.group(|ui| {
        egui::Grid::new("company_profile")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.colored_label(theme.dim, "Legal name");
                ui.label(egui::RichText::new(&company.name).strong());
                ui.end_row();
                ui.colored_label(theme.dim, "Trade name");
                ui.label(optional(&company.trade_name));
                ui.end_row();
                ui.colored_label(theme.dim, "Tax ID");
                ui.label(&company.tax_id);
                ui.end_row();
                ui.colored_label(theme.dim, "Email");
                ui.label(optional(&company.email));
                ui.end_row();
                ui.colored_label(theme.dim, "Phone");
                ui.label(optional(&company.phone));
                ui.end_row();
                ui.colored_label(theme.dim, "Address");
                ui.label(optional(&company.address));
                ui.end_row();
                ui.colored_label(theme.dim, "City");
                ui.label(optional(&company.city));
                ui.end_row();
                ui.colored_label(theme.dim, "State");
                ui.label(optional(&company.state));
                ui.end_row();
                ui.colored_label(theme.dim, "Postal code");
                ui.label(optional(&company.postal_code));
                ui.end_row();
                ui.colored_label(theme.dim, "Registered");
                ui.colored_label(theme.dim, format_date(&company.created_at));
                ui.end_row();
            });
    });
}

fn render_edit_form(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(editor) = &state.company.editor else {
        return;
    };
    let mut editor: CompanyEditor = editor.clone();

    let mut save_clicked = false;
    let mut cancel_clicked = false;

    ui.group(|ui| {
        egui::Grid::new("company_editor")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                forms::render_field_row(ui, "Legal name", &mut editor.name, "Legal name");
                forms::render_field_row(ui, "Trade name", &mut editor.trade_name, "Optional");
                forms::render_field_row(ui, "Tax ID", &mut editor.tax_id, "Tax number");
                forms::render_field_row(ui, "Email", &mut editor.email, "Optional");
                forms::render_field_row(ui, "Phone", &mut editor.phone, "Optional");
                forms::render_field_row(ui, "Address", &mut editor.address, "Optional");
                forms::render_field_row(ui, "City", &mut editor.city, "Optional");
                forms::render_field_row(ui, "State", &mut editor.state, "Optional");
                forms::render_field_row(ui, "Postal code", &mut editor.postal_code, "Optional");
            });

        if let Some(err) = &editor.error {
            ui.add_space(6.0);
            forms::render_error(ui, err, theme);
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let save = ui.add_enabled(
                !state.company.saving,
                egui::Button::new("Save").fill(theme.selected),
            );
            save_clicked = save.clicked();
            cancel_clicked = ui.button("Cancel").clicked();
            if state.company.saving {
                ui.spinner();
            }
        });
    });

    {
        let mut s = app.state.write();
        if let Some(state_editor) = &mut s.company.editor {
            *state_editor = editor;
        }
    }

    if save_clicked {
        app.handle_company_save();
    }
    if cancel_clicked {
        app.cancel_company_edit();
    }
}
