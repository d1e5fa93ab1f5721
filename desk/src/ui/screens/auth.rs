//! # Authentication Screen
//!
//! Sign-in form plus the registration and password-reset wizards.

use crate::app::{App, AppState, AuthState, RegisterForm, ResetForm, REGISTER_STEPS, RESET_STEPS};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use egui;

const FIELD_SIZE: [f32; 2] = [260.0, 26.0];

/// Render authentication screen (login / register / reset)
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(
            egui::RichText::new("SalesDesk")
                .heading()
                .strong()
                .color(theme.selected),
        );
        ui.colored_label(theme.dim, "Quotes, sales, and inventory for small teams");
        ui.add_space(30.0);

        match &state.auth {
            AuthState::Login {
                email,
                password,
                error,
            } => render_login_form(ui, email, password, error.as_deref(), state, app, theme),
            AuthState::Register { step, form, error } => {
                render_register_wizard(ui, *step, form, error.as_deref(), state, app, theme)
            }
            AuthState::ResetPassword { step, form, error } => {
                render_reset_wizard(ui, *step, form, error.as_deref(), state, app, theme)
            }
        }
    });
}

fn render_login_form(
    ui: &mut egui::Ui,
    email: &str,
    password: &str,
    error: Option<&str>,
    state: &AppState,
    app: &mut App,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Sign In", theme);

    let mut email_input = email.to_string();
    let mut password_input = password.to_string();
    let mut submit = false;

    forms::render_text_input(
        ui,
        "Email",
        &mut email_input,
        "you@company.com",
        false,
        FIELD_SIZE,
    );
    ui.add_space(8.0);

    let password_response = forms::render_text_input(
        ui,
        "Password",
        &mut password_input,
        "Password",
        true,
        FIELD_SIZE,
    );
    if password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submit = true;
    }

    {
        let mut state = app.state.write();
        if let AuthState::Login {
            email, password, ..
        } = &mut state.auth
        {
            *email = email_input.clone();
            *password = password_input.clone();
        }
    }

    ui.add_space(12.0);

    if let Some(err) = error {
        forms::render_error(ui, err, theme);
    }

    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - FIELD_SIZE[0]).max(0.0) / 2.0);
        let sign_in = ui.add_enabled(
            !state.auth_loading,
            egui::Button::new("Sign in")
                .fill(theme.selected)
                .min_size(egui::vec2(100.0, 30.0)),
        );
        if sign_in.clicked() || (submit && !state.auth_loading) {
            app.handle_login_click(email_input.clone(), password_input.clone());
        }
        if state.auth_loading {
            ui.spinner();
        }
    });

    ui.add_space(14.0);

    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - FIELD_SIZE[0]).max(0.0) / 2.0);
        if ui.link("Create an account").clicked() {
            app.handle_switch_to_register();
        }
        ui.add_space(12.0);
        if ui.link("Forgot password?").clicked() {
            app.handle_switch_to_reset();
        }
    });
}

fn render_register_wizard(
    ui: &mut egui::Ui,
    step: usize,
    form: &RegisterForm,
    error: Option<&str>,
    state: &AppState,
    app: &mut App,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Create Account", theme);
    forms::render_step_indicator(ui, &REGISTER_STEPS, step, theme);

    let mut form = form.clone();

    match step {
        0 => {
            forms::render_text_input(ui, "Name", &mut form.name, "Your name", false, FIELD_SIZE);
            ui.add_space(8.0);
            forms::render_text_input(
                ui,
                "Email",
                &mut form.email,
                "you@company.com",
                false,
                FIELD_SIZE,
            );
            ui.add_space(8.0);
            forms::render_text_input(
                ui,
                "Password",
                &mut form.password,
                "At least 8 characters",
                true,
                FIELD_SIZE,
            );
            ui.add_space(8.0);
            forms::render_text_input(
                ui,
                "Confirm password",
                &mut form.confirm_password,
                "Same password again",
                true,
                FIELD_SIZE,
            );
        }
        1 => {
            forms::render_text_input(
                ui,
                "Company name",
                &mut form.company_name,
                "Legal name",
                false,
                FIELD_SIZE,
            );
            ui.add_space(8.0);
            forms::render_text_input(
                ui,
                "Trade name (optional)",
                &mut form.company_trade_name,
                "Storefront name",
                false,
                FIELD_SIZE,
            );
            ui.add_space(8.0);
            forms::render_text_input(
                ui,
                "Tax ID",
                &mut form.company_tax_id,
                "Tax registration number",
                false,
                FIELD_SIZE,
            );
        }
        2 => {
            forms::render_text_input(ui, "Phone", &mut form.phone, "Optional", false, FIELD_SIZE);
            ui.add_space(8.0);
            forms::render_text_input(
                ui,
                "Address",
                &mut form.address,
                "Optional",
                false,
                FIELD_SIZE,
            );
            ui.add_space(8.0);
            forms::render_text_input(ui, "City", &mut form.city, "Optional", false, FIELD_SIZE);
            ui.add_space(8.0);
            forms::render_text_input(ui, "State", &mut form.state, "Optional", false, FIELD_SIZE);
            ui.add_space(8.0);
            forms::render_text_input(
                ui,
                "Postal code",
                &mut form.postal_code,
                "Optional",
                false,
                FIELD_SIZE,
            );
        }
        _ => render_register_review(ui, &form, theme),
    }

    {
        let mut state = app.state.write();
        if let AuthState::Register {
            form: state_form, ..
        } = &mut state.auth
        {
            *state_form = form;
        }
    }

    ui.add_space(12.0);

    if let Some(err) = error {
        forms::render_error(ui, err, theme);
    }

    let last_step = REGISTER_STEPS.len() - 1;
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - FIELD_SIZE[0]).max(0.0) / 2.0);
        if step > 0 && ui.button("Back").clicked() {
            app.handle_register_back();
        }
        if step < last_step {
            if forms::render_button(ui, "Next", Some(theme.selected), None).clicked() {
                app.handle_register_next();
            }
        } else {
            let create = ui.add_enabled(
                !state.auth_loading,
                egui::Button::new("Create account").fill(theme.selected),
            );
            if create.clicked() {
                app.handle_register_submit();
            }
            if state.auth_loading {
                ui.spinner();
            }
        }
    });

    ui.add_space(14.0);
    if ui.link("Back to sign in").clicked() {
        app.handle_switch_to_login();
    }
}

fn render_register_review(ui: &mut egui::Ui, form: &RegisterForm, theme: &Theme) {
    let optional = |value: &str| {
        if value.trim().is_empty() {
            "-".to_string()
        } else {
            value.trim().to_string()
        }
    };

    egui::Grid::new("register_review")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.colored_label(theme.dim, "Name");
            ui.label(&form.name);
            ui.end_row();
            ui.colored_label(theme.dim, "Email");
            ui.label(&form.email);
            ui.end_row();
            ui.colored_label(theme.dim, "Company");
            ui.label(&form.company_name);
            ui.end_row();
            ui.colored_label(theme.dim, "Trade name");
            ui.label(optional(&form.company_trade_name));
            ui.end_row();
            ui.colored_label(theme.dim, "Tax ID");
            ui.label(&form.company_tax_id);
            ui.end_row();
            ui.colored_label(theme.dim, "Phone");
            ui.label(optional(&form.phone));
            ui.end_row();
            ui.colored_label(theme.dim, "City");
            ui.label(optional(&form.city));
            ui.end_row();
        });
}

fn render_reset_wizard(
    ui: &mut egui::Ui,
    step: usize,
    form: &ResetForm,
    error: Option<&str>,
    state: &AppState,
    app: &mut App,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Reset Password", theme);
    forms::render_step_indicator(ui, &RESET_STEPS, step, theme);

    let mut form = form.clone();

    match step {
        0 => {
            forms::render_hint(ui, "We'll email you a one-time reset code.", theme);
            ui.add_space(8.0);
            forms::render_text_input(
                ui,
                "Email",
                &mut form.email,
                "you@company.com",
                false,
                FIELD_SIZE,
            );
        }
        1 => {
            forms::render_text_input(
                ui,
                "Reset code",
                &mut form.code,
                "Code from the email",
                false,
                FIELD_SIZE,
            );
            ui.add_space(8.0);
            forms::render_text_input(
                ui,
                "New password",
                &mut form.new_password,
                "At least 8 characters",
                true,
                FIELD_SIZE,
            );
            ui.add_space(8.0);
            forms::render_text_input(
                ui,
                "Confirm password",
                &mut form.confirm_password,
                "Same password again",
                true,
                FIELD_SIZE,
            );
        }
        _ => {
            ui.colored_label(theme.success, "Password updated.");
            ui.add_space(8.0);
            forms::render_hint(ui, "Sign in with your new password.", theme);
        }
    }

    {
        let mut state = app.state.write();
        if let AuthState::ResetPassword {
            form: state_form, ..
        } = &mut state.auth
        {
            *state_form = form;
        }
    }

    ui.add_space(12.0);

    if let Some(err) = error {
        forms::render_error(ui, err, theme);
    }

    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - FIELD_SIZE[0]).max(0.0) / 2.0);
        match step {
            0 => {
                let send = ui.add_enabled(
                    !state.auth_loading,
                    egui::Button::new("Email me a code").fill(theme.selected),
                );
                if send.clicked() {
                    app.handle_reset_next();
                }
            }
            1 => {
                if ui.button("Back").clicked() {
                    app.handle_reset_back();
                }
                let set = ui.add_enabled(
                    !state.auth_loading,
                    egui::Button::new("Set new password").fill(theme.selected),
                );
                if set.clicked() {
                    app.handle_reset_next();
                }
            }
            _ => {
                if forms::render_button(ui, "Back to sign in", Some(theme.selected), None).clicked()
                {
                    app.handle_switch_to_login();
                }
            }
        }
        if state.auth_loading {
            ui.spinner();
        }
    });

    if step < 2 {
        ui.add_space(14.0);
        if ui.link("Back to sign in").clicked() {
            app.handle_switch_to_login();
        }
    }
}
