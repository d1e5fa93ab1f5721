//! # Form Components
//!
//! Reusable form elements for consistent UI across screens.

use crate::ui::theme::Theme;
use egui;

/// Render a styled text input field with its label above it.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
    size: [f32; 2],
) -> egui::Response {
    ui.label(label);
    ui.add_sized(
        size,
        egui::TextEdit::singleline(value)
            .password(password)
            .hint_text(hint),
    )
}

/// Label + single-line input on one row, for the grid-style editor forms.
/// Returns the input response so callers can watch for edits.
pub fn render_field_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
) -> egui::Response {
    ui.label(label);
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(220.0),
    );
    ui.end_row();
    response
}

/// Render a styled button with an optional fill color and minimum size.
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    fill_color: Option<egui::Color32>,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let mut button = egui::Button::new(text);
    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    if let Some(size) = min_size {
        button = button.min_size(size);
    }
    ui.add(button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(
        egui::RichText::new(text)
            .heading()
            .strong()
            .color(theme.selected),
    );
    ui.add_space(16.0);
}

/// Render an inline error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).color(theme.error));
    ui.add_space(8.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).color(theme.dim));
}

/// Wizard progress line: past steps dim, current step accented.
pub fn render_step_indicator(ui: &mut egui::Ui, steps: &[&str], current: usize, theme: &Theme) {
    ui.horizontal(|ui| {
        for (index, step) in steps.iter().enumerate() {
            if index > 0 {
                ui.colored_label(theme.dim, ">");
            }
            let color = if index == current {
                theme.selected
            } else {
                theme.dim
            };
            ui.colored_label(color, format!("{}. {}", index + 1, step));
        }
    });
    ui.add_space(12.0);
}
