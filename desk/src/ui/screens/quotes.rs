//! # Quotes Screen
//!
//! Status-filtered quote list with lifecycle actions and the builder window.

use crate::app::{App, AppState, DocumentDraft};
use crate::ui::theme::Theme;
use crate::ui::widgets::{builder, forms, tables};
use crate::utils::format::{format_cents, format_date};
use egui;
use shared::QuoteStatus;

/// Render quotes screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.heading("Quotes");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("New quote").clicked() {
                app.open_quote_builder();
            }
            if state.quotes.loading {
                ui.spinner();
            }
        });
    });
    ui.add_space(8.0);

    render_filter_row(ui, state, app);
    ui.add_space(8.0);

    if state.quotes.items.is_empty() {
        if state.quotes.loading {
            tables::render_loading(ui, "Loading quotes...", theme);
        } else if state.quotes.status_filter.is_some() {
            tables::render_empty_state(ui, "No quotes with this status", None, theme);
        } else {
            tables::render_empty_state(
                ui,
                "No quotes yet",
                Some("Use New quote to draft one."),
                theme,
            );
        }
    } else {
        render_quote_table(ui, state, app, theme);
    }

    if state.quotes.builder.is_some() {
        render_builder_window(ui, state, app, theme);
    }
    if let Some(id) = state.quotes.confirm_delete {
        render_confirm_delete(ui, id, state, app, theme);
    }
}

fn render_filter_row(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.horizontal(|ui| {
        let filter = state.quotes.status_filter;
        if ui.selectable_label(filter.is_none(), "All").clicked() {
            app.set_quote_filter(None);
        }
        for status in QuoteStatus::ALL {
            if ui
                .selectable_label(filter == Some(status), status.label())
                .clicked()
            {
                app.set_quote_filter(Some(status));
            }
        }
    });
}

fn render_quote_table(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let config = tables::TableConfig {
        num_columns: 7,
        ..Default::default()
    };
    tables::render_table(
        ui,
        "quotes",
        config,
        &["#", "Customer", "Status", "Total", "Valid until", "Updated", ""],
        theme,
        |ui| {
            for quote in &state.quotes.items {
                ui.label(format!("{}", quote.id));
                ui.label(&quote.customer_name);
                ui.horizontal(|ui| {
                    ui.colored_label(theme.quote_status_color(quote.status), quote.status.label());
                    if quote.is_expired() && quote.status != QuoteStatus::Converted {
                        ui.colored_label(theme.warning, "(expired)");
                    }
                });
                ui.label(format_cents(quote.total_cents));
                ui.colored_label(theme.dim, quote.valid_until.as_deref().unwrap_or("-"));
                ui.colored_label(theme.dim, format_date(&quote.updated_at));
                ui.horizontal(|ui| match quote.status {
                    QuoteStatus::Draft => {
                        if ui.small_button("Edit").clicked() {
                            app.edit_quote(quote.id);
                        }
                        if ui.small_button("Send").clicked() {
                            app.handle_quote_send(quote.id);
                        }
                        if ui.small_button("Delete").clicked() {
                            app.request_quote_delete(quote.id);
                        }
                    }
                    QuoteStatus::Sent | QuoteStatus::Approved => {
                        if ui.small_button("Convert to sale").clicked() {
                            app.handle_quote_convert(quote.id);
                        }
                        if ui.small_button("Delete").clicked() {
                            app.request_quote_delete(quote.id);
                        }
                    }
                    QuoteStatus::Rejected => {
                        if ui.small_button("Delete").clicked() {
                            app.request_quote_delete(quote.id);
                        }
                    }
                    QuoteStatus::Converted => {
                        ui.colored_label(theme.dim, "-");
                    }
                });
                ui.end_row();
            }
        },
    );
}

fn render_builder_window(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(draft) = &state.quotes.builder else {
        return;
    };
    let mut draft: DocumentDraft = draft.clone();
    let title = if draft.id.is_some() {
        "Edit Quote"
    } else {
        "New Quote"
    };

    let mut actions = builder::LineEditorActions::default();
    let mut save_clicked = false;
    let mut cancel_clicked = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            builder::render_party_pickers(ui, &mut draft, state);
            ui.add_space(10.0);

            actions = builder::render_line_editor(ui, &mut draft, state, theme);
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Valid until");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.valid_until)
                        .hint_text("2026-09-30")
                        .desired_width(100.0),
                );
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
                let save = ui.add_enabled(
                    !state.quotes.saving,
                    egui::Button::new("Save quote").fill(theme.selected),
                );
                save_clicked = save.clicked();
                cancel_clicked = ui.button("Cancel").clicked();
                if state.quotes.saving {
                    ui.spinner();
                }
            });
        });

    {
        let mut s = app.state.write();
        if let Some(state_draft) = &mut s.quotes.builder {
            *state_draft = draft;
        }
    }

    if actions.add_line {
        app.handle_quote_add_line();
    }
    if let Some((product_id, quantity)) = actions.set_quantity {
        app.handle_quote_line_quantity(product_id, quantity);
    }
    if let Some(product_id) = actions.remove_line {
        app.handle_quote_remove_line(product_id);
    }
    if save_clicked {
        app.handle_quote_save();
    }
    if cancel_clicked {
        app.close_quote_builder();
    }
}

fn render_confirm_delete(
    ui: &mut egui::Ui,
    id: i64,
    _state: &AppState,
    app: &mut App,
    theme: &Theme,
) {
    egui::Window::new("Delete Quote")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(format!("Delete quote #{id}? This cannot be undone."));
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new("Delete").fill(theme.error))
                    .clicked()
                {
                    app.confirm_quote_delete();
                }
                if ui.button("Cancel").clicked() {
                    app.cancel_quote_delete();
                }
            });
        });
}
