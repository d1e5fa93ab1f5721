//! # SalesDesk - Application Entry Point
//!
//! Boots logging, enters the global Tokio runtime, and hands the frame loop
//! to eframe. Each frame drains async events, applies theme changes, renders
//! the active screen, and shows pending toasts.

use desk::app::App;
use desk::ui::theme::{Theme, ThemeConfig};
use desk::ui::widgets::notifications::NotificationManager;
use desk::{debug, ui, utils};
use std::time::Duration;

struct DeskApp {
    app: App,
    notifications: NotificationManager,
    applied_theme: Option<ThemeConfig>,
}

impl DeskApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = App::new();
        let config = app.state.read().settings.theme_config.clone();
        Theme::apply(&cc.egui_ctx, &config);
        Self {
            app,
            notifications: NotificationManager::new(),
            applied_theme: Some(config),
        }
    }
}

impl eframe::App for DeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process async events (non-blocking)
        self.app.on_tick();

        // Re-apply visuals only when the theme configuration changed
        let config = self.app.state.read().settings.theme_config.clone();
        if self.applied_theme.as_ref() != Some(&config) {
            Theme::apply(ctx, &config);
            self.applied_theme = Some(config);
        }

        ui::render(ctx, &mut self.app, &mut self.notifications);
        self.notifications.show(ctx);

        // Keep polling the event channel even when idle
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

fn main() -> eframe::Result<()> {
    debug::init();
    tracing::info!("SalesDesk starting");

    // tokio::spawn in handlers needs an ambient runtime; enter it before
    // App::new() so a restored session can kick off its dashboard fetch.
    let _enter = utils::runtime::TOKIO_RT.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SalesDesk")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SalesDesk",
        options,
        Box::new(|cc| Ok(Box::new(DeskApp::new(cc)))),
    )
}
