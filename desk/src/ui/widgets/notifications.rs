//! # Notifications Widget
//!
//! Toast notification system using egui-notify. Event folds queue
//! `(kind, message)` pairs on the state; this widget drains them into
//! toasts once per frame.

use std::sync::Arc;

use egui_notify::Toasts;
use parking_lot::RwLock;

use crate::app::AppState;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success notification (saves, sends, conversions)
    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    /// Show an error notification (failed requests)
    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    /// Show a warning notification (session expiry)
    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    /// Show an info notification
    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Move queued notifications off the state and into toasts. Takes the
    /// write lock briefly; called once per frame before rendering.
    pub fn drain_pending(&mut self, state: &Arc<RwLock<AppState>>) {
        let pending = {
            let mut state = state.write();
            if state.pending_notifications.is_empty() {
                return;
            }
            std::mem::take(&mut state.pending_notifications)
        };

        for (kind, message) in pending {
            match kind.as_str() {
                "success" => self.success(message),
                "error" => self.error(message),
                "warning" => self.warning(message),
                _ => self.info(message),
            }
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
