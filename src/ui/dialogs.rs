use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::ConfigResetNotification;

/// Tells the user that their config file was reset or adjusted at startup
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Configuration Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            if let Some(ref reason) = notification.reason {
                ui.label(reason.as_str());
                ui.add_space(10.0);
            }
            ui.label(
                egui::RichText::new("Defaults are used for anything that could not be read.")
                    .weak(),
            );
            ui.add_space(10.0);

            if ui.button("OK").clicked() {
                notification.show = false;
                notification.reason = None;
            }
        });
    Ok(())
}
