mod dialogs;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            (
                // Panels first so dialogs sit on top of them
                toolbar::toolbar_ui,
                toolbar::status_bar_ui,
                dialogs::config_reset_notification_ui,
            )
                .chain(),
        );
    }
}
