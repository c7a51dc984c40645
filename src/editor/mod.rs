//! Editor: the polyline construction tool, the command history and the
//! glue that routes input between them.

mod camera;
mod dispatch;
pub mod history;
mod params;
pub mod polyline;

pub use history::{CommandHistory, HistoryRequest};
pub use polyline::PolylineTool;

use bevy::prelude::*;

use crate::config::AppConfig;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PolylineTool>()
            .init_resource::<CommandHistory>()
            .add_message::<HistoryRequest>()
            .add_systems(Startup, camera::spawn_camera)
            .add_systems(
                Update,
                (
                    polyline::sync_tool_settings.run_if(resource_changed::<AppConfig>),
                    (
                        history::handle_history_shortcuts,
                        history::apply_history_requests,
                    )
                        .chain(),
                    polyline::handle_polyline_input,
                    polyline::render_draft,
                ),
            );
    }
}
