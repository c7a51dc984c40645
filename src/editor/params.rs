//! SystemParam bundles shared by editor input systems.
//!
//! - [`CameraParams`]: camera and window access for cursor-to-world conversion
//! - [`is_cursor_over_ui`]: egui hit test used to gate canvas clicks

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use super::camera::EditorCamera;

/// Bundled camera and window queries for cursor-to-world calculations
#[derive(SystemParam)]
pub struct CameraParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<EditorCamera>>,
}

impl CameraParams<'_, '_> {
    /// World position of the cursor, if it is inside the window
    pub fn cursor_world_pos(&self) -> Option<Vec2> {
        let window = self.window.single().ok()?;
        self.viewport_to_world(window.cursor_position()?)
    }

    /// Convert a logical window position (as carried by `CursorMoved`) to world space
    pub fn viewport_to_world(&self, viewport_pos: Vec2) -> Option<Vec2> {
        let (camera, transform) = self.camera.single().ok()?;
        camera.viewport_to_world_2d(transform, viewport_pos).ok()
    }
}

pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}
