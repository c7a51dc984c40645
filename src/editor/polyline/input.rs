//! Input translation for the polyline tool.
//!
//! Raw input is read from the unified `WindowEvent` stream, which keeps the
//! order the windowing backend delivered it in. Several clicks or key presses
//! batched into one frame are each dispatched, in that order.

use bevy::ecs::system::SystemParam;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::{RequestRedraw, WindowEvent};
use bevy_egui::EguiContexts;

use crate::config::AppConfig;
use crate::drawing::Drawing;

use super::super::dispatch::dispatch_tool_event;
use super::super::history::CommandHistory;
use super::super::params::{is_cursor_over_ui, CameraParams};
use super::machine::{PolylineTool, ToolEvent, ToolKey, ToolResponse};

/// Everything a dispatched event may write to
#[derive(SystemParam)]
pub struct PolylineResources<'w> {
    pub tool: ResMut<'w, PolylineTool>,
    pub history: ResMut<'w, CommandHistory>,
    pub drawing: ResMut<'w, Drawing>,
    pub config: Res<'w, AppConfig>,
}

/// Canvas-relevant input, already in world space, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasInput {
    CursorMoved(Vec2),
    LeftPressed,
    KeyPressed(KeyCode),
}

/// Turn this frame's canvas input into tool events, preserving arrival order.
///
/// `cursor` is the last known world position of the pointer; it is updated by
/// every move and gives clicks their position. Clicks with no known position
/// and keys without a tool binding are dropped.
pub fn collect_tool_events(
    cursor: &mut Option<Vec2>,
    inputs: impl IntoIterator<Item = CanvasInput>,
) -> Vec<ToolEvent> {
    inputs
        .into_iter()
        .filter_map(|input| match input {
            CanvasInput::CursorMoved(pos) => {
                *cursor = Some(pos);
                Some(ToolEvent::Move(pos))
            }
            CanvasInput::LeftPressed => cursor.map(ToolEvent::Click),
            CanvasInput::KeyPressed(key) => ToolKey::from_key_code(key).map(ToolEvent::Key),
        })
        .collect()
}

pub fn handle_polyline_input(
    mut window_events: MessageReader<WindowEvent>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    mut last_cursor: Local<Option<Vec2>>,
    mut res: PolylineResources,
    mut redraw: MessageWriter<RequestRedraw>,
) {
    let over_ui = is_cursor_over_ui(&mut contexts);
    let typing = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false);

    let inputs: Vec<CanvasInput> = window_events
        .read()
        .filter_map(|event| match event {
            WindowEvent::CursorMoved(moved) => camera
                .viewport_to_world(moved.position)
                .map(CanvasInput::CursorMoved),
            WindowEvent::MouseButtonInput(input)
                if !over_ui
                    && input.button == MouseButton::Left
                    && input.state == ButtonState::Pressed =>
            {
                Some(CanvasInput::LeftPressed)
            }
            WindowEvent::KeyboardInput(input)
                if !typing && input.state == ButtonState::Pressed && !input.repeat =>
            {
                Some(CanvasInput::KeyPressed(input.key_code))
            }
            _ => None,
        })
        .collect();
    if inputs.is_empty() {
        return;
    }

    if last_cursor.is_none() {
        *last_cursor = camera.cursor_world_pos();
    }
    let events = collect_tool_events(&mut last_cursor, inputs);

    let committed_color = res.config.data.polyline.committed_color();

    for event in events {
        let response = dispatch_tool_event(
            event,
            &mut res.tool,
            &mut res.history,
            &mut res.drawing,
            committed_color,
        );
        if response != ToolResponse::Ignored {
            redraw.write(RequestRedraw);
        }
    }
}

/// Keep the tool's vertex cap in step with the config
pub fn sync_tool_settings(config: Res<AppConfig>, mut tool: ResMut<PolylineTool>) {
    tool.set_max_points(config.data.polyline.max_points);
}
