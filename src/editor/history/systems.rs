//! Bevy systems for undo/redo shortcuts and requests.

use bevy::prelude::*;
use bevy::window::RequestRedraw;
use bevy_egui::EguiContexts;

use crate::drawing::Drawing;

use super::command_history::CommandHistory;

/// Request to move through history, written by shortcuts and toolbar buttons
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRequest {
    Undo,
    Redo,
}

/// System to turn Ctrl+Z into undo and Ctrl+Y / Ctrl+Shift+Z into redo
pub fn handle_history_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: MessageWriter<HistoryRequest>,
    mut contexts: EguiContexts,
) {
    // Text fields keep their own undo
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    if !ctrl {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyY) || (shift && keyboard.just_pressed(KeyCode::KeyZ)) {
        requests.write(HistoryRequest::Redo);
    } else if keyboard.just_pressed(KeyCode::KeyZ) {
        requests.write(HistoryRequest::Undo);
    }
}

/// System applying queued history requests to the drawing, in order
pub fn apply_history_requests(
    mut requests: MessageReader<HistoryRequest>,
    mut history: ResMut<CommandHistory>,
    mut drawing: ResMut<Drawing>,
    mut redraw: MessageWriter<RequestRedraw>,
) {
    for request in requests.read() {
        let status = match request {
            HistoryRequest::Undo => history.undo(&mut *drawing),
            HistoryRequest::Redo => history.redo(&mut *drawing),
        };
        debug!(
            "History after {:?}: can_undo={}, can_redo={}",
            request, status.can_undo, status.can_redo
        );
        redraw.write(RequestRedraw);
    }
}
