//! Routing of tool events into the construction machine and the history.
//!
//! A completed construction is the only thing that reaches the history: the
//! finished vertices become a [`Polyline`] with a fresh id and the committed
//! color, wrapped in [`EditorCommand::AddShape`] and executed.

use bevy::prelude::*;

use crate::drawing::{Drawing, Polyline};

use super::history::{CommandHistory, EditorCommand};
use super::polyline::{PolylineTool, ToolEvent, ToolResponse};

/// Process one event to completion, including any history operation it triggers
pub fn dispatch_tool_event(
    event: ToolEvent,
    tool: &mut PolylineTool,
    history: &mut CommandHistory,
    drawing: &mut Drawing,
    committed_color: Color,
) -> ToolResponse {
    let response = tool.dispatch(event);

    if let ToolResponse::Completed(points) = &response {
        let shape = Polyline::new(drawing.allocate_id(), points.clone(), committed_color);
        info!(
            "Committed polyline {} with {} points",
            shape.id,
            shape.vertex_count()
        );
        history.execute(EditorCommand::AddShape { shape }, drawing);
    }

    response
}
