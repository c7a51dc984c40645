//! In-progress layer rendering.

use bevy::gizmos::prelude::*;
use bevy::prelude::*;

use crate::config::AppConfig;
use crate::constants::VERTEX_MARKER_RADIUS;
use crate::drawing::DraftGizmoGroup;

use super::machine::PolylineTool;

pub fn render_draft(
    mut gizmos: Gizmos<DraftGizmoGroup>,
    tool: Res<PolylineTool>,
    config: Res<AppConfig>,
) {
    if !tool.is_drawing() {
        return;
    }

    let settings = &config.data.polyline;
    let color = settings.draft_color();
    let draft = tool.draft();

    gizmos.linestrip_2d(draft.preview_points(), color);

    if settings.show_vertices {
        for point in draft.committed() {
            gizmos.circle_2d(*point, VERTEX_MARKER_RADIUS, color);
        }
    }
}
