//! Rendering of the committed layer.

use bevy::gizmos::prelude::*;
use bevy::prelude::*;

use super::gizmo::CommittedGizmoGroup;
use super::surface::Drawing;

pub fn render_committed_shapes(mut gizmos: Gizmos<CommittedGizmoGroup>, drawing: Res<Drawing>) {
    for shape in drawing.shapes() {
        if shape.points.len() < 2 {
            continue;
        }

        gizmos.linestrip_2d(shape.points.iter().copied(), shape.color);
    }
}
