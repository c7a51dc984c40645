//! Gizmo groups for the two drawing layers.

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

use crate::config::AppConfig;

/// Layer for committed polylines
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct CommittedGizmoGroup;

/// Layer for the polyline under construction
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct DraftGizmoGroup;

/// Apply the configured stroke width to both layers.
///
/// Runs at startup and again whenever the config changes.
pub fn configure_drawing_gizmos(
    config: Res<AppConfig>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    let width = config.data.polyline.stroke_width;

    let (committed, _) = config_store.config_mut::<CommittedGizmoGroup>();
    committed.line.width = width;

    let (draft, _) = config_store.config_mut::<DraftGizmoGroup>();
    draft.line.width = width;
}
