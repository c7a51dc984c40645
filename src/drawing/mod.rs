//! The drawing surface: committed polylines and how they reach the screen.
//!
//! Two layers are rendered through separate gizmo groups: committed shapes
//! (owned by the [`Drawing`] resource) and the in-progress draft (owned by the
//! editor's polyline tool). Only history commands insert into or remove from
//! the [`Drawing`].
//!
//! ## Module Structure
//!
//! - [`shape`] - `Polyline` values and their `ShapeId`
//! - [`surface`] - `ShapeSurface` trait and the `Drawing` resource
//! - [`gizmo`] - Gizmo groups for both layers
//! - [`rendering`] - Committed-layer rendering system

mod gizmo;
mod rendering;
mod shape;
mod surface;


pub use gizmo::{CommittedGizmoGroup, DraftGizmoGroup};
pub use shape::{Polyline, ShapeId};
pub use surface::{Drawing, ShapeSurface};

use bevy::prelude::*;

use crate::config::{AppConfig, ConfigLoaded};

pub struct DrawingPlugin;

impl Plugin for DrawingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Drawing>()
            .init_gizmo_group::<CommittedGizmoGroup>()
            .init_gizmo_group::<DraftGizmoGroup>()
            .add_systems(
                Startup,
                gizmo::configure_drawing_gizmos.after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    gizmo::configure_drawing_gizmos.run_if(resource_changed::<AppConfig>),
                    rendering::render_committed_shapes,
                ),
            );
    }
}
