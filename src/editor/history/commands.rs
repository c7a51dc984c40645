//! Editor command enum for undo/redo operations.

use bevy::prelude::*;

use crate::drawing::{Polyline, ShapeSurface};

/// A reversible command in the editor
#[derive(Clone, Debug, PartialEq)]
pub enum EditorCommand {
    /// A finished polyline was added to the drawing
    AddShape { shape: Polyline },
}

impl EditorCommand {
    /// Apply the command to the surface (first run and redo)
    pub fn execute<S: ShapeSurface + ?Sized>(&self, surface: &mut S) {
        match self {
            EditorCommand::AddShape { shape } => {
                if surface.contains_shape(shape.id) {
                    warn!("Shape {} is already on the surface, replacing it", shape.id);
                }
                surface.insert_shape(shape.clone());
            }
        }
    }

    /// Revert exactly what `execute` did
    pub fn undo<S: ShapeSurface + ?Sized>(&self, surface: &mut S) {
        match self {
            EditorCommand::AddShape { shape } => {
                if surface.remove_shape(shape.id).is_none() {
                    warn!("Undo of {} found no shape to remove", shape.id);
                }
            }
        }
    }

    /// Label used in logs and button tooltips
    pub fn description(&self) -> String {
        match self {
            EditorCommand::AddShape { shape } => {
                format!("Add polyline ({} points)", shape.vertex_count())
            }
        }
    }
}
