//! Finished polyline values stored on the drawing surface.

use std::fmt;

use bevy::prelude::*;

/// Stable identity of a committed shape, handed out by the [`Drawing`](super::Drawing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A finalized polyline.
///
/// Owns its vertices: the construction buffer is reused for the next shape,
/// so the points are copied out of it at commit time.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub id: ShapeId,
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl Polyline {
    pub fn new(id: ShapeId, points: Vec<Vec2>, color: Color) -> Self {
        Self { id, points, color }
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }
}
