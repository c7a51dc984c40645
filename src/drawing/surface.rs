//! The committed-shapes surface.

use bevy::prelude::*;

use super::shape::{Polyline, ShapeId};

/// Something committed shapes can be added to and removed from.
///
/// Insertion and removal are total: inserting an id that is already present
/// replaces the stored shape, removing an absent id is a no-op.
pub trait ShapeSurface {
    fn insert_shape(&mut self, shape: Polyline);

    fn remove_shape(&mut self, id: ShapeId) -> Option<Polyline>;

    fn contains_shape(&self, id: ShapeId) -> bool;
}

/// Resource holding every committed polyline, in insertion order
#[derive(Resource, Debug, Default)]
pub struct Drawing {
    shapes: Vec<Polyline>,
    next_id: u64,
}

impl Drawing {
    /// Reserve an id for a shape about to be committed
    pub fn allocate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn shapes(&self) -> &[Polyline] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl ShapeSurface for Drawing {
    fn insert_shape(&mut self, shape: Polyline) {
        if let Some(existing) = self.shapes.iter_mut().find(|s| s.id == shape.id) {
            *existing = shape;
        } else {
            self.shapes.push(shape);
        }
    }

    fn remove_shape(&mut self, id: ShapeId) -> Option<Polyline> {
        let index = self.shapes.iter().position(|shape| shape.id == id)?;
        Some(self.shapes.remove(index))
    }

    fn contains_shape(&self, id: ShapeId) -> bool {
        self.shapes.iter().any(|shape| shape.id == id)
    }
}
