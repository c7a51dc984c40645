//! Vertex buffer for the polyline under construction.

use bevy::prelude::*;

/// Committed vertices plus the provisional vertex that follows the pointer.
///
/// The buffer is kept between constructions and cleared on finalize or
/// cancel, so anything that outlives the draft must copy the points out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolylineDraft {
    points: Vec<Vec2>,
    provisional: Option<Vec2>,
}

impl PolylineDraft {
    /// Start a new construction at `pos`; the provisional vertex sits on top of it
    pub fn start(&mut self, pos: Vec2) {
        self.points.clear();
        self.points.push(pos);
        self.provisional = Some(pos);
    }

    /// Commit `pos` as the next vertex and move the provisional vertex there
    pub fn push(&mut self, pos: Vec2) {
        self.points.push(pos);
        self.provisional = Some(pos);
    }

    pub fn set_provisional(&mut self, pos: Vec2) {
        self.provisional = Some(pos);
    }

    /// Drop the last committed vertex, leaving the provisional vertex alone
    pub fn pop_committed(&mut self) -> Option<Vec2> {
        self.points.pop()
    }

    /// Copy the committed vertices out and reset the buffer.
    /// The provisional vertex is discarded.
    pub fn take_committed(&mut self) -> Vec<Vec2> {
        let points = self.points.to_vec();
        self.clear();
        points
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.provisional = None;
    }

    pub fn committed(&self) -> &[Vec2] {
        &self.points
    }

    pub fn committed_count(&self) -> usize {
        self.points.len()
    }

    pub fn provisional(&self) -> Option<Vec2> {
        self.provisional
    }

    /// Committed vertices followed by the provisional one, as drawn on screen
    pub fn preview_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied().chain(self.provisional)
    }
}
