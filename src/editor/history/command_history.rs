//! Command history resource for tracking undo/redo state.

use bevy::prelude::*;

use crate::drawing::ShapeSurface;

use super::commands::EditorCommand;

/// Undo/redo availability, republished after every history operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryStatus {
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Resource tracking command history for undo/redo
#[derive(Resource, Default)]
pub struct CommandHistory {
    /// Executed commands that can be undone (most recent last)
    done: Vec<EditorCommand>,
    /// Undone commands that can be redone (most recent last)
    undone: Vec<EditorCommand>,
}

impl CommandHistory {
    /// Run a new command and record it. Any redoable commands are dropped:
    /// history does not branch.
    pub fn execute<S: ShapeSurface + ?Sized>(
        &mut self,
        command: EditorCommand,
        surface: &mut S,
    ) -> HistoryStatus {
        command.execute(surface);
        debug!("Executed: {}", command.description());

        self.done.push(command);
        self.undone.clear();
        self.status()
    }

    /// Revert the most recent command. No-op when there is nothing to undo.
    pub fn undo<S: ShapeSurface + ?Sized>(&mut self, surface: &mut S) -> HistoryStatus {
        if let Some(command) = self.done.pop() {
            command.undo(surface);
            debug!("Undid: {}", command.description());
            self.undone.push(command);
        }
        self.status()
    }

    /// Re-run the most recently undone command. No-op when there is nothing to redo.
    pub fn redo<S: ShapeSurface + ?Sized>(&mut self, surface: &mut S) -> HistoryStatus {
        if let Some(command) = self.undone.pop() {
            command.execute(surface);
            debug!("Redid: {}", command.description());
            self.done.push(command);
        }
        self.status()
    }

    /// Check if there are commands to undo
    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    /// Check if there are commands to redo
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn status(&self) -> HistoryStatus {
        HistoryStatus {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Get the count of undoable commands
    pub fn undo_count(&self) -> usize {
        self.done.len()
    }

    /// Get the count of redoable commands
    pub fn redo_count(&self) -> usize {
        self.undone.len()
    }

    /// Description of the command the next undo would revert
    pub fn undo_description(&self) -> Option<String> {
        self.done.last().map(EditorCommand::description)
    }

    /// Description of the command the next redo would re-run
    pub fn redo_description(&self) -> Option<String> {
        self.undone.last().map(EditorCommand::description)
    }
}
