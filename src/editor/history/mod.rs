//! Undo/Redo system for editor actions.
//!
//! Every shape committed by the polyline tool is recorded as a command that
//! can be undone and redone. The history owns two stacks, `done` and
//! `undone`; executing a new command clears `undone`.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last action
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone action
//! - Toolbar **Undo** / **Redo** buttons
//!
//! ## Module Structure
//!
//! - [`commands`] - EditorCommand enum defining all reversible operations
//! - [`command_history`] - CommandHistory resource and HistoryStatus
//! - [`systems`] - Bevy systems for shortcuts and queued requests

mod command_history;
mod commands;
mod systems;


// Re-exports
pub use command_history::{CommandHistory, HistoryStatus};
pub use commands::EditorCommand;
pub use systems::{apply_history_requests, handle_history_shortcuts, HistoryRequest};
