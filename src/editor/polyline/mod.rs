//! Polyline construction tool.
//!
//! Clicking adds vertices while a provisional vertex follows the pointer.
//! Enter finishes the shape, Backspace removes the last committed vertex and
//! Escape abandons the draft. The click that reaches the vertex cap finishes
//! the shape on its own.
//!
//! ## Module Structure
//!
//! - [`draft`] - `PolylineDraft`, the vertex buffer under construction
//! - [`machine`] - States, events, the transition table and `PolylineTool`
//! - [`input`] - Mouse/keyboard to `ToolEvent` translation
//! - [`rendering`] - In-progress layer rendering

mod draft;
mod input;
mod machine;
mod rendering;

#[cfg(test)]
mod tests;

pub use input::{handle_polyline_input, sync_tool_settings};
pub use machine::{ConstructionState, PolylineTool, ToolEvent, ToolKey, ToolResponse};
pub use rendering::render_draft;
