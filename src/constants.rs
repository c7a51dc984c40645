//! Centralized constants used across the application.
//!
//! Magic numbers shared by the editor, the renderer and the config layer live
//! here so the defaults and the clamping bounds stay in one place.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Default vertex cap for a polyline; the click that reaches it finalizes the shape
pub const DEFAULT_MAX_POINTS: usize = 10;

/// Smallest accepted vertex cap. Anything lower would let the second click
/// overshoot the cap before the cap check can run.
pub const MIN_MAX_POINTS: usize = 3;

/// Largest accepted vertex cap
pub const MAX_MAX_POINTS: usize = 64;

/// Default stroke width for both drawing layers, in pixels
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Accepted stroke width range, in pixels
pub const STROKE_WIDTH_RANGE: (f32, f32) = (0.5, 12.0);

/// Radius of the vertex markers drawn on the in-progress polyline
pub const VERTEX_MARKER_RADIUS: f32 = 3.0;

/// In-progress polyline color (sRGBA)
pub const DEFAULT_DRAFT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Committed polyline color (sRGBA)
pub const DEFAULT_COMMITTED_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Canvas background color (sRGB)
pub const CANVAS_BACKGROUND: [f32; 3] = [0.96, 0.96, 0.94];
