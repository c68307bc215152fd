//! Interactive circular crop: transform state, gestures, and rendering.
//!
//! The crop pipeline maps an arbitrary uploaded photo into a fixed circular
//! viewport under user control:
//!
//! 1. The cover base scale guarantees the photo covers the viewport at any
//!    zoom multiplier >= 1 when centered.
//! 2. Drag and pinch gestures mutate [`CropState`] through the
//!    [`GestureTracker`] state machine.
//! 3. Every state change re-renders the preview; generation materializes the
//!    same placement into a square crop surface.
//!
//! # Coordinate System
//!
//! - Viewport origin is top-left; offsets are in viewport pixels
//! - `scale` is a multiplier on the cover base scale, not an absolute factor

mod gesture;
mod render;
mod state;

pub use gesture::{GestureMode, GestureTracker};
pub use render::{
    materialize_crop, render_preview, OUTLINE_COLOR, OUTLINE_WIDTH, OVERLAY_COLOR,
};
pub use state::{
    cover_base_scale, CropState, ViewportGeometry, CIRCLE_RADIUS_FRACTION, DEFAULT_SCALE,
    PINCH_MAX_SCALE, PINCH_MIN_SCALE,
};
