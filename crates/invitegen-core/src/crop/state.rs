//! Pan/zoom state for the circular crop viewport.
//!
//! # Coordinate System
//!
//! The viewport is a fixed-size square with the crop circle centered in it.
//! `scale` multiplies the computed cover base scale (the minimum scale at
//! which the photo fully covers the viewport), and the offsets displace the
//! photo from its centered position in viewport pixels.
//!
//! Zoom bounds are asymmetric on purpose: pinch gestures clamp to
//! [`PINCH_MIN_SCALE`, `PINCH_MAX_SCALE`], while the slider path is bounded
//! only by the slider control's own declared range.

use serde::{Deserialize, Serialize};

/// Zoom multiplier applied when a new photo is loaded.
pub const DEFAULT_SCALE: f32 = 1.6;

/// Lower bound for pinch-driven zoom.
pub const PINCH_MIN_SCALE: f32 = 1.0;

/// Upper bound for pinch-driven zoom.
pub const PINCH_MAX_SCALE: f32 = 4.0;

/// Crop circle radius as a fraction of the viewport width.
pub const CIRCLE_RADIUS_FRACTION: f32 = 0.36;

/// User-controlled crop transform: zoom multiplier plus pan offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropState {
    /// Zoom multiplier on top of the cover base scale.
    pub scale: f32,
    /// Horizontal displacement from centered placement, in viewport pixels.
    pub offset_x: f32,
    /// Vertical displacement from centered placement, in viewport pixels.
    pub offset_y: f32,
}

impl Default for CropState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl CropState {
    /// Reset to the default transform (applied when a new photo is loaded).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add pan deltas to the offsets.
    ///
    /// Deltas are applied unconditionally: panning is never clamped to keep
    /// the photo covering the viewport, so the user can expose transparent
    /// viewport edges. Observable behavior, kept as-is.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        self.offset_x += delta_x;
        self.offset_y += delta_y;
    }

    /// Set the zoom multiplier directly (slider path).
    ///
    /// Not clamped here: the slider control's own min/max bounds this path.
    pub fn set_zoom(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Update zoom from a pinch gesture, relative to the gesture baseline.
    ///
    /// The new scale is `start_scale * current_dist / start_dist`, clamped to
    /// [`PINCH_MIN_SCALE`, `PINCH_MAX_SCALE`]. Returns the resulting scale so
    /// the binding layer can mirror it into the slider control.
    pub fn pinch_update(&mut self, current_dist: f32, start_dist: f32, start_scale: f32) -> f32 {
        let ratio = current_dist / start_dist;
        self.scale = (start_scale * ratio).clamp(PINCH_MIN_SCALE, PINCH_MAX_SCALE);
        self.scale
    }
}

/// Fixed geometry of the crop preview viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportGeometry {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Radius of the crop circle, centered in the viewport.
    pub circle_radius: f32,
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self::square(360)
    }
}

impl ViewportGeometry {
    /// Square viewport with the circle radius at the standard fraction of
    /// the width.
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
            circle_radius: size as f32 * CIRCLE_RADIUS_FRACTION,
        }
    }

    /// Viewport center point.
    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// Cover base scale: the minimum scale at which a `photo_w` x `photo_h`
/// bitmap fully covers the viewport rectangle.
///
/// The larger of the two axis ratios wins: a portrait photo in a square
/// viewport is sized by its height, a landscape photo by its width.
pub fn cover_base_scale(viewport: &ViewportGeometry, photo_w: u32, photo_h: u32) -> f32 {
    let rx = viewport.width as f32 / photo_w as f32;
    let ry = viewport.height as f32 / photo_h as f32;
    rx.max(ry)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
