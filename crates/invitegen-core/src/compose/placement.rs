//! Output canvas placement constants and the invitation template.
//!
//! Every value here is measured against the shipped 4:5 background asset at
//! 1080x1350. Swapping the background requires re-measuring the face circle
//! and the speech bubble box.

use serde::{Deserialize, Serialize};

use crate::surface::Rect;

/// Text color inside the speech bubble: deep royal blue.
pub const TEXT_COLOR: [u8; 4] = [0x1E, 0x3A, 0x8A, 0xFF];

/// Build the personalized invitation sentence.
pub fn invitation_line(name: &str) -> String {
    format!(
        "{} invites you to join Mahashivratri Celebrations in Durgapur",
        name.trim()
    )
}

/// Fixed placement of the photo circle and speech bubble on the output
/// canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputPlacement {
    /// Output canvas width in pixels.
    pub canvas_width: u32,
    /// Output canvas height in pixels.
    pub canvas_height: u32,
    /// Face circle center X.
    pub face_center_x: f32,
    /// Face circle center Y.
    pub face_center_y: f32,
    /// Face circle radius (sized to sit inside the printed rim).
    pub face_radius: f32,
    /// Speech bubble bounding box (the white area).
    pub bubble: Rect,
    /// Padding between the bubble box and the text region.
    pub bubble_padding: f32,
    /// Photo scale-up inside the clip circle, hiding sub-pixel gaps at the
    /// rim. Does not change crop framing: the square already covers the
    /// viewport.
    pub photo_overscan: f32,
    /// Small downward bias applied to the text block's vertical centering.
    pub optical_bias: f32,
}

impl Default for OutputPlacement {
    fn default() -> Self {
        Self {
            canvas_width: 1080,
            canvas_height: 1350,
            face_center_x: 202.0,
            face_center_y: 1097.0,
            face_radius: 172.0,
            bubble: Rect::new(108.0, 580.0, 394.0, 211.0),
            bubble_padding: 18.0,
            photo_overscan: 1.05,
            optical_bias: 2.0,
        }
    }
}

impl OutputPlacement {
    /// The padded text region inside the bubble.
    pub fn inner_bubble(&self) -> Rect {
        self.bubble.inset(self.bubble_padding)
    }
}
