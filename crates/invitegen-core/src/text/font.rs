//! Rusttype-backed text shaper.
//!
//! Wraps a loaded TrueType/OpenType font and implements [`TextShaper`] with
//! real glyph metrics: advance-based line widths, font ascent, and
//! alpha-blended glyph rasterization clipped to the caller's rect. Font
//! bytes are supplied by the embedding layer (the browser fetches the font
//! alongside the background asset).

use rusttype::{point, Font, Scale};
use thiserror::Error;

use crate::surface::{Rect, Surface};

use super::TextShaper;

/// Errors raised when loading font data.
#[derive(Debug, Error)]
pub enum FontError {
    /// The bytes are not a parseable font.
    #[error("Failed to parse font data")]
    InvalidFont,
}

/// A [`TextShaper`] backed by a loaded font.
pub struct FontShaper {
    font: Font<'static>,
}

impl FontShaper {
    /// Parse a font from its raw file bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, FontError> {
        let font = Font::try_from_vec(bytes).ok_or(FontError::InvalidFont)?;
        Ok(Self { font })
    }

    fn scale(size: f32) -> Scale {
        Scale::uniform(size)
    }
}

impl TextShaper for FontShaper {
    fn line_width(&self, text: &str, size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let scale = Self::scale(size);
        let v_metrics = self.font.v_metrics(scale);
        // Caret position after the last glyph plus its advance
        self.font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }

    fn ascent(&self, size: f32) -> Option<f32> {
        Some(self.font.v_metrics(Self::scale(size)).ascent)
    }

    fn draw_line(
        &self,
        surface: &mut Surface,
        clip: &Rect,
        text: &str,
        size: f32,
        color: [u8; 4],
        center_x: f32,
        baseline_y: f32,
    ) {
        let width = self.line_width(text, size);
        let start_x = center_x - width / 2.0;
        let scale = Self::scale(size);

        for glyph in self.font.layout(text, scale, point(start_x, baseline_y)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    let px = gx as i32 + bb.min.x;
                    let py = gy as i32 + bb.min.y;
                    if px < 0 || py < 0 {
                        return;
                    }
                    if !clip.contains(px as f32 + 0.5, py as f32 + 0.5) {
                        return;
                    }
                    let alpha = (coverage * color[3] as f32).round() as u8;
                    if alpha == 0 {
                        return;
                    }
                    surface.blend_pixel(
                        px as u32,
                        py as u32,
                        [color[0], color[1], color[2], alpha],
                    );
                });
            }
        }
    }
}
