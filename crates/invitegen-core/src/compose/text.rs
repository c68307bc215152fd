//! Text block placement inside the speech bubble.

use crate::surface::{Rect, Surface};
use crate::text::{TextFit, TextShaper};

/// Ascent estimate as a fraction of font size, used when the shaper reports
/// no metrics.
pub const ASCENT_FALLBACK_FACTOR: f32 = 0.8;

/// Draw a fitted text block centered in `inner`, clipped to it.
///
/// Each line is centered horizontally on the box midpoint. The block is
/// centered vertically with a small downward `optical_bias`, using true
/// baseline placement: the first baseline sits at
/// `top + (height - total_height) / 2 + bias + ascent`, and each following
/// baseline advances by the fit's line height. Lines that overflow the box
/// (the accepted at-floor overflow case) are clipped by the shaper.
pub fn composite_text(
    surface: &mut Surface,
    shaper: &dyn TextShaper,
    fit: &TextFit,
    inner: &Rect,
    color: [u8; 4],
    optical_bias: f32,
) {
    let size = fit.font_size as f32;
    let ascent = shaper
        .ascent(size)
        .unwrap_or(ASCENT_FALLBACK_FACTOR * size);

    let top = inner.y + (inner.height - fit.total_height) / 2.0 + optical_bias;
    let center_x = inner.center_x();

    let mut baseline = top + ascent;
    for line in &fit.lines {
        shaper.draw_line(surface, inner, line, size, color, center_x, baseline);
        baseline += fit.line_height;
    }
}
