//! Circular photo placement on the output canvas.

use crate::surface::{circle_coverage, Surface};

/// Draw the square crop into a circle on the output surface.
///
/// The drawing is clipped to a circle of `radius` centered at `(cx, cy)`.
/// The square is scaled so its sides equal `2 * radius * overscan` and
/// centered on the circle; the overscan (a few percent) keeps the photo edge
/// outside the clip so no background shows through at the rim from sub-pixel
/// gaps.
///
/// Transparent pixels of the square (a panned-away crop) stay transparent,
/// letting the background show through inside the circle.
pub fn composite_photo(
    surface: &mut Surface,
    square: &Surface,
    cx: f32,
    cy: f32,
    radius: f32,
    overscan: f32,
) {
    if square.width() == 0 || square.height() == 0 || radius <= 0.0 {
        return;
    }

    let zr = radius * overscan;
    let draw_size = zr * 2.0;
    let x0 = cx - zr;
    let y0 = cy - zr;

    let min_x = ((cx - radius - 1.0).floor().max(0.0)) as u32;
    let min_y = ((cy - radius - 1.0).floor().max(0.0)) as u32;
    let max_x = ((cx + radius + 1.0).ceil() as u32).min(surface.width());
    let max_y = ((cy + radius + 1.0).ceil() as u32).min(surface.height());

    for py in min_y..max_y {
        for px in min_x..max_x {
            let cov = circle_coverage(px, py, cx, cy, radius);
            if cov <= 0.0 {
                continue;
            }
            let src_x = (px as f32 + 0.5 - x0) / draw_size * square.width() as f32 - 0.5;
            let src_y = (py as f32 + 0.5 - y0) / draw_size * square.height() as f32 - 0.5;
            let c = square.sample_bilinear(src_x, src_y);
            let alpha = (c[3] as f32 * cov).round() as u8;
            if alpha == 0 {
                continue;
            }
            surface.blend_pixel(px, py, [c[0], c[1], c[2], alpha]);
        }
    }
}
