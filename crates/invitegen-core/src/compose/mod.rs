//! Final invitation compositing.
//!
//! Layers, in order: the background asset full-bleed, the cropped photo
//! clipped into the face circle, and the personalized invitation sentence
//! fitted into the speech bubble. The whole pass is a pure function of its
//! inputs - no state is read or written besides the returned surface.

mod photo;
mod placement;
mod text;

use crate::decode::DecodedImage;
use crate::surface::Surface;
use crate::text::{fit_text, TextShaper};

pub use photo::composite_photo;
pub use placement::{invitation_line, OutputPlacement, TEXT_COLOR};
pub use text::{composite_text, ASCENT_FALLBACK_FACTOR};

/// Compose the final invitation graphic.
///
/// # Arguments
///
/// * `background` - The background asset, stretched full-bleed to the canvas
/// * `square` - The materialized square crop from the viewport
/// * `name` - The entered name (already validated non-empty by the caller)
/// * `placement` - Calibrated canvas positions for the circle and bubble
/// * `shaper` - Text measurement and drawing backend
///
/// # Returns
///
/// The finished canvas-sized surface, ready for PNG export.
pub fn compose(
    background: &DecodedImage,
    square: &Surface,
    name: &str,
    placement: &OutputPlacement,
    shaper: &dyn TextShaper,
) -> Surface {
    let mut surface = Surface::new(placement.canvas_width, placement.canvas_height);

    surface.draw_bitmap(
        background,
        0.0,
        0.0,
        placement.canvas_width as f32,
        placement.canvas_height as f32,
    );

    composite_photo(
        &mut surface,
        square,
        placement.face_center_x,
        placement.face_center_y,
        placement.face_radius,
        placement.photo_overscan,
    );

    let sentence = invitation_line(name);
    let inner = placement.inner_bubble();
    let fit = fit_text(shaper, &sentence, inner.width, inner.height);
    composite_text(
        &mut surface,
        shaper,
        &fit,
        &inner,
        TEXT_COLOR,
        placement.optical_bias,
    );

    surface
}
