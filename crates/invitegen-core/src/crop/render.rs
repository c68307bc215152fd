//! Cover-fit placement, preview rendering, and crop materialization.
//!
//! Both the live preview and the final square crop are produced by the same
//! placement function, so the exported pixels always match what the user saw
//! while cropping. The preview additionally composites a dark overlay with a
//! circular cutout plus the circle outline; the materialized crop is the bare
//! photo layer.

use crate::decode::DecodedImage;
use crate::surface::Surface;

use super::{cover_base_scale, CropState, ViewportGeometry};

/// Overlay color outside the crop circle: 45% black.
pub const OVERLAY_COLOR: [u8; 4] = [0, 0, 0, 115];

/// Circle outline color: white at 92% opacity.
pub const OUTLINE_COLOR: [u8; 4] = [255, 255, 255, 235];

/// Circle outline stroke width in pixels.
pub const OUTLINE_WIDTH: f32 = 4.0;

/// Draw the photo into the surface with the cover-fit transform.
///
/// The photo is scaled by `cover_base_scale * state.scale` and centered in
/// the viewport, then displaced by the pan offsets. This is the single
/// placement computation shared by the preview and the materialized crop.
fn draw_cover_fit(
    photo: &DecodedImage,
    state: &CropState,
    viewport: &ViewportGeometry,
    surface: &mut Surface,
) {
    let base = cover_base_scale(viewport, photo.width, photo.height);
    let scale = base * state.scale;

    let draw_w = photo.width as f32 * scale;
    let draw_h = photo.height as f32 * scale;

    let x = (viewport.width as f32 - draw_w) / 2.0 + state.offset_x;
    let y = (viewport.height as f32 - draw_h) / 2.0 + state.offset_y;

    surface.draw_bitmap(photo, x, y, draw_w, draw_h);
}

/// Render the interactive crop preview.
///
/// Draws the photo with the current transform, then composites a
/// semi-transparent dark overlay with a fully transparent circular cutout
/// (opaque fill followed by a destination-out erase, so the cutout geometry
/// is exactly the drawn circle), then strokes the circle outline.
pub fn render_preview(
    photo: &DecodedImage,
    state: &CropState,
    viewport: &ViewportGeometry,
    surface: &mut Surface,
) {
    debug_assert_eq!(surface.width(), viewport.width);
    debug_assert_eq!(surface.height(), viewport.height);

    surface.clear();
    draw_cover_fit(photo, state, viewport, surface);

    let (cx, cy) = viewport.center();
    let r = viewport.circle_radius;

    let mut overlay = Surface::new(viewport.width, viewport.height);
    overlay.fill(OVERLAY_COLOR);
    overlay.erase_circle(cx, cy, r);
    surface.blend_surface(&overlay);

    surface.stroke_circle(cx, cy, r, OUTLINE_WIDTH, OUTLINE_COLOR);
}

/// Materialize the final square crop.
///
/// Re-executes the preview's placement math against a fresh viewport-sized
/// surface, without the overlay or outline. Geometry is pixel-identical to
/// the preview's photo layer.
pub fn materialize_crop(
    photo: &DecodedImage,
    state: &CropState,
    viewport: &ViewportGeometry,
) -> Surface {
    let mut square = Surface::new(viewport.width, viewport.height);
    draw_cover_fit(photo, state, viewport, &mut square);
    square
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::CropState;

    /// Uniform mid-gray photo.
    fn gray_photo(width: u32, height: u32) -> DecodedImage {
        DecodedImage::new(width, height, vec![128u8; (width * height * 3) as usize])
    }

    fn fully_covered(surface: &Surface) -> bool {
        for y in 0..surface.height() {
            for x in 0..surface.width() {
                if surface.pixel(x, y)[3] != 255 {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_materialize_covers_viewport_at_defaults() {
        let vp = ViewportGeometry::square(64);
        let photo = gray_photo(100, 80);
        let state = CropState::default();

        let square = materialize_crop(&photo, &state, &vp);
        assert_eq!(square.width(), 64);
        assert_eq!(square.height(), 64);
        assert!(fully_covered(&square));
    }

    #[test]
    fn test_materialize_narrow_portrait_photo_covers() {
        // Photo much narrower than the viewport: the larger axis ratio wins
        // the base scale, and the full viewport is still covered at scale 1
        let vp = ViewportGeometry::square(64);
        let photo = gray_photo(32, 256);
        let state = CropState {
            scale: 1.0,
            ..CropState::default()
        };

        let square = materialize_crop(&photo, &state, &vp);
        assert!(fully_covered(&square));
    }

    #[test]
    fn test_materialize_landscape_photo_covers() {
        let vp = ViewportGeometry::square(64);
        let photo = gray_photo(256, 32);
        let state = CropState {
            scale: 1.0,
            ..CropState::default()
        };

        let square = materialize_crop(&photo, &state, &vp);
        assert!(fully_covered(&square));
    }

    #[test]
    fn test_pan_exposes_transparent_edge() {
        // Panning is unclamped: a large offset slides the photo off the
        // viewport and leaves the vacated edge transparent
        let vp = ViewportGeometry::square(64);
        let photo = gray_photo(64, 64);
        let mut state = CropState {
            scale: 1.0,
            ..CropState::default()
        };
        state.pan(200.0, 0.0);

        let square = materialize_crop(&photo, &state, &vp);
        assert_eq!(square.pixel(0, 32)[3], 0);
    }

    #[test]
    fn test_preview_photo_layer_matches_materialized_crop() {
        // Inside the cutout circle the preview shows the bare photo layer,
        // which must be pixel-identical to the exported crop
        let vp = ViewportGeometry::square(64);
        let mut photo = gray_photo(100, 90);
        // Add some structure so a geometry mismatch would show
        for i in (0..photo.pixels.len()).step_by(7) {
            photo.pixels[i] = (i % 251) as u8;
        }
        let mut state = CropState::default();
        state.pan(-8.0, 5.0);
        state.set_zoom(2.1);

        let mut preview = Surface::new(64, 64);
        render_preview(&photo, &state, &vp, &mut preview);
        let square = materialize_crop(&photo, &state, &vp);

        let (cx, cy) = vp.center();
        // Compare well inside the circle, clear of the overlay's edge band
        for y in 20..44u32 {
            for x in 20..44u32 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if (dx * dx + dy * dy).sqrt() < vp.circle_radius - 2.0 {
                    assert_eq!(preview.pixel(x, y), square.pixel(x, y), "at ({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn test_preview_overlay_darkens_outside_circle() {
        let vp = ViewportGeometry::square(64);
        let photo = gray_photo(64, 64);
        let state = CropState {
            scale: 1.0,
            ..CropState::default()
        };

        let mut preview = Surface::new(64, 64);
        render_preview(&photo, &state, &vp, &mut preview);

        // Corner is outside the circle: photo darkened by the 45% overlay
        let corner = preview.pixel(0, 0);
        assert!(corner[0] < 128, "corner should be darkened, got {:?}", corner);

        // Center is inside the cutout: photo untouched
        let center = preview.pixel(32, 32);
        assert_eq!(center, [128, 128, 128, 255]);
    }

    #[test]
    fn test_preview_strokes_outline() {
        let vp = ViewportGeometry::square(100);
        let photo = gray_photo(100, 100);
        let state = CropState {
            scale: 1.0,
            ..CropState::default()
        };

        let mut preview = Surface::new(100, 100);
        render_preview(&photo, &state, &vp, &mut preview);

        // Rightmost point of the circle: near-white outline over the photo
        let r = vp.circle_radius;
        let px = (50.0 + r) as u32;
        let p = preview.pixel(px, 50);
        assert!(p[0] > 200, "expected outline pixel, got {:?}", p);
    }

    #[test]
    fn test_rerender_is_idempotent() {
        // Every gesture event triggers a full re-render into the same
        // surface; repeating a render must not accumulate overlay passes
        let vp = ViewportGeometry::square(48);
        let photo = gray_photo(60, 60);
        let state = CropState::default();

        let mut first = Surface::new(48, 48);
        render_preview(&photo, &state, &vp, &mut first);
        let mut second = first.clone();
        render_preview(&photo, &state, &vp, &mut second);

        assert_eq!(first, second);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::crop::CropState;
    use proptest::prelude::*;

    fn gray_photo(width: u32, height: u32) -> DecodedImage {
        DecodedImage::new(width, height, vec![200u8; (width * height * 3) as usize])
    }

    proptest! {
        /// Property: with centered offsets and any scale >= 1, the
        /// materialized crop fully covers the viewport (no transparent gap).
        #[test]
        fn prop_cover_fit_leaves_no_gaps(
            (photo_w, photo_h) in (8u32..=200, 8u32..=200),
            scale in 1.0f32..=4.0,
        ) {
            let vp = ViewportGeometry::square(32);
            let photo = gray_photo(photo_w, photo_h);
            let state = CropState { scale, offset_x: 0.0, offset_y: 0.0 };

            let square = materialize_crop(&photo, &state, &vp);
            for y in 0..square.height() {
                for x in 0..square.width() {
                    prop_assert_eq!(square.pixel(x, y)[3], 255, "gap at ({}, {})", x, y);
                }
            }
        }

        /// Property: materialization is deterministic.
        #[test]
        fn prop_materialize_deterministic(
            (photo_w, photo_h) in (8u32..=100, 8u32..=100),
            scale in 1.0f32..=4.0,
            (ox, oy) in (-50.0f32..=50.0, -50.0f32..=50.0),
        ) {
            let vp = ViewportGeometry::square(24);
            let photo = gray_photo(photo_w, photo_h);
            let state = CropState { scale, offset_x: ox, offset_y: oy };

            let a = materialize_crop(&photo, &state, &vp);
            let b = materialize_crop(&photo, &state, &vp);
            prop_assert_eq!(a.pixels(), b.pixels());
        }
    }
}
