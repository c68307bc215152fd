//! Session WASM bindings.
//!
//! `JsSession` wraps the core session controller for the browser UI. The
//! page constructs one session, routes every input event into it, paints the
//! preview pixels it returns, and pulls PNG bytes out after generation.
//!
//! # Event wiring (TypeScript)
//!
//! ```typescript
//! const session = new JsSession(360);
//!
//! photoInput.onchange = async (file) => {
//!   session.load_photo(new Uint8Array(await file.arrayBuffer()));
//!   paint(session.render_preview());
//! };
//!
//! canvas.ontouchmove = (e) => {
//!   const scale = session.touch_move(flatten(e.touches));
//!   if (scale !== undefined) zoomSlider.value = String(scale);
//!   paint(session.render_preview());
//! };
//!
//! generateBtn.onclick = () => {
//!   session.generate(background, font);
//!   downloadBtn.disabled = false;
//! };
//! ```

use crate::types::{JsDecodedImage, JsFont};
use invitegen_core::crop::ViewportGeometry;
use invitegen_core::encode::encode_surface;
use invitegen_core::session::Session;
use invitegen_core::surface::Surface;
use wasm_bindgen::prelude::*;

/// Interactive session handle for the browser UI.
#[wasm_bindgen]
pub struct JsSession {
    inner: Session,
    preview: Surface,
}

/// Collect a flat `[x0, y0, x1, y1, ...]` array into touch points.
fn touch_points(flat: &[f32]) -> Vec<(f32, f32)> {
    flat.chunks_exact(2).map(|c| (c[0], c[1])).collect()
}

#[wasm_bindgen]
impl JsSession {
    /// Create a session with a square preview viewport of `viewport_size`
    /// pixels (the crop circle radius follows at the standard fraction).
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_size: u32) -> JsSession {
        let viewport = ViewportGeometry::square(viewport_size);
        JsSession {
            preview: Surface::new(viewport.width, viewport.height),
            inner: Session::new(viewport),
        }
    }

    /// Update the entered name (call on every input event).
    pub fn set_name(&mut self, name: &str) {
        self.inner.set_name(name);
    }

    /// Decode and adopt an uploaded photo; resets the crop transform.
    pub fn load_photo(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner
            .load_photo(bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Whether a photo is loaded (controls crop UI visibility).
    pub fn has_photo(&self) -> bool {
        self.inner.has_photo()
    }

    /// Whether the generate button should be enabled.
    pub fn can_generate(&self) -> bool {
        self.inner.can_generate()
    }

    /// Pan by mouse-drag deltas.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        self.inner.pan(delta_x, delta_y);
    }

    /// Set zoom from the slider value.
    pub fn set_zoom(&mut self, scale: f32) {
        self.inner.set_zoom(scale);
    }

    /// Current zoom multiplier (for slider synchronization).
    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f32 {
        self.inner.crop().scale
    }

    /// Touch-start with active touches as a flat `[x0, y0, x1, y1, ...]`.
    pub fn touch_start(&mut self, flat_points: &[f32]) {
        self.inner.touch_start(&touch_points(flat_points));
    }

    /// Touch-move with active touches as a flat array. Returns the updated
    /// scale when the move was a pinch, for mirroring into the slider.
    pub fn touch_move(&mut self, flat_points: &[f32]) -> Option<f32> {
        self.inner.touch_move(&touch_points(flat_points))
    }

    /// Touch-end (any finger lifted).
    pub fn touch_end(&mut self) {
        self.inner.touch_end();
    }

    /// Preview width in pixels (the ImageData width for painting).
    #[wasm_bindgen(getter)]
    pub fn preview_width(&self) -> u32 {
        self.preview.width()
    }

    /// Preview height in pixels.
    #[wasm_bindgen(getter)]
    pub fn preview_height(&self) -> u32 {
        self.preview.height()
    }

    /// Render the crop preview and return its RGBA pixels.
    ///
    /// Returns an empty array when no photo is loaded (nothing to paint).
    /// Call after every gesture event - renders are cheap relative to the
    /// input rate and are not debounced.
    pub fn render_preview(&mut self) -> Vec<u8> {
        if self.inner.render_preview(&mut self.preview) {
            self.preview.pixels().to_vec()
        } else {
            Vec::new()
        }
    }

    /// Current crop state as a `{ scale, offset_x, offset_y }` object.
    pub fn crop_state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.crop()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Generate the invitation from the current state.
    ///
    /// The caller must have awaited the background asset's fetch; the only
    /// suspension point lives in JS. Fails with a blocking notice message
    /// when the name or photo is missing.
    pub fn generate(&mut self, background: &JsDecodedImage, font: &JsFont) -> Result<(), JsValue> {
        let background = background.to_decoded();
        self.inner
            .generate(&background, font.shaper())
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Encode the last generated invitation as PNG bytes for download.
    ///
    /// Fails when nothing has been generated yet (the download button should
    /// be disabled until `generate` succeeds).
    pub fn output_png(&self) -> Result<Vec<u8>, JsValue> {
        let surface = self
            .inner
            .output()
            .ok_or_else(|| JsValue::from_str("Nothing generated yet"))?;
        encode_surface(surface).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
