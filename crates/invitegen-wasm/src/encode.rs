//! Image encoding WASM bindings.
//!
//! Exposes PNG encoding for callers that manage pixels on the JS side; the
//! usual export path goes through `JsSession::output_png` instead.

use invitegen_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data as a `Uint8Array` (4 bytes per pixel,
///   row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
///
/// A `Uint8Array` containing the PNG-encoded bytes, or an error if encoding
/// fails.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 4
/// - Width or height is zero
/// - Encoding fails internally
///
/// # Example (TypeScript)
///
/// ```typescript
/// const png = encode_png(imageData.data, canvas.width, canvas.height);
/// const blob = new Blob([png], { type: 'image/png' });
/// ```
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}
