//! Photo decoding WASM bindings.
//!
//! Exposes the core decoding entry point so the upload handler can turn the
//! selected file's bytes into an image usable by the session, with EXIF
//! orientation already applied.

use crate::types::JsDecodedImage;
use invitegen_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an uploaded photo (JPEG or PNG) with orientation correction.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsDecodedImage` with upright RGB pixels, or an error string when the
/// bytes cannot be decoded. On error the upload is considered not completed:
/// keep the crop UI hidden and generation disabled.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const photo = decode_photo(bytes);
/// session.adopt_photo(photo);
/// ```
#[wasm_bindgen]
pub fn decode_photo(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_photo(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
