//! WASM-compatible wrapper types for image and font data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Invitegen types, handling the conversion between Rust and JavaScript data
//! representations.

use invitegen_core::decode::DecodedImage;
use invitegen_core::text::FontShaper;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// Wraps the core `DecodedImage` type (the uploaded photo or the background
/// asset) and provides a JavaScript-friendly interface for accessing image
/// dimensions and pixel data.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`. The `free()` method can be
/// called to explicitly release WASM memory, but this is optional as
/// wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create a new JsDecodedImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsDecodedImage {
    /// Create a JsDecodedImage from a core DecodedImage.
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core DecodedImage.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// A loaded font for text compositing.
///
/// The UI fetches the font file once (alongside the background asset) and
/// keeps this handle for every generate call.
#[wasm_bindgen]
pub struct JsFont {
    shaper: FontShaper,
}

#[wasm_bindgen]
impl JsFont {
    /// Parse a font from its raw file bytes (TTF/OTF).
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: Vec<u8>) -> Result<JsFont, JsValue> {
        let shaper =
            FontShaper::from_bytes(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsFont { shaper })
    }
}

impl JsFont {
    /// Borrow the underlying shaper for core calls.
    pub(crate) fn shaper(&self) -> &FontShaper {
        &self.shaper
    }
}
