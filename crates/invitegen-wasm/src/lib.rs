//! Invitegen WASM - WebAssembly bindings for Invitegen
//!
//! This crate exposes the invitegen-core pipeline to the browser UI. The
//! JavaScript side keeps only the DOM glue: file inputs, pointer/touch event
//! capture, painting preview pixels into a canvas, and triggering the PNG
//! download.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrappers for decoded images and fonts
//! - `decode` - photo upload decoding bindings
//! - `session` - the interactive session handle (crop, preview, generate)
//! - `encode` - PNG encoding bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSession, JsFont, decode_photo } from '@invitegen/wasm';
//!
//! await init();
//!
//! const session = new JsSession(360);
//! const background = decode_photo(await fetchBytes('background.png'));
//! const font = new JsFont(await fetchBytes('georgia-bold.ttf'));
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod session;
mod types;

// Re-export public types
pub use decode::decode_photo;
pub use encode::encode_png;
pub use session::JsSession;
pub use types::{JsDecodedImage, JsFont};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
