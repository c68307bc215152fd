//! Invitegen Core - Invitation compositing library
//!
//! This crate provides the core pipeline for the Invitegen invitation
//! generator: photo decoding, the interactive circular crop (cover-fit
//! pan/zoom under drag and pinch gestures), shrink-to-fit text layout, final
//! compositing onto the background asset, and PNG export.
//!
//! # Pipeline
//!
//! 1. `decode` - uploaded bytes to upright RGB pixels
//! 2. `crop` - viewport transform state, gestures, preview, square crop
//! 3. `text` - greedy wrap + two-phase shrink-to-fit layout
//! 4. `compose` - background + circular photo + fitted text
//! 5. `encode` - lossless PNG export
//!
//! The [`session::Session`] controller owns the interaction state and ties
//! the stages together; the WASM binding crate wraps it for the browser UI.

pub mod compose;
pub mod crop;
pub mod decode;
pub mod encode;
pub mod session;
pub mod surface;
pub mod text;

pub use compose::{compose, invitation_line, OutputPlacement};
pub use crop::{CropState, GestureMode, GestureTracker, ViewportGeometry};
pub use decode::{decode_photo, DecodeError, DecodedImage};
pub use encode::{encode_png, encode_surface, EncodeError};
pub use session::{GenerateError, Session};
pub use surface::{Rect, Surface};
pub use text::{fit_text, wrap_lines, FontShaper, TextFit, TextShaper};
