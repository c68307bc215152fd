//! Photo decoding for Invitegen.
//!
//! This module turns the raw bytes of an uploaded photo into upright RGB
//! pixels:
//! - Format sniffing for the supported raster formats (JPEG, PNG)
//! - EXIF orientation extraction and correction (phone uploads)
//!
//! # Architecture
//!
//! Decoding is the only step of the pipeline that can reject user input.
//! A decode failure means the upload never completed: the session keeps no
//! photo, the crop UI stays hidden, and generation stays disabled. All
//! operations are synchronous and single-threaded within WASM.

mod photo;
mod types;

pub use photo::{decode_photo, get_orientation};
pub use types::{DecodeError, DecodedImage, Orientation};
