//! Image encoding pipeline for Invitegen.
//!
//! This module provides functionality for:
//! - Encoding the finished RGBA composite to PNG (lossless export)
//!
//! # Architecture
//!
//! The encoding pipeline is designed to be used from the browser via WASM
//! bindings. All operations are synchronous and single-threaded within WASM.

mod png;

pub use png::{encode_png, encode_surface, EncodeError};
