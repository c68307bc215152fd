//! Interactive session controller.
//!
//! [`Session`] is the single owner of all interaction state: the uploaded
//! photo, the crop transform, the gesture machine, the entered name, and the
//! last generated output. The binding layer constructs one per page and
//! routes every UI event through it, so there is no hidden shared state and
//! no concurrent mutator by construction.
//!
//! State lifecycle: a new upload replaces the photo wholesale and resets the
//! crop transform; any change to the name or photo invalidates the previous
//! output (the download path re-enables only after the next successful
//! generation).

use thiserror::Error;

use crate::compose::{compose, OutputPlacement};
use crate::crop::{
    materialize_crop, render_preview, CropState, GestureMode, GestureTracker, ViewportGeometry,
};
use crate::decode::{decode_photo, DecodeError, DecodedImage};
use crate::surface::Surface;
use crate::text::TextShaper;

/// Blocking conditions reported when generation is triggered too early.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The trimmed name is empty.
    #[error("No name entered")]
    MissingName,

    /// No photo has been uploaded (or the last upload failed to decode).
    #[error("No photo uploaded")]
    MissingPhoto,
}

/// Controller object owning the per-session interaction state.
#[derive(Debug, Default)]
pub struct Session {
    viewport: ViewportGeometry,
    name: String,
    photo: Option<DecodedImage>,
    crop: CropState,
    gesture: GestureTracker,
    output: Option<Surface>,
}

impl Session {
    /// Create a session for the given preview viewport.
    pub fn new(viewport: ViewportGeometry) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Preview viewport geometry.
    pub fn viewport(&self) -> &ViewportGeometry {
        &self.viewport
    }

    /// Update the entered name. Invalidates any previous output.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        self.output = None;
    }

    /// The entered name, as typed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decode an uploaded photo and reset the crop transform.
    ///
    /// On decode failure the session is left without a photo - the upload
    /// never completed, so the crop UI stays hidden and generation stays
    /// disabled.
    pub fn load_photo(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        self.photo = None;
        self.output = None;
        let photo = decode_photo(bytes)?;
        self.photo = Some(photo);
        self.crop.reset();
        Ok(())
    }

    /// Whether a photo is loaded.
    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    /// Current crop transform.
    pub fn crop(&self) -> &CropState {
        &self.crop
    }

    /// Current gesture mode.
    pub fn gesture_mode(&self) -> GestureMode {
        self.gesture.mode()
    }

    /// Pan by mouse-drag deltas (the binding layer computes the deltas).
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        self.crop.pan(delta_x, delta_y);
    }

    /// Set zoom from the slider (unclamped by the core).
    pub fn set_zoom(&mut self, scale: f32) {
        self.crop.set_zoom(scale);
    }

    /// Update zoom from an externally tracked pinch. Returns the new scale.
    pub fn pinch_update(&mut self, current_dist: f32, start_dist: f32, start_scale: f32) -> f32 {
        self.crop.pinch_update(current_dist, start_dist, start_scale)
    }

    /// Route a touch-start event into the gesture machine.
    pub fn touch_start(&mut self, points: &[(f32, f32)]) {
        if self.photo.is_none() {
            return;
        }
        self.gesture.touch_start(points, self.crop.scale);
    }

    /// Route a touch-move event. Returns the new scale when it was a pinch,
    /// for mirroring into the zoom slider.
    pub fn touch_move(&mut self, points: &[(f32, f32)]) -> Option<f32> {
        if self.photo.is_none() {
            return None;
        }
        self.gesture.touch_move(points, &mut self.crop)
    }

    /// Route a touch-end event.
    pub fn touch_end(&mut self) {
        self.gesture.touch_end();
    }

    /// Render the crop preview into `surface`. Returns false (and leaves the
    /// surface untouched) when no photo is loaded.
    pub fn render_preview(&self, surface: &mut Surface) -> bool {
        match &self.photo {
            Some(photo) => {
                render_preview(photo, &self.crop, &self.viewport, surface);
                true
            }
            None => false,
        }
    }

    /// Materialize the current crop as a square surface.
    pub fn materialize_crop(&self) -> Option<Surface> {
        self.photo
            .as_ref()
            .map(|photo| materialize_crop(photo, &self.crop, &self.viewport))
    }

    /// Whether the generate action is currently allowed: a non-empty trimmed
    /// name and a loaded photo.
    pub fn can_generate(&self) -> bool {
        !self.name.trim().is_empty() && self.photo.is_some()
    }

    /// Generate the invitation with the default output placement.
    pub fn generate(
        &mut self,
        background: &DecodedImage,
        shaper: &dyn TextShaper,
    ) -> Result<&Surface, GenerateError> {
        self.generate_with(background, shaper, &OutputPlacement::default())
    }

    /// Generate the invitation with an explicit placement.
    ///
    /// The preconditions are re-checked here (not only at the UI's
    /// button-enablement layer): a missing name or photo is a blocking
    /// notice and produces no partial output.
    pub fn generate_with(
        &mut self,
        background: &DecodedImage,
        shaper: &dyn TextShaper,
        placement: &OutputPlacement,
    ) -> Result<&Surface, GenerateError> {
        if self.name.trim().is_empty() {
            return Err(GenerateError::MissingName);
        }
        let photo = self.photo.as_ref().ok_or(GenerateError::MissingPhoto)?;

        let square = materialize_crop(photo, &self.crop, &self.viewport);
        let out = compose(background, &square, &self.name, placement, shaper);
        Ok(self.output.insert(out))
    }

    /// The last generated output, if any. Gates the download action.
    pub fn output(&self) -> Option<&Surface> {
        self.output.as_ref()
    }
}
