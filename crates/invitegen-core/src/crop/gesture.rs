//! Touch gesture state machine for the crop viewport.
//!
//! Consumes normalized touch points from the binding layer and turns them
//! into [`CropState`] mutations. Mouse dragging does not come through here:
//! the binding layer computes mouse deltas itself and calls
//! [`CropState::pan`] directly, matching the split between the single-pointer
//! and multi-touch input paths.

use serde::{Deserialize, Serialize};

use super::CropState;

/// Active gesture, if any.
///
/// Transitions:
/// - one touch down: `Dragging`, anchored at the touch position
/// - two touches down: `Pinching`, anchored at the current distance and the
///   crop scale at that moment (so a pinch is relative, not absolute)
/// - all touches lifted: `Idle`
///
/// Putting a second finger down mid-drag replaces `Dragging` with a fresh
/// `Pinching` baseline taken from the current scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum GestureMode {
    /// No active gesture.
    #[default]
    Idle,
    /// Single-touch pan in progress.
    Dragging {
        /// Last touch position, for delta computation.
        last_x: f32,
        last_y: f32,
    },
    /// Two-finger pinch in progress.
    Pinching {
        /// Finger distance when the pinch started.
        start_dist: f32,
        /// Crop scale when the pinch started.
        start_scale: f32,
    },
}

/// Gesture tracker owning the current [`GestureMode`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureTracker {
    mode: GestureMode,
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

impl GestureTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture mode.
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Handle a touch-start event with the full list of active touch points.
    ///
    /// `current_scale` is the crop scale at this instant; it becomes the
    /// pinch baseline when two fingers are down.
    pub fn touch_start(&mut self, points: &[(f32, f32)], current_scale: f32) {
        self.mode = match points {
            [p] => GestureMode::Dragging {
                last_x: p.0,
                last_y: p.1,
            },
            [p0, p1, ..] => GestureMode::Pinching {
                start_dist: distance(*p0, *p1),
                start_scale: current_scale,
            },
            [] => GestureMode::Idle,
        };
    }

    /// Handle a touch-move event, mutating `crop` accordingly.
    ///
    /// Returns the updated scale when the move was a pinch (for mirroring
    /// into the zoom slider), `None` for drags and ignored events. Events
    /// that do not match the active mode are dropped without effect.
    pub fn touch_move(&mut self, points: &[(f32, f32)], crop: &mut CropState) -> Option<f32> {
        match (self.mode(), points) {
            (GestureMode::Dragging { last_x, last_y }, [p]) => {
                crop.pan(p.0 - last_x, p.1 - last_y);
                self.mode = GestureMode::Dragging {
                    last_x: p.0,
                    last_y: p.1,
                };
                None
            }
            (
                GestureMode::Pinching {
                    start_dist,
                    start_scale,
                },
                [p0, p1, ..],
            ) => {
                let dist = distance(*p0, *p1);
                Some(crop.pinch_update(dist, start_dist, start_scale))
            }
            _ => None,
        }
    }

    /// Handle a touch-end event: any finger lift ends the gesture.
    pub fn touch_end(&mut self) {
        self.mode = GestureMode::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::PINCH_MAX_SCALE;

    #[test]
    fn test_starts_idle() {
        let tracker = GestureTracker::new();
        assert_eq!(tracker.mode(), GestureMode::Idle);
    }

    #[test]
    fn test_single_touch_drags() {
        let mut tracker = GestureTracker::new();
        let mut crop = CropState::default();

        tracker.touch_start(&[(100.0, 100.0)], crop.scale);
        tracker.touch_move(&[(110.0, 95.0)], &mut crop);

        assert_eq!(crop.offset_x, 10.0);
        assert_eq!(crop.offset_y, -5.0);

        // Deltas chain from the updated anchor
        tracker.touch_move(&[(115.0, 95.0)], &mut crop);
        assert_eq!(crop.offset_x, 15.0);
    }

    #[test]
    fn test_two_touches_pinch() {
        let mut tracker = GestureTracker::new();
        let mut crop = CropState::default();

        tracker.touch_start(&[(0.0, 0.0), (100.0, 0.0)], crop.scale);
        let scale = tracker.touch_move(&[(0.0, 0.0), (200.0, 0.0)], &mut crop);

        assert_eq!(scale, Some(3.2));
        assert!((crop.scale - 3.2).abs() < 1e-6);
    }

    #[test]
    fn test_pinch_baseline_is_relative() {
        let mut tracker = GestureTracker::new();
        let mut crop = CropState::default();
        crop.set_zoom(2.0);

        tracker.touch_start(&[(0.0, 0.0), (100.0, 0.0)], crop.scale);
        // Moving fingers back to the same distance keeps the scale unchanged
        tracker.touch_move(&[(0.0, 0.0), (100.0, 0.0)], &mut crop);
        assert!((crop.scale - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_second_finger_mid_drag_reanchors() {
        let mut tracker = GestureTracker::new();
        let mut crop = CropState::default();

        // Drag, zooming via slider mid-gesture
        tracker.touch_start(&[(50.0, 50.0)], crop.scale);
        tracker.touch_move(&[(60.0, 50.0)], &mut crop);
        crop.set_zoom(2.5);

        // Second finger lands: pinch baseline must be the *current* scale,
        // not the load-time default
        tracker.touch_start(&[(0.0, 0.0), (100.0, 0.0)], crop.scale);
        tracker.touch_move(&[(0.0, 0.0), (120.0, 0.0)], &mut crop);
        assert!((crop.scale - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_touch_end_goes_idle() {
        let mut tracker = GestureTracker::new();
        let mut crop = CropState::default();

        tracker.touch_start(&[(0.0, 0.0)], crop.scale);
        tracker.touch_end();
        assert_eq!(tracker.mode(), GestureMode::Idle);

        // Moves after the gesture ended are ignored
        tracker.touch_move(&[(500.0, 500.0)], &mut crop);
        assert_eq!(crop.offset_x, 0.0);
    }

    #[test]
    fn test_mismatched_events_ignored() {
        let mut tracker = GestureTracker::new();
        let mut crop = CropState::default();

        // Two-finger move while dragging is dropped
        tracker.touch_start(&[(0.0, 0.0)], crop.scale);
        let result = tracker.touch_move(&[(0.0, 0.0), (100.0, 0.0)], &mut crop);
        assert_eq!(result, None);
        assert_eq!(crop, CropState::default());
    }

    #[test]
    fn test_pinch_clamp_applies_through_gesture() {
        let mut tracker = GestureTracker::new();
        let mut crop = CropState::default();

        tracker.touch_start(&[(0.0, 0.0), (10.0, 0.0)], crop.scale);
        let scale = tracker.touch_move(&[(0.0, 0.0), (10_000.0, 0.0)], &mut crop);
        assert_eq!(scale, Some(PINCH_MAX_SCALE));
    }

    #[test]
    fn test_empty_touch_start_is_idle() {
        let mut tracker = GestureTracker::new();
        tracker.touch_start(&[], 1.0);
        assert_eq!(tracker.mode(), GestureMode::Idle);
    }
}
