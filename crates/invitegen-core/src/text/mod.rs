//! Adaptive text layout: greedy word wrap plus two-phase shrink-to-fit.
//!
//! The invitation sentence varies with the entered name, but the speech
//! bubble on the background is small and fixed. [`fit_text`] finds the
//! largest font size (starting at [`MAX_FONT_SIZE`]) whose wrapped form
//! satisfies, in order:
//!
//! 1. the line-count cap ([`MAX_LINES`]), shrinking down to [`LINE_FLOOR`]
//! 2. the box-height cap, shrinking further down to [`HEIGHT_FLOOR`]
//!
//! The two phases must run in this order: capping line count first prevents
//! oscillation between wrap shapes, and the loop terminates in
//! O(font-size range / step) iterations with each re-wrap O(words). Once
//! both floors are hit the result is returned as-is; overflow past the box
//! is accepted and left to the caller's clip rect.
//!
//! Measurement is injected through [`TextShaper`] so layout is deterministic
//! and testable without font data; production uses the rusttype-backed
//! [`FontShaper`].

mod font;

use serde::{Deserialize, Serialize};

use crate::surface::{Rect, Surface};

pub use font::{FontError, FontShaper};

/// Starting (largest) font size for the fit search.
pub const MAX_FONT_SIZE: u32 = 44;

/// Maximum number of wrapped lines before shrinking.
pub const MAX_LINES: usize = 5;

/// Font size floor for the line-count phase.
pub const LINE_FLOOR: u32 = 30;

/// Font size floor for the height phase.
pub const HEIGHT_FLOOR: u32 = 28;

/// Font size decrement per shrink step.
const SHRINK_STEP: u32 = 2;

/// Line height as a multiple of font size.
const LINE_HEIGHT_FACTOR: f32 = 1.22;

/// Text measurement and glyph drawing, injected into layout and compositing.
///
/// The fit algorithm only calls [`TextShaper::line_width`]; drawing and
/// baseline placement also use [`TextShaper::ascent`] and
/// [`TextShaper::draw_line`].
pub trait TextShaper {
    /// Measured width of `text` rendered on one line at `size`.
    fn line_width(&self, text: &str, size: f32) -> f32;

    /// Font ascent at `size`, or `None` when the shaper has no metrics
    /// (the caller falls back to `0.8 * size`).
    fn ascent(&self, size: f32) -> Option<f32>;

    /// Draw one line of text with its horizontal center at `center_x` and
    /// its baseline at `baseline_y`, clipped to `clip`.
    fn draw_line(
        &self,
        surface: &mut Surface,
        clip: &Rect,
        text: &str,
        size: f32,
        color: [u8; 4],
        center_x: f32,
        baseline_y: f32,
    );
}

/// Result of the fit search: final size plus the wrapped lines and the
/// vertical metrics derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFit {
    /// Chosen font size.
    pub font_size: u32,
    /// Wrapped lines, in order.
    pub lines: Vec<String>,
    /// Baseline-to-baseline advance.
    pub line_height: f32,
    /// `lines.len() * line_height`.
    pub total_height: f32,
}

/// Line height for a font size: `round(size * 1.22)`.
fn line_height_for(size: u32) -> f32 {
    (size as f32 * LINE_HEIGHT_FACTOR).round()
}

/// Greedy word wrap against a maximum line width.
///
/// Words are whitespace-separated. Each line packs as many words as fit the
/// measured width; a single word wider than the limit is placed alone on its
/// own line and never split.
pub fn wrap_lines(shaper: &dyn TextShaper, text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if shaper.line_width(&candidate, size) <= max_width {
            line = candidate;
        } else {
            if !line.is_empty() {
                lines.push(line);
            }
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Fit `text` into a `box_w` x `box_h` region by iterative shrinking.
///
/// Deterministic: the same text, box, and shaper always produce the same
/// result. May return an overflowing layout once both size floors are hit;
/// the caller's clip rect is the defense of last resort.
pub fn fit_text(shaper: &dyn TextShaper, text: &str, box_w: f32, box_h: f32) -> TextFit {
    let mut size = MAX_FONT_SIZE;
    let mut lines = wrap_lines(shaper, text, size as f32, box_w);

    // Phase 1: line-count cap
    while lines.len() > MAX_LINES && size > LINE_FLOOR {
        size -= SHRINK_STEP;
        lines = wrap_lines(shaper, text, size as f32, box_w);
    }

    // Phase 2: height cap
    let mut line_height = line_height_for(size);
    let mut total_height = lines.len() as f32 * line_height;
    while total_height > box_h && size > HEIGHT_FLOOR {
        size -= SHRINK_STEP;
        lines = wrap_lines(shaper, text, size as f32, box_w);
        line_height = line_height_for(size);
        total_height = lines.len() as f32 * line_height;
    }

    TextFit {
        font_size: size,
        lines,
        line_height,
        total_height,
    }
}



// ============================================================================
// Property-Based Tests
// ============================================================================
