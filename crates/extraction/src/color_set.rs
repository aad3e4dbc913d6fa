//! Lightness/saturation bucketing of sampled colors.
//!
//! The classification is a best-effort heuristic over HSL, not a
//! guarantee: a dark accent can land in `text`, a pale accent in
//! `background`. The thresholds are behavior-compatibility constants —
//! changing them changes every downstream role assignment.

use serde::{Deserialize, Serialize};

use color_science::RawColor;

// Classification thresholds (percent units, see `categorize`).
const TEXT_MAX_LIGHTNESS: f64 = 30.0;
const TEXT_SATURATED_MAX_LIGHTNESS: f64 = 50.0;
const TEXT_MIN_SATURATION: f64 = 70.0;
const BACKGROUND_MIN_LIGHTNESS: f64 = 85.0;
const BACKGROUND_MAX_SATURATION: f64 = 10.0;

/// The bucket a sampled color falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    /// Dark or dark-and-saturated: likely body text or strokes.
    Text,
    /// Very light or washed out: likely page background.
    Background,
    /// Everything else: chromatic mid-tones used for emphasis.
    Accent,
}

/// Classify one color. First matching rule wins:
///
/// - `lightness < 30`, or `lightness < 50` with `saturation > 70` → text
/// - `lightness > 85` or `saturation < 10` → background
/// - otherwise → accent
pub fn categorize(color: &RawColor) -> ColorCategory {
    let hsl = color.hsl();
    if hsl.l < TEXT_MAX_LIGHTNESS
        || (hsl.l < TEXT_SATURATED_MAX_LIGHTNESS && hsl.s > TEXT_MIN_SATURATION)
    {
        ColorCategory::Text
    } else if hsl.l > BACKGROUND_MIN_LIGHTNESS || hsl.s < BACKGROUND_MAX_SATURATION {
        ColorCategory::Background
    } else {
        ColorCategory::Accent
    }
}

/// The immutable set of colors observed in one document.
///
/// Built once per scan from the sampler's deduplicated list; `all`
/// preserves first-observed order, and the three buckets preserve the
/// same relative order within themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorSet {
    text: Vec<RawColor>,
    background: Vec<RawColor>,
    accent: Vec<RawColor>,
    all: Vec<RawColor>,
}

impl ColorSet {
    /// Bucket a deduplicated color list into a set.
    pub fn from_colors(colors: Vec<RawColor>) -> Self {
        let mut set = Self::default();
        for color in colors {
            match categorize(&color) {
                ColorCategory::Text => set.text.push(color.clone()),
                ColorCategory::Background => set.background.push(color.clone()),
                ColorCategory::Accent => set.accent.push(color.clone()),
            }
            set.all.push(color);
        }
        set
    }

    /// Colors classified as text.
    pub fn text(&self) -> &[RawColor] {
        &self.text
    }

    /// Colors classified as background.
    pub fn background(&self) -> &[RawColor] {
        &self.background
    }

    /// Colors classified as accent.
    pub fn accent(&self) -> &[RawColor] {
        &self.accent
    }

    /// Every observed color, deduplicated, in first-observed order.
    pub fn all(&self) -> &[RawColor] {
        &self.all
    }

    /// True when the scan found no colors at all.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Whether a candidate value was actually observed in the source.
    pub fn contains(&self, color: &RawColor) -> bool {
        self.all.contains(color)
    }
}
