//! The normalized color value the rest of the engine passes around.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::contrast::relative_luminance;
use crate::space::{Hsl, Rgb};

/// A normalized 6-digit lowercase hex color (`#rrggbb`).
///
/// Invariant: length 7, leading `#`, six lowercase hex digits, no alpha.
/// The invariant is established at construction — [`RawColor::parse`]
/// normalizes case and expands 3-digit shorthand, and rejects everything
/// else — so comparisons between extracted, synthesized, and suggested
/// colors are exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawColor(String);

impl RawColor {
    /// Parse and normalize a hex string.
    ///
    /// Accepts `#rrggbb` and `#rgb` in any case, with or without the
    /// leading `#`. Returns `None` for malformed input.
    pub fn parse(input: &str) -> Option<Self> {
        Rgb::from_hex(input).map(Self::from_rgb)
    }

    /// Build from an RGB value (always well-formed).
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb.to_hex())
    }

    /// Build from an HSL value via an RGB round-trip.
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_rgb(hsl.to_rgb())
    }

    /// The normalized `#rrggbb` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back to RGB channels.
    pub fn rgb(&self) -> Rgb {
        // The constructor invariant guarantees a parseable value.
        Rgb::from_hex(&self.0).unwrap_or(Rgb { r: 0, g: 0, b: 0 })
    }

    /// HSL view of this color.
    pub fn hsl(&self) -> Hsl {
        self.rgb().to_hsl()
    }

    /// WCAG relative luminance of this color.
    pub fn luminance(&self) -> f64 {
        relative_luminance(self.rgb())
    }
}

impl fmt::Display for RawColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RawColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
