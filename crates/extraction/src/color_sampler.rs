//! Color mining from raw content streams.
//!
//! Two families of patterns are applied to each page:
//!
//! - Textual literals: `#rrggbb` / `#rgb` hex, `rgb(r,g,b)`, and
//!   `rgba(r,g,b,a)` (alpha ignored).
//! - Content-stream operators: `r g b rg|RG` RGB fill/stroke with
//!   operands in `[0,1]`, and `c m y k k|K` CMYK converted via
//!   `channel = 255 * (1 - x) * (1 - k)`.
//!
//! Results are normalized to lowercase `#rrggbb` and deduplicated in
//! first-observed order across the whole document. A token that matches
//! a pattern but fails to decode is skipped, never fatal.

use std::collections::HashSet;

use regex::Regex;
use tracing::debug;

use color_science::{RawColor, Rgb};

use crate::content::PageContent;
use crate::{ExtractionError, Result};

/// Scans page content for color values.
///
/// Patterns are compiled once at construction; the sampler is stateless
/// across calls and can be reused for any number of documents.
pub struct ColorSampler {
    hex: Regex,
    rgb_fn: Regex,
    rgba_fn: Regex,
    rgb_op: Regex,
    cmyk_op: Regex,
}

impl ColorSampler {
    /// Compile the extraction patterns.
    pub fn new() -> Self {
        Self {
            hex: Regex::new(r"#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b").expect("hardcoded pattern"),
            rgb_fn: Regex::new(r"rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)")
                .expect("hardcoded pattern"),
            rgba_fn: Regex::new(
                r"rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d*\.?\d+)\s*\)",
            )
            .expect("hardcoded pattern"),
            rgb_op: Regex::new(r"(\d*\.?\d+)\s+(\d*\.?\d+)\s+(\d*\.?\d+)\s+(rg|RG)\b")
                .expect("hardcoded pattern"),
            cmyk_op: Regex::new(
                r"(\d*\.?\d+)\s+(\d*\.?\d+)\s+(\d*\.?\d+)\s+(\d*\.?\d+)\s+(k|K)\b",
            )
            .expect("hardcoded pattern"),
        }
    }

    /// Sample every page and return the deduplicated colors in
    /// first-observed stream order.
    pub fn sample(&self, pages: &[PageContent]) -> Vec<RawColor> {
        let mut seen = HashSet::new();
        let mut colors = Vec::new();

        for page in pages {
            for color in self.sample_stream(&page.raw_stream) {
                if seen.insert(color.clone()) {
                    colors.push(color);
                }
            }
        }

        colors
    }

    /// Sample a single stream, in match order.
    ///
    /// All five patterns run over the stream; their matches are merged by
    /// byte offset so the result follows the order the document painted
    /// its colors in.
    pub fn sample_stream(&self, stream: &str) -> Vec<RawColor> {
        let mut matches: Vec<(usize, RawColor)> = Vec::new();

        for caps in self.hex.captures_iter(stream) {
            let token = &caps[0];
            match decode_hex(token) {
                Ok(color) => matches.push((caps.get(0).map_or(0, |m| m.start()), color)),
                Err(err) => debug!("skipping color token: {err}"),
            }
        }

        for caps in self.rgb_fn.captures_iter(stream) {
            match decode_rgb_fn(&caps[0], &caps[1], &caps[2], &caps[3]) {
                Ok(color) => matches.push((caps.get(0).map_or(0, |m| m.start()), color)),
                Err(err) => debug!("skipping color token: {err}"),
            }
        }

        for caps in self.rgba_fn.captures_iter(stream) {
            // Alpha (capture 4) is ignored by design.
            match decode_rgb_fn(&caps[0], &caps[1], &caps[2], &caps[3]) {
                Ok(color) => matches.push((caps.get(0).map_or(0, |m| m.start()), color)),
                Err(err) => debug!("skipping color token: {err}"),
            }
        }

        for caps in self.rgb_op.captures_iter(stream) {
            match decode_rgb_op(&caps[0], &caps[1], &caps[2], &caps[3]) {
                Ok(color) => matches.push((caps.get(0).map_or(0, |m| m.start()), color)),
                Err(err) => debug!("skipping color token: {err}"),
            }
        }

        for caps in self.cmyk_op.captures_iter(stream) {
            match decode_cmyk_op(&caps[0], &caps[1], &caps[2], &caps[3], &caps[4]) {
                Ok(color) => matches.push((caps.get(0).map_or(0, |m| m.start()), color)),
                Err(err) => debug!("skipping color token: {err}"),
            }
        }

        matches.sort_by_key(|(start, _)| *start);
        matches.into_iter().map(|(_, color)| color).collect()
    }
}

impl Default for ColorSampler {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Token Decoding
// =============================================================================

fn decode_hex(token: &str) -> Result<RawColor> {
    RawColor::parse(token).ok_or_else(|| ExtractionError::MalformedColorToken(token.to_string()))
}

fn decode_rgb_fn(token: &str, r: &str, g: &str, b: &str) -> Result<RawColor> {
    let parse = |s: &str| -> Result<u8> {
        s.parse::<u16>()
            .ok()
            .filter(|v| *v <= 255)
            .map(|v| v as u8)
            .ok_or_else(|| ExtractionError::OperandOutOfRange(token.to_string()))
    };
    Ok(RawColor::from_rgb(Rgb::new(parse(r)?, parse(g)?, parse(b)?)))
}

fn decode_rgb_op(token: &str, r: &str, g: &str, b: &str) -> Result<RawColor> {
    let r = unit_operand(token, r)?;
    let g = unit_operand(token, g)?;
    let b = unit_operand(token, b)?;
    Ok(RawColor::from_rgb(Rgb::new(
        scale(r),
        scale(g),
        scale(b),
    )))
}

fn decode_cmyk_op(token: &str, c: &str, m: &str, y: &str, k: &str) -> Result<RawColor> {
    let c = unit_operand(token, c)?;
    let m = unit_operand(token, m)?;
    let y = unit_operand(token, y)?;
    let k = unit_operand(token, k)?;
    Ok(RawColor::from_rgb(Rgb::new(
        scale((1.0 - c) * (1.0 - k)),
        scale((1.0 - m) * (1.0 - k)),
        scale((1.0 - y) * (1.0 - k)),
    )))
}

/// Parse a numeric operand that must lie in `[0, 1]`.
fn unit_operand(token: &str, operand: &str) -> Result<f64> {
    operand
        .parse::<f64>()
        .ok()
        .filter(|v| (0.0..=1.0).contains(v))
        .ok_or_else(|| ExtractionError::OperandOutOfRange(token.to_string()))
}

fn scale(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
