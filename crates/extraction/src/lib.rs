//! Content-stream style mining for pdf-prism
//!
//! This crate scans the raw per-page content handed over by the document
//! decoder and turns it into the two immutable inputs of the theming
//! layer: a [`ColorSet`] (observed colors bucketed into text, background,
//! and accent) and a [`FontSet`] (observed fonts with inferred
//! characteristics and usage statistics).
//!
//! Extraction is structural only: it reads color operators and text-run
//! metadata out of the content stream. It never rasterizes pages or
//! samples pixels.
//!
//! # Modules
//!
//! - [`content`] - Raw per-page input records from the decoder
//! - [`color_sampler`] - Color operator and literal scanning
//! - [`color_set`] - Lightness/saturation bucketing into a [`ColorSet`]
//! - [`font_sampler`] - Font identity, characteristics, and usage mining
//!
//! Malformed tokens that match an extraction pattern but fail to parse
//! are skipped with a debug log; extraction itself never fails. An empty
//! result is a documented condition the synthesizer recovers from with
//! built-in defaults, not an error.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color_sampler;
pub mod color_set;
pub mod content;
pub mod font_sampler;

pub use color_sampler::ColorSampler;
pub use color_set::{categorize, ColorCategory, ColorSet};
pub use content::{PageContent, TextRun};
pub use font_sampler::{FontSampler, FontSet, FontUsage, FontWeight, RawFont, RoleHints};

/// Errors raised while decoding individual style tokens.
///
/// These never escape a sampling pass — a token that fails to decode is
/// skipped and logged — but they carry the diagnostic detail for those
/// logs.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// A token matched a color pattern but did not decode to a color.
    #[error("Malformed color token: {0}")]
    MalformedColorToken(String),

    /// A numeric operand was outside the range its operator allows.
    #[error("Color operand out of range in token: {0}")]
    OperandOutOfRange(String),
}

/// Result type for token decoding.
pub type Result<T> = std::result::Result<T, ExtractionError>;
