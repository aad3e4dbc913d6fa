//! Color-space math for pdf-prism
//!
//! This crate provides the pure conversions and metrics every other part
//! of the engine builds on: hex/RGB/HSL conversions, relative luminance,
//! and WCAG contrast ratios.
//!
//! All functions are deterministic and side-effect free. Hue is expressed
//! in degrees `[0, 360)`; saturation and lightness as percentages
//! `[0, 100]`. The formulas are the standard ones — downstream role
//! assignment and contrast pass/fail decisions depend on exact
//! reproduction, so they are covered by round-trip tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contrast;
pub mod raw;
pub mod space;

pub use contrast::{contrast_ratio, relative_luminance};
pub use raw::RawColor;
pub use space::{Hsl, Rgb};
