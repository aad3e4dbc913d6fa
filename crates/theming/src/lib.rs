//! Theme synthesis and validation for pdf-prism
//!
//! This crate turns the extraction layer's [`ColorSet`]/[`FontSet`] into
//! the engine's two output artifacts — a [`Theme`] (11 semantic color
//! roles) and a [`FontSystem`] (8 font roles) — and enforces the two
//! guarantees the rest of the system relies on:
//!
//! - **Closure**: after [`validate_theme`]/[`validate_font_system`],
//!   every emitted value is a member of the extracted set (or of the
//!   documented defaults when extraction found nothing). Externally
//!   suggested themes go through the exact same function as internally
//!   synthesized ones.
//! - **Readability**: after [`enforce_contrast`], text/background meets
//!   WCAG AA (4.5:1) and primary/background meets 3:1, adjusting colors
//!   when necessary — a deliberate readability-over-fidelity override
//!   applied after closure validation.
//!
//! # Modules
//!
//! - [`theme`] - The Theme artifact and its role enumeration
//! - [`fonts`] - The FontSystem artifact and role assignment
//! - [`palette`] - Palette synthesis from a ColorSet
//! - [`validator`] - Strict set-membership validation
//! - [`contrast`] - WCAG AA repair pass
//! - [`defaults`] - Process-wide fallback constants
//! - [`css`] - CSS custom-property output
//!
//! [`ColorSet`]: extraction::ColorSet
//! [`FontSet`]: extraction::FontSet

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contrast;
pub mod css;
pub mod defaults;
pub mod fonts;
pub mod palette;
pub mod theme;
pub mod validator;

pub use contrast::enforce_contrast;
pub use css::theme_css;
pub use defaults::{default_font_system, default_theme};
pub use fonts::{assign_font_roles, FontRole, FontSystem};
pub use palette::synthesize_theme;
pub use theme::{ColorRole, Theme};
pub use validator::{validate_font_system, validate_theme};
