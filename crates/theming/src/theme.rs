//! The Theme artifact: 11 semantic color roles plus descriptive
//! metadata and the closure witness (`allColors`).

use serde::{Deserialize, Serialize};

use color_science::RawColor;

/// The eleven semantic color roles a theme assigns.
///
/// `ALL` fixes the iteration order used by validation and CSS output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    /// Main brand/action color.
    Primary,
    /// Supporting color, usually hue-adjacent to primary.
    Secondary,
    /// Emphasis color, usually hue-opposed to primary.
    Accent,
    /// Page background.
    Background,
    /// Body text.
    Text,
    /// Muted text.
    TextSecondary,
    /// Rules and outlines.
    Border,
    /// Positive status.
    Success,
    /// Caution status.
    Warning,
    /// Failure status.
    Error,
    /// Informational status.
    Info,
}

impl ColorRole {
    /// Every role, in declaration order.
    pub const ALL: [ColorRole; 11] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Text,
        ColorRole::TextSecondary,
        ColorRole::Border,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Error,
        ColorRole::Info,
    ];

    /// Status roles carry fixed reference hues and get hue-band matching
    /// during validation.
    pub fn is_status(self) -> bool {
        matches!(
            self,
            ColorRole::Success | ColorRole::Warning | ColorRole::Error | ColorRole::Info
        )
    }

    /// Kebab-case name used for CSS custom properties.
    pub fn css_name(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Background => "background",
            ColorRole::Text => "text",
            ColorRole::TextSecondary => "text-secondary",
            ColorRole::Border => "border",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Error => "error",
            ColorRole::Info => "info",
        }
    }
}

/// A complete color theme reconstructed from a document.
///
/// The metadata strings (`description`, `harmony`, `contrast`,
/// `accessibility`) are human-readable rationale for downstream display;
/// nothing consumes them programmatically. `all_colors` records the
/// extracted set the roles were validated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Main brand/action color.
    pub primary: RawColor,
    /// Supporting color.
    pub secondary: RawColor,
    /// Emphasis color.
    pub accent: RawColor,
    /// Page background.
    pub background: RawColor,
    /// Body text.
    pub text: RawColor,
    /// Muted text.
    pub text_secondary: RawColor,
    /// Rules and outlines.
    pub border: RawColor,
    /// Positive status.
    pub success: RawColor,
    /// Caution status.
    pub warning: RawColor,
    /// Failure status.
    pub error: RawColor,
    /// Informational status.
    pub info: RawColor,
    /// How the palette was derived.
    pub description: String,
    /// Hue relationship rationale.
    pub harmony: String,
    /// Text/background contrast rationale.
    pub contrast: String,
    /// Accessibility assessment.
    pub accessibility: String,
    /// Every color observed in the source document.
    pub all_colors: Vec<RawColor>,
}

impl Theme {
    /// Read a role's value.
    pub fn get(&self, role: ColorRole) -> &RawColor {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Background => &self.background,
            ColorRole::Text => &self.text,
            ColorRole::TextSecondary => &self.text_secondary,
            ColorRole::Border => &self.border,
            ColorRole::Success => &self.success,
            ColorRole::Warning => &self.warning,
            ColorRole::Error => &self.error,
            ColorRole::Info => &self.info,
        }
    }

    /// Replace a role's value.
    pub fn set(&mut self, role: ColorRole, color: RawColor) {
        match role {
            ColorRole::Primary => self.primary = color,
            ColorRole::Secondary => self.secondary = color,
            ColorRole::Accent => self.accent = color,
            ColorRole::Background => self.background = color,
            ColorRole::Text => self.text = color,
            ColorRole::TextSecondary => self.text_secondary = color,
            ColorRole::Border => self.border = color,
            ColorRole::Success => self.success = color,
            ColorRole::Warning => self.warning = color,
            ColorRole::Error => self.error = color,
            ColorRole::Info => self.info = color,
        }
    }
}
