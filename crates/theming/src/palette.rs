//! Palette synthesis: derive a complete candidate theme from the
//! extracted color set.
//!
//! Directly observed colors fill their roles where possible; missing
//! roles are derived with HSL transforms (hue rotation, lightness
//! shifts) off the primary and text anchors. Status roles always start
//! from fixed reference hues — they are not document-derived; the
//! validator may later swap them for extracted colors in matching hue
//! bands.

use color_science::{contrast_ratio, Hsl, RawColor};
use extraction::ColorSet;

use crate::defaults::{default_theme, DEFAULT_BACKGROUND, DEFAULT_PRIMARY, DEFAULT_TEXT};
use crate::theme::Theme;

// Lightness anchors shared with the categorizer's view of the world.
const LIGHT_BACKGROUND_MIN: f64 = 85.0;
const DARK_TEXT_MAX: f64 = 30.0;

// Muted text derivation: lighten by 30, but never past 60.
const TEXT_SECONDARY_SHIFT: f64 = 30.0;
const TEXT_SECONDARY_MAX_LIGHTNESS: f64 = 60.0;

// Border derivation off primary.
const BORDER_LIGHTNESS: f64 = 85.0;

// Fixed reference hues for the status roles (h, s, l).
const SUCCESS_REFERENCE: (f64, f64, f64) = (120.0, 70.0, 45.0);
const WARNING_REFERENCE: (f64, f64, f64) = (45.0, 90.0, 50.0);
const ERROR_REFERENCE: (f64, f64, f64) = (0.0, 70.0, 50.0);
const INFO_REFERENCE: (f64, f64, f64) = (210.0, 70.0, 45.0);

/// Synthesize a candidate theme from the extracted colors.
///
/// An entirely empty set yields the documented default theme verbatim.
/// The result is a candidate: it still goes through the strict validator
/// and the contrast repair pass before being emitted.
pub fn synthesize_theme(set: &ColorSet) -> Theme {
    if set.is_empty() {
        return default_theme().clone();
    }

    let primary = set
        .accent()
        .first()
        .or_else(|| set.text().first())
        .or_else(|| set.all().first())
        .cloned()
        .unwrap_or_else(|| raw(DEFAULT_PRIMARY));

    let background = set
        .background()
        .first()
        .or_else(|| set.all().iter().find(|c| c.hsl().l > LIGHT_BACKGROUND_MIN))
        .cloned()
        .unwrap_or_else(|| raw(DEFAULT_BACKGROUND));

    let text = set
        .text()
        .first()
        .or_else(|| set.all().iter().find(|c| c.hsl().l < DARK_TEXT_MAX))
        .cloned()
        .unwrap_or_else(|| raw(DEFAULT_TEXT));

    let secondary = RawColor::from_hsl(primary.hsl().rotate(30.0));

    // A second observed accent beats the derived complementary.
    let accent = set
        .accent()
        .get(1)
        .cloned()
        .unwrap_or_else(|| RawColor::from_hsl(primary.hsl().rotate(180.0)));

    let text_secondary = {
        let hsl = text.hsl();
        let lifted = (hsl.l + TEXT_SECONDARY_SHIFT).min(TEXT_SECONDARY_MAX_LIGHTNESS);
        RawColor::from_hsl(hsl.with_lightness(lifted))
    };

    let border = {
        let hsl = primary.hsl();
        RawColor::from_hsl(hsl.with_saturation(hsl.s / 2.0).with_lightness(BORDER_LIGHTNESS))
    };

    let ratio = contrast_ratio(text.rgb(), background.rgb());
    let accessibility = if ratio >= 4.5 {
        "Meets WCAG AA (4.5:1) for normal text".to_string()
    } else {
        "Below WCAG AA; the contrast repair pass will adjust the text color".to_string()
    };

    Theme {
        secondary,
        accent,
        text_secondary,
        border,
        success: status(SUCCESS_REFERENCE),
        warning: status(WARNING_REFERENCE),
        error: status(ERROR_REFERENCE),
        info: status(INFO_REFERENCE),
        description: format!(
            "Palette synthesized from {} colors extracted from the source document",
            set.all().len()
        ),
        harmony: format!(
            "Analogous secondary (+30 deg) and complementary accent (+180 deg) around primary {primary}"
        ),
        contrast: format!("Text on background measures {ratio:.2}:1"),
        accessibility,
        all_colors: set.all().to_vec(),
        primary,
        background,
        text,
    }
}

fn status((h, s, l): (f64, f64, f64)) -> RawColor {
    RawColor::from_hsl(Hsl::new(h, s, l))
}

fn raw(hex: &str) -> RawColor {
    RawColor::parse(hex).unwrap_or_else(|| RawColor::from_rgb(color_science::Rgb::new(0, 0, 0)))
}
