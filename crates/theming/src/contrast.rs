//! WCAG AA contrast repair.
//!
//! This pass runs after strict validation, and is the one place the
//! engine may leave the extracted set: an unreadable theme is worse than
//! an unfaithful one. Text falls back to pure black or white; primary is
//! nudged by a lightness shift.

use tracing::warn;

use color_science::{contrast_ratio, RawColor, Rgb};

use crate::theme::Theme;

/// WCAG AA minimum for normal text.
pub const MIN_TEXT_CONTRAST: f64 = 4.5;

/// Minimum for primary-on-background UI elements.
pub const MIN_PRIMARY_CONTRAST: f64 = 3.0;

/// How far primary's lightness is shifted when it fails its minimum.
const PRIMARY_LIGHTNESS_SHIFT: f64 = 30.0;

/// Adjust `text` and `primary` until they meet their contrast minimums
/// against `background`, then refresh the theme's contrast metadata.
///
/// Text below 4.5:1 is replaced with pure black or white, whichever
/// contrasts more — a readability-over-fidelity override that may leave
/// the extracted set. Primary below 3:1 has its lightness shifted away
/// from the background (darker on light backgrounds, lighter on dark
/// ones). A minimum still unmet afterwards is logged, never raised.
pub fn enforce_contrast(theme: &mut Theme) {
    let background = theme.background.rgb();

    let text_ratio = contrast_ratio(theme.text.rgb(), background);
    if text_ratio < MIN_TEXT_CONTRAST {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        let replacement = if contrast_ratio(black, background) >= contrast_ratio(white, background)
        {
            black
        } else {
            white
        };
        warn!(
            measured = text_ratio,
            replacement = %RawColor::from_rgb(replacement),
            "text/background contrast below AA; replacing text"
        );
        theme.text = RawColor::from_rgb(replacement);
    }

    let primary_ratio = contrast_ratio(theme.primary.rgb(), background);
    if primary_ratio < MIN_PRIMARY_CONTRAST {
        let hsl = theme.primary.hsl();
        let shifted = if theme.background.luminance() > 0.5 {
            hsl.lighten(-PRIMARY_LIGHTNESS_SHIFT)
        } else {
            hsl.lighten(PRIMARY_LIGHTNESS_SHIFT)
        };
        theme.primary = RawColor::from_hsl(shifted);

        let adjusted = contrast_ratio(theme.primary.rgb(), background);
        if adjusted < MIN_PRIMARY_CONTRAST {
            warn!(
                measured = adjusted,
                "primary/background contrast still below minimum after adjustment"
            );
        }
    }

    let final_ratio = contrast_ratio(theme.text.rgb(), background);
    theme.contrast = format!("Text on background measures {final_ratio:.2}:1");
    theme.accessibility = if final_ratio >= MIN_TEXT_CONTRAST {
        "Meets WCAG AA (4.5:1) for normal text".to_string()
    } else {
        "Below WCAG AA even after adjustment".to_string()
    };
}
