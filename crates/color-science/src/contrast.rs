//! WCAG relative luminance and contrast ratio.
//!
//! These are the W3C-defined formulas; the 4.5:1 AA threshold checks in
//! the theming layer depend on them verbatim.

use crate::space::Rgb;

/// Relative luminance of an sRGB color, per WCAG 2.x.
///
/// Each channel is gamma-corrected
/// (`c <= 0.03928 ? c/12.92 : ((c+0.055)/1.055)^2.4`) and the result is
/// the weighted sum `0.2126 R + 0.7152 G + 0.0722 B`, in `[0, 1]`.
pub fn relative_luminance(color: Rgb) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`; symmetric in its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}
