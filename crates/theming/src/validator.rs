//! Strict set-membership validation.
//!
//! The closure contract: every role value in an emitted theme or font
//! system is an element of the extracted set. Candidates can come from
//! the internal synthesizer or from an external suggestion — both flow
//! through the same functions here; a value that is not a member is
//! rewritten by a deterministic fallback precedence, never trusted.

use tracing::warn;

use color_science::RawColor;
use extraction::{ColorSet, FontSet};

use crate::defaults::{default_font_system, default_theme};
use crate::fonts::{FontRole, FontSystem, RoleKind};
use crate::theme::{ColorRole, Theme};

// Status-role hue bands (degrees). Red wraps around zero.
const GREEN_BAND: (f64, f64) = (90.0, 150.0);
const YELLOW_BAND: (f64, f64) = (30.0, 60.0);
const BLUE_BAND: (f64, f64) = (180.0, 240.0);
const RED_LOW_BAND: (f64, f64) = (0.0, 15.0);
const RED_HIGH_BAND: (f64, f64) = (345.0, 360.0);

// Hue is meaningless for near-achromatic colors; band matching skips
// anything below this saturation so black/white never reads as "red".
const BAND_MIN_SATURATION: f64 = 15.0;

// =============================================================================
// Theme Validation
// =============================================================================

/// Rewrite every theme role that is not a member of the extracted set.
///
/// Replacement precedence per role: role-specific preferred pick, then a
/// hue-band match for status roles, then the first element of the role's
/// categorized bucket, then the first extracted color. `all_colors` is
/// normalized to exactly the extracted set. An empty set falls back to
/// the default theme unmodified.
pub fn validate_theme(mut candidate: Theme, set: &ColorSet) -> Theme {
    if set.is_empty() {
        return default_theme().clone();
    }

    for role in ColorRole::ALL {
        if set.contains(candidate.get(role)) {
            continue;
        }
        let replacement = select_replacement(role, set);
        warn!(
            role = role.css_name(),
            rejected = %candidate.get(role),
            replacement = %replacement,
            "theme color outside the extracted set; replaced"
        );
        candidate.set(role, replacement);
    }

    candidate.all_colors = set.all().to_vec();
    candidate
}

fn select_replacement(role: ColorRole, set: &ColorSet) -> RawColor {
    if let Some(color) = preferred_pick(role, set) {
        return color;
    }
    if role.is_status() {
        if let Some(color) = hue_band_match(role, set.all()) {
            return color;
        }
    }
    if let Some(color) = relevant_bucket(role, set).first() {
        return color.clone();
    }
    // The set is non-empty here, so `all` always has a first element.
    set.all()
        .first()
        .cloned()
        .unwrap_or_else(|| default_theme().primary.clone())
}

/// Role-specific preferred subset (precedence step 1).
fn preferred_pick(role: ColorRole, set: &ColorSet) -> Option<RawColor> {
    match role {
        ColorRole::Text => darkest(set.text()),
        ColorRole::Background => lightest(set.background()),
        ColorRole::TextSecondary => nth_darkest(set.text(), 1),
        ColorRole::Primary | ColorRole::Accent => most_saturated(set.accent()),
        ColorRole::Secondary => nth_most_saturated(set.accent(), 1),
        ColorRole::Border => darkest(set.background()),
        _ => None,
    }
}

/// Bucket a role draws its step-3 fallback from.
fn relevant_bucket<'a>(role: ColorRole, set: &'a ColorSet) -> &'a [RawColor] {
    match role {
        ColorRole::Text | ColorRole::TextSecondary => set.text(),
        ColorRole::Background | ColorRole::Border => set.background(),
        _ => set.accent(),
    }
}

fn hue_band_match(role: ColorRole, all: &[RawColor]) -> Option<RawColor> {
    all.iter()
        .find(|color| {
            let hsl = color.hsl();
            hsl.s >= BAND_MIN_SATURATION && in_band(role, hsl.h)
        })
        .cloned()
}

fn in_band(role: ColorRole, hue: f64) -> bool {
    let within = |(lo, hi): (f64, f64)| hue >= lo && hue <= hi;
    match role {
        ColorRole::Success => within(GREEN_BAND),
        ColorRole::Warning => within(YELLOW_BAND),
        ColorRole::Error => within(RED_LOW_BAND) || within(RED_HIGH_BAND),
        ColorRole::Info => within(BLUE_BAND),
        _ => false,
    }
}

// =============================================================================
// Luminance / Saturation Ordering
// =============================================================================

fn darkest(colors: &[RawColor]) -> Option<RawColor> {
    colors
        .iter()
        .min_by(|a, b| a.luminance().total_cmp(&b.luminance()))
        .cloned()
}

fn lightest(colors: &[RawColor]) -> Option<RawColor> {
    colors
        .iter()
        .max_by(|a, b| a.luminance().total_cmp(&b.luminance()))
        .cloned()
}

fn nth_darkest(colors: &[RawColor], n: usize) -> Option<RawColor> {
    let mut sorted: Vec<&RawColor> = colors.iter().collect();
    sorted.sort_by(|a, b| a.luminance().total_cmp(&b.luminance()));
    sorted.get(n).map(|c| (*c).clone())
}

fn most_saturated(colors: &[RawColor]) -> Option<RawColor> {
    colors
        .iter()
        .max_by(|a, b| a.hsl().s.total_cmp(&b.hsl().s))
        .cloned()
}

fn nth_most_saturated(colors: &[RawColor], n: usize) -> Option<RawColor> {
    let mut sorted: Vec<&RawColor> = colors.iter().collect();
    sorted.sort_by(|a, b| b.hsl().s.total_cmp(&a.hsl().s));
    sorted.get(n).map(|c| (*c).clone())
}

// =============================================================================
// Font System Validation
// =============================================================================

/// Rewrite every font role that is not a key of the extracted font set.
///
/// Fallback suffixes (`", sans-serif"` and the like) are stripped before
/// comparison and never reintroduced. Replacements prefer a sans-serif
/// face for heading-like roles, a serif face for body-like roles, and a
/// monospace face for mono-like roles, then the first key. An empty set
/// falls back to the default font system.
pub fn validate_font_system(mut candidate: FontSystem, fonts: &FontSet) -> FontSystem {
    if fonts.is_empty() {
        return default_font_system().clone();
    }

    for role in FontRole::ALL {
        let stripped = strip_fallback_suffix(candidate.get(role)).to_string();
        if fonts.contains(&stripped) {
            // Store the bare family name, without any fallback suffix.
            if stripped != candidate.get(role) {
                candidate.set(role, stripped);
            }
            continue;
        }
        let replacement = select_font(role.kind(), fonts);
        warn!(
            role = role.css_name(),
            rejected = candidate.get(role),
            replacement = replacement.as_str(),
            "font outside the extracted set; replaced"
        );
        candidate.set(role, replacement);
    }

    candidate.all_fonts = fonts.names();
    candidate
}

fn strip_fallback_suffix(value: &str) -> &str {
    value
        .split(',')
        .next()
        .unwrap_or(value)
        .trim()
        .trim_matches('"')
}

fn select_font(kind: RoleKind, fonts: &FontSet) -> String {
    let preferred = fonts.fonts().iter().find(|f| match kind {
        RoleKind::HeadingLike => f.is_sans_serif,
        RoleKind::BodyLike => f.is_serif,
        RoleKind::MonoLike => f.is_monospace,
    });
    preferred
        .map(|f| f.name.clone())
        .or_else(|| fonts.names().first().cloned())
        .unwrap_or_else(|| default_font_system().body.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::synthesize_theme;
    use extraction::RawFont;

    fn color(hex: &str) -> RawColor {
        RawColor::parse(hex).unwrap()
    }

    fn triad() -> ColorSet {
        ColorSet::from_colors(vec![color("#3366cc"), color("#000000"), color("#ffffff")])
    }

    // ==========================================================================
    // Theme Closure Tests
    // ==========================================================================

    #[test]
    fn test_closure_invariant() {
        let set = triad();
        let theme = validate_theme(synthesize_theme(&set), &set);
        for role in ColorRole::ALL {
            assert!(
                set.contains(theme.get(role)),
                "{} escaped the extracted set: {}",
                role.css_name(),
                theme.get(role)
            );
        }
        assert_eq!(theme.all_colors, set.all());
    }

    #[test]
    fn test_external_primary_rewritten_to_most_saturated_accent() {
        let set = triad();
        let mut suggestion = synthesize_theme(&set);
        suggestion.primary = color("#112233");
        let validated = validate_theme(suggestion, &set);
        assert_eq!(validated.primary.as_str(), "#3366cc");
    }

    #[test]
    fn test_valid_theme_unchanged_except_all_colors() {
        let set = triad();
        let valid = validate_theme(synthesize_theme(&set), &set);
        let again = validate_theme(valid.clone(), &set);
        assert_eq!(again, valid);
    }

    #[test]
    fn test_text_prefers_darkest() {
        let set = ColorSet::from_colors(vec![
            color("#222222"),
            color("#000000"),
            color("#ffffff"),
        ]);
        let mut candidate = synthesize_theme(&set);
        candidate.text = color("#123456");
        let validated = validate_theme(candidate, &set);
        assert_eq!(validated.text.as_str(), "#000000");
    }

    #[test]
    fn test_text_secondary_prefers_second_darkest() {
        let set = ColorSet::from_colors(vec![
            color("#222222"),
            color("#000000"),
            color("#ffffff"),
        ]);
        let mut candidate = synthesize_theme(&set);
        candidate.text_secondary = color("#123456");
        let validated = validate_theme(candidate, &set);
        assert_eq!(validated.text_secondary.as_str(), "#222222");
    }

    #[test]
    fn test_status_hue_band_match() {
        // #22aa44 sits in the green band; success should claim it.
        let set = ColorSet::from_colors(vec![
            color("#3366cc"),
            color("#22aa44"),
            color("#000000"),
            color("#ffffff"),
        ]);
        let validated = validate_theme(synthesize_theme(&set), &set);
        assert_eq!(validated.success.as_str(), "#22aa44");
        // Blue band claims the primary for info.
        assert_eq!(validated.info.as_str(), "#3366cc");
    }

    #[test]
    fn test_status_ignores_achromatic_hue() {
        // Black has hue 0 but no saturation; it must not match the red band.
        let set = triad();
        let validated = validate_theme(synthesize_theme(&set), &set);
        assert_eq!(validated.error.as_str(), "#3366cc");
    }

    #[test]
    fn test_empty_set_falls_back_to_default() {
        let set = ColorSet::default();
        let validated = validate_theme(synthesize_theme(&triad()), &set);
        assert_eq!(&validated, default_theme());
    }

    #[test]
    fn test_last_resort_first_of_all() {
        // Only accent colors: background has no bucket and no preferred
        // pick, so it lands on the first extracted color.
        let set = ColorSet::from_colors(vec![color("#3366cc"), color("#cc6633")]);
        let validated = validate_theme(synthesize_theme(&set), &set);
        assert!(set.contains(&validated.background));
    }

    // ==========================================================================
    // Font Closure Tests
    // ==========================================================================

    fn two_fonts() -> FontSet {
        FontSet::from_fonts(vec![
            RawFont::from_name("Georgia"),
            RawFont::from_name("Arial"),
        ])
    }

    fn system(fonts: &FontSet) -> FontSystem {
        crate::fonts::assign_font_roles(fonts)
    }

    #[test]
    fn test_font_closure() {
        let fonts = two_fonts();
        let validated = validate_font_system(system(&fonts), &fonts);
        for role in FontRole::ALL {
            assert!(fonts.contains(validated.get(role)), "{} escaped", role.css_name());
        }
        assert_eq!(validated.all_fonts, fonts.names());
    }

    #[test]
    fn test_fallback_suffix_stripped_not_reintroduced() {
        let fonts = two_fonts();
        let mut candidate = system(&fonts);
        candidate.heading = "Arial, sans-serif".to_string();
        let validated = validate_font_system(candidate, &fonts);
        assert_eq!(validated.heading, "Arial");
    }

    #[test]
    fn test_unknown_font_replaced_by_kind() {
        let fonts = two_fonts();
        let mut candidate = system(&fonts);
        candidate.heading = "Futura".to_string();
        candidate.body = "Palatino".to_string();
        let validated = validate_font_system(candidate, &fonts);
        assert_eq!(validated.heading, "Arial");
        assert_eq!(validated.body, "Georgia");
    }

    #[test]
    fn test_mono_role_without_mono_font_takes_first_key() {
        let fonts = two_fonts();
        let mut candidate = system(&fonts);
        candidate.code = "Menlo".to_string();
        let validated = validate_font_system(candidate, &fonts);
        assert_eq!(validated.code, "Georgia");
    }

    #[test]
    fn test_empty_font_set_falls_back_to_default() {
        let fonts = FontSet::default();
        let validated = validate_font_system(system(&two_fonts()), &fonts);
        assert_eq!(&validated, default_font_system());
    }
}
