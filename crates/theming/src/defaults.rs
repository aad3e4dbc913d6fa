//! Process-wide fallback constants.
//!
//! These are the documented values the engine emits when extraction
//! finds nothing. They live here once — every fallback path goes through
//! these accessors instead of re-literal-ing the values.

use std::sync::OnceLock;

use color_science::RawColor;
use extraction::ColorSet;

use crate::fonts::FontSystem;
use crate::palette::synthesize_theme;
use crate::theme::Theme;

/// Default primary when no accent color was extracted (`#3366CC`,
/// stored in RawColor's normalized lowercase form).
pub const DEFAULT_PRIMARY: &str = "#3366cc";

/// Default background when no background color was extracted.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Default text when no text color was extracted.
pub const DEFAULT_TEXT: &str = "#000000";

/// Generic family for heading-like roles when no fonts were extracted.
pub const DEFAULT_SANS_FAMILY: &str = "sans-serif";

/// Generic family for body-like roles when no fonts were extracted.
pub const DEFAULT_SERIF_FAMILY: &str = "serif";

/// Generic family for mono-like roles when no fonts were extracted.
pub const DEFAULT_MONO_FAMILY: &str = "monospace";

fn raw(hex: &str) -> RawColor {
    // The defaults above are well-formed by inspection; an unparseable
    // constant would be a build-time mistake, surfaced loudly in tests.
    RawColor::parse(hex).unwrap_or_else(|| RawColor::from_rgb(color_science::Rgb::new(0, 0, 0)))
}

/// The documented default triad as a [`ColorSet`]: text `#000000`,
/// background `#ffffff`, accent `#3366cc`.
pub fn default_color_set() -> ColorSet {
    ColorSet::from_colors(vec![
        raw(DEFAULT_TEXT),
        raw(DEFAULT_BACKGROUND),
        raw(DEFAULT_PRIMARY),
    ])
}

/// The default theme: the documented triad run through the standard
/// synthesis rules. Computed once per process.
pub fn default_theme() -> &'static Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    THEME.get_or_init(|| {
        let mut theme = synthesize_theme(&default_color_set());
        theme.description =
            "Default palette: no colors could be extracted from the source document".to_string();
        theme
    })
}

/// The default font system: generic families per role group. Computed
/// once per process.
pub fn default_font_system() -> &'static FontSystem {
    static FONTS: OnceLock<FontSystem> = OnceLock::new();
    FONTS.get_or_init(|| FontSystem {
        heading: DEFAULT_SANS_FAMILY.to_string(),
        body: DEFAULT_SERIF_FAMILY.to_string(),
        mono: DEFAULT_MONO_FAMILY.to_string(),
        title: DEFAULT_SANS_FAMILY.to_string(),
        subtitle: DEFAULT_SANS_FAMILY.to_string(),
        button: DEFAULT_SANS_FAMILY.to_string(),
        nav: DEFAULT_SANS_FAMILY.to_string(),
        code: DEFAULT_MONO_FAMILY.to_string(),
        description: "Default font system: no fonts could be extracted from the source document"
            .to_string(),
        all_fonts: vec![
            DEFAULT_SANS_FAMILY.to_string(),
            DEFAULT_SERIF_FAMILY.to_string(),
            DEFAULT_MONO_FAMILY.to_string(),
        ],
    })
}
