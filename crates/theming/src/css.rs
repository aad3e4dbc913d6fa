//! CSS custom-property output.
//!
//! Generated 1:1 from the validated artifacts: one `--pdf-<role>-color`
//! per theme role and one `--pdf-<role>-font` per font role, each
//! declared `!important` so the reconstructed theme overrides the
//! consuming site's default stylesheet rules.

use crate::fonts::{FontRole, FontSystem};
use crate::theme::{ColorRole, Theme};

/// CSS generic family keywords, emitted unquoted.
const GENERIC_FAMILIES: [&str; 5] = ["sans-serif", "serif", "monospace", "cursive", "fantasy"];

/// Render the theme and font system as a `:root` custom-property block.
pub fn theme_css(theme: &Theme, fonts: &FontSystem) -> String {
    let mut out = String::from(":root {\n");

    for role in ColorRole::ALL {
        out.push_str(&format!(
            "  --pdf-{}-color: {} !important;\n",
            role.css_name(),
            theme.get(role)
        ));
    }

    for role in FontRole::ALL {
        out.push_str(&format!(
            "  --pdf-{}-font: {} !important;\n",
            role.css_name(),
            css_family(fonts.get(role))
        ));
    }

    out.push_str("}\n");
    out
}

/// Quote concrete family names; generic keywords stay bare.
fn css_family(family: &str) -> String {
    if GENERIC_FAMILIES.contains(&family) {
        family.to_string()
    } else {
        format!("\"{family}\"")
    }
}
