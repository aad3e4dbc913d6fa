//! The FontSystem artifact and font role assignment.

use serde::{Deserialize, Serialize};

use extraction::FontSet;

use crate::defaults::default_font_system;

/// The eight font roles a document's typography maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    /// Section headings.
    Heading,
    /// Body copy.
    Body,
    /// Fixed-width text.
    Mono,
    /// Document title.
    Title,
    /// Secondary headings.
    Subtitle,
    /// Buttons and controls.
    Button,
    /// Navigation chrome.
    Nav,
    /// Code blocks.
    Code,
}

/// Broad grouping used by assignment and validation precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    /// Display roles that prefer a sans-serif face.
    HeadingLike,
    /// Reading roles that prefer a serif face.
    BodyLike,
    /// Fixed-width roles.
    MonoLike,
}

impl FontRole {
    /// Every role, in declaration order.
    pub const ALL: [FontRole; 8] = [
        FontRole::Heading,
        FontRole::Body,
        FontRole::Mono,
        FontRole::Title,
        FontRole::Subtitle,
        FontRole::Button,
        FontRole::Nav,
        FontRole::Code,
    ];

    /// The precedence group this role belongs to.
    pub fn kind(self) -> RoleKind {
        match self {
            FontRole::Heading
            | FontRole::Title
            | FontRole::Subtitle
            | FontRole::Button
            | FontRole::Nav => RoleKind::HeadingLike,
            FontRole::Body => RoleKind::BodyLike,
            FontRole::Mono | FontRole::Code => RoleKind::MonoLike,
        }
    }

    /// Name used for CSS custom properties.
    pub fn css_name(self) -> &'static str {
        match self {
            FontRole::Heading => "heading",
            FontRole::Body => "body",
            FontRole::Mono => "mono",
            FontRole::Title => "title",
            FontRole::Subtitle => "subtitle",
            FontRole::Button => "button",
            FontRole::Nav => "nav",
            FontRole::Code => "code",
        }
    }
}

/// A complete font system reconstructed from a document.
///
/// After validation every role value is a [`FontSet`] key (or a default
/// generic family when the scan found no fonts); `all_fonts` lists the
/// keys the roles were validated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSystem {
    /// Section headings.
    pub heading: String,
    /// Body copy.
    pub body: String,
    /// Fixed-width text.
    pub mono: String,
    /// Document title.
    pub title: String,
    /// Secondary headings.
    pub subtitle: String,
    /// Buttons and controls.
    pub button: String,
    /// Navigation chrome.
    pub nav: String,
    /// Code blocks.
    pub code: String,
    /// How the roles were inferred.
    pub description: String,
    /// Every font observed in the source document.
    pub all_fonts: Vec<String>,
}

impl FontSystem {
    /// Read a role's value.
    pub fn get(&self, role: FontRole) -> &str {
        match role {
            FontRole::Heading => &self.heading,
            FontRole::Body => &self.body,
            FontRole::Mono => &self.mono,
            FontRole::Title => &self.title,
            FontRole::Subtitle => &self.subtitle,
            FontRole::Button => &self.button,
            FontRole::Nav => &self.nav,
            FontRole::Code => &self.code,
        }
    }

    /// Replace a role's value.
    pub fn set(&mut self, role: FontRole, family: String) {
        match role {
            FontRole::Heading => self.heading = family,
            FontRole::Body => self.body = family,
            FontRole::Mono => self.mono = family,
            FontRole::Title => self.title = family,
            FontRole::Subtitle => self.subtitle = family,
            FontRole::Button => self.button = family,
            FontRole::Nav => self.nav = family,
            FontRole::Code => self.code = family,
        }
    }
}

/// Infer the eight font roles from the observed font set.
///
/// When per-font size data exists, the largest-size font takes heading
/// and the most-used other font takes body. Without size data the
/// assignment falls back to family characteristics: a sans-serif face
/// for heading, a serif face for body. A single observed font fills
/// every role; an empty set yields the default generic families.
pub fn assign_font_roles(set: &FontSet) -> FontSystem {
    if set.is_empty() {
        return default_font_system().clone();
    }

    let names = set.names();
    let first = names[0].clone();

    if names.len() == 1 {
        return FontSystem {
            heading: first.clone(),
            body: first.clone(),
            mono: first.clone(),
            title: first.clone(),
            subtitle: first.clone(),
            button: first.clone(),
            nav: first.clone(),
            code: first.clone(),
            description: format!("Single font \"{first}\" used for all roles"),
            all_fonts: names,
        };
    }

    let hints = set.roles();

    let heading = hints
        .heading
        .clone()
        .or_else(|| {
            set.fonts()
                .iter()
                .find(|f| f.is_sans_serif)
                .map(|f| f.name.clone())
        })
        .unwrap_or_else(|| first.clone());

    let body = hints
        .body
        .clone()
        .or_else(|| {
            set.fonts()
                .iter()
                .find(|f| f.is_serif && f.name != heading)
                .map(|f| f.name.clone())
        })
        .or_else(|| names.iter().find(|n| **n != heading).cloned())
        .unwrap_or_else(|| heading.clone());

    let mono = hints.mono.clone().unwrap_or_else(|| body.clone());

    let description = if hints.heading.is_some() {
        format!("Roles ranked by observed size and usage across {} fonts", names.len())
    } else {
        format!("Roles inferred from family characteristics of {} fonts", names.len())
    };

    FontSystem {
        title: heading.clone(),
        subtitle: heading.clone(),
        button: heading.clone(),
        nav: heading.clone(),
        code: mono.clone(),
        heading,
        body,
        mono,
        description,
        all_fonts: names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{DEFAULT_MONO_FAMILY, DEFAULT_SANS_FAMILY};
    use extraction::{FontSampler, PageContent, TextRun};

    fn sampled(runs: Vec<(&str, f64, usize)>) -> FontSet {
        let mut pages: Vec<PageContent> = Vec::new();
        for (name, size, page) in runs {
            if let Some(p) = pages.iter_mut().find(|p| p.page == page) {
                p.text_runs.push(TextRun::new(name, size, "x"));
            } else {
                pages.push(PageContent::new(page, "").with_run(TextRun::new(name, size, "x")));
            }
        }
        FontSampler::new().sample(&pages)
    }

    #[test]
    fn test_size_data_ranks_heading_and_body() {
        let set = sampled(vec![
            ("Arial-Bold", 28.0, 1),
            ("Georgia", 11.0, 1),
            ("Georgia", 11.0, 2),
        ]);
        let system = assign_font_roles(&set);
        assert_eq!(system.heading, "Arial-Bold");
        assert_eq!(system.body, "Georgia");
        assert_eq!(system.title, "Arial-Bold");
        assert_eq!(system.code, system.mono);
    }

    #[test]
    fn test_family_fallback_without_sizes() {
        // Zero sizes carry no ranking signal, so families decide.
        let set = sampled(vec![("Georgia", 0.0, 1), ("Arial", 0.0, 1)]);
        let system = assign_font_roles(&set);
        assert_eq!(system.heading, "Arial");
        assert_eq!(system.body, "Georgia");
    }

    #[test]
    fn test_single_font_fills_every_role() {
        let set = sampled(vec![("Helvetica", 12.0, 1)]);
        let system = assign_font_roles(&set);
        for role in FontRole::ALL {
            assert_eq!(system.get(role), "Helvetica");
        }
    }

    #[test]
    fn test_mono_hint_flows_to_code() {
        let set = sampled(vec![
            ("Arial", 24.0, 1),
            ("Georgia", 11.0, 1),
            ("Courier", 10.0, 1),
        ]);
        let system = assign_font_roles(&set);
        assert_eq!(system.mono, "Courier");
        assert_eq!(system.code, "Courier");
    }

    #[test]
    fn test_empty_set_yields_defaults() {
        let system = assign_font_roles(&FontSet::default());
        assert_eq!(system.heading, DEFAULT_SANS_FAMILY);
        assert_eq!(system.mono, DEFAULT_MONO_FAMILY);
    }

    #[test]
    fn test_all_fonts_lists_every_key() {
        let set = sampled(vec![("Arial", 24.0, 1), ("Georgia", 11.0, 1)]);
        let system = assign_font_roles(&set);
        assert_eq!(system.all_fonts, vec!["Arial", "Georgia"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let system = assign_font_roles(&FontSet::default());
        let json = serde_json::to_value(&system).unwrap();
        assert!(json.get("allFonts").is_some());
        assert!(json.get("all_fonts").is_none());
    }
}
