//! Font mining from text-run metadata.
//!
//! The decoder reports font names as they appear in the document
//! (possibly with a `ABCDEF+` subset prefix); family, weight, and style
//! are inferred from name substrings against known foundry tokens.
//! Observed sizes and page usage are accumulated per font and distilled
//! into heading/body/mono role hints for the assigner.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::content::PageContent;

// =============================================================================
// Font Characteristics
// =============================================================================

/// Inferred font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Light or thin cuts.
    Light,
    /// Regular weight.
    #[default]
    Normal,
    /// Medium cut.
    Medium,
    /// Semibold / demibold cut.
    Semibold,
    /// Bold, black, or heavy cuts.
    Bold,
}

/// Role hint attached to a font after usage ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontUsage {
    /// Ranked as the heading font.
    Heading,
    /// Ranked as the body font.
    Body,
    /// Monospace/code font.
    Mono,
    /// No ranking information.
    #[default]
    Unknown,
}

/// One font observed in the document, with inferred characteristics and
/// accumulated usage statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFont {
    /// Display name with any subset prefix stripped.
    pub name: String,
    /// Base family (name up to the first style suffix).
    pub family: String,
    /// Name carries a serif token (and no sans token).
    pub is_serif: bool,
    /// Name carries a sans token.
    pub is_sans_serif: bool,
    /// Name carries a monospace token.
    pub is_monospace: bool,
    /// Inferred weight.
    pub weight: FontWeight,
    /// Name carries an italic/oblique token.
    pub italic: bool,
    /// Distinct rendering sizes observed, ascending.
    pub observed_sizes: Vec<f64>,
    /// Pages the font appeared on.
    pub usage_pages: BTreeSet<usize>,
    /// Role hint from usage ranking.
    pub usage: FontUsage,
}

impl RawFont {
    /// Classify a font from its reported name alone.
    pub fn from_name(reported: &str) -> Self {
        let name = strip_subset_prefix(reported).to_string();
        let lower = name.to_lowercase();

        let is_sans_serif =
            lower.contains("sans") || lower.contains("arial") || lower.contains("helvetica");
        let is_serif = !is_sans_serif
            && (lower.contains("serif") || lower.contains("times") || lower.contains("georgia"));
        let is_monospace = lower.contains("mono")
            || lower.contains("courier")
            || lower.contains("typewriter");

        // "semibold" contains "bold", so the finer cuts are checked first.
        let weight = if lower.contains("semibold") || lower.contains("demibold") {
            FontWeight::Semibold
        } else if lower.contains("bold") || lower.contains("black") || lower.contains("heavy") {
            FontWeight::Bold
        } else if lower.contains("medium") {
            FontWeight::Medium
        } else if lower.contains("light") || lower.contains("thin") {
            FontWeight::Light
        } else {
            FontWeight::Normal
        };

        let italic = lower.contains("italic") || lower.contains("oblique");

        let family = name
            .split(['-', ','])
            .next()
            .unwrap_or(&name)
            .trim()
            .to_string();

        Self {
            name,
            family,
            is_serif,
            is_sans_serif,
            is_monospace,
            weight,
            italic,
            observed_sizes: Vec::new(),
            usage_pages: BTreeSet::new(),
            usage: FontUsage::Unknown,
        }
    }

    /// Largest size this font was rendered at, if any was observed.
    pub fn max_size(&self) -> Option<f64> {
        self.observed_sizes.last().copied()
    }

    fn record(&mut self, size: f64, page: usize) {
        if size > 0.0 && !self.observed_sizes.iter().any(|s| (s - size).abs() < 0.01) {
            self.observed_sizes.push(size);
            self.observed_sizes.sort_by(|a, b| a.total_cmp(b));
        }
        self.usage_pages.insert(page);
    }
}

/// Strip a PDF subset tag (`ABCDEF+`) from a reported font name.
fn strip_subset_prefix(name: &str) -> &str {
    match name.split_once('+') {
        Some((prefix, rest))
            if prefix.len() == 6 && prefix.chars().all(|c| c.is_ascii_uppercase()) =>
        {
            rest
        }
        _ => name,
    }
}

// =============================================================================
// FontSet
// =============================================================================

/// Precomputed heading/body/mono hints from size and usage ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleHints {
    /// Font rendered at the largest observed size.
    pub heading: Option<String>,
    /// Most-used font that is not the heading font.
    pub body: Option<String>,
    /// First monospace font.
    pub mono: Option<String>,
}

/// The immutable set of fonts observed in one document, in
/// first-observed order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontSet {
    fonts: Vec<RawFont>,
    roles: RoleHints,
}

impl FontSet {
    /// Build a set from accumulated fonts, ranking role hints.
    pub fn from_fonts(mut fonts: Vec<RawFont>) -> Self {
        let roles = rank_roles(&fonts);
        for font in &mut fonts {
            font.usage = if roles.heading.as_deref() == Some(font.name.as_str()) {
                FontUsage::Heading
            } else if roles.body.as_deref() == Some(font.name.as_str()) {
                FontUsage::Body
            } else if roles.mono.as_deref() == Some(font.name.as_str()) {
                FontUsage::Mono
            } else {
                FontUsage::Unknown
            };
        }
        Self { fonts, roles }
    }

    /// All fonts, in first-observed order.
    pub fn fonts(&self) -> &[RawFont] {
        &self.fonts
    }

    /// Look up a font by its display name.
    pub fn get(&self, name: &str) -> Option<&RawFont> {
        self.fonts.iter().find(|f| f.name == name)
    }

    /// Whether the given name is a member of the set.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Every font name, in first-observed order.
    pub fn names(&self) -> Vec<String> {
        self.fonts.iter().map(|f| f.name.clone()).collect()
    }

    /// Role hints from size/usage ranking.
    pub fn roles(&self) -> &RoleHints {
        &self.roles
    }

    /// True when the scan found no fonts.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

fn rank_roles(fonts: &[RawFont]) -> RoleHints {
    // Heading: the font rendered at the largest size, when sizes exist.
    // Ties keep the first-observed font.
    let mut largest: Option<(&RawFont, f64)> = None;
    for font in fonts {
        if let Some(size) = font.max_size() {
            if largest.is_none_or(|(_, best)| size > best) {
                largest = Some((font, size));
            }
        }
    }
    let heading = largest.map(|(f, _)| f.name.clone());

    // Body: the most-used font that is not the heading font. Only
    // meaningful once a heading has been ranked.
    let body = heading.as_deref().and_then(|heading_name| {
        let mut best: Option<&RawFont> = None;
        for font in fonts.iter().filter(|f| f.name != heading_name) {
            if best.is_none_or(|b| font.usage_pages.len() > b.usage_pages.len()) {
                best = Some(font);
            }
        }
        best.map(|f| f.name.clone())
    });

    let mono = fonts
        .iter()
        .find(|f| f.is_monospace)
        .map(|f| f.name.clone());

    RoleHints {
        heading,
        body,
        mono,
    }
}

// =============================================================================
// FontSampler
// =============================================================================

/// Accumulates per-page text runs into a [`FontSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FontSampler;

impl FontSampler {
    /// Create a sampler.
    pub fn new() -> Self {
        Self
    }

    /// Scan every page's text runs.
    pub fn sample(&self, pages: &[PageContent]) -> FontSet {
        let mut fonts: Vec<RawFont> = Vec::new();

        for page in pages {
            for run in &page.text_runs {
                let name = strip_subset_prefix(&run.font_name);
                let idx = match fonts.iter().position(|f| f.name == name) {
                    Some(idx) => idx,
                    None => {
                        fonts.push(RawFont::from_name(&run.font_name));
                        fonts.len() - 1
                    }
                };
                fonts[idx].record(run.font_size, page.page);
            }
        }

        FontSet::from_fonts(fonts)
    }
}
