//! pdf-prism — document style extraction and theming engine
//!
//! Takes the raw per-page content a PDF decoder produces, mines it for
//! colors and fonts, and reconstructs a validated, harmonious theme for
//! reuse in a UI. The output is a [`StyleReport`]: a [`Theme`] (11
//! semantic color roles), a [`FontSystem`] (8 font roles), the immutable
//! extracted sets they were validated against, and ready-to-embed CSS
//! custom properties.
//!
//! Two guarantees hold for every report:
//!
//! - **Closure**: every theme color is a member of the extracted color
//!   set (or of the documented defaults when nothing was extracted), and
//!   every font role is a key of the extracted font set. Externally
//!   suggested themes are constrained by the same validation as
//!   internally synthesized ones.
//! - **Readability**: text/background contrast meets WCAG AA (4.5:1),
//!   with a documented readability-over-fidelity override when the
//!   source's own colors cannot get there.
//!
//! # Example
//!
//! ```rust
//! use pdf_prism::{PageContent, StyleEngine, TextRun};
//!
//! let pages = vec![PageContent::new(1, "0 0 0 rg BT ET 1 1 1 rg #3366cc")
//!     .with_run(TextRun::new("Helvetica-Bold", 24.0, "Title"))
//!     .with_run(TextRun::new("Georgia", 11.0, "Body text"))];
//!
//! let report = StyleEngine::new().extract(&pages);
//! assert!(report.colors.contains(&report.theme.primary));
//! assert!(report.css.contains("--pdf-primary-color"));
//! ```
//!
//! Each invocation is independent and deterministic; the only async
//! boundary is the optional [`StyleAnalyzer`] collaborator, awaited with
//! a timeout and never load-bearing.

#![warn(missing_docs)]
#![warn(clippy::all)]

use tracing::warn;

use analysis::{suggest_with_timeout, AnalyzerConfig, ExtractionSummary};
use extraction::{ColorSampler, FontSampler};
use theming::{
    assign_font_roles, enforce_contrast, synthesize_theme, theme_css, validate_font_system,
    validate_theme,
};

pub use analysis::{AnalysisError, StyleAnalyzer, StyleSuggestion};
pub use color_science::{Hsl, RawColor, Rgb};
pub use extraction::{ColorSet, FontSet, PageContent, TextRun};
pub use theming::{default_font_system, default_theme, ColorRole, FontRole, FontSystem, Theme};

/// Engine configuration.
///
/// The defaults reproduce the documented constants; most callers never
/// construct this.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Timeout configuration for the optional analyzer call.
    pub analyzer: AnalyzerConfig,
}

/// The engine's complete output for one document.
#[derive(Debug, Clone)]
pub struct StyleReport {
    /// Validated color theme.
    pub theme: Theme,
    /// Validated font system.
    pub fonts: FontSystem,
    /// Colors observed in the source, as bucketed by extraction.
    pub colors: ColorSet,
    /// Fonts observed in the source.
    pub font_set: FontSet,
    /// CSS custom-property block generated from the theme and fonts.
    pub css: String,
}

/// Orchestrates the extraction → synthesis → validation pipeline.
///
/// Stateless across documents: the samplers compile their patterns once
/// and every invocation works on its own sets.
pub struct StyleEngine {
    colors: ColorSampler,
    fonts: FontSampler,
    config: EngineConfig,
}

impl StyleEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            colors: ColorSampler::new(),
            fonts: FontSampler::new(),
            config,
        }
    }

    /// Run the deterministic pipeline over a document's pages.
    pub fn extract(&self, pages: &[PageContent]) -> StyleReport {
        let (color_set, font_set) = self.scan(pages);
        let theme = validate_theme(synthesize_theme(&color_set), &color_set);
        let fonts = validate_font_system(assign_font_roles(&font_set), &font_set);
        finish(theme, fonts, color_set, font_set)
    }

    /// Run the pipeline, offering an external analyzer the chance to
    /// propose the theme.
    ///
    /// The suggestion is strictly validated against the extracted sets;
    /// on analyzer error or timeout the engine logs a warning and
    /// proceeds with deterministic synthesis. The result upholds the
    /// same guarantees as [`extract`](Self::extract) either way.
    pub async fn extract_with_analyzer(
        &self,
        pages: &[PageContent],
        analyzer: &dyn StyleAnalyzer,
    ) -> StyleReport {
        let (color_set, font_set) = self.scan(pages);

        let summary = ExtractionSummary {
            colors: color_set.all().to_vec(),
            fonts: font_set.names(),
            page_count: pages.len(),
        };

        let (candidate_theme, candidate_fonts) =
            match suggest_with_timeout(analyzer, &summary, &self.config.analyzer).await {
                Ok(suggestion) => (suggestion.theme, suggestion.fonts),
                Err(err) => {
                    warn!(error = %err, "analysis unavailable; using deterministic synthesis");
                    (synthesize_theme(&color_set), assign_font_roles(&font_set))
                }
            };

        let theme = validate_theme(candidate_theme, &color_set);
        let fonts = validate_font_system(candidate_fonts, &font_set);
        finish(theme, fonts, color_set, font_set)
    }

    fn scan(&self, pages: &[PageContent]) -> (ColorSet, FontSet) {
        let colors = self.colors.sample(pages);
        (ColorSet::from_colors(colors), self.fonts.sample(pages))
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn finish(
    mut theme: Theme,
    fonts: FontSystem,
    colors: ColorSet,
    font_set: FontSet,
) -> StyleReport {
    enforce_contrast(&mut theme);
    let css = theme_css(&theme, &fonts);
    StyleReport {
        theme,
        fonts,
        colors,
        font_set,
        css,
    }
}
